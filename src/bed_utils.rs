//! Bed Display Utilities
//!
//! Maps bed state and urgency to labels and CSS classes.

use bed_lifecycle::{Bed, BedState, Transition, UrgencyLevel};

/// Tile colour classes for each bed state
pub fn bed_color(state: BedState) -> &'static str {
    match state {
        BedState::Available => "bg-green-800 hover:bg-green-600",
        BedState::Occupied => "bg-red-800 hover:bg-red-600",
        BedState::Maintenance => "bg-yellow-800 hover:bg-yellow-600",
    }
}

/// Badge colour classes for an urgency level
pub fn urgency_color(urgency: Option<UrgencyLevel>) -> &'static str {
    match urgency {
        Some(UrgencyLevel::Low) => "bg-blue-100 text-blue-800",
        Some(UrgencyLevel::Medium) => "bg-orange-100 text-orange-800",
        Some(UrgencyLevel::High) => "bg-red-100 text-red-800",
        Some(UrgencyLevel::Critical) => "bg-purple-100 text-purple-800",
        None => "bg-gray-100 text-gray-800",
    }
}

/// Patient line on an occupied tile
#[derive(Debug, Clone, PartialEq)]
pub struct PatientView {
    pub name: String,
    /// Upper-cased, e.g. "CRITICAL"
    pub urgency: String,
    pub badge_class: &'static str,
}

/// Everything a bed tile renders
#[derive(Debug, Clone, PartialEq)]
pub struct TileView {
    pub bed_number: String,
    pub state_label: &'static str,
    pub color_class: &'static str,
    pub patient: Option<PatientView>,
    pub action: Transition,
}

impl TileView {
    pub fn from_bed(bed: &Bed) -> Self {
        let patient = match (&bed.patient_name, bed.urgency_level) {
            (Some(name), urgency) if bed.is_occupied() => Some(PatientView {
                name: name.clone(),
                urgency: urgency.map(|u| u.label().to_uppercase()).unwrap_or_default(),
                badge_class: urgency_color(urgency),
            }),
            _ => None,
        };

        Self {
            bed_number: bed.bed_number.clone(),
            state_label: bed.state.label(),
            color_class: bed_color(bed.state),
            patient,
            action: bed.next_transition(),
        }
    }
}

/// Toast text after a transition went through
pub fn success_message(transition: Transition, bed: &Bed) -> String {
    match transition {
        Transition::Assign => format!(
            "{} assigned to {}",
            bed.patient_name.as_deref().unwrap_or("Patient"),
            bed.bed_number
        ),
        Transition::Discharge => format!("Patient discharged from {}", bed.bed_number),
        Transition::Clean => format!("{} marked as cleaned", bed.bed_number),
    }
}
