//! Lifecycle Transitions
//!
//! available → occupied → maintenance → available, one step at a time.

use serde::{Deserialize, Serialize};

use super::bed::BedState;

/// A permitted state change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Transition {
    Assign,
    Discharge,
    Clean,
}

impl Transition {
    /// The only transition leaving `state`
    pub fn for_state(state: BedState) -> Self {
        match state {
            BedState::Available => Transition::Assign,
            BedState::Occupied => Transition::Discharge,
            BedState::Maintenance => Transition::Clean,
        }
    }

    pub fn source(&self) -> BedState {
        match self {
            Transition::Assign => BedState::Available,
            Transition::Discharge => BedState::Occupied,
            Transition::Clean => BedState::Maintenance,
        }
    }

    pub fn target(&self) -> BedState {
        match self {
            Transition::Assign => BedState::Occupied,
            Transition::Discharge => BedState::Maintenance,
            Transition::Clean => BedState::Available,
        }
    }

    /// Last segment of `/beds/:id/<segment>`
    pub fn path_segment(&self) -> &'static str {
        match self {
            Transition::Assign => "assign",
            Transition::Discharge => "discharge",
            Transition::Clean => "clean",
        }
    }

    /// Button caption
    pub fn action_label(&self) -> &'static str {
        match self {
            Transition::Assign => "Assign Patient",
            Transition::Discharge => "Discharge Patient",
            Transition::Clean => "Mark as Cleaned",
        }
    }
}
