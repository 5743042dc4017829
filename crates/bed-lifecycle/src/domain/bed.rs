//! Bed Entity
//!
//! A bed record as returned by the remote bed service.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::transition::Transition;

/// Occupancy state of a bed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BedState {
    /// Free, ready for a patient
    #[default]
    Available,
    /// A patient is assigned
    Occupied,
    /// Discharged, waiting to be cleaned
    Maintenance,
}

impl BedState {
    pub const ALL: [BedState; 3] = [BedState::Available, BedState::Occupied, BedState::Maintenance];

    pub fn as_str(&self) -> &'static str {
        match self {
            BedState::Available => "available",
            BedState::Occupied => "occupied",
            BedState::Maintenance => "maintenance",
        }
    }

    /// Human readable label
    pub fn label(&self) -> &'static str {
        match self {
            BedState::Available => "Available",
            BedState::Occupied => "Occupied",
            BedState::Maintenance => "Maintenance",
        }
    }

    /// State reached by applying `transition`, if it is legal from here.
    pub fn apply(self, transition: Transition) -> Option<BedState> {
        (transition.source() == self).then(|| transition.target())
    }
}

impl fmt::Display for BedState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BedState {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "available" => Ok(BedState::Available),
            "occupied" => Ok(BedState::Occupied),
            "maintenance" => Ok(BedState::Maintenance),
            other => Err(UnknownVariant(other.to_string())),
        }
    }
}

/// Severity attached to an occupied bed's patient
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UrgencyLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl UrgencyLevel {
    pub const ALL: [UrgencyLevel; 4] = [
        UrgencyLevel::Low,
        UrgencyLevel::Medium,
        UrgencyLevel::High,
        UrgencyLevel::Critical,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            UrgencyLevel::Low => "low",
            UrgencyLevel::Medium => "medium",
            UrgencyLevel::High => "high",
            UrgencyLevel::Critical => "critical",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            UrgencyLevel::Low => "Low",
            UrgencyLevel::Medium => "Medium",
            UrgencyLevel::High => "High",
            UrgencyLevel::Critical => "Critical",
        }
    }
}

impl fmt::Display for UrgencyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UrgencyLevel {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(UrgencyLevel::Low),
            "medium" => Ok(UrgencyLevel::Medium),
            "high" => Ok(UrgencyLevel::High),
            "critical" => Ok(UrgencyLevel::Critical),
            other => Err(UnknownVariant(other.to_string())),
        }
    }
}

/// Returned when parsing an unknown enum wire name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown variant `{0}`")]
pub struct UnknownVariant(pub String);

/// A hospital bed (matches the remote service's JSON shape)
///
/// Timestamps must be RFC 3339 (e.g. `2024-05-01T08:30:00.000Z`). Any other
/// format fails deserialization, which fails the whole `GET /beds` response
/// as [`ServiceError::Decode`](crate::error::ServiceError::Decode).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bed {
    /// Server-assigned identifier
    pub id: u32,
    /// Display label, e.g. "ICU-01"
    pub bed_number: String,
    pub state: BedState,
    /// Present iff occupied
    #[serde(default)]
    pub patient_name: Option<String>,
    /// Present iff occupied
    #[serde(default)]
    pub urgency_level: Option<UrgencyLevel>,
    #[serde(default)]
    pub assigned_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub discharged_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Bed {
    /// Create a fresh, available bed
    pub fn new(id: u32, bed_number: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            id,
            bed_number: bed_number.into(),
            state: BedState::Available,
            patient_name: None,
            urgency_level: None,
            assigned_at: None,
            discharged_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_occupied(&self) -> bool {
        self.state == BedState::Occupied
    }

    /// Patient fields are set exactly when the bed is occupied.
    pub fn is_consistent(&self) -> bool {
        let has_patient = self.patient_name.is_some() && self.urgency_level.is_some();
        let has_none = self.patient_name.is_none() && self.urgency_level.is_none();
        if self.is_occupied() { has_patient } else { has_none }
    }

    /// The single transition the UI offers for this bed
    pub fn next_transition(&self) -> Transition {
        Transition::for_state(self.state)
    }
}

/// Body of `POST /beds/:id/assign`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignPatientRequest {
    pub patient_name: String,
    pub urgency_level: UrgencyLevel,
}

/// Error body returned by the bed service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    pub error: String,
}
