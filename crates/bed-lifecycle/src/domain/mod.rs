//! Domain Layer
//!
//! Bed entity, its enums and the lifecycle transitions.
//! No I/O here (serde and chrono only).

mod bed;
mod transition;

pub use bed::{ApiErrorResponse, AssignPatientRequest, Bed, BedState, UnknownVariant, UrgencyLevel};
pub use transition::Transition;
