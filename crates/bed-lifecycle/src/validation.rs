//! Assign form validation
//!
//! Runs before any request is sent.

use crate::domain::{AssignPatientRequest, UrgencyLevel};
use crate::error::AssignValidation;

pub const NAME_REQUIRED: &str = "Patient name is required";
pub const URGENCY_REQUIRED: &str = "Urgency level is required";

/// Build the assign request body, or report every missing field at once.
///
/// The patient name is trimmed; a blank name counts as missing.
pub fn validate_assign(
    patient_name: &str,
    urgency_level: Option<UrgencyLevel>,
) -> Result<AssignPatientRequest, AssignValidation> {
    let name = patient_name.trim();
    let validation = AssignValidation {
        name: name.is_empty().then_some(NAME_REQUIRED),
        urgency: urgency_level.is_none().then_some(URGENCY_REQUIRED),
    };

    match urgency_level {
        Some(urgency_level) if validation.is_empty() => Ok(AssignPatientRequest {
            patient_name: name.to_string(),
            urgency_level,
        }),
        _ => Err(validation),
    }
}
