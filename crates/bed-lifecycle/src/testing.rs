//! Test support: a seeded ward and an in-memory bed service.
//!
//! Enabled for this crate's own tests and, through the `testing`
//! feature, for dependent crates' tests.

use std::cell::{Cell, RefCell};

use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::domain::{AssignPatientRequest, Bed, BedState, Transition, UrgencyLevel};
use crate::error::ServiceError;
use crate::service::BedService;

/// Fixed clock for fixtures
pub fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0)
        .single()
        .expect("valid fixture timestamp")
}

/// Twenty ICU beds: ICU-01..15 available, ICU-16..18 occupied,
/// ICU-19..20 in maintenance.
pub fn ward() -> Vec<Bed> {
    const OCCUPANTS: [UrgencyLevel; 3] = [UrgencyLevel::High, UrgencyLevel::Critical, UrgencyLevel::Medium];

    (0..20u32)
        .map(|i| {
            let mut bed = Bed::new(i + 1, format!("ICU-{:02}", i + 1), base_time());
            if (15..18).contains(&i) {
                bed.state = BedState::Occupied;
                bed.patient_name = Some(format!("Patient {}", i - 14));
                bed.urgency_level = Some(OCCUPANTS[(i - 15) as usize]);
                bed.assigned_at = Some(base_time());
            } else if i >= 18 {
                bed.state = BedState::Maintenance;
            }
            bed
        })
        .collect()
}

/// In-memory stand-in for the remote service.
///
/// Enforces the lifecycle like the real service would, records every
/// call, and can be told to fail the next one.
#[derive(Debug, Default)]
pub struct FakeBedService {
    beds: RefCell<Vec<Bed>>,
    calls: RefCell<Vec<String>>,
    failure: RefCell<Option<ServiceError>>,
    tick: Cell<i64>,
}

impl FakeBedService {
    pub fn new(beds: Vec<Bed>) -> Self {
        Self {
            beds: RefCell::new(beds),
            ..Default::default()
        }
    }

    /// Every call made so far, e.g. `["list", "assign 3"]`
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub fn fail_next(&self, err: ServiceError) {
        *self.failure.borrow_mut() = Some(err);
    }

    fn record(&self, call: String) -> Result<(), ServiceError> {
        self.calls.borrow_mut().push(call);
        match self.failure.borrow_mut().take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn now(&self) -> DateTime<Utc> {
        self.tick.set(self.tick.get() + 1);
        base_time() + Duration::minutes(self.tick.get())
    }

    fn transition(
        &self,
        bed_id: u32,
        transition: Transition,
        patient: Option<&AssignPatientRequest>,
    ) -> Result<Bed, ServiceError> {
        self.record(format!("{} {}", transition.path_segment(), bed_id))?;
        let now = self.now();
        let mut beds = self.beds.borrow_mut();
        let bed = beds
            .iter_mut()
            .find(|bed| bed.id == bed_id)
            .ok_or_else(|| ServiceError::Rejected { status: 404, message: "Bed not found".to_string() })?;

        let Some(next) = bed.state.apply(transition) else {
            let wanted = match transition {
                Transition::Assign => "available",
                Transition::Discharge => "occupied",
                Transition::Clean => "in maintenance",
            };
            return Err(ServiceError::Rejected {
                status: 409,
                message: format!("Bed {} is not {}", bed.bed_number, wanted),
            });
        };

        bed.state = next;
        bed.updated_at = now;
        match transition {
            Transition::Assign => {
                if let Some(request) = patient {
                    bed.patient_name = Some(request.patient_name.clone());
                    bed.urgency_level = Some(request.urgency_level);
                }
                bed.assigned_at = Some(now);
                bed.discharged_at = None;
            }
            Transition::Discharge => {
                bed.patient_name = None;
                bed.urgency_level = None;
                bed.discharged_at = Some(now);
            }
            Transition::Clean => {
                bed.patient_name = None;
                bed.urgency_level = None;
                bed.assigned_at = None;
                bed.discharged_at = None;
            }
        }
        Ok(bed.clone())
    }
}

#[async_trait(?Send)]
impl BedService for FakeBedService {
    async fn list_beds(&self) -> Result<Vec<Bed>, ServiceError> {
        self.record("list".to_string())?;
        Ok(self.beds.borrow().clone())
    }

    async fn assign(&self, bed_id: u32, request: &AssignPatientRequest) -> Result<Bed, ServiceError> {
        self.transition(bed_id, Transition::Assign, Some(request))
    }

    async fn discharge(&self, bed_id: u32) -> Result<Bed, ServiceError> {
        self.transition(bed_id, Transition::Discharge, None)
    }

    async fn clean(&self, bed_id: u32) -> Result<Bed, ServiceError> {
        self.transition(bed_id, Transition::Clean, None)
    }

    fn export_url(&self) -> String {
        "memory:///beds/export".to_string()
    }
}
