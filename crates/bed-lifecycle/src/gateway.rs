//! Lifecycle Transition Gateway
//!
//! Sends transition intents to the bed service and hands back the
//! authoritative record. Callers merge it with [`BedRegistry::apply_update`].
//!
//! [`BedRegistry::apply_update`]: crate::registry::BedRegistry::apply_update

use crate::domain::{Bed, Transition, UrgencyLevel};
use crate::error::{FetchError, ServiceError, TransitionError};
use crate::service::BedService;
use crate::validation::validate_assign;

#[derive(Debug, Clone)]
pub struct BedGateway<S> {
    service: S,
}

impl<S: BedService> BedGateway<S> {
    pub fn new(service: S) -> Self {
        Self { service }
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    /// Fetch the full bed snapshot
    pub async fn load(&self) -> Result<Vec<Bed>, FetchError> {
        let beds = self.service.list_beds().await.map_err(|err| {
            log::error!("loading beds failed: {}", err);
            FetchError(err)
        })?;
        log::info!("loaded {} beds", beds.len());
        Ok(beds)
    }

    /// Assign a patient to an available bed.
    ///
    /// Input is validated before anything is sent.
    pub async fn assign(
        &self,
        bed_id: u32,
        patient_name: &str,
        urgency_level: Option<UrgencyLevel>,
    ) -> Result<Bed, TransitionError> {
        let request = validate_assign(patient_name, urgency_level).map_err(|validation| {
            log::debug!("assign to bed {} rejected locally: {}", bed_id, validation);
            TransitionError::Invalid(validation)
        })?;
        let result = self.service.assign(bed_id, &request).await;
        self.finish(bed_id, Transition::Assign, result)
    }

    pub async fn discharge(&self, bed_id: u32) -> Result<Bed, TransitionError> {
        let result = self.service.discharge(bed_id).await;
        self.finish(bed_id, Transition::Discharge, result)
    }

    pub async fn clean(&self, bed_id: u32) -> Result<Bed, TransitionError> {
        let result = self.service.clean(bed_id).await;
        self.finish(bed_id, Transition::Clean, result)
    }

    pub fn export_url(&self) -> String {
        self.service.export_url()
    }

    fn finish(
        &self,
        bed_id: u32,
        transition: Transition,
        result: Result<Bed, ServiceError>,
    ) -> Result<Bed, TransitionError> {
        match result {
            Ok(bed) => {
                if bed.state != transition.target() {
                    log::warn!(
                        "{} on bed {} returned state {}, expected {}",
                        transition.path_segment(),
                        bed_id,
                        bed.state,
                        transition.target()
                    );
                }
                log::info!("{} bed {} ({}) -> {}", transition.path_segment(), bed_id, bed.bed_number, bed.state);
                Ok(bed)
            }
            Err(err) => {
                log::error!("{} bed {} failed: {}", transition.path_segment(), bed_id, err);
                Err(TransitionError::Service(err))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::BedState;
    use crate::error::FALLBACK_MESSAGE;
    use crate::registry::{BedRegistry, StateSummary};
    use crate::testing::{ward, FakeBedService};
    use crate::validation::{NAME_REQUIRED, URGENCY_REQUIRED};

    async fn loaded() -> (BedGateway<FakeBedService>, BedRegistry) {
        let gateway = BedGateway::new(FakeBedService::new(ward()));
        let mut registry = BedRegistry::default();
        registry.replace_all(gateway.load().await.expect("load"));
        (gateway, registry)
    }

    #[tokio::test]
    async fn test_load_counts() {
        let (gateway, registry) = loaded().await;
        assert_eq!(registry.summary(), StateSummary { available: 15, occupied: 3, maintenance: 2 });
        assert_eq!(gateway.service().calls(), vec!["list".to_string()]);
    }

    #[tokio::test]
    async fn test_failed_load_keeps_previous_snapshot() {
        let (gateway, mut registry) = loaded().await;
        let before = registry.clone();

        // Server state moves on, so a successful reload would be visible.
        gateway.clean(19).await.unwrap();

        gateway.service().fail_next(ServiceError::Transport("connection refused".to_string()));
        let err = gateway.load().await.unwrap_err();
        assert_eq!(err.user_message(), "Failed to load beds");
        assert_eq!(registry, before);
        assert_eq!(registry.get(19).map(|b| b.state), Some(BedState::Maintenance));

        registry.replace_all(gateway.load().await.unwrap());
        assert_eq!(registry.get(19).map(|b| b.state), Some(BedState::Available));
    }

    #[tokio::test]
    async fn test_assign_empty_name_sends_nothing() {
        let (gateway, _) = loaded().await;
        let err = gateway.assign(1, "  ", Some(UrgencyLevel::High)).await.unwrap_err();
        match err {
            TransitionError::Invalid(validation) => assert_eq!(validation.name, Some(NAME_REQUIRED)),
            other => panic!("unexpected error: {:?}", other),
        }
        assert_eq!(gateway.service().calls(), vec!["list".to_string()]);
    }

    #[tokio::test]
    async fn test_assign_missing_urgency_sends_nothing() {
        let (gateway, _) = loaded().await;
        let err = gateway.assign(1, "J. Doe", None).await.unwrap_err();
        match err {
            TransitionError::Invalid(validation) => assert_eq!(validation.urgency, Some(URGENCY_REQUIRED)),
            other => panic!("unexpected error: {:?}", other),
        }
        assert_eq!(gateway.service().calls().len(), 1);
    }

    #[tokio::test]
    async fn test_assign_merges_occupied_bed() {
        let (gateway, mut registry) = loaded().await;

        let bed = gateway.assign(1, "J. Doe", Some(UrgencyLevel::Critical)).await.unwrap();
        assert!(registry.apply_update(bed.clone()));

        let matching: Vec<&Bed> = registry.beds().iter().filter(|b| b.id == 1).collect();
        assert_eq!(matching.len(), 1);
        assert_eq!(matching[0].state, BedState::Occupied);
        assert_eq!(matching[0].patient_name, bed.patient_name);
        assert_eq!(matching[0].urgency_level, Some(UrgencyLevel::Critical));
        assert_eq!(registry.summary(), StateSummary { available: 14, occupied: 4, maintenance: 2 });
        assert_eq!(gateway.service().calls().last().map(String::as_str), Some("assign 1"));
    }

    #[tokio::test]
    async fn test_discharge_moves_to_maintenance() {
        let (gateway, mut registry) = loaded().await;

        let bed = gateway.discharge(16).await.unwrap();
        registry.apply_update(bed);

        let bed = registry.get(16).unwrap();
        assert_eq!(bed.state, BedState::Maintenance);
        assert!(bed.patient_name.is_none());
        assert!(bed.urgency_level.is_none());
        assert!(bed.discharged_at.is_some());
    }

    #[tokio::test]
    async fn test_clean_resets_bed() {
        let (gateway, mut registry) = loaded().await;

        let bed = gateway.clean(19).await.unwrap();
        registry.apply_update(bed);

        let bed = registry.get(19).unwrap();
        assert_eq!(bed.state, BedState::Available);
        assert!(bed.patient_name.is_none());
        assert!(bed.urgency_level.is_none());
        assert!(bed.assigned_at.is_none());
        assert!(bed.discharged_at.is_none());
    }

    #[tokio::test]
    async fn test_server_error_on_discharge_leaves_registry() {
        let (gateway, mut registry) = loaded().await;
        let before = registry.clone();

        gateway.service().fail_next(ServiceError::Status { status: 500 });
        match gateway.discharge(16).await {
            Ok(bed) => {
                registry.apply_update(bed);
                panic!("discharge should have failed");
            }
            Err(err) => {
                assert_eq!(err, TransitionError::Service(ServiceError::Status { status: 500 }));
                assert_eq!(err.user_message(FALLBACK_MESSAGE), FALLBACK_MESSAGE);
            }
        }
        assert_eq!(registry, before);
        assert_eq!(registry.get(16).map(|b| b.state), Some(BedState::Occupied));
    }

    #[tokio::test]
    async fn test_server_rejection_message_surfaces() {
        let (gateway, _) = loaded().await;
        let err = gateway.clean(1).await.unwrap_err();
        assert_eq!(err.user_message(FALLBACK_MESSAGE), "Bed ICU-01 is not in maintenance");
    }

    #[tokio::test]
    async fn test_last_response_wins_for_same_bed() {
        let (gateway, mut registry) = loaded().await;

        let assigned = gateway.assign(2, "First", Some(UrgencyLevel::Low)).await.unwrap();
        let discharged = gateway.discharge(2).await.unwrap();

        // Responses arrive out of order: the later-arriving one sticks.
        registry.apply_update(discharged);
        registry.apply_update(assigned.clone());
        assert_eq!(registry.get(2), Some(&assigned));
    }
}
