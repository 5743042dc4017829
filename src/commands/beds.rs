//! Bed Commands
//!
//! Each flow awaits the service, then merges the authoritative result into
//! the store. Failures only produce a notice; the store is left untouched.

use bed_lifecycle::{AssignPatientRequest, Bed, Transition, TransitionError, FALLBACK_MESSAGE};
use leptos::prelude::*;

use crate::bed_utils::success_message;
use crate::context::{AppContext, NoticeKind};
use crate::store::{store_apply_update, store_replace_beds, BoardStateStoreFields, BoardStore};

/// Replace the board with the service's current snapshot
pub async fn load_beds(store: BoardStore, ctx: AppContext) {
    store.loading().set(true);
    match ctx.gateway().load().await {
        Ok(beds) => store_replace_beds(&store, beds),
        Err(err) => ctx.notify(NoticeKind::Error, err.user_message()),
    }
    store.loading().set(false);
}

/// Send a validated assign request for `bed`
pub async fn assign_patient(store: BoardStore, ctx: AppContext, bed: Bed, request: AssignPatientRequest) {
    let result = ctx
        .gateway()
        .assign(bed.id, &request.patient_name, Some(request.urgency_level))
        .await;
    settle(store, ctx, Transition::Assign, result);
}

pub async fn discharge_bed(store: BoardStore, ctx: AppContext, bed: Bed) {
    let result = ctx.gateway().discharge(bed.id).await;
    settle(store, ctx, Transition::Discharge, result);
}

pub async fn clean_bed(store: BoardStore, ctx: AppContext, bed: Bed) {
    let result = ctx.gateway().clean(bed.id).await;
    settle(store, ctx, Transition::Clean, result);
}

fn settle(store: BoardStore, ctx: AppContext, transition: Transition, result: Result<Bed, TransitionError>) {
    match result {
        Ok(bed) => {
            let message = success_message(transition, &bed);
            if store_apply_update(&store, bed) {
                ctx.notify(NoticeKind::Success, message);
            }
        }
        Err(err) => ctx.notify(NoticeKind::Error, err.user_message(FALLBACK_MESSAGE)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bed_lifecycle::testing::ward;
    use bed_lifecycle::{ApiConfig, BedState, ServiceError, UrgencyLevel};
    use reactive_stores::Store;

    use crate::store::BoardState;

    fn board() -> (BoardStore, AppContext) {
        let store = Store::new(BoardState::default());
        store_replace_beds(&store, ward());
        let ctx = AppContext::new(signal(0), ApiConfig::default());
        (store, ctx)
    }

    #[test]
    fn test_failed_discharge_notifies_and_keeps_store() {
        let owner = Owner::new();
        owner.with(|| {
            let (store, ctx) = board();
            let before = store.registry().get_untracked();

            let err = TransitionError::Service(ServiceError::Status { status: 500 });
            settle(store, ctx, Transition::Discharge, Err(err));

            assert_eq!(store.registry().get_untracked(), before);
            let notices = ctx.notices.get_untracked();
            assert_eq!(notices.len(), 1);
            assert_eq!(notices[0].kind, NoticeKind::Error);
            assert_eq!(notices[0].message, FALLBACK_MESSAGE);
        });
    }

    #[test]
    fn test_rejection_shows_server_message() {
        let owner = Owner::new();
        owner.with(|| {
            let (store, ctx) = board();
            let err = TransitionError::Service(ServiceError::Rejected {
                status: 409,
                message: "Bed ICU-01 is not available".to_string(),
            });
            settle(store, ctx, Transition::Assign, Err(err));

            let notices = ctx.notices.get_untracked();
            assert_eq!(notices[0].message, "Bed ICU-01 is not available");
        });
    }

    #[test]
    fn test_successful_assign_merges_and_notifies() {
        let owner = Owner::new();
        owner.with(|| {
            let (store, ctx) = board();
            let mut bed = ward()[0].clone();
            bed.state = BedState::Occupied;
            bed.patient_name = Some("J. Doe".to_string());
            bed.urgency_level = Some(UrgencyLevel::Critical);

            settle(store, ctx, Transition::Assign, Ok(bed.clone()));

            let registry = store.registry().get_untracked();
            assert_eq!(registry.get(1), Some(&bed));
            assert_eq!(registry.summary().occupied, 4);
            let notices = ctx.notices.get_untracked();
            assert_eq!(notices.len(), 1);
            assert_eq!(notices[0].kind, NoticeKind::Success);
            assert_eq!(notices[0].message, "J. Doe assigned to ICU-01");
        });
    }

    #[test]
    fn test_update_for_unknown_bed_is_silent() {
        let owner = Owner::new();
        owner.with(|| {
            let (store, ctx) = board();
            let before = store.registry().get_untracked();
            let mut stranger = ward()[18].clone();
            stranger.id = 99;

            settle(store, ctx, Transition::Clean, Ok(stranger));

            assert_eq!(store.registry().get_untracked(), before);
            assert!(ctx.notices.get_untracked().is_empty());
        });
    }
}
