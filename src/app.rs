//! Bed Board App
//!
//! Main application component: header, counters, filter, grid and dialogs.

use bed_lifecycle::{ApiConfig, AssignPatientRequest, Bed, Transition};
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::commands;
use crate::components::{AssignPatientModal, BedGrid, FilterBar, SummaryBar, TitleBar, ToastStack};
use crate::context::AppContext;
use crate::store::BoardState;

#[component]
pub fn App(
    /// Bed service location, read once at startup
    api: ApiConfig,
) -> impl IntoView {
    // State
    let store = Store::new(BoardState::default());
    let assigning = RwSignal::new(None::<Bed>);

    let ctx = AppContext::new(signal(0u32), api);

    // Provide context to all children
    provide_context(store);
    provide_context(ctx);

    // Load beds on mount and on every manual refresh
    Effect::new(move |_| {
        let trigger = ctx.reload_trigger.get();
        log::debug!("loading beds, trigger={}", trigger);
        spawn_local(commands::load_beds(store, ctx));
    });

    // Tile buttons: assign opens the dialog, the others go straight out
    let on_action = move |(bed, transition): (Bed, Transition)| match transition {
        Transition::Assign => assigning.set(Some(bed)),
        Transition::Discharge => spawn_local(commands::discharge_bed(store, ctx, bed)),
        Transition::Clean => spawn_local(commands::clean_bed(store, ctx, bed)),
    };

    let on_assign = move |(bed, request): (Bed, AssignPatientRequest)| {
        spawn_local(commands::assign_patient(store, ctx, bed, request));
    };

    view! {
        <div class="board-layout">
            <TitleBar />
            <SummaryBar />
            <FilterBar />
            <BedGrid on_action=on_action />
            <AssignPatientModal bed=assigning on_submit=on_assign />
            <ToastStack />
        </div>
    }
}
