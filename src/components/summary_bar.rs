//! Summary Bar Component
//!
//! Per-state counters, recomputed from the store on every change.

use bed_lifecycle::BedState;
use leptos::prelude::*;

use crate::store::{use_board_store, BoardStateStoreFields};

#[component]
pub fn SummaryBar() -> impl IntoView {
    let store = use_board_store();
    let summary = Memo::new(move |_| store.registry().read().summary());

    view! {
        <div class="summary-bar">
            {BedState::ALL.into_iter().map(|state| view! {
                <div class=format!("summary-card {}", state.as_str())>
                    <span class="summary-count">{move || summary.get().get(state)}</span>
                    <span class="summary-label">{state.label()}</span>
                </div>
            }).collect_view()}
        </div>
    }
}
