//! Filter Bar Component
//!
//! Narrows the grid to one bed state.

use bed_lifecycle::{BedState, StateFilter};
use leptos::prelude::*;

use crate::store::{use_board_store, BoardStateStoreFields};

#[component]
pub fn FilterBar() -> impl IntoView {
    let store = use_board_store();

    let options = std::iter::once((StateFilter::All, "All"))
        .chain(BedState::ALL.into_iter().map(|state| (StateFilter::Only(state), state.label())));

    view! {
        <div class="filter-bar">
            {options.map(|(filter, label)| {
                let is_active = move || store.filter().get() == filter;
                view! {
                    <button
                        type="button"
                        class=move || if is_active() { "filter-btn active" } else { "filter-btn" }
                        on:click=move |_| store.filter().set(filter)
                    >
                        {label}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
