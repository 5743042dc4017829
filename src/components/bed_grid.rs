//! Bed Grid Component
//!
//! Tiles for every bed passing the current filter.

use bed_lifecycle::{Bed, Transition};
use leptos::prelude::*;

use crate::components::BedTile;
use crate::store::{store_visible_beds, use_board_store, BoardStateStoreFields};

#[component]
pub fn BedGrid(#[prop(into)] on_action: Callback<(Bed, Transition)>) -> impl IntoView {
    let store = use_board_store();

    let visible = Memo::new(move |_| store_visible_beds(&store));

    view! {
        <Show
            when=move || visible.with(|beds| !beds.is_empty())
            fallback=move || view! {
                <div class="empty-state">
                    {move || if store.loading().get() { "Loading beds..." } else { "No beds to display" }}
                </div>
            }
        >
            <div class="bed-grid">
                <For
                    each=move || visible.get()
                    // Re-render a tile whenever the server record changes
                    key=|bed| (bed.id, bed.state, bed.updated_at, bed.patient_name.clone())
                    children=move |bed| view! { <BedTile bed=bed on_action=on_action /> }
                />
            </div>
        </Show>
    }
}
