//! Bed Tile Component
//!
//! One bed: number, state, patient (if occupied) and its single action.

use bed_lifecycle::{Bed, Transition};
use leptos::prelude::*;

use crate::bed_utils::TileView;

#[component]
pub fn BedTile(
    bed: Bed,
    #[prop(into)] on_action: Callback<(Bed, Transition)>,
) -> impl IntoView {
    let tile = TileView::from_bed(&bed);
    let action = tile.action;

    view! {
        <div class=format!("bed-tile {}", tile.color_class)>
            <h3 class="bed-number">{tile.bed_number}</h3>
            <p class="bed-state">{tile.state_label}</p>

            // Patient info (occupied only)
            {tile.patient.map(|patient| view! {
                <div class="bed-patient">
                    <p class="patient-name">{patient.name}</p>
                    <p class="patient-urgency">
                        "Urgency: "
                        <span class=format!("urgency-badge {}", patient.badge_class)>{patient.urgency}</span>
                    </p>
                </div>
            })}

            <button
                class="btn secondary bed-action"
                on:click=move |_| on_action.run((bed.clone(), action))
            >
                {action.action_label()}
            </button>
        </div>
    }
}
