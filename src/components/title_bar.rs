//! Board Title Bar Component
//!
//! Heading plus the manual refresh and CSV export controls.

use leptos::prelude::*;

use crate::commands;
use crate::context::{use_app_context, NoticeKind};
use crate::store::{use_board_store, BoardStateStoreFields};

/// Title bar with board-wide actions
#[component]
pub fn TitleBar() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_board_store();

    // Refresh
    let refresh = move |_| ctx.reload();

    // Export CSV: the service streams the file, we only navigate to it
    let export = move |_| {
        let url = ctx.gateway().export_url();
        log::info!("opening export {}", url);
        if let Err(err) = commands::open_in_new_tab(&url) {
            log::error!("export failed: {}", err);
            ctx.notify(NoticeKind::Error, "Could not open the CSV export");
        }
    };

    view! {
        <header class="board-header">
            <div>
                <h1 class="board-title">"ICU Bed Manager"</h1>
                <p class="board-subtitle">"Real-time bed tracking and patient management"</p>
            </div>

            <div class="board-actions">
                <button
                    class="btn outline"
                    disabled=move || store.loading().get()
                    on:click=refresh
                >
                    {move || if store.loading().get() { "Refreshing..." } else { "Refresh" }}
                </button>
                <button class="btn primary" on:click=export>
                    "Export CSV"
                </button>
            </div>
        </header>
    }
}
