//! Global Board State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use bed_lifecycle::{Bed, BedRegistry, StateFilter};
use leptos::prelude::*;
use reactive_stores::Store;

/// Board state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct BoardState {
    /// All beds, in service order
    pub registry: BedRegistry,
    /// Which beds the grid shows
    pub filter: StateFilter,
    /// A full load is in flight
    pub loading: bool,
}

/// Type alias for the store
pub type BoardStore = Store<BoardState>;

/// Get the board store from context
pub fn use_board_store() -> BoardStore {
    expect_context::<BoardStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace every bed with a fresh snapshot
pub fn store_replace_beds(store: &BoardStore, beds: Vec<Bed>) {
    store.registry().write().replace_all(beds);
}

/// Beds passing the current filter, tracked for reactive readers
pub fn store_visible_beds(store: &BoardStore) -> Vec<Bed> {
    let filter = store.filter().get();
    store.registry().read().filtered(filter)
}

/// Merge one authoritative bed record by ID
pub fn store_apply_update(store: &BoardStore, bed: Bed) -> bool {
    store.registry().write().apply_update(bed)
}
