//! UI Components
//!
//! Leptos components for the bed board.

mod assign_patient_modal;
mod bed_grid;
mod bed_tile;
mod filter_bar;
mod summary_bar;
mod title_bar;
mod toast_stack;

pub use assign_patient_modal::AssignPatientModal;
pub use bed_grid::BedGrid;
pub use bed_tile::BedTile;
pub use filter_bar::FilterBar;
pub use summary_bar::SummaryBar;
pub use title_bar::TitleBar;
pub use toast_stack::ToastStack;
