//! Bed Service Commands
//!
//! Async flows from user intent to the bed service and back into the
//! board store, plus browser window helpers.

mod beds;
mod window;

pub use beds::*;
pub use window::*;
