//! Demo panel content
//!
//! - **ListPanel**: scrollable list shown in the draggable front panel
//! - **Backdrop**: static content behind it

mod backdrop;
mod list;

pub use backdrop::{Backdrop, BackdropState};
pub use list::{ListPanel, ListState};
