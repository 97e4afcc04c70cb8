//! Runtime module - winit/platform integration
//!
//! - `app` - ApplicationHandler, window management, and mouse-to-gesture mapping

pub mod app;

pub use app::App;
