//! Slide-over panel controller - Elm-style core
//!
//! A front panel is dragged vertically between a collapsed (top) and an
//! expanded (bottom) resting offset over a back panel, with a dimming overlay
//! that follows the drag. This crate holds the platform-independent state
//! machine; hosts feed it layout, drag, and frame messages and act on the
//! returned commands.

pub mod animation;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod geometry;
pub mod messages;
pub mod model;
pub mod panel;
pub mod tracing;
pub mod update;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::SlideOverConfig;
pub use messages::Msg;
pub use model::SlideOverModel;
