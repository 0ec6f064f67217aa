//! Hover tooltips for task bars on a resource-lane Gantt timeline.
//!
//! [`tooltip`] holds the derivations (working-time duration, timestamp
//! formatting, placement, content); [`ui`] paints the result with egui.

pub mod app;
pub mod config;
pub mod error;
pub mod io;
pub mod model;
pub mod tooltip;
pub mod ui;

pub use error::TooltipError;
