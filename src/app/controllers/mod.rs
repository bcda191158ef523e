//! Controllers layer - orchestration and coordination.
//!
//! Each controller owns one piece of session state and projects it onto the
//! viewport:
//! - Theme (mode + user override)
//! - Zoom level
//! - Document loading
//! - Launch file pickup

pub mod launch;
pub mod loader;
pub mod theme;
pub mod zoom;

pub use launch::{LaunchReconciler, LaunchState};
pub use loader::{DocumentLoader, LoadOutcome};
pub use theme::ThemeController;
pub use zoom::ZoomController;
