//! Domain layer - core data structures and types.
//!
//! This module contains the fundamental domain models:
//! - Theme and zoom state
//! - Document requests and drop filtering
//! - Viewer settings
//! - Message types for the event system

pub mod document;
pub mod messages;
pub mod settings;
pub mod theme;
pub mod zoom;

pub use document::{DocumentRequest, LoadOrdering, RequestId};
pub use messages::Message;
pub use settings::ViewerSettings;
pub use theme::{ThemeMode, ThemeState};
pub use zoom::{ZoomCommand, ZoomState};
