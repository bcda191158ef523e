//! Application layer - organized by Clean Architecture principles.
//!
//! # Structure
//!
//! - `domain/` - Core data structures (theme, zoom, documents, settings, messages)
//! - `capabilities.rs` - Interfaces to the host, filesystem, renderer and viewport
//! - `controllers/` - Theme, zoom, document loading and launch file pickup
//! - `services/` - Default markdown renderer
//! - `infrastructure/` - Filesystem, preferences, launch args, platform, errors
//! - `coordinator.rs` - Routes triggers to controllers

pub mod capabilities;
pub mod controllers;
pub mod coordinator;
pub mod domain;
pub mod file_filters;
pub mod infrastructure;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

// Re-exports for convenient external access
pub use capabilities::{FileContents, FileDialog, FileSystem, MarkdownRenderer, PendingFileSource, PreferenceStore, SystemTheme, Viewport};
pub use controllers::{DocumentLoader, LaunchReconciler, LaunchState, LoadOutcome, ThemeController, ZoomController};
pub use coordinator::{Capabilities, EventCoordinator};
pub use domain::{LoadOrdering, Message, ThemeMode, ThemeState, ViewerSettings, ZoomCommand, ZoomState};
pub use infrastructure::error::{AppError, Result};
pub use infrastructure::fs::TokioFileSystem;
pub use infrastructure::launch::LaunchFile;
pub use infrastructure::platform::{PlatformTheme, detect_system_dark_mode, watch_system_theme};
pub use infrastructure::preferences::{JsonPreferenceStore, MemoryPreferenceStore};
pub use services::markdown::PulldownRenderer;
