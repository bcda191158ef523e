//! FLTK host for the viewer core.
//!
//! Widgets forward user input as [`Message`](crate::app::domain::Message)s over
//! an FLTK channel; [`viewport::FltkViewport`] receives the core's writes.

pub mod file_dialogs;
pub mod main_window;
pub mod menu;
#[cfg(target_os = "macos")]
pub mod open_events;
pub mod theme;
pub mod viewport;
