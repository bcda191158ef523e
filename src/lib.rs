//! Core of a single-document Markdown viewer.
//!
//! The [`app`] layer holds the event coordinator and its controllers; every
//! external collaborator sits behind a trait in [`app::capabilities`]. The
//! optional [`ui`] layer (feature `gui`) provides an FLTK host window.
//!
//! Hosts that deliver named signals with JSON payloads (a webview bridge, an
//! IPC channel) turn them into triggers with
//! [`Message::from_host_signal`](app::domain::Message::from_host_signal) and
//! feed them to [`EventCoordinator::run`](app::coordinator::EventCoordinator::run).

pub mod app;

#[cfg(feature = "gui")]
pub mod ui;
