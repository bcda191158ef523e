//! Infrastructure layer - external integrations and utilities.
//!
//! This module contains code that interfaces with external systems:
//! - Filesystem reads
//! - Preference persistence
//! - Launch file delivery
//! - Platform-specific detection
//! - Error types

pub mod error;
pub mod fs;
pub mod launch;
pub mod platform;
pub mod preferences;
