//! Services layer - business operations and utilities.
//!
//! This module contains the default capability implementations that do real work:
//! - Markdown rendering

pub mod markdown;
