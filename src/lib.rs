//! clipkit library crate
//!
//! Exposes internal modules for integration tests and reuse by the binary.

pub mod clipboard;
pub mod download;
pub mod format;
pub mod pin;
