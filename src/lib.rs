//! sqlpv library - SQL dump import with live progress
//!
//! This library exposes the core functionality of sqlpv for testing purposes.

pub mod app;
pub mod classify;
pub mod client;
pub mod config;
pub mod error;
pub mod import;
pub mod input;
pub mod progress;
pub mod stats;

#[cfg(test)]
pub mod test_utils;
pub mod theme;

// Re-export commonly used types for convenience
pub use app::{App, Phase};
pub use config::Config;
