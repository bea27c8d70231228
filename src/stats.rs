//! Stats module for statement counters and display formatting
//!
//! Counters are fed by the classifier; the formatting helpers turn
//! durations and byte counts into the strings shown in the stats table.

mod counters;
mod format;

// Re-export public types
pub use counters::Counters;
pub use format::{ZERO_ETA, format_bytes, format_elapsed, format_eta};
