//! Progress module for byte-based import progress
//!
//! `ProgressTracker` turns consumed byte counts into a percentage, decides
//! when the display needs a refresh and keeps the ETA estimate.
//! `Snapshot` is the immutable view handed to the UI on each refresh.

mod snapshot;
mod tracker;

pub use snapshot::Snapshot;
pub use tracker::ProgressTracker;

#[cfg(test)]
#[path = "progress/tracker_tests.rs"]
mod tracker_tests;
