use std::time::Duration;

use super::ProgressTracker;
use crate::stats::{Counters, ZERO_ETA, format_bytes, format_elapsed, format_eta};

/// Point-in-time view of an import, published on every display refresh
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub counters: Counters,
    pub percent: f64,
    pub bytes_read: u64,
    pub total_bytes: u64,
    pub elapsed: Duration,
    pub eta_secs: u64,
    pub finished: bool,
}

impl Snapshot {
    pub fn capture(
        counters: Counters,
        tracker: &ProgressTracker,
        elapsed: Duration,
        finished: bool,
    ) -> Self {
        Self {
            counters,
            percent: tracker.percent(),
            bytes_read: tracker.bytes_read(),
            total_bytes: tracker.total_bytes(),
            elapsed,
            eta_secs: tracker.eta_secs(),
            finished,
        }
    }

    /// Whole percent for the gauge, always within 0..=100
    pub fn gauge_percent(&self) -> u16 {
        self.percent.clamp(0.0, 100.0) as u16
    }

    pub fn elapsed_display(&self) -> String {
        format_elapsed(self.elapsed)
    }

    pub fn eta_display(&self) -> String {
        if self.finished {
            ZERO_ETA.to_string()
        } else {
            format_eta(self.eta_secs)
        }
    }

    /// Gauge label, e.g. `42% (12.0 MiB / 28.5 MiB)`
    ///
    /// When the input size is unknown only the bytes read are shown.
    pub fn gauge_label(&self) -> String {
        if self.total_bytes == 0 {
            format!("{}% ({} read)", self.gauge_percent(), format_bytes(self.bytes_read))
        } else {
            format!(
                "{}% ({} / {})",
                self.gauge_percent(),
                format_bytes(self.bytes_read),
                format_bytes(self.total_bytes)
            )
        }
    }
}

impl Default for Snapshot {
    fn default() -> Self {
        Snapshot::capture(
            Counters::default(),
            &ProgressTracker::new(0),
            Duration::ZERO,
            false,
        )
    }
}
