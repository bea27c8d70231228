use std::time::Duration;

/// ETA is only re-estimated when the rounded percent lands on a multiple of this
const ETA_STEP_PERCENT: u64 = 5;

/// Sentinel for "nothing displayed yet"; truncates to -1 so the first line
/// always triggers a refresh.
const NOTHING_DISPLAYED: f64 = -1.0;

/// Byte progress, refresh decisions and ETA estimation
#[derive(Debug, Clone)]
pub struct ProgressTracker {
    total_bytes: u64,
    bytes_read: u64,
    percent: f64,
    last_displayed: f64,
    eta_secs: u64,
}

impl ProgressTracker {
    /// Create a tracker for an input of `total_bytes`
    ///
    /// A total of 0 means the size is unknown; percent then stays at 0.
    pub fn new(total_bytes: u64) -> Self {
        Self {
            total_bytes,
            bytes_read: 0,
            percent: 0.0,
            last_displayed: NOTHING_DISPLAYED,
            eta_secs: 0,
        }
    }

    /// Account for a consumed line of `len` bytes
    ///
    /// Returns `true` when the integer part of the percent differs from the
    /// last displayed one, i.e. the display needs a refresh.
    pub fn advance(&mut self, len: usize) -> bool {
        self.bytes_read += len as u64;
        self.percent = if self.total_bytes == 0 {
            0.0
        } else {
            (self.bytes_read as f64 / self.total_bytes as f64 * 100.0).min(100.0)
        };

        self.percent.trunc() as i64 != self.last_displayed.trunc() as i64
    }

    /// Record that the current percent is being displayed
    ///
    /// Re-estimates the ETA when the rounded percent is a positive multiple
    /// of 5; otherwise the previous estimate is kept.
    pub fn refresh(&mut self, elapsed: Duration) {
        if self.percent > 0.0 {
            let rounded = self.percent.round() as u64;
            if rounded > 0 && rounded % ETA_STEP_PERCENT == 0 {
                self.eta_secs = (elapsed.as_secs_f64() * 100.0 / self.percent) as u64;
            }
        }
        self.last_displayed = self.percent;
    }

    /// Jump to 100% at end of input
    pub fn finish(&mut self) {
        self.percent = 100.0;
        self.last_displayed = 100.0;
    }

    pub fn percent(&self) -> f64 {
        self.percent
    }

    pub fn bytes_read(&self) -> u64 {
        self.bytes_read
    }

    pub fn total_bytes(&self) -> u64 {
        self.total_bytes
    }

    pub fn eta_secs(&self) -> u64 {
        self.eta_secs
    }
}
