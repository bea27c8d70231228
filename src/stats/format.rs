//! Display formatting for the stats table and gauge label

use std::time::Duration;

/// ETA shown once the import has finished
pub const ZERO_ETA: &str = "00:00:00";

const BYTE_UNITS: [&str; 5] = ["B", "KiB", "MiB", "GiB", "TiB"];

/// Format elapsed time as `H:M:S`
///
/// Each component is the *total* elapsed time in that unit, rounded on its
/// own: 90 seconds renders as `0:2:90`, not `0:1:30`.
pub fn format_elapsed(elapsed: Duration) -> String {
    let secs = elapsed.as_secs_f64();
    format!(
        "{}:{}:{}",
        (secs / 3600.0).round() as u64,
        (secs / 60.0).round() as u64,
        secs.round() as u64
    )
}

/// Format an ETA given in whole seconds as `H:M:S`
pub fn format_eta(eta_secs: u64) -> String {
    format!(
        "{}:{}:{}",
        eta_secs / 3600,
        eta_secs % 3600 / 60,
        eta_secs % 60
    )
}

/// Format a byte count with binary units, e.g. `12.3 MiB`
pub fn format_bytes(bytes: u64) -> String {
    if bytes < 1024 {
        return format!("{} B", bytes);
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < BYTE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{:.1} {}", value, BYTE_UNITS[unit])
}
