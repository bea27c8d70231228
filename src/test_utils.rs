//! Shared test utilities for sqlpv
//!
//! This module provides common test fixtures and helper functions
//! used across multiple test modules.

#[cfg(test)]
pub mod test_helpers {
    use std::io::{self, Cursor};
    use std::time::Duration;

    use crate::app::App;
    use crate::import::ImportHandle;
    use crate::progress::{ProgressTracker, Snapshot};
    use crate::stats::Counters;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    pub const TEST_TARGET: &str = "shop";

    /// Helper to create an App backed by an import of empty input
    ///
    /// Events from the import thread are never polled, so tests drive the
    /// app state with `apply_event` directly.
    pub fn test_app() -> App {
        let importer = ImportHandle::spawn(Cursor::new(Vec::<u8>::new()), io::sink(), 0);
        App::new(importer, TEST_TARGET.to_string(), None)
    }

    /// Helper to build a running snapshot at roughly `percent` of a 10 KB dump
    pub fn snapshot_with(counters: Counters, percent: f64) -> Snapshot {
        let total = 10_000u64;
        let mut tracker = ProgressTracker::new(total);
        tracker.advance((total as f64 * percent / 100.0) as usize);
        Snapshot::capture(counters, &tracker, Duration::from_secs(90), false)
    }

    /// Helper to create a KeyEvent without modifiers
    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    /// Helper to create a KeyEvent with specific modifiers
    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }
}
