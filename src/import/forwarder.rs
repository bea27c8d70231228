//! Line forwarding loop
//!
//! Reads the dump line by line, writes every line unmodified to the client,
//! then classifies and accounts for it. The display is refreshed only when
//! the integer percent changes.

use std::io::{BufRead, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use crate::classify::{self, Mode};
use crate::error::SqlpvError;
use crate::progress::{ProgressTracker, Snapshot};
use crate::stats::Counters;

/// Receives a snapshot on every display refresh
pub trait ProgressObserver {
    fn refresh(&mut self, snapshot: &Snapshot);
}

impl<F: FnMut(&Snapshot)> ProgressObserver for F {
    fn refresh(&mut self, snapshot: &Snapshot) {
        self(snapshot)
    }
}

/// How the loop ended when it ended without error
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// End of input; carries the final 100% snapshot
    Completed(Snapshot),
    /// Interrupt flag observed before the next read
    Interrupted { lines_forwarded: u64 },
}

/// Forwards input lines to a sink while keeping import statistics
pub struct Forwarder<R, W> {
    reader: R,
    sink: W,
    counters: Counters,
    mode: Mode,
    tracker: ProgressTracker,
    lines_forwarded: u64,
}

impl<R: BufRead, W: Write> Forwarder<R, W> {
    /// Create a forwarder for an input expected to be `total_bytes` long
    pub fn new(reader: R, sink: W, total_bytes: u64) -> Self {
        Self {
            reader,
            sink,
            counters: Counters::default(),
            mode: Mode::default(),
            tracker: ProgressTracker::new(total_bytes),
            lines_forwarded: 0,
        }
    }

    /// Run until end of input, interrupt, or the first read/write error
    ///
    /// Consumes the forwarder so the sink is dropped (and a child's stdin
    /// closed) exactly once, whichever way the loop ends.
    pub fn run<O: ProgressObserver>(
        mut self,
        interrupt: &AtomicBool,
        observer: &mut O,
    ) -> Result<Outcome, SqlpvError> {
        let start = Instant::now();
        let mut line = Vec::new();

        loop {
            if interrupt.load(Ordering::Relaxed) {
                log::debug!("Import interrupted after {} lines", self.lines_forwarded);
                return Ok(Outcome::Interrupted {
                    lines_forwarded: self.lines_forwarded,
                });
            }

            line.clear();
            let read = self
                .reader
                .read_until(b'\n', &mut line)
                .map_err(SqlpvError::Read)?;
            if read == 0 {
                break;
            }

            self.sink.write_all(&line).map_err(SqlpvError::Write)?;
            self.lines_forwarded += 1;

            if let Some(snapshot) = self.account(&line, start) {
                observer.refresh(&snapshot);
            }
        }

        self.sink.flush().map_err(SqlpvError::Write)?;

        self.tracker.finish();
        let snapshot = Snapshot::capture(self.counters, &self.tracker, start.elapsed(), true);
        observer.refresh(&snapshot);

        log::debug!(
            "Import complete: {} lines, {} bytes, {} statements",
            self.lines_forwarded,
            self.tracker.bytes_read(),
            self.counters.total()
        );

        Ok(Outcome::Completed(snapshot))
    }

    /// Classify and count one forwarded line
    ///
    /// Returns a snapshot when the display needs a refresh.
    fn account(&mut self, line: &[u8], start: Instant) -> Option<Snapshot> {
        let (category, mode) = classify::classify(line, self.mode);
        if let Some(category) = category {
            self.counters.record(category);
        }
        self.mode = mode;

        if !self.tracker.advance(line.len()) {
            return None;
        }

        let elapsed = start.elapsed();
        self.tracker.refresh(elapsed);
        Some(Snapshot::capture(self.counters, &self.tracker, elapsed, false))
    }
}

#[cfg(test)]
#[path = "forwarder_tests.rs"]
mod forwarder_tests;
