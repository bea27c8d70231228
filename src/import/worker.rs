//! Import worker thread
//!
//! Runs the forwarder off the UI thread. Progress snapshots and the final
//! outcome are sent back over a channel; the UI interrupts the import by
//! setting a shared flag that the loop polls before each read.

use std::io::{BufReader, Read, Write};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{Receiver, TryRecvError, channel};
use std::thread::JoinHandle;

use super::forwarder::{Forwarder, Outcome};
use crate::error::SqlpvError;
use crate::progress::Snapshot;

const READ_BUFFER_SIZE: usize = 256 * 1024;

/// Message from the import thread to the UI
#[derive(Debug)]
pub enum ImportEvent {
    Progress(Snapshot),
    Finished(Snapshot),
    Interrupted { lines_forwarded: u64 },
    Failed(SqlpvError),
}

impl ImportEvent {
    /// Whether this is the last event the thread sends
    pub fn is_terminal(&self) -> bool {
        !matches!(self, ImportEvent::Progress(_))
    }
}

/// Owns the import thread and its channel
pub struct ImportHandle {
    rx: Option<Receiver<ImportEvent>>,
    interrupt: Arc<AtomicBool>,
    thread: Option<JoinHandle<()>>,
}

impl ImportHandle {
    /// Spawn the import thread
    ///
    /// The thread reads `reader` line by line and forwards everything to
    /// `sink`. The sink is dropped when the thread finishes, which closes a
    /// client's stdin.
    pub fn spawn<R, W>(reader: R, sink: W, total_bytes: u64) -> Self
    where
        R: Read + Send + 'static,
        W: Write + Send + 'static,
    {
        let (tx, rx) = channel();
        let interrupt = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&interrupt);

        let thread = std::thread::spawn(move || {
            log::debug!("Import thread started, expecting {} bytes", total_bytes);

            let reader = BufReader::with_capacity(READ_BUFFER_SIZE, reader);
            let forwarder = Forwarder::new(reader, sink, total_bytes);
            let progress_tx = tx.clone();
            let mut observer = move |snapshot: &Snapshot| {
                if !snapshot.finished {
                    let _ = progress_tx.send(ImportEvent::Progress(snapshot.clone()));
                }
            };

            let event = match forwarder.run(&flag, &mut observer) {
                Ok(Outcome::Completed(snapshot)) => ImportEvent::Finished(snapshot),
                Ok(Outcome::Interrupted { lines_forwarded }) => {
                    ImportEvent::Interrupted { lines_forwarded }
                }
                Err(e) => {
                    log::error!("Import failed: {}", e);
                    ImportEvent::Failed(e)
                }
            };
            let _ = tx.send(event);

            log::debug!("Import thread shutting down");
        });

        Self {
            rx: Some(rx),
            interrupt,
            thread: Some(thread),
        }
    }

    /// Ask the import loop to stop before its next read
    pub fn interrupt(&self) {
        self.interrupt.store(true, Ordering::Relaxed);
    }

    pub fn is_interrupted(&self) -> bool {
        self.interrupt.load(Ordering::Relaxed)
    }

    /// Poll for the next event (non-blocking)
    ///
    /// Returns `None` while nothing is pending and after the terminal event
    /// has been delivered.
    pub fn poll(&mut self) -> Option<ImportEvent> {
        let rx = self.rx.as_ref()?;
        match rx.try_recv() {
            Ok(event) => {
                if event.is_terminal() {
                    self.rx = None;
                }
                Some(event)
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                self.rx = None;
                Some(ImportEvent::Failed(SqlpvError::Disconnected))
            }
        }
    }

    /// Whether the terminal event has been delivered
    pub fn is_done(&self) -> bool {
        self.rx.is_none()
    }

    /// Wait for the import thread to exit
    ///
    /// Blocks until the loop notices the interrupt flag or its current
    /// read returns.
    pub fn join(&mut self) {
        if let Some(thread) = self.thread.take()
            && thread.join().is_err()
        {
            log::error!("Import thread panicked");
        }
    }
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
