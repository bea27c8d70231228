use crate::error::SqlpvError;
use crate::import::{ImportEvent, ImportHandle};
use crate::progress::Snapshot;

/// Where the import stands, as far as the UI knows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Importing,
    /// Input fully forwarded; waiting for the operator to quit
    Done,
    Interrupted,
    Failed,
}

pub struct App {
    pub target: String,
    pub snapshot: Snapshot,
    pub phase: Phase,
    pub importer: ImportHandle,
    pub warning: Option<String>,
    pub error: Option<SqlpvError>,
    pub should_quit: bool,
    needs_render: bool,
}

impl App {
    pub fn new(importer: ImportHandle, target: String, warning: Option<String>) -> Self {
        Self {
            target,
            snapshot: Snapshot::default(),
            phase: Phase::Importing,
            importer,
            warning,
            error: None,
            should_quit: false,
            needs_render: true,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn should_render(&self) -> bool {
        self.needs_render
    }

    pub fn mark_dirty(&mut self) {
        self.needs_render = true;
    }

    pub fn clear_dirty(&mut self) {
        self.needs_render = false;
    }

    /// Drain pending import events (non-blocking)
    pub fn poll_import(&mut self) {
        while let Some(event) = self.importer.poll() {
            self.apply_event(event);
        }
    }

    pub fn apply_event(&mut self, event: ImportEvent) {
        match event {
            ImportEvent::Progress(snapshot) => {
                self.snapshot = snapshot;
            }
            ImportEvent::Finished(snapshot) => {
                self.snapshot = snapshot;
                self.phase = Phase::Done;
            }
            ImportEvent::Interrupted { lines_forwarded } => {
                log::debug!("Import stopped after {} lines", lines_forwarded);
                self.phase = Phase::Interrupted;
                self.should_quit = true;
            }
            ImportEvent::Failed(e) => {
                self.phase = Phase::Failed;
                self.error = Some(e);
                self.should_quit = true;
            }
        }
        self.mark_dirty();
    }

    /// Stop the import if it is still running and quit the UI
    pub fn quit(&mut self) {
        if self.phase == Phase::Importing {
            self.importer.interrupt();
            self.phase = Phase::Interrupted;
        }
        self.should_quit = true;
    }

    /// Wait for the import thread and surface a fatal import error
    pub fn finish(mut self) -> Result<Phase, SqlpvError> {
        self.importer.join();
        match self.error.take() {
            Some(e) => Err(e),
            None => Ok(self.phase),
        }
    }
}
