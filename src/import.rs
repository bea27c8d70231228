//! Import module
//!
//! The forwarder is the read-forward-classify loop; the worker runs it on a
//! background thread and reports progress to the UI over a channel.

pub mod forwarder;
pub mod worker;

pub use forwarder::{Forwarder, Outcome, ProgressObserver};
pub use worker::{ImportEvent, ImportHandle};
