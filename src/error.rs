use std::process::ExitStatus;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SqlpvError {
    #[error("{0} binary not found in PATH.\n\nInstall the MySQL client or pass --client <PROGRAM>.")]
    ClientNotFound(String),

    #[error("Failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Client stdin pipe was not captured")]
    PipeUnavailable,

    #[error("Unable to determine input size: {0}")]
    InputStat(#[source] std::io::Error),

    #[error("Failed to read input: {0}")]
    Read(#[source] std::io::Error),

    #[error("Failed to write to client stdin: {0}")]
    Write(#[source] std::io::Error),

    #[error("Import thread disconnected")]
    Disconnected,

    #[error("Client exited with {0}")]
    ClientFailed(ExitStatus),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
