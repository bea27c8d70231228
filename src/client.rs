//! Database client process
//!
//! Builds the client command line from config and CLI flags and spawns it
//! with a captured stdin. The client's stdout and stderr go straight to the
//! operator's terminal.

use std::path::PathBuf;
use std::process::{Child, ChildStdin, Command, Stdio};

use crate::config::ClientConfig;
use crate::error::SqlpvError;

/// Everything needed to launch the client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientOptions {
    pub program: String,
    pub target: String,
    pub host: Option<String>,
    pub user: Option<String>,
    pub password: Option<String>,
    pub force: bool,
    pub extra_args: Vec<String>,
}

impl ClientOptions {
    /// Start from the config file defaults for `target`
    pub fn new(target: impl Into<String>, config: &ClientConfig) -> Self {
        Self {
            program: config.program.clone(),
            target: target.into(),
            host: config.host.clone(),
            user: config.user.clone(),
            password: None,
            force: false,
            extra_args: config.extra_args.clone(),
        }
    }

    pub fn with_program(mut self, program: Option<String>) -> Self {
        if let Some(program) = program {
            self.program = program;
        }
        self
    }

    pub fn with_host(mut self, host: Option<String>) -> Self {
        if host.is_some() {
            self.host = host;
        }
        self
    }

    pub fn with_user(mut self, user: Option<String>) -> Self {
        if user.is_some() {
            self.user = user;
        }
        self
    }

    pub fn with_password(mut self, password: Option<String>) -> Self {
        if password.is_some() {
            self.password = password;
        }
        self
    }

    /// Pass `-f` so the client keeps going after SQL errors
    pub fn with_force(mut self, force: bool) -> Self {
        self.force = self.force || force;
        self
    }

    /// Client arguments, target database last
    ///
    /// The password is glued to `-p` since mysql treats a separate
    /// argument as the database name and prompts instead.
    pub fn args(&self) -> Vec<String> {
        let mut args = Vec::new();

        if let Some(host) = self.host.as_deref().filter(|h| !h.is_empty()) {
            args.push("-h".to_string());
            args.push(host.to_string());
        }
        if let Some(user) = self.user.as_deref().filter(|u| !u.is_empty()) {
            args.push("-u".to_string());
            args.push(user.to_string());
        }
        if let Some(password) = self.password.as_deref().filter(|p| !p.is_empty()) {
            args.push(format!("-p{}", password));
        }
        if self.force {
            args.push("-f".to_string());
        }
        args.extend(self.extra_args.iter().cloned());
        args.push(self.target.clone());

        args
    }

    /// Command with stdin piped and output inherited
    pub fn command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command
            .args(self.args())
            .stdin(Stdio::piped())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        command
    }

    /// Spawn the client and take ownership of its stdin
    pub fn spawn(&self) -> Result<(Child, ChildStdin), SqlpvError> {
        log::debug!("Spawning {} for target {}", self.program, self.target);

        let mut child = self.command().spawn().map_err(|source| SqlpvError::Spawn {
            program: self.program.clone(),
            source,
        })?;
        let Some(stdin) = child.stdin.take() else {
            let _ = child.kill();
            return Err(SqlpvError::PipeUnavailable);
        };

        Ok((child, stdin))
    }
}

/// Validate that the client binary exists in PATH
pub fn validate_client_exists(program: &str) -> Result<PathBuf, SqlpvError> {
    which::which(program).map_err(|_| SqlpvError::ClientNotFound(program.to_string()))
}
