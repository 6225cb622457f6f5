//! Error types for the application.
//!
//! - [`FsError`] - tree store failures (lookup, collision, rmdir preconditions)
//! - [`ShellError`] - command-level failures reported back to the terminal
//! - [`ConfigError`] - loading the runtime configuration file

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Tree store errors.
///
/// None of these are fatal: every operation checks before it mutates, so a
/// failed call leaves the tree untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FsError {
    /// Name absent from the directory, or not a file where one was expected
    #[error("'{0}' not found")]
    NotFound(String),
    /// Destination of a move is already taken
    #[error("destination '{0}' already exists")]
    AlreadyExists(String),
    /// rmdir precondition failed; the cause is deliberately not distinguished
    #[error("folder '{0}' is not empty or does not exist")]
    NotEmptyOrNotFound(String),
    /// A file was found where a directory is required
    #[error("'{0}' is not a directory")]
    NotADirectory(String),
    /// Names are single segments; `/` is reserved for the root
    #[error("'{0}' is not a valid name")]
    InvalidName(String),
}

/// Command-level errors produced while validating or executing input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShellError {
    #[error(transparent)]
    Fs(#[from] FsError),
    /// Required operand absent, e.g. `mkdir` with no name
    #[error("'{command}' requires {requirement}")]
    MissingArgument {
        command: &'static str,
        requirement: &'static str,
    },
    /// `detail` asked about a name that is not a command
    #[error("no details found for command '{0}'")]
    NoDetail(String),
    #[error("Unknown command: {0}")]
    UnknownCommand(String),
}

impl ShellError {
    /// Render as the single line shown in the terminal.
    pub fn to_message(&self) -> String {
        match self {
            Self::UnknownCommand(_) => self.to_string(),
            _ => format!("Error: {}.", self),
        }
    }
}

/// Failures while loading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
