//! Error types for the tim CLI.
//!
//! Uses thiserror for derive macros. Every variant is fatal: the entry point
//! prints the message and exits with the mapped status.

use crate::exit_codes;
use std::io;
use thiserror::Error;

/// Main error type for tim operations.
///
/// A wrapped command that runs and returns a non-zero status is not an
/// error; its status is reported as data.
#[derive(Error, Debug)]
pub enum TimError {
    /// The invocation held no command to time.
    #[error("tim: Could not get subprocess command line.")]
    MissingSubcommand,

    /// An argument of the wrapped command is not valid UTF-8.
    #[error("tim: Subprocess argument is not valid UTF-8: {argument}")]
    NonUtf8Argument { argument: String },

    /// The OS refused to create the child process.
    #[error(
        "tim: Could not spawn subprocess, command line:\n{command}\nYou may need to prefix the command with \"sh -c \"."
    )]
    ProcessCreationFailed {
        command: String,
        #[source]
        source: io::Error,
    },

    /// The child was spawned but waiting on it failed.
    #[error("tim: Could not wait for subprocess, command line:\n{command}\n{source}")]
    Wait {
        command: String,
        #[source]
        source: io::Error,
    },
}

impl TimError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            TimError::MissingSubcommand => exit_codes::FATAL,
            TimError::NonUtf8Argument { .. } => exit_codes::FATAL,
            TimError::ProcessCreationFailed { .. } => exit_codes::FATAL,
            TimError::Wait { .. } => exit_codes::FATAL,
        }
    }
}

/// Result type alias for tim operations.
pub type Result<T> = std::result::Result<T, TimError>;
