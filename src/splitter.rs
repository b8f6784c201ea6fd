//! Command-line splitting.
//!
//! Finds where the wrapped command starts inside the wrapper's own
//! invocation line, and whether the wrapper was invoked under its averaging
//! alias.

use crate::error::{Result, TimError};

/// Program name that selects averaging mode.
pub const AVERAGING_ALIAS: &str = "timavg";

/// The wrapped command plus the mode the wrapper was invoked in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitCommand<'a> {
    /// Everything after the wrapper's own token, leading spaces removed.
    pub command: &'a str,
    /// True when the wrapper's token is exactly [`AVERAGING_ALIAS`].
    pub averaging: bool,
}

/// Split an invocation line into the wrapped command and the averaging flag.
///
/// Only one pair of double quotes around the wrapper's own token is
/// accounted for; quoting inside the wrapped command is left untouched and
/// handed to the runner as-is.
///
/// # Errors
///
/// Returns [`TimError::MissingSubcommand`] when the line does not hold a
/// program token plus at least one more token.
pub fn split_command(line: &str) -> Result<SplitCommand<'_>> {
    let tokens = shell_words::split(line).map_err(|_| TimError::MissingSubcommand)?;
    if tokens.len() < 2 {
        return Err(TimError::MissingSubcommand);
    }

    let program = &tokens[0];
    let averaging = program == AVERAGING_ALIAS;

    let mut start = program.len();
    if line.starts_with('"') {
        // opening and closing quote
        start += 2;
    }

    let command = line
        .get(start..)
        .ok_or(TimError::MissingSubcommand)?
        .trim_start_matches(' ');

    Ok(SplitCommand { command, averaging })
}
