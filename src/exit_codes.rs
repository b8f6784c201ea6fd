//! Exit code constants for the tim CLI.
//!
//! In single-run mode the wrapper exits with the child's own status, so only
//! the wrapper's own outcomes are named here:
//! - 0: Success (averaging mode always ends here)
//! - 1: Fatal error (no sub-command, or the child could not be spawned)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// Fatal error: the sub-command was missing or could not be launched.
pub const FATAL: i32 = 1;

/// Offset added to a signal number when a child is killed by a signal.
///
/// Matches the status a POSIX shell reports for the same child.
pub const SIGNAL_BASE: i32 = 128;
