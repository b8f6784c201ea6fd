//! Process runner.
//!
//! Launches the wrapped command with inherited standard streams, blocks
//! until it exits, and records how long that took on both clocks.

use crate::clock::{CoarseClock, HighResClock, MonotonicClock, PerformanceCounter, micros_between};
use crate::error::{Result, TimError};
use crate::exit_codes;
use std::io;
use std::os::unix::process::ExitStatusExt;
use std::process::{Command, ExitStatus};

/// Measurements from a single execution of the wrapped command.
///
/// Runs are ordered by `elapsed_us` alone when aggregated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunResult {
    /// Coarse elapsed time in milliseconds.
    pub elapsed_ms: u64,
    /// High-resolution elapsed time in microseconds.
    pub elapsed_us: u64,
    /// Exit status of the child.
    pub exit_code: i32,
}

/// Capability to run a command to completion and time it.
pub trait ProcessLauncher {
    /// Run `command` once, blocking until it exits.
    fn run(&mut self, command: &str) -> Result<RunResult>;
}

/// Launches real child processes, timed with the given clocks.
#[derive(Debug, Clone)]
pub struct SystemLauncher<C = MonotonicClock, H = PerformanceCounter> {
    coarse: C,
    counter: H,
}

impl SystemLauncher {
    /// Create a launcher backed by the system's monotonic clocks.
    pub fn new() -> Self {
        Self::with_clocks(MonotonicClock::new(), PerformanceCounter::new())
    }
}

impl Default for SystemLauncher {
    fn default() -> Self {
        Self::new()
    }
}

impl<C, H> SystemLauncher<C, H> {
    pub fn with_clocks(coarse: C, counter: H) -> Self {
        Self { coarse, counter }
    }
}

impl<C: CoarseClock, H: HighResClock> ProcessLauncher for SystemLauncher<C, H> {
    fn run(&mut self, command: &str) -> Result<RunResult> {
        let mut process = build_command(command)?;

        let start_ms = self.coarse.now_ms();
        let frequency = self.counter.frequency();
        let start_ticks = self.counter.ticks();

        let status = {
            let mut child = process
                .spawn()
                .map_err(|source| TimError::ProcessCreationFailed {
                    command: command.to_string(),
                    source,
                })?;
            // The child is dropped at the end of this block on every path.
            child.wait().map_err(|source| TimError::Wait {
                command: command.to_string(),
                source,
            })?
        };

        let end_ticks = self.counter.ticks();
        let end_ms = self.coarse.now_ms();

        Ok(RunResult {
            elapsed_ms: end_ms.saturating_sub(start_ms),
            elapsed_us: micros_between(start_ticks, end_ticks, frequency),
            exit_code: exit_code(status),
        })
    }
}

/// Turn the command text into a program plus arguments.
fn build_command(command: &str) -> Result<Command> {
    let creation_failed = |message: String| TimError::ProcessCreationFailed {
        command: command.to_string(),
        source: io::Error::new(io::ErrorKind::InvalidInput, message),
    };

    let args = shell_words::split(command)
        .map_err(|e| creation_failed(format!("failed to parse command: {}", e)))?;

    let Some((program, cmd_args)) = args.split_first() else {
        return Err(creation_failed("command is empty".to_string()));
    };

    let mut process = Command::new(program);
    process.args(cmd_args);
    Ok(process)
}

/// Exit status as a shell would report it.
fn exit_code(status: ExitStatus) -> i32 {
    status
        .code()
        .or_else(|| status.signal().map(|signal| exit_codes::SIGNAL_BASE + signal))
        .unwrap_or(exit_codes::FATAL)
}
