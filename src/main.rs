//! tim: time a subprocess with a coarse and a high-resolution clock.
//!
//! This is the main entry point for the `tim` CLI. It rebuilds the
//! invocation line, splits out the command to time, runs it once (or seven
//! times when invoked as `timavg`), prints the report, and chooses the exit
//! code.

mod aggregate;
mod cli;
mod clock;
pub mod error;
pub mod exit_codes;
mod report;
mod runner;
mod splitter;

#[cfg(test)]
mod test_support;

use error::Result;
use runner::{ProcessLauncher, SystemLauncher};
use std::process::ExitCode;

fn main() -> ExitCode {
    let mut launcher = SystemLauncher::new();

    match run(std::env::args_os(), &mut launcher) {
        Ok(code) => ExitCode::from(code as u8),
        Err(err) => {
            // Fatal messages go to stdout, next to the report they replace
            println!("{}", err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}

/// Time the command held in `args` and return the exit code to use.
///
/// Single-run mode forwards the child's exit code; averaging mode always
/// succeeds once the average is printed.
fn run<I, T, L>(args: I, launcher: &mut L) -> Result<i32>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString>,
    L: ProcessLauncher + ?Sized,
{
    let line = cli::invocation_line(args)?;
    let split = splitter::split_command(&line)?;

    if split.averaging {
        let avg = aggregate::run_averaged(launcher, split.command)?;
        print!("{}", report::render_average(&avg));
        Ok(exit_codes::SUCCESS)
    } else {
        let result = launcher.run(split.command)?;
        print!("{}", report::render_run(&result));
        Ok(result.exit_code)
    }
}
