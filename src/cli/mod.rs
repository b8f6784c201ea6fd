//! Invocation intake for tim.
//!
//! tim has no flags of its own: everything after the wrapper's program token
//! belongs to the command being timed. clap collects those tokens verbatim
//! and this module rebuilds the single invocation line that the splitter
//! works from.

use crate::error::{Result, TimError};
use clap::Parser;
use std::ffi::OsString;
use std::path::Path;

/// Program token used when the OS supplies no `argv[0]`, or one the
/// splitter could not read back unchanged.
pub const DEFAULT_PROGRAM: &str = "tim";

/// Time a command with a coarse and a high-resolution clock.
///
/// Invoke as `timavg` to run the command seven times and report the mean of
/// the middle five runs.
#[derive(Parser, Debug)]
#[command(name = "tim")]
#[command(about, long_about = None)]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// Command to time, with its arguments, passed through untouched.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, num_args = 0..)]
    pub command: Vec<OsString>,
}

impl Cli {
    /// Parse the arguments that follow the program token.
    ///
    /// A `--` is inserted ahead of them so clap never consumes one of the
    /// wrapped command's own `--` separators.
    pub fn from_command_args<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = OsString>,
    {
        let argv = [OsString::from(DEFAULT_PROGRAM), OsString::from("--")]
            .into_iter()
            .chain(args);
        Cli::try_parse_from(argv).map_err(|_| TimError::MissingSubcommand)
    }
}

/// Rebuild the raw invocation line from an argv iterator.
///
/// The program token is the file name of `argv[0]`, so a `timavg` symlink
/// anywhere on `PATH` is recognized. A program token containing spaces is
/// wrapped in one pair of double quotes. Remaining tokens are shell-quoted,
/// which lets the runner recover the exact argv later.
///
/// # Errors
///
/// Returns [`TimError::NonUtf8Argument`] when an argument of the wrapped
/// command is not valid UTF-8.
pub fn invocation_line<I, T>(args: I) -> Result<String>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut args = args.into_iter().map(Into::<OsString>::into);
    let program = args
        .next()
        .map(|argv0| program_token(&argv0))
        .unwrap_or_else(|| DEFAULT_PROGRAM.to_string());

    let cli = Cli::from_command_args(args)?;
    let command = cli
        .command
        .into_iter()
        .map(|arg| {
            arg.into_string().map_err(|arg| TimError::NonUtf8Argument {
                argument: arg.to_string_lossy().into_owned(),
            })
        })
        .collect::<Result<Vec<String>>>()?;

    let program = if program.contains(' ') {
        format!("\"{}\"", program)
    } else {
        program
    };

    if command.is_empty() {
        return Ok(program);
    }

    Ok(format!("{} {}", program, shell_words::join(&command)))
}

/// File name of `argv[0]`, or [`DEFAULT_PROGRAM`] when that name would not
/// tokenize back to itself.
fn program_token(argv0: &OsString) -> String {
    Path::new(argv0)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .filter(|name| is_plain_token(name))
        .unwrap_or_else(|| DEFAULT_PROGRAM.to_string())
}

/// True when `shell_words` reads `name` back byte for byte, bare or inside
/// one pair of double quotes.
fn is_plain_token(name: &str) -> bool {
    !name.is_empty()
        && !name.starts_with('#')
        && !name
            .chars()
            .any(|c| matches!(c, '\'' | '"' | '\\') || (c.is_whitespace() && c != ' '))
}
