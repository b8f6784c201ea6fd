//! Report rendering.
//!
//! Coarse readings print as `<minutes>m<seconds>.<millis>s`, high-resolution
//! readings as whole microseconds.

use crate::aggregate::AggregateResult;
use crate::runner::RunResult;

const MS_PER_MINUTE: u64 = 60 * 1000;
const MS_PER_SECOND: u64 = 1000;

/// Format milliseconds as `<m>m<s>.<fff>s`.
pub fn format_ms(ms: u64) -> String {
    let minutes = ms / MS_PER_MINUTE;
    let remainder = ms % MS_PER_MINUTE;
    format!(
        "{}m{}.{:03}s",
        minutes,
        remainder / MS_PER_SECOND,
        remainder % MS_PER_SECOND
    )
}

/// Format microseconds as `<us>us`.
pub fn format_us(us: u64) -> String {
    format!("{}us", us)
}

/// Render the report for a single run.
///
/// Starts with a blank line so it stands apart from the child's output.
pub fn render_run(run: &RunResult) -> String {
    format!(
        "\nreal: {}\nqpc: {}\n",
        format_ms(run.elapsed_ms),
        format_us(run.elapsed_us)
    )
}

/// Render the report for an averaging session.
pub fn render_average(avg: &AggregateResult) -> String {
    format!(
        "avg = {}\n      {}\n",
        format_ms(avg.elapsed_ms),
        format_us(avg.elapsed_us)
    )
}
