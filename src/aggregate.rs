//! Averaging mode.
//!
//! Runs the wrapped command [`RUNS`] times back to back, discards the
//! fastest and slowest run by high-resolution time, and averages the rest.

use crate::error::Result;
use crate::runner::{ProcessLauncher, RunResult};

/// Number of runs in averaging mode.
pub const RUNS: usize = 7;

/// Runs discarded from each end of the sorted sample.
pub const TRIM: usize = 1;

/// Trimmed mean of both clocks over one averaging session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AggregateResult {
    /// Mean coarse elapsed time in milliseconds.
    pub elapsed_ms: u64,
    /// Mean high-resolution elapsed time in microseconds.
    pub elapsed_us: u64,
}

/// Run `command` [`RUNS`] times sequentially and return the trimmed mean.
///
/// Child exit codes are ignored. The first launcher error aborts the
/// session with no partial result.
pub fn run_averaged<L>(launcher: &mut L, command: &str) -> Result<AggregateResult>
where
    L: ProcessLauncher + ?Sized,
{
    let mut runs = [RunResult::default(); RUNS];
    for slot in runs.iter_mut() {
        *slot = launcher.run(command)?;
    }
    Ok(trimmed_mean(runs))
}

/// Sort by `elapsed_us`, drop [`TRIM`] runs from each end, and average.
///
/// Ties keep their run order; integer division truncates.
pub fn trimmed_mean(mut runs: [RunResult; RUNS]) -> AggregateResult {
    runs.sort_by_key(|run| run.elapsed_us);
    let kept = &runs[TRIM..RUNS - TRIM];
    let count = kept.len() as u128;

    let ms_sum: u128 = kept.iter().map(|run| u128::from(run.elapsed_ms)).sum();
    let us_sum: u128 = kept.iter().map(|run| u128::from(run.elapsed_us)).sum();

    // a mean of u64 values always fits back into u64
    AggregateResult {
        elapsed_ms: (ms_sum / count) as u64,
        elapsed_us: (us_sum / count) as u64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TimError;
    use crate::test_support::FakeLauncher;
    use std::io;

    fn runs_from(pairs: [(u64, u64); RUNS]) -> [RunResult; RUNS] {
        pairs.map(|(elapsed_ms, elapsed_us)| RunResult {
            elapsed_ms,
            elapsed_us,
            exit_code: 0,
        })
    }

    #[test]
    fn test_trimmed_mean_drops_fastest_and_slowest() {
        let mut launcher = FakeLauncher::with_timings(&[5, 1, 9, 3, 7, 2, 8]);
        let avg = run_averaged(&mut launcher, "echo hi").unwrap();
        assert_eq!(avg.elapsed_us, 5);
    }

    #[test]
    fn test_trimmed_mean_orders_by_high_res_only() {
        // coarse readings disagree with the high-res ordering on purpose
        let runs = runs_from([
            (1_000, 50),
            (0, 10),
            (10, 20),
            (20, 30),
            (30, 40),
            (40, 45),
            (5_000, 5),
        ]);
        let avg = trimmed_mean(runs);
        assert_eq!(avg.elapsed_us, (10 + 20 + 30 + 40 + 45) / 5);
        assert_eq!(avg.elapsed_ms, (10 + 20 + 30 + 40) / 5);
    }

    #[test]
    fn test_trimmed_mean_truncates() {
        // kept: ms 1+1+1+2+4 = 9, us 2+2+2+2+3 = 11
        let runs = runs_from([(1, 1), (1, 2), (1, 2), (1, 2), (2, 2), (4, 3), (9, 9)]);
        let avg = trimmed_mean(runs);
        assert_eq!(avg.elapsed_us, 2);
        assert_eq!(avg.elapsed_ms, 1);
    }

    #[test]
    fn test_trimmed_mean_handles_huge_values() {
        let runs = runs_from([(u64::MAX, u64::MAX); RUNS]);
        let avg = trimmed_mean(runs);
        assert_eq!(avg.elapsed_ms, u64::MAX);
        assert_eq!(avg.elapsed_us, u64::MAX);
    }

    #[test]
    fn test_run_averaged_runs_exactly_seven_times() {
        let mut launcher = FakeLauncher::with_timings(&[1, 2, 3, 4, 5, 6, 7, 8]);
        run_averaged(&mut launcher, "make -j8").unwrap();
        assert_eq!(launcher.commands.len(), RUNS);
        assert!(launcher.commands.iter().all(|c| c == "make -j8"));
        assert_eq!(launcher.results.len(), 1);
    }

    #[test]
    fn test_run_averaged_ignores_child_exit_codes() {
        let mut launcher = FakeLauncher::with_timings(&[10; RUNS]);
        for result in launcher.results.iter_mut() {
            if let Ok(run) = result {
                run.exit_code = 42;
            }
        }
        let avg = run_averaged(&mut launcher, "false").unwrap();
        assert_eq!(avg.elapsed_us, 10);
    }

    #[test]
    fn test_run_averaged_stops_at_first_error() {
        let mut launcher = FakeLauncher::with_timings(&[1, 2]);
        launcher.results.push_back(Err(TimError::ProcessCreationFailed {
            command: "gone".to_string(),
            source: io::Error::from(io::ErrorKind::NotFound),
        }));
        launcher.results.extend(FakeLauncher::with_timings(&[4, 5, 6, 7]).results);

        let err = run_averaged(&mut launcher, "gone").unwrap_err();
        assert!(matches!(err, TimError::ProcessCreationFailed { .. }));
        assert_eq!(launcher.commands.len(), 3);
    }
}
