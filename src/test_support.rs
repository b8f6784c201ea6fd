//! Shared test doubles for clocks and process launching.

use crate::clock::{CoarseClock, HighResClock};
use crate::error::Result;
use crate::runner::{ProcessLauncher, RunResult};
use std::cell::RefCell;
use std::collections::VecDeque;

/// Clock that replays scripted readings.
#[derive(Debug)]
pub(crate) struct ScriptedClock {
    readings: RefCell<VecDeque<u64>>,
    frequency: u64,
}

impl ScriptedClock {
    pub(crate) fn new(readings: &[u64], frequency: u64) -> Self {
        Self {
            readings: RefCell::new(readings.iter().copied().collect()),
            frequency,
        }
    }

    fn next(&self) -> u64 {
        self.readings
            .borrow_mut()
            .pop_front()
            .expect("scripted clock ran out of readings")
    }
}

impl CoarseClock for ScriptedClock {
    fn now_ms(&self) -> u64 {
        self.next()
    }
}

impl HighResClock for ScriptedClock {
    fn frequency(&self) -> u64 {
        self.frequency
    }

    fn ticks(&self) -> u64 {
        self.next()
    }
}

/// Launcher returning scripted results without spawning anything.
#[derive(Debug, Default)]
pub(crate) struct FakeLauncher {
    pub(crate) results: VecDeque<Result<RunResult>>,
    pub(crate) commands: Vec<String>,
}

impl FakeLauncher {
    pub(crate) fn with_timings(timings_us: &[u64]) -> Self {
        Self {
            results: timings_us
                .iter()
                .map(|&us| {
                    Ok(RunResult {
                        elapsed_ms: us / 1_000,
                        elapsed_us: us,
                        exit_code: 0,
                    })
                })
                .collect(),
            commands: Vec::new(),
        }
    }
}

impl ProcessLauncher for FakeLauncher {
    fn run(&mut self, command: &str) -> Result<RunResult> {
        self.commands.push(command.to_string());
        self.results
            .pop_front()
            .expect("fake launcher ran out of results")
    }
}
