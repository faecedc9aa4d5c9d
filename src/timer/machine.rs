use crate::timer::state::{Signal, TimerState};
use crate::utils::time::round_millis;
use std::time::Instant;

/// Result of feeding a signal to the machine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    /// The signal is not valid in the current state; nothing changed
    Ignored,
    Started,
    Stopped { elapsed: f64 },
    /// The solve was counted; the caller decides whether it is a record
    Confirmed { elapsed: f64 },
    Discarded { elapsed: f64 },
}

/// One timing session: state plus accumulated elapsed seconds.
///
/// Elapsed time grows only through [`TimerMachine::tick`]. Each tick adds
/// the wall-clock delta since the previous tick and rounds the total to
/// whole milliseconds.
#[derive(Debug, Clone, Default)]
pub struct TimerMachine {
    state: TimerState,
    elapsed: f64,
    last_tick: Option<Instant>,
}

impl TimerMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> TimerState {
        self.state
    }

    /// Elapsed seconds, rounded to milliseconds.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn is_running(&self) -> bool {
        self.state == TimerState::Running
    }

    pub fn apply(&mut self, signal: Signal, now: Instant) -> Outcome {
        let Some(next) = self.state.next(signal) else {
            return Outcome::Ignored;
        };

        let outcome = match signal {
            Signal::Start => {
                self.elapsed = 0.0;
                self.last_tick = Some(now);
                Outcome::Started
            }
            Signal::Stop => {
                // frozen at the last tick
                self.last_tick = None;
                Outcome::Stopped {
                    elapsed: self.elapsed,
                }
            }
            Signal::Confirm => Outcome::Confirmed {
                elapsed: self.reset(),
            },
            Signal::Discard => Outcome::Discarded {
                elapsed: self.reset(),
            },
        };

        self.state = next;
        outcome
    }

    pub fn start(&mut self, now: Instant) -> Outcome {
        self.apply(Signal::Start, now)
    }

    pub fn stop(&mut self) -> Outcome {
        self.apply(Signal::Stop, Instant::now())
    }

    pub fn confirm(&mut self) -> Outcome {
        self.apply(Signal::Confirm, Instant::now())
    }

    pub fn discard(&mut self) -> Outcome {
        self.apply(Signal::Discard, Instant::now())
    }

    /// Advance a running timer to `now`. Outside `Running` this is a no-op.
    pub fn tick(&mut self, now: Instant) -> f64 {
        if self.state != TimerState::Running {
            return self.elapsed;
        }

        if let Some(last) = self.last_tick {
            let delta = now.saturating_duration_since(last).as_secs_f64();
            self.elapsed = round_millis(self.elapsed + delta);
        }
        self.last_tick = Some(now);

        self.elapsed
    }

    fn reset(&mut self) -> f64 {
        let elapsed = self.elapsed;
        self.elapsed = 0.0;
        self.last_tick = None;
        elapsed
    }
}
