//! Timer session: the state machine wired to a best-time store.

use crate::errors::AppResult;
use crate::store::BestTimeStore;
use crate::timer::{Outcome, TimerMachine, TimerState};
use std::time::Instant;

/// What happened to a finished solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Decision {
    /// Counted and faster than the previous best (or the first one)
    NewBest { time: f64, previous: Option<f64> },
    /// Counted but not strictly faster than `best`
    NotBest { time: f64, best: f64 },
    /// Counted but zero-length, so it cannot be stored as a record
    TooShort,
    /// Skipped; the store was not touched
    Discarded { time: f64 },
}

/// `time` beats `best` only when strictly smaller; anything beats no best.
pub fn is_new_best(time: f64, best: Option<f64>) -> bool {
    best.is_none_or(|b| time < b)
}

pub struct Session<S: BestTimeStore> {
    machine: TimerMachine,
    store: S,
    best: Option<f64>,
}

impl<S: BestTimeStore> Session<S> {
    /// Build a session. The store is not read until [`Session::refresh_best`]
    /// or a confirmed solve.
    pub fn new(store: S) -> Self {
        Self {
            machine: TimerMachine::new(),
            store,
            best: None,
        }
    }

    pub fn machine(&self) -> &TimerMachine {
        &self.machine
    }

    pub fn state(&self) -> TimerState {
        self.machine.state()
    }

    pub fn elapsed(&self) -> f64 {
        self.machine.elapsed()
    }

    /// Best time as last read from or written to the store.
    pub fn best(&self) -> Option<f64> {
        self.best
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn refresh_best(&mut self) -> AppResult<Option<f64>> {
        self.best = self.store.current_best()?;
        Ok(self.best)
    }

    pub fn start(&mut self, now: Instant) -> Outcome {
        self.machine.start(now)
    }

    pub fn tick(&mut self, now: Instant) -> f64 {
        self.machine.tick(now)
    }

    pub fn stop(&mut self) -> Outcome {
        self.machine.stop()
    }

    /// Count the stopped solve. Returns `None` when no solve is awaiting a
    /// decision.
    ///
    /// The machine only leaves `AwaitingDecision` once the store has taken
    /// the result; on a store error the stopped time stays on screen and
    /// can be counted again or skipped.
    pub fn confirm(&mut self) -> AppResult<Option<Decision>> {
        if self.machine.state() != TimerState::AwaitingDecision {
            return Ok(None);
        }
        let elapsed = self.machine.elapsed();

        if elapsed <= 0.0 {
            self.machine.confirm();
            return Ok(Some(Decision::TooShort));
        }

        let best = self.store.current_best()?;
        self.best = best;

        if let Some(current) = best
            && !is_new_best(elapsed, best)
        {
            self.machine.confirm();
            return Ok(Some(Decision::NotBest {
                time: elapsed,
                best: current,
            }));
        }

        self.store.record_best(elapsed)?;
        self.best = Some(elapsed);
        self.machine.confirm();

        Ok(Some(Decision::NewBest {
            time: elapsed,
            previous: best,
        }))
    }

    /// Skip the stopped solve without touching the store.
    pub fn discard(&mut self) -> Option<Decision> {
        match self.machine.discard() {
            Outcome::Discarded { elapsed } => Some(Decision::Discarded { time: elapsed }),
            _ => None,
        }
    }
}
