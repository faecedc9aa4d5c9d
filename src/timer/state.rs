//! Timer states, signals and the transition table.

/// Where a timing attempt currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimerState {
    /// No attempt in progress
    #[default]
    Idle,
    /// Elapsed time is accumulating
    Running,
    /// Stopped, waiting for the user to count or skip the solve
    AwaitingDecision,
}

/// Discrete user signals driving the timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    Start,
    Stop,
    Confirm,
    Discard,
}

impl TimerState {
    /// Transition table. `None` means the signal is ignored in this state.
    pub fn next(self, signal: Signal) -> Option<TimerState> {
        use Signal::*;
        use TimerState::*;

        match (self, signal) {
            (Idle, Start) => Some(Running),
            (Running, Stop) => Some(AwaitingDecision),
            (AwaitingDecision, Confirm) | (AwaitingDecision, Discard) => Some(Idle),
            _ => None,
        }
    }
}
