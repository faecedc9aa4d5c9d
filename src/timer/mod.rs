//! Stopwatch state machine.
//!
//! Pure data: no widgets, no storage. The UI feeds signals and ticks in and
//! renders whatever state comes out.

pub mod machine;
pub mod state;

pub use machine::{Outcome, TimerMachine};
pub use state::{Signal, TimerState};
