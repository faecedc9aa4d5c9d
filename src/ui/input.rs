//! Key bindings. Maps terminal key events to actions without touching any
//! state, so the bindings can be checked on their own.

use crate::timer::TimerState;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    Timer,
    Solver,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    None,
    Quit,
    // menu
    Focus(MenuItem),
    Open(MenuItem),
    ActivateFocused,
    // timer view
    Arm,
    Start,
    Stop,
    Confirm,
    Discard,
    Back,
}

fn is_ctrl_c(key: &KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}

pub fn menu_action(key: &KeyEvent) -> Action {
    if key.kind != KeyEventKind::Press {
        return Action::None;
    }
    if is_ctrl_c(key) {
        return Action::Quit;
    }

    match key.code {
        KeyCode::Char('1') | KeyCode::Char('t') => Action::Open(MenuItem::Timer),
        KeyCode::Char('2') | KeyCode::Char('s') => Action::Open(MenuItem::Solver),
        KeyCode::Left | KeyCode::Up => Action::Focus(MenuItem::Timer),
        KeyCode::Right | KeyCode::Down => Action::Focus(MenuItem::Solver),
        KeyCode::Enter | KeyCode::Char(' ') => Action::ActivateFocused,
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        _ => Action::None,
    }
}

/// Timer bindings.
///
/// In `Idle`, pressing space arms the timer and releasing it starts the
/// solve. Terminals that cannot report releases start on the press itself.
/// `armed` tells whether a space press has been seen since the last reset.
pub fn timer_action(key: &KeyEvent, state: TimerState, armed: bool, releases: bool) -> Action {
    if is_ctrl_c(key) {
        return Action::Quit;
    }

    let space = key.code == KeyCode::Char(' ');

    match (state, key.kind) {
        (TimerState::Idle, KeyEventKind::Press) if space => {
            if releases {
                Action::Arm
            } else {
                Action::Start
            }
        }
        (TimerState::Idle, KeyEventKind::Release) if space && armed => Action::Start,
        (TimerState::Idle, KeyEventKind::Press) => match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Action::Back,
            _ => Action::None,
        },

        (TimerState::Running, KeyEventKind::Press) if space => Action::Stop,

        (TimerState::AwaitingDecision, KeyEventKind::Press) => match key.code {
            KeyCode::Char('c') | KeyCode::Enter => Action::Confirm,
            KeyCode::Char('s') | KeyCode::Backspace | KeyCode::Esc => Action::Discard,
            _ => Action::None,
        },

        _ => Action::None,
    }
}

/// Presses this soon after the start belong to the key that started the
/// solve (typical auto-repeat delays are 250 to 500 ms).
pub const START_REPEAT_WINDOW: Duration = Duration::from_millis(600);

/// Presses this close to the previous space press are auto-repeat.
pub const REPEAT_GAP: Duration = Duration::from_millis(100);

/// Tells auto-repeated space presses from real ones on terminals that only
/// report presses, where a held key looks like a stream of presses.
#[derive(Debug, Clone, Copy, Default)]
pub struct RepeatFilter {
    started: Option<Instant>,
    last_press: Option<Instant>,
}

impl RepeatFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// The solve was started by a press at `now`.
    pub fn started(&mut self, now: Instant) {
        self.started = Some(now);
        self.last_press = Some(now);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Whether a space press at `now` is auto-repeat. Every press counts
    /// as the latest one, so a held key keeps being ignored.
    pub fn is_repeat(&mut self, now: Instant) -> bool {
        let since = |t: Option<Instant>| t.map(|t| now.saturating_duration_since(t));

        let near_start = since(self.started).is_some_and(|d| d < START_REPEAT_WINDOW);
        let chained = since(self.last_press).is_some_and(|d| d < REPEAT_GAP);

        self.last_press = Some(now);
        near_start || chained
    }
}
