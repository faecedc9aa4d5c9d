//! Raw-mode terminal session, restored when dropped.

use crate::errors::{AppError, AppResult};
use crossterm::cursor::{Hide, Show};
use crossterm::event::{
    KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
    supports_keyboard_enhancement,
};
use std::io::{self, IsTerminal, Stdout};

pub struct TerminalGuard {
    out: Stdout,
    releases: bool,
}

impl TerminalGuard {
    /// Enter raw mode and the alternate screen. Key release reporting is
    /// requested when the terminal supports it.
    pub fn enter() -> AppResult<Self> {
        if !io::stdin().is_terminal() || !io::stdout().is_terminal() {
            return Err(AppError::Terminal(
                "the timer needs an interactive terminal".to_string(),
            ));
        }

        let mut out = io::stdout();
        let releases = supports_keyboard_enhancement().unwrap_or(false);

        enable_raw_mode()?;
        execute!(out, EnterAlternateScreen, Hide)?;
        if releases {
            execute!(
                out,
                PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
            )?;
        }

        Ok(Self { out, releases })
    }

    pub fn out(&mut self) -> &mut Stdout {
        &mut self.out
    }

    /// Whether key release events will be delivered.
    pub fn reports_releases(&self) -> bool {
        self.releases
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if self.releases {
            let _ = execute!(self.out, PopKeyboardEnhancementFlags);
        }
        let _ = execute!(self.out, Show, LeaveAlternateScreen);
        let _ = disable_raw_mode();
    }
}
