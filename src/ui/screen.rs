//! Drawing of the menu and timer views.

use crate::timer::TimerState;
use crate::ui::input::MenuItem;
use crate::utils::colors::colour_for_result;
use crate::utils::formatting::{centre_offset, format_best, format_time};
use ansi_term::{Colour, Style};
use crossterm::cursor::MoveTo;
use crossterm::style::Print;
use crossterm::terminal::{self, Clear, ClearType};
use crossterm::{QueueableCommand, queue};
use std::io::{self, Write};

pub const TITLE: &str = "CamelCube";
pub const IDLE_PROMPT: &str = "Hold down space to start...";
/// Prompt on terminals that cannot report key releases.
pub const PRESS_PROMPT: &str = "Press space to start...";

pub struct MenuView<'a> {
    pub focused: MenuItem,
    pub notice: Option<&'a str>,
}

pub struct TimerView<'a> {
    pub state: TimerState,
    pub elapsed: f64,
    pub armed: bool,
    /// The terminal reports key releases
    pub releases: bool,
    pub best: Option<f64>,
    pub previous: Option<f64>,
    pub show_previous: bool,
    pub notice: Option<&'a str>,
}

/// Big centred text of the timer view.
pub fn timer_text(view: &TimerView) -> String {
    match view.state {
        TimerState::Idle if view.armed => format_time(0.0),
        TimerState::Idle if view.releases => IDLE_PROMPT.to_string(),
        TimerState::Idle => PRESS_PROMPT.to_string(),
        TimerState::Running => format_time(view.elapsed),
        TimerState::AwaitingDecision => colour_for_result(view.elapsed, view.best)
            .bold()
            .paint(format_time(view.elapsed))
            .to_string(),
    }
}

pub fn timer_hint(state: TimerState) -> &'static str {
    match state {
        TimerState::Idle => "space: start    q: menu",
        TimerState::Running => "space: stop",
        TimerState::AwaitingDecision => "[c] count    [s] skip",
    }
}

fn centred<W: Write>(out: &mut W, width: u16, row: u16, text: &str) -> io::Result<()> {
    queue!(out, MoveTo(centre_offset(text, width), row), Print(text))?;
    Ok(())
}

fn button(label: &str, focused: bool) -> String {
    let style = if focused {
        Style::new().bold().reverse()
    } else {
        Style::new()
    };
    style.paint(format!("[ {} ]", label)).to_string()
}

pub fn draw_menu<W: Write>(out: &mut W, view: &MenuView) -> io::Result<()> {
    let (width, height) = terminal::size()?;
    let mid = height / 2;

    out.queue(Clear(ClearType::All))?;
    centred(out, width, 1, &Colour::Green.bold().paint(TITLE).to_string())?;

    let buttons = format!(
        "{}    {}",
        button("1  Solve timer", view.focused == MenuItem::Timer),
        button("2  Cube solver", view.focused == MenuItem::Solver)
    );
    centred(out, width, mid.saturating_sub(1), &buttons)?;

    if let Some(notice) = view.notice {
        centred(out, width, mid + 2, &Colour::Blue.paint(notice).to_string())?;
    }

    centred(
        out,
        width,
        height.saturating_sub(2),
        "←/→ choose    enter: open    q: quit",
    )?;

    out.flush()
}

pub fn draw_timer<W: Write>(out: &mut W, view: &TimerView) -> io::Result<()> {
    let (width, height) = terminal::size()?;
    let mid = height / 2;

    out.queue(Clear(ClearType::All))?;
    centred(out, width, 1, &Colour::Green.bold().paint(TITLE).to_string())?;
    centred(out, width, mid.saturating_sub(2), &timer_text(view))?;
    centred(
        out,
        width,
        mid,
        &Colour::Fixed(8).paint(timer_hint(view.state)).to_string(),
    )?;

    if let Some(notice) = view.notice {
        centred(out, width, mid + 2, notice)?;
    }

    let best = format!("Best time: {}", format_best(view.best));
    centred(out, width, height.saturating_sub(3), &best)?;
    if view.show_previous {
        let previous = format!("Previous: {}", format_best(view.previous));
        centred(
            out,
            width,
            height.saturating_sub(2),
            &Colour::Fixed(8).paint(previous).to_string(),
        )?;
    }

    out.flush()
}
