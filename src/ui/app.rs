//! Interactive menu and timer view.
//!
//! Single-threaded loop: wait for a key for at most one tick interval, react
//! to it, then tick the running timer with the real time elapsed since the
//! previous tick. When no solve is running the loop waits longer between
//! redraws.

use crate::config::Config;
use crate::core::session::{Decision, Session};
use crate::errors::AppResult;
use crate::store::RecordStore;
use crate::ui::input::{Action, MenuItem, RepeatFilter, menu_action, timer_action};
use crate::ui::messages::SOLVER_STUB;
use crate::ui::screen::{self, MenuView, TimerView};
use crate::ui::terminal::TerminalGuard;
use crate::utils::formatting::format_time;
use crossterm::event::{self, Event, KeyEvent};
use std::io::Write;
use std::time::{Duration, Instant};

const IDLE_POLL: Duration = Duration::from_millis(250);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Menu,
    Timer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

struct App {
    session: Session<RecordStore>,
    screen: Screen,
    focused: MenuItem,
    armed: bool,
    releases: bool,
    repeats: RepeatFilter,
    previous: Option<f64>,
    show_previous: bool,
    notice: Option<String>,
}

/// Message shown after a solve is counted or skipped.
pub fn describe(decision: &Decision) -> String {
    match decision {
        Decision::NewBest {
            time,
            previous: Some(prev),
        } => format!("🎉 New best: {} (was {})", format_time(*time), format_time(*prev)),
        Decision::NewBest {
            time,
            previous: None,
        } => format!("🎉 First record: {}", format_time(*time)),
        Decision::NotBest { time, best } => format!(
            "Counted {} (best stays {})",
            format_time(*time),
            format_time(*best)
        ),
        Decision::TooShort => "Too short to count".to_string(),
        Decision::Discarded { time } => format!("Skipped {}", format_time(*time)),
    }
}

impl App {
    fn new(store: RecordStore, screen: Screen, releases: bool, show_previous: bool) -> Self {
        Self {
            session: Session::new(store),
            screen,
            focused: MenuItem::Timer,
            armed: false,
            releases,
            repeats: RepeatFilter::new(),
            previous: None,
            show_previous,
            notice: None,
        }
    }

    fn reload_records(&mut self) -> AppResult<()> {
        self.session.refresh_best()?;
        self.previous = self.session.store().get_previous_best()?;
        Ok(())
    }

    fn draw<W: Write>(&self, out: &mut W) -> AppResult<()> {
        match self.screen {
            Screen::Menu => screen::draw_menu(
                out,
                &MenuView {
                    focused: self.focused,
                    notice: self.notice.as_deref(),
                },
            )?,
            Screen::Timer => screen::draw_timer(
                out,
                &TimerView {
                    state: self.session.state(),
                    elapsed: self.session.elapsed(),
                    armed: self.armed,
                    releases: self.releases,
                    best: self.session.best(),
                    previous: self.previous,
                    show_previous: self.show_previous,
                    notice: self.notice.as_deref(),
                },
            )?,
        }
        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent) -> AppResult<Flow> {
        match self.screen {
            Screen::Menu => self.handle_menu(key),
            Screen::Timer => self.handle_timer(key),
        }
    }

    fn handle_menu(&mut self, key: KeyEvent) -> AppResult<Flow> {
        match menu_action(&key) {
            Action::Quit => return Ok(Flow::Exit),
            Action::Focus(item) => {
                self.focused = item;
                self.notice = None;
            }
            Action::Open(item) => self.open(item)?,
            Action::ActivateFocused => self.open(self.focused)?,
            _ => {}
        }
        Ok(Flow::Continue)
    }

    fn open(&mut self, item: MenuItem) -> AppResult<()> {
        self.focused = item;
        match item {
            MenuItem::Timer => {
                self.reload_records()?;
                self.screen = Screen::Timer;
                self.notice = None;
            }
            MenuItem::Solver => self.notice = Some(SOLVER_STUB.to_string()),
        }
        Ok(())
    }

    fn handle_timer(&mut self, key: KeyEvent) -> AppResult<Flow> {
        let action = timer_action(&key, self.session.state(), self.armed, self.releases);

        match action {
            Action::Quit => return Ok(Flow::Exit),
            Action::Back => {
                self.screen = Screen::Menu;
                self.armed = false;
                self.notice = None;
            }
            Action::Arm => {
                self.armed = true;
                self.notice = None;
            }
            Action::Start => {
                let now = Instant::now();
                self.session.start(now);
                self.repeats.started(now);
                self.armed = false;
                self.notice = None;
            }
            Action::Stop => {
                if self.releases || !self.repeats.is_repeat(Instant::now()) {
                    self.session.stop();
                    self.repeats.reset();
                }
            }
            Action::Confirm => {
                match self.session.confirm() {
                    Ok(Some(decision)) => {
                        if let Decision::NewBest { previous, .. } = decision {
                            self.previous = previous;
                        }
                        self.notice = Some(describe(&decision));
                    }
                    Ok(None) => {}
                    // the solve is still awaiting a decision
                    Err(e) => self.notice = Some(format!("Could not save: {}", e)),
                }
            }
            Action::Discard => {
                if let Some(decision) = self.session.discard() {
                    self.notice = Some(describe(&decision));
                }
            }
            _ => {}
        }
        Ok(Flow::Continue)
    }
}

/// Run the interactive UI until the user quits.
pub fn run(cfg: &Config, store: RecordStore, start: Screen) -> AppResult<()> {
    let mut term = TerminalGuard::enter()?;
    let mut app = App::new(
        store,
        start,
        term.reports_releases(),
        cfg.show_previous_best,
    );
    app.reload_records()?;

    let tick = cfg.tick_interval();

    loop {
        app.draw(term.out())?;

        let timeout = if app.session.machine().is_running() {
            tick
        } else {
            IDLE_POLL
        };

        if event::poll(timeout)?
            && let Event::Key(key) = event::read()?
            && app.handle_key(key)? == Flow::Exit
        {
            break;
        }

        app.session.tick(Instant::now());
    }

    Ok(())
}

