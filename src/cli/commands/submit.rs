use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::session::{Decision, Session};
use crate::errors::{AppError, AppResult};
use crate::store::RecordStore;
use crate::ui::app::describe;
use crate::ui::messages::{info, success, warning};
use crate::utils::time::round_millis;
use std::time::{Duration, Instant};

/// Handle the `submit` subcommand: one solve of the given length runs
/// through the same session logic as the interactive timer.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Submit { time, skip } = cmd {
        if !time.is_finite() || *time <= 0.0 {
            return Err(AppError::InvalidTime(format!(
                "{} (a solve must last a positive number of seconds)",
                time
            )));
        }

        let start = Instant::now();
        let end = Duration::try_from_secs_f64(round_millis(*time))
            .ok()
            .and_then(|d| start.checked_add(d))
            .ok_or_else(|| AppError::InvalidTime(format!("{} (too long)", time)))?;

        let store = RecordStore::new(cfg.record_path());
        let mut session = Session::new(store);
        session.refresh_best()?;

        session.start(start);
        session.tick(end);
        session.stop();

        let decision = if *skip {
            session.discard()
        } else {
            session.confirm()?
        };

        match decision {
            Some(d @ Decision::NewBest { .. }) => success(describe(&d)),
            Some(d @ Decision::TooShort) => warning(describe(&d)),
            Some(d) => info(describe(&d)),
            None => {}
        }
    }

    Ok(())
}
