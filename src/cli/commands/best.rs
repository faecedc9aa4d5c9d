use crate::config::Config;
use crate::errors::AppResult;
use crate::store::RecordStore;
use crate::ui::messages::header;
use crate::utils::colors::colourize_optional;
use crate::utils::formatting::{bold, format_best};

/// Handle the `best` subcommand
pub fn handle(cfg: &Config) -> AppResult<()> {
    let store = RecordStore::new(cfg.record_path());
    let records = store.snapshot()?;

    header("CamelCube records");
    println!(
        "{} {}",
        bold("Best time:"),
        colourize_optional(&format_best(records.record_now.time))
    );
    println!(
        "{}  {}",
        bold("Previous:"),
        colourize_optional(&format_best(records.record_before.time))
    );

    Ok(())
}
