use crate::config::Config;
use crate::errors::AppResult;
use crate::store::RecordStore;
use crate::ui::app::{self, Screen};
use crate::utils::formatting::format_best;

/// Handle `menu` (the default) and `timer`: run the interactive UI, then
/// print the best time once the terminal is restored.
pub fn handle(cfg: &Config, screen: Screen) -> AppResult<()> {
    let path = cfg.record_path();
    let store = RecordStore::new(&path);
    store.initialize()?;

    app::run(cfg, store, screen)?;

    let best = RecordStore::new(&path).get_current_best()?;
    println!("🏆 Best time: {}", format_best(best));
    Ok(())
}
