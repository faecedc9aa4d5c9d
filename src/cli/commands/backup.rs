use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::backup::BackupLogic;
use crate::errors::AppResult;
use crate::store::RecordStore;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Backup {
        dest,
        compress,
        force,
    } = cmd
    {
        let store = RecordStore::new(cfg.record_path());
        BackupLogic::backup(&store, &expand_tilde(dest), *compress, *force)?;
    }

    Ok(())
}
