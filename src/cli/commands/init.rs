use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::RecordStore;
use crate::store::log::ttlog;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and configuration file (skipped in test mode)
///  - the record file, repaired or created with empty slots
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let record_path = match &cli.file {
        Some(custom) => Config::init_all(Some(custom.clone()), cli.test)?,
        None if cli.test => cfg.record_path(),
        None => Config::init_all(None, false)?,
    };

    println!("⚙️  Initializing CamelCube…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🏆 Record file : {}", record_path.display());

    let store = RecordStore::new(&record_path);
    store.initialize()?;
    let best = store.get_current_best()?;

    if let Err(e) = ttlog(
        store.log_file(),
        "init",
        &record_path.to_string_lossy(),
        "CamelCube initialized",
    ) {
        eprintln!("⚠️ Failed to write internal log: {}", e);
    }

    match best {
        Some(t) => println!("✅ Record file ready, best time {:.3}", t),
        None => println!("✅ Record file ready, no best time yet"),
    }

    println!("🎉 CamelCube initialization completed!");
    Ok(())
}
