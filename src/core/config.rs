use crate::config::Config;
use crate::errors::{AppError, AppResult};
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    pub fn print(cfg: &Config) -> AppResult<()> {
        println!("📄 Current configuration:\n");
        println!("{}", serde_yaml::to_string(cfg)?);
        Ok(())
    }

    /// Report fields missing from the config file. A missing file means the
    /// built-in defaults are in use.
    pub fn check(path: &Path) -> AppResult<Vec<&'static str>> {
        if !path.exists() {
            println!(
                "ℹ️  No configuration file at {}, defaults are in use.",
                path.display()
            );
            return Ok(Vec::new());
        }

        let missing = Config::missing_fields(path)?;
        if missing.is_empty() {
            println!("✅ Configuration file is complete: {}", path.display());
        } else {
            println!("⚠️  Missing fields (defaults will be used):");
            for f in &missing {
                println!("   - {}", f);
            }
        }
        Ok(missing)
    }

    /// Open the config file in an editor, creating it with defaults first if
    /// needed. Falls back to the platform editor when the requested one fails.
    pub fn edit(path: &Path, cfg: &Config, editor: &Option<String>) -> AppResult<()> {
        if !path.exists() {
            cfg.save(path)?;
        }

        let default_editor = std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            });

        let editor_to_use = editor.clone().unwrap_or_else(|| default_editor.clone());

        match Command::new(&editor_to_use).arg(path).status() {
            Ok(s) if s.success() => {
                println!(
                    "✅ Configuration file edited successfully using '{}'",
                    editor_to_use
                );
                return Ok(());
            }
            Ok(_) | Err(_) => {
                eprintln!(
                    "⚠️  Editor '{}' not available, falling back to '{}'",
                    editor_to_use, default_editor
                );
            }
        }

        let status = Command::new(&default_editor)
            .arg(path)
            .status()
            .map_err(|e| AppError::Config(format!("{}: {}", default_editor, e)))?;

        if !status.success() {
            return Err(AppError::Config(format!(
                "failed to edit configuration file using '{}'",
                default_editor
            )));
        }

        // the edited file must still parse
        Config::load_from(path)?;

        println!(
            "✅ Configuration file edited successfully using fallback '{}'",
            default_editor
        );
        Ok(())
    }
}
