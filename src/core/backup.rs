use crate::errors::{AppError, AppResult};
use crate::store::log::ttlog;
use crate::store::RecordStore;
use std::fs;
use std::io::{Write, stdin, stdout};
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Copy the record file to `dest`, optionally as a `.zip`.
    /// Returns the path of the written backup, or `None` when the user
    /// declined to overwrite an existing file.
    pub fn backup(
        store: &RecordStore,
        dest: &Path,
        compress: bool,
        force: bool,
    ) -> AppResult<Option<PathBuf>> {
        // back up a checked file, never a corrupted one
        store.snapshot()?;
        let src = store.path();

        if let Some(parent) = dest.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let final_target = if compress {
            dest.with_extension("zip")
        } else {
            dest.to_path_buf()
        };

        if same_file(src, &final_target) {
            return Err(AppError::Backup(format!(
                "destination is the record file itself: {}",
                final_target.display()
            )));
        }

        if final_target.exists() && !force && !confirm_overwrite(&final_target)? {
            println!("❌ Backup cancelled by user.");
            return Ok(None);
        }

        let final_path = if compress {
            compress_backup(src, &final_target)?
        } else {
            fs::copy(src, dest)?;
            dest.to_path_buf()
        };
        println!("✅ Backup created: {}", final_path.display());

        if let Err(e) = ttlog(
            store.log_file(),
            "backup",
            &final_path.to_string_lossy(),
            if compress {
                "Backup created and compressed"
            } else {
                "Backup created"
            },
        ) {
            eprintln!("⚠️ Failed to write internal log: {}", e);
        }

        Ok(Some(final_path))
    }
}

/// Compares canonical paths when both exist, the paths as given otherwise.
fn same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}

fn confirm_overwrite(path: &Path) -> AppResult<bool> {
    println!(
        "⚠️  The file '{}' already exists.\nDo you want to overwrite it? [y/N]: ",
        path.display()
    );

    let mut answer = String::new();
    print!("> ");
    stdout().flush().ok();
    stdin().read_line(&mut answer)?;

    let answer = answer.trim().to_lowercase();
    Ok(answer == "y" || answer == "yes")
}

/// Write `src` into a new zip archive at `zip_path`.
fn compress_backup(src: &Path, zip_path: &Path) -> AppResult<PathBuf> {
    let name = src
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .ok_or_else(|| AppError::Backup(format!("invalid record file: {}", src.display())))?;

    let file = fs::File::create(zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let mut f = fs::File::open(src)?;
    zip.start_file(name, options)
        .map_err(|e| AppError::Backup(e.to_string()))?;

    std::io::copy(&mut f, &mut zip)?;
    zip.finish().map_err(|e| AppError::Backup(e.to_string()))?;

    println!("📦 Compressed: {}", zip_path.display());

    Ok(zip_path.to_path_buf())
}
