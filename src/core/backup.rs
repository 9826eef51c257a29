use crate::errors::{AppError, AppResult};
use crate::store::{RecordStore, journal};
use crate::ui::messages::{info, success, warning};
use crate::ui::prompt::confirm;
use std::fs;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Copy the data file to `dest_file`, or with `compress` write it into a
    /// zip archive at `dest_file` with a `.zip` extension. Returns the path
    /// of the final backup, or `None` when the user declined to overwrite an
    /// existing file.
    pub fn backup(
        store: &RecordStore,
        dest_file: &str,
        compress: bool,
        force: bool,
    ) -> AppResult<Option<PathBuf>> {
        let src = store.path();
        let dest = Path::new(dest_file);

        if !src.exists() {
            return Err(AppError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Data file not found: {}", src.display()),
            )));
        }

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

        if final_target == src {
            return Err(AppError::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("Backup target is the data file itself: {}", src.display()),
            )));
        }

        if final_target.exists()
            && !force
            && !confirm(&format!(
                "The file '{}' already exists. Overwrite?",
                final_target.display()
            ))
        {
            info("Backup cancelled.");
            return Ok(None);
        }

        let final_path = if compress {
            compress_backup(src, &final_target)?
        } else {
            fs::copy(src, dest)?;
            dest.to_path_buf()
        };
        success(format!("Backup created: {}", final_path.display()));

        if let Err(e) = journal::record(
            &store.journal_path(),
            "backup",
            &final_path.to_string_lossy(),
            if compress {
                "Backup created and compressed"
            } else {
                "Backup created"
            },
        ) {
            warning(format!("Failed to write journal entry: {e}"));
        }

        Ok(Some(final_path))
    }
}

/// Stream the data file into `zip_path` as a single entry named after it.
/// The archive is assembled in a sibling temp file and renamed into place.
fn compress_backup(src: &Path, zip_path: &Path) -> AppResult<PathBuf> {
    let entry_name = src
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "activities.csv".to_string());

    let mut tmp = zip_path.to_path_buf().into_os_string();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);

    let mut zip = ZipWriter::new(fs::File::create(&tmp)?);
    let options = SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    zip.start_file(entry_name, options)
        .map_err(std::io::Error::other)?;

    let mut f = fs::File::open(src)?;
    std::io::copy(&mut f, &mut zip)?;
    zip.finish().map_err(std::io::Error::other)?;

    fs::rename(&tmp, zip_path)?;
    info(format!("Compressed: {}", zip_path.display()));

    Ok(zip_path.to_path_buf())
}
