use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::core::error::{RelinkError, Result};

/// Create the destination's parent directory if it does not exist yet.
pub fn ensure_parent_dir(destination: &Path) -> Result<()> {
    match destination.parent() {
        Some(dir) if !dir.as_os_str().is_empty() && !dir.exists() => {
            fs::create_dir_all(dir)?;
            log::debug!("Created directory {}", dir.display());
            Ok(())
        }
        _ => Ok(()),
    }
}

/// File path a move lands on. An existing directory receives the file under its own name.
pub fn resolve_destination(from: &Path, to: &Path) -> PathBuf {
    match from.file_name() {
        Some(name) if to.is_dir() => to.join(name),
        _ => to.to_path_buf(),
    }
}

/// Move `from` to `to`, creating the destination directory first.
///
/// A rename that crosses file systems falls back to copy then delete. Returns
/// the path the file now lives at.
pub fn move_file(from: &Path, to: &Path) -> Result<PathBuf> {
    let to = resolve_destination(from, to);
    let move_error = |source: io::Error| RelinkError::Move {
        from: from.to_path_buf(),
        to: to.clone(),
        source,
    };

    fs::symlink_metadata(from).map_err(move_error)?;
    ensure_parent_dir(&to)?;

    match fs::rename(from, &to) {
        Ok(()) => {}
        Err(err) if err.kind() == io::ErrorKind::CrossesDevices => {
            log::debug!(
                "Rename crosses devices, copying {} to {}",
                from.display(),
                to.display()
            );
            copy_then_remove(from, &to).map_err(move_error)?;
        }
        Err(err) => return Err(move_error(err)),
    }

    Ok(to)
}

fn copy_then_remove(from: &Path, to: &Path) -> io::Result<()> {
    fs::copy(from, to)?;
    fs::remove_file(from)
}
