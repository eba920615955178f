//! Recursive directory copy

use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;
use walkdir::WalkDir;

use crate::error::{InstallError, InstallResult};

/// Counts from a finished copy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopyStats {
    pub files: usize,
    pub dirs: usize,
}

/// Copy every file and directory under `src` into `dest`
///
/// `dest` and its parents are created when missing. Files are copied by
/// content and overwrite same-named files already in `dest`. Symlinks are
/// followed, so linked files and directories arrive as plain copies; a link
/// cycle is an error.
///
/// # Errors
/// Returns `InstallError::Io` naming the path that could not be read or
/// written.
pub fn copy_dir_all(src: &Path, dest: &Path) -> InstallResult<CopyStats> {
    if !src.is_dir() {
        return Err(InstallError::io(
            src,
            io::Error::new(io::ErrorKind::NotFound, "source directory not found"),
        ));
    }

    fs::create_dir_all(dest).map_err(|e| InstallError::io(dest, e))?;
    let mut stats = CopyStats::default();

    for entry in WalkDir::new(src).min_depth(1).follow_links(true) {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(src).to_path_buf();
            InstallError::io(path, io::Error::from(e))
        })?;

        let relative = entry
            .path()
            .strip_prefix(src)
            .map_err(|e| InstallError::io(entry.path(), io::Error::other(e)))?;
        let target = dest.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).map_err(|e| InstallError::io(&target, e))?;
            stats.dirs += 1;
        } else {
            fs::copy(entry.path(), &target).map_err(|e| InstallError::io(entry.path(), e))?;
            debug!(file = %relative.display(), "copied");
            stats.files += 1;
        }
    }

    Ok(stats)
}
