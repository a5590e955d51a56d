//! Filesystem helpers: atomic document writes and recursive tree copy.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{io_err, OrbyError};

/// How [`copy_tree`] treats an already-existing destination directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyMode {
    /// Merge into `dst` if it exists; files at colliding paths are overwritten.
    Merge,
    /// `dst` must not exist yet.
    Fresh,
}

/// Write `contents` to `<path>.tmp` and rename it over `path`.
///
/// The `.tmp` sibling lives in the same directory as the target, so the
/// rename never crosses filesystems. On rename failure the `.tmp` is removed.
pub fn write_atomic(path: &Path, contents: &[u8]) -> Result<(), OrbyError> {
    let tmp = tmp_path(path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| io_err(parent, e))?;
    }
    std::fs::write(&tmp, contents).map_err(|e| io_err(&tmp, e))?;
    if let Err(e) = std::fs::rename(&tmp, path) {
        let _ = std::fs::remove_file(&tmp);
        return Err(io_err(path, e));
    }
    Ok(())
}

/// `<path>.tmp`, e.g. `projects.json` → `projects.json.tmp`.
pub fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Recursively copy the tree rooted at `src` into `dst`.
///
/// Symbolic links are followed, so their targets are copied as regular
/// files and directories. A `dst` inside `src` is rejected with
/// `CopyIntoSelf` before anything is created. Nothing is rolled back if a
/// copy fails midway.
pub fn copy_tree(src: &Path, dst: &Path, mode: CopyMode) -> Result<(), OrbyError> {
    ensure_outside(src, dst)?;
    match mode {
        CopyMode::Fresh => {
            if let Some(parent) = dst.parent() {
                std::fs::create_dir_all(parent).map_err(|e| io_err(parent, e))?;
            }
            std::fs::create_dir(dst).map_err(|e| io_err(dst, e))?;
        }
        CopyMode::Merge => std::fs::create_dir_all(dst).map_err(|e| io_err(dst, e))?,
    }

    for entry in WalkDir::new(src).follow_links(true).min_depth(1) {
        let entry = entry.map_err(|e| OrbyError::Walk {
            path: src.to_path_buf(),
            source: e,
        })?;
        let Ok(rel) = entry.path().strip_prefix(src) else {
            continue;
        };
        let target = dst.join(rel);
        if entry.file_type().is_dir() {
            std::fs::create_dir_all(&target).map_err(|e| io_err(&target, e))?;
        } else {
            std::fs::copy(entry.path(), &target).map_err(|e| io_err(&target, e))?;
            tracing::trace!("copied {}", target.display());
        }
    }
    Ok(())
}

/// Fail if `dst`, resolved through its nearest existing ancestor, is `src`
/// or lies below it.
fn ensure_outside(src: &Path, dst: &Path) -> Result<(), OrbyError> {
    let src_real = src.canonicalize().map_err(|e| io_err(src, e))?;

    let mut existing = dst;
    let mut missing = Vec::new();
    while !existing.exists() {
        match (existing.parent(), existing.file_name()) {
            (Some(parent), Some(name)) => {
                missing.push(name);
                existing = parent;
            }
            _ => break,
        }
    }
    let mut dst_real = if existing.as_os_str().is_empty() {
        std::env::current_dir().map_err(|e| io_err(dst, e))?
    } else {
        existing.canonicalize().map_err(|e| io_err(existing, e))?
    };
    dst_real.extend(missing.iter().rev());

    if dst_real.starts_with(&src_real) {
        return Err(OrbyError::CopyIntoSelf {
            src: src.to_path_buf(),
            dst: dst.to_path_buf(),
        });
    }
    Ok(())
}

/// Recursively delete the tree rooted at `path`.
pub fn remove_tree(path: &Path) -> Result<(), OrbyError> {
    std::fs::remove_dir_all(path).map_err(|e| io_err(path, e))
}
