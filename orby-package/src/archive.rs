//! `.orby` archive builder.
//!
//! ## Build steps
//!
//! 1. Load `manifest.json` from the project root and require `name`.
//! 2. Resolve the output path `<save_at or cwd>/<name>.orby`.
//! 3. Walk the project tree, following links, and store every regular
//!    file, Deflate-compressed, under its root-relative path. A symlinked
//!    file is stored by content under the link's own path; links and
//!    directories are never stored as entries of their own.
//! 4. Finish the zip central directory and return the output path.
//!
//! Member order is whatever the directory walk yields, so two builds of the
//! same tree are not guaranteed to be byte-identical. A failed build leaves
//! the partially written archive on disk.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Component, Path, PathBuf};

use walkdir::WalkDir;
use zip::{write::FileOptions, CompressionMethod, ZipArchive, ZipWriter};

use orby_core::Manifest;

use crate::error::{io_err, PackageError};

/// File extension of a packaged project.
pub const ARCHIVE_EXTENSION: &str = "orby";

/// Pack `project_dir` into `<save_at>/<manifest name>.orby`.
///
/// `save_at` defaults to the current working directory; an empty path counts
/// as not given. The output directory must already exist. Returns the
/// absolute path of the written archive.
pub fn build(project_dir: &Path, save_at: Option<&Path>) -> Result<PathBuf, PackageError> {
    let manifest = Manifest::load(project_dir)?;
    let name = manifest.require_name(project_dir)?;

    let root = project_dir
        .canonicalize()
        .map_err(|e| io_err(project_dir, e))?;
    let out_dir = match save_at {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => std::env::current_dir().map_err(|e| io_err(".", e))?,
    };
    let out_dir = out_dir.canonicalize().map_err(|e| io_err(&out_dir, e))?;
    let out_path = out_dir.join(format!("{name}.{ARCHIVE_EXTENSION}"));
    tracing::debug!("packing {} into {}", root.display(), out_path.display());

    let file = File::create(&out_path).map_err(|e| io_err(&out_path, e))?;
    let mut zip = ZipWriter::new(file);
    let options = FileOptions::default().compression_method(CompressionMethod::Deflated);

    let mut count = 0usize;
    for entry in WalkDir::new(&root).follow_links(true) {
        let entry = entry?;
        if !entry.file_type().is_file() || entry.path() == out_path {
            continue;
        }
        let Ok(rel) = entry.path().strip_prefix(&root) else {
            continue;
        };
        let member = member_name(rel);
        zip.start_file(member.as_str(), options)?;
        let mut src = BufReader::new(File::open(entry.path()).map_err(|e| io_err(entry.path(), e))?);
        io::copy(&mut src, &mut zip).map_err(|e| io_err(entry.path(), e))?;
        tracing::trace!("added {member}");
        count += 1;
    }
    zip.finish()?;

    tracing::info!("built {} ({} files)", out_path.display(), count);
    Ok(out_path)
}

/// Member names of an archive, in stored order.
pub fn list_members(archive: &Path) -> Result<Vec<String>, PackageError> {
    let file = File::open(archive).map_err(|e| io_err(archive, e))?;
    let mut zip = ZipArchive::new(BufReader::new(file))?;
    let mut names = Vec::with_capacity(zip.len());
    for i in 0..zip.len() {
        names.push(zip.by_index(i)?.name().to_owned());
    }
    Ok(names)
}

/// Root-relative path with `/` separators, whatever the host separator is.
fn member_name(rel: &Path) -> String {
    rel.components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}
