//! JSON project registry and template index.
//!
//! # Storage
//!
//! `projects.json` is one JSON object, project name → `{path, template}`.
//! Every mutation is a whole-document read-modify-write: [`load`], change the
//! map, [`save`]. Saves go through a `.tmp` sibling and a rename, so a crash
//! mid-write leaves the previous document intact. There is no cross-process
//! locking; two concurrent invocations can still lose an update.

use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::{io_err, OrbyError};
use crate::fs::write_atomic;
use crate::paths::OrbyPaths;
use crate::types::{Registry, TemplateIndex, TemplateName};

// ---------------------------------------------------------------------------
// 1. Registry
// ---------------------------------------------------------------------------

/// Load `projects.json`.
///
/// Returns `RegistryNotFound` if absent and `Parse` (with path) if malformed.
pub fn load(paths: &OrbyPaths) -> Result<Registry, OrbyError> {
    read_json(&paths.registry_file)
}

/// Overwrite `projects.json` with `registry`.
pub fn save(paths: &OrbyPaths, registry: &Registry) -> Result<(), OrbyError> {
    write_json(&paths.registry_file, registry)
}

// ---------------------------------------------------------------------------
// 2. Template index
// ---------------------------------------------------------------------------

/// Load `templates.json`.
pub fn load_template_index(paths: &OrbyPaths) -> Result<TemplateIndex, OrbyError> {
    read_json(&paths.template_index_file)
}

/// Overwrite `templates.json` with `index`.
pub fn save_template_index(paths: &OrbyPaths, index: &TemplateIndex) -> Result<(), OrbyError> {
    write_json(&paths.template_index_file, index)
}

/// Record `name` in the template index. A missing index starts out empty.
pub(crate) fn index_template(paths: &OrbyPaths, name: &TemplateName) -> Result<(), OrbyError> {
    let mut index = load_index_or_empty(paths)?;
    if !index.templates.contains(name) {
        index.templates.push(name.clone());
    }
    save_template_index(paths, &index)
}

/// Drop `name` from the template index.
pub(crate) fn unindex_template(paths: &OrbyPaths, name: &TemplateName) -> Result<(), OrbyError> {
    let mut index = load_index_or_empty(paths)?;
    index.templates.retain(|t| t != name);
    save_template_index(paths, &index)
}

fn load_index_or_empty(paths: &OrbyPaths) -> Result<TemplateIndex, OrbyError> {
    match load_template_index(paths) {
        Err(OrbyError::RegistryNotFound { .. }) => Ok(TemplateIndex { templates: vec![] }),
        other => other,
    }
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, OrbyError> {
    let contents = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(OrbyError::RegistryNotFound {
                path: path.to_path_buf(),
            })
        }
        Err(e) => return Err(io_err(path, e)),
    };
    serde_json::from_str(&contents).map_err(|e| OrbyError::Parse {
        path: path.to_path_buf(),
        source: e,
    })
}

fn write_json<T: serde::Serialize>(path: &Path, value: &T) -> Result<(), OrbyError> {
    let json = serde_json::to_string_pretty(value)?;
    write_atomic(path, json.as_bytes())
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
