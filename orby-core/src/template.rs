//! Template library: list, save a directory as a template, remove.
//!
//! The directory listing under `templates/` is authoritative. The
//! `templates.json` index is kept in step on save/remove but never read here.

use std::collections::BTreeMap;
use std::path::{Component, Path};

use crate::error::{io_err, OrbyError};
use crate::fs::{copy_tree, remove_tree, CopyMode};
use crate::manifest::{Manifest, INVALID_MANIFEST_DESCRIPTION};
use crate::paths::OrbyPaths;
use crate::registry;
use crate::types::{TemplateInfo, TemplateName};

/// Every subdirectory of the template library with its manifest description.
///
/// A manifest that fails to parse yields the description
/// `"Invalid manifest.json"` instead of an error; a missing manifest yields
/// `""`. Non-directory entries are ignored. A missing library is empty.
pub fn list_templates(
    paths: &OrbyPaths,
) -> Result<BTreeMap<TemplateName, TemplateInfo>, OrbyError> {
    let dir = &paths.templates_dir;
    let mut templates = BTreeMap::new();
    if !dir.exists() {
        return Ok(templates);
    }

    for entry in std::fs::read_dir(dir).map_err(|e| io_err(dir, e))? {
        let entry = entry.map_err(|e| io_err(dir, e))?;
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        let name = TemplateName::from(entry.file_name().to_string_lossy().into_owned());
        let description = describe(&path, &name);
        templates.insert(name, TemplateInfo { path, description });
    }
    Ok(templates)
}

/// Copy `source` into the library as a new template called `name`.
///
/// Fails if the template already exists or `source` has no `manifest.json`.
/// Unlike project creation, the destination must not exist beforehand.
pub fn save_template(
    paths: &OrbyPaths,
    name: &TemplateName,
    source: &Path,
) -> Result<TemplateInfo, OrbyError> {
    validate_template_name(name)?;
    let dest = paths.template_dir(name);
    if dest.exists() {
        return Err(OrbyError::TemplateExists {
            name: name.0.clone(),
        });
    }
    if !source.is_dir() {
        return Err(OrbyError::SourceNotFound {
            path: source.to_path_buf(),
        });
    }
    if !Manifest::path_in(source).is_file() {
        return Err(OrbyError::ManifestNotFound {
            dir: source.to_path_buf(),
        });
    }

    copy_tree(source, &dest, CopyMode::Fresh)?;
    registry::index_template(paths, name)?;
    tracing::info!("saved template '{}' from {}", name, source.display());

    let description = describe(&dest, name);
    Ok(TemplateInfo {
        path: dest,
        description,
    })
}

/// Recursively delete the template called `name`.
pub fn remove_template(paths: &OrbyPaths, name: &TemplateName) -> Result<(), OrbyError> {
    validate_template_name(name)?;
    let dir = paths.template_dir(name);
    if !dir.is_dir() {
        return Err(OrbyError::TemplateNotFound {
            name: name.0.clone(),
        });
    }
    remove_tree(&dir)?;
    registry::unindex_template(paths, name)?;
    tracing::info!("removed template '{}'", name);
    Ok(())
}

/// A template name must be exactly one normal path component.
pub(crate) fn validate_template_name(name: &TemplateName) -> Result<(), OrbyError> {
    let mut components = Path::new(&name.0).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) if !name.0.contains(['/', '\\']) => Ok(()),
        _ => Err(OrbyError::InvalidName {
            name: name.0.clone(),
        }),
    }
}

fn describe(dir: &Path, name: &TemplateName) -> String {
    if !Manifest::path_in(dir).exists() {
        return String::new();
    }
    match Manifest::load(dir) {
        Ok(manifest) => manifest.description().to_owned(),
        Err(e) => {
            tracing::warn!("template '{}': {}", name, e);
            INVALID_MANIFEST_DESCRIPTION.to_owned()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_names_are_valid() {
        assert!(validate_template_name(&TemplateName::from("game-2d")).is_ok());
        assert!(validate_template_name(&TemplateName::from("my template")).is_ok());
    }

    #[test]
    fn path_like_names_are_rejected() {
        for bad in ["", ".", "..", "a/b", "../x", "/abs", "a\\b"] {
            let err = validate_template_name(&TemplateName::from(bad)).unwrap_err();
            assert_eq!(err.kind(), crate::ErrorKind::Invalid, "{bad:?}");
        }
    }
}
