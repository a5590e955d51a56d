//! Project lifecycle: create from a template, list, remove.
//!
//! Multi-step operations are not transactional. If a step fails after the
//! template copy has started, files already copied stay on disk and the
//! registry is left untouched.

use std::path::{Component, Path, PathBuf};

use crate::error::{io_err, OrbyError};
use crate::fs::{copy_tree, remove_tree, CopyMode};
use crate::manifest::Manifest;
use crate::paths::OrbyPaths;
use crate::registry;
use crate::template::validate_template_name;
use crate::types::{CreatedProject, ProjectName, Registry, RegistryEntry, TemplateName};

/// Instantiate `template` as a new project called `name`.
///
/// The project lands in `target` when given (an empty path counts as not
/// given), otherwise in `./<name>`. An existing target directory is merged
/// into and colliding files are overwritten.
///
/// Template existence and name uniqueness are checked before anything is
/// written.
pub fn create_project(
    paths: &OrbyPaths,
    name: &ProjectName,
    target: Option<&Path>,
    template: &TemplateName,
) -> Result<CreatedProject, OrbyError> {
    let target_dir = absolute(resolve_target(name, target))?;
    tracing::debug!("creating '{}' at {}", name, target_dir.display());

    validate_template_name(template)?;
    let template_dir = paths.template_dir(template);
    if !template_dir.is_dir() {
        return Err(OrbyError::TemplateNotFound {
            name: template.0.clone(),
        });
    }

    let mut projects = registry::load(paths)?;
    if let Some(existing) = projects.get(name) {
        return Err(OrbyError::ProjectExists {
            name: name.0.clone(),
            path: existing.path.clone(),
        });
    }

    copy_tree(&template_dir, &target_dir, CopyMode::Merge)?;
    tracing::debug!("copied template '{}' into {}", template, target_dir.display());

    let mut manifest = Manifest::load(&target_dir)?;
    manifest.set_name(&name.0);
    manifest.save(&target_dir)?;

    let entry = RegistryEntry {
        path: target_dir,
        template: template.clone(),
    };
    projects.insert(name.clone(), entry.clone());
    registry::save(paths, &projects)?;

    tracing::info!("registered project '{}' at {}", name, entry.path.display());
    Ok(CreatedProject {
        name: name.clone(),
        entry,
    })
}

/// All registered projects, sorted by name.
pub fn list_projects(paths: &OrbyPaths) -> Result<Registry, OrbyError> {
    registry::load(paths)
}

/// Deregister `name`, and recursively delete its directory when `delete_files`.
///
/// A failed deletion aborts before the registry is modified. Returns the
/// removed entry.
pub fn remove_project(
    paths: &OrbyPaths,
    name: &ProjectName,
    delete_files: bool,
) -> Result<RegistryEntry, OrbyError> {
    let mut projects = registry::load(paths)?;
    let Some(entry) = projects.get(name).cloned() else {
        return Err(OrbyError::ProjectNotFound {
            name: name.0.clone(),
        });
    };

    if delete_files {
        remove_tree(&entry.path)?;
        tracing::info!("deleted {}", entry.path.display());
    }

    projects.remove(name);
    registry::save(paths, &projects)?;
    tracing::info!("deregistered project '{}'", name);
    Ok(entry)
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

fn resolve_target(name: &ProjectName, target: Option<&Path>) -> PathBuf {
    match target {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from(&name.0),
    }
}

/// Anchor a relative path at the current working directory and drop `.`
/// components. Does not touch the target itself, which may not exist yet.
fn absolute(path: PathBuf) -> Result<PathBuf, OrbyError> {
    let joined = if path.is_absolute() {
        path
    } else {
        let cwd = std::env::current_dir().map_err(|e| io_err(&path, e))?;
        cwd.join(path)
    };
    Ok(joined
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect())
}
