//! Data-directory layout.
//!
//! ```text
//! ~/.orby/devtools/
//!   projects.json     (registry: project name → {path, template})
//!   templates.json    (advisory template index)
//!   templates/
//!     default/
//!       manifest.json
//! ```
//!
//! [`OrbyPaths`] is built once at startup and passed by reference to every
//! operation. Tests build it with [`OrbyPaths::from_home`] over a `TempDir`.

use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::error::{io_err, OrbyError};
use crate::manifest::Manifest;
use crate::registry;
use crate::types::{Registry, TemplateIndex, TemplateName};

pub const REGISTRY_FILE: &str = "projects.json";
pub const TEMPLATE_INDEX_FILE: &str = "templates.json";
pub const TEMPLATES_DIR: &str = "templates";

/// Resolved locations of all persisted Orby state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrbyPaths {
    pub data_dir: PathBuf,
    pub templates_dir: PathBuf,
    pub registry_file: PathBuf,
    pub template_index_file: PathBuf,
}

impl OrbyPaths {
    /// Layout rooted at an explicit data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        let data_dir = data_dir.into();
        Self {
            templates_dir: data_dir.join(TEMPLATES_DIR),
            registry_file: data_dir.join(REGISTRY_FILE),
            template_index_file: data_dir.join(TEMPLATE_INDEX_FILE),
            data_dir,
        }
    }

    /// `<home>/.orby/devtools/…` — pure, no I/O.
    pub fn from_home(home: &Path) -> Self {
        Self::new(home.join(".orby").join("devtools"))
    }

    /// Derive the layout from `dirs::home_dir()`.
    pub fn discover() -> Result<Self, OrbyError> {
        let home = dirs::home_dir().ok_or(OrbyError::HomeNotFound)?;
        Ok(Self::from_home(&home))
    }

    /// `<templates_dir>/<name>` — pure, no I/O.
    pub fn template_dir(&self, name: &TemplateName) -> PathBuf {
        self.templates_dir.join(&name.0)
    }
}

/// Create the data directory, an empty registry, the template index and the
/// `default` template if any of them are missing. Existing files are left alone.
pub fn bootstrap(paths: &OrbyPaths) -> Result<(), OrbyError> {
    std::fs::create_dir_all(&paths.templates_dir)
        .map_err(|e| io_err(&paths.templates_dir, e))?;

    if !paths.registry_file.exists() {
        registry::save(paths, &Registry::new())?;
        tracing::info!("created registry at {}", paths.registry_file.display());
    }

    if !paths.template_index_file.exists() {
        registry::save_template_index(paths, &TemplateIndex::default())?;
    }

    let default_dir = paths.template_dir(&TemplateName::default());
    if !default_dir.exists() {
        std::fs::create_dir_all(&default_dir).map_err(|e| io_err(&default_dir, e))?;
        default_manifest().save(&default_dir)?;
        tracing::info!("seeded default template at {}", default_dir.display());
    }
    Ok(())
}

fn default_manifest() -> Manifest {
    let mut fields = Map::new();
    fields.insert("name".to_owned(), Value::from("Orby app"));
    fields.insert("description".to_owned(), Value::from("Empty Orby application"));
    Manifest::from_fields(fields)
}
