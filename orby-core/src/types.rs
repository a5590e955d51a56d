//! Domain types for the Orby registry and template library.
//!
//! All path fields use `PathBuf`; never `&str` or `String` for filesystem paths.
//! All persisted types are serializable/deserializable via serde + serde_json.

use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// A strongly-typed project name; the unique key of the registry.
///
/// Comparison is an exact, case-sensitive string match.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ProjectName(pub String);

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for ProjectName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ProjectName {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

/// A strongly-typed template name: the directory name under the template library.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TemplateName(pub String);

impl TemplateName {
    pub const DEFAULT: &'static str = "default";
}

impl Default for TemplateName {
    fn default() -> Self {
        Self(Self::DEFAULT.to_owned())
    }
}

impl fmt::Display for TemplateName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for TemplateName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for TemplateName {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

// ---------------------------------------------------------------------------
// Persisted documents
// ---------------------------------------------------------------------------

/// One project tracked by the registry. The project name is the map key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryEntry {
    /// Absolute path to the project root on disk.
    pub path: PathBuf,
    /// Template the project was instantiated from.
    pub template: TemplateName,
}

/// Root of `projects.json`: project name → entry, sorted by name.
pub type Registry = BTreeMap<ProjectName, RegistryEntry>;

/// Root of `templates.json`. Advisory only; the template directory listing wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateIndex {
    #[serde(default)]
    pub templates: Vec<TemplateName>,
}

impl Default for TemplateIndex {
    fn default() -> Self {
        Self {
            templates: vec![TemplateName::default()],
        }
    }
}

// ---------------------------------------------------------------------------
// Operation results
// ---------------------------------------------------------------------------

/// A template as reported by the template listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateInfo {
    pub path: PathBuf,
    /// `description` from the manifest, `""` when absent, or
    /// `"Invalid manifest.json"` when the manifest does not parse.
    pub description: String,
}

/// What `create_project` registered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedProject {
    pub name: ProjectName,
    pub entry: RegistryEntry,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newtype_display() {
        assert_eq!(ProjectName::from("foo").to_string(), "foo");
        assert_eq!(TemplateName::from("bar").to_string(), "bar");
    }

    #[test]
    fn project_names_are_case_sensitive() {
        assert_ne!(ProjectName::from("App"), ProjectName::from("app"));
    }

    #[test]
    fn registry_serializes_as_flat_object() {
        let mut reg = Registry::new();
        reg.insert(
            ProjectName::from("foo"),
            RegistryEntry {
                path: PathBuf::from("/code/foo"),
                template: TemplateName::default(),
            },
        );
        let json = serde_json::to_value(&reg).expect("serialize");
        assert_eq!(json["foo"]["path"], "/code/foo");
        assert_eq!(json["foo"]["template"], "default");
    }

    #[test]
    fn template_index_defaults_to_default_template() {
        let index = TemplateIndex::default();
        assert_eq!(index.templates, vec![TemplateName::from("default")]);
    }
}
