//! Error types for orby-core.

use std::path::PathBuf;

use thiserror::Error;

/// Coarse classification of an [`OrbyError`], independent of where it arose.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A referenced template, project, manifest or manifest field is missing.
    NotFound,
    /// A name collides with an existing project or template.
    AlreadyExists,
    /// An underlying read/write/copy/delete failed.
    Io,
    /// A registry or manifest document could not be parsed.
    MalformedData,
    /// A caller-supplied name was rejected before touching the filesystem.
    Invalid,
}

/// All errors that can arise from registry, project and template operations.
#[derive(Debug, Error)]
pub enum OrbyError {
    /// Underlying I/O failure, annotated with the path involved.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Directory walk failure while copying a tree.
    #[error("failed to walk {path}: {source}")]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// JSON parse error on load, with the file it came from.
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// JSON serialization error (write/save path).
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// `manifest.json` parsed but its top level is not an object.
    #[error("manifest at {path} is not a JSON object")]
    ManifestNotObject { path: PathBuf },

    /// `dirs::home_dir()` returned `None`.
    #[error("cannot determine home directory; set $HOME or equivalent")]
    HomeNotFound,

    /// A persisted document (registry, template index) is missing.
    #[error("registry not found at {path}")]
    RegistryNotFound { path: PathBuf },

    #[error("manifest.json not found in {dir}")]
    ManifestNotFound { dir: PathBuf },

    #[error("manifest at {path} is missing required `name` field")]
    ManifestNameMissing { path: PathBuf },

    #[error("template '{name}' not found")]
    TemplateNotFound { name: String },

    #[error("template '{name}' already exists")]
    TemplateExists { name: String },

    #[error("project '{name}' does not exist")]
    ProjectNotFound { name: String },

    #[error("project '{name}' already exists at '{}'", .path.display())]
    ProjectExists { name: String, path: PathBuf },

    #[error("source directory {path} does not exist")]
    SourceNotFound { path: PathBuf },

    /// A tree copy whose destination lies inside its own source.
    #[error("cannot copy {} into itself ({})", .src.display(), .dst.display())]
    CopyIntoSelf { src: PathBuf, dst: PathBuf },

    /// A template name that is not a single plain path component.
    #[error("invalid template name '{name}'")]
    InvalidName { name: String },
}

impl OrbyError {
    /// Classify this error into the coarse [`ErrorKind`] taxonomy.
    pub fn kind(&self) -> ErrorKind {
        match self {
            OrbyError::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound => {
                ErrorKind::NotFound
            }
            OrbyError::Io { .. } | OrbyError::Walk { .. } | OrbyError::HomeNotFound => {
                ErrorKind::Io
            }
            OrbyError::Parse { .. } | OrbyError::Json(_) | OrbyError::ManifestNotObject { .. } => {
                ErrorKind::MalformedData
            }
            OrbyError::RegistryNotFound { .. }
            | OrbyError::ManifestNotFound { .. }
            | OrbyError::ManifestNameMissing { .. }
            | OrbyError::TemplateNotFound { .. }
            | OrbyError::ProjectNotFound { .. }
            | OrbyError::SourceNotFound { .. } => ErrorKind::NotFound,
            OrbyError::TemplateExists { .. } | OrbyError::ProjectExists { .. } => {
                ErrorKind::AlreadyExists
            }
            OrbyError::InvalidName { .. } | OrbyError::CopyIntoSelf { .. } => ErrorKind::Invalid,
        }
    }
}

/// Convenience constructor for [`OrbyError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> OrbyError {
    OrbyError::Io {
        path: path.into(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_io_error_is_not_found() {
        let err = io_err(
            "/nowhere",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn permission_io_error_is_io() {
        let err = io_err(
            "/root",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "nope"),
        );
        assert_eq!(err.kind(), ErrorKind::Io);
    }

    #[test]
    fn project_exists_message_names_conflicting_path() {
        let err = OrbyError::ProjectExists {
            name: "foo".into(),
            path: PathBuf::from("/code/foo"),
        };
        assert_eq!(err.kind(), ErrorKind::AlreadyExists);
        assert!(err.to_string().contains("/code/foo"));
    }
}
