//! Error types for orby-package.

use std::path::PathBuf;

use thiserror::Error;

use orby_core::{ErrorKind, OrbyError};

/// All errors that can arise while building or reading a `.orby` archive.
#[derive(Debug, Error)]
pub enum PackageError {
    /// Manifest lookup or validation failed.
    #[error(transparent)]
    Core(#[from] OrbyError),

    /// An I/O error, with annotated path for context.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to walk project tree: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("archive error: {0}")]
    Zip(#[from] zip::result::ZipError),
}

impl PackageError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            PackageError::Core(e) => e.kind(),
            PackageError::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound => {
                ErrorKind::NotFound
            }
            PackageError::Io { .. } | PackageError::Walk(_) => ErrorKind::Io,
            PackageError::Zip(zip::result::ZipError::Io(_)) => ErrorKind::Io,
            PackageError::Zip(_) => ErrorKind::MalformedData,
        }
    }
}

/// Convenience constructor for [`PackageError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> PackageError {
    PackageError::Io {
        path: path.into(),
        source,
    }
}
