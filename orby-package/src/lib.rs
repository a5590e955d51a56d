//! # orby-package
//!
//! Packs a project directory into a single `.orby` archive, a plain zip
//! container whose member names are paths relative to the project root.
//!
//! Call [`build`] to produce `<save_at>/<manifest.name>.orby`, and
//! [`list_members`] to read an archive's member names back.

pub mod archive;
pub mod error;

pub use archive::{build, list_members, ARCHIVE_EXTENSION};
pub use error::PackageError;
