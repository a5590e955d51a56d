//! Orby core library — manifest model, project registry, template library.
//!
//! Public API surface:
//! - [`paths`] — [`OrbyPaths`] configuration and [`paths::bootstrap`]
//! - [`manifest`] — [`Manifest`]
//! - [`registry`] — load / save of `projects.json` and `templates.json`
//! - [`project`] — create / list / remove projects
//! - [`template`] — list / save / remove templates
//! - [`error`] — [`OrbyError`] and its [`ErrorKind`] taxonomy

pub mod error;
pub mod fs;
pub mod manifest;
pub mod paths;
pub mod project;
pub mod registry;
pub mod template;
pub mod types;

pub use error::{ErrorKind, OrbyError};
pub use manifest::Manifest;
pub use paths::OrbyPaths;
pub use types::{
    CreatedProject, ProjectName, Registry, RegistryEntry, TemplateIndex, TemplateInfo,
    TemplateName,
};
