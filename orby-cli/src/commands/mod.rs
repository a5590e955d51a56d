pub mod build;
pub mod new;
pub mod projects;
pub mod templates;
