//! `orby new <name> [path] [--template <T>]`

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use orby_core::{project, OrbyPaths, ProjectName, TemplateName};

/// Create a new Orby project from a template.
#[derive(Args, Debug)]
pub struct NewArgs {
    /// Project name; also the registry key and the manifest `name`.
    #[arg(default_value = "Orby app")]
    pub name: String,

    /// Target directory. Defaults to ./<name>.
    pub path: Option<PathBuf>,

    /// Template to instantiate.
    #[arg(long, short = 't', default_value = TemplateName::DEFAULT)]
    pub template: String,
}

impl NewArgs {
    pub fn run(self, paths: &OrbyPaths) -> Result<()> {
        let name = ProjectName::from(self.name);
        let template = TemplateName::from(self.template);

        let created = project::create_project(paths, &name, self.path.as_deref(), &template)
            .with_context(|| format!("error when creating project '{name}'"))?;

        println!("{} Project '{}' created!", "✓".green().bold(), created.name);
        println!("  Path:     {}", created.entry.path.display());
        println!("  Template: {}", created.entry.template);
        Ok(())
    }
}
