//! `orby projects` and `orby rmproject <name> [rmdir]`

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use tabled::{settings::Style, Table, Tabled};

use orby_core::{project, OrbyPaths, ProjectName};

use super::super::FlagArg;

/// List registered projects.
#[derive(Args, Debug)]
pub struct ProjectsArgs {
    /// Emit the registry as JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Tabled)]
struct ProjectRow {
    #[tabled(rename = "project")]
    name: String,
    #[tabled(rename = "template")]
    template: String,
    #[tabled(rename = "path")]
    path: String,
}

impl ProjectsArgs {
    pub fn run(self, paths: &OrbyPaths) -> Result<()> {
        let projects = project::list_projects(paths).context("failed to read project registry")?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&projects)?);
            return Ok(());
        }

        if projects.is_empty() {
            println!("No projects registered.");
            println!("Run: orby new <name> [path]");
            return Ok(());
        }

        let rows: Vec<ProjectRow> = projects
            .iter()
            .map(|(name, entry)| ProjectRow {
                name: name.to_string(),
                template: entry.template.to_string(),
                path: entry.path.display().to_string(),
            })
            .collect();
        let mut table = Table::new(rows);
        table.with(Style::rounded());
        println!("{table}");
        Ok(())
    }
}

/// Remove a project from the registry.
#[derive(Args, Debug)]
pub struct RmProjectArgs {
    /// Registered project name.
    pub name: String,

    /// Also delete the project directory (t|f).
    #[arg(default_value_t = FlagArg(false))]
    pub rmdir: FlagArg,
}

impl RmProjectArgs {
    pub fn run(self, paths: &OrbyPaths) -> Result<()> {
        let name = ProjectName::from(self.name);
        let removed = project::remove_project(paths, &name, self.rmdir.0)
            .with_context(|| format!("error when removing project '{name}'"))?;

        println!("{} Project '{}' removed from registry", "✓".green().bold(), name);
        if self.rmdir.0 {
            println!("  Deleted: {}", removed.path.display());
        }
        Ok(())
    }
}
