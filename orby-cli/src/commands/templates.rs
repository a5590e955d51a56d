//! `orby templates`, `orby savetemplate <name> <path>`, `orby rmtemplate <name>`

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use tabled::{settings::Style, Table, Tabled};

use orby_core::{template, OrbyPaths, TemplateName};

/// List available templates.
#[derive(Args, Debug)]
pub struct TemplatesArgs {
    /// Emit the template list as JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Tabled)]
struct TemplateRow {
    #[tabled(rename = "template")]
    name: String,
    #[tabled(rename = "description")]
    description: String,
}

impl TemplatesArgs {
    pub fn run(self, paths: &OrbyPaths) -> Result<()> {
        let templates =
            template::list_templates(paths).context("failed to read template library")?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&templates)?);
            return Ok(());
        }

        if templates.is_empty() {
            println!("No templates installed.");
            return Ok(());
        }

        let rows: Vec<TemplateRow> = templates
            .into_iter()
            .map(|(name, info)| TemplateRow {
                name: name.0,
                description: info.description,
            })
            .collect();
        let mut table = Table::new(rows);
        table.with(Style::rounded());
        println!("{table}");
        Ok(())
    }
}

/// Save a directory (with a manifest.json) as a template.
#[derive(Args, Debug)]
pub struct SaveTemplateArgs {
    /// Name of the new template.
    pub name: String,

    /// Directory to copy into the template library.
    pub path: PathBuf,
}

impl SaveTemplateArgs {
    pub fn run(self, paths: &OrbyPaths) -> Result<()> {
        let name = TemplateName::from(self.name);
        let info = template::save_template(paths, &name, &self.path)
            .with_context(|| format!("error when saving template '{name}'"))?;

        println!("{} Template '{}' saved", "✓".green().bold(), name);
        println!("  Path: {}", info.path.display());
        Ok(())
    }
}

/// Delete a template from the library.
#[derive(Args, Debug)]
pub struct RmTemplateArgs {
    /// Template name.
    pub name: String,
}

impl RmTemplateArgs {
    pub fn run(self, paths: &OrbyPaths) -> Result<()> {
        let name = TemplateName::from(self.name);
        template::remove_template(paths, &name)
            .with_context(|| format!("error when removing template '{name}'"))?;

        println!("{} Template '{}' removed", "✓".green().bold(), name);
        Ok(())
    }
}
