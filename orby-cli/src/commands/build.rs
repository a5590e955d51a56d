//! `orby build <path> [save_at]` and `orby inspect <archive>`

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

/// Pack a project directory into a .orby archive.
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Project directory containing manifest.json.
    pub path: PathBuf,

    /// Directory to write <name>.orby into. Defaults to the current directory.
    pub save_at: Option<PathBuf>,
}

impl BuildArgs {
    pub fn run(self) -> Result<()> {
        let archive = orby_package::build(&self.path, self.save_at.as_deref())
            .with_context(|| format!("error when building project '{}'", self.path.display()))?;

        println!("{} Project built!", "✓".green().bold());
        println!("  Saved to: {}", archive.display());
        Ok(())
    }
}

/// List the files stored in a .orby archive.
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Path to a .orby archive.
    pub archive: PathBuf,
}

impl InspectArgs {
    pub fn run(self) -> Result<()> {
        let members = orby_package::list_members(&self.archive)
            .with_context(|| format!("cannot read archive '{}'", self.archive.display()))?;
        for member in &members {
            println!("{member}");
        }
        Ok(())
    }
}
