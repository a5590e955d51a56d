//! Orby DevTools — create, package and manage `.orby` application projects.
//!
//! # Usage
//!
//! ```text
//! orby new <name> [path] [--template <T>]
//! orby build <path> [save_at]
//! orby inspect <archive>
//! orby projects [--json]
//! orby rmproject <name> [rmdir: t|f]
//! orby templates [--json]
//! orby savetemplate <name> <path>
//! orby rmtemplate <name>
//! ```

mod commands;

use std::fmt;
use std::str::FromStr;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use commands::{
    build::{BuildArgs, InspectArgs},
    new::NewArgs,
    projects::{ProjectsArgs, RmProjectArgs},
    templates::{RmTemplateArgs, SaveTemplateArgs, TemplatesArgs},
};
use orby_core::{paths, OrbyPaths};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "orby",
    version,
    about = "Orby DevTools: scaffold, package and manage .orby projects",
    long_about = None,
)]
struct Cli {
    /// Log every step to stderr (same as RUST_LOG=debug).
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Create a new Orby project from a template.
    New(NewArgs),

    /// Pack a project directory into a .orby archive.
    Build(BuildArgs),

    /// List the files stored in a .orby archive.
    Inspect(InspectArgs),

    /// List registered projects.
    Projects(ProjectsArgs),

    /// Remove a project from the registry, optionally deleting its files.
    #[command(name = "rmproject")]
    RmProject(RmProjectArgs),

    /// List available templates.
    Templates(TemplatesArgs),

    /// Save a directory as a reusable template.
    #[command(name = "savetemplate")]
    SaveTemplate(SaveTemplateArgs),

    /// Delete a template.
    #[command(name = "rmtemplate")]
    RmTemplate(RmTemplateArgs),
}

// ---------------------------------------------------------------------------
// Shared yes/no positional argument
// ---------------------------------------------------------------------------

/// Loose boolean so `rmproject foo t` and `rmproject foo yes` both parse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlagArg(pub bool);

impl FromStr for FlagArg {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "t" | "true" | "y" | "yes" | "1" => Ok(Self(true)),
            "f" | "false" | "n" | "no" | "0" => Ok(Self(false)),
            other => Err(format!("expected t or f, got '{other}'")),
        }
    }
}

impl fmt::Display for FlagArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(if self.0 { "t" } else { "f" })
    }
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let paths = OrbyPaths::discover().context("cannot locate the Orby data directory")?;
    tracing::debug!("data directory: {}", paths.data_dir.display());
    paths::bootstrap(&paths)
        .with_context(|| format!("failed to initialise {}", paths.data_dir.display()))?;

    match cli.command {
        Commands::New(args) => args.run(&paths),
        Commands::Build(args) => args.run(),
        Commands::Inspect(args) => args.run(),
        Commands::Projects(args) => args.run(&paths),
        Commands::RmProject(args) => args.run(&paths),
        Commands::Templates(args) => args.run(&paths),
        Commands::SaveTemplate(args) => args.run(&paths),
        Commands::RmTemplate(args) => args.run(&paths),
    }
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_arg_accepts_short_and_long_forms() {
        assert_eq!("t".parse::<FlagArg>().unwrap(), FlagArg(true));
        assert_eq!("False".parse::<FlagArg>().unwrap(), FlagArg(false));
        assert!("maybe".parse::<FlagArg>().is_err());
    }

    #[test]
    fn cli_parses_rmproject_with_flag() {
        let cli = Cli::try_parse_from(["orby", "rmproject", "foo", "t"]).unwrap();
        match cli.command {
            Commands::RmProject(args) => {
                assert_eq!(args.name, "foo");
                assert_eq!(args.rmdir, FlagArg(true));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn cli_new_defaults_to_default_template() {
        let cli = Cli::try_parse_from(["orby", "new", "app"]).unwrap();
        match cli.command {
            Commands::New(args) => {
                assert_eq!(args.template, "default");
                assert!(args.path.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
