//! dirtree CLI
//!
//! Prints the declared directory structure as a tree and checks it against
//! the filesystem.

mod cli;
mod error;
mod render;

use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;
use dirtree_core::{WalkOptions, walk};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::Cli;
use error::{CliError, Result};
use render::{TreeRenderer, render_json};

/// File name looked up in the user config directory.
const DEFAULT_CONFIG_FILE: &str = "directories_structure.yml";

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
    }

    tracing::debug!(
        print_checks = cli.print_checks,
        check_rules = cli.check_rules,
        verbose = cli.verbose,
        json = cli.json,
        "flags"
    );

    let config_path = resolve_config_path(cli.config.clone())?;
    tracing::debug!(path = %config_path.display(), "loading structure config");

    let output = check(&config_path, &cli)?;
    print!("{output}");
    Ok(())
}

/// Walk the config at `path` and render the report the way `cli` asks.
fn check(path: &std::path::Path, cli: &Cli) -> Result<String> {
    let structure = dirtree_meta::load_structure(path)?;
    let report = walk(
        &structure,
        WalkOptions {
            check_rules: cli.check_rules,
        },
    )?;

    if cli.json {
        let mut json = render_json(&report)?;
        json.push('\n');
        Ok(json)
    } else {
        Ok(TreeRenderer::render_report(&report, cli.print_checks))
    }
}

/// `--config` (or `DIRTREE_CONFIG`), else the file in the user config dir.
fn resolve_config_path(flag: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = flag {
        return Ok(path);
    }
    dirs::config_dir()
        .map(|dir| dir.join("dirtree").join(DEFAULT_CONFIG_FILE))
        .ok_or_else(|| {
            CliError::user("Cannot locate the user config directory; pass --config <PATH>")
        })
}
