//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::Parser;

/// dirtree - Print your declared directory structure and check it against the disk
#[derive(Parser, Debug)]
#[command(name = "dirtree")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Structure config file (.yml, .yaml, .json or .toml)
    ///
    /// Defaults to directories_structure.yml in the user config directory.
    #[arg(short, long, env = "DIRTREE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Check directory rules
    #[arg(long)]
    pub check_rules: bool,

    /// Print in the tree all the checks performed
    #[arg(long)]
    pub print_checks: bool,

    /// Output as JSON for scripting
    #[arg(long)]
    pub json: bool,
}
