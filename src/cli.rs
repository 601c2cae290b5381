//! Command-line interface implementation for Stencil.
//! Provides argument parsing using clap.

use crate::constants::DEFAULT_REGISTRY_URL;
use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments structure for Stencil.
#[derive(Parser, Debug)]
#[command(author, version, about = "Stencil: materialize ready-to-use projects from remote template bundles", long_about = None)]
pub struct Args {
    /// Template id from the registry; selected interactively when omitted
    #[arg(value_name = "TEMPLATE")]
    pub template: Option<String>,

    /// Directory the generated archive is written to
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Registry URL listing the available templates
    #[arg(long, value_name = "URL", default_value = DEFAULT_REGISTRY_URL)]
    pub registry: String,

    /// Repository override (full URL or owner/repo)
    #[arg(long, value_name = "REPO")]
    pub repo: Option<String>,

    /// Branch override
    #[arg(long, value_name = "BRANCH")]
    pub branch: Option<String>,

    /// Prompt value override; repeatable
    #[arg(short, long = "set", value_name = "KEY=VALUE")]
    pub set: Vec<String>,

    /// Accept every prompt's default without asking
    #[arg(long)]
    pub defaults: bool,

    /// List the registry's templates and exit
    #[arg(short, long)]
    pub list: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments and returns the Args structure.
pub fn get_args() -> Args {
    Args::parse()
}
