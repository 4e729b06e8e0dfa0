//! # CLI Argument Definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// The main CLI structure parsing command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "mlp")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Project utilities for the mlProject pipeline")]
pub(crate) struct Cli {
    /// Settings file (defaults to an optional `mlp.*` in the working directory)
    #[arg(short, long, global = true)]
    pub(crate) config: Option<PathBuf>,

    #[command(subcommand)]
    pub(crate) command: Commands,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    /// Create directories, including missing parents
    Mkdirs {
        /// Do not log each created directory
        #[arg(short, long)]
        quiet: bool,
        #[arg(required = true)]
        dirs: Vec<PathBuf>,
    },
    /// Print the size of a file in KB
    Size { file: PathBuf },
    /// Print a YAML config file as JSON
    ShowConfig {
        file: PathBuf,
        /// Dotted key path to print instead of the whole document
        #[arg(short, long)]
        key: Option<String>,
    },
    /// Print the install requirements of a requirements file
    Requirements { file: PathBuf },
    /// Print package metadata
    Info {
        /// Include the install requirements read from this file
        #[arg(short, long)]
        requirements: Option<PathBuf>,
    },
}
