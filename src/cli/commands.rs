//! CLI definition using clap.
//!
//! There are no subcommands: running the binary starts the prompt loop.

use clap::Parser;
use std::path::PathBuf;

/// nexttask - Ask for feedback or the next task
#[derive(Parser, Debug)]
#[command(name = "nexttask")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Optional config file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}
