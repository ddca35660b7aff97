//! Command line arguments.

use clap::Parser;
use std::path::PathBuf;

/// Command line arguments
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log filter, overrides the configuration file (e.g. "debug")
    #[arg(short, long)]
    pub log_level: Option<String>,
}
