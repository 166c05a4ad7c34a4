//! Command line arguments

use clap::Parser;
use std::path::PathBuf;

/// Replay a JSON action log through the cloud storage store and print the final state
#[derive(Debug, Parser)]
#[command(name = "cloud-storage-replay", version, about)]
pub struct Args {
    /// JSON file holding an array of actions
    pub actions: PathBuf,

    /// Explicit config file, otherwise the usual lookup applies
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}
