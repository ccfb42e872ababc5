use crate::commands::Commands;

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "hearth")]
#[command(about = "Operator tool for the invite-gated admission backend")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// SQLite database path (overrides HEARTH_DB)
    #[arg(long, global = true)]
    pub(crate) db: Option<PathBuf>,
}
