use std::path::PathBuf;

use clap::Parser;

use crate::application::data::{LogLevel, Query};

#[derive(Parser, Debug, Clone)]
#[command(version, about = "Query a read-only filesystem snapshot")]
pub struct Cli {
    /// YAML snapshot describing the filesystem
    pub snapshot: PathBuf,

    #[command(subcommand)]
    pub query: Query,

    #[clap(long, short, default_value = "warn", value_enum, global = true)]
    pub log_level: LogLevel,
}
