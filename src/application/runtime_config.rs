use std::path::PathBuf;

use crate::application::data::Query;
use crate::cli::Cli;

#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub snapshot: PathBuf,
    pub query: Query,
}

impl From<Cli> for RuntimeConfig {
    fn from(cli: Cli) -> Self {
        Self {
            snapshot: cli.snapshot,
            query: cli.query,
        }
    }
}
