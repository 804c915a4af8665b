use colored::Colorize;
use rofs::filesystem::ReadOnlyFileSystem;
use rofs::snapshot::{Snapshot, SnapshotError};
use snafu::Snafu;
use snafu::prelude::*;
use tracing::{debug, info};

use crate::application::RuntimeConfig;
use crate::application::data::Query;

pub struct Application;

impl Application {
    pub async fn run(app_config: impl Into<RuntimeConfig>) -> Result<(), ApplicationError> {
        let app_config: RuntimeConfig = app_config.into();
        let snapshot = Snapshot::read(&app_config.snapshot)
            .await
            .context(SnapshotSnafu)?;
        debug!("Loaded snapshot: {:?}", snapshot);

        info!("Running query {:?}", app_config.query);
        print!("{}", Self::answer(&app_config.query, snapshot.filesystem()));

        Ok(())
    }

    /// Renders the answer to a query, newline-terminated.
    fn answer(query: &Query, filesystem: &ReadOnlyFileSystem) -> String {
        match query {
            Query::Print => filesystem.pretty_print(),
            Query::Size => format!(
                "{} / {} bytes\n",
                filesystem.total_size(),
                filesystem.capacity()
            ),
            Query::Capacity => format!("{}\n", filesystem.capacity()),
            Query::Search { phrase } => filesystem
                .search(phrase)
                .into_iter()
                .map(|file| format!("{}\n", file.name().green().bold()))
                .collect(),
        }
    }
}

#[derive(Debug, Snafu)]
pub enum ApplicationError {
    #[snafu(display("Critical failure encountered while loading the snapshot"))]
    SnapshotError { source: SnapshotError },
}
