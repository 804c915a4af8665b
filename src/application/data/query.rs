use clap::Subcommand;

/// The operation to run against a loaded filesystem.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Query {
    /// Render the directory tree
    Print,
    /// Show the bytes used out of the capacity
    Size,
    /// Show the declared capacity in bytes
    Capacity,
    /// List the files whose content contains a phrase
    Search {
        /// Case-sensitive phrase; an empty phrase matches every file
        phrase: String,
    },
}
