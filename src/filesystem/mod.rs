//! Immutable, in-memory, read-only filesystem model.
//!
//! A tree is built bottom-up from [`StringFile`] leaves and [`SimpleDirectory`]
//! nodes, then wrapped in a [`ReadOnlyFileSystem`] that answers size, rendering
//! and content search queries. Nothing is mutated after construction, so a
//! filesystem can be shared between threads by reference.

mod entry;
mod error;
mod read_only_file_system;
mod simple_directory;
mod size;
mod string_file;

pub use entry::Entry;
pub use error::InvalidArgumentError;
pub(crate) use error::MissingArgumentSnafu;
pub use read_only_file_system::ReadOnlyFileSystem;
pub use simple_directory::SimpleDirectory;
pub use size::{Size, UnknownSizeUnitError};
pub use string_file::StringFile;
