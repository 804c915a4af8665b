use snafu::ensure;
use tracing::trace;

use super::error::{EmptyNameSnafu, InvalidArgumentError};
use super::{Entry, StringFile};

/// A named, immutable directory owning its subdirectories and files.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SimpleDirectory {
    name: String,
    subdirectories: Vec<SimpleDirectory>,
    files: Vec<StringFile>,
}

impl SimpleDirectory {
    pub fn new(
        name: impl Into<String>,
        subdirectories: impl IntoIterator<Item = SimpleDirectory>,
        files: impl IntoIterator<Item = StringFile>,
    ) -> Result<Self, InvalidArgumentError> {
        let name = name.into();
        ensure!(!name.is_empty(), EmptyNameSnafu);

        Ok(Self {
            name,
            subdirectories: subdirectories.into_iter().collect(),
            files: files.into_iter().collect(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn subdirectories(&self) -> &[SimpleDirectory] {
        &self.subdirectories
    }

    pub fn files(&self) -> &[StringFile] {
        &self.files
    }

    /// Every immediate child, subdirectories first, each group in insertion
    /// order. Does not recurse.
    pub fn contents(&self) -> Vec<Entry<'_>> {
        self.subdirectories
            .iter()
            .map(Entry::Directory)
            .chain(self.files.iter().map(Entry::File))
            .collect()
    }

    /// Sum of the sizes of every file in this subtree.
    pub fn total_size(&self) -> u64 {
        let nested: u64 = self
            .subdirectories
            .iter()
            .map(SimpleDirectory::total_size)
            .sum();
        let own: u64 = self.files.iter().map(StringFile::size).sum();

        trace!(
            "Directory '{}' holds {} bytes directly and {} bytes nested",
            self.name, own, nested
        );
        nested + own
    }
}
