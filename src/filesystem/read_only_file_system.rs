use std::fmt::{self, Display, Write as _};

use snafu::ensure;
use tracing::{debug, trace, warn};

use super::error::{InvalidArgumentError, NegativeCapacitySnafu};
use super::{Entry, SimpleDirectory, StringFile};

const BRANCH: &str = "+-";
const INDENT: &str = "| ";
const DIRECTORY_SUFFIX: char = '/';

/// A fixed directory tree with an advisory capacity in bytes.
///
/// The capacity is reported as given; a tree larger than its capacity is
/// still accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadOnlyFileSystem {
    capacity: i64,
    root: SimpleDirectory,
}

impl ReadOnlyFileSystem {
    pub fn new(capacity: i64, root: SimpleDirectory) -> Result<Self, InvalidArgumentError> {
        ensure!(capacity >= 0, NegativeCapacitySnafu { capacity });

        let filesystem = Self { capacity, root };
        let used = filesystem.total_size();
        debug!(
            "Created filesystem rooted at '{}' using {} of {} bytes",
            filesystem.root.name(),
            used,
            capacity
        );
        if used > capacity as u64 {
            warn!(
                "Filesystem rooted at '{}' exceeds its capacity: {} > {} bytes",
                filesystem.root.name(),
                used,
                capacity
            );
        }

        Ok(filesystem)
    }

    pub fn capacity(&self) -> i64 {
        self.capacity
    }

    pub fn root(&self) -> &SimpleDirectory {
        &self.root
    }

    /// Sum of the sizes of every file in the tree.
    pub fn total_size(&self) -> u64 {
        self.root.total_size()
    }

    /// Renders the tree depth-first, one entry per line, subdirectories
    /// before files:
    ///
    /// ```text
    /// +-root/
    /// | +-sub/
    /// | | +-file.txt
    /// ```
    pub fn pretty_print(&self) -> String {
        self.to_string()
    }

    /// Every file whose content contains `phrase`, in the order
    /// [`pretty_print`](Self::pretty_print) lists them.
    pub fn search(&self, phrase: &str) -> Vec<&StringFile> {
        let mut matches = Vec::new();
        Self::collect_matches(&self.root, phrase, &mut matches);
        debug!("Search for {:?} matched {} files", phrase, matches.len());
        matches
    }

    fn collect_matches<'a>(
        directory: &'a SimpleDirectory,
        phrase: &str,
        matches: &mut Vec<&'a StringFile>,
    ) {
        for entry in directory.contents() {
            match entry {
                Entry::Directory(subdirectory) => {
                    Self::collect_matches(subdirectory, phrase, matches)
                }
                Entry::File(file) if file.contains(phrase) => {
                    trace!("File '{}' matches {:?}", file.name(), phrase);
                    matches.push(file);
                }
                Entry::File(_) => {}
            }
        }
    }

    fn write_entry(f: &mut fmt::Formatter<'_>, entry: Entry<'_>, depth: usize) -> fmt::Result {
        for _ in 0..depth {
            f.write_str(INDENT)?;
        }
        f.write_str(BRANCH)?;
        f.write_str(entry.name())?;

        match entry {
            Entry::Directory(directory) => {
                f.write_char(DIRECTORY_SUFFIX)?;
                f.write_char('\n')?;
                for child in directory.contents() {
                    Self::write_entry(f, child, depth + 1)?;
                }
                Ok(())
            }
            Entry::File(_) => f.write_char('\n'),
        }
    }
}

impl Display for ReadOnlyFileSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Self::write_entry(f, Entry::Directory(&self.root), 0)
    }
}
