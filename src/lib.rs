//! An immutable, in-memory, read-only filesystem.
//!
//! ```
//! use rofs::filesystem::{ReadOnlyFileSystem, SimpleDirectory, Size, StringFile};
//!
//! # fn main() -> Result<(), rofs::filesystem::InvalidArgumentError> {
//! let file = StringFile::new("file1.txt", "content1")?;
//! let sub = SimpleDirectory::new("sub", vec![], vec![file])?;
//! let root = SimpleDirectory::new("root", vec![sub], vec![])?;
//! let fs = ReadOnlyFileSystem::new(10 * Size::Kilobyte.in_bytes(), root)?;
//!
//! assert_eq!(fs.pretty_print(), "+-root/\n| +-sub/\n| | +-file1.txt\n");
//! assert_eq!(fs.total_size(), 8);
//! assert_eq!(fs.search("content")[0].name(), "file1.txt");
//! # Ok(())
//! # }
//! ```

mod ext;
pub mod filesystem;
pub mod snapshot;
