//! Loading a [`ReadOnlyFileSystem`](crate::filesystem::ReadOnlyFileSystem)
//! from a YAML description of its tree.
//!
//! ```yaml
//! capacity: 10 KB
//! root:
//!   name: root
//!   directories:
//!     - name: data
//!       files:
//!         - name: exp-name.log
//!           content: log content
//!   files: []
//! ```
//!
//! `directories` and `files` may be left out, in which case they are empty.
//! An explicit `null` anywhere an argument is expected is rejected.

mod snapshot;

pub use snapshot::{Snapshot, SnapshotError};
