use derive_more::{From, IsVariant};

use super::{SimpleDirectory, StringFile};

/// A borrowed node of the filesystem tree: either a directory or a file.
///
/// Only directories have children, only files have content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, From, IsVariant)]
pub enum Entry<'a> {
    Directory(&'a SimpleDirectory),
    File(&'a StringFile),
}

impl<'a> Entry<'a> {
    pub fn name(&self) -> &'a str {
        match self {
            Entry::Directory(directory) => directory.name(),
            Entry::File(file) => file.name(),
        }
    }

    /// Immediate children, or `None` for a file.
    pub fn children(&self) -> Option<Vec<Entry<'a>>> {
        match self {
            Entry::Directory(directory) => Some(directory.contents()),
            Entry::File(_) => None,
        }
    }

    /// Text content, or `None` for a directory.
    pub fn content(&self) -> Option<&'a str> {
        match self {
            Entry::Directory(_) => None,
            Entry::File(file) => Some(file.content()),
        }
    }

    /// Bytes taken by this entry: the file size, or the whole subtree of a
    /// directory.
    pub fn size(&self) -> u64 {
        match self {
            Entry::Directory(directory) => directory.total_size(),
            Entry::File(file) => file.size(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_entry_has_content_and_no_children() {
        let file = StringFile::new("file.txt", "content").expect("Failed to create file");
        let entry = Entry::from(&file);

        assert!(entry.is_file());
        assert_eq!(entry.name(), "file.txt");
        assert_eq!(entry.content(), Some("content"));
        assert_eq!(entry.children(), None);
        assert_eq!(entry.size(), 7);
    }

    #[test]
    fn directory_entry_has_children_and_no_content() {
        let file = StringFile::new("file.txt", "content").expect("Failed to create file");
        let directory =
            SimpleDirectory::new("dir", vec![], vec![file.clone()]).expect("Failed to create dir");
        let entry = Entry::from(&directory);

        assert!(entry.is_directory());
        assert_eq!(entry.name(), "dir");
        assert_eq!(entry.content(), None);
        assert_eq!(entry.children(), Some(vec![Entry::File(&directory.files()[0])]));
        assert_eq!(entry.size(), file.size());
    }
}
