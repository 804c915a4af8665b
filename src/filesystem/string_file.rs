use snafu::ensure;

use super::error::{EmptyNameSnafu, InvalidArgumentError};

/// A named, immutable file holding text content.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StringFile {
    name: String,
    content: String,
}

impl StringFile {
    pub fn new(
        name: impl Into<String>,
        content: impl Into<String>,
    ) -> Result<Self, InvalidArgumentError> {
        let name = name.into();
        ensure!(!name.is_empty(), EmptyNameSnafu);

        Ok(Self {
            name,
            content: content.into(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Size of the content in bytes.
    pub fn size(&self) -> u64 {
        self.content.len() as u64
    }

    /// Case-sensitive substring match against the content. An empty phrase
    /// matches every file.
    pub fn contains(&self, phrase: &str) -> bool {
        self.content.contains(phrase)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[test]
    fn rejects_empty_name() {
        let result = StringFile::new("", "content");
        assert!(matches!(result, Err(InvalidArgumentError::EmptyName)));
    }

    #[test]
    fn accepts_empty_content() {
        let file = StringFile::new("empty.txt", "").expect("Failed to create file");
        assert_eq!(file.size(), 0);
        assert_eq!(file.content(), "");
    }

    #[rstest]
    #[case("content1", 8)]
    #[case("This is a log file.", 19)]
    #[case("", 0)]
    #[case("äöü", 6)]
    #[case("🚀", 4)]
    #[case("multiline\ncontent", 17)]
    fn size_is_content_byte_length(#[case] content: &str, #[case] expected: u64) {
        let file = StringFile::new("file.txt", content).expect("Failed to create file");
        assert_eq!(file.size(), expected);
        assert_eq!(file.size(), content.len() as u64);
    }

    #[test]
    fn exposes_name_and_content() {
        let file =
            StringFile::new("log.txt", "This is a log file.").expect("Failed to create file");
        assert_eq!(file.name(), "log.txt");
        assert_eq!(file.content(), "This is a log file.");
    }

    #[rstest]
    #[case("log", true)]
    #[case("Log", false)]
    #[case("a log f", true)]
    #[case("", true)]
    #[case("notfound", false)]
    fn contains_is_case_sensitive_substring(#[case] phrase: &str, #[case] expected: bool) {
        let file =
            StringFile::new("log.txt", "This is a log file.").expect("Failed to create file");
        assert_eq!(file.contains(phrase), expected);
    }
}
