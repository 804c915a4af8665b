use std::path::{Path, PathBuf};

/// Renders a path for log and error messages, resolving it against the
/// current directory when it cannot be canonicalized.
pub trait PathDisplayExt {
    fn best_effort_display(&self) -> String;
}

impl PathDisplayExt for Path {
    fn best_effort_display(&self) -> String {
        if let Ok(canonical) = self.canonicalize() {
            return canonical.display().to_string();
        }
        if self.is_absolute() {
            return self.display().to_string();
        }
        std::env::current_dir()
            .map(|current_dir| current_dir.join(self))
            .unwrap_or_else(|_| self.to_path_buf())
            .display()
            .to_string()
    }
}

impl PathDisplayExt for PathBuf {
    fn best_effort_display(&self) -> String {
        self.as_path().best_effort_display()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn existing_path_is_canonicalized() {
        let temp_file = NamedTempFile::new().expect("Failed to create temp file");
        let canonical = temp_file
            .path()
            .canonicalize()
            .expect("Failed to canonicalize temp file");

        assert_eq!(
            temp_file.path().best_effort_display(),
            canonical.display().to_string()
        );
    }

    #[test]
    fn missing_absolute_path_is_kept() {
        let path = PathBuf::from("/this/path/does/not/exist.yaml");
        assert_eq!(path.best_effort_display(), "/this/path/does/not/exist.yaml");
    }

    #[test]
    fn missing_relative_path_is_resolved_against_current_dir() {
        let path = Path::new("does-not-exist.yaml");
        let display = path.best_effort_display();

        assert!(display.ends_with("does-not-exist.yaml"));
        assert!(Path::new(&display).is_absolute());
    }
}
