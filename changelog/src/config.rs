use std::path::{Path, PathBuf};

/// Conventional location of the changes document, relative to the working directory
pub const DEFAULT_CHANGES_FILE: &str = "CHANGES.yaml";

/// Configuration options for release notes extraction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractConfig {
    pub changes_file: PathBuf,
}

impl ExtractConfig {
    #[must_use]
    pub fn with_changes_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.changes_file = path.into();
        self
    }

    #[must_use]
    pub fn changes_file(&self) -> &Path {
        &self.changes_file
    }
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            changes_file: PathBuf::from(DEFAULT_CHANGES_FILE),
        }
    }
}
