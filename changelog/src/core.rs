use std::path::Path;

use tracing::{debug, info};

use crate::config::ExtractConfig;
use crate::formatter::render_release;
use crate::types::{ChangeDocument, Result};

/// Extracts release notes for a single version from a changes document
#[derive(Debug, Clone, Default)]
pub struct ChangelogExtractor {
    config: ExtractConfig,
}

impl ChangelogExtractor {
    #[must_use]
    pub fn new(config: ExtractConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &ExtractConfig {
        &self.config
    }

    /// Extracts the notes for `version` from the configured document.
    ///
    /// # Errors
    /// Returns error if the document exists but cannot be read or parsed
    pub fn extract(&self, version: &str) -> Result<String> {
        extract(version, self.config.changes_file())
    }
}

/// Renders the release notes for `version` from the document at `changes_file`.
///
/// A missing document or a version absent from it yields an informational
/// message rather than an error.
///
/// # Errors
/// Returns error if the document exists but cannot be read or parsed
pub fn extract(version: &str, changes_file: &Path) -> Result<String> {
    if !changes_file.exists() {
        info!(path = %changes_file.display(), "no changes document, using fallback notes");
        return Ok(missing_document_message(version));
    }

    let document = ChangeDocument::load(changes_file)?;

    match document.release(version) {
        Some(release) => {
            debug!(version, "rendering release notes");
            Ok(render_release(release))
        }
        None => {
            info!(version, "version not present in changes document");
            Ok(missing_version_message(version))
        }
    }
}

#[must_use]
pub fn missing_document_message(version: &str) -> String {
    format!("No CHANGES.yaml found. Using version {version}.")
}

#[must_use]
pub fn missing_version_message(version: &str) -> String {
    format!("Version {version} not found in CHANGES.yaml.")
}

/// Strips a single leading `v` from a tag-style version (`v1.2.0` -> `1.2.0`).
/// No other normalisation is applied.
#[must_use]
pub fn normalize_version(version: &str) -> &str {
    version.strip_prefix('v').unwrap_or(version)
}
