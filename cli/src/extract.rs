use changelog::{ChangelogExtractor, ExtractConfig, normalize_version};
use tracing::debug;

use crate::error::{CliError, Result};

/// Returns the release notes for `version` using the default `CHANGES.yaml`
pub fn execute(version: &str) -> Result<String> {
    let version = normalize_version(version);
    let extractor = ChangelogExtractor::new(ExtractConfig::default());

    debug!(
        version,
        path = %extractor.config().changes_file().display(),
        "extracting release notes"
    );

    extractor.extract(version).map_err(|e| {
        CliError::Changelog(e).with_context(format!("Failed to extract notes for {version}"))
    })
}
