use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::ChangelogError;
use crate::types::{ChangeDocument, Result};

impl ChangeDocument {
    /// Parses a document from YAML text.
    ///
    /// An empty or null document has no releases. Anything that is not a
    /// mapping of the expected shape is a [`ChangelogError::ParseError`].
    pub fn from_yaml(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let document: Option<Self> = serde_yaml::from_str(content)?;
        Ok(document.unwrap_or_default())
    }

    /// Reads and parses the document at `path`
    ///
    /// # Errors
    /// Returns error if the file cannot be read or is malformed
    pub fn load(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "reading changes document");

        let content = fs::read_to_string(path)
            .map_err(|e| ChangelogError::ReadError(e).with_context(path.display().to_string()))?;

        let document = Self::from_yaml(&content)
            .map_err(|e| e.with_context(path.display().to_string()))?;

        debug!(releases = document.releases.len(), "parsed changes document");
        Ok(document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_release_entries() {
        let doc = ChangeDocument::from_yaml(
            r#"
releases:
  0.1.0:
    release_summary: |
      First public release.
    minor_changes:
      - Add submit command
      - Add status command
    release_date: "2024-03-01"
"#,
        )
        .unwrap();

        let release = doc.release("0.1.0").unwrap();
        assert_eq!(release.release_summary, "First public release.\n");
        assert_eq!(
            release.minor_changes,
            vec!["Add submit command", "Add status command"]
        );
        assert!(release.bugfixes.is_empty());
        assert_eq!(release.release_date.as_deref(), Some("2024-03-01"));
    }

    #[test]
    fn empty_document_has_no_releases() {
        assert_eq!(ChangeDocument::from_yaml("").unwrap(), ChangeDocument::default());
        assert_eq!(ChangeDocument::from_yaml("\n  \n").unwrap(), ChangeDocument::default());
    }

    #[test]
    fn missing_or_null_releases_key_is_empty() {
        let doc = ChangeDocument::from_yaml("ancestor: 0.0.1\n").unwrap();
        assert!(doc.releases.is_empty());

        let doc = ChangeDocument::from_yaml("releases:\n").unwrap();
        assert!(doc.releases.is_empty());
    }

    #[test]
    fn null_entry_and_null_lists_are_empty() {
        let doc = ChangeDocument::from_yaml(
            "releases:\n  0.2.0:\n  0.3.0:\n    bugfixes:\n    release_summary:\n",
        )
        .unwrap();

        assert_eq!(doc.release("0.2.0"), Some(&Default::default()));
        let release = doc.release("0.3.0").unwrap();
        assert!(release.bugfixes.is_empty());
        assert!(release.release_summary.is_empty());
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let doc = ChangeDocument::from_yaml(
            "releases:\n  1.0.0:\n    fragments:\n      - a.yml\n    codename: Otter\n",
        )
        .unwrap();
        assert!(doc.release("1.0.0").is_some());
    }

    #[test]
    fn malformed_yaml_is_a_parse_error() {
        let err = ChangeDocument::from_yaml("releases: [unclosed\n").unwrap_err();
        assert!(matches!(err, ChangelogError::ParseError(_)));
    }

    #[test]
    fn wrong_shape_is_a_parse_error() {
        let err = ChangeDocument::from_yaml(
            "releases:\n  0.1.0:\n    bugfixes:\n      nested: mapping\n",
        )
        .unwrap_err();
        assert!(matches!(err, ChangelogError::ParseError(_)));
    }

    #[test]
    fn mapping_list_item_is_a_parse_error() {
        let err = ChangeDocument::from_yaml(
            "releases:\n  0.1.0:\n    bugfixes:\n      - Fix: crash on start\n",
        )
        .unwrap_err();
        assert!(matches!(err, ChangelogError::ParseError(_)));

        let doc = ChangeDocument::from_yaml(
            "releases:\n  0.1.0:\n    bugfixes:\n      - \"Fix: crash on start\"\n",
        )
        .unwrap();
        assert_eq!(doc.release("0.1.0").unwrap().bugfixes, ["Fix: crash on start"]);
    }

    #[test]
    fn load_reports_missing_file_with_path() {
        let err = ChangeDocument::load(Path::new("does/not/exist/CHANGES.yaml")).unwrap_err();
        assert!(err.user_message().starts_with("does/not/exist/CHANGES.yaml: "));
    }
}
