use crate::error::ChangelogError;
use serde::{Deserialize, Deserializer};
use std::collections::BTreeMap;

/// Type alias for Result with `ChangelogError`
pub type Result<T> = std::result::Result<T, ChangelogError>;

/// The parsed `CHANGES.yaml` document: release entries keyed by version
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ChangeDocument {
    #[serde(default, deserialize_with = "releases_or_empty")]
    pub releases: BTreeMap<String, ReleaseEntry>,
}

impl ChangeDocument {
    /// Looks up the entry for `version`, compared textually against the document keys
    #[must_use]
    pub fn release(&self, version: &str) -> Option<&ReleaseEntry> {
        self.releases.get(version)
    }
}

/// A single version's record. Every field is optional in the document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ReleaseEntry {
    #[serde(deserialize_with = "null_as_default")]
    pub release_summary: String,
    #[serde(deserialize_with = "null_as_default")]
    pub breaking_changes: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub major_changes: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub minor_changes: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub bugfixes: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub security_fixes: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub known_issues: Vec<String>,
    pub release_date: Option<String>,
}

impl ReleaseEntry {
    /// The categorised change lists, in rendering order
    #[must_use]
    pub fn sections(&self) -> [(ChangeCategory, &[String]); 6] {
        [
            (ChangeCategory::Breaking, self.breaking_changes.as_slice()),
            (ChangeCategory::Major, self.major_changes.as_slice()),
            (ChangeCategory::Minor, self.minor_changes.as_slice()),
            (ChangeCategory::Bugfix, self.bugfixes.as_slice()),
            (ChangeCategory::Security, self.security_fixes.as_slice()),
            (ChangeCategory::KnownIssue, self.known_issues.as_slice()),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeCategory {
    Breaking,
    Major,
    Minor,
    Bugfix,
    Security,
    KnownIssue,
}

impl ChangeCategory {
    /// Markdown heading line for the category
    #[must_use]
    pub const fn heading(self) -> &'static str {
        match self {
            Self::Breaking => "## ⚠️ Breaking Changes",
            Self::Major => "## 🎉 Major Changes",
            Self::Minor => "## ✨ Minor Changes",
            Self::Bugfix => "## 🐛 Bug Fixes",
            Self::Security => "## 🔒 Security Fixes",
            Self::KnownIssue => "## ⚠️ Known Issues",
        }
    }

    /// Key of the matching list in a release entry
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Breaking => "breaking_changes",
            Self::Major => "major_changes",
            Self::Minor => "minor_changes",
            Self::Bugfix => "bugfixes",
            Self::Security => "security_fixes",
            Self::KnownIssue => "known_issues",
        }
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// A version key with no body (`0.2.0:`) is an empty entry.
fn releases_or_empty<'de, D>(
    deserializer: D,
) -> std::result::Result<BTreeMap<String, ReleaseEntry>, D::Error>
where
    D: Deserializer<'de>,
{
    let releases: Option<BTreeMap<String, Option<ReleaseEntry>>> =
        Option::deserialize(deserializer)?;
    Ok(releases
        .unwrap_or_default()
        .into_iter()
        .map(|(version, entry)| (version, entry.unwrap_or_default()))
        .collect())
}
