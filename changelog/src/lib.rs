//! Release notes extraction from a `CHANGES.yaml` document.
//!
//! The document maps version strings to release entries; [`extract`] looks up
//! a single version and renders its entry as a markdown section suitable for a
//! release description.

pub mod config;
pub mod core;
pub mod error;
pub mod formatter;
pub mod parser;
pub mod types;

pub use crate::config::{DEFAULT_CHANGES_FILE, ExtractConfig};
pub use crate::core::{
    ChangelogExtractor, extract, missing_document_message, missing_version_message,
    normalize_version,
};
pub use crate::error::ChangelogError;
pub use crate::formatter::render_release;
pub use crate::types::{ChangeCategory, ChangeDocument, ReleaseEntry, Result};
