use tracing::trace;

use crate::types::{ChangeCategory, ReleaseEntry};

const SEPARATOR: &str = "---";

/// Renders a release entry as markdown release notes.
///
/// The summary comes first, then each non-empty category as a heading with a
/// bulleted list, then a `---` footer carrying the release date when known.
/// Lines are joined with `\n` and no trailing newline is added.
#[must_use]
pub fn render_release(release: &ReleaseEntry) -> String {
    let mut lines: Vec<String> = Vec::new();

    let summary = release.release_summary.trim();
    if !summary.is_empty() {
        lines.push(summary.to_string());
        lines.push(String::new());
    }

    for (category, items) in release.sections() {
        push_section(&mut lines, category, items);
    }

    lines.push(SEPARATOR.to_string());
    if let Some(date) = release.release_date.as_deref().filter(|d| !d.is_empty()) {
        lines.push(format!("*Released: {date}*"));
    }

    lines.join("\n")
}

fn push_section(lines: &mut Vec<String>, category: ChangeCategory, items: &[String]) {
    if items.is_empty() {
        return;
    }

    trace!(section = category.key(), items = items.len(), "rendering section");
    lines.push(category.heading().to_string());
    lines.extend(items.iter().map(|item| format!("- {item}")));
    lines.push(String::new());
}
