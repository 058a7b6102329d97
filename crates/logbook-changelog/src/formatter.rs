//! Markdown rendering

use logbook_core::config::TitleMap;
use tracing::{debug, instrument};

use crate::types::{ChangelogDocument, CommitBuckets};

/// Display title for a commit type.
///
/// An override wins verbatim; otherwise a leading ASCII lowercase letter is
/// uppercased and the rest is kept as is (`feat` becomes `Feat`).
pub fn section_title(commit_type: &str, titles: Option<&TitleMap>) -> String {
    if let Some(title) = titles.and_then(|t| t.get(commit_type)) {
        return title.to_string();
    }

    let mut chars = commit_type.chars();
    match chars.next() {
        Some(first) if first.is_ascii_lowercase() => {
            let mut title = String::with_capacity(commit_type.len());
            title.push(first.to_ascii_uppercase());
            title.push_str(chars.as_str());
            title
        }
        _ => commit_type.to_string(),
    }
}

/// Render buckets as a changelog section:
///
/// ```text
/// ## v1.2.0
///
/// ### Feat
/// - feat: add X [a1b2c3d](https://host/repo/commit/a1b2c3d...)
/// ```
///
/// Buckets keep their insertion order; lines are passed through unescaped.
#[instrument(skip(buckets, titles), fields(bucket_count = buckets.len()))]
pub fn render(version: &str, buckets: &CommitBuckets, titles: Option<&TitleMap>) -> ChangelogDocument {
    let mut lines = vec![format!("## v{}", version)];

    for bucket in buckets {
        lines.push(format!("\n### {}", section_title(&bucket.commit_type, titles)));
        lines.extend(bucket.lines.iter().cloned());
    }

    let content = lines.join("\n");
    debug!(output_len = content.len(), "markdown changelog formatted");
    ChangelogDocument::new(version, content)
}
