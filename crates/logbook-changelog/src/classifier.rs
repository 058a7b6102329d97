//! Commit line classification
//!
//! Only `feat` and `fix` commits make it into the changelog. A line
//! qualifies when it starts with the type, an optional whitespace character,
//! and a colon: `feat: x`, `fix : y`. Anything else is dropped.

use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

use crate::types::CommitBuckets;

/// Anchored prefix test for changelog-worthy commit types
static FEATURE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?P<type>feat|fix)\s?:").expect("Invalid regex"));

/// Commit type of a log line, if it is changelog-worthy
pub fn commit_type(line: &str) -> Option<&str> {
    FEATURE_REGEX
        .captures(line)
        .and_then(|caps| caps.name("type"))
        .map(|m| m.as_str())
}

/// Bucket log lines by commit type in a single pass
pub fn classify<'a, I>(lines: I) -> CommitBuckets
where
    I: IntoIterator<Item = &'a str>,
{
    let mut buckets = CommitBuckets::new();
    let mut dropped = 0usize;

    for line in lines {
        match commit_type(line) {
            Some(commit_type) => buckets.push(commit_type, format!("- {}", line)),
            None => dropped += 1,
        }
    }

    debug!(
        buckets = buckets.len(),
        kept = buckets.line_count(),
        dropped,
        "commit lines classified"
    );
    buckets
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_drops_other_types() {
        let buckets = classify([
            "feat: add X [a1](url/commit/a1)",
            "chore: y",
            "fix: b [b2](url/commit/b2)",
        ]);

        let keys: Vec<&str> = buckets.keys().collect();
        assert_eq!(keys, vec!["feat", "fix"]);
        assert_eq!(
            buckets.get("feat").unwrap(),
            &["- feat: add X [a1](url/commit/a1)".to_string()]
        );
        assert_eq!(
            buckets.get("fix").unwrap(),
            &["- fix: b [b2](url/commit/b2)".to_string()]
        );
        assert!(buckets.get("chore").is_none());
    }

    #[test]
    fn test_optional_whitespace_before_colon() {
        assert_eq!(commit_type("feat : spaced"), Some("feat"));
        assert_eq!(commit_type("fix\t: tabbed"), Some("fix"));
        assert_eq!(commit_type("feat  : two spaces"), None);
    }

    #[test]
    fn test_prefix_must_be_anchored() {
        assert_eq!(commit_type(" feat: indented"), None);
        assert_eq!(commit_type("Revert \"feat: x\""), None);
        assert_eq!(commit_type("feature: long form"), None);
        assert_eq!(commit_type("Feat: capitalized"), None);
    }

    #[test]
    fn test_scoped_commits_are_not_matched() {
        assert_eq!(commit_type("feat(parser): scoped"), None);
    }

    #[test]
    fn test_first_seen_order() {
        let buckets = classify(["fix: first", "feat: second", "fix: third"]);

        let keys: Vec<&str> = buckets.keys().collect();
        assert_eq!(keys, vec!["fix", "feat"]);
        assert_eq!(buckets.get("fix").unwrap().len(), 2);
    }

    #[test]
    fn test_empty_input() {
        let buckets = classify([""]);
        assert!(buckets.is_empty());
    }
}
