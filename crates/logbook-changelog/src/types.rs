//! Changelog types

use std::fmt;

/// Formatted commit lines sharing one commit type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bucket {
    /// Commit type (feat, fix)
    pub commit_type: String,
    /// `- <log line>` entries in log order
    pub lines: Vec<String>,
}

impl Bucket {
    /// Create an empty bucket
    pub fn new(commit_type: impl Into<String>) -> Self {
        Self {
            commit_type: commit_type.into(),
            lines: Vec::new(),
        }
    }

    /// Check if bucket is empty
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Buckets keyed by commit type, in the order each type was first seen
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommitBuckets {
    buckets: Vec<Bucket>,
}

impl CommitBuckets {
    /// Create an empty set of buckets
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a formatted line to the bucket for `commit_type`, creating the
    /// bucket at the end if this type has not been seen yet
    pub fn push(&mut self, commit_type: &str, line: String) {
        match self
            .buckets
            .iter_mut()
            .find(|b| b.commit_type == commit_type)
        {
            Some(bucket) => bucket.lines.push(line),
            None => {
                let mut bucket = Bucket::new(commit_type);
                bucket.lines.push(line);
                self.buckets.push(bucket);
            }
        }
    }

    /// Lines for one commit type
    pub fn get(&self, commit_type: &str) -> Option<&[String]> {
        self.buckets
            .iter()
            .find(|b| b.commit_type == commit_type)
            .map(|b| b.lines.as_slice())
    }

    /// Commit types in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.buckets.iter().map(|b| b.commit_type.as_str())
    }

    /// Buckets in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, Bucket> {
        self.buckets.iter()
    }

    /// Number of buckets
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    /// Check if no line was bucketed
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Total number of bucketed lines
    pub fn line_count(&self) -> usize {
        self.buckets.iter().map(|b| b.lines.len()).sum()
    }
}

impl<'a> IntoIterator for &'a CommitBuckets {
    type Item = &'a Bucket;
    type IntoIter = std::slice::Iter<'a, Bucket>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A rendered `## v<version>` changelog section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangelogDocument {
    version: String,
    content: String,
}

impl ChangelogDocument {
    pub(crate) fn new(version: impl Into<String>, content: String) -> Self {
        Self {
            version: version.into(),
            content,
        }
    }

    /// Version the section was rendered for
    pub fn version(&self) -> &str {
        &self.version
    }

    /// The Markdown text
    pub fn as_str(&self) -> &str {
        &self.content
    }
}

impl fmt::Display for ChangelogDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.content)
    }
}
