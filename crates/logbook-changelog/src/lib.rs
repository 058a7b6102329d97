//! Logbook Changelog - Changelog generation from classified commit lines
//!
//! This crate buckets log lines by conventional-commit type, renders the
//! buckets as a Markdown section, and prepends that section to the changelog.

pub mod classifier;
pub mod formatter;
pub mod generator;
pub mod types;
pub mod writer;

pub use classifier::classify;
pub use formatter::{render, section_title};
pub use generator::ChangelogGenerator;
pub use types::{Bucket, ChangelogDocument, CommitBuckets};
pub use writer::{ChangelogWriter, ExistingChangelog, WriteReport};
