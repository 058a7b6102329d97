//! Logbook Git - Commit history queries for changelog generation
//!
//! This crate runs the version-control log query whose output the
//! changelog crate classifies.

mod cli;
mod query;
pub mod types;

use std::path::Path;

pub use cli::GitCli;
pub use query::LogQuery;
pub use types::CommitLog;

/// Result type for history operations
pub type Result<T> = std::result::Result<T, logbook_core::error::HistoryError>;

/// A version-control system that can list commits as changelog lines.
///
/// Each returned line has the form
/// `<subject> [<short hash>](<repository url>/commit/<full hash>)`,
/// newest first, merge commits excluded.
pub trait HistorySource {
    /// Query the log of the working tree at `working_dir`
    fn fetch_log(&self, working_dir: &Path, repository_url: &str) -> Result<CommitLog>;
}
