//! Error types for logbook

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using LogbookError
pub type Result<T> = std::result::Result<T, LogbookError>;

/// Main error type for logbook operations
#[derive(Debug, Error)]
pub enum LogbookError {
    /// Manifest-related errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Commit history errors
    #[error(transparent)]
    History(#[from] HistoryError),

    /// Changelog file errors
    #[error(transparent)]
    Changelog(#[from] ChangelogError),
}

/// Manifest-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Manifest file not found
    #[error("Project manifest not found at {0}")]
    NotFound(PathBuf),

    /// Failed to parse the manifest
    #[error("Failed to parse project manifest: {0}")]
    ParseError(String),

    /// Manifest has no usable version field
    #[error("No version found, add a \"version\" field to package.json")]
    MissingVersion,

    /// Neither changelog.url nor repository.url is set
    #[error("No repository URL found, add a \"changelog.url\" or \"repository\" field to package.json")]
    MissingRepositoryUrl,

    /// Repository URL is set but is not an http(s) URL
    #[error("Invalid repository URL '{0}': must start with http:// or https://")]
    InvalidRepositoryUrl(String),

    /// IO error
    #[error("IO error reading manifest: {0}")]
    Io(#[from] std::io::Error),
}

/// Commit history errors
#[derive(Debug, Error)]
pub enum HistoryError {
    /// The version-control command could not be started
    #[error("Failed to run {command}: {reason}")]
    SpawnFailed { command: String, reason: String },

    /// The version-control command exited unsuccessfully
    #[error("{command} exited with {status}: {stderr}")]
    CommandFailed {
        command: String,
        status: String,
        stderr: String,
    },

    /// The version-control command wrote to its error stream
    #[error("{0}")]
    ErrorOutput(String),
}

/// Changelog file errors
#[derive(Debug, Error)]
pub enum ChangelogError {
    /// Failed to read the existing changelog
    #[error("Failed to read changelog at {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write the changelog
    #[error("Failed to write changelog at {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_is_transparent() {
        let err: LogbookError = ConfigError::MissingVersion.into();
        assert_eq!(err.to_string(), ConfigError::MissingVersion.to_string());
    }

    #[test]
    fn test_history_error_message_carries_stderr() {
        let err = HistoryError::CommandFailed {
            command: "git log".to_string(),
            status: "exit status: 128".to_string(),
            stderr: "fatal: not a git repository".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("git log"));
        assert!(message.contains("fatal: not a git repository"));
    }
}
