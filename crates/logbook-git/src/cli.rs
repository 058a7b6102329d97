//! History queries through the git CLI

use std::path::Path;
use std::process::Command;

use logbook_core::error::HistoryError;
use tracing::{debug, info, instrument};

use crate::query::LogQuery;
use crate::types::CommitLog;
use crate::{HistorySource, Result};

/// Runs `git log` as a subprocess
#[derive(Debug, Clone)]
pub struct GitCli {
    program: String,
}

impl GitCli {
    /// Use `git` from `PATH`
    pub fn new() -> Self {
        Self {
            program: "git".to_string(),
        }
    }

    /// Use a specific git executable
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for GitCli {
    fn default() -> Self {
        Self::new()
    }
}

impl HistorySource for GitCli {
    #[instrument(skip(self), fields(program = %self.program))]
    fn fetch_log(&self, working_dir: &Path, repository_url: &str) -> Result<CommitLog> {
        let start = std::time::Instant::now();
        let query = LogQuery::new(repository_url);
        let command = query.display(&self.program);
        debug!(%command, dir = %working_dir.display(), "running log query");

        let output = Command::new(&self.program)
            .args(query.args())
            .current_dir(working_dir)
            .output()
            .map_err(|e| HistoryError::SpawnFailed {
                command: command.clone(),
                reason: e.to_string(),
            })?;

        let stderr = String::from_utf8_lossy(&output.stderr);

        if !output.status.success() {
            return Err(HistoryError::CommandFailed {
                command,
                status: output.status.to_string(),
                stderr: stderr.trim().to_string(),
            });
        }

        if !output.stderr.is_empty() {
            return Err(HistoryError::ErrorOutput(stderr.trim().to_string()));
        }

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        info!(
            bytes = stdout.len(),
            duration_ms = start.elapsed().as_millis(),
            "log query finished"
        );
        Ok(CommitLog::new(stdout))
    }
}
