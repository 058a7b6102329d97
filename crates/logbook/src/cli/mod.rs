//! CLI definition

pub mod output;

use clap::Parser;
use logbook_git::GitCli;
use tracing::info;

use crate::workflow::{self, RunOutcome};

/// Logbook - generate a changelog section from feat/fix commits and prepend
/// it to CHANGELOG.md
///
/// Reads `version`, `changelog.url` (or `repository`) and `changelog.text`
/// from package.json in the current directory.
#[derive(Debug, Parser)]
#[command(name = "logbook")]
#[command(author, version, about, long_about)]
pub struct Cli {}

impl Cli {
    /// Run the changelog workflow in the current directory
    pub fn execute(self) -> anyhow::Result<RunOutcome> {
        let cwd = std::env::current_dir()?;
        info!(cwd = %cwd.display(), "executing changelog workflow");
        Ok(workflow::run(&cwd, &GitCli::new()))
    }
}
