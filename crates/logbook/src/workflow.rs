//! Changelog workflow
//!
//! load manifest -> fetch log -> classify + render -> prepend to CHANGELOG.md
//!
//! Each step either succeeds or ends the run with a status line. Nothing is
//! retried and no error escapes [`run`].

use std::io::Write;
use std::path::Path;

use logbook_changelog::{ChangelogGenerator, ChangelogWriter, WriteReport};
use logbook_core::config::{load_project_config, CHANGELOG_FILE};
use logbook_git::HistorySource;
use tracing::{debug, info, instrument};

use crate::cli::output::{self, Status};
use crate::exit_codes;

/// Step at which a run stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Config,
    History,
    Write,
}

/// How a run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// A section was prepended to the changelog
    Written(WriteReport),
    /// The log query printed nothing, so the changelog was left alone
    NoHistory,
    /// The run stopped at `stage`
    Aborted { stage: Stage, message: String },
}

impl RunOutcome {
    /// Process exit code for this outcome
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Written(_) | Self::NoHistory => exit_codes::SUCCESS,
            Self::Aborted { .. } => exit_codes::ERROR,
        }
    }

    fn aborted<W: Write + ?Sized>(out: &mut W, stage: Stage, message: String) -> Self {
        info!(?stage, %message, "changelog run aborted");
        output::report(out, Status::Error, &message);
        Self::Aborted { stage, message }
    }
}

/// Generate and prepend a changelog section for the project in `working_dir`
pub fn run<H: HistorySource + ?Sized>(working_dir: &Path, history: &H) -> RunOutcome {
    run_with_output(working_dir, history, &mut std::io::stdout().lock())
}

/// Same as [`run`], with status lines written to `out`
#[instrument(skip(history, out), fields(dir = %working_dir.display()))]
pub fn run_with_output<H, W>(working_dir: &Path, history: &H, out: &mut W) -> RunOutcome
where
    H: HistorySource + ?Sized,
    W: Write + ?Sized,
{
    output::report(out, Status::Starting, "generating changelog");

    let config = match load_project_config(working_dir) {
        Ok(config) => config,
        Err(e) => return RunOutcome::aborted(out, Stage::Config, e.to_string()),
    };
    debug!(version = %config.version, url = %config.repository_url, "project config loaded");

    let log = match history.fetch_log(working_dir, &config.repository_url) {
        Ok(log) => log,
        Err(e) => return RunOutcome::aborted(out, Stage::History, e.to_string()),
    };

    if log.is_empty() {
        info!("log query returned no commits");
        output::report(
            out,
            Status::Success,
            &format!("no commits found, {} left unchanged", CHANGELOG_FILE),
        );
        return RunOutcome::NoHistory;
    }

    output::report(out, Status::Building, "commit history fetched, building changelog");

    let document = ChangelogGenerator::from_config(&config).generate(log.lines());
    let writer = ChangelogWriter::new(working_dir);

    match writer.prepend(&document) {
        Ok(report) => {
            if report.duplicate_version {
                output::report(
                    out,
                    Status::Warning,
                    &format!("{} already has an entry for v{}", CHANGELOG_FILE, config.version),
                );
            }
            output::report(
                out,
                Status::Success,
                &format!("changelog for v{} written to {}", config.version, report.path.display()),
            );
            RunOutcome::Written(report)
        }
        Err(e) => {
            let outcome = RunOutcome::aborted(out, Stage::Write, e.to_string());
            output::report(out, Status::Failed, "changelog not written");
            outcome
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use logbook_core::error::HistoryError;
    use logbook_git::CommitLog;
    use std::cell::Cell;
    use tempfile::TempDir;

    const URL: &str = "https://github.com/user/repo";

    /// Replays a fixed log query result
    struct ScriptedHistory {
        output: Result<String, String>,
        calls: Cell<usize>,
    }

    impl ScriptedHistory {
        fn lines(lines: &[&str]) -> Self {
            Self {
                output: Ok(lines.join("\n")),
                calls: Cell::new(0),
            }
        }

        fn failing(stderr: &str) -> Self {
            Self {
                output: Err(stderr.to_string()),
                calls: Cell::new(0),
            }
        }
    }

    impl HistorySource for ScriptedHistory {
        fn fetch_log(&self, _working_dir: &Path, repository_url: &str) -> logbook_git::Result<CommitLog> {
            assert_eq!(repository_url, URL);
            self.calls.set(self.calls.get() + 1);
            match &self.output {
                Ok(stdout) => Ok(CommitLog::new(stdout.clone())),
                Err(stderr) => Err(HistoryError::ErrorOutput(stderr.clone())),
            }
        }
    }

    fn project(manifest: &str) -> TempDir {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("package.json"), manifest).unwrap();
        temp
    }

    fn default_project() -> TempDir {
        project(
            r#"{
                "version": "1.2.0",
                "repository": { "url": "git+https://github.com/user/repo.git" },
                "changelog": { "text": { "feat": "Features" } }
            }"#,
        )
    }

    fn changelog(temp: &TempDir) -> Option<String> {
        std::fs::read_to_string(temp.path().join(CHANGELOG_FILE)).ok()
    }

    #[test]
    fn test_run_writes_changelog() {
        let temp = default_project();
        let history = ScriptedHistory::lines(&[
            "feat: add X [a1](https://github.com/user/repo/commit/a1)",
            "chore: y [c3](https://github.com/user/repo/commit/c3)",
            "fix: b [b2](https://github.com/user/repo/commit/b2)",
        ]);

        let outcome = run(temp.path(), &history);

        assert!(matches!(&outcome, RunOutcome::Written(report) if !report.duplicate_version));
        assert_eq!(outcome.exit_code(), exit_codes::SUCCESS);
        assert_eq!(
            changelog(&temp).unwrap(),
            "## v1.2.0\n\n### Features\n- feat: add X [a1](https://github.com/user/repo/commit/a1)\n\n### Fix\n- fix: b [b2](https://github.com/user/repo/commit/b2)\n\n"
        );
    }

    #[test]
    fn test_run_prepends_to_existing_changelog() {
        let temp = default_project();
        std::fs::write(temp.path().join(CHANGELOG_FILE), "## v1.1.0\n\n### Fix\n- fix: old\n").unwrap();

        run(temp.path(), &ScriptedHistory::lines(&["feat: new"]));

        let content = changelog(&temp).unwrap();
        assert_eq!(
            content,
            "## v1.2.0\n\n### Features\n- feat: new\n\n## v1.1.0\n\n### Fix\n- fix: old\n"
        );
    }

    #[test]
    fn test_run_twice_duplicates_version() {
        let temp = default_project();
        let history = ScriptedHistory::lines(&["feat: new"]);

        let first = run(temp.path(), &history);
        let second = run(temp.path(), &history);

        assert!(matches!(first, RunOutcome::Written(ref r) if !r.duplicate_version));
        assert!(matches!(second, RunOutcome::Written(ref r) if r.duplicate_version));
        assert_eq!(changelog(&temp).unwrap().matches("## v1.2.0").count(), 2);
    }

    fn status_lines(out: Vec<u8>) -> Vec<String> {
        let text = String::from_utf8(out).unwrap();
        console::strip_ansi_codes(&text)
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_duplicate_version_warns_once() {
        let temp = default_project();
        let history = ScriptedHistory::lines(&["feat: new"]);

        let mut first = Vec::new();
        run_with_output(temp.path(), &history, &mut first);
        let mut second = Vec::new();
        run_with_output(temp.path(), &history, &mut second);

        let warning = "[CHANGELOG] Warning CHANGELOG.md already has an entry for v1.2.0";
        assert!(!status_lines(first).iter().any(|l| l.contains("Warning")));
        let second = status_lines(second);
        assert_eq!(second.iter().filter(|l| l.contains("Warning")).count(), 1);
        assert!(second.iter().any(|l| l == warning));
    }

    #[test]
    fn test_abort_prints_single_error_line() {
        let temp = default_project();
        let mut out = Vec::new();

        run_with_output(
            temp.path(),
            &ScriptedHistory::failing("fatal: not a git repository"),
            &mut out,
        );

        let lines = status_lines(out);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "[CHANGELOG] Starting generating changelog");
        assert_eq!(lines[1], "[CHANGELOG] Error fatal: not a git repository");
    }

    #[test]
    fn test_missing_version_aborts_before_history() {
        let temp = project(r#"{ "changelog": { "url": "https://github.com/user/repo" } }"#);
        let history = ScriptedHistory::lines(&["feat: new"]);

        let outcome = run(temp.path(), &history);

        assert!(matches!(outcome, RunOutcome::Aborted { stage: Stage::Config, .. }));
        assert_eq!(outcome.exit_code(), exit_codes::ERROR);
        assert_eq!(history.calls.get(), 0);
        assert!(changelog(&temp).is_none());
    }

    #[test]
    fn test_invalid_repository_aborts() {
        let temp = project(r#"{ "version": "1.0.0", "repository": "github:user/repo" }"#);
        let history = ScriptedHistory::lines(&["feat: new"]);

        let outcome = run(temp.path(), &history);

        assert!(matches!(outcome, RunOutcome::Aborted { stage: Stage::Config, .. }));
        assert!(changelog(&temp).is_none());
    }

    #[test]
    fn test_history_failure_writes_nothing() {
        let temp = default_project();
        let history = ScriptedHistory::failing("fatal: not a git repository");

        let outcome = run(temp.path(), &history);

        match outcome {
            RunOutcome::Aborted { stage, message } => {
                assert_eq!(stage, Stage::History);
                assert!(message.contains("not a git repository"));
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
        assert!(changelog(&temp).is_none());
    }

    #[test]
    fn test_empty_history_skips_write() {
        let temp = default_project();
        let history = ScriptedHistory::lines(&[]);

        let outcome = run(temp.path(), &history);

        assert_eq!(outcome, RunOutcome::NoHistory);
        assert_eq!(outcome.exit_code(), exit_codes::SUCCESS);
        assert_eq!(history.calls.get(), 1);
        assert!(changelog(&temp).is_none());
    }

    #[test]
    fn test_history_without_feat_or_fix_writes_heading_only() {
        let temp = default_project();

        let outcome = run(temp.path(), &ScriptedHistory::lines(&["docs: readme"]));

        assert!(matches!(outcome, RunOutcome::Written(_)));
        assert_eq!(changelog(&temp).unwrap(), "## v1.2.0\n\n");
    }

    #[test]
    fn test_write_failure_is_reported() {
        let temp = default_project();
        std::fs::create_dir(temp.path().join(CHANGELOG_FILE)).unwrap();

        let outcome = run(temp.path(), &ScriptedHistory::lines(&["feat: new"]));

        assert!(matches!(outcome, RunOutcome::Aborted { stage: Stage::Write, .. }));
    }
}
