//! Log query construction

/// Arguments for a `git log` that prints one changelog line per commit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogQuery {
    commit_base: String,
}

impl LogQuery {
    /// Build a query whose commit links point into `repository_url`.
    ///
    /// A trailing slash on the URL is dropped before `/commit` is appended.
    pub fn new(repository_url: &str) -> Self {
        let base = repository_url.strip_suffix('/').unwrap_or(repository_url);
        Self {
            commit_base: format!("{}/commit", base),
        }
    }

    /// Per-commit format: subject, then a Markdown link to the commit
    pub fn pretty_format(&self) -> String {
        format!("%s [%h]({}/%H)", self.commit_base)
    }

    /// Full argument list, excluding the program name
    pub fn args(&self) -> Vec<String> {
        vec![
            "log".to_string(),
            "--no-merges".to_string(),
            format!("--pretty=format:{}", self.pretty_format()),
            "--abbrev-commit".to_string(),
            "--date=relative".to_string(),
        ]
    }

    /// Command line for diagnostics
    pub fn display(&self, program: &str) -> String {
        format!("{} {}", program, self.args().join(" "))
    }
}
