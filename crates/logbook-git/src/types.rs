//! History types

/// Raw output of a log query
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommitLog {
    output: String,
}

impl CommitLog {
    /// Wrap the standard output of a log command
    pub fn new(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
        }
    }

    /// Check if the query produced no output at all
    pub fn is_empty(&self) -> bool {
        self.output.is_empty()
    }

    /// Output split into lines, in log order
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.output.split('\n')
    }
}
