//! Changelog generation

use logbook_core::config::{ProjectConfig, TitleMap};
use tracing::{info, instrument};

use crate::classifier::classify;
use crate::formatter::render;
use crate::types::ChangelogDocument;

/// Turns raw log lines into a changelog section for one version
#[derive(Debug, Clone)]
pub struct ChangelogGenerator {
    version: String,
    titles: Option<TitleMap>,
}

impl ChangelogGenerator {
    /// Create a generator using default section titles
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            titles: None,
        }
    }

    /// Create a generator from loaded project settings
    pub fn from_config(config: &ProjectConfig) -> Self {
        Self {
            version: config.version.clone(),
            titles: config.titles.clone(),
        }
    }

    /// Use section title overrides
    pub fn with_titles(mut self, titles: TitleMap) -> Self {
        self.titles = Some(titles);
        self
    }

    /// Classify and render in one step
    #[instrument(skip(self, lines), fields(version = %self.version))]
    pub fn generate<'a, I>(&self, lines: I) -> ChangelogDocument
    where
        I: IntoIterator<Item = &'a str>,
    {
        let buckets = classify(lines);
        info!(
            version = %self.version,
            sections = buckets.len(),
            commits = buckets.line_count(),
            "generating changelog entry"
        );
        render(&self.version, &buckets, self.titles.as_ref())
    }
}
