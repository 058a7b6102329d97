//! Configuration types

use std::collections::HashMap;

use serde::Deserialize;

/// The subset of `package.json` that logbook reads.
///
/// Unknown fields are ignored so any npm manifest deserializes.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Manifest {
    /// Current project version
    #[serde(default)]
    pub version: Option<String>,

    /// Changelog-specific settings
    #[serde(default)]
    pub changelog: Option<ChangelogSettings>,

    /// npm repository field, used when `changelog.url` is absent
    #[serde(default)]
    pub repository: Option<Repository>,
}

/// The `changelog` object of the manifest
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChangelogSettings {
    /// Repository URL used to build commit links
    #[serde(default)]
    pub url: Option<String>,

    /// Section title overrides keyed by commit type
    #[serde(default)]
    pub text: Option<TitleMap>,
}

/// The npm `repository` field, either shorthand or object form
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Repository {
    /// `"repository": "https://github.com/user/repo"`
    Shorthand(String),
    /// `"repository": { "type": "git", "url": "..." }`
    Detailed {
        #[serde(default)]
        url: Option<String>,
    },
}

impl Repository {
    /// The raw URL, whichever form the field used
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::Shorthand(url) => Some(url.as_str()),
            Self::Detailed { url } => url.as_deref(),
        }
    }
}

/// Section title overrides, e.g. `{ "feat": "Features" }`.
///
/// `null` entries are kept but read as unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct TitleMap(HashMap<String, Option<String>>);

impl TitleMap {
    /// Create an empty title map
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an override
    pub fn with_title(mut self, commit_type: impl Into<String>, title: impl Into<String>) -> Self {
        self.0.insert(commit_type.into(), Some(title.into()));
        self
    }

    /// Look up the display title for a commit type.
    ///
    /// Empty and `null` titles count as unset.
    pub fn get(&self, commit_type: &str) -> Option<&str> {
        self.0
            .get(commit_type)
            .and_then(|title| title.as_deref())
            .filter(|title| !title.is_empty())
    }

    /// Number of overrides
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

/// Validated project settings for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectConfig {
    /// Version the new changelog section is written for
    pub version: String,

    /// http(s) repository URL, without VCS decoration
    pub repository_url: String,

    /// Optional section title overrides
    pub titles: Option<TitleMap>,
}
