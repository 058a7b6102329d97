//! Configuration validation

use tracing::debug;
use url::Url;

use crate::error::{ConfigError, Result};

use super::defaults::{VCS_SCHEME_PREFIX, VCS_SUFFIX};

/// Strip VCS decoration from an npm `repository.url`.
///
/// `git+https://github.com/user/repo.git` becomes
/// `https://github.com/user/repo`.
pub fn normalize_repository_url(raw: &str) -> String {
    let trimmed = raw.trim();
    let without_prefix = trimmed.strip_prefix(VCS_SCHEME_PREFIX).unwrap_or(trimmed);
    without_prefix
        .strip_suffix(VCS_SUFFIX)
        .unwrap_or(without_prefix)
        .to_string()
}

/// Require an http(s) URL that commit links can be built on
pub fn validate_repository_url(candidate: &str) -> Result<()> {
    let valid = Url::parse(candidate)
        .map(|url| matches!(url.scheme(), "http" | "https"))
        .unwrap_or(false);

    if !valid {
        return Err(ConfigError::InvalidRepositoryUrl(candidate.to_string()).into());
    }

    debug!(url = candidate, "repository url validated");
    Ok(())
}

/// Require a non-empty version string
pub fn validate_version(version: Option<&str>) -> Result<&str> {
    match version.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(ConfigError::MissingVersion.into()),
    }
}
