//! Manifest loading

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{ConfigError, Result};

use super::defaults::MANIFEST_FILE;
use super::types::{Manifest, ProjectConfig};
use super::validation::{normalize_repository_url, validate_repository_url, validate_version};

/// Path of the project manifest inside a working directory
pub fn manifest_path(working_dir: &Path) -> PathBuf {
    working_dir.join(MANIFEST_FILE)
}

/// Read and parse the manifest without validating it
pub fn load_manifest(path: &Path) -> Result<Manifest> {
    info!(path = %path.display(), "loading manifest");

    let content = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ConfigError::NotFound(path.to_path_buf())
        } else {
            ConfigError::Io(e)
        }
    })?;

    let manifest = serde_json::from_str(&content)
        .map_err(|e| ConfigError::ParseError(e.to_string()))?;
    Ok(manifest)
}

/// Load the project settings for a run from `<working_dir>/package.json`.
///
/// `changelog.url` wins over `repository`; only the `repository` fallback is
/// stripped of `git+` and `.git` decoration.
pub fn load_project_config(working_dir: &Path) -> Result<ProjectConfig> {
    let path = manifest_path(working_dir);
    let manifest = load_manifest(&path)?;
    resolve_project_config(manifest)
}

/// Validate a parsed manifest into project settings
pub fn resolve_project_config(manifest: Manifest) -> Result<ProjectConfig> {
    let version = validate_version(manifest.version.as_deref())?.to_string();

    let (explicit_url, titles) = match manifest.changelog {
        Some(settings) => (settings.url.filter(|u| !u.trim().is_empty()), settings.text),
        None => (None, None),
    };

    let repository_url = match explicit_url {
        Some(url) => url.trim().to_string(),
        None => manifest
            .repository
            .as_ref()
            .and_then(|r| r.url())
            .map(normalize_repository_url)
            .filter(|u| !u.is_empty())
            .ok_or(ConfigError::MissingRepositoryUrl)?,
    };

    validate_repository_url(&repository_url)?;

    debug!(
        version = %version,
        repository_url = %repository_url,
        title_overrides = titles.as_ref().map_or(0, |t| t.len()),
        "project config resolved"
    );

    Ok(ProjectConfig {
        version,
        repository_url,
        titles,
    })
}
