//! Default configuration values

/// Project manifest read from the working directory root
pub const MANIFEST_FILE: &str = "package.json";

/// Changelog file written at the working directory root
pub const CHANGELOG_FILE: &str = "CHANGELOG.md";

/// Label printed in front of every status line
pub const MODULE_LABEL: &str = "[CHANGELOG]";

/// Prefix stripped from `repository.url` values such as `git+https://...`
pub const VCS_SCHEME_PREFIX: &str = "git+";

/// Suffix stripped from `repository.url` values such as `https://.../repo.git`
pub const VCS_SUFFIX: &str = ".git";
