//! Changelog file writing

use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use logbook_core::config::CHANGELOG_FILE;
use logbook_core::error::ChangelogError;
use tracing::{debug, info, instrument};

use crate::types::ChangelogDocument;

/// Result type for changelog file operations
pub type Result<T> = std::result::Result<T, ChangelogError>;

/// State of the changelog file before a write
#[derive(Debug)]
pub enum ExistingChangelog {
    /// The file exists; the handle stays open for the rewrite
    Present { file: File, content: String },
    /// No changelog yet, which reads as empty content
    Absent,
}

impl ExistingChangelog {
    /// Existing text, empty when the file is absent
    pub fn content(&self) -> &str {
        match self {
            Self::Present { content, .. } => content,
            Self::Absent => "",
        }
    }
}

/// Outcome of a successful prepend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteReport {
    /// File that was written
    pub path: PathBuf,
    /// A `## v<version>` heading for this version was already present
    pub duplicate_version: bool,
    /// Size of the new file content
    pub bytes_written: usize,
}

/// Prepends rendered sections to a changelog file
#[derive(Debug, Clone)]
pub struct ChangelogWriter {
    path: PathBuf,
}

impl ChangelogWriter {
    /// Writer for `<working_dir>/CHANGELOG.md`
    pub fn new(working_dir: &Path) -> Self {
        Self {
            path: working_dir.join(CHANGELOG_FILE),
        }
    }

    /// Writer for an explicit file path
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Target file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Open the changelog for read+write, or report it absent
    pub fn open_existing(&self) -> Result<ExistingChangelog> {
        let mut file = match OpenOptions::new().read(true).write(true).open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no existing changelog found");
                return Ok(ExistingChangelog::Absent);
            }
            Err(source) => {
                return Err(ChangelogError::ReadFailed {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        let mut content = String::new();
        file.read_to_string(&mut content)
            .map_err(|source| ChangelogError::ReadFailed {
                path: self.path.clone(),
                source,
            })?;

        debug!(path = %self.path.display(), bytes = content.len(), "read existing changelog");
        Ok(ExistingChangelog::Present { file, content })
    }

    /// Write `<document>\n\n<existing content>`.
    ///
    /// A heading for the same version already in the file is reported in the
    /// returned [`WriteReport`] but does not stop the write.
    #[instrument(skip(self, document), fields(path = %self.path.display(), version = document.version()))]
    pub fn prepend(&self, document: &ChangelogDocument) -> Result<WriteReport> {
        let existing = self.open_existing()?;
        let duplicate_version = contains_version(existing.content(), document.version());

        if duplicate_version {
            info!(version = document.version(), "changelog already has an entry for this version");
        }

        let combined = format!("{}\n\n{}", document, existing.content());
        let write_failed = |source: std::io::Error| ChangelogError::WriteFailed {
            path: self.path.clone(),
            source,
        };

        match existing {
            ExistingChangelog::Present { mut file, .. } => {
                file.set_len(0).map_err(write_failed)?;
                file.seek(SeekFrom::Start(0)).map_err(write_failed)?;
                file.write_all(combined.as_bytes()).map_err(write_failed)?;
                file.flush().map_err(write_failed)?;
            }
            ExistingChangelog::Absent => {
                std::fs::write(&self.path, &combined).map_err(write_failed)?;
            }
        }

        info!(bytes = combined.len(), duplicate_version, "changelog written");
        Ok(WriteReport {
            path: self.path.clone(),
            duplicate_version,
            bytes_written: combined.len(),
        })
    }
}

/// Check if any line starts with the `## v<version>` heading
pub fn contains_version(content: &str, version: &str) -> bool {
    let heading = format!("## v{}", version);
    content.lines().any(|line| line.starts_with(&heading))
}
