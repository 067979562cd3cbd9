//! On-disk formats produced by GUNC and their validators.
//!
//! Every format is a thin wrapper around a path. Construction never touches
//! the filesystem; [`Format::validate`] does, and stops at the first
//! violation it finds.

mod database;
mod diamond;
mod directory;
mod fasta;
mod gene_counts;
mod html;
mod results;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{GuncError, Result};

pub use database::GuncDatabaseDirFmt;
pub use diamond::DiamondOutputFormat;
pub use directory::{GuncResultsDirectoryFormat, Layout};
pub(crate) use directory::find_max_css;
pub use fasta::GeneCallsFastaFormat;
pub use gene_counts::GuncGeneCountsFormat;
pub use html::GuncHtmlPlotFormat;
pub use results::GuncResultsFormat;

/// Rows checked by [`ValidationLevel::Min`].
pub const MIN_LEVEL_ROWS: usize = 10;

/// How thoroughly file contents are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ValidationLevel {
    /// Structure plus the first [`MIN_LEVEL_ROWS`] records of each file.
    Min,
    /// Structure plus every record.
    #[default]
    Max,
}

impl ValidationLevel {
    /// Maximum number of records to check, if bounded.
    pub fn row_limit(&self) -> Option<usize> {
        match self {
            ValidationLevel::Min => Some(MIN_LEVEL_ROWS),
            ValidationLevel::Max => None,
        }
    }
}

/// A typed view over a file or directory in read mode.
pub trait Format: Sized {
    /// Name the format is registered under.
    const NAME: &'static str;

    /// Wrap a path without touching the filesystem.
    fn from_path(path: impl Into<PathBuf>) -> Self;

    /// The wrapped path.
    fn path(&self) -> &Path;

    /// Check the wrapped path at the given level.
    fn validate_level(&self, level: ValidationLevel) -> Result<()>;

    /// Check the wrapped path at [`ValidationLevel::Max`].
    fn validate(&self) -> Result<()> {
        self.validate_level(ValidationLevel::Max)
    }
}

/// Fail unless `path` is an existing regular file.
pub(crate) fn ensure_file(path: &Path) -> Result<()> {
    if path.is_file() {
        Ok(())
    } else {
        Err(GuncError::MissingEntry {
            dir: path.parent().map(Path::to_path_buf).unwrap_or_default(),
            what: format!("file '{}'", file_name(path)),
        })
    }
}

/// Fail unless `path` is an existing directory.
pub(crate) fn ensure_dir(path: &Path) -> Result<()> {
    if path.is_dir() {
        Ok(())
    } else {
        Err(GuncError::MissingEntry {
            dir: path.parent().map(Path::to_path_buf).unwrap_or_default(),
            what: format!("directory '{}'", file_name(path)),
        })
    }
}

/// A non-hidden directory entry.
#[derive(Debug, Clone)]
pub(crate) struct Entry {
    pub name: String,
    pub path: PathBuf,
    pub is_dir: bool,
}

/// List the non-hidden entries of a directory, sorted by name.
pub(crate) fn list_dir(dir: &Path) -> Result<Vec<Entry>> {
    let read = fs::read_dir(dir).map_err(|e| GuncError::io(dir, e))?;
    let mut entries = Vec::new();
    for entry in read {
        let entry = entry.map_err(|e| GuncError::io(dir, e))?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.starts_with('.') {
            continue;
        }
        let path = entry.path();
        let is_dir = path.is_dir();
        entries.push(Entry { name, path, is_dir });
    }
    entries.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(entries)
}

pub(crate) fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
