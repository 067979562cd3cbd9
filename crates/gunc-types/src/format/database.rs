//! Validator for the GUNC reference database directory.

use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::error::{GuncError, Result};

use super::{ensure_dir, list_dir, Format, ValidationLevel};

static DMND_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^.+\.dmnd$").unwrap());

/// Directory holding a single DIAMOND database (`gunc download_db` output).
#[derive(Debug, Clone)]
pub struct GuncDatabaseDirFmt {
    path: PathBuf,
}

impl GuncDatabaseDirFmt {
    /// Path of the `.dmnd` file, as passed to `gunc run --db_file`.
    pub fn database_path(&self) -> Result<PathBuf> {
        ensure_dir(&self.path)?;
        let mut matches: Vec<PathBuf> = Vec::new();
        for entry in list_dir(&self.path)? {
            if !entry.is_dir && DMND_PATTERN.is_match(&entry.name) {
                matches.push(entry.path);
            } else {
                debug!(entry = %entry.name, "ignoring non-database entry");
            }
        }

        match matches.len() {
            0 => Err(GuncError::MissingEntry {
                dir: self.path.clone(),
                what: "DIAMOND database (*.dmnd)".to_string(),
            }),
            1 => Ok(matches.remove(0)),
            count => Err(GuncError::AmbiguousEntry {
                dir: self.path.clone(),
                what: "DIAMOND database (*.dmnd)".to_string(),
                count,
            }),
        }
    }
}

impl Format for GuncDatabaseDirFmt {
    const NAME: &'static str = "GUNCDatabaseDirFmt";

    fn from_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn path(&self) -> &Path {
        &self.path
    }

    fn validate_level(&self, _level: ValidationLevel) -> Result<()> {
        self.database_path().map(|_| ())
    }
}
