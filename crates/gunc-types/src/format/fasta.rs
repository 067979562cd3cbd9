//! Validator for predicted protein sequences (`gene_calls/*.genecalls.faa`).

use std::path::{Path, PathBuf};

use noodles::fasta::reader;

use crate::error::{GuncError, Result};

use super::{ensure_file, Format, ValidationLevel};

/// Protein FASTA written by GUNC's gene-calling step.
#[derive(Debug, Clone)]
pub struct GeneCallsFastaFormat {
    path: PathBuf,
}

impl GeneCallsFastaFormat {
    fn invalid(&self, message: String) -> GuncError {
        GuncError::InvalidContent {
            path: self.path.clone(),
            format: Self::NAME,
            message,
        }
    }
}

impl Format for GeneCallsFastaFormat {
    const NAME: &'static str = "ProteinFASTAFormat";

    fn from_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn path(&self) -> &Path {
        &self.path
    }

    fn validate_level(&self, level: ValidationLevel) -> Result<()> {
        ensure_file(&self.path)?;
        let mut reader = reader::Builder
            .build_from_path(&self.path)
            .map_err(|e| GuncError::io(&self.path, e))?;

        for (i, result) in reader.records().enumerate() {
            if level.row_limit().is_some_and(|max| i >= max) {
                break;
            }
            let record = result.map_err(|e| self.invalid(format!("record {}: {}", i + 1, e)))?;
            if record.definition().name().is_empty() {
                return Err(self.invalid(format!("record {} has an empty name", i + 1)));
            }
        }
        Ok(())
    }
}
