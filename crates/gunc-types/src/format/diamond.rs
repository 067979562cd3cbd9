//! Validator for DIAMOND hit tables (`diamond_output/*.out`).

use std::fs::File;
use std::path::{Path, PathBuf};

use crate::error::{GuncError, Result};

use super::{ensure_file, Format, ValidationLevel};

/// Columns of BLAST tabular output (`--outfmt 6`).
const BLAST6_COLUMNS: usize = 12;

/// Headerless tab-separated DIAMOND alignments against the GUNC database.
#[derive(Debug, Clone)]
pub struct DiamondOutputFormat {
    path: PathBuf,
}

impl Format for DiamondOutputFormat {
    const NAME: &'static str = "OrthologFileFmt";

    fn from_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn path(&self) -> &Path {
        &self.path
    }

    fn validate_level(&self, level: ValidationLevel) -> Result<()> {
        ensure_file(&self.path)?;
        let file = File::open(&self.path).map_err(|e| GuncError::io(&self.path, e))?;
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(false)
            .flexible(true)
            .from_reader(file);

        for (i, result) in reader.records().enumerate() {
            if level.row_limit().is_some_and(|max| i >= max) {
                break;
            }
            let record = result?;
            if record.len() < BLAST6_COLUMNS {
                return Err(GuncError::InvalidContent {
                    path: self.path.clone(),
                    format: Self::NAME,
                    message: format!(
                        "line {} has {} fields, expected at least {}",
                        i + 1,
                        record.len(),
                        BLAST6_COLUMNS
                    ),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_test_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::with_suffix(".out").unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_valid_hits() {
        let file = create_test_file(
            "k141_1_1\t1280.SAOUHSC_00001\t98.5\t453\t7\t0\t1\t453\t1\t453\t1.2e-250\t870\n",
        );
        DiamondOutputFormat::from_path(file.path()).validate().unwrap();
    }

    #[test]
    fn test_empty_file_is_valid() {
        let file = create_test_file("");
        DiamondOutputFormat::from_path(file.path()).validate().unwrap();
    }

    #[test]
    fn test_truncated_line() {
        let file = create_test_file("k141_1_1\t1280.SAOUHSC_00001\t98.5\n");
        assert!(DiamondOutputFormat::from_path(file.path()).validate().is_err());
    }
}
