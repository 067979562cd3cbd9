//! Validator for GUNC's interactive plots (`plots/*.viz.html`).
//!
//! HTML5 parsing never rejects a document outright, so this only fails when
//! the file cannot be read as UTF-8 text. Recoverable parse errors are logged.

use std::fs;
use std::path::{Path, PathBuf};

use scraper::Html;
use tracing::debug;

use crate::error::{GuncError, Result};

use super::{ensure_file, Format, ValidationLevel};

/// An HTML plot rendered by `gunc plot`.
#[derive(Debug, Clone)]
pub struct GuncHtmlPlotFormat {
    path: PathBuf,
}

impl Format for GuncHtmlPlotFormat {
    const NAME: &'static str = "GUNCHTMLPlotFormat";

    fn from_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn path(&self) -> &Path {
        &self.path
    }

    fn validate_level(&self, _level: ValidationLevel) -> Result<()> {
        ensure_file(&self.path)?;
        let content = fs::read_to_string(&self.path).map_err(|e| GuncError::InvalidContent {
            path: self.path.clone(),
            format: Self::NAME,
            message: e.to_string(),
        })?;

        let document = Html::parse_document(&content);
        if !document.errors.is_empty() {
            debug!(
                path = %self.path.display(),
                errors = document.errors.len(),
                "tolerating malformed HTML"
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_test_file(content: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::with_suffix(".viz.html").unwrap();
        file.write_all(content).unwrap();
        file
    }

    #[test]
    fn test_valid_html() {
        let file = create_test_file(b"<!DOCTYPE html><html><head><title>mag1</title></head><body><div id=\"plot\"></div></body></html>");
        GuncHtmlPlotFormat::from_path(file.path()).validate().unwrap();
    }

    #[test]
    fn test_malformed_html_is_tolerated() {
        let file = create_test_file(b"<html><body><div><p>unclosed <b>tags</html>");
        GuncHtmlPlotFormat::from_path(file.path()).validate().unwrap();
    }

    #[test]
    fn test_binary_content_is_rejected() {
        let file = create_test_file(&[0xff, 0xfe, 0x00, 0xc3, 0x28]);
        assert!(GuncHtmlPlotFormat::from_path(file.path()).validate().is_err());
    }
}
