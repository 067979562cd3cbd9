//! Validator for `gene_calls/gene_counts.json`.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde_json::Value;

use crate::error::{GuncError, Result};

use super::{ensure_file, Format, ValidationLevel};

/// JSON object mapping genome identifiers to the number of genes called.
#[derive(Debug, Clone)]
pub struct GuncGeneCountsFormat {
    path: PathBuf,
}

impl GuncGeneCountsFormat {
    /// Read the counts, checking every value.
    pub fn counts(&self) -> Result<IndexMap<String, u64>> {
        let object = self.read_object()?;
        let mut counts = IndexMap::with_capacity(object.len());
        for (key, value) in object {
            let count = value.as_u64().ok_or_else(|| self.invalid(format!(
                "value for '{}' is not a non-negative integer: {}",
                key, value
            )))?;
            counts.insert(key, count);
        }
        Ok(counts)
    }

    fn read_object(&self) -> Result<serde_json::Map<String, Value>> {
        ensure_file(&self.path)?;
        let file = File::open(&self.path).map_err(|e| GuncError::io(&self.path, e))?;
        let value: Value = serde_json::from_reader(BufReader::new(file))
            .map_err(|e| self.invalid(e.to_string()))?;
        match value {
            Value::Object(map) => Ok(map),
            other => Err(self.invalid(format!("expected a JSON object, found {}", json_kind(&other)))),
        }
    }

    fn invalid(&self, message: String) -> GuncError {
        GuncError::InvalidContent {
            path: self.path.clone(),
            format: Self::NAME,
            message,
        }
    }
}

impl Format for GuncGeneCountsFormat {
    const NAME: &'static str = "GUNCGeneCountsFormat";

    fn from_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn path(&self) -> &Path {
        &self.path
    }

    fn validate_level(&self, _level: ValidationLevel) -> Result<()> {
        self.counts().map(|_| ())
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
