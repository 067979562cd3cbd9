//! The GUNC results directory, optionally partitioned by sample.
//!
//! A result set (one `gunc run` output directory) looks like:
//!
//! ```text
//! GUNC.<db>.maxCSS_level.tsv
//! gunc_output/<mag>.all_levels.tsv
//! gene_calls/gene_counts.json
//! gene_calls/<mag>.genecalls.faa      (optional)
//! diamond_output/<mag>.out            (optional)
//! plots/<mag>.viz.html                (optional)
//! ```
//!
//! Partitioned directories hold one such result set per `<sample_id>/`.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, trace};

use crate::error::{GuncError, Result};

use super::{
    ensure_dir, list_dir, DiamondOutputFormat, Entry, Format, GeneCallsFastaFormat,
    GuncGeneCountsFormat, GuncHtmlPlotFormat, GuncResultsFormat, ValidationLevel,
};

pub(crate) const GUNC_OUTPUT_DIR: &str = "gunc_output";
pub(crate) const GENE_CALLS_DIR: &str = "gene_calls";
pub(crate) const DIAMOND_OUTPUT_DIR: &str = "diamond_output";
pub(crate) const PLOTS_DIR: &str = "plots";
pub(crate) const GENE_COUNTS_FILE: &str = "gene_counts.json";

const RESULT_SET_DIRS: [&str; 4] = [GUNC_OUTPUT_DIR, GENE_CALLS_DIR, DIAMOND_OUTPUT_DIR, PLOTS_DIR];

/// Matches the maxCSS summary, `GUNC.*.maxCSS_level.tsv`.
pub(crate) static MAX_CSS_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^GUNC\..*\.maxCSS_level\.tsv$").unwrap());
static ALL_LEVELS_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^.+\.all_levels\.tsv$").unwrap());
static GENE_CALLS_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^.+\.genecalls\.faa$").unwrap());
static DIAMOND_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^.+\.out$").unwrap());
static PLOT_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^.+\.viz\.html$").unwrap());

/// How a results directory is organised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Layout {
    /// A single result set at the root.
    Unpartitioned,
    /// One result set per sample sub-directory.
    Partitioned(Vec<String>),
}

/// Output of `gunc run`, for one run or for one run per sample.
#[derive(Debug, Clone)]
pub struct GuncResultsDirectoryFormat {
    path: PathBuf,
}

impl GuncResultsDirectoryFormat {
    /// Detect the layout, rejecting mixed and empty directories.
    pub fn layout(&self) -> Result<Layout> {
        ensure_dir(&self.path)?;
        let entries = list_dir(&self.path)?;
        let flat = entries.iter().any(is_result_set_entry);
        let samples: Vec<String> = entries
            .iter()
            .filter(|e| e.is_dir && !is_result_set_entry(e))
            .map(|e| e.name.clone())
            .collect();

        match (flat, samples.is_empty()) {
            (true, true) => Ok(Layout::Unpartitioned),
            (false, false) => Ok(Layout::Partitioned(samples)),
            (true, false) => Err(GuncError::MixedLayout {
                dir: self.path.clone(),
                samples: samples.join(", "),
            }),
            (false, true) => Err(GuncError::UnrecognizedLayout(self.path.clone())),
        }
    }

    /// Map each sample id to the directory holding its results.
    ///
    /// An unpartitioned directory maps the empty string to the root. Unlike
    /// [`layout`](Self::layout) this never rejects a directory: a root with
    /// result-set entries counts as unpartitioned even if it also holds other
    /// sub-directories, and an empty root yields an empty map.
    pub fn file_dict(&self) -> Result<IndexMap<String, PathBuf>> {
        let entries = list_dir(&self.path)?;
        let mut dict = IndexMap::new();
        if entries.iter().any(is_result_set_entry) {
            let skipped: Vec<&str> = entries
                .iter()
                .filter(|e| e.is_dir && !is_result_set_entry(e))
                .map(|e| e.name.as_str())
                .collect();
            if !skipped.is_empty() {
                debug!(
                    dir = %self.path.display(),
                    skipped = %skipped.join(", "),
                    "root holds a result set, ignoring sub-directories"
                );
            }
            dict.insert(String::new(), self.path.clone());
        } else {
            for entry in entries.into_iter().filter(|e| e.is_dir) {
                dict.insert(entry.name, entry.path);
            }
        }
        Ok(dict)
    }

    /// Relative path of a per-genome result table.
    pub fn gunc_results_path(sample_id: &str, mag_id: &str) -> PathBuf {
        partition_prefix(sample_id)
            .join(GUNC_OUTPUT_DIR)
            .join(format!("{mag_id}.all_levels.tsv"))
    }

    /// Relative path of a gene-call FASTA.
    pub fn gene_calls_path(sample_id: &str, mag_id: &str) -> PathBuf {
        partition_prefix(sample_id)
            .join(GENE_CALLS_DIR)
            .join(format!("{mag_id}.genecalls.faa"))
    }

    /// Relative path of a DIAMOND hit table.
    pub fn diamond_output_path(sample_id: &str, mag_id: &str) -> PathBuf {
        partition_prefix(sample_id)
            .join(DIAMOND_OUTPUT_DIR)
            .join(format!("{mag_id}.out"))
    }

    /// Relative path of an HTML plot.
    pub fn plot_path(sample_id: &str, mag_id: &str) -> PathBuf {
        partition_prefix(sample_id)
            .join(PLOTS_DIR)
            .join(format!("{mag_id}.viz.html"))
    }
}

impl Format for GuncResultsDirectoryFormat {
    const NAME: &'static str = "GUNCResultsDirectoryFormat";

    fn from_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn path(&self) -> &Path {
        &self.path
    }

    fn validate_level(&self, level: ValidationLevel) -> Result<()> {
        match self.layout()? {
            Layout::Unpartitioned => validate_result_set(&self.path, level),
            Layout::Partitioned(samples) => {
                for sample in samples {
                    trace!(sample = %sample, "validating partition");
                    validate_result_set(&self.path.join(&sample), level)?;
                }
                Ok(())
            }
        }
    }
}

fn partition_prefix(sample_id: &str) -> PathBuf {
    if sample_id.is_empty() {
        PathBuf::new()
    } else {
        PathBuf::from(sample_id)
    }
}

fn is_result_set_entry(entry: &Entry) -> bool {
    if entry.is_dir {
        RESULT_SET_DIRS.contains(&entry.name.as_str())
    } else {
        MAX_CSS_PATTERN.is_match(&entry.name)
    }
}

/// Files in `dir` whose names match `pattern`, sorted by name.
fn matching_files(dir: &Path, pattern: &Regex) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in list_dir(dir)? {
        if !entry.is_dir && pattern.is_match(&entry.name) {
            files.push(entry.path);
        } else {
            debug!(path = %entry.path.display(), "ignoring unrecognized entry");
        }
    }
    Ok(files)
}

/// Find the maxCSS summary directly inside `dir`, if any.
pub(crate) fn find_max_css(dir: &Path) -> Result<Option<PathBuf>> {
    let mut found = Vec::new();
    for entry in list_dir(dir)? {
        if !entry.is_dir && MAX_CSS_PATTERN.is_match(&entry.name) {
            found.push(entry.path);
        }
    }
    if found.len() > 1 {
        debug!(dir = %dir.display(), count = found.len(), "several maxCSS summaries, using the first");
    }
    Ok(found.into_iter().next())
}

fn validate_each<F: Format>(files: &[PathBuf], level: ValidationLevel) -> Result<()> {
    for file in files {
        F::from_path(file).validate_level(level)?;
    }
    Ok(())
}

/// Validate one unpartitioned result set.
fn validate_result_set(dir: &Path, level: ValidationLevel) -> Result<()> {
    ensure_dir(dir)?;

    // maxCSS summary
    let summaries: Vec<PathBuf> = list_dir(dir)?
        .into_iter()
        .filter(|e| !e.is_dir && MAX_CSS_PATTERN.is_match(&e.name))
        .map(|e| e.path)
        .collect();
    match summaries.len() {
        0 => {
            return Err(GuncError::MissingEntry {
                dir: dir.to_path_buf(),
                what: "maxCSS summary (GUNC.*.maxCSS_level.tsv)".to_string(),
            });
        }
        1 => GuncResultsFormat::from_path(&summaries[0]).validate_level(level)?,
        count => {
            return Err(GuncError::AmbiguousEntry {
                dir: dir.to_path_buf(),
                what: "maxCSS summary (GUNC.*.maxCSS_level.tsv)".to_string(),
                count,
            });
        }
    }

    // Per-genome results
    let gunc_output = dir.join(GUNC_OUTPUT_DIR);
    ensure_dir(&gunc_output)?;
    let all_levels = matching_files(&gunc_output, &ALL_LEVELS_PATTERN)?;
    if all_levels.is_empty() {
        return Err(GuncError::MissingEntry {
            dir: gunc_output,
            what: "per-genome results (*.all_levels.tsv)".to_string(),
        });
    }
    validate_each::<GuncResultsFormat>(&all_levels, level)?;

    // Gene calls
    let gene_calls = dir.join(GENE_CALLS_DIR);
    ensure_dir(&gene_calls)?;
    GuncGeneCountsFormat::from_path(gene_calls.join(GENE_COUNTS_FILE)).validate_level(level)?;
    let fasta: Vec<PathBuf> = list_dir(&gene_calls)?
        .into_iter()
        .filter(|e| !e.is_dir && GENE_CALLS_PATTERN.is_match(&e.name))
        .map(|e| e.path)
        .collect();
    validate_each::<GeneCallsFastaFormat>(&fasta, level)?;

    let diamond_output = dir.join(DIAMOND_OUTPUT_DIR);
    if diamond_output.is_dir() {
        let hits = matching_files(&diamond_output, &DIAMOND_PATTERN)?;
        validate_each::<DiamondOutputFormat>(&hits, level)?;
    }

    let plots = dir.join(PLOTS_DIR);
    if plots.is_dir() {
        let html = matching_files(&plots, &PLOT_PATTERN)?;
        validate_each::<GuncHtmlPlotFormat>(&html, level)?;
    } else {
        debug!(dir = %dir.display(), "no plots for result set");
    }

    Ok(())
}
