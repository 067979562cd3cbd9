//! Collation of several results directories into one.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{GuncError, Result};
use crate::format::{Format, GuncResultsDirectoryFormat};

/// Copy every partition of `results` into `destination`.
///
/// Each partition lands in `<destination>/<sample_id>`; unpartitioned
/// results are copied into `destination` itself. Existing content is merged,
/// files with the same relative path are overwritten by later inputs.
pub fn collate_results(
    results: &[GuncResultsDirectoryFormat],
    destination: impl AsRef<Path>,
) -> Result<GuncResultsDirectoryFormat> {
    let destination = destination.as_ref();
    fs::create_dir_all(destination).map_err(|e| GuncError::io(destination, e))?;

    for result in results {
        for (sample_id, source) in result.file_dict()? {
            let target = if sample_id.is_empty() {
                destination.to_path_buf()
            } else {
                destination.join(&sample_id)
            };
            debug!(sample = %sample_id, from = %source.display(), to = %target.display(), "collating partition");
            copy_tree(&source, &target)?;
        }
    }

    Ok(GuncResultsDirectoryFormat::from_path(destination))
}

fn copy_tree(source: &Path, target: &Path) -> Result<()> {
    fs::create_dir_all(target).map_err(|e| GuncError::io(target, e))?;
    for entry in fs::read_dir(source).map_err(|e| GuncError::io(source, e))? {
        let entry = entry.map_err(|e| GuncError::io(source, e))?;
        let path = entry.path();
        let dest = target.join(entry.file_name());
        if path.is_dir() {
            copy_tree(&path, &dest)?;
        } else {
            fs::copy(&path, &dest).map_err(|e| GuncError::io(&path, e))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_partition(root: &Path, sample: &str, genome: &str) {
        let dir = root.join(sample).join("gunc_output");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(format!("{genome}.all_levels.tsv")), genome).unwrap();
    }

    #[test]
    fn test_collate_partitioned() {
        let a = TempDir::new().unwrap();
        let b = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        write_partition(a.path(), "s1", "mag1");
        write_partition(b.path(), "s2", "mag2");
        write_partition(b.path(), "s1", "mag3");

        let inputs = [
            GuncResultsDirectoryFormat::from_path(a.path()),
            GuncResultsDirectoryFormat::from_path(b.path()),
        ];
        let collated = collate_results(&inputs, out.path()).unwrap();

        let dict = collated.file_dict().unwrap();
        assert_eq!(dict.keys().collect::<Vec<_>>(), vec!["s1", "s2"]);
        assert!(out.path().join("s1/gunc_output/mag1.all_levels.tsv").is_file());
        assert!(out.path().join("s1/gunc_output/mag3.all_levels.tsv").is_file());
        assert!(out.path().join("s2/gunc_output/mag2.all_levels.tsv").is_file());
    }

    #[test]
    fn test_collate_unpartitioned() {
        let a = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        write_partition(a.path(), "", "mag1");

        let collated =
            collate_results(&[GuncResultsDirectoryFormat::from_path(a.path())], out.path()).unwrap();

        assert!(out.path().join("gunc_output/mag1.all_levels.tsv").is_file());
        assert_eq!(collated.file_dict().unwrap().len(), 1);
        assert!(collated.file_dict().unwrap().contains_key(""));
    }
}
