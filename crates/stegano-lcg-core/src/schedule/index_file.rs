use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use log::{error, warn};

use crate::{Result, SteganoError};

/// Writes one decimal index per line, in the given order
pub fn write_index_file(path: &Path, indices: &[u64]) -> Result<()> {
    let f = File::create(path).map_err(|e| {
        error!("Error creating index file {path:?}: {e}");
        SteganoError::WriteError { source: e }
    })?;
    let mut w = BufWriter::new(f);
    for i in indices {
        writeln!(w, "{i}").map_err(|source| SteganoError::WriteError { source })?;
    }
    w.flush()
        .map_err(|source| SteganoError::WriteError { source })
}

/// Reads an index file back.
///
/// Blank lines are ignored, lines that are not a non-negative integer are skipped with a warning.
pub fn read_index_file(path: &Path) -> Result<Vec<u64>> {
    if !path.is_file() {
        return Err(SteganoError::MissingFile(path.to_path_buf()));
    }
    let content = fs::read_to_string(path).map_err(|source| SteganoError::ReadError { source })?;

    Ok(content
        .lines()
        .enumerate()
        .filter_map(|(no, line)| {
            let line = line.trim();
            if line.is_empty() {
                return None;
            }
            match line.parse::<u64>() {
                Ok(i) => Some(i),
                Err(e) => {
                    warn!("skipping line {} of {path:?}: '{line}' ({e})", no + 1);
                    None
                }
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn should_write_and_read_back_indices() {
        let out_dir = TempDir::new().unwrap();
        let file = out_dir.path().join("indices.txt");

        write_index_file(&file, &[1, 9, 20, 30]).expect("Cannot write index file");

        let content = fs::read_to_string(&file).unwrap();
        assert_eq!(content, "1\n9\n20\n30\n");
        assert_eq!(read_index_file(&file).unwrap(), vec![1, 9, 20, 30]);
    }

    #[test]
    fn should_skip_blank_and_malformed_lines() {
        let out_dir = TempDir::new().unwrap();
        let file = out_dir.path().join("indices.txt");
        fs::write(&file, " 4 \n\nfoo\n-3\n17\r\n").unwrap();

        assert_eq!(read_index_file(&file).unwrap(), vec![4, 17]);
    }

    #[test]
    fn should_fail_on_missing_file() {
        let result = read_index_file(Path::new("no/such/indices.txt"));
        assert!(matches!(result, Err(SteganoError::MissingFile(_))));
    }
}
