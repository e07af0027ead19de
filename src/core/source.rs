//! Line source for delimited record files.

use crate::error::{Result, RosterError};
use std::fs;
use std::path::Path;

/// Read a text file into its lines.
///
/// Any failure to open or decode the file is reported as
/// [`RosterError::SourceUnavailable`] so callers can continue with an empty
/// store. CRLF line endings are accepted.
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let contents = fs::read_to_string(path)
        .map_err(|e| RosterError::source_unavailable(path.display().to_string(), e))?;

    Ok(contents.lines().map(str::to_string).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_read_lines_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.txt");

        match read_lines(&path) {
            Err(RosterError::SourceUnavailable { path: p, .. }) => {
                assert!(p.ends_with("missing.txt"));
            }
            other => panic!("Expected SourceUnavailable, got {other:?}"),
        }
    }

    #[test]
    fn test_read_lines_strips_crlf() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "a,b\r\nc,d\r\n").unwrap();

        let lines = read_lines(file.path()).unwrap();
        assert_eq!(lines, vec!["a,b".to_string(), "c,d".to_string()]);
    }

    #[test]
    fn test_read_lines_empty_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        assert!(read_lines(file.path()).unwrap().is_empty());
    }
}
