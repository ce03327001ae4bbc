use std::fs;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use super::{RecordSink, RecordSource};
use crate::error::{Result, TallyError};

/// One record per line, surrounding whitespace stripped.
#[derive(Debug, Clone)]
pub struct TextFileSource {
    path: PathBuf,
}

impl TextFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RecordSource for TextFileSource {
    type Record = String;

    fn read(&self) -> Result<Vec<String>> {
        let file = fs::File::open(&self.path).map_err(|e| TallyError::io(&self.path, e))?;
        BufReader::new(file)
            .lines()
            .map(|line| {
                line.map(|l| l.trim().to_string())
                    .map_err(|e| TallyError::io(&self.path, e))
            })
            .collect()
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Writes each line followed by a newline, truncating the destination.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextFileSink;

impl TextFileSink {
    pub fn new() -> Self {
        Self
    }
}

impl RecordSink for TextFileSink {
    fn write(&self, destination: &Path, lines: &[String]) -> Result<()> {
        let file = fs::File::create(destination).map_err(|e| TallyError::io(destination, e))?;
        let mut writer = BufWriter::new(file);
        for line in lines {
            writeln!(writer, "{}", line).map_err(|e| TallyError::io(destination, e))?;
        }
        writer.flush().map_err(|e| TallyError::io(destination, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_strips_lines() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("events.txt");
        fs::write(&path, "  A;01-01-2030  \nB;02-01-2030\n").unwrap();

        let lines = TextFileSource::new(&path).read().unwrap();
        assert_eq!(lines, vec!["A;01-01-2030", "B;02-01-2030"]);
    }

    #[test]
    fn test_write_then_read_back() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("sorted.txt");
        let lines = vec!["A;01-01-2030".to_string(), "B;02-01-2030".to_string()];

        TextFileSink::new().write(&path, &lines).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "A;01-01-2030\nB;02-01-2030\n");
        assert_eq!(TextFileSource::new(&path).read().unwrap(), lines);
    }

    #[test]
    fn test_write_truncates_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("sorted.txt");
        fs::write(&path, "old\nold\nold\n").unwrap();

        TextFileSink::new().write(&path, &["new".to_string()]).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "new\n");
    }

    #[test]
    fn test_read_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = TextFileSource::new(dir.path().join("nope.txt"))
            .read()
            .unwrap_err();
        assert!(matches!(err, TallyError::Io { .. }));
    }
}
