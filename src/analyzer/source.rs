use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
#[error("failed to read log file {path}: {source}")]
pub struct SourceError {
    path: String,
    source: std::io::Error,
}

/// Yields the raw lines to analyze as one finite, ordered batch. The whole
/// record set is read up front; inputs are assumed to fit in memory.
pub trait LineSource {
    fn read_lines(&mut self) -> Result<Vec<String>, SourceError>;
}

pub struct FileLineSource {
    path: PathBuf,
}

impl FileLineSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl LineSource for FileLineSource {
    fn read_lines(&mut self) -> Result<Vec<String>, SourceError> {
        let raw = std::fs::read_to_string(&self.path).map_err(|source| SourceError {
            path: self.path.display().to_string(),
            source,
        })?;
        Ok(raw.lines().map(str::to_string).collect())
    }
}

#[cfg(test)]
pub(crate) struct MockLineSource {
    lines: Vec<String>,
}

#[cfg(test)]
impl MockLineSource {
    pub(crate) fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }
}

#[cfg(test)]
impl LineSource for MockLineSource {
    fn read_lines(&mut self) -> Result<Vec<String>, SourceError> {
        Ok(self.lines.clone())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::{FileLineSource, LineSource};

    #[test]
    fn reads_all_lines_from_a_file() {
        let temp = tempdir().expect("tempdir should be created");
        let path = temp.path().join("access.log");
        fs::write(
            &path,
            "2025-04-11T13:45:00Z user123 200\n2025-04-11T13:45:05Z user456 500\n",
        )
        .expect("log file should be written");

        let mut source = FileLineSource::new(&path);
        let lines = source.read_lines().expect("file should be readable");

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "2025-04-11T13:45:00Z user123 200");
        assert_eq!(lines[1], "2025-04-11T13:45:05Z user456 500");
    }

    #[test]
    fn a_missing_file_reports_the_path() {
        let temp = tempdir().expect("tempdir should be created");
        let path = temp.path().join("does-not-exist.log");

        let mut source = FileLineSource::new(&path);
        let error = source.read_lines().expect_err("read should fail");

        assert!(error.to_string().contains("does-not-exist.log"));
    }
}
