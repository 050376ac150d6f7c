//! Destinations for finished entries

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::PathBuf;

use tracing::debug;

use crate::constants as C;

/// Accepts finished entry text
pub trait EntrySink {
    fn append(&mut self, entry: &str) -> io::Result<()>;
}

/// Appends entries to an org file, creating it if needed
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl EntrySink for FileSink {
    /// One `write_all` per entry, separator included, on an append-mode handle
    fn append(&mut self, entry: &str) -> io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let block = format!("{}{}", C::ENTRY_SEPARATOR, entry);
        file.write_all(block.as_bytes())?;
        debug!(path = %self.path.display(), bytes = block.len(), "entry appended");
        Ok(())
    }
}

/// Keeps entries in memory
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    pub entries: Vec<String>,
}

impl EntrySink for MemorySink {
    fn append(&mut self, entry: &str) -> io::Result<()> {
        self.entries.push(entry.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_file_sink_creates_and_appends() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("inbox.org");
        let mut sink = FileSink::new(&path);

        sink.append("* First\n").unwrap();
        sink.append("* Zweite Überschrift\nbody").unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "\n* First\n\n* Zweite Überschrift\nbody");
    }

    #[test]
    fn test_file_sink_keeps_existing_content() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("inbox.org");
        fs::write(&path, "#+TITLE: Inbox\n").unwrap();

        FileSink::new(&path).append("* Entry\n").unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "#+TITLE: Inbox\n\n* Entry\n");
    }

    #[test]
    fn test_file_sink_missing_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing").join("inbox.org");
        let err = FileSink::new(&path).append("* Entry\n").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_memory_sink() {
        let mut sink = MemorySink::default();
        sink.append("* A\n").unwrap();
        assert_eq!(sink.entries, vec!["* A\n"]);
    }
}
