//! CaptureEngine - turns a raw capture into an inbox entry
//!
//! Ties the pieces together:
//! - Unicode normalization of the input
//! - formatting through [`EntryFormatter`]
//! - appending through an [`EntrySink`]
//! - the confirmation message

use chrono::{Local, NaiveDateTime};
use tracing::info;
use unicode_normalization::UnicodeNormalization;

use crate::config::CaptureConfig;
use crate::constants as C;
use crate::entry::FormattedEntry;
use crate::error::{CaptureError, ConfigError};
use crate::formatter::EntryFormatter;
use crate::sink::{EntrySink, FileSink};

/// Result of one capture
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct CaptureOutcome {
    pub entry: FormattedEntry,
    /// Rendered entry text as handed to the sink
    pub text: String,
    pub message: String,
}

/// Core engine for capture operations
pub struct CaptureEngine {
    config: CaptureConfig,
    formatter: EntryFormatter,
}

impl CaptureEngine {
    /// Create an engine; fails on configuration the formatter cannot compile
    pub fn new(config: CaptureConfig) -> Result<Self, ConfigError> {
        let formatter = EntryFormatter::new(config.format.clone())?;
        Ok(Self { config, formatter })
    }

    /// Format `raw` as of `now` without writing anything
    pub fn prepare(&self, raw: &str, now: NaiveDateTime) -> CaptureOutcome {
        let raw: String = format!("{}{}", self.config.action.capture_prefix(), raw)
            .nfc()
            .collect();
        let entry = self.formatter.format(&raw, now);
        let text = entry.render();
        let message = entry.message(&self.config.target);
        CaptureOutcome { entry, text, message }
    }

    /// Format `raw` and append it to `sink`
    pub fn add_entry_to<S: EntrySink>(
        &self,
        raw: &str,
        now: NaiveDateTime,
        sink: &mut S,
    ) -> Result<CaptureOutcome, CaptureError> {
        let outcome = self.prepare(raw, now);
        sink.append(&outcome.text).map_err(|source| CaptureError::Io {
            path: self.config.target.clone(),
            source,
        })?;
        info!(action = %self.config.action, target = %self.config.target.display(), "captured entry");
        Ok(outcome)
    }

    /// Format `raw` and append it to the configured inbox
    pub fn add_entry(&self, raw: &str) -> Result<CaptureOutcome, CaptureError> {
        let mut sink = FileSink::new(&self.config.target);
        self.add_entry_to(raw, Self::get_timestamp(), &mut sink)
    }

    /// Current local time, allowing override via ORG_CAPTURE_TIMESTAMP
    pub fn get_timestamp() -> NaiveDateTime {
        if let Ok(ts) = std::env::var(C::ENV_TIMESTAMP) {
            if let Ok(naive) = NaiveDateTime::parse_from_str(&ts, C::TIMESTAMP_OVERRIDE_FORMAT) {
                return naive;
            }
        }
        Local::now().naive_local()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Action, FormatConfig};
    use crate::sink::MemorySink;
    use chrono::NaiveDate;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 3)
            .unwrap()
            .and_hms_opt(9, 15, 0)
            .unwrap()
    }

    fn engine(action: Action, target: PathBuf) -> CaptureEngine {
        CaptureEngine::new(CaptureConfig {
            action,
            target,
            format: FormatConfig {
                add_creation_date: false,
                ..Default::default()
            },
        })
        .unwrap()
    }

    #[test]
    fn test_todo_action_prefixes_keyword() {
        let engine = engine(Action::Todo, PathBuf::from("/tmp/todos.org"));
        let outcome = engine.prepare("#b call mum:: tomorrow", now());
        assert_eq!(outcome.entry.heading, "TODO [#B] call mum");
        assert_eq!(outcome.text, "* TODO [#B] call mum\n<2024-01-04 Thu>");
        assert_eq!(outcome.message, "Added 'TODO [#B] call mum\n<2024-01-04 Thu>' to todos.org.");
    }

    #[test]
    fn test_note_action_keeps_capture() {
        let engine = engine(Action::Note, PathBuf::from("/tmp/notes.org"));
        let outcome = engine.prepare("Rust tip", now());
        assert_eq!(outcome.text, "* Rust tip\n");
        assert_eq!(outcome.message, "Added 'Rust tip' to notes.org.");
    }

    #[test]
    fn test_input_is_nfc_normalized() {
        let engine = engine(Action::Note, PathBuf::from("/tmp/notes.org"));
        // "Ü" written as U + combining diaeresis
        let outcome = engine.prepare("U\u{0308}bung", now());
        assert_eq!(outcome.entry.heading, "\u{00DC}bung");
    }

    #[test]
    fn test_add_entry_to_sink() {
        let engine = engine(Action::Note, PathBuf::from("/tmp/notes.org"));
        let mut sink = MemorySink::default();
        engine.add_entry_to("First:: body", now(), &mut sink).unwrap();
        engine.add_entry_to("Second", now(), &mut sink).unwrap();
        assert_eq!(sink.entries, vec!["* First\nbody", "* Second\n"]);
    }

    #[test]
    fn test_add_entry_writes_file() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("inbox.org");
        let engine = engine(Action::Inspiration, target.clone());
        let mut sink = FileSink::new(&target);

        engine.add_entry_to("Café idea:: open on 30.8", now(), &mut sink).unwrap();

        let content = fs::read_to_string(&target).unwrap();
        assert_eq!(content, "\n* Café idea\nopen on <2024-08-30 Fri>");
    }

    #[test]
    fn test_write_failure_propagates() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("no-such-dir").join("inbox.org");
        let engine = engine(Action::Note, target.clone());
        let mut sink = FileSink::new(&target);

        let result = engine.add_entry_to("Lost?", now(), &mut sink);
        match result {
            Err(CaptureError::Io { path, .. }) => assert_eq!(path, target),
            other => panic!("expected io error, got {:?}", other),
        }
    }
}
