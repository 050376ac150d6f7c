pub mod capture;
pub mod cleanup;
pub mod cli;
pub mod config;
pub mod constants;
pub mod dates;
pub mod entry;
pub mod error;
pub mod formatter;
pub mod heading;
pub mod logging;
pub mod schedule;
pub mod sink;

pub use capture::{CaptureEngine, CaptureOutcome};
pub use cli::Cli;
pub use config::{Action, CaptureConfig, FormatConfig, Overrides};
pub use entry::FormattedEntry;
pub use error::{CaptureError, ConfigError};
pub use formatter::EntryFormatter;
pub use sink::{EntrySink, FileSink, MemorySink};
