//! Error types for org-capture

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::config::Action;

/// Problems found while resolving configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no inbox file configured for '{action}' (set ${var} or use --file)")]
    MissingInbox { action: Action, var: &'static str },

    #[error("invalid heading level '{value}' from {source_name}: expected a positive number")]
    InvalidHeadingLevel { source_name: String, value: String },

    #[error("invalid priority tag '{0}': expected exactly one character")]
    InvalidPriorityTag(String),

    #[error("invalid {name} pattern '{pattern}': {source}")]
    InvalidPattern {
        name: &'static str,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("invalid {name} template '{template}'")]
    InvalidTemplate { name: &'static str, template: String },

    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    ParseFile {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Errors surfaced by a capture run
#[derive(Debug, Error)]
pub enum CaptureError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to append to {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
