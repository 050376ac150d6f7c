//! Configuration resolution
//!
//! Settings are layered, lowest precedence first:
//! - built-in defaults
//! - an optional YAML file (`--config`, `$ORG_CAPTURE_CONFIG`, or
//!   `<config dir>/org-capture/config.yaml`)
//! - environment variables (`todos_inbox`, `delimiter`, `use_priority_tags`, ...)
//! - command line flags
//!
//! Everything is validated here so formatting itself never fails.

use std::fmt::{self, Write as _};
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants as C;
use crate::error::ConfigError;

/// Formatting options for one capture. Immutable once resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatConfig {
    /// Separates heading from body
    pub delimiter: String,
    /// Written in front of the heading, encodes the nesting depth
    pub heading_prefix: String,
    pub use_priority_tags: bool,
    /// Marks a priority token: #b => [#B]
    pub priority_tag: char,
    /// Keywords the priority cookie is placed after
    pub task_keywords: Vec<String>,
    pub add_creation_date: bool,
    pub creation_date_format: String,
    pub replace_absolute_dates: bool,
    pub replace_relative_dates: bool,
    /// chrono template for resolved day words
    pub date_format: String,
    pub convert_scheduled: bool,
    pub scheduled_pattern: String,
    pub scheduled_keyword: String,
    pub convert_deadlines: bool,
    pub deadline_pattern: String,
    pub deadline_keyword: String,
    pub smart_line_break: bool,
    /// Regex replaced by `line_break_char`
    pub line_break_pattern: String,
    pub line_break_char: String,
    pub cleanup_spaces: bool,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            delimiter: C::DEFAULT_DELIMITER.to_string(),
            heading_prefix: C::DEFAULT_HEADING_PREFIX.to_string(),
            use_priority_tags: true,
            priority_tag: C::DEFAULT_PRIORITY_TAG,
            task_keywords: vec![C::DEFAULT_TASK_KEYWORD.to_string()],
            add_creation_date: true,
            creation_date_format: C::DEFAULT_CREATION_DATE_FORMAT.to_string(),
            replace_absolute_dates: true,
            replace_relative_dates: true,
            date_format: C::DEFAULT_DATE_FORMAT.to_string(),
            convert_scheduled: true,
            scheduled_pattern: C::DEFAULT_SCHEDULED_PATTERN.to_string(),
            scheduled_keyword: C::DEFAULT_SCHEDULED_KEYWORD.to_string(),
            convert_deadlines: true,
            deadline_pattern: C::DEFAULT_DEADLINE_PATTERN.to_string(),
            deadline_keyword: C::DEFAULT_DEADLINE_KEYWORD.to_string(),
            smart_line_break: true,
            line_break_pattern: C::DEFAULT_LINE_BREAK_PATTERN.to_string(),
            line_break_char: C::DEFAULT_LINE_BREAK_CHAR.to_string(),
            cleanup_spaces: true,
        }
    }
}

impl FormatConfig {
    /// Check the chrono templates by formatting the values they are used on.
    ///
    /// `date_format` is applied to a date, `creation_date_format` to a date
    /// and time; a field the value cannot supply (`%H` on a date, `%z` on
    /// either) is rejected here. Regexes are checked when compiled.
    pub fn validate_templates(&self) -> Result<(), ConfigError> {
        check_template("date", &self.date_format, NaiveDate::default().format(&self.date_format))?;
        check_template(
            "creation date",
            &self.creation_date_format,
            NaiveDateTime::default().format(&self.creation_date_format),
        )
    }
}

fn check_template(name: &'static str, template: &str, sample: impl fmt::Display) -> Result<(), ConfigError> {
    let mut out = String::new();
    write!(out, "{}", sample).map_err(|_| ConfigError::InvalidTemplate {
        name,
        template: template.to_string(),
    })
}

/// Heading prefix for a nesting depth: level 2 => "** "
pub fn heading_prefix(level: usize) -> String {
    format!("{} ", C::HEADING_MARKER.to_string().repeat(level))
}

/// What kind of capture this is; selects inbox and heading level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Note,
    Inspiration,
    Todo,
}

impl Action {
    fn inbox_var(self) -> &'static str {
        match self {
            Action::Note => C::ENV_NOTES_INBOX,
            Action::Inspiration => C::ENV_INSPIRATIONS_INBOX,
            Action::Todo => C::ENV_TODOS_INBOX,
        }
    }

    fn heading_level_var(self) -> &'static str {
        match self {
            Action::Note => C::ENV_NOTES_HEADING_LEVEL,
            Action::Inspiration => C::ENV_INSPIRATIONS_HEADING_LEVEL,
            Action::Todo => C::ENV_TODOS_HEADING_LEVEL,
        }
    }

    /// Text put in front of every capture of this kind.
    ///
    /// Only todos get the `TODO ` keyword; notes and inspirations stay unprefixed.
    pub fn capture_prefix(self) -> &'static str {
        match self {
            Action::Todo => "TODO ",
            Action::Note | Action::Inspiration => "",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Action::Note => "note",
            Action::Inspiration => "inspiration",
            Action::Todo => "todo",
        };
        f.write_str(name)
    }
}

// === Config file ===

/// Inbox settings for one action in the config file
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct InboxConfig {
    pub file: Option<PathBuf>,
    pub heading_level: Option<usize>,
}

/// Contents of the YAML config file
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub format: FormatConfig,
    pub note: InboxConfig,
    pub inspiration: InboxConfig,
    pub todo: InboxConfig,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content, path)
    }

    pub fn parse(content: &str, path: &Path) -> Result<Self, ConfigError> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|source| ConfigError::ParseFile {
            path: path.to_path_buf(),
            source,
        })
    }

    fn inbox(&self, action: Action) -> &InboxConfig {
        match action {
            Action::Note => &self.note,
            Action::Inspiration => &self.inspiration,
            Action::Todo => &self.todo,
        }
    }
}

/// Default config file location, if the platform has a config dir
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join(C::CONFIG_DIR_NAME).join(C::CONFIG_FILE_NAME))
}

// === Resolution ===

/// Values given on the command line; they win over every other layer
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub config_file: Option<PathBuf>,
    pub file: Option<PathBuf>,
    pub heading_level: Option<usize>,
}

/// Fully resolved settings for one capture
#[derive(Debug, Clone, PartialEq)]
pub struct CaptureConfig {
    pub action: Action,
    /// Inbox file entries are appended to
    pub target: PathBuf,
    pub format: FormatConfig,
}

impl CaptureConfig {
    /// Resolve against the process environment
    pub fn from_env(action: Action, overrides: &Overrides) -> Result<Self, ConfigError> {
        Self::resolve(action, overrides, |key| std::env::var(key).ok())
    }

    /// Resolve using `lookup` for environment variables.
    ///
    /// Empty variables count as unset.
    pub fn resolve<F>(action: Action, overrides: &Overrides, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.is_empty());

        let file_config = match config_file_path(overrides, &var) {
            Some(path) => {
                debug!(path = %path.display(), "loading config file");
                FileConfig::load(&path)?
            }
            None => FileConfig::default(),
        };

        let mut format = file_config.format.clone();
        apply_env(&mut format, &var)?;

        let inbox = file_config.inbox(action);
        let level = match overrides.heading_level {
            Some(level) => Some(check_level(level, "--level")?),
            None => match var(action.heading_level_var()) {
                Some(value) => Some(parse_level(&value, action.heading_level_var())?),
                None => inbox.heading_level.map(|l| check_level(l, "config file")).transpose()?,
            },
        };
        if let Some(level) = level {
            format.heading_prefix = heading_prefix(level);
        }

        let target = overrides
            .file
            .clone()
            .or_else(|| var(action.inbox_var()).map(PathBuf::from))
            .or_else(|| inbox.file.clone())
            .ok_or(ConfigError::MissingInbox {
                action,
                var: action.inbox_var(),
            })?;

        format.validate_templates()?;

        Ok(Self {
            action,
            target: expand_home(&target),
            format,
        })
    }
}

fn config_file_path<F>(overrides: &Overrides, var: &F) -> Option<PathBuf>
where
    F: Fn(&str) -> Option<String>,
{
    overrides
        .config_file
        .clone()
        .or_else(|| var(C::ENV_CONFIG_FILE).map(PathBuf::from))
        .or_else(|| default_config_path().filter(|p| p.is_file()))
}

/// Overlay the environment variables onto `format`
fn apply_env<F>(format: &mut FormatConfig, var: &F) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(v) = var(C::ENV_DELIMITER) {
        format.delimiter = v;
    }
    if let Some(v) = var(C::ENV_PRIORITY_TAG) {
        format.priority_tag = parse_priority_tag(&v)?;
    }
    if let Some(v) = var(C::ENV_SCHEDULED_PATTERN) {
        format.scheduled_pattern = v;
    }
    if let Some(v) = var(C::ENV_DEADLINE_PATTERN) {
        format.deadline_pattern = v;
    }
    if let Some(v) = var(C::ENV_LINE_BREAK_PATTERN) {
        format.line_break_pattern = v;
    }

    let flags: [(&str, &mut bool); 8] = [
        (C::ENV_USE_PRIORITY_TAGS, &mut format.use_priority_tags),
        (C::ENV_ADD_CREATION_DATE, &mut format.add_creation_date),
        (C::ENV_REPLACE_ABSOLUTE_DATES, &mut format.replace_absolute_dates),
        (C::ENV_REPLACE_RELATIVE_DATES, &mut format.replace_relative_dates),
        (C::ENV_CONVERT_SCHEDULED, &mut format.convert_scheduled),
        (C::ENV_CONVERT_DEADLINES, &mut format.convert_deadlines),
        (C::ENV_SMART_LINE_BREAK, &mut format.smart_line_break),
        (C::ENV_CLEANUP_SPACES, &mut format.cleanup_spaces),
    ];
    for (key, slot) in flags {
        if let Some(v) = var(key) {
            *slot = parse_flag(&v);
        }
    }
    Ok(())
}

/// "1" is true, anything else false
pub fn parse_flag(value: &str) -> bool {
    value.trim() == "1"
}

fn parse_priority_tag(value: &str) -> Result<char, ConfigError> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if !c.is_whitespace() => Ok(c),
        _ => Err(ConfigError::InvalidPriorityTag(value.to_string())),
    }
}

fn parse_level(value: &str, source_name: &str) -> Result<usize, ConfigError> {
    value
        .trim()
        .parse::<usize>()
        .ok()
        .filter(|l| *l > 0)
        .ok_or_else(|| ConfigError::InvalidHeadingLevel {
            source_name: source_name.to_string(),
            value: value.to_string(),
        })
}

fn check_level(level: usize, source_name: &str) -> Result<usize, ConfigError> {
    parse_level(&level.to_string(), source_name)
}

/// Expand a leading `~` to the home directory
pub fn expand_home(path: &Path) -> PathBuf {
    match path.strip_prefix("~") {
        Ok(rest) => match dirs::home_dir() {
            Some(home) => home.join(rest),
            None => path.to_path_buf(),
        },
        Err(_) => path.to_path_buf(),
    }
}
