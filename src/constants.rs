//! Constants for org-capture
//!
//! This module contains the default markers, templates and environment
//! variable names used throughout the codebase.

// === Entry Layout ===

/// Separates the heading from the body in a raw capture
pub const DEFAULT_DELIMITER: &str = ":: ";

/// Marker repeated once per heading level
pub const HEADING_MARKER: char = '*';

/// Default heading prefix (level 1)
pub const DEFAULT_HEADING_PREFIX: &str = "* ";

/// Separator written before every entry appended to an inbox
pub const ENTRY_SEPARATOR: &str = "\n";

/// Task keyword that receives the priority cookie after it
pub const DEFAULT_TASK_KEYWORD: &str = "TODO";

// === Priority ===

/// Character that marks a priority token: #b => [#B]
pub const DEFAULT_PRIORITY_TAG: char = '#';

// === Date and Time Format Strings ===

/// Active org timestamp: <%Y-%m-%d %a>
pub const DEFAULT_DATE_FORMAT: &str = "<%Y-%m-%d %a>";

/// Body of a resolved absolute date, wrapped in angle brackets afterwards
pub const ABSOLUTE_DATE_FORMAT: &str = "%Y-%m-%d %a";

/// Creation stamp drawer
pub const DEFAULT_CREATION_DATE_FORMAT: &str = ":PROPERTIES:\n:CREATED: [%Y-%m-%d %a %H:%M]\n:END:";

/// Format accepted by the timestamp override: YYYY-MM-DD HH:MM
pub const TIMESTAMP_OVERRIDE_FORMAT: &str = "%Y-%m-%d %H:%M";

// === Scheduling ===

pub const DEFAULT_DEADLINE_PATTERN: &str = "DL: ";
pub const DEFAULT_DEADLINE_KEYWORD: &str = "DEADLINE: ";
pub const DEFAULT_SCHEDULED_PATTERN: &str = "S: ";
pub const DEFAULT_SCHEDULED_KEYWORD: &str = "SCHEDULED: ";

/// Shape of a resolved timestamp, optionally carrying a time
pub const RESOLVED_TIMESTAMP_REGEX: &str = r"<\d{4}-\d{2}-\d{2}\s[A-Z][a-z]{2}(?:\s\d{2}:\d{2})?>";

// === Line Breaks ===

/// Two whitespace characters mark a line break
pub const DEFAULT_LINE_BREAK_PATTERN: &str = r"\s\s";

pub const DEFAULT_LINE_BREAK_CHAR: &str = "\n";

// === Environment Variables ===

pub const ENV_NOTES_INBOX: &str = "notes_inbox";
pub const ENV_NOTES_HEADING_LEVEL: &str = "notes_heading_level";
pub const ENV_INSPIRATIONS_INBOX: &str = "inspirations_inbox";
pub const ENV_INSPIRATIONS_HEADING_LEVEL: &str = "inspirations_heading_level";
pub const ENV_TODOS_INBOX: &str = "todos_inbox";
pub const ENV_TODOS_HEADING_LEVEL: &str = "todos_heading_level";
pub const ENV_DELIMITER: &str = "delimiter";
pub const ENV_USE_PRIORITY_TAGS: &str = "use_priority_tags";
pub const ENV_PRIORITY_TAG: &str = "priority_tag";
pub const ENV_ADD_CREATION_DATE: &str = "add_creation_date";
pub const ENV_REPLACE_ABSOLUTE_DATES: &str = "replace_absolute_dates";
pub const ENV_REPLACE_RELATIVE_DATES: &str = "replace_relative_dates";
pub const ENV_CONVERT_SCHEDULED: &str = "convert_scheduled";
pub const ENV_SCHEDULED_PATTERN: &str = "scheduled_pattern";
pub const ENV_CONVERT_DEADLINES: &str = "convert_deadlines";
pub const ENV_DEADLINE_PATTERN: &str = "deadline_pattern";
pub const ENV_SMART_LINE_BREAK: &str = "smart_line_break";
pub const ENV_LINE_BREAK_PATTERN: &str = "line_break_pattern";
pub const ENV_CLEANUP_SPACES: &str = "cleanup_spaces";

/// Path of an optional YAML config file
pub const ENV_CONFIG_FILE: &str = "ORG_CAPTURE_CONFIG";

/// Fixes "now" for reproducible runs: YYYY-MM-DD HH:MM
pub const ENV_TIMESTAMP: &str = "ORG_CAPTURE_TIMESTAMP";

/// Log filter directives for the binary
pub const ENV_LOG: &str = "ORG_CAPTURE_LOG";

// === Config File ===

/// Directory under the platform config dir
pub const CONFIG_DIR_NAME: &str = "org-capture";

pub const CONFIG_FILE_NAME: &str = "config.yaml";
