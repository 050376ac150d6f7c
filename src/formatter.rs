//! EntryFormatter - the capture formatting pipeline
//!
//! Body stages, in order:
//! 1. absolute dates (`1.10 15:00`)
//! 2. relative dates and weekdays (`tomorrow`, `Montag`)
//! 3. line break markers
//! 4. deadline, then scheduled tags
//! 5. double space collapse and edge trim
//!
//! The heading only goes through priority extraction.

use chrono::NaiveDateTime;
use regex::Regex;
use tracing::debug;

use crate::cleanup;
use crate::config::FormatConfig;
use crate::dates;
use crate::entry::FormattedEntry;
use crate::error::ConfigError;
use crate::heading;
use crate::schedule::TagRule;

/// Formats raw captures according to one immutable [`FormatConfig`]
#[derive(Debug, Clone)]
pub struct EntryFormatter {
    config: FormatConfig,
    priority: Regex,
    line_break: Regex,
    deadline: TagRule,
    scheduled: TagRule,
}

/// Body after the pipeline, with the tags it gave up
struct BodyParts {
    body: String,
    deadline: Option<String>,
    scheduled: Option<String>,
}

impl EntryFormatter {
    /// Compile the patterns of `config`.
    ///
    /// Every configuration problem surfaces here, never in [`format`](Self::format).
    pub fn new(config: FormatConfig) -> Result<Self, ConfigError> {
        config.validate_templates()?;

        let priority = heading::priority_regex(config.priority_tag).map_err(|source| {
            ConfigError::InvalidPattern {
                name: "priority tag",
                pattern: config.priority_tag.to_string(),
                source,
            }
        })?;
        let line_break = cleanup::line_break_regex(&config.line_break_pattern).map_err(|source| {
            ConfigError::InvalidPattern {
                name: "line break",
                pattern: config.line_break_pattern.clone(),
                source,
            }
        })?;
        let deadline = TagRule::new(&config.deadline_pattern, config.deadline_keyword.clone())
            .map_err(|source| ConfigError::InvalidPattern {
                name: "deadline",
                pattern: config.deadline_pattern.clone(),
                source,
            })?;
        let scheduled = TagRule::new(&config.scheduled_pattern, config.scheduled_keyword.clone())
            .map_err(|source| ConfigError::InvalidPattern {
                name: "scheduled",
                pattern: config.scheduled_pattern.clone(),
                source,
            })?;

        Ok(Self {
            config,
            priority,
            line_break,
            deadline,
            scheduled,
        })
    }

    /// Format one raw capture as of `now`
    pub fn format(&self, raw: &str, now: NaiveDateTime) -> FormattedEntry {
        let (heading, body) = heading::split(raw, &self.config.delimiter);

        let (body, deadline, scheduled) = match body {
            Some(body) => {
                let parts = self.format_body(&body, now);
                (Some(parts.body), parts.deadline, parts.scheduled)
            }
            None => (None, None, None),
        };

        let heading = if self.config.use_priority_tags {
            heading::extract_priority(&heading, &self.priority, &self.config.task_keywords)
        } else {
            heading
        };

        let creation_stamp = self
            .config
            .add_creation_date
            .then(|| now.format(&self.config.creation_date_format).to_string());

        FormattedEntry {
            heading_prefix: self.config.heading_prefix.clone(),
            heading,
            body,
            deadline,
            scheduled,
            creation_stamp,
        }
    }

    fn format_body(&self, body: &str, now: NaiveDateTime) -> BodyParts {
        let config = &self.config;
        let today = now.date();
        let mut body = body.to_string();

        if config.replace_absolute_dates {
            body = dates::resolve_absolute_dates(&body, today);
        }
        if config.replace_relative_dates {
            body = dates::resolve_relative_dates(&body, today, &config.date_format);
        }
        if config.smart_line_break {
            body = cleanup::convert_line_breaks(&body, &self.line_break, &config.line_break_char);
        }

        let mut deadline = None;
        if config.convert_deadlines {
            (deadline, body) = self.deadline.extract(&body);
        }
        let mut scheduled = None;
        if config.convert_scheduled {
            (scheduled, body) = self.scheduled.extract(&body);
        }
        debug!(deadline = ?deadline, scheduled = ?scheduled, "planning tags");

        if config.cleanup_spaces {
            body = cleanup::remove_double_spaces(&body);
            body = cleanup::trim_edges(&body);
        }

        BodyParts { body, deadline, scheduled }
    }
}
