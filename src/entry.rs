//! Formatted entry and its rendering

use std::fmt;
use std::path::Path;

use serde::Serialize;

/// A captured entry after formatting, ready to be rendered
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormattedEntry {
    /// Stars and space in front of the heading
    pub heading_prefix: String,
    /// Heading after priority extraction
    pub heading: String,
    /// Cleaned body, `None` when the capture had no delimiter
    pub body: Option<String>,
    /// e.g. `DEADLINE: <2024-01-08 Mon>`
    pub deadline: Option<String>,
    /// e.g. `SCHEDULED: <2024-01-04 Thu>`
    pub scheduled: Option<String>,
    /// Property drawer recording the capture time
    pub creation_stamp: Option<String>,
}

impl FormattedEntry {
    /// Render the entry as org text.
    ///
    /// Deadline and scheduled share one planning line when both are present.
    /// The body line is always written, empty when there is no body.
    pub fn render(&self) -> String {
        let mut text = format!("{}{}", self.heading_prefix, self.heading);

        if let Some(deadline) = &self.deadline {
            text.push('\n');
            text.push_str(deadline);
        }
        if let Some(scheduled) = &self.scheduled {
            text.push(if self.deadline.is_some() { ' ' } else { '\n' });
            text.push_str(scheduled);
        }
        if let Some(stamp) = &self.creation_stamp {
            text.push('\n');
            text.push_str(stamp);
        }
        text.push('\n');
        text.push_str(self.body.as_deref().unwrap_or(""));

        text
    }

    /// Confirmation shown after the entry was written to `target`
    pub fn message(&self, target: &Path) -> String {
        let file = target
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| target.display().to_string());

        match &self.body {
            Some(body) => format!("Added '{}\n{}' to {}.", self.heading, body, file),
            None => format!("Added '{}' to {}.", self.heading, file),
        }
    }
}

impl fmt::Display for FormattedEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
