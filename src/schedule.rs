//! Deadline and scheduled tags
//!
//! A tag such as `DL: ` directly in front of a resolved timestamp is lifted
//! out of the body and rewritten to its org keyword (`DEADLINE: <...>`).

use regex::{Regex, RegexBuilder};

use crate::constants as C;

/// A compiled tag: literal prefix plus the org keyword it becomes
#[derive(Debug, Clone)]
pub struct TagRule {
    regex: Regex,
    keyword: String,
}

impl TagRule {
    /// Compile a rule for `pattern` (matched literally, case-insensitive)
    pub fn new(pattern: &str, keyword: impl Into<String>) -> Result<Self, regex::Error> {
        let regex = RegexBuilder::new(&format!(
            "{}({})",
            regex::escape(pattern),
            C::RESOLVED_TIMESTAMP_REGEX
        ))
        .case_insensitive(true)
        .build()?;
        Ok(Self { regex, keyword: keyword.into() })
    }

    pub fn deadline() -> Self {
        Self::new(C::DEFAULT_DEADLINE_PATTERN, C::DEFAULT_DEADLINE_KEYWORD)
            .expect("valid default deadline pattern")
    }

    pub fn scheduled() -> Self {
        Self::new(C::DEFAULT_SCHEDULED_PATTERN, C::DEFAULT_SCHEDULED_KEYWORD)
            .expect("valid default scheduled pattern")
    }

    /// Lift the first tagged timestamp out of `text`.
    ///
    /// Returns the rewritten tag (`DEADLINE: <2024-01-08 Mon>`) and the text
    /// with that segment removed. Without a match the text is returned as is.
    pub fn extract(&self, text: &str) -> (Option<String>, String) {
        let Some(caps) = self.regex.captures(text) else {
            return (None, text.to_string());
        };
        let (Some(whole), Some(stamp)) = (caps.get(0), caps.get(1)) else {
            return (None, text.to_string());
        };
        let tagged = format!("{}{}", self.keyword, stamp.as_str());
        let rest = format!("{}{}", &text[..whole.start()], &text[whole.end()..]);
        (Some(tagged), rest)
    }
}

/// Extract a `pattern`-tagged timestamp and rewrite it to `keyword`
pub fn extract_tagged(text: &str, pattern: &str, keyword: &str) -> Result<(Option<String>, String), regex::Error> {
    Ok(TagRule::new(pattern, keyword)?.extract(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_deadline() {
        let (deadline, rest) = TagRule::deadline().extract("DL: <2024-01-08 Mon> visit museum");
        assert_eq!(deadline.as_deref(), Some("DEADLINE: <2024-01-08 Mon>"));
        assert_eq!(rest, " visit museum");
    }

    #[test]
    fn test_extract_scheduled_with_time() {
        let (scheduled, rest) = TagRule::scheduled().extract("meet S: <2024-01-04 Thu 10:30> at office");
        assert_eq!(scheduled.as_deref(), Some("SCHEDULED: <2024-01-04 Thu 10:30>"));
        assert_eq!(rest, "meet  at office");
    }

    #[test]
    fn test_tag_is_case_insensitive() {
        let (deadline, _) = TagRule::deadline().extract("dl: <2024-01-08 Mon>");
        assert_eq!(deadline.as_deref(), Some("DEADLINE: <2024-01-08 Mon>"));
    }

    #[test]
    fn test_tag_needs_resolved_date() {
        let text = "DL: next week maybe";
        let (deadline, rest) = TagRule::deadline().extract(text);
        assert_eq!(deadline, None);
        assert_eq!(rest, text);
    }

    #[test]
    fn test_only_first_segment_removed() {
        let (deadline, rest) =
            TagRule::deadline().extract("DL: <2024-01-08 Mon> or DL: <2024-01-09 Tue>");
        assert_eq!(deadline.as_deref(), Some("DEADLINE: <2024-01-08 Mon>"));
        assert_eq!(rest, " or DL: <2024-01-09 Tue>");
    }

    #[test]
    fn test_deadline_then_scheduled() {
        let body = "DL: <2024-01-04 Thu> S: <2024-01-03 Wed> exhibition";
        let (deadline, body) = TagRule::deadline().extract(body);
        let (scheduled, body) = TagRule::scheduled().extract(&body);
        assert_eq!(deadline.as_deref(), Some("DEADLINE: <2024-01-04 Thu>"));
        assert_eq!(scheduled.as_deref(), Some("SCHEDULED: <2024-01-03 Wed>"));
        assert_eq!(body, "  exhibition");
    }

    #[test]
    fn test_extract_tagged_custom_pattern() {
        let (due, rest) = extract_tagged("due: <2024-01-08 Mon> pay rent", "due: ", "DEADLINE: ").unwrap();
        assert_eq!(due.as_deref(), Some("DEADLINE: <2024-01-08 Mon>"));
        assert_eq!(rest, " pay rent");
    }

    #[test]
    fn test_pattern_is_literal() {
        let (tag, _) = extract_tagged("a.b <2024-01-08 Mon>", "a.b ", "X: ").unwrap();
        assert!(tag.is_some());
        let (tag, _) = extract_tagged("axb <2024-01-08 Mon>", "a.b ", "X: ").unwrap();
        assert!(tag.is_none());
    }
}
