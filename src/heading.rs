//! Heading handling: splitting a capture and extracting priority tokens

use regex::Regex;
use tracing::debug;

/// Split a raw capture into heading and optional body.
///
/// Only the first `delimiter` separates the two; later occurrences stay in
/// the body verbatim. The heading is trimmed at its edges.
pub fn split(raw: &str, delimiter: &str) -> (String, Option<String>) {
    if delimiter.is_empty() {
        return (raw.trim().to_string(), None);
    }
    match raw.split_once(delimiter) {
        Some((heading, body)) => {
            if body.contains(delimiter) {
                debug!(delimiter, "extra delimiters kept in body");
            }
            (heading.trim().to_string(), Some(body.to_string()))
        }
        None => (raw.trim().to_string(), None),
    }
}

/// Matches a priority token such as `#b` for the given marker character
pub fn priority_regex(tag: char) -> Result<Regex, regex::Error> {
    Regex::new(&format!(r"(?:^|\s){}(\p{{L}})(?:\s|$)", regex::escape(&tag.to_string())))
}

/// Move a priority token into an org priority cookie.
///
/// `TODO #b do it` becomes `TODO [#B] do it`; without a leading task keyword
/// the cookie goes first: `#a call` becomes `[#A] call`.
pub fn extract_priority(heading: &str, marker: &Regex, task_keywords: &[String]) -> String {
    let Some(caps) = marker.captures(heading) else {
        return heading.to_string();
    };
    let (Some(token), Some(letter)) = (caps.get(0), caps.get(1)) else {
        return heading.to_string();
    };
    let priority = letter.as_str().to_uppercase();

    let without = format!("{} {}", heading[..token.start()].trim_end(), heading[token.end()..].trim_start());
    let without = without.trim();

    let with_cookie = match leading_keyword(without, task_keywords) {
        Some(keyword) => {
            let rest = without[keyword.len()..].trim_start();
            format!("{} [#{}] {}", keyword, priority, rest)
        }
        None => format!("[#{}] {}", priority, without),
    };
    with_cookie.trim().to_string()
}

/// Task keyword the heading starts with, as a whole word
fn leading_keyword<'a>(heading: &str, task_keywords: &'a [String]) -> Option<&'a str> {
    task_keywords
        .iter()
        .map(String::as_str)
        .filter(|k| !k.is_empty())
        .find(|k| {
            heading
                .strip_prefix(k)
                .is_some_and(|rest| rest.is_empty() || rest.starts_with(char::is_whitespace))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn todo() -> Vec<String> {
        vec!["TODO".to_string()]
    }

    #[test]
    fn test_split_with_body() {
        let (heading, body) = split("Buy milk:: at the corner shop", ":: ");
        assert_eq!(heading, "Buy milk");
        assert_eq!(body.as_deref(), Some("at the corner shop"));
    }

    #[test]
    fn test_split_without_delimiter() {
        let (heading, body) = split("  Just a heading ", ":: ");
        assert_eq!(heading, "Just a heading");
        assert_eq!(body, None);
    }

    #[test]
    fn test_split_first_delimiter_only() {
        let (heading, body) = split("A:: b:: c", ":: ");
        assert_eq!(heading, "A");
        assert_eq!(body.as_deref(), Some("b:: c"));
    }

    #[test]
    fn test_split_empty_body() {
        let (heading, body) = split("Heading:: ", ":: ");
        assert_eq!(heading, "Heading");
        assert_eq!(body.as_deref(), Some(""));
    }

    #[test]
    fn test_split_empty_delimiter() {
        let (heading, body) = split("a:: b", "");
        assert_eq!(heading, "a:: b");
        assert_eq!(body, None);
    }

    #[test]
    fn test_priority_after_task_keyword() {
        let marker = priority_regex('#').unwrap();
        assert_eq!(extract_priority("TODO #b do it ", &marker, &todo()), "TODO [#B] do it");
        assert_eq!(extract_priority("TODO #A Plan trip", &marker, &todo()), "TODO [#A] Plan trip");
    }

    #[test]
    fn test_priority_without_task_keyword() {
        let marker = priority_regex('#').unwrap();
        assert_eq!(extract_priority("#c Read book", &marker, &todo()), "[#C] Read book");
        assert_eq!(extract_priority("Read book #a", &marker, &todo()), "[#A] Read book");
    }

    #[test]
    fn test_priority_keyword_must_be_whole_word() {
        let marker = priority_regex('#').unwrap();
        assert_eq!(extract_priority("TODOS #a list", &marker, &todo()), "[#A] TODOS list");
    }

    #[test]
    fn test_priority_custom_keywords() {
        let marker = priority_regex('#').unwrap();
        let keywords = vec!["TODO".to_string(), "NEXT".to_string()];
        assert_eq!(extract_priority("NEXT #b call", &marker, &keywords), "NEXT [#B] call");
    }

    #[test]
    fn test_no_priority_token() {
        let marker = priority_regex('#').unwrap();
        assert_eq!(extract_priority("TODO fix #123", &marker, &todo()), "TODO fix #123");
        assert_eq!(extract_priority("issue#a here", &marker, &todo()), "issue#a here");
    }

    #[test]
    fn test_priority_custom_marker() {
        let marker = priority_regex('!').unwrap();
        assert_eq!(extract_priority("TODO !a urgent", &marker, &todo()), "TODO [#A] urgent");
    }
}
