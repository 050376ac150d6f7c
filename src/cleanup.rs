//! Whitespace handling for entry bodies

use once_cell::sync::Lazy;
use regex::{NoExpand, Regex, RegexBuilder};

use crate::constants as C;

static DOUBLE_SPACE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s\s").expect("valid whitespace pattern"));

/// Compile a line break marker; markers match case-insensitively
pub fn line_break_regex(pattern: &str) -> Result<Regex, regex::Error> {
    RegexBuilder::new(pattern).case_insensitive(true).build()
}

/// Default marker: two consecutive whitespace characters
pub fn default_line_break_regex() -> Regex {
    line_break_regex(C::DEFAULT_LINE_BREAK_PATTERN).expect("valid default line break pattern")
}

/// Replace every line break marker with `line_break`
pub fn convert_line_breaks(text: &str, marker: &Regex, line_break: &str) -> String {
    marker.replace_all(text, NoExpand(line_break)).into_owned()
}

/// Collapse two whitespace characters into one space.
///
/// Runs two passes so runs of three or four also end up as one space.
pub fn remove_double_spaces(text: &str) -> String {
    let once = DOUBLE_SPACE_RE.replace_all(text, " ");
    DOUBLE_SPACE_RE.replace_all(&once, " ").into_owned()
}

pub fn trim_edges(text: &str) -> String {
    text.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_convert_line_breaks_default() {
        let marker = default_line_break_regex();
        assert_eq!(
            convert_line_breaks("visit museum  bring camera", &marker, "\n"),
            "visit museum\nbring camera"
        );
    }

    #[test]
    fn test_convert_line_breaks_custom_marker() {
        let marker = line_break_regex(r"\s?//\s?").unwrap();
        assert_eq!(convert_line_breaks("one // two//three", &marker, "\n"), "one\ntwo\nthree");
    }

    #[test]
    fn test_convert_line_breaks_is_case_insensitive() {
        let marker = line_break_regex("<br>").unwrap();
        assert_eq!(convert_line_breaks("a<BR>b<br>c", &marker, "\n"), "a\nb\nc");
    }

    #[test]
    fn test_convert_line_breaks_keeps_dollar_literal() {
        let marker = line_break_regex("NL").unwrap();
        assert_eq!(convert_line_breaks("aNLb", &marker, "$1"), "a$1b");
    }

    #[test]
    fn test_remove_double_spaces() {
        assert_eq!(remove_double_spaces("a  b"), "a b");
        assert_eq!(remove_double_spaces("a   b"), "a b");
        assert_eq!(remove_double_spaces("a    b"), "a b");
        assert_eq!(remove_double_spaces("a b"), "a b");
    }

    #[test]
    fn test_trim_edges() {
        assert_eq!(trim_edges("  body text \n"), "body text");
    }

    proptest! {
        #[test]
        fn collapse_of_short_runs_matches_single_space(
            left in "[a-z]{1,8}",
            right in "[a-z]{1,8}",
            run in 2usize..=4,
        ) {
            let padded = format!("{left}{}{right}", " ".repeat(run));
            let double = format!("{left}  {right}");
            prop_assert_eq!(remove_double_spaces(&padded), remove_double_spaces(&double));
            prop_assert_eq!(remove_double_spaces(&padded), format!("{left} {right}"));
        }
    }
}
