//! Date resolution for captured text
//!
//! Turns day words ("tomorrow", "Montag") and absolute dates ("1.10",
//! "23.09.2014 12:00") into active org timestamps relative to a given day.

use std::collections::HashMap;

use chrono::{Datelike, Duration, NaiveDate, NaiveTime};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::constants as C;

/// Day names (English and German) mapped to their ordinal, Monday = 0
pub static WEEKDAYS: Lazy<HashMap<&'static str, u32>> = Lazy::new(|| {
    HashMap::from([
        ("montag", 0),
        ("monday", 0),
        ("dienstag", 1),
        ("tuesday", 1),
        ("mittwoch", 2),
        ("wednesday", 2),
        ("donnerstag", 3),
        ("thursday", 3),
        ("freitag", 4),
        ("friday", 4),
        ("samstag", 5),
        ("saturday", 5),
        ("sonntag", 6),
        ("sunday", 6),
    ])
});

/// Relative day words mapped to their offset from today
pub static RELATIVE_DAYS: Lazy<HashMap<&'static str, i64>> = Lazy::new(|| {
    HashMap::from([
        ("heute", 0),
        ("today", 0),
        ("morgen", 1),
        ("tomorrow", 1),
    ])
});

static DAY_TOKEN_RE: Lazy<Regex> = Lazy::new(|| {
    let mut keys: Vec<&str> = WEEKDAYS
        .keys()
        .chain(RELATIVE_DAYS.keys())
        .copied()
        .collect();
    keys.sort_unstable();
    Regex::new(&format!(r"(?i)\b({})\b", keys.join("|"))).expect("day tables form a valid pattern")
});

static FULL_DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(\d{1,2})\.(\d{1,2})\.(\d{4})\b").expect("valid date pattern"));

static SHORT_DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(\d{1,2})\.(\d{1,2})\b").expect("valid date pattern"));

static TRAILING_TIME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s(\d{2}):(\d{2})\b").expect("valid time pattern"));

// === Relative dates ===

/// Days from `today` until the next `target` weekday (1..=7, never 0)
pub fn days_until_weekday(today: NaiveDate, target: u32) -> i64 {
    let current = today.weekday().num_days_from_monday();
    let offset = if current == target {
        7
    } else if target < current {
        7 - (current - target)
    } else {
        target - current
    };
    i64::from(offset)
}

/// Resolve a single day word against `today`.
///
/// Returns `None` for words found in neither table.
pub fn resolve_token(token: &str, today: NaiveDate) -> Option<NaiveDate> {
    let key = token.to_lowercase();
    let offset = if let Some(&days) = RELATIVE_DAYS.get(key.as_str()) {
        days
    } else if let Some(&target) = WEEKDAYS.get(key.as_str()) {
        days_until_weekday(today, target)
    } else {
        return None;
    };
    today.checked_add_signed(Duration::days(offset))
}

/// Replace every whole-word day token in `text` with a timestamp rendered
/// through `date_format`.
///
/// Tokens are resolved first and substituted afterwards; a token that does
/// not resolve keeps its original text.
pub fn resolve_relative_dates(text: &str, today: NaiveDate, date_format: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;

    for m in DAY_TOKEN_RE.find_iter(text) {
        let Some(date) = resolve_token(m.as_str(), today) else {
            debug!(token = m.as_str(), "day token left unresolved");
            continue;
        };
        out.push_str(&text[last..m.start()]);
        out.push_str(&date.format(date_format).to_string());
        last = m.end();
    }

    out.push_str(&text[last..]);
    out
}

// === Absolute dates ===

/// A date fragment located in the text
#[derive(Debug, Clone, Copy, PartialEq)]
struct DateMatch {
    start: usize,
    end: usize,
    date: NaiveDate,
}

/// First valid `D.M.YYYY` fragment
fn find_full_date(text: &str) -> Option<DateMatch> {
    FULL_DATE_RE.captures_iter(text).find_map(|caps| {
        let whole = caps.get(0)?;
        let day = caps[1].parse().ok()?;
        let month = caps[2].parse().ok()?;
        let year = caps[3].parse().ok()?;
        match NaiveDate::from_ymd_opt(year, month, day) {
            Some(date) => Some(DateMatch { start: whole.start(), end: whole.end(), date }),
            None => {
                debug!(fragment = whole.as_str(), "skipping impossible date");
                None
            }
        }
    })
}

/// First valid `D.M` fragment, placed on its next occurrence after `today`
fn find_short_date(text: &str, today: NaiveDate) -> Option<DateMatch> {
    SHORT_DATE_RE.captures_iter(text).find_map(|caps| {
        let whole = caps.get(0)?;
        // "31.02.2024" is a broken full date, not a short one
        if is_followed_by_number(&text[whole.end()..]) {
            return None;
        }
        let day = caps[1].parse().ok()?;
        let month = caps[2].parse().ok()?;
        match next_occurrence(day, month, today) {
            Some(date) => Some(DateMatch { start: whole.start(), end: whole.end(), date }),
            None => {
                debug!(fragment = whole.as_str(), "skipping impossible date");
                None
            }
        }
    })
}

fn is_followed_by_number(rest: &str) -> bool {
    let mut chars = rest.chars();
    chars.next() == Some('.') && chars.next().is_some_and(|c| c.is_ascii_digit())
}

/// This year's `day.month` if it is still ahead of `today`, otherwise next year's
pub fn next_occurrence(day: u32, month: u32, today: NaiveDate) -> Option<NaiveDate> {
    match NaiveDate::from_ymd_opt(today.year(), month, day) {
        Some(date) if date > today => Some(date),
        _ => NaiveDate::from_ymd_opt(today.year() + 1, month, day),
    }
}

/// Time directly following a date, as (matched length, time)
fn trailing_time(rest: &str) -> Option<(usize, NaiveTime)> {
    let caps = TRAILING_TIME_RE.captures(rest)?;
    let hour = caps[1].parse().ok()?;
    let minute = caps[2].parse().ok()?;
    let time = NaiveTime::from_hms_opt(hour, minute, 0)?;
    Some((caps.get(0)?.end(), time))
}

/// Replace the first absolute date in `text` with an org timestamp.
///
/// `D.M.YYYY` wins over `D.M`. A time written right after the date lands
/// inside the same timestamp. Text without a valid date comes back unchanged.
pub fn resolve_absolute_dates(text: &str, today: NaiveDate) -> String {
    let Some(found) = find_full_date(text).or_else(|| find_short_date(text, today)) else {
        return text.to_string();
    };

    let mut stamp = format!("<{}", found.date.format(C::ABSOLUTE_DATE_FORMAT));
    let mut end = found.end;
    if let Some((len, time)) = trailing_time(&text[found.end..]) {
        stamp.push(' ');
        stamp.push_str(&time.format("%H:%M").to_string());
        end += len;
    }
    stamp.push('>');

    debug!(fragment = &text[found.start..end], timestamp = %stamp, "resolved absolute date");
    format!("{}{}{}", &text[..found.start], stamp, &text[end..])
}
