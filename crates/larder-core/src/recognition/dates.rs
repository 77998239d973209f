//! Date extraction from recognized label text.
//!
//! Three pattern families are recognized: numeric day-first (`15/04/2025`,
//! `15-04-25`, `15.04.2025`), numeric year-first (`2025/04/15`) and
//! month-name forms (`15 Apr 2025`, `15-APR-2025`, `April 15, 2025`,
//! `Apr 2025`). Matches are reported in text order; where two patterns
//! start at the same position the longer one wins.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use super::RecognitionResult;

const MONTHS: &str = "jan(?:uary)?|feb(?:ruary)?|mar(?:ch)?|apr(?:il)?|may|june?|july?|aug(?:ust)?|sep(?:t(?:ember)?)?|oct(?:ober)?|nov(?:ember)?|dec(?:ember)?";

/// Characters inspected on each side of a match for an expiry keyword.
const KEYWORD_WINDOW: usize = 20;

static DATE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        // D/M/Y
        r"(?i)\b\d{1,2}[/\-.]\d{1,2}[/\-.]\d{2,4}\b".to_string(),
        // Y/M/D
        r"(?i)\b\d{4}[/\-.]\d{1,2}[/\-.]\d{1,2}\b".to_string(),
        // 15 Apr 2025, 15th-APR-25
        format!(r"(?i)\b\d{{1,2}}(?:st|nd|rd|th)?[\s\-/.]*(?:{MONTHS})\.?[\s\-/.,]*\d{{2,4}}\b"),
        // April 15, 2025
        format!(r"(?i)\b(?:{MONTHS})\.?\s+\d{{1,2}}(?:st|nd|rd|th)?,?\s+\d{{4}}\b"),
        // Apr 2025
        format!(r"(?i)\b(?:{MONTHS})\.?[\s\-/.,]*\d{{4}}\b"),
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("date pattern is valid"))
    .collect()
});

static EXPIRY_KEYWORDS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:exp|expiry|expires|expiration|best\s+before|best\s+by|use\s+by|use\s+before|bb)\b",
    )
    .expect("keyword pattern is valid")
});

static DIGIT_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+").expect("digit pattern is valid"));

static LETTER_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z]+").expect("letter pattern is valid"));

/// A date-like substring located in recognized text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateMatch {
    /// Byte offset of the first character.
    pub start: usize,
    /// Byte offset one past the last character.
    pub end: usize,
    pub text: String,
}

/// All non-overlapping date matches, leftmost first.
pub fn find_date_matches(text: &str) -> Vec<DateMatch> {
    let mut spans: Vec<(usize, usize)> = DATE_PATTERNS
        .iter()
        .flat_map(|re| re.find_iter(text).map(|m| (m.start(), m.end())))
        .collect();
    spans.sort_by(|a, b| a.0.cmp(&b.0).then(b.1.cmp(&a.1)));

    let mut matches = Vec::new();
    let mut last_end = 0;
    for (start, end) in spans {
        if start < last_end {
            continue;
        }
        last_end = end;
        matches.push(DateMatch {
            start,
            end,
            text: text[start..end].to_string(),
        });
    }
    matches
}

/// Pick the date substring from recognized text.
///
/// Without `expiry_only` the first match wins. With it, the first match
/// with an expiry keyword within 20 characters either side is preferred,
/// falling back to the first match.
pub fn extract_date(text: &str, expiry_only: bool) -> RecognitionResult {
    let matches = find_date_matches(text);

    let chosen = if expiry_only {
        matches
            .iter()
            .find(|m| has_expiry_keyword(text, m))
            .or_else(|| matches.first())
    } else {
        matches.first()
    };

    chosen.map_or(RecognitionResult::NotFound, |m| {
        RecognitionResult::DateFound(m.text.clone())
    })
}

fn has_expiry_keyword(text: &str, m: &DateMatch) -> bool {
    let before: Vec<char> = text[..m.start].chars().rev().take(KEYWORD_WINDOW).collect();
    let before: String = before.into_iter().rev().collect();
    let after: String = text[m.end..].chars().take(KEYWORD_WINDOW).collect();

    EXPIRY_KEYWORDS.is_match(&before) || EXPIRY_KEYWORDS.is_match(&after)
}

/// Convert a matched date substring into a calendar date.
///
/// Numeric dates are day-first unless the first group has four digits.
/// Two-digit years are 20YY. A month-and-year form resolves to the last
/// day of that month. Returns `None` for anything that is not a real date.
pub fn parse_date_text(text: &str) -> Option<NaiveDate> {
    let digits: Vec<&str> = DIGIT_RUN.find_iter(text).map(|m| m.as_str()).collect();

    if let Some(month) = month_from_text(text) {
        return match digits.as_slice() {
            [year] => last_day_of_month(expand_year(year)?, month),
            [day, year] => NaiveDate::from_ymd_opt(expand_year(year)?, month, day.parse().ok()?),
            _ => None,
        };
    }

    match digits.as_slice() {
        [year, month, day] if year.len() == 4 => {
            NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, day.parse().ok()?)
        }
        [day, month, year] => NaiveDate::from_ymd_opt(
            expand_year(year)?,
            month.parse().ok()?,
            day.parse().ok()?,
        ),
        _ => None,
    }
}

fn month_from_text(text: &str) -> Option<u32> {
    LETTER_RUN.find_iter(text).find_map(|word| {
        let prefix: String = word.as_str().chars().take(3).collect::<String>().to_lowercase();
        match prefix.as_str() {
            "jan" => Some(1),
            "feb" => Some(2),
            "mar" => Some(3),
            "apr" => Some(4),
            "may" => Some(5),
            "jun" => Some(6),
            "jul" => Some(7),
            "aug" => Some(8),
            "sep" => Some(9),
            "oct" => Some(10),
            "nov" => Some(11),
            "dec" => Some(12),
            _ => None,
        }
    })
}

fn expand_year(year: &str) -> Option<i32> {
    let value: i32 = year.parse().ok()?;
    match year.len() {
        2 => Some(2000 + value),
        4 => Some(value),
        _ => None,
    }
}

fn last_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)?.pred_opt()
}
