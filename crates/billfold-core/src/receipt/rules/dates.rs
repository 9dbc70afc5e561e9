//! Date extraction with locale-aware pattern tiers.

use chrono::{Datelike, NaiveDate};

use super::patterns::{DATE_PATTERNS, DateLayout};
use crate::models::receipt::Language;

/// Extract the receipt date, falling back to the reference date.
///
/// Patterns are evaluated in declared order; within a pattern only the
/// first match in the text is considered, and a match failing validation
/// does not block later patterns. The reference date supplies the
/// default year for the Chinese month-day form and the upper bound of
/// the accepted year range.
pub fn extract_date(text: &str, language: Language, today: NaiveDate) -> NaiveDate {
    for pattern in DATE_PATTERNS.iter().filter(|p| p.scope.applies(language)) {
        let Some(caps) = pattern.regex.captures(text) else {
            continue;
        };
        let Some(date) = resolve_date(&caps, pattern.layout, today) else {
            continue;
        };
        if date.year() >= 2000 && date.year() <= today.year() + 1 {
            return date;
        }
    }

    today
}

/// Interpret capture groups according to the pattern's declared layout.
fn resolve_date(
    caps: &regex::Captures<'_>,
    layout: DateLayout,
    today: NaiveDate,
) -> Option<NaiveDate> {
    let (year, month, day): (i32, u32, u32) = match layout {
        DateLayout::YearMonthDay | DateLayout::ChineseFull => (
            caps[1].parse().ok()?,
            caps[2].parse().ok()?,
            caps[3].parse().ok()?,
        ),
        DateLayout::MonthDayYear => (
            expand_year(caps[3].parse().ok()?),
            caps[1].parse().ok()?,
            caps[2].parse().ok()?,
        ),
        DateLayout::MonthNameDayYear => (
            caps[3].parse().ok()?,
            month_number(&caps[1])?,
            caps[2].parse().ok()?,
        ),
        DateLayout::DayMonthYear => (
            expand_year(caps[3].parse().ok()?),
            caps[2].parse().ok()?,
            caps[1].parse().ok()?,
        ),
        DateLayout::ChineseMonthDay => {
            (today.year(), caps[1].parse().ok()?, caps[2].parse().ok()?)
        }
    };

    NaiveDate::from_ymd_opt(year, month, day)
}

/// Expand a two-digit year: anything above 50 belongs to the 1900s.
fn expand_year(year: i32) -> i32 {
    if year < 100 {
        if year > 50 { 1900 + year } else { 2000 + year }
    } else {
        year
    }
}

fn month_number(abbrev: &str) -> Option<u32> {
    match abbrev.to_lowercase().as_str() {
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
}
