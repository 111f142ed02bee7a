//! Date and duration formatting.
//!
//! Dates arrive as `YYYY-MM-DD` strings and are read as local calendar
//! dates, never as UTC instants, so a date is never shifted by a time zone
//! offset. Elapsed time is measured between local midnights (or local "now")
//! using flat 365-day years and flat 30-day months.

use crate::domain::model::Locale;
use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};

const MS_PER_DAY: i64 = 24 * 60 * 60 * 1000;
const MS_PER_YEAR: i64 = 365 * MS_PER_DAY;
const MS_PER_MONTH: i64 = 30 * MS_PER_DAY;

/// Parses a possibly partial `YYYY-MM-DD` string into a calendar date.
///
/// Missing month or day default to 1. Out-of-range components roll over
/// (`2020-13-01` is January 2021, `2020-03-00` is the last day of February).
/// Returns `None` for blank input or non-numeric components.
pub fn parse_local_date(date: &str) -> Option<NaiveDate> {
    let trimmed = date.trim();
    if trimmed.is_empty() {
        return None;
    }

    let parsed = parse_components(trimmed);
    if parsed.is_none() {
        tracing::debug!(date = trimmed, "unparseable date, treating as absent");
    }
    parsed
}

fn parse_components(date: &str) -> Option<NaiveDate> {
    let mut parts = date.split('-').map(str::trim);
    let year: i64 = parts.next()?.parse().ok()?;
    let month: i64 = match parts.next() {
        Some(p) => p.parse().ok()?,
        None => 1,
    };
    let day: i64 = match parts.next() {
        Some(p) => p.parse().ok()?,
        None => 1,
    };

    let total_months = year.checked_mul(12)?.checked_add(month.checked_sub(1)?)?;
    let first_of_month = NaiveDate::from_ymd_opt(
        i32::try_from(total_months.div_euclid(12)).ok()?,
        (total_months.rem_euclid(12) + 1) as u32,
        1,
    )?;
    first_of_month.checked_add_signed(TimeDelta::try_days(day.checked_sub(1)?)?)
}

fn local_midnight(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

fn elapsed_ms(from: NaiveDateTime, to: NaiveDateTime) -> i64 {
    (to - from).num_milliseconds().abs()
}

/// `"marzo de 2020"` / `"March 2020"`; empty for absent or unparseable input.
pub fn format_date(date: &str, locale: Locale) -> String {
    let Some(date) = parse_local_date(date) else {
        return String::new();
    };

    let month = locale.month_name(date.month());
    match locale {
        Locale::Es => format!("{} de {}", month, date.year()),
        Locale::En => format!("{} {}", month, date.year()),
    }
}

/// `"<start> - <end>"`, with the locale's "Present" label for an open range.
pub fn format_date_range(start: &str, end: Option<&str>, locale: Locale) -> String {
    format_date_range_with(start, end, locale, locale.present())
}

/// Same as [`format_date_range`] with a caller-chosen open-range label.
pub fn format_date_range_with(
    start: &str,
    end: Option<&str>,
    locale: Locale,
    present_label: &str,
) -> String {
    let start = format_date(start, locale);
    let end = match end.filter(|e| !e.trim().is_empty()) {
        Some(end) => format_date(end, locale),
        None => present_label.to_string(),
    };

    format!("{} - {}", start, end)
}

/// Whole years between `date` and `now`, in either direction.
pub fn years_between(date: NaiveDate, now: NaiveDateTime) -> i64 {
    elapsed_ms(local_midnight(date), now) / MS_PER_YEAR
}

/// Thirty-day months between two instants, rounded up.
pub fn months_between(start: NaiveDateTime, end: NaiveDateTime) -> i64 {
    let ms = elapsed_ms(start, end);
    (ms + MS_PER_MONTH - 1) / MS_PER_MONTH
}

/// "Este año", "Hace 1 año", "Hace 7 años" (or the English equivalents).
pub fn time_ago(date: &str, now: NaiveDateTime, locale: Locale) -> String {
    let Some(date) = parse_local_date(date) else {
        return String::new();
    };

    match years_between(date, now) {
        0 => locale.this_year().to_string(),
        n => locale.years_ago(n),
    }
}

/// Length of a period as years and months, e.g. `"1 año 6 meses"`.
///
/// An absent or empty `end` means the period is still running and `now` is
/// used instead. Months are counted as flat 30-day blocks, rounded up, which
/// can differ by one from calendar months near month boundaries.
pub fn calculate_duration(
    start: &str,
    end: Option<&str>,
    now: NaiveDateTime,
    locale: Locale,
) -> String {
    let Some(start) = parse_local_date(start) else {
        return String::new();
    };
    let end = end
        .and_then(parse_local_date)
        .map(local_midnight)
        .unwrap_or(now);

    let total_months = months_between(local_midnight(start), end);
    let years = total_months / 12;
    let months = total_months % 12;

    if years > 0 {
        let mut out = format!("{} {}", years, locale.year_word(years));
        if months > 0 {
            out.push_str(&format!(" {} {}", months, locale.month_word(months)));
        }
        return out;
    }

    format!("{} {}", months, locale.month_word(months))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_parse_local_date_full_and_partial() {
        assert_eq!(
            parse_local_date("2020-03-15"),
            NaiveDate::from_ymd_opt(2020, 3, 15)
        );
        assert_eq!(parse_local_date("2020-03"), NaiveDate::from_ymd_opt(2020, 3, 1));
        assert_eq!(parse_local_date("2020"), NaiveDate::from_ymd_opt(2020, 1, 1));
        assert_eq!(parse_local_date(""), None);
        assert_eq!(parse_local_date("   "), None);
        assert_eq!(parse_local_date("2020-xx-01"), None);
    }

    #[test]
    fn test_parse_local_date_rolls_over() {
        assert_eq!(parse_local_date("2020-13-01"), NaiveDate::from_ymd_opt(2021, 1, 1));
        assert_eq!(parse_local_date("2020-03-00"), NaiveDate::from_ymd_opt(2020, 2, 29));
        assert_eq!(parse_local_date("2021-02-30"), NaiveDate::from_ymd_opt(2021, 3, 2));
        assert_eq!(parse_local_date("2020-00-10"), NaiveDate::from_ymd_opt(2019, 12, 10));
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("", Locale::Es), "");
        assert_eq!(format_date("2020-03-15", Locale::Es), "marzo de 2020");
        assert_eq!(format_date("2020-03-15", Locale::En), "March 2020");
    }

    #[test]
    fn test_format_date_keeps_calendar_day_at_boundaries() {
        // First and last instants of a month must not drift into a neighbour.
        assert_eq!(format_date("2020-01-01", Locale::Es), "enero de 2020");
        assert_eq!(format_date("2019-12-31", Locale::Es), "diciembre de 2019");
    }

    #[test]
    fn test_format_date_range() {
        assert_eq!(
            format_date_range("2019-01-01", None, Locale::Es),
            "enero de 2019 - Presente"
        );
        assert_eq!(
            format_date_range("2019-01-01", Some(""), Locale::En),
            "January 2019 - Present"
        );
        assert_eq!(
            format_date_range("2019-01-01", Some("2021-07-31"), Locale::Es),
            "enero de 2019 - julio de 2021"
        );
        assert_eq!(
            format_date_range_with("2019-01-01", None, Locale::Es, "Hoy"),
            "enero de 2019 - Hoy"
        );
    }

    #[test]
    fn test_time_ago_uses_flat_years() {
        let now = at(2024, 6, 15);
        assert_eq!(time_ago("", now, Locale::Es), "");
        assert_eq!(time_ago("2024-01-01", now, Locale::Es), "Este año");
        // 365 days back across a leap day is still one flat year
        assert_eq!(time_ago("2023-06-16", now, Locale::Es), "Hace 1 año");
        assert_eq!(time_ago("2023-06-17", now, Locale::Es), "Este año");
        assert_eq!(time_ago("2020-06-15", now, Locale::En), "4 years ago");
    }

    #[test]
    fn test_time_ago_is_symmetric() {
        let now = at(2024, 6, 15);
        assert_eq!(time_ago("2025-06-16", now, Locale::En), "1 year ago");
        assert_eq!(time_ago("2023-06-14", now, Locale::En), "1 year ago");
        assert_eq!(time_ago("2024-12-01", now, Locale::En), "This year");
        assert_eq!(time_ago("2027-06-15", now, Locale::Es), "Hace 3 años");
    }

    #[test]
    fn test_calculate_duration_thirty_day_months() {
        let now = at(2024, 6, 15);
        assert_eq!(
            calculate_duration("2020-01-01", Some("2020-01-01"), now, Locale::En),
            "0 months"
        );
        assert_eq!(calculate_duration("2020-01-01", Some("2020-01-31"), now, Locale::Es), "1 mes");
        // 31 days is just over one 30-day block, rounded up
        assert_eq!(
            calculate_duration("2020-01-01", Some("2020-02-01"), now, Locale::Es),
            "2 meses"
        );
    }

    #[test]
    fn test_calculate_duration_years() {
        let now = at(2024, 6, 15);
        // 517 days => 18 blocks of 30 days
        assert_eq!(
            calculate_duration("2020-01-01", Some("2021-06-01"), now, Locale::En),
            "1 year 6 months"
        );
        assert_eq!(calculate_duration("2020-01-01", Some("2020-12-26"), now, Locale::Es), "1 año");
        assert_eq!(
            calculate_duration("2020-01-01", Some("2021-01-01"), now, Locale::Es),
            "1 año 1 mes"
        );
        assert_eq!(calculate_duration("2020-01-01", Some("2021-12-01"), now, Locale::Es), "2 años");
    }

    #[test]
    fn test_calculate_duration_open_and_reversed() {
        let now = at(2024, 6, 15);
        assert_eq!(calculate_duration("2024-05-16", None, now, Locale::En), "1 month");
        assert_eq!(calculate_duration("2024-05-16", Some(""), now, Locale::En), "1 month");
        assert_eq!(
            calculate_duration("2020-01-31", Some("2020-01-01"), now, Locale::En),
            "1 month"
        );
        assert_eq!(calculate_duration("", Some("2020-01-01"), now, Locale::En), "");
    }
}
