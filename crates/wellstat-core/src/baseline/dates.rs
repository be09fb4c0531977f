use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use tracing::debug;

/// Fallback month length when a period key cannot be parsed.
pub const FALLBACK_DAYS_IN_MONTH: u32 = 30;

/// Parse a period key from the baseline workbook.
///
/// Handles formats like:
/// - "2024-01-31" (ISO date)
/// - "2024-01-31T00:00:00" / "2024-01-31T00:00:00Z"
/// - "1/31/2024" (US spreadsheet export)
/// - "2024-01" -> first day of the month
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(d);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.date());
    }
    if let Ok(d) = NaiveDate::parse_from_str(s, "%m/%d/%Y") {
        return Some(d);
    }
    NaiveDate::parse_from_str(&format!("{s}-01"), "%Y-%m-%d").ok()
}

/// Number of days in the calendar month containing `date`.
///
/// Returns 30 if the date cannot be parsed.
pub fn days_in_month(date: &str) -> u32 {
    parse_date(date)
        .and_then(month_length)
        .unwrap_or(FALLBACK_DAYS_IN_MONTH)
}

fn month_length(date: NaiveDate) -> Option<u32> {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    let last = NaiveDate::from_ymd_opt(year, month, 1)?.pred_opt()?;
    Some(last.day())
}

/// Resolve a query date to one of the dataset's period keys.
///
/// A verbatim match wins. Otherwise the key closest in calendar days is
/// returned; on a tie the earlier key wins. Returns `None` when the query
/// is not a key and cannot be parsed, or when no key parses.
pub fn resolve_date<'a>(dates: &'a [String], query: &str) -> Option<&'a str> {
    if let Some(exact) = dates.iter().find(|d| d.as_str() == query) {
        return Some(exact.as_str());
    }

    let target = parse_date(query)?;

    let mut candidates: Vec<(NaiveDate, &str)> = dates
        .iter()
        .filter_map(|d| parse_date(d).map(|parsed| (parsed, d.as_str())))
        .collect();
    candidates.sort_by_key(|(parsed, _)| *parsed);

    let nearest = candidates
        .into_iter()
        .min_by_key(|(parsed, _)| (*parsed - target).num_days().abs())
        .map(|(_, key)| key);

    if let Some(key) = nearest {
        debug!(query, resolved = key, "no exact period match, using nearest");
    }
    nearest
}
