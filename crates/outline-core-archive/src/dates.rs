//! Finish dates.

use chrono::{NaiveDate, NaiveDateTime};

/// Parse a `@done(...)` value with the first matching format.
///
/// Each format is tried as a date-time first and as a plain date second, so `%Y-%m-%d` yields
/// midnight of that day.
pub fn parse_finished_date<S: AsRef<str>>(value: &str, formats: &[S]) -> Option<NaiveDateTime> {
    let value = value.trim();
    formats.iter().find_map(|format| {
        let format = format.as_ref();
        NaiveDateTime::parse_from_str(value, format)
            .ok()
            .or_else(|| {
                NaiveDate::parse_from_str(value, format)
                    .ok()
                    .and_then(|date| date.and_hms_opt(0, 0, 0))
            })
    })
}

/// Stable sort by `key`, newest first. Entries without a date go last.
pub fn sort_newest_first<T, F>(entries: &mut [T], key: F)
where
    F: Fn(&T) -> Option<NaiveDateTime>,
{
    entries.sort_by(|a, b| key(b).cmp(&key(a)));
}
