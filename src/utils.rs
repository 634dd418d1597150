//! Formatting helpers shared by the view builders.

use std::fmt::Display;

use chrono::{DateTime, Duration, Local, NaiveDateTime, TimeZone, Utc};
use unicode_segmentation::UnicodeSegmentation;

use crate::constants::MISSING_VALUE;

/// Parse a backend timestamp.  Accepts RFC 3339 and the naive ISO-8601 form
/// (no offset, interpreted as UTC) the backend emits.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(naive.and_utc());
        }
    }
    chrono::NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Sort key for "newest first" ordering.  Unparseable or missing
/// timestamps sort last.
pub fn timestamp_key(raw: Option<&str>) -> Option<DateTime<Utc>> {
    raw.and_then(parse_timestamp)
}

/// Sort `items` newest first by the timestamp `key` extracts.  Stable, so
/// equal timestamps keep backend order.
pub fn sort_newest_first<T, F>(items: &mut [T], key: F)
where
    F: Fn(&T) -> Option<&str>,
{
    items.sort_by(|a, b| timestamp_key(key(b)).cmp(&timestamp_key(key(a))));
}

/// `HH:MM` on the operator's clock, or `--:--` when absent.
pub fn format_time(raw: Option<&str>) -> String {
    format_time_in(raw, &Local)
}

pub fn format_time_in<Tz>(raw: Option<&str>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    match raw.and_then(parse_timestamp) {
        Some(dt) => dt.with_timezone(tz).format("%H:%M").to_string(),
        None => "--:--".to_string(),
    }
}

/// Compact relative age: `agora`, `5 min`, `3 h`, `2 d`.
pub fn time_ago(raw: Option<&str>, now: DateTime<Utc>) -> String {
    let Some(then) = raw.and_then(parse_timestamp) else {
        return MISSING_VALUE.to_string();
    };
    let diff = now.signed_duration_since(then).max(Duration::zero());
    let minutes = diff.num_minutes();
    if minutes < 1 {
        return "agora".to_string();
    }
    if minutes < 60 {
        return format!("{} min", minutes);
    }
    let hours = minutes / 60;
    if hours < 24 {
        return format!("{} h", hours);
    }
    format!("{} d", hours / 24)
}

/// Cut `text` after `max` graphemes, appending `...` when anything was cut.
pub fn excerpt(text: &str, max: usize) -> String {
    let mut graphemes = text.graphemes(true);
    let head: String = graphemes.by_ref().take(max).collect();
    if graphemes.next().is_some() {
        format!("{}...", head)
    } else {
        head
    }
}

/// Up to two uppercase initials from the words of `name`, `?` when empty.
pub fn initials(name: &str) -> String {
    let letters: String = name
        .split_whitespace()
        .filter_map(|word| word.graphemes(true).next())
        .take(2)
        .collect::<String>()
        .to_uppercase();
    if letters.is_empty() {
        "?".to_string()
    } else {
        letters
    }
}

/// Split a comma-separated list, trimming entries and dropping empties.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn parses_backend_formats() {
        assert!(parse_timestamp("2024-06-01T10:00:00.123456").is_some());
        assert!(parse_timestamp("2024-06-01T10:00:00Z").is_some());
        assert!(parse_timestamp("2024-06-01").is_some());
        assert!(parse_timestamp("yesterday").is_none());
    }

    #[test]
    fn clock_time_follows_the_given_zone() {
        let brasilia = FixedOffset::west_opt(3 * 3600).unwrap();
        assert_eq!(format_time_in(Some("2024-06-01T15:30:00Z"), &brasilia), "12:30");
        assert_eq!(format_time_in(Some("2024-06-01T15:30:00"), &Utc), "15:30");
        assert_eq!(format_time_in(None, &brasilia), "--:--");

        let local = Utc
            .with_ymd_and_hms(2024, 6, 1, 15, 30, 0)
            .unwrap()
            .with_timezone(&Local)
            .format("%H:%M")
            .to_string();
        assert_eq!(format_time(Some("2024-06-01T15:30:00Z")), local);
    }

    #[test]
    fn relative_age_buckets() {
        assert_eq!(time_ago(Some("2024-06-01T11:59:30"), now()), "agora");
        assert_eq!(time_ago(Some("2024-06-01T11:15:00"), now()), "45 min");
        assert_eq!(time_ago(Some("2024-06-01T07:00:00"), now()), "5 h");
        assert_eq!(time_ago(Some("2024-05-29T12:00:00"), now()), "3 d");
        assert_eq!(time_ago(None, now()), "—");
    }

    #[test]
    fn newest_first_puts_unknown_last() {
        let mut rows = vec![
            ("a", Some("2024-01-01")),
            ("b", None),
            ("c", Some("2024-06-01")),
        ];
        sort_newest_first(&mut rows, |r| r.1);
        let order: Vec<_> = rows.iter().map(|r| r.0).collect();
        assert_eq!(order, vec!["c", "a", "b"]);
    }

    #[test]
    fn excerpt_counts_graphemes() {
        assert_eq!(excerpt("olá", 5), "olá");
        assert_eq!(excerpt("promoção", 4), "prom...");
    }

    #[test]
    fn initials_from_words() {
        assert_eq!(initials("ana maria souza"), "AM");
        assert_eq!(initials("  "), "?");
        assert_eq!(initials("élan"), "É");
    }

    #[test]
    fn list_splitting() {
        assert_eq!(split_list(" vip, ,clientes "), vec!["vip", "clientes"]);
        assert!(split_list("").is_empty());
    }
}
