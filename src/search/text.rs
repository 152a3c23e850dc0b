//! Text helpers used when projecting records into searchable text and display strings.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;

/// Display format for dates, e.g. `Mar 5, 2025`.
const DISPLAY_DATE_FORMAT: &str = "%b %-d, %Y";

/// Strip HTML tags from rich text, preserving content.
pub fn strip_html(html: &str) -> String {
    static HTML_TAG_RE: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"<[^>]*>").expect("Failed to compile HTML tag regex"));

    let text = HTML_TAG_RE.replace_all(html, " ");

    // Collapse runs of whitespace left behind by removed tags
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Format an ISO 8601 date or timestamp for display.
///
/// Accepts RFC 3339 timestamps, naive `YYYY-MM-DDTHH:MM:SS` timestamps and
/// plain `YYYY-MM-DD` dates. Anything else is returned trimmed but unchanged.
pub fn format_date(raw: &str) -> String {
    let raw = raw.trim();

    let date = DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.date_naive())
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
                .map(|dt| dt.date())
                .ok()
        })
        .or_else(|| NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok());

    match date {
        Some(date) => date.format(DISPLAY_DATE_FORMAT).to_string(),
        None => raw.to_string(),
    }
}

/// Format an optional date, yielding an empty string when absent.
pub fn format_optional_date(raw: Option<&str>) -> String {
    raw.map(format_date).unwrap_or_default()
}

/// Join fields with single spaces, using an empty string for each missing field.
///
/// Missing fields still contribute their separator so the assembled text
/// lines up with how the portal built it.
pub fn join_fields<'a, I>(fields: I) -> String
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    fields
        .into_iter()
        .map(|field| field.unwrap_or(""))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Truncate to at most `max_chars` characters, appending `...` when cut.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut truncated: String = text.chars().take(max_chars).collect();
    truncated.push_str("...");
    truncated
}
