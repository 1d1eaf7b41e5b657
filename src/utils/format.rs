use chrono::{DateTime, NaiveDate};

/// Shown for empty hearing and filing dates.
pub const NOT_AVAILABLE: &str = "Not Available";

/// Shown for documents that carry no date at all.
pub const NO_DATE: &str = "N/A";

const WIRE_DATE_FORMAT: &str = "%Y-%m-%d";
const DISPLAY_DATE_FORMAT: &str = "%d %b %Y";

/// Formats a wire date (`2024-03-05`) as `05 Mar 2024`.
///
/// Empty input becomes [`NOT_AVAILABLE`]; values the upstream service
/// sends in an unexpected shape are passed through unchanged so the
/// original text stays visible.
pub fn format_date(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return NOT_AVAILABLE.to_string();
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, WIRE_DATE_FORMAT) {
        return date.format(DISPLAY_DATE_FORMAT).to_string();
    }

    if let Ok(stamp) = DateTime::parse_from_rfc3339(trimmed) {
        return stamp.date_naive().format(DISPLAY_DATE_FORMAT).to_string();
    }

    raw.to_string()
}

/// Formats a document date, which may be missing entirely.
pub fn format_document_date(raw: Option<&str>) -> String {
    match raw {
        Some(value) if !value.trim().is_empty() => format_date(value),
        _ => NO_DATE.to_string(),
    }
}

/// Upper-cases the first character, leaving the rest untouched
/// (`order` becomes `Order`).
pub fn capitalize_first(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
