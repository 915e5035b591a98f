use chrono::{DateTime, NaiveDateTime};

/// Renders an account creation timestamp as "March 5, 2024", keeping the
/// calendar day of the timestamp's own offset. Unparsable input is shown as-is.
pub fn format_join_date(date_str: &str) -> String {
    let date = DateTime::parse_from_rfc3339(date_str)
        .map(|dt| dt.date_naive())
        .or_else(|_| NaiveDateTime::parse_from_str(date_str, "%Y-%m-%dT%H:%M:%S").map(|dt| dt.date()))
        .or_else(|_| NaiveDateTime::parse_from_str(date_str, "%Y-%m-%dT%H:%M:%S%.f").map(|dt| dt.date()));
    match date {
        Ok(date) => date.format("%B %-d, %Y").to_string(),
        Err(_) => date_str.to_string(),
    }
}

/// Avatar fallback letter: the first character of the name, uppercased.
pub fn avatar_initial(name: &str) -> String {
    name.trim()
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_else(|| "?".to_string())
}

pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn format_error_message(message: &str) -> String {
    message
        .trim_start_matches("Error: ")
        .trim()
        .to_string()
}
