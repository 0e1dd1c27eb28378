//! Display formatting shared by the browser and terminal front ends

use chrono::{DateTime, Datelike, Local, NaiveDate};

use crate::model::{Address, StructuredAddress};

/// Placeholder for missing values
pub const DASH: &str = "—";

/// Single-line rendering of an address; empty or missing becomes [`DASH`]
pub fn format_address(address: Option<&Address>) -> String {
    let text = match address {
        None => String::new(),
        Some(Address::Text(s)) => s.trim().to_string(),
        Some(Address::Structured(parts)) => join_address(parts),
        Some(Address::Other(serde_json::Value::Null)) => String::new(),
        Some(Address::Other(value)) => value.to_string(),
    };
    if text.is_empty() {
        DASH.to_string()
    } else {
        text
    }
}

fn join_address(parts: &StructuredAddress) -> String {
    [
        &parts.house_name,
        &parts.house_number,
        &parts.street_name,
        &parts.place,
    ]
    .into_iter()
    .filter_map(|p| p.as_deref().map(str::trim).filter(|s| !s.is_empty()))
    .collect::<Vec<_>>()
    .join(", ")
}

/// Parse a date of birth given as `YYYY-MM-DD` or a full RFC 3339 timestamp
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    let prefix = raw.get(..10).unwrap_or(raw);
    NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok()
}

/// Whole years between `dob` and `today`; `None` when unparseable or in the future
pub fn age_on(dob: &str, today: NaiveDate) -> Option<u32> {
    let born = parse_date(dob)?;
    let mut years = today.year() - born.year();
    if (today.month(), today.day()) < (born.month(), born.day()) {
        years -= 1;
    }
    u32::try_from(years).ok()
}

/// Age column text as of the local date
pub fn format_age(dob: Option<&str>) -> String {
    dob.and_then(|d| age_on(d, Local::now().date_naive()))
        .map(|a| a.to_string())
        .unwrap_or_else(|| DASH.to_string())
}

/// Local `YYYY-MM-DD HH:MM` for RFC 3339 input, anything else verbatim
pub fn format_timestamp(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw.trim()) {
        Ok(dt) => dt.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Text for an optional field
pub fn or_dash(value: Option<&str>) -> &str {
    value.map(str::trim).filter(|v| !v.is_empty()).unwrap_or(DASH)
}

/// Origin of the backend serving uploaded files: the API base URL without
/// its trailing `/api`
pub fn backend_origin(base_url: &str) -> &str {
    let trimmed = base_url.trim_end_matches('/');
    trimmed.strip_suffix("/api").unwrap_or(trimmed)
}

/// Resolve a server-relative upload path against the backend origin
pub fn absolute_url(origin: &str, url: &str) -> Option<String> {
    let url = url.trim();
    if url.is_empty() {
        return None;
    }
    let lower = url.to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        return Some(url.to_string());
    }
    let path = url.strip_prefix('/').unwrap_or(url);
    if origin.is_empty() {
        Some(format!("/{}", path))
    } else {
        Some(format!("{}/{}", origin.trim_end_matches('/'), path))
    }
}
