// ============================================================================
// FORMAT - Display helpers for dates and amounts
// ============================================================================

use chrono::{DateTime, NaiveDate, NaiveDateTime};

pub const INVALID_DATE: &str = "تاريخ غير صالح";
pub const NOTHING: &str = "لا يوجد";

/// Parse what the API stores: RFC 3339 timestamps or plain `YYYY-MM-DD`
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.date());
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

/// `DD/MM/YYYY` for cards
pub fn format_date(value: &str) -> String {
    match parse_date(value) {
        Some(date) => date.format("%d/%m/%Y").to_string(),
        None => INVALID_DATE.to_string(),
    }
}

/// Optional date, `لا يوجد` when absent
pub fn format_optional_date(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => format_date(v),
        _ => NOTHING.to_string(),
    }
}

/// Value for an `<input type="date">`
pub fn to_input_date(value: &str) -> String {
    parse_date(value)
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

/// Amounts without a trailing `.0`
pub fn format_amount(value: Option<f64>) -> String {
    match value {
        Some(v) if v.fract() == 0.0 => format!("{}", v as i64),
        Some(v) => format!("{:.2}", v),
        None => "-".to_string(),
    }
}

/// Free text, `لا يوجد` when empty
pub fn or_nothing(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.to_string(),
        _ => NOTHING.to_string(),
    }
}
