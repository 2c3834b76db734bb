//! Display Formatting
//!
//! Money, timestamps and placeholders as shown in tables and cards.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

pub const CURRENCY: &str = "FCFA";

/// Thousands separators, at most two decimals: 1500000.5 -> "1,500,000.5"
pub fn format_amount(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }
    let rounded = (value * 100.0).round() / 100.0;
    let negative = rounded < 0.0;
    let abs = rounded.abs();
    let whole = abs.trunc() as u64;
    let cents = ((abs - abs.trunc()) * 100.0).round() as u64;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let mut out = String::new();
    if negative && (whole > 0 || cents > 0) {
        out.push('-');
    }
    out.push_str(&grouped);
    match cents {
        0 => {}
        c if c % 10 == 0 => out.push_str(&format!(".{}", c / 10)),
        c => out.push_str(&format!(".{:02}", c)),
    }
    out
}

pub fn format_money(value: f64) -> String {
    format!("{} {}", format_amount(value), CURRENCY)
}

fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local());
    }
    for pattern in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, pattern) {
            return Some(dt);
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// "2024-05-02 10:00"; unparseable input is shown as-is, missing as "-"
pub fn format_timestamp(raw: Option<&str>) -> String {
    match raw.filter(|r| !r.trim().is_empty()) {
        None => "-".to_string(),
        Some(r) => parse_timestamp(r)
            .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| r.to_string()),
    }
}

/// "2024-05-02"; same fallbacks as [`format_timestamp`]
pub fn format_date(raw: Option<&str>) -> String {
    match raw.filter(|r| !r.trim().is_empty()) {
        None => "-".to_string(),
        Some(r) => parse_timestamp(r)
            .map(|dt| dt.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| r.to_string()),
    }
}

/// Optional text or a dash
pub fn or_dash(value: Option<&str>) -> String {
    value
        .filter(|v| !v.trim().is_empty())
        .unwrap_or("-")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(0.0), "0");
        assert_eq!(format_amount(999.0), "999");
        assert_eq!(format_amount(1000.0), "1,000");
        assert_eq!(format_amount(1500000.75), "1,500,000.75");
        assert_eq!(format_amount(12.5), "12.5");
        assert_eq!(format_amount(12.006), "12.01");
        assert_eq!(format_amount(-4250.0), "-4,250");
        assert_eq!(format_amount(f64::NAN), "0");
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(45000.0), "45,000 FCFA");
    }

    #[test]
    fn test_format_timestamp() {
        assert_eq!(format_timestamp(Some("2024-05-02T10:15:00.000000Z")), "2024-05-02 10:15");
        assert_eq!(format_timestamp(Some("2024-05-02 08:30:59")), "2024-05-02 08:30");
        assert_eq!(format_timestamp(Some("2024-05-02")), "2024-05-02 00:00");
        assert_eq!(format_timestamp(Some("yesterday")), "yesterday");
        assert_eq!(format_timestamp(None), "-");
        assert_eq!(format_timestamp(Some("")), "-");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(Some("2023-11-20T09:00:00+01:00")), "2023-11-20");
        assert_eq!(format_date(None), "-");
    }

    #[test]
    fn test_or_dash() {
        assert_eq!(or_dash(Some("Warehouse A")), "Warehouse A");
        assert_eq!(or_dash(Some("  ")), "-");
        assert_eq!(or_dash(None), "-");
    }
}
