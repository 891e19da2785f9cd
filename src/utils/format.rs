//! Format - Formatting Utilities

use chrono::{DateTime, Utc};

/// Format a number with thousand separators
pub fn format_number(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let len = digits.len();
    let mut result = String::new();

    if n < 0 {
        result.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }

    result
}

/// Format a timestamp as a relative age like "2m ago" or "3h ago"
pub fn format_relative_age(timestamp: &DateTime<Utc>, now: &DateTime<Utc>) -> String {
    let minutes = (*now - *timestamp).num_minutes();

    if minutes < 1 {
        "Just now".to_string()
    } else if minutes < 60 {
        format!("{}m ago", minutes)
    } else if minutes < 1440 {
        format!("{}h ago", minutes / 60)
    } else {
        timestamp.format("%Y-%m-%d").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1247), "1,247");
        assert_eq!(format_number(1234567), "1,234,567");
        assert_eq!(format_number(-1500), "-1,500");
    }

    #[test]
    fn test_format_number_small_negatives() {
        assert_eq!(format_number(-500), "-500");
        assert_eq!(format_number(-42), "-42");
        assert_eq!(format_number(-1234567), "-1,234,567");
    }

    #[test]
    fn test_format_relative_age() {
        let now = Utc.with_ymd_and_hms(2025, 9, 18, 12, 0, 0).single().expect("valid");
        let just_now = Utc.with_ymd_and_hms(2025, 9, 18, 11, 59, 30).single().expect("valid");
        let minutes = Utc.with_ymd_and_hms(2025, 9, 18, 11, 45, 0).single().expect("valid");
        let hours = Utc.with_ymd_and_hms(2025, 9, 18, 9, 0, 0).single().expect("valid");
        let days = Utc.with_ymd_and_hms(2025, 9, 10, 12, 0, 0).single().expect("valid");

        assert_eq!(format_relative_age(&just_now, &now), "Just now");
        assert_eq!(format_relative_age(&minutes, &now), "15m ago");
        assert_eq!(format_relative_age(&hours, &now), "3h ago");
        assert_eq!(format_relative_age(&days, &now), "2025-09-10");
    }
}
