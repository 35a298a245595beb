//! Clock access, kept in one place so tests can drive the flow with a fixed instant.

use chrono::{DateTime, Local};

pub fn now() -> DateTime<Local> {
    Local::now()
}

/// Render an RFC 3339 log date as `YYYY-MM-DDTHH:MM:SS+hh:mm`, or the raw value.
pub fn pretty_log_date(raw: &str) -> String {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.format("%FT%T%:z").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_dates_drop_fractional_seconds() {
        assert_eq!(
            pretty_log_date("2025-06-01T10:11:12.123456+02:00"),
            "2025-06-01T10:11:12+02:00"
        );
        assert_eq!(pretty_log_date("not a date"), "not a date");
    }
}
