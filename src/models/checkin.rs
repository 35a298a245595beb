use super::timestamp_pattern::TimestampPattern;
use chrono::{DateTime, TimeZone};
use serde::Serialize;
use std::fmt::Display;

/// A confirmed check-in. Lives in memory only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckInRecord {
    pub timestamp: String,
}

impl CheckInRecord {
    pub fn at<Tz>(instant: &DateTime<Tz>, pattern: TimestampPattern) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        Self {
            timestamp: pattern.format(instant),
        }
    }
}
