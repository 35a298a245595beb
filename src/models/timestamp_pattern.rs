use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Pattern used to print the confirmed check-in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimestampPattern {
    /// DD-MM-YYYY HH:mm
    Minutes,
    /// DD-MM-YYYY HH:mm:ss
    Seconds,
}

impl TimestampPattern {
    pub fn chrono_format(&self) -> &'static str {
        match self {
            TimestampPattern::Minutes => "%d-%m-%Y %H:%M",
            TimestampPattern::Seconds => "%d-%m-%Y %H:%M:%S",
        }
    }

    pub fn format<Tz>(&self, instant: &DateTime<Tz>) -> String
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        instant.format(self.chrono_format()).to_string()
    }
}
