use std::cmp;
use std::str::FromStr;
use std::time::Duration;

use derive_more::Display;
use serde::{de, Deserialize};
use thiserror::Error;

use crate::utils::StrExt;

/// A wall-clock time of day, without a date attached to it.
#[derive(Debug, Copy, Clone, Display, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[display("{hour:02}:{minute:02}")]
pub struct TimeStamp {
    hour: u8,
    minute: u8,
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum InvalidTimeStamp {
    #[error("\"{input}\" is not a valid time. Expected format: \"HH:MM\"")]
    ParseError { input: String },
    #[error("time is out of range: {hour:02}:{minute:02}")]
    OutOfRange { hour: u8, minute: u8 },
}

impl TimeStamp {
    #[must_use]
    pub fn new(hour: u8, minute: u8) -> Result<Self, InvalidTimeStamp> {
        if hour > 23 || minute > 59 {
            return Err(InvalidTimeStamp::OutOfRange { hour, minute });
        }

        Ok(Self { hour, minute })
    }

    // the maximum TimeStamp is 23:59, which would be 23 * 60 + 59 = 1439
    #[must_use]
    fn as_minutes(&self) -> u16 {
        self.hour as u16 * 60 + self.minute as u16
    }

    /// Returns `true` if `self` is strictly after `other`.
    #[must_use]
    pub fn is_after(&self, other: &Self) -> bool {
        self.as_minutes() > other.as_minutes()
    }

    /// The duration between the two time stamps, regardless of their order.
    pub fn elapsed(&self, other: &Self) -> Duration {
        let minutes = cmp::max(self.as_minutes(), other.as_minutes())
            - cmp::min(self.as_minutes(), other.as_minutes());

        Duration::from_secs(minutes as u64 * 60)
    }
}

impl FromStr for TimeStamp {
    type Err = InvalidTimeStamp;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        let parse_error = || InvalidTimeStamp::ParseError {
            input: string.to_string(),
        };

        if let [Some(hour), Some(minute)] = string.split_exact::<2>(":") {
            let hour = hour.parse().map_err(|_| parse_error())?;
            let minute = minute.parse().map_err(|_| parse_error())?;

            Self::new(hour, minute)
        } else {
            Err(parse_error())
        }
    }
}

impl<'de> Deserialize<'de> for TimeStamp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        FromStr::from_str(&s).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn test_display() {
        assert_eq!(TimeStamp::new(8, 5).unwrap().to_string(), "08:05");
        assert_eq!(TimeStamp::new(19, 30).unwrap().to_string(), "19:30");
    }

    #[test]
    fn test_from_str() {
        assert_eq!("18:00".parse(), TimeStamp::new(18, 0));
        assert_eq!("08:05".parse(), TimeStamp::new(8, 5));
        assert_eq!("8:05".parse(), TimeStamp::new(8, 5));
    }

    #[test]
    fn test_from_str_rejects_garbage() {
        for input in ["", "18", "18:", ":30", "18-00", "24:00", "18:60", "18:00:00"] {
            assert!(
                input.parse::<TimeStamp>().is_err(),
                "\"{}\" should be rejected",
                input
            );
        }
    }

    #[test]
    fn test_elapsed() {
        let start = TimeStamp::new(18, 0).unwrap();
        let end = TimeStamp::new(19, 30).unwrap();

        assert_eq!(start.elapsed(&end), Duration::from_secs(90 * 60));
        assert_eq!(end.elapsed(&start), Duration::from_secs(90 * 60));
        assert_eq!(start.elapsed(&start), Duration::ZERO);
    }
}
