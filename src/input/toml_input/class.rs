use serde::Deserialize;
use thiserror::Error;

use crate::time::{TimeStamp, WeekDay};

/// The `[class]` section of the configuration file: a class that takes place
/// once a week, at a fixed time.
#[derive(Debug, Clone, Deserialize)]
#[serde(try_from = "UncheckedClass")]
pub struct Class {
    name: String,
    weekday: WeekDay,
    time: TimeRange,
    hourly_fee: f64,
}

impl Class {
    /// The name of the sport, as it should appear on the bill.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The day of the week on which the class takes place.
    pub fn weekday(&self) -> WeekDay {
        self.weekday
    }

    pub fn time(&self) -> &TimeRange {
        &self.time
    }

    /// How much the instructor makes per hour (in euros).
    pub fn hourly_fee(&self) -> f64 {
        self.hourly_fee
    }

    /// How long one session takes, as a fractional number of hours.
    pub fn duration_hours(&self) -> f64 {
        self.time.duration().as_secs_f64() / 3600.0
    }
}

/// The start and end time of a session.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(try_from = "UncheckedTimeRange")]
pub struct TimeRange {
    start: TimeStamp,
    end: TimeStamp,
}

impl TimeRange {
    pub fn start(&self) -> TimeStamp {
        self.start
    }

    pub fn end(&self) -> TimeStamp {
        self.end
    }

    pub fn duration(&self) -> std::time::Duration {
        self.end.elapsed(&self.start)
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidClass {
    #[error("the class must end after it starts, got {start} - {end}")]
    EmptyTimeRange { start: TimeStamp, end: TimeStamp },
    #[error("the hourly fee must be positive, got {fee}")]
    NonPositiveFee { fee: f64 },
}

#[derive(Debug, Clone, Deserialize)]
struct UncheckedTimeRange {
    start: TimeStamp,
    end: TimeStamp,
}

impl TryFrom<UncheckedTimeRange> for TimeRange {
    type Error = InvalidClass;

    fn try_from(unchecked: UncheckedTimeRange) -> Result<Self, Self::Error> {
        if !unchecked.end.is_after(&unchecked.start) {
            return Err(InvalidClass::EmptyTimeRange {
                start: unchecked.start,
                end: unchecked.end,
            });
        }

        Ok(Self {
            start: unchecked.start,
            end: unchecked.end,
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
struct UncheckedClass {
    name: String,
    weekday: WeekDay,
    time: TimeRange,
    hourly_fee: f64,
}

impl TryFrom<UncheckedClass> for Class {
    type Error = InvalidClass;

    fn try_from(unchecked: UncheckedClass) -> Result<Self, Self::Error> {
        if unchecked.hourly_fee <= 0.0 {
            return Err(InvalidClass::NonPositiveFee {
                fee: unchecked.hourly_fee,
            });
        }

        Ok(Self {
            name: unchecked.name,
            weekday: unchecked.weekday,
            time: unchecked.time,
            hourly_fee: unchecked.hourly_fee,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    fn class(weekday: &str, start: &str, end: &str, fee: f64) -> Result<Class, toml::de::Error> {
        toml::from_str(&format!(
            concat!(
                "name = \"Jiu Jitsu\"\n",
                "weekday = \"{}\"\n",
                "time = {{ start = \"{}\", end = \"{}\" }}\n",
                "hourly_fee = {:?}\n",
            ),
            weekday, start, end, fee
        ))
    }

    #[test]
    fn test_deserialize() {
        let class = class("tue", "18:00", "19:30", 12.0).expect("class should be valid");

        assert_eq!(class.name(), "Jiu Jitsu");
        assert_eq!(class.weekday(), WeekDay::Tuesday);
        assert_eq!(class.time().start().to_string(), "18:00");
        assert_eq!(class.time().end().to_string(), "19:30");
        assert_eq!(class.hourly_fee(), 12.0);
    }

    #[test]
    fn test_duration_hours() {
        assert_eq!(
            class("tue", "18:00", "19:30", 12.0).unwrap().duration_hours(),
            1.5
        );
        assert_eq!(
            class("mon", "08:00", "10:00", 12.0).unwrap().duration_hours(),
            2.0
        );
        assert_eq!(
            class("fri", "17:15", "18:00", 12.0).unwrap().duration_hours(),
            0.75
        );
    }

    #[test]
    fn test_time_range_must_not_be_empty() {
        assert!(class("tue", "18:00", "18:00", 12.0).is_err());
        assert!(class("tue", "19:30", "18:00", 12.0).is_err());
    }

    #[test]
    fn test_hourly_fee_must_be_positive() {
        assert!(class("tue", "18:00", "19:30", 0.0).is_err());
        assert!(class("tue", "18:00", "19:30", -6.5).is_err());
    }
}
