use core::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

use thiserror::Error;

use crate::time::{Month, WeekDay, Year};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date {
    year: Year,
    month: Month,
    day: usize,
}

impl Date {
    pub fn new(year: impl Into<Year>, month: Month, day: usize) -> Result<Self, InvalidDate> {
        let year = year.into();
        if year.number_of_days_in_month(month) < day || day == 0 {
            return Err(InvalidDate { year, month, day });
        }

        Ok(Self { year, month, day })
    }

    /// The current date, according to the system clock (in UTC).
    #[must_use]
    pub fn today() -> Self {
        let elapsed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system clock should not be set before 1970");

        Self::from_days_since_epoch(elapsed.as_secs() as usize / (24 * 60 * 60))
    }

    #[must_use]
    fn from_days_since_epoch(days: usize) -> Self {
        let mut remaining = days;

        let mut year = Year::new(1970);
        while remaining >= year.days() {
            remaining -= year.days();
            year = year.next();
        }

        let mut month = Month::January;
        while remaining >= year.number_of_days_in_month(month) {
            remaining -= year.number_of_days_in_month(month);
            month = month.next();
        }

        Self {
            year,
            month,
            day: remaining + 1,
        }
    }

    pub fn formatted(&self, f: &str) -> String {
        f.replace("{year}", &format!("{:04}", self.year()))
            .replace("{month}", &format!("{:02}", self.month()))
            .replace("{day}", &format!("{:02}", self.day()))
    }

    pub const fn week_day(&self) -> WeekDay {
        self.year.week_day(self.month, self.day)
    }

    pub const fn year(&self) -> Year {
        self.year
    }

    pub const fn month(&self) -> Month {
        self.month
    }

    pub const fn day(&self) -> usize {
        self.day
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{day:02} is not a valid day for {year:04}-{month:02}")]
pub struct InvalidDate {
    year: Year,
    month: Month,
    day: usize,
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.year.as_usize(),
            self.month.as_usize(),
            self.day
        )
    }
}
