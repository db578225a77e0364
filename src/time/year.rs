use core::fmt;

use crate::time::{Month, WeekDay};

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub struct Year(usize);

impl Year {
    /// 0000-01-01 is used as the base date for all week day math,
    /// because it does not make sense to go past this date.
    /// In the proleptic gregorian calendar it falls on a saturday.
    const BASE_WEEK_DAY: WeekDay = WeekDay::Saturday;

    #[must_use]
    pub const fn new(year: usize) -> Self {
        Self(year)
    }

    #[must_use]
    pub const fn as_usize(&self) -> usize {
        self.0
    }

    /// A year that is not a leap year is a common year.
    pub const fn is_common_year(&self) -> bool {
        self.as_usize() % 4 != 0 || (self.as_usize() % 100 == 0 && self.as_usize() % 400 != 0)
    }

    /// A leap year is a calendar year that contains an additional day added to
    /// February, so it has 29 days instead of the regular 28 days.
    #[must_use]
    pub const fn is_leap_year(&self) -> bool {
        // https://en.wikipedia.org/wiki/Leap_year#Algorithm
        !self.is_common_year() && (self.as_usize() % 100 != 0 || self.as_usize() % 400 == 0)
    }

    #[must_use]
    pub const fn number_of_days_in_month(&self, month: Month) -> usize {
        match month {
            Month::January => 31,
            Month::February => {
                if self.is_leap_year() {
                    29
                } else {
                    28
                }
            }
            Month::March => 31,
            Month::April => 30,
            Month::May => 31,
            Month::June => 30,
            Month::July => 31,
            Month::August => 31,
            Month::September => 30,
            Month::October => 31,
            Month::November => 30,
            Month::December => 31,
        }
    }

    /// Returns the number of days in this year.
    #[must_use]
    pub const fn days(&self) -> usize {
        if self.is_leap_year() {
            366
        } else {
            365
        }
    }

    /// The number of days between 0000-01-01 and the first day of this year.
    ///
    /// Year 0 is divisible by 400 and therefore a leap year, which is why the
    /// leap day count below is off by one from the usual formula.
    pub(super) const fn days_since_base_date(&self) -> usize {
        let year = self.as_usize();

        let leap_days = if year == 0 {
            0
        } else {
            1 + (year - 1) / 4 - (year - 1) / 100 + (year - 1) / 400
        };

        year * 365 + leap_days
    }

    /// Calculate the week day of this year and the specified month and day.
    ///
    /// # Note
    ///
    /// This function assumes that the day is valid.
    #[must_use]
    pub const fn week_day(&self, month: Month, day: usize) -> WeekDay {
        let mut days = self.days_since_base_date();

        let mut current_month = Month::January;
        while !current_month.is_eq(&month) {
            days += self.number_of_days_in_month(current_month);
            current_month = current_month.next();
        }

        days += day - 1;

        Self::BASE_WEEK_DAY.add_days(days)
    }

    #[must_use]
    pub const fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<usize> for Year {
    fn from(value: usize) -> Self {
        Self::new(value)
    }
}

impl From<Year> for usize {
    fn from(value: Year) -> Self {
        value.as_usize()
    }
}
