use core::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::time::{Month, WeekDay, Year};
use crate::utils::StrExt;

/// The month a bill is generated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BillingPeriod {
    year: Year,
    month: Month,
}

impl BillingPeriod {
    #[must_use]
    pub fn new(year: impl Into<Year>, month: Month) -> Self {
        Self {
            year: year.into(),
            month,
        }
    }

    pub const fn year(&self) -> Year {
        self.year
    }

    pub const fn month(&self) -> Month {
        self.month
    }

    /// Iterates over all days of the period that fall on the given week day,
    /// in ascending order.
    pub fn matching_days(&self, week_day: WeekDay) -> impl Iterator<Item = usize> + Clone + '_ {
        (1..=self.year.number_of_days_in_month(self.month))
            .filter(move |day| self.year.week_day(self.month, *day) == week_day)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("\"{input}\" is not a valid billing period. Expected format: \"MM/YYYY\"")]
pub struct InvalidPeriod {
    input: String,
}

fn is_number(string: &str) -> bool {
    !string.is_empty() && string.bytes().all(|b| b.is_ascii_digit())
}

impl FromStr for BillingPeriod {
    type Err = InvalidPeriod;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        let parse_error = || InvalidPeriod {
            input: string.to_string(),
        };

        let [Some(month), Some(year)] = string.split_exact::<2>("/") else {
            return Err(parse_error());
        };

        // the month has 1 or 2 digits, the year exactly 4
        if month.len() > 2 || !is_number(month) || year.len() != 4 || !is_number(year) {
            return Err(parse_error());
        }

        let month = month
            .parse::<usize>()
            .ok()
            .and_then(|number| Month::try_from(number).ok())
            .ok_or_else(parse_error)?;
        let year = Year::new(year.parse().map_err(|_| parse_error())?);

        Ok(Self { year, month })
    }
}

impl fmt::Display for BillingPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.month, self.year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    fn period(input: &str) -> Result<BillingPeriod, InvalidPeriod> {
        input.parse()
    }

    #[test]
    fn test_from_str() {
        assert_eq!(
            period("3/2024"),
            Ok(BillingPeriod::new(2024, Month::March))
        );
        assert_eq!(
            period("03/2024"),
            Ok(BillingPeriod::new(2024, Month::March))
        );
        assert_eq!(
            period("12/1999"),
            Ok(BillingPeriod::new(1999, Month::December))
        );
    }

    #[test]
    fn test_from_str_rejects_wrong_shapes() {
        for input in [
            "", "/", "3/", "/2024", "3-2024", "3/24", "3/20245", "003/2024", "3/2024 ", " 3/2024",
            "3/2024/", "a/2024", "3/y2024", "3.0/2024",
        ] {
            assert!(period(input).is_err(), "\"{}\" should be rejected", input);
        }
    }

    #[test]
    fn test_from_str_rejects_out_of_range_months() {
        assert!(period("0/2024").is_err());
        assert!(period("13/2024").is_err());
        assert!(period("99/2024").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(period("03/2024").unwrap().to_string(), "3/2024");
    }

    #[test]
    fn test_matching_days() {
        // march 2024 has four tuesdays
        let period = BillingPeriod::new(2024, Month::March);
        assert_eq!(
            period.matching_days(WeekDay::Tuesday).collect::<Vec<_>>(),
            vec![5, 12, 19, 26]
        );
        // ...and five fridays
        assert_eq!(
            period.matching_days(WeekDay::Friday).collect::<Vec<_>>(),
            vec![1, 8, 15, 22, 29]
        );
    }

    #[test]
    fn test_matching_days_in_leap_february() {
        // february 2024 starts and ends on a thursday
        let period = BillingPeriod::new(2024, Month::February);
        assert_eq!(
            period.matching_days(WeekDay::Thursday).collect::<Vec<_>>(),
            vec![1, 8, 15, 22, 29]
        );

        let period = BillingPeriod::new(2023, Month::February);
        assert_eq!(
            period.matching_days(WeekDay::Tuesday).collect::<Vec<_>>(),
            vec![7, 14, 21, 28]
        );
    }

    #[test]
    fn test_matching_days_is_restartable() {
        let period = BillingPeriod::new(2024, Month::March);
        let days = period.matching_days(WeekDay::Tuesday);

        assert_eq!(
            days.clone().collect::<Vec<_>>(),
            days.collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_matching_days_properties() {
        for year in 1999..=2031 {
            for month in Month::months() {
                let period = BillingPeriod::new(year, month);
                let days_in_month = period.year().number_of_days_in_month(month);

                let mut total = 0;
                for week_day in 1..=7 {
                    let week_day = WeekDay::from_number(week_day);
                    let days: Vec<_> = period.matching_days(week_day).collect();

                    // between 4 and 5 occurrences, strictly increasing, all in range
                    assert!(days.len() == 4 || days.len() == 5);
                    assert!(days.windows(2).all(|pair| pair[0] < pair[1]));
                    assert!(days.iter().all(|day| (1..=days_in_month).contains(day)));

                    total += days.len();
                }

                // every day of the month matches exactly one week day
                assert_eq!(total, days_in_month, "days of {}", period);
            }
        }
    }
}
