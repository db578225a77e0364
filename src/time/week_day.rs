use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

/// A day of the week, numbered like in ISO 8601 (monday is 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum WeekDay {
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
    Sunday = 7,
}

impl WeekDay {
    pub const fn as_usize(&self) -> usize {
        *self as usize
    }

    #[must_use]
    pub(super) const fn from_number(number: usize) -> Self {
        match number {
            1 => Self::Monday,
            2 => Self::Tuesday,
            3 => Self::Wednesday,
            4 => Self::Thursday,
            5 => Self::Friday,
            6 => Self::Saturday,
            7 => Self::Sunday,
            _ => panic!("week day numbers are 1 to 7"),
        }
    }

    /// The week day `days` days after `self`.
    #[must_use]
    pub(super) const fn add_days(self, days: usize) -> Self {
        Self::from_number((self.as_usize() - 1 + days % 7) % 7 + 1)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "\"{input}\" is not a week day. Expected one of \
     `mon`, `tue`, `wed`, `thu`, `fri`, `sat` or `sun`"
)]
pub struct InvalidWeekDay {
    input: String,
}

impl FromStr for WeekDay {
    type Err = InvalidWeekDay;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        match string.to_lowercase().as_str() {
            "mon" => Ok(Self::Monday),
            "tue" => Ok(Self::Tuesday),
            "wed" => Ok(Self::Wednesday),
            "thu" => Ok(Self::Thursday),
            "fri" => Ok(Self::Friday),
            "sat" => Ok(Self::Saturday),
            "sun" => Ok(Self::Sunday),
            _ => Err(InvalidWeekDay {
                input: string.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for WeekDay {
    type Error = <Self as FromStr>::Err;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_str(value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn test_from_str() {
        assert_eq!("mon".parse(), Ok(WeekDay::Monday));
        assert_eq!("tue".parse(), Ok(WeekDay::Tuesday));
        assert_eq!("wed".parse(), Ok(WeekDay::Wednesday));
        assert_eq!("thu".parse(), Ok(WeekDay::Thursday));
        assert_eq!("fri".parse(), Ok(WeekDay::Friday));
        assert_eq!("sat".parse(), Ok(WeekDay::Saturday));
        assert_eq!("sun".parse(), Ok(WeekDay::Sunday));
    }

    #[test]
    fn test_from_str_is_case_insensitive() {
        assert_eq!("TUE".parse(), Ok(WeekDay::Tuesday));
        assert_eq!("Wed".parse(), Ok(WeekDay::Wednesday));
        assert_eq!("sUn".parse(), Ok(WeekDay::Sunday));
    }

    #[test]
    fn test_from_str_rejects_everything_else() {
        for input in ["", "m", "mo", "monday", "tues", "die", "8", " mon"] {
            assert!(input.parse::<WeekDay>().is_err(), "\"{}\" should be rejected", input);
        }
    }

    #[test]
    fn test_add_days() {
        assert_eq!(WeekDay::Monday.add_days(0), WeekDay::Monday);
        assert_eq!(WeekDay::Monday.add_days(1), WeekDay::Tuesday);
        assert_eq!(WeekDay::Saturday.add_days(2), WeekDay::Monday);
        assert_eq!(WeekDay::Sunday.add_days(7), WeekDay::Sunday);
        assert_eq!(WeekDay::Friday.add_days(700), WeekDay::Friday);
    }
}
