use thiserror::Error;

use crate::bill::Record;
use crate::input::Config;
use crate::time::BillingPeriod;

/// A bill for one class and one billing period.
///
/// The participant counts are paired positionally with the days of the period
/// that fall on the class week day, in ascending order. The pairing is strict:
/// a `Bill` can only be constructed when there is exactly one count per
/// session, so `records` never yields a partial sequence.
pub struct Bill<'a> {
    config: &'a Config,
    period: BillingPeriod,
    participant_counts: Vec<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "expected {expected} participant counts for {period} \
     (one per session), got {actual}"
)]
pub struct CountMismatch {
    period: BillingPeriod,
    expected: usize,
    actual: usize,
}

impl<'a> Bill<'a> {
    pub fn new(
        config: &'a Config,
        period: BillingPeriod,
        participant_counts: Vec<u32>,
    ) -> Result<Self, CountMismatch> {
        let expected = period.matching_days(config.class().weekday()).count();

        if participant_counts.len() != expected {
            return Err(CountMismatch {
                period,
                expected,
                actual: participant_counts.len(),
            });
        }

        Ok(Self {
            config,
            period,
            participant_counts,
        })
    }

    pub fn config(&self) -> &Config {
        self.config
    }

    pub fn period(&self) -> BillingPeriod {
        self.period
    }

    /// Iterates over the billable sessions in ascending date order.
    ///
    /// Sessions without participants are skipped, but still consume their
    /// position in the pairing of counts to days.
    pub fn records(&self) -> impl Iterator<Item = Record> + '_ {
        let class = self.config.class();

        self.period
            .matching_days(class.weekday())
            .zip(self.participant_counts.iter().copied())
            .filter(|(_, count)| *count > 0)
            .map(|(day, count)| {
                let hours = class.duration_hours();

                Record::new(day, hours, hours * class.hourly_fee(), count)
            })
    }

    pub fn total_hours(&self) -> f64 {
        self.records().map(|record| record.hours()).sum()
    }

    pub fn total_fee(&self) -> f64 {
        self.records().map(|record| record.fee()).sum()
    }

    /// The file name (without extension) the generated bill is saved under,
    /// unless that name is already taken.
    #[must_use]
    pub fn default_file_name_stem(&self) -> String {
        format!(
            "Trainerabrechnung {} {} {}-{:02}",
            self.config.instructor().name(),
            self.config.class().name(),
            self.period.year(),
            self.period.month().as_usize(),
        )
    }
}
