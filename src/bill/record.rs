/// One billable session: a day of the month on which the class took place
/// and had at least one participant.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    day: usize,
    hours: f64,
    fee: f64,
    participant_count: u32,
}

impl Record {
    #[must_use]
    pub fn new(day: usize, hours: f64, fee: f64, participant_count: u32) -> Self {
        Self {
            day,
            hours,
            fee,
            participant_count,
        }
    }

    /// The day of the month the session took place on.
    pub fn day(&self) -> usize {
        self.day
    }

    pub fn hours(&self) -> f64 {
        self.hours
    }

    pub fn fee(&self) -> f64 {
        self.fee
    }

    pub fn participant_count(&self) -> u32 {
        self.participant_count
    }
}
