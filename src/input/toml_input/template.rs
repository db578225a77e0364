use std::path::Path;

use serde::Deserialize;

/// The `[template]` section of the configuration file.
#[derive(Debug, Clone, Deserialize)]
pub struct Template {
    file: String,
    fee_tier: FeeTier,
}

impl Template {
    /// The form file, relative to the configuration file.
    pub fn file(&self) -> &Path {
        Path::new(&self.file)
    }

    pub fn fee_tier(&self) -> FeeTier {
        self.fee_tier
    }
}

/// The fee column of the form that the bill belongs into.
///
/// The template has one fee column per hourly rate. Which one is used
/// is declared explicitly in the configuration instead of being looked
/// up by comparing the hourly fee against hardcoded amounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum FeeTier {
    #[serde(rename = "650")]
    Fee650,
    #[serde(rename = "900")]
    Fee900,
    #[serde(rename = "1150")]
    Fee1150,
    #[serde(rename = "1350")]
    Fee1350,
    #[serde(rename = "1500")]
    Fee1500,
}

impl FeeTier {
    /// The name of the field holding the fee of the `row`th record (1-based).
    #[must_use]
    pub fn fee_row(&self, row: usize) -> String {
        let prefix = match self {
            Self::Fee650 => "650Row",
            Self::Fee900 => "900Row",
            Self::Fee1150 => "1150Row",
            Self::Fee1350 => "1350Row",
            Self::Fee1500 => "1500Row",
        };

        format!("{}{}", prefix, row)
    }

    /// The name of the field holding the fee total for this tier.
    #[must_use]
    pub fn total_fee_field(&self) -> &'static str {
        match self {
            Self::Fee650 => "stunden1",
            Self::Fee900 => "stunden2",
            Self::Fee1150 => "stunden3",
            Self::Fee1350 => "stunden4",
            Self::Fee1500 => "stunden5",
        }
    }
}
