use serde::Deserialize;
use thiserror::Error;

/// The `[instructor]` section of the configuration file.
#[derive(Debug, Clone, Deserialize)]
#[serde(try_from = "UncheckedInstructor")]
pub struct Instructor {
    name: String,
    address: Vec<String>,
    iban: String,
}

impl Instructor {
    /// The full name of the instructor, as it should appear on the bill.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// One or two address lines, in the order they appear on the form.
    pub fn address(&self) -> &[String] {
        &self.address
    }

    pub fn iban(&self) -> &str {
        &self.iban
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("the instructor address must have 1 or 2 lines, got {lines}")]
pub struct InvalidAddress {
    lines: usize,
}

#[derive(Debug, Clone, Deserialize)]
struct UncheckedInstructor {
    name: String,
    address: Vec<String>,
    iban: String,
}

impl TryFrom<UncheckedInstructor> for Instructor {
    type Error = InvalidAddress;

    fn try_from(unchecked: UncheckedInstructor) -> Result<Self, Self::Error> {
        if unchecked.address.is_empty() || unchecked.address.len() > 2 {
            return Err(InvalidAddress {
                lines: unchecked.address.len(),
            });
        }

        Ok(Self {
            name: unchecked.name,
            address: unchecked.address,
            iban: unchecked.iban,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize() {
        let instructor: Instructor = toml::from_str(concat!(
            "name = \"Max Mustermann\"\n",
            "address = [\"Musterstraße 1\", \"38106 Braunschweig\"]\n",
            "iban = \"DE02120300000000202051\"\n",
        ))
        .expect("instructor should be valid");

        assert_eq!(instructor.name(), "Max Mustermann");
        assert_eq!(instructor.address().len(), 2);
        assert_eq!(instructor.iban(), "DE02120300000000202051");
    }

    #[test]
    fn test_single_address_line_is_allowed() {
        let instructor: Result<Instructor, _> = toml::from_str(concat!(
            "name = \"Max Mustermann\"\n",
            "address = [\"Musterstraße 1\"]\n",
            "iban = \"DE02120300000000202051\"\n",
        ));

        assert!(instructor.is_ok());
    }

    #[test]
    fn test_address_line_count_is_checked() {
        for address in ["[]", "[\"a\", \"b\", \"c\"]"] {
            let instructor: Result<Instructor, _> = toml::from_str(&format!(
                "name = \"Max Mustermann\"\naddress = {}\niban = \"DE02\"\n",
                address
            ));

            assert!(instructor.is_err(), "address {} should be rejected", address);
        }
    }
}
