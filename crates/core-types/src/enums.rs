use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The closed set of values held by the `gender` lookup table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Returns the row id of this gender in the seeded lookup table.
    ///
    /// Seeding inserts `male` then `female` into a fresh table, so the
    /// store's AUTO_INCREMENT assigns ids 1 and 2 in that order.
    pub fn id(&self) -> i32 {
        match self {
            Gender::Male => 1,
            Gender::Female => 2,
        }
    }

    /// Returns the label stored in the lookup table.
    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

impl FromStr for Gender {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            other => Err(CoreError::InvalidInput(
                "gender".to_string(),
                other.to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_ids_follow_insertion_order() {
        assert_eq!(Gender::Male.id(), 1);
        assert_eq!(Gender::Female.id(), 2);
    }

    #[test]
    fn labels_match_lookup_rows() {
        assert_eq!(Gender::Male.label(), "male");
        assert_eq!(Gender::Female.label(), "female");
    }

    #[test]
    fn parses_labels_case_insensitively() {
        assert_eq!("male".parse::<Gender>().unwrap(), Gender::Male);
        assert_eq!("Female".parse::<Gender>().unwrap(), Gender::Female);
        assert_eq!("MALE".parse::<Gender>().unwrap(), Gender::Male);
    }

    #[test]
    fn rejects_unknown_labels() {
        assert!("other".parse::<Gender>().is_err());
        assert!("".parse::<Gender>().is_err());
    }
}
