use crate::enums::Gender;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A person record ready for insertion into the store.
///
/// This is an immutable value object: the gender label is resolved to its
/// lookup-table id once, at construction, and the fields are only readable
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    full_name: String,
    birth_date: NaiveDate,
    gender_id: i32,
}

impl Person {
    /// Builds a person record, mapping the gender to its seeded row id.
    pub fn new(full_name: impl Into<String>, birth_date: NaiveDate, gender: Gender) -> Self {
        Self {
            full_name: full_name.into(),
            birth_date,
            gender_id: gender.id(),
        }
    }

    /// The full name, `Surname FirstName MiddleName`.
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn birth_date(&self) -> NaiveDate {
        self.birth_date
    }

    /// The foreign key into the `gender` lookup table.
    pub fn gender_id(&self) -> i32 {
        self.gender_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructor_resolves_gender_once() {
        let date = NaiveDate::from_ymd_opt(1995, 1, 1).unwrap();
        let person = Person::new("Fedorov Ivan Petrovich", date, Gender::Female);
        assert_eq!(person.full_name(), "Fedorov Ivan Petrovich");
        assert_eq!(person.birth_date(), date);
        assert_eq!(person.gender_id(), Gender::Female.id());
    }
}
