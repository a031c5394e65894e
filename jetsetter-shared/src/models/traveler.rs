use serde::{Deserialize, Serialize};
use std::fmt;

use crate::pii::Masked;

/// Gender values accepted by the booking provider
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Parse free-form input, ignoring case. Only the full words match.
    pub fn parse(input: &str) -> Option<Self> {
        match input.to_uppercase().as_str() {
            "MALE" => Some(Gender::Male),
            "FEMALE" => Some(Gender::Female),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "MALE",
            Gender::Female => "FEMALE",
        }
    }
}

/// One traveler on a flight booking, exactly as typed into the form.
///
/// Every field is raw text; an empty string means "not filled in".
#[derive(Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct TravelerRecord {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    /// `YYYY-MM-DD`
    pub date_of_birth: String,
    pub gender: String,
    pub email: String,
    pub phone: String,
}

/// Editable fields of a [`TravelerRecord`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TravelerField {
    FirstName,
    LastName,
    DateOfBirth,
    Gender,
    Email,
    Phone,
}

impl TravelerRecord {
    /// Empty record for the traveler at `position` (1-based)
    pub fn empty(position: usize) -> Self {
        Self {
            id: position.to_string(),
            ..Default::default()
        }
    }

    /// One empty record per traveler in the search, numbered from 1
    pub fn roster(count: usize) -> Vec<Self> {
        (1..=count).map(Self::empty).collect()
    }

    pub fn set(&mut self, field: TravelerField, value: impl Into<String>) {
        let value = value.into();
        match field {
            TravelerField::FirstName => self.first_name = value,
            TravelerField::LastName => self.last_name = value,
            TravelerField::DateOfBirth => self.date_of_birth = value,
            TravelerField::Gender => self.gender = value,
            TravelerField::Email => self.email = value,
            TravelerField::Phone => self.phone = value,
        }
    }

    pub fn has_required_fields(&self) -> bool {
        !self.first_name.is_empty()
            && !self.last_name.is_empty()
            && !self.date_of_birth.is_empty()
            && !self.gender.is_empty()
    }
}

impl fmt::Debug for TravelerRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TravelerRecord")
            .field("id", &self.id)
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("date_of_birth", &Masked(&self.date_of_birth))
            .field("gender", &self.gender)
            .field("email", &Masked(&self.email))
            .field("phone", &Masked(&self.phone))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gender_parse_ignores_case() {
        assert_eq!(Gender::parse("male"), Some(Gender::Male));
        assert_eq!(Gender::parse("Male"), Some(Gender::Male));
        assert_eq!(Gender::parse("FEMALE"), Some(Gender::Female));
        assert_eq!(Gender::parse("M"), None);
        assert_eq!(Gender::parse("other"), None);
        assert_eq!(Gender::parse(" male"), None);
    }

    #[test]
    fn test_roster_numbers_travelers_from_one() {
        let roster = TravelerRecord::roster(3);
        let ids: Vec<&str> = roster.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
        assert!(roster.iter().all(|t| !t.has_required_fields()));
    }

    #[test]
    fn test_set_updates_single_field() {
        let mut traveler = TravelerRecord::empty(1);
        traveler.set(TravelerField::FirstName, "Ada");
        traveler.set(TravelerField::Gender, "female");
        assert_eq!(traveler.first_name, "Ada");
        assert_eq!(traveler.gender, "female");
        assert!(traveler.last_name.is_empty());
    }

    #[test]
    fn test_debug_masks_contact() {
        let mut traveler = TravelerRecord::empty(1);
        traveler.set(TravelerField::Email, "ada@example.com");
        let debug = format!("{:?}", traveler);
        assert!(!debug.contains("ada@example.com"));
    }

    #[test]
    fn test_deserialize_form_json() {
        let json = r#"{"id":"1","firstName":"Ada","lastName":"Lovelace","dateOfBirth":"1815-12-10","gender":"FEMALE"}"#;
        let traveler: TravelerRecord = serde_json::from_str(json).expect("Failed to deserialize");
        assert_eq!(traveler.last_name, "Lovelace");
        assert!(traveler.email.is_empty());
    }
}
