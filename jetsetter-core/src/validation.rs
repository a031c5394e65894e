//! Pre-submission checks for the booking forms.
//!
//! Every check is pure and stops at the first failure; errors are never
//! aggregated. The caller shows the error and aborts the submission.

use jetsetter_shared::{ContactInfo, Gender, GuestDetails, PackageTraveler, TravelerRecord};
use regex::Regex;
use std::sync::LazyLock;

/// Shape only: `2024-99-01` passes, no calendar check
static DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("valid date pattern"));

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));

/// Input errors found before anything is sent. `position` is the 1-based
/// traveler number shown on the form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please fill in all required fields for Traveler {position}")]
    MissingField { position: usize },

    #[error("Please enter date of birth in YYYY-MM-DD format for Traveler {position}")]
    InvalidDate { position: usize },

    #[error("Please enter MALE or FEMALE for Traveler {position}")]
    InvalidGender { position: usize },

    #[error("Please provide contact email and phone number")]
    MissingContact,

    #[error("Please enter a valid email address")]
    InvalidEmail,

    /// Hotel guest form; one alert for every empty field
    #[error("Please fill in all guest details")]
    IncompleteGuest,

    /// Package form, travel date included
    #[error("Please fill in all fields")]
    IncompletePackage,
}

impl ValidationError {
    /// Alert title for the form
    pub fn title(&self) -> &'static str {
        match self {
            ValidationError::MissingField { .. }
            | ValidationError::IncompleteGuest
            | ValidationError::IncompletePackage => "Missing Information",
            ValidationError::InvalidDate { .. } => "Invalid Date",
            ValidationError::InvalidGender { .. } => "Invalid Gender",
            ValidationError::MissingContact => "Missing Contact",
            ValidationError::InvalidEmail => "Invalid Email",
        }
    }
}

pub fn is_iso_date(value: &str) -> bool {
    DATE_RE.is_match(value)
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// Check every traveler in order. All checks for one traveler finish before
/// the next traveler is looked at.
pub fn validate_travelers(travelers: &[TravelerRecord]) -> Result<(), ValidationError> {
    for (index, traveler) in travelers.iter().enumerate() {
        let position = index + 1;

        if !traveler.has_required_fields() {
            return Err(ValidationError::MissingField { position });
        }

        if !is_iso_date(&traveler.date_of_birth) {
            return Err(ValidationError::InvalidDate { position });
        }

        if Gender::parse(&traveler.gender).is_none() {
            return Err(ValidationError::InvalidGender { position });
        }
    }

    Ok(())
}

/// Shared booking contact: both fields present, email well formed
pub fn validate_contact(contact: &ContactInfo) -> Result<(), ValidationError> {
    if contact.email.is_empty() || contact.phone.is_empty() {
        return Err(ValidationError::MissingContact);
    }

    if !is_valid_email(&contact.email) {
        return Err(ValidationError::InvalidEmail);
    }

    Ok(())
}

/// Hotel guest: all four fields, then the email format
pub fn validate_guest(guest: &GuestDetails) -> Result<(), ValidationError> {
    let fields = [&guest.first_name, &guest.last_name, &guest.email, &guest.phone];
    if fields.iter().any(|f| f.is_empty()) {
        return Err(ValidationError::IncompleteGuest);
    }

    if !is_valid_email(&guest.email) {
        return Err(ValidationError::InvalidEmail);
    }

    Ok(())
}

/// Package lead traveler plus the chosen travel date. Presence only; the
/// email is not format checked on this form.
pub fn validate_package_traveler(
    traveler: &PackageTraveler,
    travel_date: &str,
) -> Result<(), ValidationError> {
    let fields = [
        traveler.first_name.as_str(),
        traveler.last_name.as_str(),
        traveler.email.as_str(),
        traveler.phone.as_str(),
        travel_date,
    ];
    if fields.iter().any(|f| f.is_empty()) {
        return Err(ValidationError::IncompletePackage);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use jetsetter_shared::TravelerField;

    fn traveler(position: usize, first: &str, last: &str, dob: &str, gender: &str) -> TravelerRecord {
        let mut t = TravelerRecord::empty(position);
        t.set(TravelerField::FirstName, first);
        t.set(TravelerField::LastName, last);
        t.set(TravelerField::DateOfBirth, dob);
        t.set(TravelerField::Gender, gender);
        t
    }

    fn valid(position: usize) -> TravelerRecord {
        traveler(position, "Ada", "Lovelace", "1990-05-17", "FEMALE")
    }

    #[test]
    fn test_valid_travelers_pass() {
        assert_eq!(validate_travelers(&[valid(1), valid(2)]), Ok(()));
        assert_eq!(validate_travelers(&[]), Ok(()));
    }

    #[test]
    fn test_missing_field_reports_first_position() {
        let travelers = vec![
            valid(1),
            traveler(2, "Bob", "", "1990-01-01", "MALE"),
            traveler(3, "", "", "", ""),
        ];
        assert_eq!(
            validate_travelers(&travelers),
            Err(ValidationError::MissingField { position: 2 })
        );

        for field in [TravelerField::FirstName, TravelerField::LastName, TravelerField::DateOfBirth, TravelerField::Gender] {
            let mut t = valid(1);
            t.set(field, "");
            assert_eq!(
                validate_travelers(&[t]),
                Err(ValidationError::MissingField { position: 1 }),
                "{:?} should be required",
                field
            );
        }
    }

    #[test]
    fn test_earlier_traveler_error_wins() {
        let travelers = vec![
            traveler(1, "Ada", "Lovelace", "17/05/1990", "FEMALE"),
            traveler(2, "", "", "", ""),
        ];
        assert_eq!(
            validate_travelers(&travelers),
            Err(ValidationError::InvalidDate { position: 1 })
        );
    }

    #[test]
    fn test_date_check_is_shape_only() {
        assert!(is_iso_date("2024-99-01"));
        assert!(is_iso_date("2024-13-99"));
        assert!(!is_iso_date("01-01-2024"));
        assert!(!is_iso_date("2024-1-01"));
        assert!(!is_iso_date("2024-01-01 "));
        assert!(!is_iso_date("２０２４-01-01"));

        let t = traveler(1, "Ada", "Lovelace", "01-01-2024", "FEMALE");
        assert_eq!(validate_travelers(&[t]), Err(ValidationError::InvalidDate { position: 1 }));
    }

    #[test]
    fn test_gender_is_case_insensitive() {
        for gender in ["male", "Male", "MALE", "female"] {
            let t = traveler(1, "Sam", "Lee", "1990-01-01", gender);
            assert_eq!(validate_travelers(&[t]), Ok(()), "{} should pass", gender);
        }
        for gender in ["M", "other", "F"] {
            let t = traveler(1, "Sam", "Lee", "1990-01-01", gender);
            assert_eq!(
                validate_travelers(&[t]),
                Err(ValidationError::InvalidGender { position: 1 }),
                "{} should fail",
                gender
            );
        }
    }

    #[test]
    fn test_contact_rules() {
        assert_eq!(validate_contact(&ContactInfo::new("a@b.com", "555")), Ok(()));
        assert_eq!(validate_contact(&ContactInfo::new("", "555")), Err(ValidationError::MissingContact));
        assert_eq!(validate_contact(&ContactInfo::new("a@b.com", "")), Err(ValidationError::MissingContact));
        // Missing phone is reported before a malformed email
        assert_eq!(validate_contact(&ContactInfo::new("nope", "")), Err(ValidationError::MissingContact));
        assert_eq!(validate_contact(&ContactInfo::new("nope", "555")), Err(ValidationError::InvalidEmail));
        assert_eq!(validate_contact(&ContactInfo::new("a b@c.com", "555")), Err(ValidationError::InvalidEmail));
        assert_eq!(validate_contact(&ContactInfo::new("a@bcom", "555")), Err(ValidationError::InvalidEmail));
    }

    #[test]
    fn test_guest_rules() {
        let mut guest = GuestDetails {
            first_name: "Grace".to_string(),
            last_name: "Hopper".to_string(),
            email: "grace@navy.mil".to_string(),
            phone: "+1234567890".to_string(),
        };
        assert_eq!(validate_guest(&guest), Ok(()));

        guest.email = "grace-at-navy".to_string();
        assert_eq!(validate_guest(&guest), Err(ValidationError::InvalidEmail));

        // Any empty field, contact included, is the same alert
        for clear in [0, 1, 2, 3] {
            let mut g = guest.clone();
            g.email = "grace@navy.mil".to_string();
            match clear {
                0 => g.first_name.clear(),
                1 => g.last_name.clear(),
                2 => g.email.clear(),
                _ => g.phone.clear(),
            }
            let err = validate_guest(&g).unwrap_err();
            assert_eq!(err, ValidationError::IncompleteGuest);
            assert_eq!(err.title(), "Missing Information");
            assert_eq!(err.to_string(), "Please fill in all guest details");
        }
    }

    #[test]
    fn test_package_rules() {
        let lead = PackageTraveler {
            first_name: "Lin".to_string(),
            last_name: "Chen".to_string(),
            email: "lin@example.com".to_string(),
            phone: "+1234567890".to_string(),
            date_of_birth: String::new(),
        };
        assert_eq!(validate_package_traveler(&lead, "2025-06-01"), Ok(()));

        let err = validate_package_traveler(&lead, "").unwrap_err();
        assert_eq!(err, ValidationError::IncompletePackage);
        assert_eq!(err.title(), "Missing Information");
        assert_eq!(err.to_string(), "Please fill in all fields");

        let mut no_phone = lead.clone();
        no_phone.phone.clear();
        assert_eq!(validate_package_traveler(&no_phone, "2025-06-01"), Err(ValidationError::IncompletePackage));
    }

    #[test]
    fn test_package_email_is_not_format_checked() {
        let lead = PackageTraveler {
            first_name: "Lin".to_string(),
            last_name: "Chen".to_string(),
            email: "not-an-email".to_string(),
            phone: "+1234567890".to_string(),
            date_of_birth: String::new(),
        };
        assert_eq!(validate_package_traveler(&lead, "2025-06-01"), Ok(()));
    }

    #[test]
    fn test_titles() {
        assert_eq!(ValidationError::MissingField { position: 1 }.title(), "Missing Information");
        assert_eq!(ValidationError::InvalidEmail.title(), "Invalid Email");
        assert_eq!(
            ValidationError::InvalidGender { position: 3 }.to_string(),
            "Please enter MALE or FEMALE for Traveler 3"
        );
    }
}
