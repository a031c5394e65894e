use jetsetter_core::booking::{TravelerContact, TravelerName, TravelerPhone};
use jetsetter_core::SubmissionTraveler;
use jetsetter_shared::{ContactInfo, GuestDetails, PackageTraveler, TravelerRecord};

/// The traveler's own value unless it was left blank
fn own_or_shared<'a>(own: &'a str, shared: &'a str) -> &'a str {
    if own.is_empty() {
        shared
    } else {
        own
    }
}

fn traveler_contact(email: &str, phone: &str) -> TravelerContact {
    TravelerContact {
        email_address: email.to_string(),
        phones: vec![TravelerPhone::mobile(phone)],
    }
}

/// Normalize flight travelers for the order call.
///
/// Gender is upper-cased. A traveler with a blank email or phone gets the
/// shared booking contact's value instead. Assumes the form already passed
/// validation.
pub fn build_submission_travelers(
    travelers: &[TravelerRecord],
    shared: &ContactInfo,
) -> Vec<SubmissionTraveler> {
    travelers
        .iter()
        .map(|traveler| SubmissionTraveler {
            id: traveler.id.clone(),
            date_of_birth: Some(traveler.date_of_birth.clone()),
            name: TravelerName {
                first_name: traveler.first_name.clone(),
                last_name: traveler.last_name.clone(),
            },
            gender: Some(traveler.gender.to_uppercase()),
            contact: traveler_contact(
                own_or_shared(&traveler.email, &shared.email),
                own_or_shared(&traveler.phone, &shared.phone),
            ),
        })
        .collect()
}

/// The hotel guest as the single traveler on the reservation
pub fn build_guest_traveler(guest: &GuestDetails) -> SubmissionTraveler {
    SubmissionTraveler {
        id: "1".to_string(),
        date_of_birth: None,
        name: TravelerName {
            first_name: guest.first_name.clone(),
            last_name: guest.last_name.clone(),
        },
        gender: None,
        contact: traveler_contact(&guest.email, &guest.phone),
    }
}

pub fn build_package_traveler(traveler: &PackageTraveler) -> SubmissionTraveler {
    SubmissionTraveler {
        id: "1".to_string(),
        date_of_birth: Some(traveler.date_of_birth.clone()).filter(|d| !d.is_empty()),
        name: TravelerName {
            first_name: traveler.first_name.clone(),
            last_name: traveler.last_name.clone(),
        },
        gender: None,
        contact: traveler_contact(&traveler.email, &traveler.phone),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jetsetter_shared::TravelerField;

    fn traveler(email: &str, phone: &str) -> TravelerRecord {
        let mut t = TravelerRecord::empty(1);
        t.set(TravelerField::FirstName, "Sam");
        t.set(TravelerField::LastName, "Lee");
        t.set(TravelerField::DateOfBirth, "1988-02-29");
        t.set(TravelerField::Gender, "male");
        t.set(TravelerField::Email, email);
        t.set(TravelerField::Phone, phone);
        t
    }

    #[test]
    fn test_blank_contact_falls_back_to_shared() {
        let shared = ContactInfo::new("a@b.com", "555");
        let built = build_submission_travelers(&[traveler("", "")], &shared);

        assert_eq!(built.len(), 1);
        assert_eq!(built[0].email(), "a@b.com");
        assert_eq!(built[0].phone(), Some("555"));
    }

    #[test]
    fn test_own_contact_is_kept() {
        let shared = ContactInfo::new("a@b.com", "555");
        let built = build_submission_travelers(&[traveler("sam@lee.dev", "")], &shared);

        assert_eq!(built[0].email(), "sam@lee.dev");
        assert_eq!(built[0].phone(), Some("555"));
    }

    #[test]
    fn test_copies_identity_and_uppercases_gender() {
        let shared = ContactInfo::new("a@b.com", "555");
        let mut second = traveler("", "777");
        second.id = "2".to_string();
        second.set(TravelerField::Gender, "Female");

        let built = build_submission_travelers(&[traveler("", ""), second], &shared);

        assert_eq!(built[0].id, "1");
        assert_eq!(built[0].gender.as_deref(), Some("MALE"));
        assert_eq!(built[0].date_of_birth.as_deref(), Some("1988-02-29"));
        assert_eq!(built[0].name.last_name, "Lee");
        assert_eq!(built[1].id, "2");
        assert_eq!(built[1].gender.as_deref(), Some("FEMALE"));
        assert_eq!(built[1].phone(), Some("777"));
    }

    #[test]
    fn test_guest_traveler() {
        let guest = GuestDetails {
            first_name: "Grace".to_string(),
            last_name: "Hopper".to_string(),
            email: "grace@example.com".to_string(),
            phone: "+1234567890".to_string(),
        };
        let built = build_guest_traveler(&guest);
        assert_eq!(built.id, "1");
        assert_eq!(built.gender, None);
        assert_eq!(built.email(), "grace@example.com");
    }
}
