use jetsetter_core::validation::{validate_contact, validate_guest, validate_package_traveler, validate_travelers};
use jetsetter_core::{FlightOffer, HotelStay, PackageSelection, ProductSelection, SubmissionRequest, ValidationError};
use jetsetter_shared::{ContactInfo, GuestDetails, PackageTraveler, TravelerField, TravelerRecord};
use serde::{Deserialize, Serialize};

use crate::builder::{build_guest_traveler, build_package_traveler, build_submission_travelers};
use crate::pricing::total_for;

/// Form state owned by one payment screen
pub trait BookingForm: Send + Sync {
    /// Run the validators in their fixed order; first failure wins
    fn validate(&self) -> Result<(), ValidationError>;

    /// Compose the service payload. Only meaningful after `validate` passed.
    fn build_request(&self) -> SubmissionRequest;
}

/// Flight payment screen: one record per searched traveler plus the shared contact
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightBookingForm {
    pub offer: FlightOffer,
    pub travelers: Vec<TravelerRecord>,
    #[serde(default)]
    pub contact: ContactInfo,
}

impl FlightBookingForm {
    pub fn new(offer: FlightOffer, traveler_count: usize) -> Self {
        Self {
            offer,
            travelers: TravelerRecord::roster(traveler_count),
            contact: ContactInfo::default(),
        }
    }

    /// Returns false when `index` is not a traveler on this form
    pub fn update_traveler(&mut self, index: usize, field: TravelerField, value: impl Into<String>) -> bool {
        match self.travelers.get_mut(index) {
            Some(traveler) => {
                traveler.set(field, value);
                true
            }
            None => false,
        }
    }
}

impl BookingForm for FlightBookingForm {
    fn validate(&self) -> Result<(), ValidationError> {
        validate_travelers(&self.travelers)?;
        validate_contact(&self.contact)
    }

    fn build_request(&self) -> SubmissionRequest {
        let selection = ProductSelection::Flight {
            offer: self.offer.clone(),
        };
        SubmissionRequest {
            total_price: total_for(&selection),
            travelers: build_submission_travelers(&self.travelers, &self.contact),
            contact: self.contact.clone(),
            selection,
        }
    }
}

/// Hotel payment screen
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelBookingForm {
    pub stay: HotelStay,
    #[serde(default)]
    pub guest: GuestDetails,
}

impl HotelBookingForm {
    pub fn new(stay: HotelStay) -> Self {
        Self {
            stay,
            guest: GuestDetails::default(),
        }
    }
}

impl BookingForm for HotelBookingForm {
    fn validate(&self) -> Result<(), ValidationError> {
        validate_guest(&self.guest)
    }

    fn build_request(&self) -> SubmissionRequest {
        let selection = ProductSelection::Hotel {
            stay: self.stay.clone(),
        };
        SubmissionRequest {
            total_price: total_for(&selection),
            travelers: vec![build_guest_traveler(&self.guest)],
            contact: self.guest.contact(),
            selection,
        }
    }
}

/// Package booking screen
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageBookingForm {
    pub package: PackageSelection,
    #[serde(default)]
    pub traveler: PackageTraveler,
    #[serde(default)]
    pub travel_date: String,
}

impl PackageBookingForm {
    pub fn new(package: PackageSelection) -> Self {
        Self {
            package,
            traveler: PackageTraveler::default(),
            travel_date: String::new(),
        }
    }
}

impl BookingForm for PackageBookingForm {
    fn validate(&self) -> Result<(), ValidationError> {
        validate_package_traveler(&self.traveler, &self.travel_date)
    }

    fn build_request(&self) -> SubmissionRequest {
        let selection = ProductSelection::Package {
            package: self.package.clone(),
            travel_date: self.travel_date.clone(),
        };
        SubmissionRequest {
            total_price: total_for(&selection),
            travelers: vec![build_package_traveler(&self.traveler)],
            contact: self.traveler.contact(),
            selection,
        }
    }
}
