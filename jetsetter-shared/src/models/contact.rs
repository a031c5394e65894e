use serde::{Deserialize, Serialize};
use std::fmt;

use crate::pii::Masked;

/// Booking-level contact, required on every flight booking. Travelers who
/// leave their own email or phone blank inherit these.
#[derive(Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ContactInfo {
    pub email: String,
    pub phone: String,
}

impl ContactInfo {
    pub fn new(email: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            phone: phone.into(),
        }
    }
}

impl fmt::Debug for ContactInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContactInfo")
            .field("email", &Masked(&self.email))
            .field("phone", &Masked(&self.phone))
            .finish()
    }
}

/// Primary guest on a hotel booking (one guest per reservation)
#[derive(Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct GuestDetails {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
}

impl GuestDetails {
    pub fn contact(&self) -> ContactInfo {
        ContactInfo::new(self.email.clone(), self.phone.clone())
    }
}

impl fmt::Debug for GuestDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GuestDetails")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("email", &Masked(&self.email))
            .field("phone", &Masked(&self.phone))
            .finish()
    }
}

/// Lead traveler on a package booking
#[derive(Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct PackageTraveler {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub date_of_birth: String,
}

impl PackageTraveler {
    pub fn contact(&self) -> ContactInfo {
        ContactInfo::new(self.email.clone(), self.phone.clone())
    }
}

impl fmt::Debug for PackageTraveler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PackageTraveler")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("email", &Masked(&self.email))
            .field("phone", &Masked(&self.phone))
            .field("date_of_birth", &Masked(&self.date_of_birth))
            .finish()
    }
}
