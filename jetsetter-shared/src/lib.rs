pub mod models;
pub mod pii;

pub use models::{ContactInfo, Gender, GuestDetails, PackageTraveler, TravelerField, TravelerRecord};
pub use pii::Masked;
