pub mod contact;
pub mod traveler;

pub use contact::{ContactInfo, GuestDetails, PackageTraveler};
pub use traveler::{Gender, TravelerField, TravelerRecord};
