pub mod booking;
pub mod format;
pub mod money;
pub mod offer;
pub mod search;
pub mod validation;

pub use booking::{BookingConfirmation, BookingOutcome, BookingResponse, BookingService, SubmissionRequest, SubmissionTraveler};
pub use money::Money;
pub use offer::{FlightOffer, HotelStay, PackageSelection, ProductSelection};
pub use validation::ValidationError;
