use jetsetter_core::{BookingConfirmation, ProductSelection, SubmissionRequest};
use serde::Serialize;

/// Screen that receives a successful booking
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum ConfirmationScreen {
    FlightConfirmation,
    HotelConfirmation,
    PackageConfirmation,
}

impl ConfirmationScreen {
    pub fn for_selection(selection: &ProductSelection) -> Self {
        match selection {
            ProductSelection::Flight { .. } => ConfirmationScreen::FlightConfirmation,
            ProductSelection::Hotel { .. } => ConfirmationScreen::HotelConfirmation,
            ProductSelection::Package { .. } => ConfirmationScreen::PackageConfirmation,
        }
    }
}

/// Everything the confirmation screen gets: the provider's confirmation and
/// the request it answered (selection, normalized travelers, total).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Confirmation {
    pub screen: ConfirmationScreen,
    pub confirmation: BookingConfirmation,
    pub request: SubmissionRequest,
}

/// Navigation layer. Called once per workflow, and only on success.
pub trait Navigator: Send + Sync {
    fn navigate(&self, confirmation: Confirmation);
}
