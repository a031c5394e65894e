use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Hotel search form state
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct HotelSearchParams {
    /// Free text typed by the user
    pub destination: String,
    /// Set only when a destination suggestion was picked
    pub city_code: String,
    pub check_in_date: String,
    pub check_out_date: String,
    pub adults: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    #[error("Please enter a destination")]
    MissingDestination,
    #[error("Please select check-in and check-out dates")]
    MissingDates,
    #[error("Please select a destination from the suggestions")]
    DestinationNotSelected,
}

pub fn validate_hotel_search(params: &HotelSearchParams) -> Result<(), SearchError> {
    if params.destination.trim().is_empty() {
        return Err(SearchError::MissingDestination);
    }

    if params.check_in_date.is_empty() || params.check_out_date.is_empty() {
        return Err(SearchError::MissingDates);
    }

    if params.city_code.is_empty() {
        return Err(SearchError::DestinationNotSelected);
    }

    Ok(())
}

/// Number of nights between two ISO dates; `None` unless check-out is after check-in
pub fn nights_between(check_in: &str, check_out: &str) -> Option<u32> {
    let start = NaiveDate::parse_from_str(check_in, "%Y-%m-%d").ok()?;
    let end = NaiveDate::parse_from_str(check_out, "%Y-%m-%d").ok()?;
    let nights = (end - start).num_days();
    if nights > 0 {
        u32::try_from(nights).ok()
    } else {
        None
    }
}
