use serde::{Deserialize, Serialize};

use crate::money::{Money, DEFAULT_CURRENCY};
use crate::search::nights_between;

/// Quoted price on a provider flight offer (decimal text, as the provider sends it)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OfferPrice {
    #[serde(default)]
    pub total: Option<String>,
    #[serde(default)]
    pub currency: Option<String>,
}

/// Flight offer picked on the results screen. Provider fields other than
/// `id` and `price` are passed through to the order call untouched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FlightOffer {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<OfferPrice>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl FlightOffer {
    /// The offer's quoted total; `0 USD` when the provider sent none
    pub fn quoted_total(&self) -> Money {
        let total = self
            .price
            .as_ref()
            .and_then(|p| p.total.as_deref())
            .unwrap_or("0");
        let currency = self
            .price
            .as_ref()
            .and_then(|p| p.currency.as_deref())
            .unwrap_or(DEFAULT_CURRENCY);
        Money::from_decimal_str(total, currency)
    }
}

/// Hotel room offer plus the stay it was searched for
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HotelStay {
    pub hotel_id: String,
    #[serde(default)]
    pub hotel_name: String,
    pub offer_id: String,
    #[serde(default)]
    pub room_type: Option<String>,
    pub check_in_date: String,
    pub check_out_date: String,
    /// 0 when not known yet; see [`HotelStay::derive_nights`]
    #[serde(default)]
    pub nights: u32,
    pub nightly_price: Money,
    #[serde(default)]
    pub cancellation_policy: Option<String>,
}

impl HotelStay {
    /// Fill `nights` from the stay dates when it was not given.
    /// Returns false if the dates do not describe at least one night.
    pub fn derive_nights(&mut self) -> bool {
        if self.nights > 0 {
            return true;
        }
        match nights_between(&self.check_in_date, &self.check_out_date) {
            Some(nights) => {
                self.nights = nights;
                true
            }
            None => false,
        }
    }
}

/// Pre-packaged trip with a fixed price
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PackageSelection {
    pub package_id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub location: Option<String>,
    /// Fixed package price in USD minor units
    pub price_minor: i64,
}

/// What is being booked
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "product", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductSelection {
    Flight { offer: FlightOffer },
    Hotel { stay: HotelStay },
    Package {
        package: PackageSelection,
        #[serde(rename = "travelDate")]
        travel_date: String,
    },
}

impl ProductSelection {
    pub fn kind(&self) -> &'static str {
        match self {
            ProductSelection::Flight { .. } => "FLIGHT",
            ProductSelection::Hotel { .. } => "HOTEL",
            ProductSelection::Package { .. } => "PACKAGE",
        }
    }

    /// Reference of the selected offer, flight or package
    pub fn reference(&self) -> &str {
        match self {
            ProductSelection::Flight { offer } => &offer.id,
            ProductSelection::Hotel { stay } => &stay.offer_id,
            ProductSelection::Package { package, .. } => &package.package_id,
        }
    }
}
