use jetsetter_core::money::DEFAULT_CURRENCY;
use jetsetter_core::{FlightOffer, HotelStay, Money, PackageSelection, ProductSelection};

/// Totals are always derived from the selection, never typed in.
pub fn flight_total(offer: &FlightOffer) -> Money {
    offer.quoted_total()
}

/// Nightly rate times nights
pub fn hotel_total(stay: &HotelStay) -> Money {
    stay.nightly_price.times(stay.nights)
}

/// Packages have a fixed USD price
pub fn package_total(package: &PackageSelection) -> Money {
    Money::new(package.price_minor, DEFAULT_CURRENCY)
}

pub fn total_for(selection: &ProductSelection) -> Money {
    match selection {
        ProductSelection::Flight { offer } => flight_total(offer),
        ProductSelection::Hotel { stay } => hotel_total(stay),
        ProductSelection::Package { package, .. } => package_total(package),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stay(nightly_minor: i64, nights: u32) -> HotelStay {
        HotelStay {
            hotel_id: "HLPAR001".to_string(),
            hotel_name: "Hotel du Louvre".to_string(),
            offer_id: "OFF-1".to_string(),
            room_type: Some("Deluxe King".to_string()),
            check_in_date: "2025-05-01".to_string(),
            check_out_date: "2025-05-04".to_string(),
            nights,
            nightly_price: Money::new(nightly_minor, "EUR"),
            cancellation_policy: None,
        }
    }

    #[test]
    fn test_hotel_total_is_rate_times_nights() {
        assert_eq!(hotel_total(&stay(18_999, 3)), Money::new(56_997, "EUR"));
    }

    #[test]
    fn test_package_total_is_fixed_usd() {
        let package = PackageSelection {
            package_id: "pkg-1".to_string(),
            title: "Santorini Sunsets".to_string(),
            location: Some("Greece".to_string()),
            price_minor: 249_900,
        };
        let selection = ProductSelection::Package { package, travel_date: "2025-07-01".to_string() };
        assert_eq!(total_for(&selection), Money::new(249_900, "USD"));
    }

    #[test]
    fn test_flight_total_uses_quote() {
        let offer: FlightOffer =
            serde_json::from_str(r#"{"id": "1", "price": {"total": "431.20", "currency": "GBP"}}"#).unwrap();
        assert_eq!(total_for(&ProductSelection::Flight { offer }), Money::new(43_120, "GBP"));
    }
}
