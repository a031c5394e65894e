use jetsetter_booking::{Confirmation, Navigator};
use jetsetter_core::format::{format_date_str, format_duration, format_price};
use jetsetter_core::search::{nights_between, validate_hotel_search, HotelSearchParams, SearchError};
use jetsetter_core::ProductSelection;

/// Prints the confirmation screen to stdout
pub struct ConsoleNavigator {
    /// Also dump the full confirmation as JSON
    pub verbose: bool,
}

impl ConsoleNavigator {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }
}

impl Navigator for ConsoleNavigator {
    fn navigate(&self, confirmation: Confirmation) {
        tracing::debug!("Showing {:?}", confirmation.screen);
        println!("{}", summary(&confirmation));

        if self.verbose {
            match serde_json::to_string_pretty(&confirmation) {
                Ok(json) => println!("{}", json),
                Err(e) => tracing::warn!("Could not render confirmation: {}", e),
            }
        }
    }
}

/// Human readable lines for the confirmation screen
pub fn summary(confirmation: &Confirmation) -> String {
    let request = &confirmation.request;
    let mut lines = vec![format!(
        "Booking confirmed: {}",
        confirmation.confirmation.reference().unwrap_or("(no reference)")
    )];

    match &request.selection {
        ProductSelection::Flight { offer } => {
            let duration = offer
                .extra
                .get("itineraries")
                .and_then(|i| i.get(0))
                .and_then(|i| i.get("duration"))
                .and_then(|d| d.as_str());
            match duration {
                Some(d) => lines.push(format!("Flight offer {} ({})", offer.id, format_duration(d))),
                None => lines.push(format!("Flight offer {}", offer.id)),
            }
        }
        ProductSelection::Hotel { stay } => {
            let name = if stay.hotel_name.is_empty() { &stay.hotel_id } else { &stay.hotel_name };
            lines.push(format!(
                "{}: {} to {} ({} nights)",
                name,
                format_date_str(&stay.check_in_date),
                format_date_str(&stay.check_out_date),
                stay.nights
            ));
        }
        ProductSelection::Package { package, travel_date } => {
            lines.push(format!("{} on {}", package.title, format_date_str(travel_date)));
        }
    }

    for traveler in &request.travelers {
        lines.push(format!("  {} {}", traveler.name.first_name, traveler.name.last_name));
    }
    lines.push(format!("Total: {}", format_price(&request.total_price)));

    lines.join("\n")
}

/// Validate a hotel search and describe the stay it asks for
pub fn search_summary(params: &HotelSearchParams) -> Result<String, SearchError> {
    validate_hotel_search(params)?;

    let stay = match nights_between(&params.check_in_date, &params.check_out_date) {
        Some(1) => "1 night".to_string(),
        Some(n) => format!("{} nights", n),
        None => "no nights".to_string(),
    };
    Ok(format!(
        "{} ({}): {} to {}, {}, adults: {}",
        params.destination.trim(),
        params.city_code,
        format_date_str(&params.check_in_date),
        format_date_str(&params.check_out_date),
        stay,
        params.adults
    ))
}
