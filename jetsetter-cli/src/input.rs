use anyhow::{bail, Context};
use jetsetter_booking::{BookingForm, FlightBookingForm, HotelBookingForm, PackageBookingForm};
use jetsetter_core::search::HotelSearchParams;
use serde::Deserialize;
use std::path::Path;

/// Filled-in payment form, as saved by the front end
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "product", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FormInput {
    Flight(FlightBookingForm),
    Hotel(HotelBookingForm),
    Package(PackageBookingForm),
}

impl FormInput {
    pub fn as_form(&self) -> &dyn BookingForm {
        match self {
            FormInput::Flight(form) => form,
            FormInput::Hotel(form) => form,
            FormInput::Package(form) => form,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            FormInput::Flight(_) => "flight",
            FormInput::Hotel(_) => "hotel",
            FormInput::Package(_) => "package",
        }
    }

    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let mut input: FormInput = serde_json::from_str(json).context("Malformed booking form")?;

        if let FormInput::Hotel(form) = &mut input {
            if !form.stay.derive_nights() {
                bail!(
                    "Hotel stay {} to {} has no nights and none were given",
                    form.stay.check_in_date,
                    form.stay.check_out_date
                );
            }
        }

        Ok(input)
    }
}

pub fn read_form(path: &Path) -> anyhow::Result<FormInput> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read form {}", path.display()))?;
    FormInput::from_json(&json)
}

/// Hotel search form as saved by the front end
pub fn read_search(path: &Path) -> anyhow::Result<HotelSearchParams> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read search {}", path.display()))?;
    serde_json::from_str(&json).context("Malformed hotel search")
}
