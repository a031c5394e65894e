use serde::{Deserialize, Serialize};

pub const DEFAULT_CURRENCY: &str = "USD";

/// A price in minor units (cents) of `currency`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Money {
    pub amount_minor: i64,
    pub currency: String,
}

impl Money {
    pub fn new(amount_minor: i64, currency: impl Into<String>) -> Self {
        Self {
            amount_minor,
            currency: currency.into(),
        }
    }

    pub fn zero(currency: impl Into<String>) -> Self {
        Self::new(0, currency)
    }

    /// Parse a provider decimal such as `"512.30"`. Text that is not a finite
    /// number counts as zero.
    pub fn from_decimal_str(amount: &str, currency: impl Into<String>) -> Self {
        let minor = amount
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .map(|v| (v * 100.0).round() as i64)
            .unwrap_or(0);
        Self::new(minor, currency)
    }

    /// Multiply by a unit count, e.g. a nightly rate by the number of nights
    pub fn times(&self, units: u32) -> Self {
        Self::new(self.amount_minor.saturating_mul(units as i64), self.currency.clone())
    }
}
