use async_trait::async_trait;
use jetsetter_shared::ContactInfo;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::money::Money;
use crate::offer::ProductSelection;

/// Phone entry in the provider's traveler contact block
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TravelerPhone {
    pub device_type: String,
    pub country_calling_code: String,
    pub number: String,
}

impl TravelerPhone {
    pub fn mobile(number: impl Into<String>) -> Self {
        Self {
            device_type: "MOBILE".to_string(),
            country_calling_code: "1".to_string(),
            number: number.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TravelerContact {
    pub email_address: String,
    pub phones: Vec<TravelerPhone>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TravelerName {
    pub first_name: String,
    pub last_name: String,
}

/// Normalized traveler sent to the booking provider
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionTraveler {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
    pub name: TravelerName,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    pub contact: TravelerContact,
}

impl SubmissionTraveler {
    pub fn email(&self) -> &str {
        &self.contact.email_address
    }

    pub fn phone(&self) -> Option<&str> {
        self.contact.phones.first().map(|p| p.number.as_str())
    }
}

/// Payload handed to the booking service
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionRequest {
    pub selection: ProductSelection,
    pub travelers: Vec<SubmissionTraveler>,
    pub contact: ContactInfo,
    pub total_price: Money,
}

/// Raw `{ "success": bool, "error"?: string, ... }` reply of the booking
/// provider. Everything besides `success` and `error` is confirmation data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookingResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(flatten)]
    pub data: Map<String, Value>,
}

impl BookingResponse {
    pub fn confirmed(data: Map<String, Value>) -> Self {
        Self {
            success: true,
            error: None,
            data,
        }
    }

    pub fn rejected(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
            data: Map::new(),
        }
    }

    pub fn into_outcome(self) -> BookingOutcome {
        if self.success {
            BookingOutcome::Confirmed(BookingConfirmation::from_payload(self.data))
        } else {
            BookingOutcome::Rejected {
                error: self.error.filter(|e| !e.is_empty()),
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum BookingOutcome {
    Confirmed(BookingConfirmation),
    /// Business failure; `error` is the provider message when it sent one
    Rejected { error: Option<String> },
}

/// Confirmation data handed to the confirmation screen
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BookingConfirmation {
    pub pnr: Option<String>,
    pub order_id: Option<String>,
    pub payload: Map<String, Value>,
}

impl BookingConfirmation {
    pub fn from_payload(payload: Map<String, Value>) -> Self {
        Self {
            pnr: text_field(payload.get("pnr")),
            order_id: text_field(payload.get("orderId"))
                .or_else(|| text_field(payload.get("booking").and_then(|b| b.get("id")))),
            payload,
        }
    }

    /// Best identifier to show the user
    pub fn reference(&self) -> Option<&str> {
        self.pnr.as_deref().or(self.order_id.as_deref())
    }
}

fn text_field(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Remote booking provider. Flights go through `create_order`, hotels and
/// packages through `create_booking`.
#[async_trait]
pub trait BookingService: Send + Sync {
    /// Place a flight order
    async fn create_order(
        &self,
        request: &SubmissionRequest,
    ) -> Result<BookingResponse, Box<dyn std::error::Error + Send + Sync>>;

    /// Book a hotel stay or a package
    async fn create_booking(
        &self,
        request: &SubmissionRequest,
    ) -> Result<BookingResponse, Box<dyn std::error::Error + Send + Sync>>;
}
