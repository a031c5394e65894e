use async_trait::async_trait;
use jetsetter_core::{BookingResponse, BookingService, ProductSelection, SubmissionRequest};
use serde_json::json;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use uuid::Uuid;

use crate::app_config::MockConfig;

/// Selection reference that makes the mock fail at the transport level
pub const FAIL_TRANSPORT_REFERENCE: &str = "fail-transport";

/// Booking provider stand-in for local runs and demos
pub struct MockBookingService {
    config: MockConfig,
    calls: AtomicUsize,
}

impl MockBookingService {
    pub fn new(config: MockConfig) -> Self {
        Self {
            config,
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of booking calls received so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    async fn respond(
        &self,
        request: &SubmissionRequest,
    ) -> Result<Option<BookingResponse>, Box<dyn std::error::Error + Send + Sync>> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if self.config.latency_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.config.latency_ms)).await;
        }

        if request.selection.reference() == FAIL_TRANSPORT_REFERENCE {
            return Err("Simulated booking provider outage".into());
        }

        Ok(self.config.reject_with.as_ref().map(|reason| BookingResponse::rejected(reason.clone())))
    }

    fn record_locator(&self, id: &Uuid) -> String {
        let short = &id.simple().to_string()[..6];
        format!("{}{}", self.config.pnr_prefix, short.to_uppercase())
    }
}

#[async_trait]
impl BookingService for MockBookingService {
    async fn create_order(
        &self,
        request: &SubmissionRequest,
    ) -> Result<BookingResponse, Box<dyn std::error::Error + Send + Sync>> {
        if let Some(rejection) = self.respond(request).await? {
            return Ok(rejection);
        }

        let order_id = Uuid::new_v4();
        tracing::info!("Mock flight order {} created for offer {}", order_id, request.selection.reference());

        let data = json!({
            "pnr": self.record_locator(&order_id),
            "orderId": order_id.to_string(),
            "orderData": {
                "type": "flight-order",
                "travelers": request.travelers.len(),
                "totalPrice": request.total_price,
            },
        });
        Ok(BookingResponse::confirmed(data.as_object().cloned().unwrap_or_default()))
    }

    async fn create_booking(
        &self,
        request: &SubmissionRequest,
    ) -> Result<BookingResponse, Box<dyn std::error::Error + Send + Sync>> {
        if let Some(rejection) = self.respond(request).await? {
            return Ok(rejection);
        }

        let booking_id = Uuid::new_v4();
        let kind = match &request.selection {
            ProductSelection::Hotel { .. } => "hotel-booking",
            ProductSelection::Package { .. } => "package-booking",
            ProductSelection::Flight { .. } => "flight-booking",
        };
        tracing::info!("Mock {} {} created for {}", kind, booking_id, request.selection.reference());

        let data = json!({
            "booking": {
                "id": booking_id.to_string(),
                "type": kind,
                "status": "CONFIRMED",
                "confirmationNumber": self.record_locator(&booking_id),
                "totalPrice": request.total_price,
            },
        });
        Ok(BookingResponse::confirmed(data.as_object().cloned().unwrap_or_default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jetsetter_core::{BookingOutcome, FlightOffer, Money};
    use jetsetter_shared::ContactInfo;

    fn flight_request(offer_id: &str) -> SubmissionRequest {
        let offer: FlightOffer = serde_json::from_value(json!({"id": offer_id})).unwrap();
        SubmissionRequest {
            selection: ProductSelection::Flight { offer },
            travelers: vec![],
            contact: ContactInfo::new("a@b.com", "555"),
            total_price: Money::zero("USD"),
        }
    }

    #[tokio::test]
    async fn test_order_confirmation_has_pnr() {
        let service = MockBookingService::new(MockConfig::default());
        let response = service.create_order(&flight_request("1")).await.unwrap();

        match response.into_outcome() {
            BookingOutcome::Confirmed(confirmation) => {
                let pnr = confirmation.pnr.unwrap();
                assert!(pnr.starts_with("JS"));
                assert_eq!(pnr.len(), 8);
                assert!(confirmation.order_id.is_some());
            }
            other => panic!("expected confirmation, got {:?}", other),
        }
        assert_eq!(service.calls(), 1);
    }

    #[tokio::test]
    async fn test_configured_rejection() {
        let service = MockBookingService::new(MockConfig {
            reject_with: Some("Fare no longer available".to_string()),
            ..MockConfig::default()
        });
        let response = service.create_order(&flight_request("1")).await.unwrap();
        assert!(!response.success);
        assert_eq!(response.error.as_deref(), Some("Fare no longer available"));
    }

    #[tokio::test]
    async fn test_transport_failure_trigger() {
        let service = MockBookingService::new(MockConfig::default());
        let result = service.create_order(&flight_request(FAIL_TRANSPORT_REFERENCE)).await;
        assert!(result.is_err());
        assert_eq!(service.calls(), 1);
    }
}
