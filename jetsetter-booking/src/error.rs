use jetsetter_core::ValidationError;
use serde::Serialize;
use std::time::Duration;

pub const BOOKING_FAILED_MESSAGE: &str = "Unable to complete booking. Please try again.";
pub const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred. Please try again.";

/// Why a submission attempt ended without a booking. Every variant ends the
/// current attempt only; the form stays usable.
#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("booking rejected by provider: {}", .0.as_deref().unwrap_or("no reason given"))]
    BookingFailed(Option<String>),

    #[error("booking service call failed: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("booking service gave no answer within {0:?}")]
    TimedOut(Duration),
}

impl SubmissionError {
    pub fn user_title(&self) -> &'static str {
        match self {
            SubmissionError::Validation(err) => err.title(),
            SubmissionError::BookingFailed(_) => "Booking Failed",
            SubmissionError::Transport(_) | SubmissionError::TimedOut(_) => "Error",
        }
    }

    /// Text safe to show the user. Transport details never leak here.
    pub fn user_message(&self) -> String {
        match self {
            SubmissionError::Validation(err) => err.to_string(),
            SubmissionError::BookingFailed(Some(reason)) => reason.clone(),
            SubmissionError::BookingFailed(None) => BOOKING_FAILED_MESSAGE.to_string(),
            SubmissionError::Transport(_) | SubmissionError::TimedOut(_) => UNEXPECTED_ERROR_MESSAGE.to_string(),
        }
    }

    pub fn alert(&self) -> UserAlert {
        UserAlert {
            title: self.user_title().to_string(),
            message: self.user_message(),
        }
    }
}

/// Title and message for the alert shown on the form
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct UserAlert {
    pub title: String,
    pub message: String,
}

impl UserAlert {
    /// The alert shown when something went wrong that the user cannot fix
    pub fn unexpected() -> Self {
        Self {
            title: "Error".to_string(),
            message: UNEXPECTED_ERROR_MESSAGE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_error_is_generic_for_user() {
        let err = SubmissionError::Transport("connection reset by peer at 10.0.0.7".into());
        assert_eq!(err.user_title(), "Error");
        assert_eq!(err.user_message(), UNEXPECTED_ERROR_MESSAGE);
        assert!(err.to_string().contains("connection reset"));
    }

    #[test]
    fn test_booking_failed_messages() {
        let err = SubmissionError::BookingFailed(Some("Room no longer available".to_string()));
        assert_eq!(
            err.alert(),
            UserAlert {
                title: "Booking Failed".to_string(),
                message: "Room no longer available".to_string()
            }
        );
        assert_eq!(SubmissionError::BookingFailed(None).user_message(), BOOKING_FAILED_MESSAGE);
    }

    #[test]
    fn test_validation_alert() {
        let err = SubmissionError::from(ValidationError::InvalidDate { position: 2 });
        assert_eq!(err.user_title(), "Invalid Date");
        assert_eq!(
            err.user_message(),
            "Please enter date of birth in YYYY-MM-DD format for Traveler 2"
        );
    }

    #[test]
    fn test_timeout_is_generic() {
        let err = SubmissionError::TimedOut(Duration::from_secs(60));
        assert_eq!(err.user_message(), UNEXPECTED_ERROR_MESSAGE);
    }
}
