pub mod app_config;
pub mod builder;
pub mod error;
pub mod forms;
pub mod mock;
pub mod navigation;
pub mod pricing;
pub mod workflow;

pub use app_config::{Config, MockConfig, WorkflowConfig};
pub use error::{SubmissionError, UserAlert};
pub use forms::{BookingForm, FlightBookingForm, HotelBookingForm, PackageBookingForm};
pub use mock::MockBookingService;
pub use navigation::{Confirmation, ConfirmationScreen, Navigator};
pub use workflow::{SubmissionState, SubmissionStatus, SubmissionWorkflow, SubmitOutcome};
