//! Booking submission state machine.
//!
//! ```text
//! Idle ──submit──▶ Validating ──invalid──▶ Idle
//!                      │
//!                    valid
//!                      ▼
//!                 Submitting ──confirmed──▶ Succeeded (terminal, navigates once)
//!                      │
//!              rejected / transport error / timeout
//!                      ▼
//!                   Failed ──submit──▶ Validating
//! ```
//!
//! One workflow instance serves one payment screen. `submit` takes `&self`;
//! the check that the workflow is idle and the move to `Validating` happen in
//! a single step, so overlapping submits never reach the booking service twice.
//!
//! A `submit` future dropped before it settles (caller timeout, `select!`,
//! aborted task) leaves the workflow `Failed` with the generic alert.

use jetsetter_core::format::format_price;
use jetsetter_core::{BookingConfirmation, BookingOutcome, BookingService, ProductSelection, SubmissionRequest, ValidationError};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use uuid::Uuid;

use crate::app_config::WorkflowConfig;
use crate::error::{SubmissionError, UserAlert};
use crate::forms::BookingForm;
use crate::navigation::{Confirmation, ConfirmationScreen, Navigator};

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SubmissionState {
    Idle,
    Validating,
    Submitting,
    Succeeded,
    Failed,
}

impl SubmissionState {
    /// Whether a new submit may start from here
    pub fn accepts_submit(&self) -> bool {
        matches!(self, SubmissionState::Idle | SubmissionState::Failed)
    }

    /// The submit control is disabled and progress is shown
    pub fn is_busy(&self) -> bool {
        matches!(self, SubmissionState::Validating | SubmissionState::Submitting)
    }
}

/// What a screen renders from
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SubmissionStatus {
    pub state: SubmissionState,
    /// Alert from the last attempt, cleared when a new attempt starts
    pub error: Option<UserAlert>,
    /// States of the latest attempt, oldest first, starting with the state
    /// it was submitted from
    pub trail: Vec<SubmissionState>,
}

impl SubmissionStatus {
    fn new() -> Self {
        Self {
            state: SubmissionState::Idle,
            error: None,
            trail: vec![SubmissionState::Idle],
        }
    }

    /// Start a new attempt; the trail restarts from the current state
    fn restart(&mut self) {
        self.error = None;
        self.trail = vec![self.state];
        self.enter(SubmissionState::Validating);
    }

    fn enter(&mut self, state: SubmissionState) {
        self.state = state;
        self.trail.push(state);
    }
}

/// Result of one `submit` call
#[derive(Debug)]
pub enum SubmitOutcome {
    /// Another submission is in flight, or the booking already succeeded
    Ignored,
    /// Validation failed; nothing was sent
    Rejected(ValidationError),
    /// Booked; the navigator has been called
    Confirmed(BookingConfirmation),
    /// The service rejected the booking or could not be reached
    Failed(SubmissionError),
}

/// One submission from `begin` until it settles in `Idle`, `Succeeded` or
/// `Failed`. Dropped unsettled, it fails the attempt.
struct Attempt<'a> {
    workflow_id: Uuid,
    status: &'a watch::Sender<SubmissionStatus>,
    settled: bool,
}

impl Attempt<'_> {
    fn advance(&self, state: SubmissionState) {
        self.status.send_modify(|status| status.enter(state));
    }

    fn settle(mut self, state: SubmissionState, error: Option<UserAlert>) {
        self.settled = true;
        self.status.send_modify(|status| {
            status.error = error;
            status.enter(state);
        });
    }
}

impl Drop for Attempt<'_> {
    fn drop(&mut self) {
        if self.settled {
            return;
        }
        tracing::warn!("Workflow {} submission abandoned before it settled", self.workflow_id);
        self.status.send_modify(|status| {
            status.error = Some(UserAlert::unexpected());
            status.enter(SubmissionState::Failed);
        });
    }
}

pub struct SubmissionWorkflow {
    id: Uuid,
    service: Arc<dyn BookingService>,
    navigator: Arc<dyn Navigator>,
    submit_timeout: Option<Duration>,
    status: watch::Sender<SubmissionStatus>,
}

impl SubmissionWorkflow {
    pub fn new(
        service: Arc<dyn BookingService>,
        navigator: Arc<dyn Navigator>,
        config: &WorkflowConfig,
    ) -> Self {
        let (status, _) = watch::channel(SubmissionStatus::new());
        Self {
            id: Uuid::new_v4(),
            service,
            navigator,
            submit_timeout: config.submit_timeout(),
            status,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn state(&self) -> SubmissionState {
        self.status.borrow().state
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status.borrow().clone()
    }

    /// Follow state changes, e.g. to disable the submit control
    pub fn subscribe(&self) -> watch::Receiver<SubmissionStatus> {
        self.status.subscribe()
    }

    /// Validate the form, send it, and navigate on success.
    ///
    /// Returns `Ignored` without touching the form while a submission is in
    /// flight or after the booking succeeded.
    pub async fn submit<F>(&self, form: &F) -> SubmitOutcome
    where
        F: BookingForm + ?Sized,
    {
        let Some(attempt) = self.begin() else {
            tracing::debug!("Workflow {} ignoring submit while {:?}", self.id, self.state());
            return SubmitOutcome::Ignored;
        };

        if let Err(err) = form.validate() {
            tracing::warn!("Workflow {} validation failed: {}", self.id, err);
            attempt.settle(SubmissionState::Idle, Some(SubmissionError::from(err.clone()).alert()));
            return SubmitOutcome::Rejected(err);
        }

        let request = form.build_request();
        attempt.advance(SubmissionState::Submitting);
        tracing::info!(
            "Workflow {} submitting {} booking for {} ({} travelers, total {})",
            self.id,
            request.selection.kind(),
            request.selection.reference(),
            request.travelers.len(),
            format_price(&request.total_price)
        );
        tracing::debug!("Workflow {} contact {:?}", self.id, request.contact);

        match self.call_service(&request).await {
            Ok(confirmation) => {
                tracing::info!(
                    "Workflow {} booking confirmed: {}",
                    self.id,
                    confirmation.reference().unwrap_or("no reference")
                );
                attempt.settle(SubmissionState::Succeeded, None);
                self.navigator.navigate(Confirmation {
                    screen: ConfirmationScreen::for_selection(&request.selection),
                    confirmation: confirmation.clone(),
                    request,
                });
                SubmitOutcome::Confirmed(confirmation)
            }
            Err(err) => {
                match &err {
                    SubmissionError::BookingFailed(_) => {
                        tracing::warn!("Workflow {} booking rejected: {}", self.id, err)
                    }
                    _ => tracing::error!("Workflow {} booking error: {}", self.id, err),
                }
                attempt.settle(SubmissionState::Failed, Some(err.alert()));
                SubmitOutcome::Failed(err)
            }
        }
    }

    /// Idle/Failed → Validating, atomically. `None` if a submit may not start.
    fn begin(&self) -> Option<Attempt<'_>> {
        let started = self.status.send_if_modified(|status| {
            if !status.state.accepts_submit() {
                return false;
            }
            status.restart();
            true
        });

        started.then(|| Attempt {
            workflow_id: self.id,
            status: &self.status,
            settled: false,
        })
    }

    async fn call_service(&self, request: &SubmissionRequest) -> Result<BookingConfirmation, SubmissionError> {
        let call = async {
            match &request.selection {
                ProductSelection::Flight { .. } => self.service.create_order(request).await,
                ProductSelection::Hotel { .. } | ProductSelection::Package { .. } => {
                    self.service.create_booking(request).await
                }
            }
        };

        let response = match self.submit_timeout {
            Some(limit) => tokio::time::timeout(limit, call)
                .await
                .map_err(|_| SubmissionError::TimedOut(limit))?,
            None => call.await,
        }
        .map_err(SubmissionError::Transport)?;

        match response.into_outcome() {
            BookingOutcome::Confirmed(confirmation) => Ok(confirmation),
            BookingOutcome::Rejected { error } => Err(SubmissionError::BookingFailed(error)),
        }
    }
}
