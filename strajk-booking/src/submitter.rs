use std::sync::{Arc, Mutex};
use strajk_core::{
    validate, BookingConfirmation, BookingRequest, BookingService, FormSnapshot, Navigator,
    ValidationError, CONFIRMATION_ROUTE,
};
use strajk_store::{SessionStore, CONFIRMATION_KEY};
use tracing::{info, warn};

/// Submission lifecycle. `Succeeded` and `Failed` are transient UI
/// signals: the next `submit` call (or an explicit `reset`) returns the
/// machine to `Idle`. Only `Submitting` blocks further attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitState {
    Idle,
    Validating,
    Submitting,
    Succeeded,
    Failed,
}

/// Drives one submission: validate -> build request -> call the booking
/// service -> persist the confirmation -> signal navigation. Every
/// failure path leaves the form untouched and the machine ready for a
/// resubmit.
pub struct BookingSubmitter {
    service: Arc<dyn BookingService>,
    store: Arc<dyn SessionStore>,
    navigator: Arc<dyn Navigator>,
    state: Mutex<SubmitState>,
}

impl BookingSubmitter {
    pub fn new(
        service: Arc<dyn BookingService>,
        store: Arc<dyn SessionStore>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            service,
            store,
            navigator,
            state: Mutex::new(SubmitState::Idle),
        }
    }

    pub fn state(&self) -> SubmitState {
        *self.state.lock().unwrap()
    }

    /// Acknowledge an observed terminal state.
    pub fn reset(&self) {
        self.set_state(SubmitState::Idle);
    }

    /// Run one submission attempt from a form snapshot.
    ///
    /// At most one request is in flight per submitter: a call made while
    /// another is in `Submitting` is ignored with `AlreadyInFlight` and
    /// has no side effects. A single service attempt is made, with no
    /// retry and no timeout beyond the transport default.
    pub async fn submit(
        &self,
        snapshot: &FormSnapshot,
    ) -> Result<BookingConfirmation, SubmitError> {
        {
            let mut state = self.state.lock().unwrap();
            if *state == SubmitState::Submitting {
                return Err(SubmitError::AlreadyInFlight);
            }
            *state = SubmitState::Validating;
        }

        if let Err(reason) = validate(snapshot) {
            warn!("Booking rejected: {}", reason);
            self.set_state(SubmitState::Failed);
            return Err(SubmitError::Invalid(reason));
        }

        self.set_state(SubmitState::Submitting);
        let request = BookingRequest::from_form(snapshot);

        let confirmation = match self.service.book(&request).await {
            Ok(confirmation) => confirmation,
            Err(source) => {
                warn!("Booking service call failed: {}", source);
                self.set_state(SubmitState::Failed);
                return Err(SubmitError::ServiceFailure(source));
            }
        };

        let raw = match serde_json::to_string(&confirmation) {
            Ok(raw) => raw,
            Err(source) => {
                self.set_state(SubmitState::Failed);
                return Err(SubmitError::ServiceFailure(Box::new(source)));
            }
        };

        // Navigation only after the confirmation is persisted
        self.store.put(CONFIRMATION_KEY, &raw);
        self.navigator.go_to(CONFIRMATION_ROUTE);
        info!("Booking confirmed: {}", confirmation.id);
        self.set_state(SubmitState::Succeeded);

        Ok(confirmation)
    }

    fn set_state(&self, state: SubmitState) {
        *self.state.lock().unwrap() = state;
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error("Something went wrong with the booking, please try again")]
    ServiceFailure(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("A booking is already being submitted")]
    AlreadyInFlight,
}

/// Navigator that records requested routes, for tests and demos.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    routes: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn routes(&self) -> Vec<String> {
        self.routes.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn go_to(&self, route: &str) {
        self.routes.lock().unwrap().push(route.to_string());
    }
}
