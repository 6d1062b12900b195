use std::sync::Arc;
use strajk_core::BookingConfirmation;
use strajk_store::{SessionStore, CONFIRMATION_KEY};
use tracing::warn;

/// Outcome of looking up the persisted confirmation.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfirmationStatus {
    Found(ConfirmationView),
    NoBooking,
}

/// A confirmation prepared for display.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfirmationView {
    pub confirmation: BookingConfirmation,
}

impl ConfirmationView {
    /// The stored `when` with date and time side by side,
    /// e.g. `2024-12-24T14:00` -> `2024-12-24 14:00`.
    pub fn when_display(&self) -> String {
        self.confirmation.when.replacen('T', " ", 1)
    }

    pub fn price_display(&self) -> String {
        format!("{} sek", self.confirmation.price)
    }
}

/// Reads the confirmation the submitter persisted. Read-only: the store
/// is never cleared here, so repeated reads return the same result.
pub struct ConfirmationReader {
    store: Arc<dyn SessionStore>,
}

impl ConfirmationReader {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    pub fn read(&self) -> ConfirmationStatus {
        let raw = match self.store.get(CONFIRMATION_KEY) {
            Some(raw) => raw,
            None => return ConfirmationStatus::NoBooking,
        };

        match serde_json::from_str::<BookingConfirmation>(&raw) {
            Ok(confirmation) => ConfirmationStatus::Found(ConfirmationView { confirmation }),
            Err(reason) => {
                warn!("Stored confirmation is unreadable: {}", reason);
                ConfirmationStatus::NoBooking
            }
        }
    }
}
