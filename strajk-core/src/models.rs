use crate::form::FormSnapshot;
use serde::{Deserialize, Serialize};

/// Payload posted to the remote booking service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingRequest {
    pub date: String,
    pub time: String,
    pub players: u32,
    pub lanes: u32,
    pub shoes: Vec<String>,
}

impl BookingRequest {
    /// Derive the payload from a form snapshot at submit time.
    pub fn from_form(snapshot: &FormSnapshot) -> Self {
        Self {
            date: snapshot.date.clone(),
            time: snapshot.time.clone(),
            players: snapshot.players,
            lanes: snapshot.lanes,
            shoes: snapshot.shoes.clone(),
        }
    }
}

/// The service-issued record of a completed booking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingConfirmation {
    pub id: String,
    pub price: f64,
    pub when: String,
    pub lanes: u32,
    pub people: u32,
    pub shoes: Vec<String>,
}

/// The service returns the confirmation either nested under a `booking`
/// field or flat at the top level. Both shapes normalize to the same
/// confirmation here, at the decode boundary.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum BookingResponse {
    Nested { booking: BookingConfirmation },
    Flat(BookingConfirmation),
}

impl BookingResponse {
    pub fn into_confirmation(self) -> BookingConfirmation {
        match self {
            BookingResponse::Nested { booking } => booking,
            BookingResponse::Flat(confirmation) => confirmation,
        }
    }
}
