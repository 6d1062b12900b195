pub mod events;
pub mod form;
pub mod models;
pub mod service;
pub mod validator;

pub use events::{FormEvent, FormField};
pub use form::{BookingForm, FormError, FormSnapshot};
pub use models::{BookingConfirmation, BookingRequest, BookingResponse};
pub use service::{BookingService, Navigator, CONFIRMATION_ROUTE};
pub use validator::{validate, ValidationError, PLAYERS_PER_LANE};
