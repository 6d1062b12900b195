pub mod confirmation;
pub mod remote;
pub mod submitter;

pub use confirmation::{ConfirmationReader, ConfirmationStatus, ConfirmationView};
pub use remote::{HttpBookingService, MockBookingService};
pub use submitter::{BookingSubmitter, RecordingNavigator, SubmitError, SubmitState};
