use crate::models::{BookingConfirmation, BookingRequest};
use async_trait::async_trait;

/// Route the host router is asked to show after a successful booking.
pub const CONFIRMATION_ROUTE: &str = "/confirmation";

/// Boundary to the remote booking service. One request, one
/// confirmation; retries and timeouts are the caller's concern (the
/// submitter makes a single attempt and relies on transport defaults).
#[async_trait]
pub trait BookingService: Send + Sync {
    async fn book(
        &self,
        request: &BookingRequest,
    ) -> Result<BookingConfirmation, Box<dyn std::error::Error + Send + Sync>>;
}

/// Routing capability. The engine asks for a route change exactly once
/// per successful submission; how the host gets there is out of scope.
pub trait Navigator: Send + Sync {
    fn go_to(&self, route: &str);
}
