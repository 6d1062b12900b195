use async_trait::async_trait;
use reqwest::Client;
use std::sync::atomic::{AtomicUsize, Ordering};
use strajk_core::{BookingConfirmation, BookingRequest, BookingResponse, BookingService};
use strajk_store::Config;
use tracing::debug;

/// Client for the remote booking service: one POST with the reservation
/// payload, confirmation JSON back (flat or nested under `booking`).
pub struct HttpBookingService {
    client: Client,
    endpoint_url: String,
}

impl HttpBookingService {
    pub fn new(endpoint_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint_url: endpoint_url.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.service.endpoint_url.clone())
    }
}

#[async_trait]
impl BookingService for HttpBookingService {
    async fn book(
        &self,
        request: &BookingRequest,
    ) -> Result<BookingConfirmation, Box<dyn std::error::Error + Send + Sync>> {
        debug!("Posting booking to {}", self.endpoint_url);

        let response = self
            .client
            .post(&self.endpoint_url)
            .json(request)
            .send()
            .await?
            .error_for_status()?;

        let decoded: BookingResponse = response.json().await?;
        Ok(decoded.into_confirmation())
    }
}

/// Canned-response service for tests and demos. Echoes the request back
/// in the confirmation the way the real service does, with a fixed id
/// and price; `failing()` simulates a service outage instead.
pub struct MockBookingService {
    price: f64,
    fail: bool,
    calls: AtomicUsize,
}

impl MockBookingService {
    pub fn new(price: f64) -> Self {
        Self {
            price,
            fail: false,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            price: 0.0,
            fail: true,
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of booking calls received.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl BookingService for MockBookingService {
    async fn book(
        &self,
        request: &BookingRequest,
    ) -> Result<BookingConfirmation, Box<dyn std::error::Error + Send + Sync>> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if self.fail {
            return Err("Simulated booking service outage".into());
        }

        Ok(BookingConfirmation {
            id: "mock-id".to_string(),
            price: self.price,
            when: format!("{}T{}", request.date, request.time),
            lanes: request.lanes,
            people: request.players,
            shoes: request.shoes.clone(),
        })
    }
}
