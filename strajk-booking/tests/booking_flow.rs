use axum::http::StatusCode;
use axum::{routing::post, Json, Router};
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::Arc;
use strajk_booking::{
    BookingSubmitter, ConfirmationReader, ConfirmationStatus, HttpBookingService,
    RecordingNavigator, SubmitError, SubmitState,
};
use strajk_core::{BookingRequest, BookingService, FormSnapshot};
use strajk_store::{InMemorySessionStore, SessionStore, CONFIRMATION_KEY};

async fn serve(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

fn confirmation_body(req: &BookingRequest) -> Value {
    json!({
        "id": "mock-id",
        "price": 340,
        "when": format!("{}T{}", req.date, req.time),
        "lanes": req.lanes,
        "people": req.players,
        "shoes": req.shoes,
    })
}

fn nested_router() -> Router {
    Router::new().route(
        "/",
        post(|Json(req): Json<BookingRequest>| async move {
            Json(json!({ "booking": confirmation_body(&req) }))
        }),
    )
}

fn flat_router() -> Router {
    Router::new().route(
        "/",
        post(|Json(req): Json<BookingRequest>| async move { Json(confirmation_body(&req)) }),
    )
}

fn snapshot(players: u32, lanes: u32) -> FormSnapshot {
    FormSnapshot {
        date: "2024-12-24".to_string(),
        time: "14:00".to_string(),
        players,
        lanes,
        shoes: vec!["42".to_string(); players as usize],
    }
}

#[tokio::test]
async fn test_booking_flow_end_to_end() {
    let _ = tracing_subscriber::fmt::try_init();

    let addr = serve(nested_router()).await;
    let service = Arc::new(HttpBookingService::new(format!("http://{addr}")));
    let store = Arc::new(InMemorySessionStore::new());
    let navigator = Arc::new(RecordingNavigator::new());
    let submitter = BookingSubmitter::new(service, store.clone(), navigator.clone());

    let confirmation = submitter.submit(&snapshot(2, 1)).await.unwrap();
    assert_eq!(confirmation.id, "mock-id");
    assert_eq!(confirmation.price, 340.0);
    assert_eq!(submitter.state(), SubmitState::Succeeded);

    // Navigation happened exactly once, after the write
    assert_eq!(navigator.routes(), vec!["/confirmation"]);
    assert!(store.get(CONFIRMATION_KEY).is_some());

    // A separate page context reads the persisted confirmation back
    let reader = ConfirmationReader::new(store);
    let view = match reader.read() {
        ConfirmationStatus::Found(view) => view,
        ConfirmationStatus::NoBooking => panic!("confirmation should be persisted"),
    };
    assert_eq!(view.when_display(), "2024-12-24 14:00");
    assert_eq!(view.price_display(), "340 sek");
    assert_eq!(view.confirmation.shoes, vec!["42", "42"]);
}

#[tokio::test]
async fn test_flat_response_shape_is_accepted() {
    let addr = serve(flat_router()).await;
    let service = HttpBookingService::new(format!("http://{addr}"));

    let confirmation = service.book(&BookingRequest::from_form(&snapshot(2, 1))).await.unwrap();
    assert_eq!(confirmation.id, "mock-id");
    assert_eq!(confirmation.people, 2);
}

#[tokio::test]
async fn test_service_error_surfaces_as_failure() {
    let app = Router::new().route(
        "/",
        post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    );
    let addr = serve(app).await;

    let service = Arc::new(HttpBookingService::new(format!("http://{addr}")));
    let store = Arc::new(InMemorySessionStore::new());
    let navigator = Arc::new(RecordingNavigator::new());
    let submitter = BookingSubmitter::new(service, store.clone(), navigator.clone());

    let err = submitter.submit(&snapshot(2, 1)).await.unwrap_err();
    assert!(matches!(err, SubmitError::ServiceFailure(_)));
    assert_eq!(
        err.to_string(),
        "Something went wrong with the booking, please try again"
    );

    // Nothing persisted, no navigation, machine ready for a retry
    assert_eq!(store.get(CONFIRMATION_KEY), None);
    assert!(navigator.routes().is_empty());
    assert_eq!(submitter.state(), SubmitState::Failed);
    submitter.reset();
    assert_eq!(submitter.state(), SubmitState::Idle);
}

#[tokio::test]
async fn test_capacity_violation_never_reaches_the_network() {
    // Point the client at a port nothing listens on: if validation did
    // not gate the call, the submit would fail with a transport error
    // instead of a validation error.
    let service = Arc::new(HttpBookingService::new("http://127.0.0.1:9"));
    let store = Arc::new(InMemorySessionStore::new());
    let navigator = Arc::new(RecordingNavigator::new());
    let submitter = BookingSubmitter::new(service, store, navigator);

    let err = submitter.submit(&snapshot(9, 2)).await.unwrap_err();
    assert!(matches!(err, SubmitError::Invalid(_)));
    assert_eq!(
        err.to_string(),
        "Max 4 players per lane (9 players on 2 lanes)"
    );
}
