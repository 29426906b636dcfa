//! Shared test helpers for API integration tests.
//!
//! Builds the full router over in-memory stores so the suite runs
//! without a database.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use http::{Method, Request, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;
use uuid::Uuid;

use lendhub_api::router::build_router;
use lendhub_api::state::AppState;
use lendhub_core::config::AppConfig;
use lendhub_database::memory::{
    MemoryBookingStore, MemoryCommentStore, MemoryItemStore, MemoryUserStore,
};
use lendhub_database::{BookingStore, CommentStore, ItemStore, UserStore};
use lendhub_service::booking::BookingService;
use lendhub_service::item::{AvailabilityService, CommentService, ItemService};
use lendhub_service::user::UserService;

/// Header carrying the acting user's id.
pub const USER_ID_HEADER: &str = "X-Sharer-User-Id";

/// Build a router over fresh in-memory stores.
pub fn test_app() -> Router {
    let users = Arc::new(MemoryUserStore::new());
    let items = Arc::new(MemoryItemStore::new());
    let bookings = Arc::new(MemoryBookingStore::new(Arc::clone(&items)));
    let comments = Arc::new(MemoryCommentStore::new());

    let user_store: Arc<dyn UserStore> = users;
    let item_store: Arc<dyn ItemStore> = items;
    let booking_store: Arc<dyn BookingStore> = bookings;
    let comment_store: Arc<dyn CommentStore> = comments;

    let availability =
        AvailabilityService::new(Arc::clone(&booking_store), Arc::clone(&comment_store));
    let state = AppState {
        config: Arc::new(AppConfig::default()),
        user_service: Arc::new(UserService::new(Arc::clone(&user_store))),
        item_service: Arc::new(ItemService::new(
            Arc::clone(&item_store),
            Arc::clone(&user_store),
            availability,
        )),
        booking_service: Arc::new(BookingService::new(
            Arc::clone(&booking_store),
            Arc::clone(&item_store),
            Arc::clone(&user_store),
        )),
        comment_service: Arc::new(CommentService::new(
            Arc::clone(&booking_store),
            Arc::clone(&item_store),
            Arc::clone(&user_store),
            Arc::clone(&comment_store),
        )),
    };

    build_router(state)
}

/// Send one request and return the status plus the decoded JSON body.
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    user: Option<Uuid>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(user) = user {
        builder = builder.header(USER_ID_HEADER, user.to_string());
    }
    let request = match body {
        Some(value) => builder
            .header("content-type", "application/json")
            .body(Body::from(value.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

/// Register a user and return its id.
pub async fn create_user(app: &Router, name: &str, email: &str) -> Uuid {
    let (status, body) = send(
        app,
        Method::POST,
        "/users",
        None,
        Some(json!({"name": name, "email": email})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "user creation failed: {body}");
    body["id"].as_str().unwrap().parse().unwrap()
}

/// List an item for the given owner and return its id.
pub async fn create_item(app: &Router, owner: Uuid, name: &str, available: bool) -> Uuid {
    let (status, body) = send(
        app,
        Method::POST,
        "/items",
        Some(owner),
        Some(json!({
            "name": name,
            "description": format!("{name} description"),
            "available": available,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "item creation failed: {body}");
    body["id"].as_str().unwrap().parse().unwrap()
}

/// Place a booking and return its id.
pub async fn create_booking(
    app: &Router,
    booker: Uuid,
    item: Uuid,
    start: chrono::DateTime<chrono::Utc>,
    end: chrono::DateTime<chrono::Utc>,
) -> Uuid {
    let (status, body) = send(
        app,
        Method::POST,
        "/bookings",
        Some(booker),
        Some(json!({"item_id": item, "start": start, "end": end})),
    )
    .await;
    assert_eq!(
        status,
        StatusCode::CREATED,
        "booking creation failed: {body}"
    );
    body["id"].as_str().unwrap().parse().unwrap()
}
