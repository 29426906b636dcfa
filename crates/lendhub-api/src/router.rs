//! Route definitions for the LendHub HTTP API.
//!
//! Routes are organized by domain. The router receives `AppState` and
//! passes it to all handlers via Axum's `State` extractor.

use axum::{
    Router,
    routing::{delete, get, patch, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use lendhub_core::config::server::CorsConfig;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = build_cors_layer(&state.config.server.cors);

    Router::new()
        .merge(booking_routes())
        .merge(item_routes())
        .merge(user_routes())
        .merge(health_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Booking lifecycle and list endpoints.
fn booking_routes() -> Router<AppState> {
    Router::new()
        .route("/bookings", post(handlers::booking::create))
        .route("/bookings", get(handlers::booking::list_for_booker))
        .route(
            "/bookings/owner",
            get(handlers::booking::list_for_owner_items),
        )
        .route("/bookings/{id}", patch(handlers::booking::update_status))
        .route("/bookings/{id}", get(handlers::booking::get_by_id))
}

/// Item CRUD, search, and comment endpoints.
fn item_routes() -> Router<AppState> {
    Router::new()
        .route("/items", post(handlers::item::create))
        .route("/items", get(handlers::item::list_own))
        .route("/items/search", get(handlers::item::search))
        .route("/items/{id}", patch(handlers::item::update))
        .route("/items/{id}", get(handlers::item::get_by_id))
        .route("/items/{id}", delete(handlers::item::delete))
        .route("/items/{id}/comment", post(handlers::item::add_comment))
}

/// User CRUD endpoints.
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", post(handlers::user::create))
        .route("/users", get(handlers::user::list))
        .route("/users/{id}", patch(handlers::user::update))
        .route("/users/{id}", get(handlers::user::get_by_id))
        .route("/users/{id}", delete(handlers::user::delete))
}

/// Health check endpoints (no acting user required).
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health_check))
}

/// Build the CORS layer from configuration.
fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    use http::Method;
    use tower_http::cors::Any;

    let mut cors = CorsLayer::new();

    if config.allowed_origins.contains(&"*".to_string()) {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<http::HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        cors = cors.allow_origin(origins);
    }

    let methods: Vec<Method> = config
        .allowed_methods
        .iter()
        .filter_map(|m| m.parse().ok())
        .collect();
    cors = cors.allow_methods(methods);

    if config.allowed_headers.contains(&"*".to_string()) {
        cors = cors.allow_headers(Any);
    }

    cors.max_age(std::time::Duration::from_secs(config.max_age_seconds))
}
