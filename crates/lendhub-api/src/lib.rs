//! # lendhub-api
//!
//! HTTP API layer for LendHub: Axum router, handlers, DTOs, extractors,
//! and the error-to-response mapping.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod router;
pub mod state;

pub use error::ApiError;
pub use state::AppState;
