//! Application state shared across all handlers.

use std::sync::Arc;

use lendhub_core::config::AppConfig;
use lendhub_service::booking::BookingService;
use lendhub_service::item::{CommentService, ItemService};
use lendhub_service::user::UserService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`. Holds services
/// only; any store implementation can back them.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// User CRUD service.
    pub user_service: Arc<UserService>,
    /// Item CRUD, search, and enrichment service.
    pub item_service: Arc<ItemService>,
    /// Booking lifecycle and query service.
    pub booking_service: Arc<BookingService>,
    /// Comment gate service.
    pub comment_service: Arc<CommentService>,
}
