//! LendHub Server — peer-to-peer item rental backend.
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use lendhub_core::config::AppConfig;
use lendhub_core::error::AppError;
use lendhub_database::repositories::{
    BookingRepository, CommentRepository, ItemRepository, UserRepository,
};
use lendhub_database::{BookingStore, CommentStore, ItemStore, UserStore};
use lendhub_service::booking::BookingService;
use lendhub_service::item::{AvailabilityService, CommentService, ItemService};
use lendhub_service::user::UserService;

#[tokio::main]
async fn main() {
    let env = std::env::var("LENDHUB_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }
}

/// Initialize tracing/logging.
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Main server run function.
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting LendHub v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Database connection + migrations ─────────────────
    let db_pool = lendhub_database::connection::create_pool(&config.database).await?;
    lendhub_database::migration::run_migrations(&db_pool).await?;

    // ── Step 2: Initialize stores ────────────────────────────────
    let user_store: Arc<dyn UserStore> = Arc::new(UserRepository::new(db_pool.clone()));
    let item_store: Arc<dyn ItemStore> = Arc::new(ItemRepository::new(db_pool.clone()));
    let booking_store: Arc<dyn BookingStore> = Arc::new(BookingRepository::new(db_pool.clone()));
    let comment_store: Arc<dyn CommentStore> = Arc::new(CommentRepository::new(db_pool.clone()));

    // ── Step 3: Initialize services ──────────────────────────────
    let availability =
        AvailabilityService::new(Arc::clone(&booking_store), Arc::clone(&comment_store));
    let user_service = Arc::new(UserService::new(Arc::clone(&user_store)));
    let item_service = Arc::new(ItemService::new(
        Arc::clone(&item_store),
        Arc::clone(&user_store),
        availability,
    ));
    let booking_service = Arc::new(BookingService::new(
        Arc::clone(&booking_store),
        Arc::clone(&item_store),
        Arc::clone(&user_store),
    ));
    let comment_service = Arc::new(CommentService::new(
        Arc::clone(&booking_store),
        Arc::clone(&item_store),
        Arc::clone(&user_store),
        Arc::clone(&comment_store),
    ));

    // ── Step 4: Build and start HTTP server ──────────────────────
    let app_state = lendhub_api::state::AppState {
        config: Arc::new(config.clone()),
        user_service,
        item_service,
        booking_service,
        comment_service,
    };

    let app = lendhub_api::router::build_router(app_state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("LendHub server listening on {addr}");

    let server = axum::serve(listener, app).with_graceful_shutdown(shutdown_signal());
    server
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    tracing::info!("LendHub server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
