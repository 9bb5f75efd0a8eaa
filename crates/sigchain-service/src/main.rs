//! Signature Device Service Binary
//!
//! Runs the HTTP server for device provisioning and transaction signing.

use std::env;
use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use sigchain_service::{
    create_router, AppState, DeviceRepository, DeviceService, MemoryRepository,
};

#[tokio::main]
async fn main() {
    // Initialize logging
    let log_level = env::var("SIGNING_SERVICE_LOG_LEVEL")
        .unwrap_or_else(|_| "info".into())
        .parse()
        .unwrap_or(Level::INFO);

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");

    // Configuration
    let port: u16 = env::var("SIGNING_SERVICE_PORT")
        .unwrap_or_else(|_| "8080".into())
        .parse()
        .expect("SIGNING_SERVICE_PORT must be a valid port number");

    // Shutdown token: cancels in-flight signs that have not yet acquired
    // their device lock, then drains the server.
    let shutdown = CancellationToken::new();
    {
        let shutdown = shutdown.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                info!("Shutdown signal received");
                shutdown.cancel();
            }
        });
    }

    // Initialize storage and the signing core
    let repo: Arc<dyn DeviceRepository> = Arc::new(MemoryRepository::new());
    let service = DeviceService::new(repo);

    // Create application state
    let state = Arc::new(AppState {
        service,
        shutdown: shutdown.clone(),
    });

    // Build router
    let app = create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind to address");

    info!(addr = %addr, "Signature device service listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown.cancelled_owned())
        .await
        .expect("Server error");
}
