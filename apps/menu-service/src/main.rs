//! Menu Service Binary
//!
//! Starts the Mesa menu service.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin menu-service
//! ```
//!
//! # Environment Variables
//!
//! ## Required
//! - `MENU_STORE_URL`: Base URL of the managed document store API
//! - `MENU_STORE_TOKEN`: Bearer token for the store API
//!
//! ## Optional
//! - `MENU_COLLECTION`: Collection holding menu items (default: menu)
//! - `HTTP_PORT`: HTTP server port (default: 8080)
//! - `MENU_STORE_TIMEOUT_SECS`: Store request timeout (default: 10)
//! - `RUST_LOG`: Log level (default: info)

use std::net::SocketAddr;
use std::sync::Arc;

use menu_service::infrastructure::config::ServiceConfig;
use menu_service::infrastructure::http::{AppState, create_router};
use menu_service::infrastructure::store::RestMenuStore;
use tokio::net::TcpListener;
use tokio::signal;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    load_dotenv();
    init_tracing();

    tracing::info!("Starting Mesa Menu Service");

    let config = ServiceConfig::from_env()?;
    tracing::info!(
        http_port = config.http_port,
        collection = %config.store.collection,
        "Configuration loaded"
    );

    let store = Arc::new(RestMenuStore::new(&config.store)?);
    let state = AppState::new(store, env!("CARGO_PKG_VERSION"));
    let app = create_router(state);

    let http_addr: SocketAddr = format!("0.0.0.0:{}", config.http_port).parse()?;

    tracing::info!(%http_addr, "HTTP server starting");
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /health");
    tracing::info!("  GET  /api/v1/menu");
    tracing::info!("  POST /api/v1/menu/items");

    let listener = TcpListener::bind(http_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Menu service stopped");
    Ok(())
}

/// Load .env file from current or ancestor directories.
fn load_dotenv() {
    if dotenvy::dotenv().is_ok() {
        return;
    }

    if let Ok(cwd) = std::env::current_dir() {
        let mut dir = cwd.as_path();
        while let Some(parent) = dir.parent() {
            let env_path = parent.join(".env");
            if env_path.exists() {
                let _ = dotenvy::from_path(&env_path);
                return;
            }
            dir = parent;
        }
    }
}

/// Initialize the tracing subscriber with environment filter.
///
/// Uses static directive strings that are compile-time constants guaranteed to parse.
#[allow(clippy::expect_used)]
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(
                "menu_service=info"
                    .parse()
                    .expect("static directive 'menu_service=info' is valid"),
            ),
        )
        .init();
}

/// Wait for shutdown signal (SIGTERM or SIGINT).
///
/// # Panics
///
/// Panics if signal handlers cannot be installed: a process that cannot
/// respond to termination signals is worse than one that fails at startup.
#[allow(clippy::expect_used)]
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("signal handler installation is critical for graceful shutdown");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("SIGTERM handler installation is critical for graceful shutdown")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, initiating shutdown");
        }
    }
}
