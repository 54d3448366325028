//! HTTP/JSON façade over the in-memory item store.
//!
//! # Overview
//! Exposes `item_core::ItemStore` through six routes: a greeting at `/`, a
//! health check at `/health`, and list/get/create/delete under `/items`.
//! Store outcomes map to status codes in `error::ApiError`.
//!
//! # Design
//! - The store is injected with `router(store)`; `app()` is a convenience
//!   that builds a fresh one, so every test gets an isolated catalog.
//! - `serve` takes an already-bound listener, letting tests bind port 0.

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;

use std::future::Future;

use tokio::net::TcpListener;

pub use error::ApiError;
pub use handlers::{Message, SharedStore};
pub use routes::{app, router};

/// Serve a fresh app on `listener` until the process exits.
pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// Serve a fresh app on `listener` until `shutdown` resolves, then drain
/// in-flight requests.
pub async fn serve<F>(listener: TcpListener, shutdown: F) -> Result<(), std::io::Error>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app())
        .with_graceful_shutdown(shutdown)
        .await
}

/// Resolves on Ctrl-C, or on SIGTERM where that exists.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("shutdown signal received");
}
