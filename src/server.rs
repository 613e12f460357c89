//! HTTP server initialization and runtime setup.
//!
//! Handles object store setup and the Axum server lifecycle.

use crate::config::Config;
use crate::domain::repositories::BlobStore;
use crate::infrastructure::storage::S3BlobStore;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;

/// Builds the S3 store described by `config`.
pub async fn connect_store(config: &Config) -> Arc<dyn BlobStore> {
    let store = S3BlobStore::connect(
        config.storage_bucket.clone(),
        &config.aws_region,
        config.s3_endpoint_url.as_deref(),
        config.s3_force_path_style,
    )
    .await;

    Arc::new(store)
}

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - S3 client (shared by all requests)
/// - Axum HTTP server with graceful shutdown on Ctrl+C / SIGTERM
///
/// An unreachable bucket is logged but does not prevent startup; `/health`
/// keeps reporting it.
///
/// # Errors
///
/// Returns an error if:
/// - The listen address is invalid
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let store = connect_store(&config).await;

    if store.health_check().await {
        tracing::info!("Object store reachable");
    } else {
        tracing::warn!(
            "Bucket {} is not reachable yet; requests will fail until it is",
            config.storage_bucket
        );
    }

    let state = AppState::new(store);

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = wait_for_signal("Ctrl+C", tokio::signal::ctrl_c());

    #[cfg(unix)]
    let terminate = wait_for_signal("SIGTERM", async {
        let mut signal = tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())?;
        signal.recv().await;
        Ok(())
    });

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}

/// Completes when `signal` fires. Never completes if the listener could not
/// be installed, so a setup failure cannot trigger shutdown.
async fn wait_for_signal(name: &str, signal: impl Future<Output = std::io::Result<()>>) {
    if let Err(e) = signal.await {
        tracing::error!("Failed to listen for {}: {}", name, e);
        std::future::pending::<()>().await;
    }
}
