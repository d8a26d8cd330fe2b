use super::shutdown::ShutdownCoordinator;
use crate::errors::handlers::not_found;
use axum::Router;
use core_config::server::ServerConfig;
use std::future::Future;
use std::io;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::compression::CompressionLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info};

/// Wrap API routes with the cross-cutting layers every service gets:
/// request tracing, response compression and a JSON 404 fallback.
///
/// Routes keep their paths as given; nothing is nested under a prefix.
pub fn create_router(apis: Router) -> Router {
    apis.fallback(not_found)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        // gzip, br, deflate, zstd depending on Accept-Encoding
        .layer(CompressionLayer::new())
}

/// Serve `router` on an already bound listener until `shutdown` resolves,
/// then drain in-flight requests.
pub async fn serve_until<F>(listener: TcpListener, router: Router, shutdown: F) -> io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    info!("Server listening on {}", listener.local_addr()?);
    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(shutdown)
        .await
        .inspect_err(|e| {
            tracing::error!("Server encountered an error: {:?}", e);
        })
}

/// Bind, serve, and on SIGINT/SIGTERM run `cleanup` (bounded by
/// `shutdown_timeout`) after the server has stopped accepting requests.
pub async fn create_production_app<F>(
    router: Router,
    server_config: &ServerConfig,
    shutdown_timeout: Duration,
    cleanup: F,
) -> io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let coordinator = ShutdownCoordinator::new();
    let listener = TcpListener::bind(server_config.address()).await?;

    let signal_handle = {
        let coordinator = coordinator.clone();
        tokio::spawn(async move { coordinator.wait_for_signal().await })
    };

    let serve_result = {
        let coordinator = coordinator.clone();
        serve_until(listener, router, async move { coordinator.wait().await }).await
    };

    // Server may have stopped on its own error; release the signal task either way
    coordinator.shutdown();
    signal_handle.await.ok();

    info!("Starting cleanup tasks (timeout: {:?})", shutdown_timeout);
    match tokio::time::timeout(shutdown_timeout, cleanup).await {
        Ok(()) => info!("Cleanup completed successfully"),
        Err(_) => tracing::warn!(
            "Cleanup exceeded timeout of {:?}, forcing shutdown",
            shutdown_timeout
        ),
    }

    serve_result
}
