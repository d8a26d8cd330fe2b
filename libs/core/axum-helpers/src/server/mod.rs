//! Server infrastructure: router layering, serving, graceful shutdown.
//!
//! ```ignore
//! use axum_helpers::server::{create_production_app, create_router};
//!
//! let router = create_router(api_routes);
//! create_production_app(router, &config.server, Duration::from_secs(30), async move {
//!     database::sql::close(db).await.ok();
//! })
//! .await?;
//! ```

pub mod app;
pub mod shutdown;

pub use app::{create_production_app, create_router, serve_until};
pub use shutdown::{ShutdownCoordinator, shutdown_signal};
