//! HTTP responder for the user service.
//!
//! Answers `GET /health` and `GET /users` with fixed JSON documents and
//! every other request with 404. Requests are traced with `tracing`.

pub mod config;
pub mod error;
pub mod routes;

use std::future::Future;

use axum::Router;
use axum::routing::get;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use config::Config;
use error::{Result, ServerError};

/// Creates the Axum application router with all routes.
pub fn create_app() -> Router {
    Router::new()
        .route(
            "/health",
            get(routes::health::check).fallback(routes::not_found),
        )
        .route("/users", get(routes::users::list).fallback(routes::not_found))
        .fallback(routes::not_found)
        .layer(TraceLayer::new_for_http())
}

/// Binds the listening socket described by `config`.
pub async fn bind(config: &Config) -> Result<TcpListener> {
    let addr = config.addr();
    match TcpListener::bind(&addr).await {
        Ok(listener) => Ok(listener),
        Err(source) => Err(ServerError::Bind { addr, source }),
    }
}

/// Serves the application on `listener` until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, create_app())
        .with_graceful_shutdown(shutdown)
        .await?;
    Ok(())
}

/// Binds according to `config`, announces the listener and serves until `shutdown` resolves.
pub async fn run<F>(config: Config, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let listener = bind(&config).await?;
    let local_addr = listener.local_addr()?;
    tracing::info!(%local_addr, "user-service listening {}", local_addr.port());

    serve(listener, shutdown).await
}
