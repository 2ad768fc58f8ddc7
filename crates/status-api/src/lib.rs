//! HTTP service exposing a fixed application status endpoint.
//!
//! `GET /api/test` always answers `200 OK` with
//! `{"status":"success","message":"Application is running"}`; requests are
//! traced through `tower-http`.

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

/// Creates the Axum application router.
pub fn create_app() -> Router {
    let api = Router::new().route("/test", get(routes::health::check));

    Router::new()
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
}

/// Binds a TCP listener on the configured address.
pub async fn bind(config: &Config) -> Result<TcpListener> {
    let addr = config.addr();
    TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })
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
