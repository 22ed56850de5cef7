//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router with the five routes
//! - Wire up middleware (tracing, timeout, security headers)
//! - Bind the server to a listener and serve until shutdown

use std::sync::Arc;
use std::time::Duration;

use axum::http::{header, HeaderValue};
use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::AppConfig;
use crate::http::handlers;
use crate::lifecycle::Shutdown;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
}

/// The HTTP front door.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        let config = Arc::new(config);
        let state = AppState {
            config: config.clone(),
        };
        let router = Self::build_router(&config, state);
        Self { router }
    }

    /// Build the Axum router with all middleware layers.
    ///
    /// The security headers override anything a handler sets, so every
    /// response carries them, error responses included.
    fn build_router(config: &AppConfig, state: AppState) -> Router {
        Router::new()
            .route("/data", get(handlers::fetch_users))
            .route("/berita", get(handlers::fetch_news))
            .route("/dashboard", get(handlers::fetch_dashboard))
            .route("/checkin", post(handlers::check_in))
            .route("/approve", post(handlers::approve))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )))
            .layer(TraceLayer::new_for_http())
            .layer(
                ServiceBuilder::new()
                    .layer(SetResponseHeaderLayer::overriding(
                        header::CONTENT_SECURITY_POLICY,
                        HeaderValue::from_static("default-src 'self'"),
                    ))
                    .layer(SetResponseHeaderLayer::overriding(
                        header::X_CONTENT_TYPE_OPTIONS,
                        HeaderValue::from_static("nosniff"),
                    ))
                    .layer(SetResponseHeaderLayer::overriding(
                        header::X_FRAME_OPTIONS,
                        HeaderValue::from_static("DENY"),
                    ))
                    .layer(SetResponseHeaderLayer::overriding(
                        header::X_XSS_PROTECTION,
                        HeaderValue::from_static("1; mode=block"),
                    ))
                    .layer(SetResponseHeaderLayer::overriding(
                        header::STRICT_TRANSPORT_SECURITY,
                        HeaderValue::from_static("max-age=63072000; includeSubDomains"),
                    )),
            )
    }

    /// Run the server until a shutdown is triggered or Ctrl+C arrives.
    pub async fn run(self, listener: TcpListener, shutdown: &Shutdown) -> std::io::Result<()> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        let mut rx = shutdown.subscribe();
        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                tokio::select! {
                    result = tokio::signal::ctrl_c() => {
                        if result.is_ok() {
                            tracing::info!("Shutdown signal received");
                        }
                    }
                    _ = rx.recv() => {
                        tracing::info!("Shutdown triggered");
                    }
                }
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
