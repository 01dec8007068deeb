//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router with all page handlers
//! - Wire up middleware (tracing, timeout, request ID)
//! - Serve static assets under /static
//! - Bind the server to a listener and serve until shutdown

use std::sync::Arc;
use std::time::Duration;

use axum::{routing::get, Router};
use tera::Tera;
use tokio::net::TcpListener;
use tower_http::services::ServeDir;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::compose::sections::SiteChrome;
use crate::config::PortfolioConfig;
use crate::http::handlers;
use crate::http::request::RequestIdLayer;
use crate::lifecycle::signals::shutdown_signal;
use crate::render;

/// Application state injected into handlers.
///
/// The profile is immutable after startup, so sharing is plain `Arc`
/// cloning; no locking anywhere on the request path.
#[derive(Clone)]
pub struct AppState {
    pub profile: Arc<PortfolioConfig>,
    pub chrome: Arc<SiteChrome>,
    pub templates: Arc<Tera>,
}

/// HTTP server for the portfolio site.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server from a validated configuration.
    pub fn new(config: PortfolioConfig) -> Result<Self, tera::Error> {
        let templates = Arc::new(render::engine()?);
        let chrome = Arc::new(SiteChrome::from_profile(&config));
        let request_timeout = Duration::from_secs(config.server.request_timeout_secs);
        let asset_dir = config.server.asset_dir.clone();

        let state = AppState {
            profile: Arc::new(config),
            chrome,
            templates,
        };

        let router = Self::build_router(state, request_timeout, &asset_dir);
        Ok(Self { router })
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(state: AppState, request_timeout: Duration, asset_dir: &str) -> Router {
        Router::new()
            .route("/", get(handlers::home))
            .route("/projects", get(handlers::projects))
            .route("/publications", get(handlers::publications))
            .route("/experience", get(handlers::experience))
            .route("/healthz", get(handlers::health))
            .nest_service("/static", ServeDir::new(asset_dir))
            .fallback(handlers::not_found)
            .with_state(state)
            .layer(TimeoutLayer::new(request_timeout))
            .layer(RequestIdLayer)
            .layer(TraceLayer::new_for_http())
    }

    /// Clone of the underlying router, for driving requests in tests.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
