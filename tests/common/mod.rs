//! Shared utilities for integration testing.

use axum::body::Body;
use axum::http::Request;
use axum::response::Response;
use axum::Router;
use tower::util::ServiceExt;

use portfolio_site::config::PortfolioConfig;
use portfolio_site::HttpServer;

/// Build the real router for a profile, exactly as the server would.
pub fn test_router(config: PortfolioConfig) -> Router {
    HttpServer::new(config)
        .expect("template engine initializes")
        .router()
}

/// Drive one GET request through the router without binding a socket.
pub async fn get(router: Router, path: &str) -> Response {
    router
        .oneshot(
            Request::builder()
                .uri(path)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap()
}

/// Collect a response body as UTF-8 text.
pub async fn body_text(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), 2 * 1024 * 1024)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
