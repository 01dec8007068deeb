use axum::extract::State;
use axum::http::{StatusCode, Uri};
use axum::response::{Html, IntoResponse, Response};
use axum::Json;

use crate::compose::pages;
use crate::compose::sections::Page;
use crate::http::server::AppState;
use crate::render;

pub async fn home(State(state): State<AppState>) -> Response {
    page_response(&state, &pages::home(&state.profile))
}

pub async fn projects(State(state): State<AppState>) -> Response {
    page_response(&state, &pages::projects(&state.profile))
}

pub async fn publications(State(state): State<AppState>) -> Response {
    page_response(&state, &pages::publications(&state.profile))
}

pub async fn experience(State(state): State<AppState>) -> Response {
    page_response(&state, &pages::experience(&state.profile))
}

pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Router fallback: any path without a handler gets the 404 page.
pub async fn not_found(State(state): State<AppState>, uri: Uri) -> Response {
    tracing::warn!(path = %uri.path(), "No route matched");
    match render::render_not_found(&state.templates, &state.chrome, uri.path()) {
        Ok(html) => (StatusCode::NOT_FOUND, Html(html)).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "Not-found page failed to render");
            let html = render::render_error(&state.templates, &state.chrome);
            (StatusCode::NOT_FOUND, Html(html)).into_response()
        }
    }
}

/// Render a composed page, degrading to the generic failure page if the
/// template layer misbehaves. Rendering a valid profile is expected to be
/// total; this path existing at all is what keeps a defect user-visible
/// instead of a hung connection.
fn page_response(state: &AppState, page: &Page) -> Response {
    match render::render_page(&state.templates, &state.chrome, page) {
        Ok(html) => Html(html).into_response(),
        Err(err) => {
            tracing::error!(page = page.slug, error = %err, "Page rendering failed");
            let html = render::render_error(&state.templates, &state.chrome);
            (StatusCode::INTERNAL_SERVER_ERROR, Html(html)).into_response()
        }
    }
}
