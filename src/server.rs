//! Router assembly.
//!
//! The locale routing middleware wraps the whole page router so that a
//! rewrite is routed on its new path. Trailing slashes are trimmed after the
//! routing decision, so `/en/` is served like `/en`.

use crate::contact::{Ack, ContactHandler, SubmissionError};
use crate::pages;
use crate::routing::locale_routing;
use axum::body::Bytes;
use axum::extract::State;
use axum::routing::{get, post};
use axum::{middleware, Json, Router};
use serde_json::{json, Value};
use tower_http::normalize_path::NormalizePathLayer;
use tower_http::trace::TraceLayer;

/// Shared, read-only request state.
#[derive(Clone)]
pub struct AppState {
    pub contact: ContactHandler,
}

impl AppState {
    pub fn new(contact: ContactHandler) -> Self {
        Self { contact }
    }
}

/// Build the application router.
///
/// Routes:
/// - `GET /health` - Liveness probe
/// - `POST /api/contact` - Submit a franchise inquiry
/// - `GET /:lang` - Region selection page
/// - `GET /:lang/:region` - Region page
pub fn router(state: AppState) -> Router {
    let pages = Router::new()
        .route("/health", get(health))
        .route("/api/contact", post(submit_contact))
        .route("/:lang", get(pages::get_region_selection))
        .route("/:lang/:region", get(pages::get_region_page))
        .fallback(pages::fallback)
        .with_state(state);

    Router::new()
        .fallback_service(pages)
        .layer(NormalizePathLayer::trim_trailing_slash())
        .layer(middleware::from_fn(locale_routing))
        .layer(TraceLayer::new_for_http())
}

/// GET /health
async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// POST /api/contact
///
/// Takes the raw body so malformed JSON is answered like missing fields.
async fn submit_contact(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Ack, SubmissionError> {
    state.contact.handle(&body).await
}
