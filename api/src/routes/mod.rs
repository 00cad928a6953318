//! HTTP route entry point.
//!
//! Route groups:
//! - attendance: `/generate_qr/{session_id}`, `/mark_attendance`, `/get_attendance`
//! - scan: `/scan/{token}`, `/scan/direct/{session_id}`, `/submit_attendance`
//! - `/favicon.ico` → served from the static root

use axum::{
    Router,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use util::{config, state::AppState};

pub mod attendance;
pub mod scan;

use attendance::attendance_routes;
use scan::scan_routes;

/// Builds the complete application router for all HTTP endpoints.
///
/// All routes are mounted at the root, matching the public contract; the
/// request-logging middleware is layered on in `main`, not here, so tests can
/// drive this router without connection info.
pub fn routes(app_state: AppState) -> Router {
    Router::new()
        .merge(attendance_routes())
        .merge(scan_routes())
        .route("/favicon.ico", get(favicon))
        .with_state(app_state)
}

/// GET `/favicon.ico` — the one static asset, read from `STATIC_ROOT`.
async fn favicon() -> Response {
    let path = std::path::Path::new(&config::static_root()).join("favicon.ico");
    match tokio::fs::read(&path).await {
        Ok(bytes) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "image/x-icon")],
            bytes,
        )
            .into_response(),
        Err(_) => StatusCode::NOT_FOUND.into_response(),
    }
}
