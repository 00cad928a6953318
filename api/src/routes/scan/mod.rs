//! Human-facing scan/submit routes: the pages a student hits after scanning
//! a QR code, plus the form submission endpoint.

use axum::{
    Router,
    routing::{get, post},
};
use util::state::AppState;

mod get;
mod post;

pub use get::{scan_direct, scan_token};
pub use post::submit_attendance;

pub fn scan_routes() -> Router<AppState> {
    Router::new()
        // `/scan/direct/...` must be registered alongside `/scan/{token}`;
        // axum matches the more specific literal segment first.
        .route("/scan/direct/{session_id}", get(scan_direct))
        .route("/scan/{token}", get(scan_token))
        .route("/submit_attendance", post(submit_attendance))
}
