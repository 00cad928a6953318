//! JSON/API attendance routes: QR generation, direct marking, retrieval.

use axum::{
    Router,
    routing::{get, post},
};
use util::state::AppState;

mod common;
mod get;
mod post;

pub use get::{generate_qr, get_attendance};
pub use post::mark_attendance;

pub fn attendance_routes() -> Router<AppState> {
    Router::new()
        .route("/generate_qr/{session_id}", get(generate_qr))
        .route("/mark_attendance", post(mark_attendance))
        .route("/get_attendance", get(get_attendance))
}
