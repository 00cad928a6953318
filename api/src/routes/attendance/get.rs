//! Attendance module: read-only routes (QR generation, record listing).

use axum::{
    Json,
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use axum_extra::TypedHeader;
use chrono::Utc;
use headers::Host;
use util::state::AppState;

use crate::{qr, response::ApiResponse, token};

use super::common::AttendanceRecordResponse;
use db::models::attendance::Model as Attendance;

/// GET `/generate_qr/{session_id}`
///
/// Renders a QR code encoding `http://{host}/scan/{token}`, where the token
/// binds `session_id` to the current 5-minute window. The host comes from the
/// request's own `Host` header, so the QR points back at whatever address the
/// organizer reached the server on.
///
/// **Response**: `image/png` on success; `400` for a blank session id; `500`
/// if rendering fails.
pub async fn generate_qr(
    Path(session_id): Path<String>,
    TypedHeader(host): TypedHeader<Host>,
) -> Response {
    if session_id.trim().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<()>::error("Session ID is required")),
        )
            .into_response();
    }

    let token = token::generate(&session_id, Utc::now());
    let qr_data = format!("http://{host}/scan/{token}");

    match qr::render_png(&qr_data) {
        Ok(png) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "image/png")],
            png,
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<()>::error(format!(
                "Failed to render QR code: {e}"
            ))),
        )
            .into_response(),
    }
}

/// GET `/get_attendance`
///
/// Lists all attendance records in insertion order.
///
/// **Response**: JSON envelope with the full record array; `500` on store
/// error, echoing the raw error message.
pub async fn get_attendance(
    State(state): State<AppState>,
) -> (StatusCode, Json<ApiResponse<Vec<AttendanceRecordResponse>>>) {
    match Attendance::list_all(state.db()).await {
        Ok(rows) => {
            let records: Vec<AttendanceRecordResponse> =
                rows.into_iter().map(Into::into).collect();
            (
                StatusCode::OK,
                Json(ApiResponse::success(records, "Attendance records retrieved")),
            )
        }
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error(e.to_string())),
        ),
    }
}
