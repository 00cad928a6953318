use axum::{Json, extract::State, http::StatusCode};
use chrono::Utc;
use util::state::AppState;

use crate::response::ApiResponse;

use super::common::MarkAttendanceReq;
use db::models::attendance::Model as Attendance;

/// POST `/mark_attendance`
///
/// Records attendance from a JSON body `{student_id, session_id}`.
///
/// Duplicate policy: this route performs **no** duplicate check — marking
/// twice inserts twice. It is the API correction path; the human-facing
/// `/submit_attendance` is the route that rejects duplicates.
///
/// **Response**: JSON envelope; `400` for missing or empty fields; `500` on
/// store error, echoing the raw error message.
pub async fn mark_attendance(
    State(state): State<AppState>,
    Json(body): Json<MarkAttendanceReq>,
) -> (StatusCode, Json<ApiResponse<()>>) {
    let student_id = body.student_id.as_deref().unwrap_or("").trim();
    let session_id = body.session_id.as_deref().unwrap_or("").trim();

    if student_id.is_empty() || session_id.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::error("Missing student_id or session_id")),
        );
    }

    match Attendance::create(state.db(), student_id, None, session_id, Utc::now()).await {
        Ok(_) => (
            StatusCode::OK,
            Json(ApiResponse::success((), "Attendance marked successfully")),
        ),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error(e.to_string())),
        ),
    }
}
