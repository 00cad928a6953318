use axum::{Form, extract::State, http::StatusCode};
use chrono::Utc;
use serde::Deserialize;
use util::state::AppState;

use db::models::attendance::Model as Attendance;

/// Form fields posted by the scan page.
///
/// Everything is optional at the type level so missing fields produce a 400
/// with a message instead of an extractor rejection.
#[derive(Debug, Deserialize)]
pub struct SubmitAttendanceForm {
    pub student_id: Option<String>,
    pub student_name: Option<String>,
    pub session_id: Option<String>,
}

/// POST `/submit_attendance`
///
/// Records attendance from the scan form.
///
/// Duplicate policy: this route rejects a second submission for the same
/// `(student_id, session_id)` pair. The check and the insert are separate
/// statements, so two concurrent submissions can still both land; sequential
/// duplicates are reliably rejected.
///
/// **Response**: plain text; `400` for missing fields or duplicates; `500`
/// on store error.
pub async fn submit_attendance(
    State(state): State<AppState>,
    Form(form): Form<SubmitAttendanceForm>,
) -> (StatusCode, String) {
    let student_id = form.student_id.as_deref().unwrap_or("").trim();
    let session_id = form.session_id.as_deref().unwrap_or("").trim();
    let student_name = form
        .student_name
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty());

    if student_id.is_empty() || session_id.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            "Missing student ID or session ID".to_string(),
        );
    }

    match Attendance::exists_for(state.db(), student_id, session_id).await {
        Ok(true) => {
            return (
                StatusCode::BAD_REQUEST,
                "Attendance already marked for this session.".to_string(),
            );
        }
        Ok(false) => {}
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Database error: {e}"),
            );
        }
    }

    match Attendance::create(state.db(), student_id, student_name, session_id, Utc::now()).await {
        Ok(_) => (
            StatusCode::OK,
            "Attendance marked successfully!".to_string(),
        ),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Database error: {e}"),
        ),
    }
}
