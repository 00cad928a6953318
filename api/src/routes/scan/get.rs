use axum::{
    extract::Path,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use chrono::Utc;

use crate::{pages, token};

/// GET `/scan/{token}`
///
/// Validates the time-bucketed token and, if it is still inside its window,
/// renders the submission form pre-filled with the extracted session id.
///
/// **Response**: HTML form on success; `400` plain text for a malformed or
/// expired token.
pub async fn scan_token(Path(token): Path<String>) -> Response {
    match token::validate(&token, Utc::now()) {
        Ok(session_id) => Html(pages::scan_form(&session_id)).into_response(),
        Err(e) => (StatusCode::BAD_REQUEST, e.to_string()).into_response(),
    }
}

/// GET `/scan/direct/{session_id}`
///
/// Renders the submission form without any token validation. This keeps a
/// side door for organizers who hand out a session id instead of a QR code;
/// anyone holding the id can open the form at any time.
pub async fn scan_direct(Path(session_id): Path<String>) -> Html<String> {
    Html(pages::scan_form(&session_id))
}
