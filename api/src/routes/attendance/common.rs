use serde::{Deserialize, Serialize};

use db::models::attendance::Model as Attendance;

/// A persisted attendance row as returned by `/get_attendance`.
#[derive(Debug, Serialize)]
pub struct AttendanceRecordResponse {
    pub id: i64,
    pub student_id: String,
    pub student_name: Option<String>,
    pub session_id: String,
    pub timestamp: String,
}

impl From<Attendance> for AttendanceRecordResponse {
    fn from(m: Attendance) -> Self {
        Self {
            id: m.id,
            student_id: m.student_id,
            student_name: m.student_name,
            session_id: m.session_id,
            timestamp: m.timestamp,
        }
    }
}

/// Request body for `/mark_attendance`.
///
/// Fields are optional so that missing ones reach the handler and come back
/// as a 400 with a message, rather than a deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct MarkAttendanceReq {
    pub student_id: Option<String>,
    pub session_id: Option<String>,
}
