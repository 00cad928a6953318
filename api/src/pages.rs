//! Server-rendered HTML for the human-facing scan/submit flow.
//!
//! The only page is the attendance form a student lands on after scanning a
//! QR code. The session id comes out of a URL, so it is escaped before being
//! interpolated into markup.

/// Renders the attendance submission form, pre-filled with `session_id`.
///
/// The form posts `student_id`, `student_name` and a hidden `session_id` to
/// `/submit_attendance`.
pub fn scan_form(session_id: &str) -> String {
    let session_id = escape_html(session_id);
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>Mark Attendance</title>
</head>
<body>
  <h1>Mark attendance for {session_id}</h1>
  <form action="/submit_attendance" method="post">
    <label for="student_id">Student ID</label>
    <input type="text" id="student_id" name="student_id" required>
    <label for="student_name">Name</label>
    <input type="text" id="student_name" name="student_name">
    <input type="hidden" name="session_id" value="{session_id}">
    <button type="submit">Submit</button>
  </form>
</body>
</html>
"#
    )
}

fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
