mod helpers;

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::helpers::app::make_test_app;

    const PNG_MAGIC: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];

    async fn body_json(res: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(res.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn mark_req(body: &Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/mark_attendance")
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    // ---------------------------
    // /generate_qr/{session_id}
    // ---------------------------

    #[tokio::test]
    async fn test_generate_qr_returns_png() {
        let (app, _state) = make_test_app().await;

        let req = Request::builder()
            .uri("/generate_qr/CS101")
            .header("Host", "127.0.0.1:3000")
            .body(Body::empty())
            .unwrap();
        let res = app.oneshot(req).await.unwrap();

        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(res.headers()["content-type"], "image/png");

        let bytes = axum::body::to_bytes(res.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&bytes[..8], &PNG_MAGIC);
    }

    #[tokio::test]
    async fn test_generate_qr_blank_session_id_rejected() {
        let (app, _state) = make_test_app().await;

        let req = Request::builder()
            .uri("/generate_qr/%20")
            .header("Host", "127.0.0.1:3000")
            .body(Body::empty())
            .unwrap();
        let res = app.oneshot(req).await.unwrap();

        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let json = body_json(res).await;
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "Session ID is required");
    }

    // ---------------------------
    // /mark_attendance
    // ---------------------------

    #[tokio::test]
    async fn test_mark_attendance_then_listed() {
        let (app, _state) = make_test_app().await;

        let body = serde_json::json!({"student_id": "S1", "session_id": "CS101"});
        let res = app.clone().oneshot(mark_req(&body)).await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let json = body_json(res).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["message"], "Attendance marked successfully");

        let res = app
            .oneshot(
                Request::builder()
                    .uri("/get_attendance")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);

        let json = body_json(res).await;
        let records = json["data"].as_array().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["student_id"], "S1");
        assert_eq!(records[0]["session_id"], "CS101");
        assert_eq!(records[0]["student_name"], Value::Null);
        // Stored pre-formatted, e.g. "2026-08-23 10:15:42 UTC"
        assert!(records[0]["timestamp"].as_str().unwrap().ends_with(" UTC"));
    }

    #[tokio::test]
    async fn test_mark_attendance_missing_field_rejected() {
        let (app, _state) = make_test_app().await;

        for body in [
            serde_json::json!({"student_id": "S1"}),
            serde_json::json!({"session_id": "CS101"}),
            serde_json::json!({"student_id": "", "session_id": "CS101"}),
        ] {
            let res = app.clone().oneshot(mark_req(&body)).await.unwrap();
            assert_eq!(res.status(), StatusCode::BAD_REQUEST, "body {body}");
            let json = body_json(res).await;
            assert_eq!(json["message"], "Missing student_id or session_id");
        }
    }

    #[tokio::test]
    async fn test_mark_attendance_allows_re_marking() {
        // The API path deliberately skips the duplicate check.
        let (app, _state) = make_test_app().await;

        let body = serde_json::json!({"student_id": "S1", "session_id": "CS101"});
        for _ in 0..2 {
            let res = app.clone().oneshot(mark_req(&body)).await.unwrap();
            assert_eq!(res.status(), StatusCode::OK);
        }

        let res = app
            .oneshot(
                Request::builder()
                    .uri("/get_attendance")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let json = body_json(res).await;
        assert_eq!(json["data"].as_array().unwrap().len(), 2);
    }

    // ---------------------------
    // /get_attendance
    // ---------------------------

    #[tokio::test]
    async fn test_get_attendance_empty_store() {
        let (app, _state) = make_test_app().await;

        let res = app
            .oneshot(
                Request::builder()
                    .uri("/get_attendance")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);

        let json = body_json(res).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["data"], serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_get_attendance_preserves_insertion_order() {
        let (app, _state) = make_test_app().await;

        for sid in ["S1", "S2", "S3"] {
            let body = serde_json::json!({"student_id": sid, "session_id": "CS101"});
            let res = app.clone().oneshot(mark_req(&body)).await.unwrap();
            assert_eq!(res.status(), StatusCode::OK);
        }

        let res = app
            .oneshot(
                Request::builder()
                    .uri("/get_attendance")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let json = body_json(res).await;
        let ids: Vec<&str> = json["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["student_id"].as_str().unwrap())
            .collect();
        assert_eq!(ids, vec!["S1", "S2", "S3"]);
    }
}
