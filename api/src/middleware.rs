//! Request-logging middleware.

use axum::{
    body::Body,
    extract::ConnectInfo,
    http::{Method, Request, StatusCode},
    middleware::Next,
    response::Response,
};
use std::net::SocketAddr;
use tracing::info;

/// Logs every inbound request (method, path, client IP) before dispatch.
///
/// A pure side effect: the request continues unchanged regardless of what is
/// logged. Preflight requests are skipped to keep the log readable.
pub async fn log_request(
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, StatusCode> {
    if req.method() == Method::OPTIONS {
        return Ok(next.run(req).await);
    }

    info!(
        method = ?req.method(),
        path = %req.uri().path(),
        ip = %addr.ip(),
        "Incoming request"
    );

    Ok(next.run(req).await)
}
