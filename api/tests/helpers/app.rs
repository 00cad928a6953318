use api::routes::routes;
use axum::Router;
use db::test_utils::setup_test_db;
use util::state::AppState;

/// Builds the real application router over a fresh in-memory database.
///
/// Each call gets its own database, so tests are isolated and can run in
/// parallel. The request-logging middleware is not attached (it needs
/// `ConnectInfo`, which `oneshot` requests do not carry).
pub async fn make_test_app() -> (Router, AppState) {
    let db = setup_test_db().await;
    let state = AppState::new(db);
    let router = routes(state.clone());
    (router, state)
}
