use api::middleware::log_request;
use api::routes::routes;
use axum::{Router, middleware::from_fn};
use migration::Migrator;
use sea_orm_migration::MigratorTrait;
use std::net::SocketAddr;
use tower_http::cors::CorsLayer;
use tracing_appender::rolling;
use util::{config, state::AppState};

#[tokio::main]
async fn main() {
    // Load configuration and initialize logging
    let _log_guard = init_logging(&config::log_file(), &config::log_level());

    // Set up dependencies; the schema is ensured on every start (idempotent).
    let db = db::connect().await;
    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");
    let app_state = AppState::new(db);

    // Build app router
    let app: Router = routes(app_state)
        .layer(from_fn(log_request))
        .layer(CorsLayer::very_permissive());

    // Start server
    let addr: SocketAddr = format!("{}:{}", config::host(), config::port())
        .parse()
        .expect("Invalid address");

    println!(
        "Starting {} on http://{}:{}",
        config::project_name(),
        config::host(),
        config::port()
    );

    axum::serve(
        tokio::net::TcpListener::bind(&addr)
            .await
            .expect("Failed to bind"),
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .expect("Server crashed");
}

fn init_logging(log_file: &str, _log_level: &str) -> tracing_appender::non_blocking::WorkerGuard {
    use std::fs;
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    fs::create_dir_all("logs").ok();

    let file_appender = rolling::daily("logs", log_file);
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_writer(file_writer)
        .with_ansi(false)
        .with_target(true);

    let stdout_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_ansi(true)
        .with_target(true);

    let env_filter =
        EnvFilter::try_from_env("LOG_LEVEL").unwrap_or_else(|_| EnvFilter::new("api=info"));

    let registry = tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer);

    if config::log_to_stdout() {
        registry.with(stdout_layer).init();
    } else {
        registry.init();
    }

    guard
}
