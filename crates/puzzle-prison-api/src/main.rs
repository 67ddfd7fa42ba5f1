//! Puzzle Prison API server entry point.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use sqlx::postgres::PgPoolOptions;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use puzzle_prison_api::config::AppConfig;
use puzzle_prison_api::error::AppError;
use puzzle_prison_api::routes;
use puzzle_prison_api::state::AppState;
use puzzle_prison_core::clock::SystemClock;
use puzzle_prison_narrative::application::renderer::AudioConfig;
use puzzle_prison_store::pg_progress_repository::PgProgressRepository;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // Initialize tracing subscriber.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    tracing::info!("Starting Puzzle Prison API server");

    let config = AppConfig::from_env()?;

    // Create database connection pool.
    let pool = PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .connect(&config.database_url)
        .await?;

    let progress_repository = PgProgressRepository::new(pool);
    progress_repository.ensure_schema().await?;

    // Build application state.
    let app_state = AppState::new(
        Arc::new(SystemClock),
        Arc::new(progress_repository),
        AudioConfig::new(config.audio_base_url.as_str()),
    );

    // Build router.
    let app = Router::new()
        .merge(routes::health::router())
        .nest("/api/v1/turns", routes::turns::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    // Start server.
    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .map_err(|e| AppError::Config(format!("invalid HOST:PORT combination: {e}")))?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app).await?;

    Ok(())
}
