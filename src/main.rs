use anyhow::Context;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tokio::sync::Mutex;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

mod config;
mod dto;
mod error;
mod handlers;
mod models;
mod services;

use config::Config;
use error::AppError;
use services::assistant::{AssistantGateway, ClaudeGateway};
use services::clock::SystemClock;
use services::session::Session;

#[derive(Clone)]
pub struct AppState {
    pub session: Arc<Mutex<Session>>,
    pub assistant: Arc<dyn AssistantGateway>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config, assistant: Arc<dyn AssistantGateway>) -> Self {
        let session = Session::new(SystemClock, config.meditation_secs);
        Self {
            session: Arc::new(Mutex::new(session)),
            assistant,
            config: Arc::new(config),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health_check))
        // Mood tracker
        .route("/api/moods/catalog", get(handlers::moods::get_catalog))
        .route("/api/moods", post(handlers::moods::log_mood))
        .route("/api/moods", get(handlers::moods::list_moods))
        // Journal
        .route("/api/journal", post(handlers::journal::save_entry))
        .route("/api/journal", get(handlers::journal::list_entries))
        // Stats & Streaks
        .route("/api/stats/streak", get(handlers::stats::get_streak))
        .route("/api/stats/mood-series", get(handlers::stats::get_mood_series))
        .route(
            "/api/stats/mood-distribution",
            get(handlers::stats::get_mood_distribution),
        )
        .route("/api/dashboard", get(handlers::stats::get_dashboard))
        // Chat
        .route("/api/chat", post(handlers::chat::send_message))
        .route("/api/chat", get(handlers::chat::get_transcript))
        .route(
            "/api/chat/crisis-resources",
            get(handlers::chat::get_crisis_resources),
        )
        .route(
            "/api/chat/crisis/dismiss",
            post(handlers::chat::dismiss_crisis),
        )
        // Wellness toolkit
        .route("/api/wellness/breathing", get(handlers::wellness::get_breathing))
        .route("/api/wellness/meditation", get(handlers::wellness::get_meditation))
        .route(
            "/api/wellness/meditation/toggle",
            post(handlers::wellness::toggle_meditation),
        )
        .route(
            "/api/wellness/meditation/reset",
            post(handlers::wellness::reset_meditation),
        )
        .route(
            "/api/wellness/gratitude",
            get(handlers::wellness::get_gratitude_prompt),
        )
        .fallback(|| async { AppError::NotFound("Route not found".into()) })
        .with_state(state)
}

fn cors_layer(config: &Config) -> anyhow::Result<CorsLayer> {
    let mut origins = vec![config
        .frontend_url
        .parse::<axum::http::HeaderValue>()
        .context("FRONTEND_URL is not a valid origin")?];
    for o in &config.cors_extra_origins {
        if let Ok(hv) = o.parse::<axum::http::HeaderValue>() {
            origins.push(hv);
        } else {
            tracing::warn!(origin = %o, "Ignoring invalid CORS origin");
        }
    }

    Ok(CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            axum::http::Method::GET,
            axum::http::Method::POST,
            axum::http::Method::OPTIONS,
        ])
        .allow_headers([
            axum::http::header::CONTENT_TYPE,
            axum::http::header::ACCEPT,
        ]))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mindmate_api=debug,tower_http=debug".into()),
        )
        .json()
        .init();

    let config = Config::from_env();
    if !config.assistant_configured() {
        tracing::warn!("CLAUDE_API_KEY not set; chat will answer with the fallback message");
    }

    let assistant: Arc<dyn AssistantGateway> = Arc::new(ClaudeGateway::from_config(&config)?);
    let cors = cors_layer(&config)?;
    let addr = config.listen_addr();

    let state = AppState::new(config, assistant);
    let app = build_router(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CompressionLayer::new())
            .layer(cors),
    );

    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    axum::serve(listener, app).await?;

    Ok(())
}
