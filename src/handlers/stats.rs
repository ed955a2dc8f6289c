use axum::{extract::State, Json};

use crate::dto::{DistributionResponse, SeriesResponse, StreakResponse};
use crate::services::session::Dashboard;
use crate::AppState;

pub async fn get_streak(State(state): State<AppState>) -> Json<StreakResponse> {
    let session = state.session.lock().await;
    let summary = session.streak_summary();

    Json(StreakResponse {
        current_streak: summary.current,
        longest_streak: summary.longest,
        label: summary.label,
    })
}

pub async fn get_mood_series(State(state): State<AppState>) -> Json<SeriesResponse> {
    let session = state.session.lock().await;
    Json(SeriesResponse {
        points: session.mood_time_series(),
    })
}

pub async fn get_mood_distribution(State(state): State<AppState>) -> Json<DistributionResponse> {
    let session = state.session.lock().await;
    Json(DistributionResponse {
        slices: session.mood_distribution(),
    })
}

/// Everything the tracker view renders, in one poll.
pub async fn get_dashboard(State(state): State<AppState>) -> Json<Dashboard> {
    let session = state.session.lock().await;
    let dashboard = session.dashboard();
    tracing::debug!(streak = dashboard.streak, logs = dashboard.total_logs, "Dashboard computed");
    Json(dashboard)
}
