use axum::{extract::State, Json};

use crate::dto::{LogMoodRequest, LogMoodResponse};
use crate::error::AppResult;
use crate::models::mood::{categories, MoodCategoryInfo, MoodLogEntry};
use crate::AppState;

pub async fn get_catalog() -> Json<Vec<MoodCategoryInfo>> {
    Json(categories().iter().copied().map(MoodCategoryInfo::from).collect())
}

pub async fn log_mood(
    State(state): State<AppState>,
    Json(body): Json<LogMoodRequest>,
) -> AppResult<Json<LogMoodResponse>> {
    let mut session = state.session.lock().await;
    let entry = session.log_mood(&body.mood)?;

    Ok(Json(LogMoodResponse {
        entry,
        streak: session.current_streak(),
    }))
}

pub async fn list_moods(State(state): State<AppState>) -> Json<Vec<MoodLogEntry>> {
    let session = state.session.lock().await;
    Json(session.mood_history().to_vec())
}
