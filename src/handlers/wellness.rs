use axum::{
    extract::{Query, State},
    Json,
};

use crate::dto::{BreathingQuery, GratitudePromptResponse};
use crate::models::journal::JournalOrigin;
use crate::services::wellness::{breathing_at, BreathingState, MeditationSnapshot, GRATITUDE_PROMPT};
use crate::AppState;

pub async fn get_breathing(Query(query): Query<BreathingQuery>) -> Json<BreathingState> {
    Json(breathing_at(query.elapsed_ms))
}

pub async fn get_meditation(State(state): State<AppState>) -> Json<MeditationSnapshot> {
    let session = state.session.lock().await;
    Json(session.meditation())
}

pub async fn toggle_meditation(State(state): State<AppState>) -> Json<MeditationSnapshot> {
    let mut session = state.session.lock().await;
    let snapshot = session.toggle_meditation();
    tracing::debug!(active = snapshot.active, remaining = snapshot.remaining_secs, "Meditation toggled");
    Json(snapshot)
}

pub async fn reset_meditation(State(state): State<AppState>) -> Json<MeditationSnapshot> {
    let mut session = state.session.lock().await;
    Json(session.reset_meditation())
}

pub async fn get_gratitude_prompt() -> Json<GratitudePromptResponse> {
    Json(GratitudePromptResponse {
        prompt: GRATITUDE_PROMPT,
        placeholder: "1. ...\n2. ...\n3. ...",
        saves_as: JournalOrigin::Gratitude,
    })
}
