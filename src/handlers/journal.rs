use axum::{extract::State, Json};
use validator::Validate;

use crate::dto::{JournalEntryResponse, SaveJournalRequest};
use crate::error::AppResult;
use crate::AppState;

pub async fn save_entry(
    State(state): State<AppState>,
    Json(body): Json<SaveJournalRequest>,
) -> AppResult<Json<JournalEntryResponse>> {
    body.validate()?;

    let mut session = state.session.lock().await;
    let entry = session.save_journal_entry(&body.text, body.origin)?;
    Ok(Json(entry.into()))
}

/// Newest first.
pub async fn list_entries(State(state): State<AppState>) -> Json<Vec<JournalEntryResponse>> {
    let session = state.session.lock().await;
    Json(
        session
            .journal_history()
            .into_iter()
            .map(JournalEntryResponse::from)
            .collect(),
    )
}
