use axum::{extract::State, Json};
use validator::Validate;

use crate::dto::{
    ChatReplyResponse, CrisisResourcesResponse, SendMessageRequest, TranscriptResponse,
};
use crate::error::{AppError, AppResult};
use crate::models::chat::{CRISIS_RESOURCES, EMERGENCY_NOTE};
use crate::AppState;

pub async fn send_message(
    State(state): State<AppState>,
    Json(body): Json<SendMessageRequest>,
) -> AppResult<Json<ChatReplyResponse>> {
    body.validate()?;

    // Flip to awaiting under the lock, then release it for the remote call
    state
        .session
        .lock()
        .await
        .conversation_mut()
        .begin_send(&body.text)?;

    // The reply lands in the transcript even if this request goes away
    let task_state = state.clone();
    let text = body.text;
    let (reply, show_crisis_resources) = tokio::spawn(async move {
        let outcome = task_state.assistant.send(&text).await;

        let mut session = task_state.session.lock().await;
        let conversation = session.conversation_mut();
        let reply = conversation.complete(outcome);
        (reply, conversation.crisis_open())
    })
    .await
    .map_err(|e| AppError::Internal(e.into()))?;

    Ok(Json(ChatReplyResponse {
        reply,
        show_crisis_resources,
    }))
}

pub async fn get_transcript(State(state): State<AppState>) -> Json<TranscriptResponse> {
    let session = state.session.lock().await;
    let conversation = session.conversation();
    Json(TranscriptResponse {
        messages: conversation.messages().to_vec(),
        status: conversation.status(),
        show_crisis_resources: conversation.crisis_open(),
    })
}

pub async fn get_crisis_resources() -> Json<CrisisResourcesResponse> {
    Json(CrisisResourcesResponse {
        title: "Immediate Support is Available",
        message: "It's okay to not be okay. Talking to someone can help. Please reach out to one of these resources.",
        resources: &CRISIS_RESOURCES,
        emergency_note: EMERGENCY_NOTE,
    })
}

pub async fn dismiss_crisis(State(state): State<AppState>) -> Json<TranscriptResponse> {
    let mut session = state.session.lock().await;
    session.conversation_mut().dismiss_crisis();
    let conversation = session.conversation();
    Json(TranscriptResponse {
        messages: conversation.messages().to_vec(),
        status: conversation.status(),
        show_crisis_resources: conversation.crisis_open(),
    })
}
