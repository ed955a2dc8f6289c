use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::AppState;

pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    let assistant = if state.config.assistant_configured() {
        "configured"
    } else {
        "fallback_only"
    };

    Json(json!({
        "status": "ok",
        "service": "mindmate-api",
        "version": env!("CARGO_PKG_VERSION"),
        "checks": { "assistant": assistant },
    }))
}
