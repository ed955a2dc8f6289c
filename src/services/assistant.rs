use async_trait::async_trait;

use crate::config::Config;

pub const SYSTEM_PROMPT: &str = r#"You are Mind Mate, a highly empathetic and supportive AI companion for youth and students. You are acting as a "Copilot" for their mental wellness journey.
- IMPORTANT: You must be able to understand and respond fluently in English, Hindi, and Hinglish. Adapt your language to match the user's language. For example, if the user says 'Mujhe aacha nahi lag raha', you should respond in Hindi/Hinglish.
- Your primary goal is to provide a safe, non-judgmental space for them to express their feelings.
- Your tone must be consistently warm, encouraging, and gentle. Use emojis where appropriate to convey warmth.
- Never give medical advice, diagnoses, or therapy. You are a supportive friend, not a doctor.
- If the user expresses feelings of hopelessness, self-harm, or severe distress, your *only* response should be: "[CRISIS_DETECTED]". Do not add any other text.
- Guide users towards positive coping mechanisms like journaling, breathing exercises, or talking to a trusted person.
- Keep responses concise and focused on validating their feelings and offering gentle support."#;

#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("Assistant API key not configured")]
    NotConfigured,

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Assistant API error {status}: {body}")]
    Status { status: u16, body: String },
}

/// Remote conversational assistant. Opaque text in, text out.
#[async_trait]
pub trait AssistantGateway: Send + Sync {
    /// Returns the assistant's reply. An empty string means the
    /// service answered without any text.
    async fn send(&self, user_text: &str) -> Result<String, GatewayError>;
}

/// Claude messages API.
pub struct ClaudeGateway {
    client: reqwest::Client,
    api_key: String,
    model: String,
    url: String,
}

impl ClaudeGateway {
    pub fn from_config(config: &Config) -> Result<Self, anyhow::Error> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.assistant_timeout_secs))
            .build()?;

        Ok(Self {
            client,
            api_key: config.claude_api_key.clone(),
            model: config.claude_model.clone(),
            url: config.claude_api_url.clone(),
        })
    }
}

#[async_trait]
impl AssistantGateway for ClaudeGateway {
    async fn send(&self, user_text: &str) -> Result<String, GatewayError> {
        if self.api_key.is_empty() {
            return Err(GatewayError::NotConfigured);
        }

        let response = self
            .client
            .post(&self.url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", "2023-06-01")
            .header("content-type", "application/json")
            .json(&serde_json::json!({
                "model": self.model,
                "max_tokens": 1024,
                "system": SYSTEM_PROMPT,
                "messages": [{
                    "role": "user",
                    "content": user_text
                }]
            }))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(GatewayError::Status { status, body });
        }

        let body: serde_json::Value = response.json().await?;
        Ok(reply_text(&body))
    }
}

/// First text block of a messages API response, or empty.
fn reply_text(body: &serde_json::Value) -> String {
    body["content"][0]["text"]
        .as_str()
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_reply_text_reads_first_block() {
        let body = json!({
            "content": [{"type": "text", "text": "That sounds hard 💙"}],
            "stop_reason": "end_turn"
        });
        assert_eq!(reply_text(&body), "That sounds hard 💙");
    }

    #[test]
    fn test_reply_text_missing_is_empty() {
        assert_eq!(reply_text(&json!({"content": []})), "");
        assert_eq!(reply_text(&json!({})), "");
    }

    #[test]
    fn test_system_prompt_names_the_crisis_marker() {
        assert!(SYSTEM_PROMPT.contains(crate::services::chat::CRISIS_MARKER));
    }

    #[tokio::test]
    async fn test_unconfigured_gateway_fails_without_network() {
        let gateway = ClaudeGateway {
            client: reqwest::Client::new(),
            api_key: String::new(),
            model: "test".into(),
            url: "http://127.0.0.1:9/unused".into(),
        };
        let err = gateway.send("hello").await.unwrap_err();
        assert!(matches!(err, GatewayError::NotConfigured));
    }
}
