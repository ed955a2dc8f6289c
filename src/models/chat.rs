use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: Uuid,
    pub role: ChatRole,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl ChatMessage {
    pub fn new(role: ChatRole, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role,
            content: content.into(),
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatStatus {
    Idle,
    Awaiting,
}

#[derive(Debug, Clone, Serialize)]
pub struct CrisisResource {
    pub name: &'static str,
    pub contact: &'static str,
    pub url: &'static str,
}

/// Hotlines surfaced when the assistant flags a crisis.
pub const CRISIS_RESOURCES: [CrisisResource; 3] = [
    CrisisResource {
        name: "Crisis & Suicide Lifeline",
        contact: "Call or Text 988 (US & Canada)",
        url: "tel:988",
    },
    CrisisResource {
        name: "The Trevor Project (LGBTQ Youth)",
        contact: "1-866-488-7386",
        url: "https://www.thetrevorproject.org/get-help/",
    },
    CrisisResource {
        name: "Crisis Text Line",
        contact: "Text HOME to 741741",
        url: "https://www.crisistextline.org/",
    },
];

pub const EMERGENCY_NOTE: &str =
    "If you are in immediate danger, please call 911 or your local emergency number.";
