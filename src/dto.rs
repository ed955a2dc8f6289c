//! # Mind Mate: Request/Response DTOs
//!
//! API contract types shared by the handlers.
//!
//! Conventions:
//! - `*Request`  → deserialized from client JSON body or query params
//! - `*Response` → serialized to client JSON
//! - Length limits are expressed via `validator` derive macros

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::chat::{ChatMessage, ChatStatus, CrisisResource};
use crate::models::journal::{JournalEntry, JournalOrigin};
use crate::models::mood::MoodLogEntry;
use crate::services::analytics::{MoodPoint, MoodSlice};

// ============================================================================
// Moods
// ============================================================================

/// POST /api/moods
#[derive(Debug, Deserialize)]
pub struct LogMoodRequest {
    /// Catalog id, e.g. "happy"
    pub mood: String,
}

/// Response for POST /api/moods
#[derive(Debug, Serialize)]
pub struct LogMoodResponse {
    pub entry: MoodLogEntry,
    pub streak: u32,
}

// ============================================================================
// Journal
// ============================================================================

/// POST /api/journal
#[derive(Debug, Deserialize, Validate)]
pub struct SaveJournalRequest {
    #[validate(length(max = 10000, message = "Entry must be under 10000 characters"))]
    pub text: String,

    /// "standard" or "gratitude". Default: "standard". Also accepted as `origin`.
    #[serde(default, rename = "type", alias = "origin")]
    pub origin: JournalOrigin,
}

#[derive(Debug, Serialize)]
pub struct JournalEntryResponse {
    #[serde(flatten)]
    pub entry: JournalEntry,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlight: Option<&'static str>,
}

impl From<JournalEntry> for JournalEntryResponse {
    fn from(entry: JournalEntry) -> Self {
        let highlight = entry.origin.highlight();
        Self { entry, highlight }
    }
}

// ============================================================================
// Stats
// ============================================================================

/// GET /api/stats/streak
#[derive(Debug, Serialize)]
pub struct StreakResponse {
    pub current_streak: u32,
    pub longest_streak: u32,
    pub label: String,
}

/// GET /api/stats/mood-series
#[derive(Debug, Serialize)]
pub struct SeriesResponse {
    pub points: Vec<MoodPoint>,
}

/// GET /api/stats/mood-distribution
#[derive(Debug, Serialize)]
pub struct DistributionResponse {
    pub slices: Vec<MoodSlice>,
}

// ============================================================================
// Chat
// ============================================================================

/// POST /api/chat
#[derive(Debug, Deserialize, Validate)]
pub struct SendMessageRequest {
    #[validate(length(max = 4000, message = "Message must be under 4000 characters"))]
    pub text: String,
}

/// Response for POST /api/chat
#[derive(Debug, Serialize)]
pub struct ChatReplyResponse {
    pub reply: ChatMessage,
    pub show_crisis_resources: bool,
}

/// GET /api/chat
#[derive(Debug, Serialize)]
pub struct TranscriptResponse {
    pub messages: Vec<ChatMessage>,
    pub status: ChatStatus,
    pub show_crisis_resources: bool,
}

/// GET /api/chat/crisis-resources
#[derive(Debug, Serialize)]
pub struct CrisisResourcesResponse {
    pub title: &'static str,
    pub message: &'static str,
    pub resources: &'static [CrisisResource],
    pub emergency_note: &'static str,
}

// ============================================================================
// Wellness
// ============================================================================

/// GET /api/wellness/breathing
#[derive(Debug, Deserialize)]
pub struct BreathingQuery {
    #[serde(default)]
    pub elapsed_ms: u64,
}

/// GET /api/wellness/gratitude
#[derive(Debug, Serialize)]
pub struct GratitudePromptResponse {
    pub prompt: &'static str,
    pub placeholder: &'static str,
    pub saves_as: JournalOrigin,
}
