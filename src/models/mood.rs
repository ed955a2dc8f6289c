use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Fixed mood catalog. Declaration order is the canonical rank order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoodCategory {
    Happy,
    Calm,
    Neutral,
    Sad,
    Anxious,
    Angry,
}

impl MoodCategory {
    pub const ALL: [MoodCategory; 6] = [
        MoodCategory::Happy,
        MoodCategory::Calm,
        MoodCategory::Neutral,
        MoodCategory::Sad,
        MoodCategory::Anxious,
        MoodCategory::Angry,
    ];

    pub fn id(self) -> &'static str {
        match self {
            MoodCategory::Happy => "happy",
            MoodCategory::Calm => "calm",
            MoodCategory::Neutral => "neutral",
            MoodCategory::Sad => "sad",
            MoodCategory::Anxious => "anxious",
            MoodCategory::Angry => "angry",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MoodCategory::Happy => "Happy",
            MoodCategory::Calm => "Calm",
            MoodCategory::Neutral => "Neutral",
            MoodCategory::Sad => "Sad",
            MoodCategory::Anxious => "Anxious",
            MoodCategory::Angry => "Angry",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            MoodCategory::Happy => "😊",
            MoodCategory::Calm => "😌",
            MoodCategory::Neutral => "😐",
            MoodCategory::Sad => "😢",
            MoodCategory::Anxious => "😟",
            MoodCategory::Angry => "😠",
        }
    }

    /// Hex color the chart layer uses for this category's slice.
    pub fn color(self) -> &'static str {
        match self {
            MoodCategory::Happy => "#4CAF50",
            MoodCategory::Calm => "#64B5F6",
            MoodCategory::Neutral => "#FFC107",
            MoodCategory::Sad => "#757575",
            MoodCategory::Anxious => "#FF7043",
            MoodCategory::Angry => "#F44336",
        }
    }

    /// 1-based position in the catalog, used as the charted intensity.
    pub fn rank(self) -> u8 {
        self as u8 + 1
    }

    /// Resolve a category id, rejecting anything outside the catalog.
    pub fn from_id(id: &str) -> Result<Self, AppError> {
        Self::ALL
            .into_iter()
            .find(|m| m.id() == id)
            .ok_or_else(|| AppError::UnknownCategory(id.to_string()))
    }
}

/// Ordered catalog as handed to the presentation layer.
pub fn categories() -> &'static [MoodCategory] {
    &MoodCategory::ALL
}

/// Rank of a raw category id.
pub fn rank_of(id: &str) -> Result<u8, AppError> {
    MoodCategory::from_id(id).map(MoodCategory::rank)
}

pub fn catalog_size() -> u8 {
    MoodCategory::ALL.len() as u8
}

#[derive(Debug, Clone, Serialize)]
pub struct MoodCategoryInfo {
    pub id: MoodCategory,
    pub label: &'static str,
    pub emoji: &'static str,
    pub color: &'static str,
    pub rank: u8,
}

impl From<MoodCategory> for MoodCategoryInfo {
    fn from(mood: MoodCategory) -> Self {
        Self {
            id: mood,
            label: mood.label(),
            emoji: mood.emoji(),
            color: mood.color(),
            rank: mood.rank(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodLogEntry {
    pub mood: MoodCategory,
    pub timestamp: DateTime<Utc>,
}
