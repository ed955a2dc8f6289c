use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Where an entry was written. Carried through untouched so the
/// presentation layer can render gratitude entries differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JournalOrigin {
    /// Free-form writing from the journal tab
    #[default]
    Standard,
    /// Saved from the guided gratitude exercise
    Gratitude,
}

impl JournalOrigin {
    /// Visual treatment hint for the entry card.
    pub fn highlight(self) -> Option<&'static str> {
        match self {
            JournalOrigin::Standard => None,
            JournalOrigin::Gratitude => Some("gratitude"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub id: String,
    pub text: String,
    #[serde(rename = "type")]
    pub origin: JournalOrigin,
    pub timestamp: DateTime<Utc>,
}
