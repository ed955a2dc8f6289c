use std::collections::{HashSet, VecDeque};

use chrono::{DateTime, SecondsFormat, Utc};

use crate::error::{AppError, AppResult};
use crate::models::journal::{JournalEntry, JournalOrigin};
use crate::models::mood::{MoodCategory, MoodLogEntry};

/// Append-only collections for the active session.
///
/// Nothing is ever removed or rewritten; dropping the store is the only
/// teardown.
#[derive(Debug, Default)]
pub struct EventStore {
    moods: Vec<MoodLogEntry>,
    // Newest first
    journal: VecDeque<JournalEntry>,
    journal_ids: HashSet<String>,
}

impl EventStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a mood log. `at` defaults to now.
    ///
    /// Timestamps never go backwards: an instant earlier than the last
    /// logged one is clamped to it.
    pub fn append_mood(&mut self, mood: MoodCategory, at: Option<DateTime<Utc>>) -> MoodLogEntry {
        let mut timestamp = at.unwrap_or_else(Utc::now);

        if let Some(last) = self.moods.last() {
            if timestamp < last.timestamp {
                tracing::warn!(
                    requested = %timestamp,
                    last = %last.timestamp,
                    "Backdated mood log clamped to last entry"
                );
                timestamp = last.timestamp;
            }
        }

        let entry = MoodLogEntry { mood, timestamp };
        self.moods.push(entry.clone());
        entry
    }

    /// Append a mood log by raw category id.
    pub fn append_mood_id(&mut self, id: &str, at: Option<DateTime<Utc>>) -> AppResult<MoodLogEntry> {
        let mood = MoodCategory::from_id(id)?;
        Ok(self.append_mood(mood, at))
    }

    pub fn append_journal(
        &mut self,
        text: &str,
        origin: JournalOrigin,
        at: Option<DateTime<Utc>>,
    ) -> AppResult<JournalEntry> {
        if text.trim().is_empty() {
            return Err(AppError::EmptyEntry);
        }

        let timestamp = at.unwrap_or_else(Utc::now);
        let entry = JournalEntry {
            id: self.next_journal_id(timestamp),
            text: text.to_string(),
            origin,
            timestamp,
        };

        self.journal_ids.insert(entry.id.clone());
        self.journal.push_front(entry.clone());
        Ok(entry)
    }

    /// Mood logs in insertion order.
    pub fn mood_history(&self) -> &[MoodLogEntry] {
        &self.moods
    }

    /// Journal entries, newest first.
    pub fn journal_history(&self) -> impl ExactSizeIterator<Item = &JournalEntry> + '_ {
        self.journal.iter()
    }

    fn next_journal_id(&self, at: DateTime<Utc>) -> String {
        let base = at.to_rfc3339_opts(SecondsFormat::Millis, true);
        if !self.journal_ids.contains(&base) {
            return base;
        }
        let mut n = 1;
        loop {
            let candidate = format!("{base}-{n}");
            if !self.journal_ids.contains(&candidate) {
                return candidate;
            }
            n += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 17, 9, 30, 0).unwrap()
    }

    #[test]
    fn test_moods_keep_append_order() {
        let mut store = EventStore::new();
        let moods = [MoodCategory::Sad, MoodCategory::Calm, MoodCategory::Happy, MoodCategory::Sad];
        for (i, mood) in moods.iter().enumerate() {
            store.append_mood(*mood, Some(t0() + Duration::minutes(i as i64)));
        }

        let history = store.mood_history();
        assert_eq!(history.len(), moods.len());
        for (entry, mood) in history.iter().zip(moods) {
            assert_eq!(entry.mood, mood);
        }
        assert!(history.windows(2).all(|w| w[0].timestamp <= w[1].timestamp));
    }

    #[test]
    fn test_append_mood_defaults_to_now() {
        let mut store = EventStore::new();
        let before = Utc::now();
        let entry = store.append_mood(MoodCategory::Neutral, None);
        assert!(entry.timestamp >= before);
        assert!(entry.timestamp <= Utc::now());
    }

    #[test]
    fn test_backdated_mood_is_clamped() {
        let mut store = EventStore::new();
        store.append_mood(MoodCategory::Happy, Some(t0()));
        let entry = store.append_mood(MoodCategory::Sad, Some(t0() - Duration::days(3)));
        assert_eq!(entry.timestamp, t0());
        assert_eq!(store.mood_history()[1].timestamp, t0());
    }

    #[test]
    fn test_append_mood_id_rejects_unknown() {
        let mut store = EventStore::new();
        let err = store.append_mood_id("bored", None).unwrap_err();
        assert!(matches!(err, AppError::UnknownCategory(_)));
        assert!(store.mood_history().is_empty());

        let entry = store.append_mood_id("anxious", None).unwrap();
        assert_eq!(entry.mood, MoodCategory::Anxious);
    }

    #[test]
    fn test_blank_journal_entry_rejected() {
        let mut store = EventStore::new();
        for text in ["", "   ", "\n\t "] {
            let err = store.append_journal(text, JournalOrigin::Standard, None).unwrap_err();
            assert!(matches!(err, AppError::EmptyEntry));
        }
        assert_eq!(store.journal_history().len(), 0);
    }

    #[test]
    fn test_journal_is_newest_first() {
        let mut store = EventStore::new();
        store
            .append_journal("first", JournalOrigin::Standard, Some(t0()))
            .unwrap();
        store
            .append_journal("second", JournalOrigin::Gratitude, Some(t0() + Duration::hours(1)))
            .unwrap();

        let texts: Vec<&str> = store.journal_history().map(|e| e.text.as_str()).collect();
        assert_eq!(texts, ["second", "first"]);
    }

    #[test]
    fn test_journal_keeps_text_verbatim() {
        let mut store = EventStore::new();
        let entry = store
            .append_journal("  Grateful for sunshine ", JournalOrigin::Gratitude, Some(t0()))
            .unwrap();
        assert_eq!(entry.text, "  Grateful for sunshine ");
        assert_eq!(entry.origin, JournalOrigin::Gratitude);
        assert_eq!(entry.id, "2026-10-17T09:30:00.000Z");
    }

    #[test]
    fn test_journal_ids_unique_for_same_instant() {
        let mut store = EventStore::new();
        let a = store.append_journal("a", JournalOrigin::Standard, Some(t0())).unwrap();
        let b = store.append_journal("b", JournalOrigin::Standard, Some(t0())).unwrap();
        let c = store.append_journal("c", JournalOrigin::Standard, Some(t0())).unwrap();

        assert_eq!(a.id, "2026-10-17T09:30:00.000Z");
        assert_eq!(b.id, "2026-10-17T09:30:00.000Z-1");
        assert_eq!(c.id, "2026-10-17T09:30:00.000Z-2");
    }
}
