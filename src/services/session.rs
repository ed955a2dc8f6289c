//! The single owned session object. Routes UI actions into the event store
//! and answers every read by recomputing from the store.

use std::fmt::Display;

use chrono::{DateTime, TimeZone, Utc};
use serde::Serialize;

use crate::error::AppResult;
use crate::models::journal::{JournalEntry, JournalOrigin};
use crate::models::mood::MoodLogEntry;
use crate::services::analytics::{self, IntensityAxis, MoodPoint, MoodSlice};
use crate::services::chat::Conversation;
use crate::services::clock::{Clock, SystemClock};
use crate::services::store::EventStore;
use crate::services::streak::{self, StreakSummary};
use crate::services::wellness::{MeditationSnapshot, MeditationTimer};

/// Everything the tracker tab needs for one render.
#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub streak: u32,
    pub streak_label: String,
    pub longest_streak: u32,
    pub series: Vec<MoodPoint>,
    pub distribution: Vec<MoodSlice>,
    pub y_axis: IntensityAxis,
    pub show_series: bool,
    pub show_distribution: bool,
    pub total_logs: usize,
}

pub struct Session<C: Clock = SystemClock> {
    clock: C,
    store: EventStore,
    conversation: Conversation,
    meditation: MeditationTimer,
}

impl<C: Clock> Session<C>
where
    <C::Tz as TimeZone>::Offset: Display,
{
    pub fn new(clock: C, meditation_secs: i64) -> Self {
        Self {
            clock,
            store: EventStore::new(),
            conversation: Conversation::new(),
            meditation: MeditationTimer::new(meditation_secs),
        }
    }

    fn now_utc(&self) -> DateTime<Utc> {
        self.clock.now().with_timezone(&Utc)
    }

    // ── Mutations ───────────────────────────────────────────────────────

    pub fn log_mood(&mut self, mood_id: &str) -> AppResult<MoodLogEntry> {
        let now = self.now_utc();
        self.log_mood_at(mood_id, now)
    }

    pub fn log_mood_at(&mut self, mood_id: &str, at: DateTime<Utc>) -> AppResult<MoodLogEntry> {
        let entry = self.store.append_mood_id(mood_id, Some(at))?;
        tracing::info!(
            mood = entry.mood.id(),
            total = self.store.mood_history().len(),
            "Mood logged"
        );
        Ok(entry)
    }

    pub fn save_journal_entry(&mut self, text: &str, origin: JournalOrigin) -> AppResult<JournalEntry> {
        let now = self.now_utc();
        let entry = self.store.append_journal(text, origin, Some(now))?;
        tracing::info!(
            id = %entry.id,
            origin = ?entry.origin,
            chars = entry.text.chars().count(),
            "Journal entry saved"
        );
        Ok(entry)
    }

    pub fn toggle_meditation(&mut self) -> MeditationSnapshot {
        let now = self.now_utc();
        self.meditation.toggle(now);
        self.meditation.snapshot(now)
    }

    pub fn reset_meditation(&mut self) -> MeditationSnapshot {
        self.meditation.reset();
        self.meditation.snapshot(self.now_utc())
    }

    pub fn conversation_mut(&mut self) -> &mut Conversation {
        &mut self.conversation
    }

    // ── Reads (always recomputed) ───────────────────────────────────────

    pub fn mood_history(&self) -> &[MoodLogEntry] {
        self.store.mood_history()
    }

    pub fn journal_history(&self) -> Vec<JournalEntry> {
        self.store.journal_history().cloned().collect()
    }

    pub fn current_streak(&self) -> u32 {
        streak::current_streak(self.store.mood_history(), &self.clock.now())
    }

    pub fn streak_summary(&self) -> StreakSummary {
        StreakSummary::compute(self.store.mood_history(), &self.clock.now())
    }

    pub fn mood_time_series(&self) -> Vec<MoodPoint> {
        analytics::time_series(self.store.mood_history(), &self.clock.now().timezone())
    }

    pub fn mood_distribution(&self) -> Vec<MoodSlice> {
        analytics::distribution(self.store.mood_history())
    }

    pub fn dashboard(&self) -> Dashboard {
        let history = self.store.mood_history();
        let summary = self.streak_summary();
        Dashboard {
            streak: summary.current,
            streak_label: summary.label,
            longest_streak: summary.longest,
            series: self.mood_time_series(),
            distribution: self.mood_distribution(),
            y_axis: analytics::intensity_axis(),
            show_series: history.len() > 1,
            show_distribution: !history.is_empty(),
            total_logs: history.len(),
        }
    }

    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    pub fn meditation(&self) -> MeditationSnapshot {
        self.meditation.snapshot(self.now_utc())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::models::mood::MoodCategory;
    use crate::services::clock::FixedClock;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 17, 18, 45, 0).unwrap()
    }

    fn session() -> Session<FixedClock> {
        Session::new(FixedClock::at(now()), 300)
    }

    #[test]
    fn test_fresh_session_is_empty() {
        let s = session();
        assert_eq!(s.current_streak(), 0);
        assert!(s.mood_history().is_empty());
        assert!(s.journal_history().is_empty());
        assert!(s.mood_time_series().is_empty());
        assert!(s.mood_distribution().is_empty());

        let dash = s.dashboard();
        assert!(!dash.show_series);
        assert!(!dash.show_distribution);
        assert_eq!(dash.streak_label, "0 Days");
    }

    #[test]
    fn test_log_mood_now_starts_streak() {
        let mut s = session();
        let entry = s.log_mood("happy").unwrap();
        assert_eq!(entry.timestamp, now());
        assert_eq!(s.current_streak(), 1);
        assert_eq!(s.dashboard().streak_label, "1 Day");
    }

    #[test]
    fn test_log_unknown_mood_leaves_store_unchanged() {
        let mut s = session();
        let err = s.log_mood("elated").unwrap_err();
        assert!(matches!(err, AppError::UnknownCategory(_)));
        assert!(s.mood_history().is_empty());
    }

    #[test]
    fn test_streak_with_gap() {
        let mut s = session();
        for days_ago in [4, 2, 1, 0] {
            s.log_mood_at("calm", now() - Duration::days(days_ago)).unwrap();
        }
        assert_eq!(s.current_streak(), 3);
    }

    #[test]
    fn test_second_same_day_log_does_not_inflate() {
        let mut s = session();
        s.log_mood_at("sad", now() - Duration::days(1)).unwrap();
        s.log_mood_at("sad", now() - Duration::hours(2)).unwrap();
        let before = s.current_streak();

        s.log_mood("happy").unwrap();
        assert_eq!(s.current_streak(), before);
        assert_eq!(before, 2);
    }

    #[test]
    fn test_stale_history_reports_zero() {
        let mut s = session();
        s.log_mood_at("neutral", now() - Duration::days(3)).unwrap();
        s.log_mood_at("neutral", now() - Duration::days(2)).unwrap();
        assert_eq!(s.current_streak(), 0);
        assert_eq!(s.streak_summary().longest, 2);
    }

    #[test]
    fn test_projections_track_history() {
        let mut s = session();
        for id in ["happy", "anxious", "happy", "angry"] {
            s.log_mood(id).unwrap();
        }

        let series = s.mood_time_series();
        assert_eq!(series.len(), s.mood_history().len());
        assert!(series.iter().all(|p| (1..=6).contains(&p.intensity)));

        let dist = s.mood_distribution();
        assert_eq!(dist.iter().map(|d| d.count).sum::<usize>(), 4);
        assert_eq!(dist[0].mood, MoodCategory::Happy);
        assert_eq!(dist[0].count, 2);

        let dash = s.dashboard();
        assert!(dash.show_series);
        assert!(dash.show_distribution);
        assert_eq!(dash.total_logs, 4);
    }

    #[test]
    fn test_series_labels_use_clock_date() {
        let mut s = session();
        s.log_mood_at("calm", now() - Duration::days(1)).unwrap();
        s.log_mood("happy").unwrap();

        let labels: Vec<String> = s.mood_time_series().into_iter().map(|p| p.label).collect();
        assert_eq!(labels, ["Oct 16", "Oct 17"]);
    }

    #[test]
    fn test_n_logs_read_back_in_order() {
        let mut s = session();
        let ids = ["sad", "calm", "neutral", "happy", "happy"];
        for id in ids {
            s.log_mood(id).unwrap();
        }
        let history = s.mood_history();
        assert_eq!(history.len(), ids.len());
        for (entry, id) in history.iter().zip(ids) {
            assert_eq!(entry.mood.id(), id);
        }
        assert!(history.windows(2).all(|w| w[0].timestamp <= w[1].timestamp));
    }

    #[test]
    fn test_blank_journal_entry_rejected() {
        let mut s = session();
        s.save_journal_entry("first", JournalOrigin::Standard).unwrap();

        let err = s.save_journal_entry("   ", JournalOrigin::Standard).unwrap_err();
        assert!(matches!(err, AppError::EmptyEntry));
        assert_eq!(s.journal_history().len(), 1);
    }

    #[test]
    fn test_gratitude_entry_is_newest() {
        let mut s = session();
        s.save_journal_entry("Long day at the library", JournalOrigin::Standard).unwrap();
        s.save_journal_entry("Grateful for sunshine", JournalOrigin::Gratitude).unwrap();

        let history = s.journal_history();
        assert_eq!(history[0].text, "Grateful for sunshine");
        assert_eq!(history[0].origin, JournalOrigin::Gratitude);
        assert!(!history[0].id.is_empty());
        assert_ne!(history[0].id, history[1].id);
    }

    #[test]
    fn test_meditation_controls() {
        let mut s = session();
        assert!(!s.meditation().active);

        let started = s.toggle_meditation();
        assert!(started.active);
        assert_eq!(started.display, "5:00");

        let reset = s.reset_meditation();
        assert!(!reset.active);
        assert_eq!(reset.remaining_secs, 300);
    }

    #[test]
    fn test_conversation_is_owned_by_session() {
        let mut s = session();
        s.conversation_mut().begin_send("hey").unwrap();
        s.conversation_mut().complete(Ok("hi there".into()));
        assert_eq!(s.conversation().messages().len(), 3);
    }
}
