//! Consecutive-day engagement streak over the mood log.
//!
//! Everything here is a pure function of the history plus "now"; callers
//! recompute after every mutation instead of caching.

use std::collections::BTreeSet;

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use serde::Serialize;

use crate::models::mood::MoodLogEntry;

/// Calendar day of an instant in the given zone.
pub fn day_bucket<Tz: TimeZone>(timestamp: &DateTime<Utc>, tz: &Tz) -> NaiveDate {
    timestamp.with_timezone(tz).date_naive()
}

/// Distinct logged days, most recent first.
pub fn distinct_days_desc<Tz: TimeZone>(history: &[MoodLogEntry], tz: &Tz) -> Vec<NaiveDate> {
    let days: BTreeSet<NaiveDate> = history.iter().map(|e| day_bucket(&e.timestamp, tz)).collect();
    days.into_iter().rev().collect()
}

/// Number of consecutive logged days ending today or yesterday.
pub fn current_streak<Tz: TimeZone>(history: &[MoodLogEntry], now: &DateTime<Tz>) -> u32 {
    if history.is_empty() {
        return 0;
    }

    let tz = now.timezone();
    let days = distinct_days_desc(history, &tz);

    let today = now.date_naive();
    let yesterday = (now.clone() - Duration::days(1)).date_naive();

    let Some(&head) = days.first() else {
        return 0;
    };
    // Anything else, including a day after today, means the chain is broken
    if head != today && head != yesterday {
        return 0;
    }

    let mut streak = 1;
    for pair in days.windows(2) {
        if pair[0].signed_duration_since(pair[1]).num_days() == 1 {
            streak += 1;
        } else {
            break;
        }
    }
    streak
}

/// Longest run of consecutive logged days anywhere in the history.
pub fn longest_streak<Tz: TimeZone>(history: &[MoodLogEntry], tz: &Tz) -> u32 {
    let mut longest = 0;
    let mut run = 0;
    let mut prev: Option<NaiveDate> = None;

    for day in distinct_days_desc(history, tz).into_iter().rev() {
        run = match prev {
            Some(p) if day.signed_duration_since(p).num_days() == 1 => run + 1,
            _ => 1,
        };
        longest = longest.max(run);
        prev = Some(day);
    }
    longest
}

pub fn streak_label(days: u32) -> String {
    if days == 1 {
        "1 Day".to_string()
    } else {
        format!("{days} Days")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StreakSummary {
    pub current: u32,
    pub longest: u32,
    pub label: String,
}

impl StreakSummary {
    pub fn compute<Tz: TimeZone>(history: &[MoodLogEntry], now: &DateTime<Tz>) -> Self {
        let current = current_streak(history, now);
        Self {
            current,
            longest: longest_streak(history, &now.timezone()),
            label: streak_label(current),
        }
    }
}
