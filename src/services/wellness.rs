//! Guided exercises: breathing cycle, meditation countdown, gratitude prompt.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

pub const GRATITUDE_PROMPT: &str = "Take a moment to think of three things you're grateful for today. It can be something big or small.";

const BREATHE_IN_MS: u64 = 4_000;
const HOLD_MS: u64 = 2_000;
const BREATHING_CYCLE_MS: u64 = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BreathingPhase {
    BreatheIn,
    Hold,
    BreatheOut,
}

impl BreathingPhase {
    pub fn text(self) -> &'static str {
        match self {
            BreathingPhase::BreatheIn => "Breathe In...",
            BreathingPhase::Hold => "Hold...",
            BreathingPhase::BreatheOut => "Breathe Out...",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BreathingState {
    pub phase: BreathingPhase,
    pub text: &'static str,
    pub phase_remaining_ms: u64,
    pub cycle_ms: u64,
}

/// Where in the 4s in / 2s hold / 4s out cycle an exercise is after `elapsed_ms`.
pub fn breathing_at(elapsed_ms: u64) -> BreathingState {
    let t = elapsed_ms % BREATHING_CYCLE_MS;
    let (phase, phase_end) = if t < BREATHE_IN_MS {
        (BreathingPhase::BreatheIn, BREATHE_IN_MS)
    } else if t < BREATHE_IN_MS + HOLD_MS {
        (BreathingPhase::Hold, BREATHE_IN_MS + HOLD_MS)
    } else {
        (BreathingPhase::BreatheOut, BREATHING_CYCLE_MS)
    };

    BreathingState {
        phase,
        text: phase.text(),
        phase_remaining_ms: phase_end - t,
        cycle_ms: BREATHING_CYCLE_MS,
    }
}

/// Countdown that derives its remaining time from the clock on every read.
#[derive(Debug, Clone)]
pub struct MeditationTimer {
    length: Duration,
    // Remaining time as of `started_at`, or as of the last pause
    banked: Duration,
    started_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MeditationSnapshot {
    pub remaining_secs: i64,
    pub display: String,
    pub active: bool,
    pub length_secs: i64,
}

/// Session length used when the configured one is out of range.
pub const DEFAULT_MEDITATION_SECS: i64 = 300;
/// One day.
pub const MAX_MEDITATION_SECS: i64 = 24 * 60 * 60;

impl MeditationTimer {
    pub fn new(length_secs: i64) -> Self {
        let secs = if length_secs > MAX_MEDITATION_SECS {
            tracing::warn!(length_secs, "Meditation length out of range, using default");
            DEFAULT_MEDITATION_SECS
        } else {
            length_secs.max(0)
        };
        let length = Duration::seconds(secs);
        Self {
            length,
            banked: length,
            started_at: None,
        }
    }

    pub fn remaining(&self, now: DateTime<Utc>) -> Duration {
        match self.started_at {
            Some(start) => (self.banked - (now - start)).max(Duration::zero()),
            None => self.banked,
        }
    }

    pub fn is_active(&self, now: DateTime<Utc>) -> bool {
        self.started_at.is_some() && self.remaining(now) > Duration::zero()
    }

    /// Start or pause. A finished timer stays stopped until reset.
    pub fn toggle(&mut self, now: DateTime<Utc>) {
        if self.started_at.is_some() {
            self.banked = self.remaining(now);
            self.started_at = None;
        } else if self.banked > Duration::zero() {
            self.started_at = Some(now);
        }
    }

    pub fn reset(&mut self) {
        self.banked = self.length;
        self.started_at = None;
    }

    pub fn snapshot(&self, now: DateTime<Utc>) -> MeditationSnapshot {
        let remaining = self.remaining(now);
        // Round up so a freshly started timer still reads the full length
        let remaining_secs = (remaining.num_milliseconds() + 999) / 1000;
        MeditationSnapshot {
            remaining_secs,
            display: format_clock(remaining_secs),
            active: self.is_active(now),
            length_secs: self.length.num_seconds(),
        }
    }
}

/// `M:SS`
pub fn format_clock(secs: i64) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}
