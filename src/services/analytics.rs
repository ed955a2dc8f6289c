//! Chart-ready projections over the mood log. Recomputed on every read.

use std::fmt::Display;

use chrono::TimeZone;
use serde::Serialize;

use crate::models::mood::{catalog_size, categories, MoodCategory, MoodLogEntry};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoodPoint {
    pub label: String,
    pub intensity: u8,
    pub mood: MoodCategory,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoodSlice {
    pub mood: MoodCategory,
    pub label: &'static str,
    pub count: usize,
    pub color: &'static str,
}

/// Fixed vertical axis for the intensity chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IntensityAxis {
    pub min: u8,
    pub max: u8,
    pub ticks: Vec<&'static str>,
}

/// One point per log, in log order. Labels are short dates ("Oct 17") in `tz`.
pub fn time_series<Tz: TimeZone>(history: &[MoodLogEntry], tz: &Tz) -> Vec<MoodPoint>
where
    Tz::Offset: Display,
{
    history
        .iter()
        .map(|entry| MoodPoint {
            label: entry.timestamp.with_timezone(tz).format("%b %-d").to_string(),
            intensity: entry.mood.rank(),
            mood: entry.mood,
        })
        .collect()
}

/// Count per category in catalog order; categories never logged are left out.
pub fn distribution(history: &[MoodLogEntry]) -> Vec<MoodSlice> {
    let mut counts = [0usize; MoodCategory::ALL.len()];
    for entry in history {
        counts[usize::from(entry.mood.rank() - 1)] += 1;
    }

    categories()
        .iter()
        .zip(counts)
        .filter(|(_, count)| *count > 0)
        .map(|(mood, count)| MoodSlice {
            mood: *mood,
            label: mood.label(),
            count,
            color: mood.color(),
        })
        .collect()
}

pub fn intensity_axis() -> IntensityAxis {
    IntensityAxis {
        min: 1,
        max: catalog_size(),
        ticks: categories().iter().map(|m| m.label()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Duration, FixedOffset, Utc};

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 17, 12, 0, 0).unwrap()
    }

    fn logs(moods: &[MoodCategory]) -> Vec<MoodLogEntry> {
        moods
            .iter()
            .enumerate()
            .map(|(i, mood)| MoodLogEntry {
                mood: *mood,
                timestamp: t0() + Duration::days(i as i64),
            })
            .collect()
    }

    #[test]
    fn test_empty_history_projects_to_nothing() {
        assert!(time_series(&[], &Utc).is_empty());
        assert!(distribution(&[]).is_empty());
    }

    #[test]
    fn test_series_follows_log_order() {
        use MoodCategory::*;
        let history = logs(&[Angry, Happy, Neutral]);
        let series = time_series(&history, &Utc);

        assert_eq!(series.len(), history.len());
        let intensities: Vec<u8> = series.iter().map(|p| p.intensity).collect();
        assert_eq!(intensities, [6, 1, 3]);
        let labels: Vec<&str> = series.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, ["Oct 17", "Oct 18", "Oct 19"]);
    }

    #[test]
    fn test_series_labels_use_zone() {
        let history = vec![MoodLogEntry {
            mood: MoodCategory::Calm,
            timestamp: Utc.with_ymd_and_hms(2026, 10, 31, 23, 0, 0).unwrap(),
        }];
        let cet = FixedOffset::east_opt(3600).unwrap();
        assert_eq!(time_series(&history, &Utc)[0].label, "Oct 31");
        assert_eq!(time_series(&history, &cet)[0].label, "Nov 1");
    }

    #[test]
    fn test_series_intensity_within_axis() {
        let history = logs(&MoodCategory::ALL);
        let axis = intensity_axis();
        for point in time_series(&history, &Utc) {
            assert!((axis.min..=axis.max).contains(&point.intensity));
        }
        assert_eq!(axis.ticks.len(), usize::from(axis.max));
        assert_eq!(axis.ticks[0], "Happy");
    }

    #[test]
    fn test_distribution_omits_zero_counts_and_keeps_catalog_order() {
        use MoodCategory::*;
        let history = logs(&[Sad, Happy, Sad, Angry, Sad]);
        let slices = distribution(&history);

        let summary: Vec<(MoodCategory, usize)> = slices.iter().map(|s| (s.mood, s.count)).collect();
        assert_eq!(summary, [(Happy, 1), (Sad, 3), (Angry, 1)]);
        assert!(slices.iter().all(|s| s.count > 0));
        assert_eq!(slices.iter().map(|s| s.count).sum::<usize>(), history.len());
    }

    #[test]
    fn test_distribution_carries_color_hint() {
        let slices = distribution(&logs(&[MoodCategory::Calm]));
        assert_eq!(slices[0].label, "Calm");
        assert_eq!(slices[0].color, "#64B5F6");
    }
}
