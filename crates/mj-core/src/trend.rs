//! Recent mood trend for line charts.

use chrono::TimeZone;
use serde::Serialize;

use crate::event::MoodEvent;

/// Default number of points on the trend chart.
pub const DEFAULT_TREND_POINTS: usize = 7;

/// Parallel label/value series, oldest point first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrendSeries {
    /// `HH:MM` of each mood in the chart timezone.
    pub labels: Vec<String>,
    /// Intensity of each mood.
    pub values: Vec<u8>,
}

impl TrendSeries {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Takes the `count` most recent moods in chronological order.
///
/// Returns `None` when there are no moods, so callers render an empty state
/// rather than an empty chart.
pub fn trend_window<Tz>(moods: &[MoodEvent], count: usize, tz: &Tz) -> Option<TrendSeries>
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    if moods.is_empty() || count == 0 {
        return None;
    }

    let mut sorted: Vec<&MoodEvent> = moods.iter().collect();
    sorted.sort_by_key(|m| m.timestamp);
    let recent = &sorted[sorted.len().saturating_sub(count)..];

    Some(TrendSeries {
        labels: recent
            .iter()
            .map(|m| m.timestamp.with_timezone(tz).format("%H:%M").to_string())
            .collect(),
        values: recent.iter().map(|m| m.intensity.value()).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::mood;
    use crate::types::Mood;
    use chrono::{FixedOffset, Utc};

    #[test]
    fn empty_moods_have_no_trend() {
        assert_eq!(trend_window(&[], DEFAULT_TREND_POINTS, &Utc), None);
    }

    #[test]
    fn keeps_last_points_in_time_order() {
        // Newest first, as stored.
        let moods: Vec<_> = (0..9)
            .rev()
            .map(|i| {
                let preset = if i % 2 == 0 { Mood::Happy } else { Mood::Sad };
                mood(preset, i * 60)
            })
            .collect();

        let trend = trend_window(&moods, DEFAULT_TREND_POINTS, &Utc).unwrap();
        assert_eq!(trend.len(), 7);
        assert_eq!(trend.labels.first().map(String::as_str), Some("10:00"));
        assert_eq!(trend.labels.last().map(String::as_str), Some("16:00"));
        assert_eq!(trend.values, vec![5, 1, 5, 1, 5, 1, 5]);
    }

    #[test]
    fn fewer_moods_than_window() {
        let moods = vec![mood(Mood::Tired, 5), mood(Mood::Neutral, 0)];
        let trend = trend_window(&moods, DEFAULT_TREND_POINTS, &Utc).unwrap();
        assert_eq!(trend.labels, vec!["08:00", "08:05"]);
        assert_eq!(trend.values, vec![3, 2]);
    }

    #[test]
    fn labels_use_chart_timezone() {
        let tz = FixedOffset::west_opt(5 * 3600).unwrap();
        let trend = trend_window(&[mood(Mood::Happy, 30)], 7, &tz).unwrap();
        assert_eq!(trend.labels, vec!["03:30"]);
    }
}
