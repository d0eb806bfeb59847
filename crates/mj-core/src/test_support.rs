//! Shared fixtures for unit tests.

use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::event::{MealEvent, MoodEvent};
use crate::types::{MealCategory, Mood};

/// Minutes after 2025-01-15 08:00 UTC.
pub fn ts(minutes: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 15, 8, 0, 0)
        .single()
        .expect("valid test timestamp")
        + Duration::minutes(minutes)
}

pub fn meal(name: &str, minutes: i64) -> MealEvent {
    MealEvent::new(name, MealCategory::Lunch, ts(minutes)).expect("valid meal")
}

pub fn mood(mood: Mood, minutes: i64) -> MoodEvent {
    MoodEvent::from_mood(mood, ts(minutes))
}
