//! Journal entries: meals eaten and moods felt.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{Intensity, MealCategory, MealId, Mood, MoodId, ValidationError};

/// An entry that happened at a point in time.
///
/// Lets the time-range filter and recency helpers work over either log.
pub trait JournalEvent {
    /// Returns when the entry was logged.
    fn timestamp(&self) -> DateTime<Utc>;
}

/// A logged meal.
///
/// Field names match the persisted JSON; `meal` and `time` are accepted on
/// read for entries written by older builds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealEvent {
    pub id: MealId,
    #[serde(alias = "meal")]
    pub food_name: String,
    pub category: MealCategory,
    #[serde(alias = "time")]
    pub timestamp: DateTime<Utc>,
}

impl MealEvent {
    /// Creates a meal with a fresh ID.
    ///
    /// The food name is trimmed; an empty name is rejected.
    pub fn new(
        food_name: &str,
        category: MealCategory,
        timestamp: DateTime<Utc>,
    ) -> Result<Self, ValidationError> {
        let food_name = food_name.trim();
        if food_name.is_empty() {
            return Err(ValidationError::Empty { field: "food name" });
        }
        Ok(Self {
            id: MealId::generate(),
            food_name: food_name.to_string(),
            category,
            timestamp,
        })
    }
}

impl JournalEvent for MealEvent {
    fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

/// A logged mood.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodEvent {
    pub id: MoodId,
    #[serde(rename = "mood", alias = "moodLabel")]
    pub label: String,
    #[serde(rename = "value", alias = "intensityValue")]
    pub intensity: Intensity,
    #[serde(default)]
    pub emoji: String,
    #[serde(alias = "time")]
    pub timestamp: DateTime<Utc>,
}

impl MoodEvent {
    /// Creates a mood with a fresh ID from an arbitrary label.
    pub fn new(
        label: &str,
        intensity: Intensity,
        emoji: &str,
        timestamp: DateTime<Utc>,
    ) -> Result<Self, ValidationError> {
        let label = label.trim();
        if label.is_empty() {
            return Err(ValidationError::Empty { field: "mood" });
        }
        Ok(Self {
            id: MoodId::generate(),
            label: label.to_string(),
            intensity,
            emoji: emoji.to_string(),
            timestamp,
        })
    }

    /// Creates a mood from the fixed vocabulary.
    pub fn from_mood(mood: Mood, timestamp: DateTime<Utc>) -> Self {
        Self {
            id: MoodId::generate(),
            label: mood.label().to_string(),
            intensity: mood.intensity(),
            emoji: mood.emoji().to_string(),
            timestamp,
        }
    }
}

impl JournalEvent for MoodEvent {
    fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

/// Returns the `n` most recent entries of a newest-first log.
pub fn recent<E: Clone>(events: &[E], n: usize) -> Vec<E> {
    events.iter().take(n).cloned().collect()
}
