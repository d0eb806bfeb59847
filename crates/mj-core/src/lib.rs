//! Core domain logic for the meal and mood journal.
//!
//! This crate contains the fundamental types and logic for:
//! - Journal entries: meals and moods with validated fields
//! - Correlation: which meals preceded which moods
//! - Statistics: mood distribution and meal frequency
//! - Trend windowing and time-range filtering for analytics

pub mod correlation;
pub mod event;
mod insights;
pub mod range;
pub mod stats;
pub mod trend;
pub mod types;

#[cfg(test)]
mod test_support;

pub use correlation::{
    CorrelationConfig, CorrelationRecord, MealMoodBreakdown, Polarity, attribute_moods,
    dedup_first_k, find_correlations, find_correlations_by,
};
pub use event::{JournalEvent, MealEvent, MoodEvent, recent};
pub use insights::{Insights, InsightsConfig, build_insights};
pub use range::{TimeRange, UnknownTimeRange, filter_events};
pub use stats::{ColorClass, MealFrequency, MoodDistributionSlice, meal_frequency, mood_distribution};
pub use trend::{DEFAULT_TREND_POINTS, TrendSeries, trend_window};
pub use types::{Intensity, MealCategory, MealId, Mood, MoodId, ValidationError};
