//! One-shot analytics over both logs.
//!
//! Mirrors what the analytics view needs: the mood log is narrowed to the
//! selected range, the meal log never is (a meal before the range can still
//! be the one that preceded an in-range mood). Every call recomputes from
//! the full logs.

use chrono::{DateTime, Duration, TimeZone};
use serde::Serialize;

use crate::correlation::{
    CorrelationConfig, CorrelationRecord, MealMoodBreakdown, Polarity, attribute_moods,
    find_correlations,
};
use crate::event::{MealEvent, MoodEvent};
use crate::range::{TimeRange, filter_events};
use crate::stats::{MealFrequency, MoodDistributionSlice, meal_frequency, mood_distribution};
use crate::trend::{DEFAULT_TREND_POINTS, TrendSeries, trend_window};
use crate::types::ValidationError;

/// Tunables for [`build_insights`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsightsConfig {
    pub correlation: CorrelationConfig,
    /// Points on the trend chart. Default: 7.
    pub trend_points: usize,
    /// Foods in the frequency ranking. Default: 5.
    pub top_meals: usize,
}

impl Default for InsightsConfig {
    fn default() -> Self {
        Self {
            correlation: CorrelationConfig::default(),
            trend_points: DEFAULT_TREND_POINTS,
            top_meals: 5,
        }
    }
}

impl InsightsConfig {
    /// Builds a config from plain numbers, as read from a config file.
    ///
    /// `window_minutes` must be positive and small enough for a
    /// [`Duration`].
    pub fn from_parts(
        window_minutes: i64,
        correlation_limit: usize,
        trend_points: usize,
        top_meals: usize,
    ) -> Result<Self, ValidationError> {
        let window = Duration::try_minutes(window_minutes)
            .filter(|window| *window > Duration::zero())
            .ok_or(ValidationError::InvalidWindow {
                minutes: window_minutes,
            })?;

        Ok(Self {
            correlation: CorrelationConfig {
                window,
                limit: correlation_limit,
            },
            trend_points,
            top_meals,
        })
    }
}

/// Everything derived for one analytics refresh.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Insights {
    pub range: TimeRange,
    pub meals_logged: usize,
    pub moods_in_range: usize,
    /// `None` when no mood falls in the range.
    pub trend: Option<TrendSeries>,
    /// Meals that preceded good moods.
    pub positive: Vec<CorrelationRecord>,
    /// Meals that preceded bad moods.
    pub negative: Vec<CorrelationRecord>,
    pub breakdown: Vec<MealMoodBreakdown>,
    pub distribution: Vec<MoodDistributionSlice>,
    pub top_meals: Vec<MealFrequency>,
}

/// Derives all analytics for `range` as of `now`.
///
/// The timezone of `now` decides both what "today" means and how trend
/// labels are rendered.
pub fn build_insights<Tz>(
    meals: &[MealEvent],
    moods: &[MoodEvent],
    config: &InsightsConfig,
    range: TimeRange,
    now: &DateTime<Tz>,
) -> Insights
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let moods = filter_events(moods, range, now);
    tracing::debug!(
        meals = meals.len(),
        moods = moods.len(),
        %range,
        "computing insights"
    );

    Insights {
        range,
        meals_logged: meals.len(),
        moods_in_range: moods.len(),
        trend: trend_window(&moods, config.trend_points, &now.timezone()),
        positive: find_correlations(meals, &moods, Polarity::Positive, &config.correlation),
        negative: find_correlations(meals, &moods, Polarity::Negative, &config.correlation),
        breakdown: attribute_moods(meals, &moods),
        distribution: mood_distribution(&moods),
        top_meals: meal_frequency(meals, config.top_meals),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{meal, mood, ts};
    use crate::types::Mood;

    #[test]
    fn empty_logs_give_empty_insights() {
        let insights =
            build_insights(&[], &[], &InsightsConfig::default(), TimeRange::All, &ts(0));
        assert_eq!(insights.trend, None);
        assert!(insights.distribution.is_empty());
        assert!(insights.positive.is_empty());
        assert!(insights.breakdown.is_empty());
        assert!(insights.top_meals.is_empty());
    }

    #[test]
    fn moods_without_meals_still_chart() {
        let moods = vec![mood(Mood::Happy, 60)];
        let insights =
            build_insights(&[], &moods, &InsightsConfig::default(), TimeRange::All, &ts(120));
        assert!(insights.trend.is_some());
        assert_eq!(insights.distribution.len(), 1);
        assert!(insights.positive.is_empty());
        assert!(insights.breakdown.is_empty());
    }

    #[test]
    fn range_filters_moods_but_not_meals() {
        // Yesterday's late snack is still the nearest meal for this morning's mood.
        let meals = vec![meal("Cake", -600)];
        let moods = vec![mood(Mood::Tired, 30), mood(Mood::Happy, -1440)];
        let now = ts(60);

        let insights =
            build_insights(&meals, &moods, &InsightsConfig::default(), TimeRange::Today, &now);
        assert_eq!(insights.moods_in_range, 1);
        assert_eq!(insights.breakdown.len(), 1);
        assert_eq!(insights.breakdown[0].meal, "Cake");
        assert_eq!(insights.breakdown[0].mood_percentages.get("Tired"), Some(&100.0));
        assert_eq!(insights.top_meals.len(), 1);
    }

    #[test]
    fn from_parts_sets_window() {
        let config = InsightsConfig::from_parts(90, 3, 7, 5).unwrap();
        assert_eq!(config.correlation.window, Duration::minutes(90));
        assert_eq!(config.correlation.limit, 3);
    }

    #[test]
    fn from_parts_rejects_unusable_windows() {
        for minutes in [0, -30, i64::MAX / 2, i64::MIN] {
            assert_eq!(
                InsightsConfig::from_parts(minutes, 5, 7, 5),
                Err(ValidationError::InvalidWindow { minutes }),
                "window of {minutes} minutes"
            );
        }
    }

    #[test]
    fn serializes_for_presentation() {
        let meals = vec![meal("Oatmeal", 0), meal("Pizza", 300)];
        let moods = vec![mood(Mood::Happy, 390), mood(Mood::Sad, 90)];
        let insights =
            build_insights(&meals, &moods, &InsightsConfig::default(), TimeRange::All, &ts(400));
        let json = serde_json::to_value(&insights).unwrap();

        assert_eq!(json["range"], "all");
        assert_eq!(json["mealsLogged"], 2);
        assert_eq!(json["moodsInRange"], 2);
        assert_eq!(json["topMeals"][0]["meal"], "Oatmeal");
        assert_eq!(json["breakdown"][0]["totalAttributions"], 1);
        assert_eq!(json["positive"][0]["meal"], "Pizza");
        assert_eq!(json["negative"][0]["meal"], "Oatmeal");
        assert_eq!(json["breakdown"][0]["moodPercentages"]["Happy"], 100.0);
        assert_eq!(json["trend"]["labels"][0], "09:30");
        assert_eq!(json["distribution"][0]["color"], "positive");
    }
}
