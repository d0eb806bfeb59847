//! Meal/mood correlation engine.
//!
//! Both logs are independent, append-only sequences; they are only joined
//! here, at query time. Everything in this module is pure: the same inputs
//! always yield the same outputs, in the same order.
//!
//! # Derivations
//!
//! 1. **Window correlation**: for each mood matching a predicate, every meal
//!    eaten strictly before it and no more than `window` earlier becomes a
//!    [`CorrelationRecord`]. Records are deduplicated and capped.
//! 2. **Nearest-prior-meal attribution**: each mood is credited to the most
//!    recent meal at or before it, then per-food mood shares are computed.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::hash::Hash;

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use crate::event::{MealEvent, MoodEvent};
use crate::types::Intensity;

/// Configuration for window correlation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorrelationConfig {
    /// How long before a mood a meal may have been eaten to count.
    /// Default: 2 hours.
    pub window: Duration,

    /// Maximum number of distinct records returned.
    /// Default: 5.
    pub limit: usize,
}

impl Default for CorrelationConfig {
    fn default() -> Self {
        Self {
            window: Duration::hours(2),
            limit: 5,
        }
    }
}

/// Which moods a window correlation looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    /// Intensity 4 or 5.
    Positive,
    /// Intensity 1 or 2.
    Negative,
}

impl Polarity {
    #[must_use]
    pub const fn matches(self, intensity: Intensity) -> bool {
        match self {
            Self::Positive => intensity.value() >= 4,
            Self::Negative => intensity.value() <= 2,
        }
    }
}

/// A meal that preceded a mood inside the correlation window.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct CorrelationRecord {
    pub meal: String,
    pub mood: String,
    pub emoji: String,
}

/// Share of each mood credited to a single food.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MealMoodBreakdown {
    pub meal: String,
    /// Mood label to percentage of this food's attributions, one decimal.
    pub mood_percentages: BTreeMap<String, f64>,
    pub total_attributions: usize,
}

/// Finds meals eaten shortly before moods of the given polarity.
pub fn find_correlations(
    meals: &[MealEvent],
    moods: &[MoodEvent],
    polarity: Polarity,
    config: &CorrelationConfig,
) -> Vec<CorrelationRecord> {
    find_correlations_by(meals, moods, config, |mood| polarity.matches(mood.intensity))
}

/// Finds meals eaten shortly before any mood accepted by `predicate`.
///
/// A meal counts when `0 < mood.timestamp - meal.timestamp <= window`.
/// Records come out in discovery order (moods in input order, then meals in
/// input order), deduplicated, and truncated to `config.limit`.
pub fn find_correlations_by<F>(
    meals: &[MealEvent],
    moods: &[MoodEvent],
    config: &CorrelationConfig,
    predicate: F,
) -> Vec<CorrelationRecord>
where
    F: Fn(&MoodEvent) -> bool,
{
    let window = config.window;
    let pairs = moods
        .iter()
        .filter(|mood| predicate(mood))
        .flat_map(|mood| {
            meals
                .iter()
                .filter(move |meal| {
                    let diff = mood.timestamp - meal.timestamp;
                    diff > Duration::zero() && diff <= window
                })
                .map(move |meal| CorrelationRecord {
                    meal: meal.food_name.clone(),
                    mood: mood.label.clone(),
                    emoji: mood.emoji.clone(),
                })
        });

    dedup_first_k(pairs, config.limit)
}

/// Keeps the first occurrence of each distinct item, stopping after `k`.
pub fn dedup_first_k<T, I>(items: I, k: usize) -> Vec<T>
where
    I: IntoIterator<Item = T>,
    T: Eq + Hash + Clone,
{
    let mut seen = HashSet::new();
    let mut kept = Vec::new();
    if k == 0 {
        return kept;
    }
    for item in items {
        if seen.insert(item.clone()) {
            kept.push(item);
            if kept.len() == k {
                break;
            }
        }
    }
    kept
}

/// Credits each mood to the most recent meal at or before it.
///
/// Moods with no prior meal are ignored. When several meals share the
/// latest timestamp, the first of them in input order wins. Breakdowns are
/// ordered by when their food first received an attribution.
pub fn attribute_moods(meals: &[MealEvent], moods: &[MoodEvent]) -> Vec<MealMoodBreakdown> {
    if meals.is_empty() || moods.is_empty() {
        return Vec::new();
    }

    let mut by_time: Vec<&MealEvent> = meals.iter().collect();
    by_time.sort_by_key(|meal| meal.timestamp);

    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut tallies: Vec<(&str, BTreeMap<&str, usize>, usize)> = Vec::new();

    for mood in moods {
        let Some(meal) = nearest_prior_meal(&by_time, mood.timestamp) else {
            continue;
        };
        let slot = *index.entry(meal.food_name.as_str()).or_insert_with(|| {
            tallies.push((meal.food_name.as_str(), BTreeMap::new(), 0));
            tallies.len() - 1
        });
        let (_, counts, total) = &mut tallies[slot];
        *counts.entry(mood.label.as_str()).or_insert(0) += 1;
        *total += 1;
    }

    tallies
        .into_iter()
        .map(|(meal, counts, total)| MealMoodBreakdown {
            meal: meal.to_string(),
            mood_percentages: counts
                .into_iter()
                .map(|(mood, count)| (mood.to_string(), percentage(count, total)))
                .collect(),
            total_attributions: total,
        })
        .collect()
}

/// `by_time` must be sorted ascending by timestamp (stable).
fn nearest_prior_meal<'a>(
    by_time: &[&'a MealEvent],
    at: DateTime<Utc>,
) -> Option<&'a MealEvent> {
    let prior = &by_time[..by_time.partition_point(|meal| meal.timestamp <= at)];
    let latest = prior.last()?.timestamp;
    let first_at_latest = prior.partition_point(|meal| meal.timestamp < latest);
    Some(prior[first_at_latest])
}

/// `100 * count / total`, rounded to one decimal.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let raw = count as f64 * 100.0 / total as f64;
    (raw * 10.0).round() / 10.0
}
