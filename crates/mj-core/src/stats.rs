//! Frequency statistics over a single log.

use std::collections::HashMap;

use serde::Serialize;

use crate::event::{MealEvent, MoodEvent};

/// Chart color bucket for a mood label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorClass {
    Positive,
    Neutral,
    Negative,
    Default,
}

impl ColorClass {
    /// Static lookup from mood label to color bucket.
    #[must_use]
    pub fn for_mood(label: &str) -> Self {
        match label {
            "Happy" | "Energetic" => Self::Positive,
            "Neutral" => Self::Neutral,
            "Sad" | "Tired" | "Stressed" => Self::Negative,
            _ => Self::Default,
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Neutral => "neutral",
            Self::Negative => "negative",
            Self::Default => "default",
        }
    }
}

/// How often a mood label was logged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoodDistributionSlice {
    pub mood: String,
    pub count: usize,
    pub color: ColorClass,
}

/// How often a food was logged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MealFrequency {
    pub meal: String,
    pub count: usize,
}

/// Counts each mood label, most frequent first.
///
/// Labels with equal counts keep the order they first appeared in.
pub fn mood_distribution(moods: &[MoodEvent]) -> Vec<MoodDistributionSlice> {
    count_by_first_seen(moods.iter().map(|m| m.label.as_str()))
        .into_iter()
        .map(|(mood, count)| MoodDistributionSlice {
            color: ColorClass::for_mood(mood),
            mood: mood.to_string(),
            count,
        })
        .collect()
}

/// Ranks foods by how often they were logged, keeping the top `limit`.
///
/// Ties are broken by first occurrence in `meals`.
pub fn meal_frequency(meals: &[MealEvent], limit: usize) -> Vec<MealFrequency> {
    count_by_first_seen(meals.iter().map(|m| m.food_name.as_str()))
        .into_iter()
        .take(limit)
        .map(|(meal, count)| MealFrequency {
            meal: meal.to_string(),
            count,
        })
        .collect()
}

/// Counts keys, returned by count descending then first-seen position.
fn count_by_first_seen<'a>(keys: impl Iterator<Item = &'a str>) -> Vec<(&'a str, usize)> {
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for key in keys {
        let slot = *positions.entry(key).or_insert_with(|| {
            counts.push((key, 0));
            counts.len() - 1
        });
        counts[slot].1 += 1;
    }
    // Stable sort keeps first-seen order among equal counts.
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{meal, mood};
    use crate::types::{Intensity, Mood};

    #[test]
    fn frequency_ranking_breaks_ties_by_first_occurrence() {
        let meals: Vec<_> = ["A", "B", "A", "C", "B", "A"]
            .iter()
            .enumerate()
            .map(|(i, name)| meal(name, i64::try_from(i).unwrap()))
            .collect();
        let ranking = meal_frequency(&meals, 5);
        assert_eq!(
            ranking,
            vec![
                MealFrequency { meal: "A".into(), count: 3 },
                MealFrequency { meal: "B".into(), count: 2 },
                MealFrequency { meal: "C".into(), count: 1 },
            ]
        );
    }

    #[test]
    fn frequency_equal_counts_keep_input_order() {
        let meals = vec![meal("Z", 0), meal("Y", 1), meal("X", 2)];
        let names: Vec<_> = meal_frequency(&meals, 5).into_iter().map(|f| f.meal).collect();
        assert_eq!(names, vec!["Z", "Y", "X"]);
    }

    #[test]
    fn frequency_keeps_top_limit() {
        let meals: Vec<_> = (0..8).map(|i| meal(&format!("food-{i}"), i)).collect();
        assert_eq!(meal_frequency(&meals, 5).len(), 5);
        assert!(meal_frequency(&[], 5).is_empty());
    }

    #[test]
    fn distribution_counts_and_colors() {
        let moods = vec![
            mood(Mood::Sad, 0),
            mood(Mood::Happy, 1),
            mood(Mood::Happy, 2),
            mood(Mood::Neutral, 3),
        ];
        let slices = mood_distribution(&moods);
        assert_eq!(
            slices,
            vec![
                MoodDistributionSlice {
                    mood: "Happy".into(),
                    count: 2,
                    color: ColorClass::Positive,
                },
                MoodDistributionSlice {
                    mood: "Sad".into(),
                    count: 1,
                    color: ColorClass::Negative,
                },
                MoodDistributionSlice {
                    mood: "Neutral".into(),
                    count: 1,
                    color: ColorClass::Neutral,
                },
            ]
        );
    }

    #[test]
    fn unknown_labels_get_default_color() {
        let at = mood(Mood::Neutral, 0).timestamp;
        let odd = MoodEvent::new("Curious", Intensity::new(3).unwrap(), "🤔", at).unwrap();
        let slices = mood_distribution(&[odd]);
        assert_eq!(slices[0].color, ColorClass::Default);
    }

    #[test]
    fn empty_moods_give_empty_distribution() {
        assert!(mood_distribution(&[]).is_empty());
    }
}
