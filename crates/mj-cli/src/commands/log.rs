//! Meal and mood logging commands.

use std::fmt::Display;
use std::io::Write;

use anyhow::{Context, Result};
use chrono::{DateTime, TimeZone, Utc};
use mj_core::{MealCategory, MealEvent, Mood, MoodEvent};
use mj_store::{EventStore, KeyValueStore};

use super::util::clock_time;

/// Appends a meal to the journal.
pub fn meal<W, S, Tz>(
    writer: &mut W,
    store: &mut EventStore<S>,
    food: &str,
    category: MealCategory,
    at: DateTime<Utc>,
    now: &DateTime<Tz>,
) -> Result<()>
where
    W: Write,
    S: KeyValueStore,
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let meal = MealEvent::new(food, category, at).context("Please enter a food name")?;
    store.append_meal(&meal).context("Failed to save meal")?;
    tracing::debug!(id = %meal.id, food = %meal.food_name, "meal logged");

    writeln!(
        writer,
        "Meal logged: {} ({}) at {}",
        meal.food_name,
        meal.category,
        clock_time(meal.timestamp, now)
    )?;
    Ok(())
}

/// Appends a mood to the journal.
pub fn mood<W, S, Tz>(
    writer: &mut W,
    store: &mut EventStore<S>,
    mood: Mood,
    at: DateTime<Utc>,
    now: &DateTime<Tz>,
) -> Result<()>
where
    W: Write,
    S: KeyValueStore,
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let mood = MoodEvent::from_mood(mood, at);
    store.append_mood(&mood).context("Failed to save mood")?;
    tracing::debug!(id = %mood.id, mood = %mood.label, "mood logged");

    writeln!(
        writer,
        "Mood logged: {} {} at {}",
        mood.emoji,
        mood.label,
        clock_time(mood.timestamp, now)
    )?;
    Ok(())
}
