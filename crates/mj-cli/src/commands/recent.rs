//! Recent command for showing the latest journal entries.

use std::fmt::Display;
use std::io::Write;

use anyhow::Result;
use chrono::{DateTime, TimeZone};
use mj_core::recent;
use mj_store::{EventStore, KeyValueStore};

use super::util::clock_time;

/// Prints the newest `limit` meals and moods.
pub fn run<W, S, Tz>(
    writer: &mut W,
    store: &EventStore<S>,
    limit: usize,
    now: &DateTime<Tz>,
) -> Result<()>
where
    W: Write,
    S: KeyValueStore,
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let meals = recent(&store.list_meals(), limit);
    let moods = recent(&store.list_moods(), limit);

    writeln!(writer, "Recent meals")?;
    if meals.is_empty() {
        writeln!(writer, "No meals logged yet.")?;
    }
    for meal in &meals {
        writeln!(
            writer,
            "- {} ({}) {}",
            meal.food_name,
            meal.category,
            clock_time(meal.timestamp, now)
        )?;
    }

    writeln!(writer)?;
    writeln!(writer, "Recent moods")?;
    if moods.is_empty() {
        writeln!(writer, "No moods logged yet.")?;
    }
    for mood in &moods {
        writeln!(
            writer,
            "- {} {} {}",
            mood.emoji,
            mood.label,
            clock_time(mood.timestamp, now)
        )?;
    }

    Ok(())
}
