//! Insights command for mood trends and meal/mood patterns.
//!
//! Renders [`Insights`] either as a sectioned text report or as JSON
//! (`--json`) for other tools.

use std::fmt::Display;
use std::io::Write;

use anyhow::Result;
use chrono::{DateTime, TimeZone, Utc};
use mj_core::{CorrelationRecord, Insights, InsightsConfig, TimeRange, build_insights};
use mj_store::{EventStore, KeyValueStore};
use serde::Serialize;

const NO_PATTERNS: &str = "No patterns found yet. Try logging meals and moods consistently!";

/// JSON envelope for `--json` output.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct InsightsJson<'a> {
    generated_at: DateTime<Utc>,
    /// UTC offset of `now`, the zone trend labels and "today" are computed in.
    timezone: String,
    #[serde(flatten)]
    insights: &'a Insights,
}

/// Loads both logs and prints insights for `range`.
pub fn run<W, S, Tz>(
    writer: &mut W,
    store: &EventStore<S>,
    config: &InsightsConfig,
    range: TimeRange,
    json: bool,
    now: &DateTime<Tz>,
) -> Result<()>
where
    W: Write,
    S: KeyValueStore,
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let meals = store.list_meals();
    let moods = store.list_moods();
    let insights = build_insights(&meals, &moods, config, range, now);

    if json {
        let envelope = InsightsJson {
            generated_at: now.with_timezone(&Utc),
            timezone: now.offset().to_string(),
            insights: &insights,
        };
        writeln!(writer, "{}", serde_json::to_string_pretty(&envelope)?)?;
    } else {
        write!(writer, "{}", format_insights(&insights))?;
    }
    Ok(())
}

/// Formats the human-readable report.
pub fn format_insights(insights: &Insights) -> String {
    let mut out = Vec::new();

    out.push(format!("INSIGHTS: {}", describe_range(insights.range)));
    out.push(format!(
        "Meals logged: {}, moods analyzed: {}",
        insights.meals_logged, insights.moods_in_range
    ));

    let trend = insights.trend.as_ref().map_or_else(Vec::new, |trend| {
        trend
            .labels
            .iter()
            .zip(&trend.values)
            .map(|(label, value)| format!("{label}  {} {value}", intensity_bar(*value)))
            .collect()
    });
    section(&mut out, "MOOD TREND", trend, "Log some moods to see your trends!");

    section(
        &mut out,
        "MEALS THAT MIGHT HAVE BOOSTED YOUR MOOD",
        correlation_lines(&insights.positive),
        NO_PATTERNS,
    );
    section(
        &mut out,
        "MEALS BEFORE LOW MOODS",
        correlation_lines(&insights.negative),
        NO_PATTERNS,
    );

    let breakdown = insights
        .breakdown
        .iter()
        .map(|b| {
            let shares: Vec<String> = b
                .mood_percentages
                .iter()
                .map(|(mood, pct)| format!("{mood} {pct:.1}%"))
                .collect();
            format!("{} ({}): {}", b.meal, b.total_attributions, shares.join(", "))
        })
        .collect();
    section(&mut out, "MOOD AFTER EACH MEAL", breakdown, NO_PATTERNS);

    let distribution = insights
        .distribution
        .iter()
        .map(|slice| format!("{} {} ({})", slice.mood, slice.count, slice.color.as_str()))
        .collect();
    section(&mut out, "MOOD DISTRIBUTION", distribution, "No moods logged yet.");

    let top_meals = insights
        .top_meals
        .iter()
        .map(|f| format!("{} {}", f.meal, f.count))
        .collect();
    section(&mut out, "TOP MEALS", top_meals, "No meals logged yet.");

    let mut text = out.join("\n");
    text.push('\n');
    text
}

fn section(out: &mut Vec<String>, title: &str, lines: Vec<String>, empty: &str) {
    out.push(String::new());
    out.push(title.to_string());
    out.push("─".repeat(title.chars().count()));
    if lines.is_empty() {
        out.push(empty.to_string());
    } else {
        out.extend(lines);
    }
}

fn correlation_lines(records: &[CorrelationRecord]) -> Vec<String> {
    records
        .iter()
        .map(|r| format!("You felt {} {} after eating {}.", r.mood, r.emoji, r.meal))
        .collect()
}

const fn describe_range(range: TimeRange) -> &'static str {
    match range {
        TimeRange::Today => "today",
        TimeRange::Week => "last 7 days",
        TimeRange::All => "all time",
    }
}

/// Five-cell bar for an intensity of 1 to 5.
fn intensity_bar(value: u8) -> String {
    let filled = usize::from(value.min(5));
    format!("{}{}", "█".repeat(filled), "░".repeat(5 - filled))
}
