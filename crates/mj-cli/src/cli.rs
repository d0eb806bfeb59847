//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use mj_core::{MealCategory, Mood, TimeRange};

/// Meal and mood journal.
///
/// Log what you eat and how you feel, then see which meals tend to come
/// before good and bad moods.
#[derive(Debug, Parser)]
#[command(name = "mj", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Log a meal.
    Meal {
        /// What you ate (e.g., Oatmeal, Pizza, Apple).
        food: String,

        /// Breakfast, lunch, dinner or snack.
        #[arg(long, default_value = "breakfast")]
        category: MealCategory,

        /// When you ate, if not now (ISO 8601 or e.g. "2 hours ago").
        #[arg(long)]
        at: Option<String>,
    },

    /// Log a mood.
    Mood {
        /// Happy, energetic, neutral, tired, sad or stressed.
        mood: Mood,

        /// When you felt it, if not now (ISO 8601 or e.g. "30 minutes ago").
        #[arg(long)]
        at: Option<String>,
    },

    /// Show the most recent meals and moods.
    Recent {
        /// Entries per log (defaults to `recent_limit` from config).
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Show mood trends and meal/mood patterns.
    Insights {
        /// Which moods to analyze: today, week or all.
        #[arg(long, default_value = "all")]
        range: TimeRange,

        /// Output JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Delete every logged meal and mood.
    Clear {
        /// Confirm deletion. This cannot be undone.
        #[arg(long)]
        yes: bool,
    },
}
