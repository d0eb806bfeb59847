//! Configuration loading and management.

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use mj_core::{InsightsConfig, ValidationError};
use mj_store::StoreKeys;
use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Path to the journal database file.
    pub database_path: PathBuf,

    /// Key holding the meal log.
    pub meals_key: String,

    /// Key holding the mood log.
    pub moods_key: String,

    /// How long before a mood a meal may have been eaten to be linked to it.
    pub window_minutes: i64,

    /// Maximum meal/mood links shown per polarity.
    pub correlation_limit: usize,

    /// Points on the mood trend chart.
    pub trend_points: usize,

    /// Foods in the frequency ranking.
    pub top_meals: usize,

    /// Entries shown by `mj recent` when `--limit` is not given.
    pub recent_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        let data_dir = dirs_data_path().unwrap_or_else(|| PathBuf::from("."));
        let keys = StoreKeys::default();
        Self {
            database_path: data_dir.join("mj.db"),
            meals_key: keys.meals,
            moods_key: keys.moods,
            window_minutes: 120,
            correlation_limit: 5,
            trend_points: 7,
            top_meals: 5,
            recent_limit: 3,
        }
    }
}

impl Config {
    /// Loads configuration, optionally from a specific file.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Load from default config location
        if let Some(config_dir) = dirs_config_path() {
            figment = figment.merge(Toml::file(config_dir.join("config.toml")));
        }

        // Load from specified config file
        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        // Load from environment variables (MJ_*)
        figment = figment.merge(Env::prefixed("MJ_"));

        figment.extract()
    }

    /// Storage keys for the two logs.
    pub fn store_keys(&self) -> StoreKeys {
        StoreKeys {
            meals: self.meals_key.clone(),
            moods: self.moods_key.clone(),
        }
    }

    /// Analytics tunables, rejecting an unusable `window_minutes`.
    pub fn insights(&self) -> Result<InsightsConfig, ValidationError> {
        InsightsConfig::from_parts(
            self.window_minutes,
            self.correlation_limit,
            self.trend_points,
            self.top_meals,
        )
    }
}

/// Returns the platform-specific config directory for mj.
fn dirs_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("mj"))
}

/// Returns the platform-specific data directory for mj.
///
/// On Linux: `~/.local/share/mj`
pub fn dirs_data_path() -> Option<PathBuf> {
    dirs::data_dir().map(|p| p.join("mj"))
}
