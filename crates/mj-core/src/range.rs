//! Time-range filtering of journal entries.
//!
//! "Local" means the timezone carried by the `now` argument, so callers pass
//! `Local::now()` in production and a fixed offset in tests.

use std::fmt;

use chrono::{DateTime, Duration, TimeZone};
use serde::{Deserialize, Serialize};

use crate::event::JournalEvent;

/// Which slice of history the analytics look at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeRange {
    /// Same local calendar date as `now`.
    Today,
    /// The last seven days up to `now`, inclusive of the lower bound.
    Week,
    /// Everything.
    #[default]
    All,
}

impl TimeRange {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Today => "today",
            Self::Week => "week",
            Self::All => "all",
        }
    }

    /// Whether an entry logged at `ts` falls in this range.
    pub fn contains<Tz, Tz2>(self, ts: &DateTime<Tz2>, now: &DateTime<Tz>) -> bool
    where
        Tz: TimeZone,
        Tz2: TimeZone,
    {
        match self {
            Self::Today => ts.with_timezone(&now.timezone()).date_naive() == now.date_naive(),
            Self::Week => *ts >= now.clone() - Duration::days(7),
            Self::All => true,
        }
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for TimeRange {
    type Err = UnknownTimeRange;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "today" | "day" => Ok(Self::Today),
            "week" => Ok(Self::Week),
            "all" => Ok(Self::All),
            _ => Err(UnknownTimeRange(s.to_string())),
        }
    }
}

/// Error type for unknown range strings.
#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown time range: {0} (expected today, week or all)")]
pub struct UnknownTimeRange(String);

/// Keeps the entries inside `range`, preserving their order.
pub fn filter_events<E, Tz>(events: &[E], range: TimeRange, now: &DateTime<Tz>) -> Vec<E>
where
    E: JournalEvent + Clone,
    Tz: TimeZone,
{
    if range == TimeRange::All {
        return events.to_vec();
    }
    events
        .iter()
        .filter(|e| range.contains(&e.timestamp(), now))
        .cloned()
        .collect()
}
