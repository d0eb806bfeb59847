//! Clear command for deleting the whole journal.

use std::io::Write;

use anyhow::{Context, Result};
use mj_store::{EventStore, KeyValueStore};

/// Removes every meal and mood. Refuses unless `confirmed`.
pub fn run<W: Write, S: KeyValueStore>(
    writer: &mut W,
    store: &mut EventStore<S>,
    confirmed: bool,
) -> Result<()> {
    if !confirmed {
        anyhow::bail!(
            "This will permanently delete all your logged meals and moods. Re-run with --yes to confirm."
        );
    }

    store.clear_all().context("Failed to clear data")?;
    writeln!(writer, "All data has been cleared.")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::Utc;
    use mj_core::{Mood, MoodEvent};
    use mj_store::MemoryStore;

    fn store_with_mood() -> EventStore<MemoryStore> {
        let mut store = EventStore::new(MemoryStore::new());
        store
            .append_mood(&MoodEvent::from_mood(Mood::Happy, Utc::now()))
            .unwrap();
        store
    }

    #[test]
    fn refuses_without_confirmation() {
        let mut store = store_with_mood();
        let mut output = Vec::new();
        assert!(run(&mut output, &mut store, false).is_err());
        assert_eq!(store.list_moods().len(), 1);
    }

    #[test]
    fn clears_when_confirmed() {
        let mut store = store_with_mood();
        let mut output = Vec::new();
        run(&mut output, &mut store, true).unwrap();
        assert!(store.list_moods().is_empty());
        assert_eq!(String::from_utf8(output).unwrap(), "All data has been cleared.\n");
    }

    #[test]
    fn reports_failed_clear() {
        let mut store = store_with_mood();
        store.backend_mut().fail_writes = true;
        let mut output = Vec::new();
        let err = run(&mut output, &mut store, true).unwrap_err();
        assert_eq!(err.to_string(), "Failed to clear data");
        assert_eq!(store.list_moods().len(), 1);
    }
}
