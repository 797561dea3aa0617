//! Import of JSON documents saved by the browser version of the tracker.

use crate::core::tracker::Tracker;
use crate::db::kv::KeyValueStore;
use crate::errors::{AppError, AppResult};
use crate::models::{Hour, Profile, Slot, SlotStore};
use crate::utils::date::parse_date;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportReport {
    pub slots: usize,
    /// Entries dropped for a bad date key, hour key or slot value.
    pub skipped: usize,
    pub profile: bool,
}

/// Slots read from a browser document, plus how many entries were unusable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedSlots {
    pub slots: SlotStore,
    pub skipped: usize,
}

pub struct ImportLogic;

impl ImportLogic {
    /// Merge the slot document at `data` (and optionally the profile document
    /// at `profile`) into the tracker. Imported slots replace existing ones.
    pub fn apply<S: KeyValueStore>(
        tracker: &mut Tracker<S>,
        data: &Path,
        profile: Option<&Path>,
    ) -> AppResult<ImportReport> {
        let parsed = Self::parse_slots(&read(data)?)?;
        let slots = tracker.merge_slots(parsed.slots)?;

        let profile = match profile {
            Some(p) => {
                let parsed: Profile = serde_json::from_str(&read(p)?)?;
                tracker.replace_profile(parsed)?;
                true
            }
            None => false,
        };

        Ok(ImportReport {
            slots,
            skipped: parsed.skipped,
            profile,
        })
    }

    /// Parse `{"YYYY-MM-DD": {"<hour>": {...}}}`. `null` reads as empty.
    ///
    /// The browser version can store slots under an empty date (cleared date
    /// picker) and nothing stops odd hour keys, so entries whose date is not
    /// ISO, whose hour is not 0..24 or whose value is not a slot are skipped
    /// and counted instead of failing the whole document.
    pub fn parse_slots(raw: &str) -> AppResult<ParsedSlots> {
        let days: Option<BTreeMap<String, Value>> = serde_json::from_str(raw)?;
        let mut out = ParsedSlots::default();

        for (date_key, day) in days.unwrap_or_default() {
            let hours = match day {
                Value::Object(map) => map,
                Value::Null => continue,
                _ => {
                    out.skipped += 1;
                    continue;
                }
            };

            let Ok(date) = parse_date(&date_key) else {
                out.skipped += hours.len();
                continue;
            };

            for (hour_key, value) in hours {
                let hour = Hour::parse(&hour_key);
                let slot = serde_json::from_value::<Slot>(value);
                match (hour, slot) {
                    (Ok(hour), Ok(slot)) => out.slots.put(date, hour, slot),
                    _ => out.skipped += 1,
                }
            }
        }

        Ok(out)
    }
}

fn read(path: &Path) -> AppResult<String> {
    fs::read_to_string(path).map_err(|e| {
        AppError::Other(format!("cannot read '{}': {e}", path.display()))
    })
}
