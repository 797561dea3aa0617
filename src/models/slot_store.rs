use crate::errors::{AppError, AppResult};
use crate::models::slot::{SLOT_MINUTES, Slot, clamp_duration};
use crate::models::view::View;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Number of hourly slots in a day.
pub const HOURS_PER_DAY: u8 = 24;

/// Sparse hour → slot map for one date. Only touched hours are present.
pub type DaySlots = BTreeMap<u8, Slot>;

/// Checked hour index, always in `0..24`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Hour(u8);

impl Hour {
    pub fn new(h: u8) -> AppResult<Self> {
        if h < HOURS_PER_DAY {
            Ok(Self(h))
        } else {
            Err(AppError::InvalidHour(h.to_string()))
        }
    }

    pub fn parse(s: &str) -> AppResult<Self> {
        let h = s
            .trim()
            .parse::<u8>()
            .map_err(|_| AppError::InvalidHour(s.to_string()))?;
        Self::new(h)
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn all() -> impl Iterator<Item = Hour> {
        (0..HOURS_PER_DAY).map(Hour)
    }
}

/// Every slot the user has touched, keyed by date then hour.
///
/// Serializes to `{"YYYY-MM-DD": {"<hour>": {checked, task, duration}}}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SlotStore {
    days: BTreeMap<NaiveDate, DaySlots>,
}

impl SlotStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Slot at (date, hour); untouched hours read as `Slot::default()`.
    pub fn slot(&self, date: NaiveDate, hour: Hour) -> Slot {
        self.get(date, hour).cloned().unwrap_or_default()
    }

    /// Slot at (date, hour) only if it was touched.
    pub fn get(&self, date: NaiveDate, hour: Hour) -> Option<&Slot> {
        self.days.get(&date).and_then(|d| d.get(&hour.0))
    }

    pub fn day(&self, date: NaiveDate) -> Option<&DaySlots> {
        self.days.get(&date)
    }

    pub fn is_empty(&self) -> bool {
        self.days.values().all(|d| d.is_empty())
    }

    /// Existing slot, or a freshly inserted `Slot::touched()`.
    pub fn ensure_slot(&mut self, date: NaiveDate, hour: Hour) -> &mut Slot {
        self.days
            .entry(date)
            .or_default()
            .entry(hour.0)
            .or_insert_with(Slot::touched)
    }

    /// Set `checked` only; a missing slot is created with defaults.
    pub fn set_checked(&mut self, date: NaiveDate, hour: Hour, checked: bool) {
        self.days
            .entry(date)
            .or_default()
            .entry(hour.0)
            .and_modify(|s| s.checked = checked)
            .or_insert_with(|| Slot::with_checked(checked));
    }

    /// Set the task text. In the week view a blank task also unchecks the
    /// slot and a non-blank one checks it; the day view leaves `checked` alone.
    pub fn set_task(&mut self, date: NaiveDate, hour: Hour, text: &str, view: View) {
        let slot = self.ensure_slot(date, hour);
        slot.task = text.to_string();
        if view == View::Week {
            slot.checked = !text.trim().is_empty();
        }
    }

    /// Parse, clamp to 0..=60 and store; returns the stored value.
    pub fn set_duration(&mut self, date: NaiveDate, hour: Hour, raw: &str) -> u8 {
        let minutes = clamp_duration(raw);
        self.ensure_slot(date, hour).duration = minutes;
        minutes
    }

    /// Overwrite a whole slot. Duration is clamped to the slot length.
    pub fn put(&mut self, date: NaiveDate, hour: Hour, mut slot: Slot) {
        slot.duration = slot.duration.min(SLOT_MINUTES);
        self.days.entry(date).or_default().insert(hour.0, slot);
    }

    /// Copy every slot of `other` into this store; `other` wins on conflicts.
    /// Returns the number of slots copied.
    pub fn merge(&mut self, other: SlotStore) -> usize {
        let mut copied = 0;
        for (date, day) in other.days {
            for (h, slot) in day {
                if let Ok(hour) = Hour::new(h) {
                    self.put(date, hour, slot);
                    copied += 1;
                }
            }
        }
        copied
    }

    /// Checked slots of `date` in ascending hour order.
    pub fn checked_slots(&self, date: NaiveDate) -> impl Iterator<Item = (Hour, &Slot)> {
        self.days
            .get(&date)
            .into_iter()
            .flat_map(|d| d.iter())
            .filter(|(h, s)| s.checked && **h < HOURS_PER_DAY)
            .map(|(h, s)| (Hour(*h), s))
    }
}
