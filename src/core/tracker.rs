//! Application state: the current date, the active view, the slot store and
//! the profile, written through to a key-value store on every change.

use crate::core::summary::Summary;
use crate::db::kv::{KeyValueStore, PROFILE_KEY, SLOTS_KEY};
use crate::errors::{AppError, AppResult};
use crate::export::ExportRow;
use crate::export::rows::prepare_export_rows;
use crate::models::{Hour, Profile, ProfileField, Slot, SlotStore, View};
use crate::utils::date::{add_days, shift_weeks, week_dates};
use chrono::NaiveDate;
use serde::de::DeserializeOwned;

pub struct Tracker<S: KeyValueStore> {
    store: S,
    slots: SlotStore,
    profile: Profile,
    current_date: NaiveDate,
    view: View,
}

impl<S: KeyValueStore> Tracker<S> {
    /// Load slots and profile from `store`; absent keys give empty defaults.
    pub fn load(store: S, view: View, current_date: NaiveDate) -> AppResult<Self> {
        let slots = load_or_default::<SlotStore, _>(&store, SLOTS_KEY)?;
        let profile = load_or_default::<Profile, _>(&store, PROFILE_KEY)?;

        Ok(Self {
            store,
            slots,
            profile,
            current_date,
            view,
        })
    }

    pub fn view(&self) -> View {
        self.view
    }

    /// Day being edited (day view) or first day of the week (week view).
    pub fn current_date(&self) -> NaiveDate {
        self.current_date
    }

    pub fn slots(&self) -> &SlotStore {
        &self.slots
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Move the current date by whole weeks; returns the new date.
    pub fn change_week(&mut self, offset_weeks: i64) -> AppResult<NaiveDate> {
        self.current_date = shift_weeks(self.current_date, offset_weeks)?;
        Ok(self.current_date)
    }

    /// Dates covered by the active view, in display and export order.
    pub fn dates(&self) -> AppResult<Vec<NaiveDate>> {
        match self.view {
            View::Day => Ok(vec![self.current_date]),
            View::Week => Ok(week_dates(self.current_date)?.to_vec()),
        }
    }

    /// Date of the `day_offset`-th column of the active view.
    pub fn column_date(&self, day_offset: u32) -> AppResult<NaiveDate> {
        let max = self.view.span_days() - 1;
        if day_offset > max {
            return Err(AppError::InvalidDayOffset {
                offset: day_offset,
                view: self.view.as_str(),
                max,
            });
        }
        add_days(self.current_date, day_offset)
    }

    pub fn slot(&self, date: NaiveDate, hour: Hour) -> Slot {
        self.slots.slot(date, hour)
    }

    /// Make sure (date, hour) exists; a new slot is persisted at once.
    pub fn ensure_slot(&mut self, date: NaiveDate, hour: Hour) -> AppResult<Slot> {
        let created = self.slots.get(date, hour).is_none();
        let slot = self.slots.ensure_slot(date, hour).clone();
        if created {
            self.persist_slots()?;
        }
        Ok(slot)
    }

    pub fn toggle_slot(&mut self, date: NaiveDate, hour: Hour, checked: bool) -> AppResult<()> {
        self.slots.set_checked(date, hour, checked);
        self.persist_slots()
    }

    pub fn update_task(&mut self, date: NaiveDate, hour: Hour, text: &str) -> AppResult<()> {
        self.slots.set_task(date, hour, text, self.view);
        self.persist_slots()
    }

    /// Store a clamped duration parsed from `raw`; returns the stored minutes.
    pub fn update_duration(&mut self, date: NaiveDate, hour: Hour, raw: &str) -> AppResult<u8> {
        let minutes = self.slots.set_duration(date, hour, raw);
        self.persist_slots()?;
        Ok(minutes)
    }

    pub fn save_profile(&mut self, field: ProfileField, value: &str) -> AppResult<()> {
        self.profile.set(field, value);
        self.persist_profile()
    }

    pub fn replace_profile(&mut self, profile: Profile) -> AppResult<()> {
        self.profile = profile;
        self.persist_profile()
    }

    /// Merge `incoming` into the store (incoming wins); returns slots copied.
    pub fn merge_slots(&mut self, incoming: SlotStore) -> AppResult<usize> {
        let copied = self.slots.merge(incoming);
        self.persist_slots()?;
        Ok(copied)
    }

    pub fn summary(&self) -> AppResult<Summary> {
        Ok(Summary::for_dates(&self.slots, &self.dates()?))
    }

    /// Rows for the dates of the active view; `EmptyExport` when none.
    pub fn export_rows(&self) -> AppResult<Vec<ExportRow>> {
        prepare_export_rows(&self.slots, &self.profile, &self.dates()?)
    }

    fn persist_slots(&mut self) -> AppResult<()> {
        let json = serde_json::to_string(&self.slots)?;
        self.store.set(SLOTS_KEY, &json)
    }

    fn persist_profile(&mut self) -> AppResult<()> {
        let json = serde_json::to_string(&self.profile)?;
        self.store.set(PROFILE_KEY, &json)
    }
}

fn load_or_default<T, S>(store: &S, key: &str) -> AppResult<T>
where
    T: DeserializeOwned + Default,
    S: KeyValueStore,
{
    match store.get(key)? {
        Some(raw) => Ok(serde_json::from_str(&raw)?),
        None => Ok(T::default()),
    }
}
