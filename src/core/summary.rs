//! Totals over the tracked slots of one or more dates.

use crate::models::SlotStore;
use crate::utils::format_hours_minutes;
use chrono::NaiveDate;
use std::collections::BTreeSet;
use std::fmt;

/// Sum of durations of checked slots over `dates`. Dates with no data add 0
/// and a date listed twice is counted once.
pub fn total_minutes(slots: &SlotStore, dates: &[NaiveDate]) -> u32 {
    let unique: BTreeSet<&NaiveDate> = dates.iter().collect();
    unique.into_iter().map(|d| day_minutes(slots, *d)).sum()
}

pub fn day_minutes(slots: &SlotStore, date: NaiveDate) -> u32 {
    slots
        .day(date)
        .map(|day| day.values().map(|s| s.tracked_minutes()).sum::<u32>())
        .unwrap_or(0)
}

/// Split minutes into whole hours and the remainder.
pub fn to_hours_minutes(total_minutes: u32) -> (u32, u32) {
    (total_minutes / 60, total_minutes % 60)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub total_minutes: u32,
    pub hours: u32,
    pub minutes: u32,
    /// Tracked minutes of each date, in the order requested.
    pub per_day: Vec<(NaiveDate, u32)>,
}

impl Summary {
    pub fn for_dates(slots: &SlotStore, dates: &[NaiveDate]) -> Self {
        let total = total_minutes(slots, dates);
        let (hours, minutes) = to_hours_minutes(total);
        Self {
            total_minutes: total,
            hours,
            minutes,
            per_day: dates.iter().map(|d| (*d, day_minutes(slots, *d))).collect(),
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_hours_minutes(self.hours, self.minutes))
    }
}
