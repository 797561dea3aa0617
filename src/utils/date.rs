//! Calendar helpers: today, ISO parsing, week windows and navigation.

use crate::errors::{AppError, AppResult};
use chrono::{Days, NaiveDate};

/// Days shown by the week grid.
pub const WEEK_DAYS: usize = 7;

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| AppError::InvalidDate(s.to_string()))
}

pub fn iso(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// `start` and the six following calendar days, in display order.
pub fn week_dates(start: NaiveDate) -> AppResult<[NaiveDate; WEEK_DAYS]> {
    let mut out = [start; WEEK_DAYS];
    for (i, slot) in out.iter_mut().enumerate().skip(1) {
        *slot = add_days(start, i as u32)?;
    }
    Ok(out)
}

pub fn add_days(date: NaiveDate, days: u32) -> AppResult<NaiveDate> {
    date.checked_add_days(Days::new(u64::from(days)))
        .ok_or_else(|| AppError::InvalidDate(format!("{} + {days} days", iso(date))))
}

/// Move `date` by `offset_weeks * 7` days, in either direction.
pub fn shift_weeks(date: NaiveDate, offset_weeks: i64) -> AppResult<NaiveDate> {
    let out_of_range = || AppError::InvalidDate(format!("{} shifted by {offset_weeks} weeks", iso(date)));

    let days = offset_weeks
        .unsigned_abs()
        .checked_mul(WEEK_DAYS as u64)
        .ok_or_else(out_of_range)?;

    let shifted = if offset_weeks >= 0 {
        date.checked_add_days(Days::new(days))
    } else {
        date.checked_sub_days(Days::new(days))
    };

    shifted.ok_or_else(out_of_range)
}

/// Short weekday label used by the week grid header, e.g. "Tue 30".
pub fn column_label(date: NaiveDate) -> String {
    date.format("%a %d").to_string()
}
