//! Text rendering of the day slot list and the week grid.

use crate::core::summary::{day_minutes, to_hours_minutes};
use crate::models::{Hour, SlotStore};
use crate::utils::colors::colorize_slot;
use crate::utils::date::{column_label, iso};
use crate::utils::formatting::{pad_right, rule, truncate};
use crate::utils::{format_hours_minutes, hour_label};
use chrono::NaiveDate;

/// Width of the task column in the day list.
const DAY_TASK_WIDTH: usize = 40;
/// Width of one date column in the week grid.
const WEEK_CELL_WIDTH: usize = 12;
/// Width of the hour label column ("HH:00 - HH:00").
const HOUR_WIDTH: usize = 13;

/// One line per hour: checkbox, time range, task and duration.
/// Untouched hours show the defaults an empty slot reads as.
pub fn render_day(slots: &SlotStore, date: NaiveDate, separator: &str) -> String {
    let mut out = String::new();

    for hour in Hour::all() {
        let slot = slots.slot(date, hour);
        let mark = if slot.checked { "[x]" } else { "[ ]" };
        let task = pad_right(&truncate(&slot.task, DAY_TASK_WIDTH), DAY_TASK_WIDTH);
        let line = format!(
            "{mark} {}  {task}  {:>2} min",
            hour_label(hour),
            slot.duration
        );
        out.push_str(&colorize_slot(&line, slot.checked));
        out.push('\n');
    }

    let width = 4 + HOUR_WIDTH + 2 + DAY_TASK_WIDTH + 2 + 6;
    out.push_str(&rule(separator, width));
    out.push('\n');
    out
}

/// Hours as rows, dates as columns. Checked cells show their task (or a
/// tick when blank); the footer holds each date's total.
pub fn render_week(slots: &SlotStore, dates: &[NaiveDate], separator: &str) -> String {
    let mut out = String::new();

    out.push_str(&pad_right("", HOUR_WIDTH));
    for date in dates {
        out.push_str(" | ");
        out.push_str(&pad_right(&column_label(*date), WEEK_CELL_WIDTH));
    }
    out.push('\n');

    let width = HOUR_WIDTH + dates.len() * (WEEK_CELL_WIDTH + 3);
    out.push_str(&rule(separator, width));
    out.push('\n');

    for hour in Hour::all() {
        out.push_str(&hour_label(hour));
        for date in dates {
            out.push_str(" | ");
            let cell = match slots.get(*date, hour) {
                Some(slot) if slot.checked => {
                    let text = if slot.task.trim().is_empty() {
                        "✓".to_string()
                    } else {
                        truncate(&slot.task, WEEK_CELL_WIDTH)
                    };
                    colorize_slot(&pad_right(&text, WEEK_CELL_WIDTH), true)
                }
                _ => pad_right("", WEEK_CELL_WIDTH),
            };
            out.push_str(&cell);
        }
        out.push('\n');
    }

    out.push_str(&rule(separator, width));
    out.push('\n');

    out.push_str(&pad_right("Total", HOUR_WIDTH));
    for date in dates {
        let (h, m) = to_hours_minutes(day_minutes(slots, *date));
        out.push_str(" | ");
        out.push_str(&pad_right(&format_hours_minutes(h, m), WEEK_CELL_WIDTH));
    }
    out.push('\n');
    out
}

/// Title line for the active range.
pub fn range_title(dates: &[NaiveDate]) -> String {
    match dates {
        [] => String::new(),
        [single] => format!("Day {} ({})", iso(*single), single.format("%A")),
        [first, .., last] => format!("Week {} → {}", iso(*first), iso(*last)),
    }
}
