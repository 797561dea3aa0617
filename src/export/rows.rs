use crate::errors::{AppError, AppResult};
use crate::export::model::ExportRow;
use crate::models::{Profile, SlotStore};
use crate::utils::date::iso;
use crate::utils::hour_label;
use chrono::NaiveDate;

/// Flatten the checked slots of `dates` into rows: date-major in the given
/// order, hours ascending within a date. No rows is `AppError::EmptyExport`.
pub fn prepare_export_rows(
    slots: &SlotStore,
    profile: &Profile,
    dates: &[NaiveDate],
) -> AppResult<Vec<ExportRow>> {
    let name = profile.export_name();
    let role = profile.export_role();

    let rows: Vec<ExportRow> = dates
        .iter()
        .flat_map(|date| {
            slots.checked_slots(*date).map(move |(hour, slot)| ExportRow {
                date: iso(*date),
                name: name.to_string(),
                role: role.to_string(),
                time: hour_label(hour),
                task: slot.task.clone(),
                duration_minutes: slot.duration,
            })
        })
        .collect();

    if rows.is_empty() {
        return Err(AppError::EmptyExport);
    }

    Ok(rows)
}
