use crate::export::ExportFormat;
use crate::models::{Profile, View};
use crate::utils::date::iso;
use chrono::NaiveDate;

/// `time_log_<name>_<date>.<ext>` for the day view,
/// `time_log_<name>_week_<start>.<ext>` for the week view.
/// A blank name becomes "user"; path separators in the name become '_'.
pub fn export_file_name(
    profile: &Profile,
    view: View,
    date: NaiveDate,
    format: ExportFormat,
) -> String {
    let name = profile.file_label().replace(['/', '\\'], "_");
    match view {
        View::Day => format!("time_log_{}_{}.{}", name, iso(date), format.as_str()),
        View::Week => format!("time_log_{}_week_{}.{}", name, iso(date), format.as_str()),
    }
}
