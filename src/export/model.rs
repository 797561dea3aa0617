use serde::Serialize;

/// One exported row: a checked slot plus the profile it belongs to.
/// Field order is the column order of every export format.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct ExportRow {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Role")]
    pub role: String,
    #[serde(rename = "Time")]
    pub time: String,
    #[serde(rename = "Task")]
    pub task: String,
    #[serde(rename = "Duration_Minutes")]
    pub duration_minutes: u8,
}

/// Header for CSV / XLSX.
pub(crate) fn get_headers() -> [&'static str; 6] {
    ["Date", "Name", "Role", "Time", "Task", "Duration_Minutes"]
}

/// Row values as strings, in header order.
pub(crate) fn row_to_values(r: &ExportRow) -> [String; 6] {
    [
        r.date.clone(),
        r.name.clone(),
        r.role.clone(),
        r.time.clone(),
        r.task.clone(),
        r.duration_minutes.to_string(),
    ]
}
