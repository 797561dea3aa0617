// src/export/mod.rs

pub mod csv_text;
mod json;
pub mod logic;
mod model;
pub mod naming;
pub mod rows;
pub mod xlsx;

pub use logic::ExportLogic;
pub use model::ExportRow;
pub use rows::prepare_export_rows;

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Common completion message for every export format.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Xlsx,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Xlsx => "xlsx",
            ExportFormat::Json => "json",
        }
    }
}
