// src/export/logic.rs

use crate::core::tracker::Tracker;
use crate::db::kv::KeyValueStore;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::csv_text::export_csv;
use crate::export::json::export_json;
use crate::export::naming::export_file_name;
use crate::export::xlsx::export_xlsx;
use crate::ui::messages::warning;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

/// High level export of the active view.
pub struct ExportLogic;

impl ExportLogic {
    /// Write the rows of the tracker's current day or week into `dir`, using
    /// the standard file name. Returns the written path.
    ///
    /// Rows are built before anything touches the filesystem, so an empty
    /// range fails with `AppError::EmptyExport` and leaves no file behind.
    pub fn export<S: KeyValueStore>(
        tracker: &Tracker<S>,
        format: ExportFormat,
        dir: &Path,
        force: bool,
    ) -> AppResult<PathBuf> {
        let rows = tracker.export_rows()?;

        let file_name = export_file_name(
            tracker.profile(),
            tracker.view(),
            tracker.current_date(),
            format,
        );
        let path = dir.join(file_name);

        Self::check_target(&path, force, io::stdin().lock())?;

        match format {
            ExportFormat::Csv => export_csv(&rows, &path)?,
            ExportFormat::Json => export_json(&rows, &path)?,
            ExportFormat::Xlsx => export_xlsx(&rows, &path)?,
        }

        Ok(path)
    }

    /// A missing target, or `force`, is always fine. An existing file is only
    /// replaced when the answer read from `answers` is "y" or "yes".
    pub fn check_target<R: BufRead>(path: &Path, force: bool, mut answers: R) -> AppResult<()> {
        if force || !path.exists() {
            return Ok(());
        }

        warning(format!("{} is already there.", path.display()));
        print!("Replace it? [y/N]: ");
        io::stdout().flush().ok();

        let mut line = String::new();
        answers.read_line(&mut line)?;

        match line.trim().to_ascii_lowercase().as_str() {
            "y" | "yes" => Ok(()),
            _ => Err(AppError::Export(format!(
                "kept existing {}, nothing written",
                path.display()
            ))),
        }
    }
}
