pub mod config;
pub mod drive;
pub mod export;
pub mod import;
pub mod init;
pub mod log;
pub mod profile;
pub mod show;
pub mod slot;

use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::tracker::Tracker;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::warning;
use crate::utils::date::{parse_date, today};

/// Open the configured database and build the tracker for this invocation:
/// `--date` (or today), `--view` (or the configured default), then `--shift`.
pub(crate) fn open_tracker(cli: &Cli, cfg: &Config) -> AppResult<Tracker<DbPool>> {
    let pool = DbPool::new(&cfg.database)?;

    let date = match &cli.date {
        Some(d) => parse_date(d)?,
        None => today(),
    };
    let view = cli.view.unwrap_or(cfg.default_view);

    let mut tracker = Tracker::load(pool, view, date)?;
    if let Some(weeks) = cli.shift {
        tracker.change_week(weeks)?;
    }

    Ok(tracker)
}

/// Append an audit line; a failure is reported but never aborts the command.
pub(crate) fn audit(tracker: &Tracker<DbPool>, operation: &str, target: &str, message: &str) {
    if let Err(e) = ttlog(&tracker.store().conn, operation, target, message) {
        warning(format!("Failed to write internal log: {e}"));
    }
}
