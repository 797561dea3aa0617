use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::log;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - the SQLite database with its `kv` and `log` tables
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.db.as_deref(), cli.test)?;

    info("Initializing hourgrid…");

    // Opening the pool runs every pending migration.
    let pool = DbPool::new(&cfg.database)?;

    success(format!("Database initialized at {}", cfg.database));

    if let Err(e) = log::ttlog(
        &pool.conn,
        "init",
        "Database initialized",
        &format!("Database initialized at {}", cfg.database),
    ) {
        warning(format!("Failed to write internal log: {e}"));
    }

    success("hourgrid initialization completed!");
    Ok(())
}
