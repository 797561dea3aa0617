use crate::db::log::ttlog;
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check if the `kv` table exists.
fn kv_table_exists(conn: &Connection) -> Result<bool> {
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name='kv'")?;
    let exists: Option<String> = stmt.query_row([], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Check if the `kv` table has an `updated_at` column.
fn kv_has_updated_at(conn: &Connection) -> Result<bool> {
    let mut stmt = conn.prepare("PRAGMA table_info('kv')")?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == "updated_at" {
            return Ok(true);
        }
    }
    Ok(false)
}

fn create_kv_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS kv (
            key        TEXT PRIMARY KEY,
            value      TEXT NOT NULL,
            updated_at TEXT NOT NULL DEFAULT ''
        );
        "#,
    )?;
    Ok(())
}

/// Early databases stored only key and value.
fn migrate_add_updated_at(conn: &Connection) -> Result<()> {
    conn.execute_batch("ALTER TABLE kv ADD COLUMN updated_at TEXT NOT NULL DEFAULT '';")?;
    Ok(())
}

/// Bring the schema up to date. Safe to call on every open.
pub fn run_pending_migrations(conn: &Connection) -> crate::errors::AppResult<()> {
    ensure_log_table(conn)?;

    if !kv_table_exists(conn)? {
        create_kv_table(conn)?;
        ttlog(conn, "migration_applied", "kv", "Created kv table")?;
    } else if !kv_has_updated_at(conn)? {
        migrate_add_updated_at(conn)?;
        ttlog(conn, "migration_applied", "kv", "Added kv.updated_at column")?;
    }

    Ok(())
}
