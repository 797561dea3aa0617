use crate::db::log::load_log;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::formatting::{pad_right, truncate};
use ansi_term::Colour;
use unicode_width::UnicodeWidthStr;

/// Color of a log line, by operation.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "check" | "touch" => Colour::Green,
        "uncheck" => Colour::Red,
        "task" | "duration" => Colour::Yellow,
        "profile" => Colour::Cyan,
        "export" | "import" => Colour::Blue,
        "migration_applied" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &DbPool) -> AppResult<()> {
        let entries = load_log(&pool.conn)?;

        if entries.is_empty() {
            println!("No log entries.");
            return Ok(());
        }

        let rows: Vec<(i64, String, &str, String, &str)> = entries
            .iter()
            .map(|e| {
                let date = chrono::DateTime::parse_from_rfc3339(&e.date)
                    .map(|dt| dt.format("%FT%T%:z").to_string())
                    .unwrap_or_else(|_| e.date.clone());

                let op_target = if e.target.is_empty() {
                    e.operation.clone()
                } else {
                    format!("{} ({})", e.operation, e.target)
                };

                (e.id, date, e.operation.as_str(), op_target, e.message.as_str())
            })
            .collect();

        let op_w = rows
            .iter()
            .map(|(_, _, _, op_target, _)| UnicodeWidthStr::width(op_target.as_str()))
            .max()
            .unwrap_or(10)
            .min(40);

        for (id, date, op, op_target, message) in rows {
            let cell = pad_right(&truncate(&op_target, op_w), op_w);
            println!(
                "{:>4}  {}  {}  {}",
                id,
                date,
                color_for_operation(op).paint(cell),
                message
            );
        }

        Ok(())
    }
}
