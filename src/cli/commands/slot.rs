use crate::cli::commands::{audit, open_tracker};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::Hour;
use crate::ui::messages::success;
use crate::utils::date::iso;
use crate::utils::hour_label;

/// Handle `check`, `task`, `duration` and `touch`.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let mut tracker = open_tracker(cli, cfg)?;

    match &cli.command {
        Commands::Check { hour, off, day } => {
            let hour = Hour::parse(hour)?;
            let date = tracker.column_date(*day)?;
            let checked = !*off;

            tracker.toggle_slot(date, hour, checked)?;

            let target = slot_target(date, hour);
            let op = if checked { "check" } else { "uncheck" };
            audit(&tracker, op, &target, &format!("checked = {checked}"));
            success(format!(
                "{} {} {}",
                iso(date),
                hour_label(hour),
                if checked { "checked" } else { "unchecked" }
            ));
        }
        Commands::Task { hour, text, day } => {
            let hour = Hour::parse(hour)?;
            let date = tracker.column_date(*day)?;

            tracker.update_task(date, hour, text)?;

            let slot = tracker.slot(date, hour);
            audit(
                &tracker,
                "task",
                &slot_target(date, hour),
                &format!("task = {:?}, checked = {}", slot.task, slot.checked),
            );
            success(format!("{} {} task saved", iso(date), hour_label(hour)));
        }
        Commands::Duration { hour, minutes, day } => {
            let hour = Hour::parse(hour)?;
            let date = tracker.column_date(*day)?;

            let stored = tracker.update_duration(date, hour, minutes)?;

            audit(
                &tracker,
                "duration",
                &slot_target(date, hour),
                &format!("input {minutes:?} stored as {stored} min"),
            );
            success(format!(
                "{} {} duration set to {stored} min",
                iso(date),
                hour_label(hour)
            ));
        }
        Commands::Touch { hour, day } => {
            let hour = Hour::parse(hour)?;
            let date = tracker.column_date(*day)?;

            let slot = tracker.ensure_slot(date, hour)?;

            audit(&tracker, "touch", &slot_target(date, hour), "slot ensured");
            success(format!(
                "{} {} checked = {}, duration = {} min",
                iso(date),
                hour_label(hour),
                slot.checked,
                slot.duration
            ));
        }
        _ => {}
    }

    let summary = tracker.summary()?;
    println!("Total: {summary}");
    Ok(())
}

fn slot_target(date: chrono::NaiveDate, hour: Hour) -> String {
    format!("{} {:02}", iso(date), hour.get())
}
