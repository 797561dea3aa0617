use crate::cli::commands::open_tracker;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::View;
use crate::ui::grid::{range_title, render_day, render_week};
use crate::ui::messages::header;

/// Handle `show` and `summary`.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let tracker = open_tracker(cli, cfg)?;
    let dates = tracker.dates()?;

    if matches!(cli.command, Commands::Show) {
        header(range_title(&dates));
        let body = match tracker.view() {
            View::Day => render_day(tracker.slots(), tracker.current_date(), &cfg.separator_char),
            View::Week => render_week(tracker.slots(), &dates, &cfg.separator_char),
        };
        print!("{body}");
    }

    let summary = tracker.summary()?;
    println!("Total: {summary}");
    Ok(())
}
