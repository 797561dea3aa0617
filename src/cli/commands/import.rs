use crate::cli::commands::{audit, open_tracker};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::import::ImportLogic;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use crate::utils::path::expand_tilde;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Import { data, profile } = &cli.command {
        let mut tracker = open_tracker(cli, cfg)?;

        let data_path = expand_tilde(data);
        let profile_path = profile.as_deref().map(expand_tilde);

        let report = ImportLogic::apply(&mut tracker, &data_path, profile_path.as_deref())?;

        audit(
            &tracker,
            "import",
            data,
            &format!(
                "{} slots, {} skipped, profile: {}",
                report.slots, report.skipped, report.profile
            ),
        );
        success(format!("Imported {} slots", report.slots));
        if report.skipped > 0 {
            warning(format!(
                "Skipped {} entries with an invalid date, hour or slot value",
                report.skipped
            ));
        }
        if report.profile {
            success("Imported profile");
        }
    }
    Ok(())
}
