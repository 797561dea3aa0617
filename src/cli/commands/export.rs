use crate::cli::commands::{audit, open_tracker};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::export::ExportLogic;
use crate::ui::messages::warning;
use crate::utils::path::expand_tilde;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Export { format, dir, force } = &cli.command {
        let tracker = open_tracker(cli, cfg)?;
        let dir = expand_tilde(dir.as_deref().unwrap_or(&cfg.export_dir));

        match ExportLogic::export(&tracker, *format, &dir, *force) {
            Ok(path) => {
                audit(
                    &tracker,
                    "export",
                    format.as_str(),
                    &format!("written {}", path.display()),
                );
            }
            Err(AppError::EmptyExport) => warning(AppError::EmptyExport),
            Err(e) => return Err(e),
        }
    }
    Ok(())
}
