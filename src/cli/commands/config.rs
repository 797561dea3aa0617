use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::config::ConfigLogic;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = cmd
    {
        let path = Config::config_file();

        if *print_config {
            println!("📄 Current configuration ({}):\n", path.display());
            println!("{}", cfg.to_yaml()?);
        }

        if *edit_config {
            if !path.exists() {
                warning(format!(
                    "{} does not exist yet; run `hourgrid init` first",
                    path.display()
                ));
                return Ok(());
            }

            let used = ConfigLogic::edit(&path, editor)?;
            success(format!(
                "Configuration file edited successfully using '{used}'"
            ));
        }
    }

    Ok(())
}
