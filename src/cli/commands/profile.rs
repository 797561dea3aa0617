use crate::cli::commands::{audit, open_tracker};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::ProfileField;
use crate::models::profile::ROLE_OTHERS;
use crate::ui::messages::success;

/// Handle the `profile` command: apply any given field, then print.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Profile {
        name,
        role,
        role_other,
    } = &cli.command
    {
        let mut tracker = open_tracker(cli, cfg)?;

        let updates = [
            (ProfileField::Name, name),
            (ProfileField::Role, role),
            (ProfileField::RoleOther, role_other),
        ];

        for (field, value) in updates {
            if let Some(v) = value {
                tracker.save_profile(field, v)?;
                audit(&tracker, "profile", field.as_str(), &format!("{} = {v:?}", field.as_str()));
                success(format!("Profile {} saved", field.as_str()));
            }
        }

        let p = tracker.profile();
        println!("Name : {}", p.name);
        println!("Role : {}", p.role);
        if p.role == ROLE_OTHERS {
            println!("Other: {}", p.role_other);
        }
    }

    Ok(())
}
