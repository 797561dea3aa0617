use crate::core::drive::drive_instructions;
use crate::errors::AppResult;
use crate::ui::messages::info;

pub fn handle() -> AppResult<()> {
    info("Cloud drive upload is not available.");
    println!("{}", drive_instructions(72));
    Ok(())
}
