use crate::errors::{AppError, AppResult};
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    /// Editor to use: the requested one, then $EDITOR / $VISUAL, then a
    /// platform default.
    pub fn resolve_editor(requested: &Option<String>) -> String {
        requested
            .clone()
            .or_else(|| std::env::var("EDITOR").ok())
            .or_else(|| std::env::var("VISUAL").ok())
            .unwrap_or_else(|| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            })
    }

    pub fn edit(path: &Path, editor: &Option<String>) -> AppResult<String> {
        let ed = Self::resolve_editor(editor);

        let status = Command::new(&ed)
            .arg(path)
            .status()
            .map_err(|e| AppError::Config(format!("cannot start editor '{ed}': {e}")))?;

        if !status.success() {
            return Err(AppError::Config(format!("editor '{ed}' exited with {status}")));
        }

        Ok(ed)
    }
}
