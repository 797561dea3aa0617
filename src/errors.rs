//! Unified application error type.
//! Every layer (models, core, db, export, cli) returns AppError so the
//! binary can report failures in one place.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Storage
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Stored data is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Input errors
    // ---------------------------
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid hour: {0} (expected 0-23)")]
    InvalidHour(String),

    #[error("Invalid day offset {offset}: {view} view accepts 0..={max}")]
    InvalidDayOffset {
        offset: u32,
        view: &'static str,
        max: u32,
    },

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("No data to export!")]
    EmptyExport,

    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration file: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
