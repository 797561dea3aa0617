pub mod config;
pub mod drive;
pub mod import;
pub mod log;
pub mod summary;
pub mod tracker;

pub use summary::{Summary, to_hours_minutes, total_minutes};
pub use tracker::Tracker;
