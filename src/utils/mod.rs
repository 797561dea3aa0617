pub mod colors;
pub mod date;
pub mod formatting;
pub mod path;
pub mod time;

pub use time::{format_hours_minutes, hour_label};
