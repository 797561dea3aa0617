use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which variant of the grid is active.
///
/// The day view tracks one date with explicit checkboxes, the week view
/// shows seven consecutive dates and derives `checked` from the task text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum View {
    #[default]
    Day,
    Week,
}

impl View {
    pub fn as_str(&self) -> &'static str {
        match self {
            View::Day => "day",
            View::Week => "week",
        }
    }

    /// Number of consecutive dates shown by this view.
    pub fn span_days(&self) -> u32 {
        match self {
            View::Day => 1,
            View::Week => 7,
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
