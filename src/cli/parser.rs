use crate::export::ExportFormat;
use crate::models::View;
use clap::{Parser, Subcommand};

/// Command-line interface definition for hourgrid
#[derive(Parser)]
#[command(
    name = "hourgrid",
    version = env!("CARGO_PKG_VERSION"),
    about = "A personal time-tracking grid: mark hourly slots across a day or week, annotate them and export",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Day to work on (day view) or first day of the week (week view)
    #[arg(global = true, long = "date", value_name = "YYYY-MM-DD")]
    pub date: Option<String>,

    /// Grid variant; defaults to `default_view` from the configuration
    #[arg(global = true, long = "view", value_enum)]
    pub view: Option<View>,

    /// Move the date by this many weeks before running the command
    #[arg(
        global = true,
        long = "shift",
        value_name = "WEEKS",
        allow_negative_numbers = true
    )]
    pub shift: Option<i64>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Show or update the user profile
    Profile {
        #[arg(long = "name", help = "User name written to exports")]
        name: Option<String>,

        #[arg(long = "role", help = "Role; use 'Others' together with --role-other")]
        role: Option<String>,

        #[arg(long = "role-other", help = "Free-text role used when role is 'Others'")]
        role_other: Option<String>,
    },

    /// Mark a slot as tracked (or untracked with --off)
    Check {
        /// Hour of the slot (0-23)
        hour: String,

        #[arg(long = "off", help = "Uncheck the slot instead")]
        off: bool,

        #[arg(long = "day", default_value_t = 0, help = "Column within the week (0-6)")]
        day: u32,
    },

    /// Set the task description of a slot
    Task {
        /// Hour of the slot (0-23)
        hour: String,

        /// Task description; an empty string clears it
        #[arg(allow_hyphen_values = true)]
        text: String,

        #[arg(long = "day", default_value_t = 0, help = "Column within the week (0-6)")]
        day: u32,
    },

    /// Set the duration of a slot in minutes (clamped to 0-60)
    Duration {
        /// Hour of the slot (0-23)
        hour: String,

        /// Minutes; non-numeric input counts as 0
        #[arg(allow_hyphen_values = true)]
        minutes: String,

        #[arg(long = "day", default_value_t = 0, help = "Column within the week (0-6)")]
        day: u32,
    },

    /// Create a slot with default values if it does not exist yet
    Touch {
        /// Hour of the slot (0-23)
        hour: String,

        #[arg(long = "day", default_value_t = 0, help = "Column within the week (0-6)")]
        day: u32,
    },

    /// Show the day slot list or the week grid
    Show,

    /// Print the total tracked time
    Summary,

    /// Export the tracked slots of the current day or week
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "DIR", help = "Output directory (default: export_dir from config)")]
        dir: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Import JSON saved by the browser version
    Import {
        #[arg(long = "data", value_name = "FILE", help = "Slot data JSON")]
        data: String,

        #[arg(long = "profile", value_name = "FILE", help = "Profile JSON")]
        profile: Option<String>,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Cloud drive upload (not available; prints setup instructions)
    Drive,
}
