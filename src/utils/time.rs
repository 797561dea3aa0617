//! Hour-slot labels and minute formatting.

use crate::models::Hour;

/// "HH:00 - HH+1:00", zero padded. The last slot ends at "24:00".
pub fn hour_label(hour: Hour) -> String {
    let h = hour.get();
    format!("{:02}:00 - {:02}:00", h, u16::from(h) + 1)
}

/// "Xh Ym" as shown in the summary line.
pub fn format_hours_minutes(hours: u32, minutes: u32) -> String {
    format!("{hours}h {minutes}m")
}
