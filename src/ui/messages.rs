//! User-facing status lines.

use ansi_term::{Colour, Style};
use std::fmt;

const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

fn icon(colour: Colour, icon: &str) -> String {
    colour.bold().paint(icon).to_string()
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{} {}", icon(Colour::Blue, ICON_INFO), msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{} {}", icon(Colour::Green, ICON_OK), msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{} {}", icon(Colour::Yellow, ICON_WARN), msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{} {}", icon(Colour::Red, ICON_ERR), msg);
}

/// Section header, e.g. above the slot list.
pub fn header<T: fmt::Display>(msg: T) {
    let style = Style::new().bold().fg(Colour::Blue);
    println!("{}", style.paint(format!("====================== {msg}")));
}
