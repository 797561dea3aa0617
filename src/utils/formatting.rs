//! Formatting utilities used for CLI outputs.

use unicode_width::UnicodeWidthStr;

/// Pad to a display width, counting wide characters correctly.
pub fn pad_right(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    if w >= width {
        s.to_string()
    } else {
        format!("{s}{}", " ".repeat(width - w))
    }
}

/// Cut `s` to at most `width` display columns, ending with '…' when cut.
pub fn truncate(s: &str, width: usize) -> String {
    if UnicodeWidthStr::width(s) <= width {
        return s.to_string();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let cw = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if used + cw + 1 > width {
            break;
        }
        out.push(c);
        used += cw;
    }
    out.push('…');
    out
}

/// Horizontal rule built from the configured separator character.
pub fn rule(separator: &str, width: usize) -> String {
    let sep = if separator.is_empty() { "-" } else { separator };
    sep.repeat(width)
}
