use serde::{Deserialize, Serialize};

/// Minutes in a full slot; also the upper bound of a slot duration.
pub const SLOT_MINUTES: u8 = 60;

/// One hour-long unit of tracked time.
///
/// Missing fields in stored JSON fall back to the values of
/// [`Slot::default`], which is also what an untouched hour reads as.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Slot {
    pub checked: bool,
    pub task: String,
    #[serde(deserialize_with = "de_duration")]
    pub duration: u8,
}

impl Default for Slot {
    fn default() -> Self {
        Self {
            checked: false,
            task: String::new(),
            duration: SLOT_MINUTES,
        }
    }
}

impl Slot {
    /// Shape of a slot created by the first edit on an untouched hour.
    pub fn touched() -> Self {
        Self {
            checked: true,
            ..Self::default()
        }
    }

    pub fn with_checked(checked: bool) -> Self {
        Self {
            checked,
            ..Self::default()
        }
    }

    /// Minutes this slot adds to totals.
    pub fn tracked_minutes(&self) -> u32 {
        if self.checked {
            u32::from(self.duration)
        } else {
            0
        }
    }
}

/// Parse a raw duration the way an integer input field does: optional
/// whitespace and sign, then leading digits; anything after the digits is
/// ignored. A `0x`/`0X` prefix switches to hexadecimal digits. Unparseable
/// input becomes 0, the result is clamped to 0..=60.
pub fn clamp_duration(raw: &str) -> u8 {
    let s = raw.trim();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let (radix, rest) = match rest.get(..2) {
        Some("0x") | Some("0X") => (16, &rest[2..]),
        _ => (10, rest),
    };

    let end = rest
        .find(|c: char| !c.is_digit(radix))
        .unwrap_or(rest.len());
    let digits = &rest[..end];

    if digits.is_empty() || negative {
        return 0;
    }

    // Anything too long to fit is far above the cap anyway.
    match u64::from_str_radix(digits, radix) {
        Ok(v) => v.min(u64::from(SLOT_MINUTES)) as u8,
        Err(_) => SLOT_MINUTES,
    }
}

/// Stored durations may be numbers (any sign or size) or numeric strings.
fn de_duration<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                i.clamp(0, i64::from(SLOT_MINUTES)) as u8
            } else if let Some(u) = n.as_u64() {
                u.min(u64::from(SLOT_MINUTES)) as u8
            } else {
                clamp_duration(&n.to_string())
            }
        }
        serde_json::Value::String(s) => clamp_duration(&s),
        _ => 0,
    })
}
