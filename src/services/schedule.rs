//! Weekly availability grid and its codec.
//!
//! Teachers persist their availability as a JSON document keyed by weekday
//! then time slot, boolean-valued (`true` = free). Everything that touches
//! `teachers.free` goes through `decode`/`encode` here; nothing else in the
//! crate parses that column.

use std::collections::BTreeMap;

use crate::error::AppError;

/// weekday key -> time-slot key -> free?
pub type WeekGrid = BTreeMap<String, BTreeMap<String, bool>>;

/// Canonical weekday keys in display order, with their labels.
pub const WEEKDAYS: [(&str, &str); 7] = [
    ("mon", "Monday"),
    ("tue", "Tuesday"),
    ("wed", "Wednesday"),
    ("thu", "Thursday"),
    ("fri", "Friday"),
    ("sat", "Saturday"),
    ("sun", "Sunday"),
];

pub fn weekday_label(day: &str) -> Option<&'static str> {
    WEEKDAYS
        .iter()
        .find(|(key, _)| *key == day)
        .map(|(_, label)| *label)
}

pub fn decode(raw: &str) -> Result<WeekGrid, AppError> {
    Ok(serde_json::from_str(raw)?)
}

pub fn encode(grid: &WeekGrid) -> String {
    serde_json::to_string(grid).expect("a map of booleans always serializes")
}

/// Absent day or time keys read as not bookable rather than failing.
pub fn is_free(grid: &WeekGrid, day: &str, time: &str) -> bool {
    grid.get(day)
        .and_then(|slots| slots.get(time))
        .copied()
        .unwrap_or(false)
}

/// Flip a slot to taken. The day/time reaching this call is expected to be
/// validated against the teacher's schedule already, so a missing key means
/// the client fabricated the slot.
pub fn mark_taken(grid: &mut WeekGrid, day: &str, time: &str) -> Result<(), AppError> {
    let slot = grid
        .get_mut(day)
        .and_then(|slots| slots.get_mut(time))
        .ok_or_else(|| AppError::UnknownSlot {
            day: day.to_string(),
            time: time.to_string(),
        })?;
    *slot = false;
    Ok(())
}

/// Sort key for time-slot labels like "8:00" / "10:00", so display order is
/// numeric instead of lexicographic. Unparsable labels sort last.
pub fn slot_sort_key(time: &str) -> (u8, u8) {
    let mut parts = time.splitn(2, ':');
    let hour = parts.next().and_then(|h| h.parse().ok());
    let minute = parts.next().and_then(|m| m.parse().ok());
    match (hour, minute) {
        (Some(h), Some(m)) => (h, m),
        _ => (u8::MAX, u8::MAX),
    }
}
