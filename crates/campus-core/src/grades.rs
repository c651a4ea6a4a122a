//! Class levels and the promotion progression.
//!
//! ```text
//! NC → 1 → 2 → … → 12 → Graduated
//! ```
//!
//! `Graduated` is terminal and is never offered as a form option.

/// Class labels a record may be created with, in progression order.
pub const CLASS_OPTIONS: [&str; 13] = [
    "NC", "1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "11", "12",
];

/// Terminal label reached by promoting a class 12 student.
pub const GRADUATED: &str = "Graduated";

#[must_use]
pub fn is_class_option(label: &str) -> bool {
    CLASS_OPTIONS.contains(&label)
}

/// Label following `current` in the progression, or `None` when `current` is
/// terminal or not a known class.
#[must_use]
pub fn next_class(current: &str) -> Option<&'static str> {
    let idx = CLASS_OPTIONS.iter().position(|c| *c == current)?;
    Some(CLASS_OPTIONS.get(idx + 1).copied().unwrap_or(GRADUATED))
}
