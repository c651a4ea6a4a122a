//! Field-level validation primitives.
//!
//! Every form-shaped input (record drafts, payments, enquiries) implements
//! [`Validate`]. A failed validation yields [`FieldErrors`]: camelCase field
//! name → messages, in field-name order. Rules push into a shared
//! `FieldErrors` so one pass reports every offending field.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("static email pattern"));

static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+]?[(]?[0-9]{3}[)]?[-\s.]?[0-9]{3}[-\s.]?[0-9]{4,6}$")
        .expect("static phone pattern")
});

/// Validation messages keyed by the offending field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `message` against `field`.
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    /// Single-field error set.
    #[must_use]
    pub fn single(field: &str, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.add(field, message);
        errors
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of fields with at least one message.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// Messages for `field`, empty if the field is valid.
    #[must_use]
    pub fn messages(&self, field: &str) -> &[String] {
        self.0.get(field).map_or(&[], Vec::as_slice)
    }

    /// Offending field names in order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// `Ok(())` when no rule failed, otherwise `Err(self)`.
    ///
    /// # Errors
    ///
    /// Returns `self` when at least one field has a message.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, messages) in &self.0 {
            for message in messages {
                if !first {
                    f.write_str("; ")?;
                }
                write!(f, "{field}: {message}")?;
                first = false;
            }
        }
        Ok(())
    }
}

/// A form-shaped input that can check itself before it is applied.
pub trait Validate {
    /// Check every field. Date-relative rules use `today`.
    ///
    /// # Errors
    ///
    /// Returns every failed rule keyed by field.
    fn validate(&self, today: NaiveDate) -> Result<(), FieldErrors>;
}

// ---------------------------------------------------------------------------
// Rules
// ---------------------------------------------------------------------------

/// Require at least `min` visible characters (surrounding whitespace ignored).
pub fn min_chars(errors: &mut FieldErrors, field: &str, value: &str, min: usize, message: &str) {
    if value.trim().chars().count() < min {
        errors.add(field, message);
    }
}

/// Require a non-blank value.
pub fn required(errors: &mut FieldErrors, field: &str, value: &str, message: &str) {
    min_chars(errors, field, value, 1, message);
}

/// Parse a calendar date from `YYYY-MM-DD` or an RFC 3339 timestamp.
#[must_use]
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok().or_else(|| {
        chrono::DateTime::parse_from_rfc3339(value)
            .ok()
            .map(|dt| dt.date_naive())
    })
}

/// Parse a mandatory date, recording `message` if it is not a valid date.
pub fn required_date(
    errors: &mut FieldErrors,
    field: &str,
    value: &str,
    message: &str,
) -> Option<NaiveDate> {
    let parsed = parse_date(value);
    if parsed.is_none() {
        errors.add(field, message);
    }
    parsed
}

/// Parse an optional date. Absent or blank values are accepted as `None`.
pub fn optional_date(
    errors: &mut FieldErrors,
    field: &str,
    value: Option<&str>,
    message: &str,
) -> Option<NaiveDate> {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        None => None,
        Some(v) => required_date(errors, field, v, message),
    }
}

#[must_use]
pub fn is_email(value: &str) -> bool {
    EMAIL_RE.is_match(value.trim())
}

/// Phone numbers like `555-123-4567`, `(555) 123 4567`, `+5551234567`.
#[must_use]
pub fn is_phone(value: &str) -> bool {
    PHONE_RE.is_match(value.trim())
}

/// ISBN-10 or ISBN-13: digits with optional hyphens, 10 or 13 digits in total.
#[must_use]
pub fn is_isbn(value: &str) -> bool {
    if value.is_empty() || !value.chars().all(|c| c.is_ascii_digit() || c == '-') {
        return false;
    }
    let digits = value.chars().filter(char::is_ascii_digit).count();
    digits == 10 || digits == 13
}

#[must_use]
pub fn is_url(value: &str) -> bool {
    url::Url::parse(value.trim()).is_ok()
}

/// Number of whitespace-separated words.
#[must_use]
pub fn word_count(value: &str) -> usize {
    value.split_whitespace().count()
}

/// Treat blank optional strings as absent.
#[must_use]
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
