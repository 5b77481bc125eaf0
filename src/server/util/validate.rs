//! Presence checks applied to request fields before any database access.
//!
//! A field counts as missing when it is absent, `null`, a blank string, or zero. Each helper
//! returns `None` for a missing value so callers can attach their own rejection message with
//! `ok_or_else`.

/// Returns the text when it contains anything other than whitespace.
///
/// The value is returned unmodified; surrounding whitespace is only ignored for the
/// emptiness check.
pub fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.trim().is_empty())
}

/// Returns the integer when it is present and non-zero.
pub fn non_zero(value: Option<i64>) -> Option<i64> {
    value.filter(|number| *number != 0)
}

/// Returns the amount when it is present and non-zero.
pub fn non_zero_amount(value: Option<f64>) -> Option<f64> {
    value.filter(|amount| *amount != 0.0)
}
