//! Input validation utilities.
//!
//! Request fields arrive as plain strings; these helpers turn them into validated values or a
//! `PortalError::Validation` carrying the message the client will see.

use crate::{PortalError, PortalResult};
use chrono::{NaiveDate, NaiveTime};
use healthassist_types::NonEmptyText;

/// Require a non-blank value, failing with `message` otherwise.
pub fn require_text(value: &str, message: &str) -> PortalResult<NonEmptyText> {
    NonEmptyText::new(value).map_err(|_| PortalError::Validation(message.to_string()))
}

/// Require every value to be non-blank. All-or-nothing: the first blank value fails the batch.
pub fn require_all<const N: usize>(
    values: [&str; N],
    message: &str,
) -> PortalResult<[NonEmptyText; N]> {
    let mut out = Vec::with_capacity(N);
    for value in values {
        out.push(require_text(value, message)?);
    }
    out.try_into()
        .map_err(|_| PortalError::Validation(message.to_string()))
}

/// Validate a calendar date in `YYYY-MM-DD` form.
pub fn validate_date(date: &str) -> PortalResult<()> {
    NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
        .map(|_| ())
        .map_err(|_| PortalError::Validation(format!("Invalid date (expected YYYY-MM-DD): {date}")))
}

/// Validate a time of day in 24-hour `HH:MM` form.
pub fn validate_time(time: &str) -> PortalResult<()> {
    NaiveTime::parse_from_str(time.trim(), "%H:%M")
        .map(|_| ())
        .map_err(|_| PortalError::Validation(format!("Invalid time (expected HH:MM): {time}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_all_fails_on_any_blank() {
        let err = require_all(["a", " ", "c"], "All fields are required").unwrap_err();
        assert!(matches!(err, PortalError::Validation(m) if m == "All fields are required"));
    }

    #[test]
    fn require_all_trims_values() {
        let [a, b] = require_all([" a ", "b"], "required").unwrap();
        assert_eq!(a.as_str(), "a");
        assert_eq!(b.as_str(), "b");
    }

    #[test]
    fn dates_and_times_are_checked() {
        assert!(validate_date("2023-05-20").is_ok());
        assert!(validate_date("20/05/2023").is_err());
        assert!(validate_time("14:15").is_ok());
        assert!(validate_time("25:00").is_err());
    }
}
