//! Write-payload validation.
//!
//! Every rule reports the offending field by name so rejections surface as a
//! 400 that callers can act on. Validation runs before any repository call;
//! invalid payloads never reach storage.

use jiff::civil::Date;
use thiserror::Error;

use crate::gender::Gender;

pub(crate) const MAX_NAME_CHARS: usize = 30;
pub(crate) const MAX_ORIGIN_CHARS: usize = 30;
pub(crate) const MAX_ADDRESS_CHARS: usize = 300;
pub(crate) const MAX_DESCRIPTION_CHARS: usize = 300;

/// A validation failure on a single named field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub(crate) struct FieldError {
    pub(crate) field: &'static str,
    pub(crate) message: String,
}

impl FieldError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// A required text field: non-empty and within the character cap.
pub(crate) fn required_text(
    field: &'static str,
    value: &str,
    max_chars: usize,
) -> Result<(), FieldError> {
    if value.is_empty() {
        return Err(FieldError::new(field, "may not be blank"));
    }

    capped_text(field, value, max_chars)
}

/// An optional text field: empty is fine, otherwise the cap applies.
pub(crate) fn capped_text(
    field: &'static str,
    value: &str,
    max_chars: usize,
) -> Result<(), FieldError> {
    let chars = value.chars().count();

    if chars > max_chars {
        return Err(FieldError::new(
            field,
            format!("must be at most {max_chars} characters, got {chars}"),
        ));
    }

    Ok(())
}

pub(crate) fn parse_gender(value: &str) -> Result<Gender, FieldError> {
    value
        .parse()
        .map_err(|error| FieldError::new("gender", format!("{error}")))
}

/// Parse an ISO calendar date and require it not to be after `today`.
pub(crate) fn parse_birth_date(value: &str, today: Date) -> Result<Date, FieldError> {
    let date: Date = value
        .parse()
        .map_err(|_source| FieldError::new("date_of_birth", "must be an ISO date (YYYY-MM-DD)"))?;

    if date > today {
        return Err(FieldError::new(
            "date_of_birth",
            format!("must not be in the future (today is {today})"),
        ));
    }

    Ok(date)
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    #[test]
    fn required_text_rejects_blank() {
        let result = required_text("name", "", MAX_NAME_CHARS);

        assert_eq!(
            result.map_err(|e| e.field),
            Err("name"),
            "blank name should be rejected"
        );
    }

    #[test]
    fn required_text_enforces_cap() {
        let long = "x".repeat(31);

        assert!(required_text("name", &long, MAX_NAME_CHARS).is_err());
        assert!(required_text("name", "Persian", MAX_NAME_CHARS).is_ok());
    }

    #[test]
    fn capped_text_counts_characters_not_bytes() {
        let thirty_multibyte = "ä".repeat(30);

        assert!(capped_text("name", &thirty_multibyte, MAX_NAME_CHARS).is_ok());
    }

    #[test]
    fn capped_text_allows_empty() {
        assert!(capped_text("description", "", MAX_DESCRIPTION_CHARS).is_ok());
    }

    #[test]
    fn parse_gender_names_the_field() {
        let error = parse_gender("cat").unwrap_err();

        assert_eq!(error.field, "gender");
    }

    #[test]
    fn birth_date_today_is_accepted() {
        let today = date(2020, 6, 15);

        assert_eq!(parse_birth_date("2020-06-15", today), Ok(today));
    }

    #[test]
    fn birth_date_one_day_ahead_is_rejected() {
        let today = date(2020, 6, 15);
        let error = parse_birth_date("2020-06-16", today).unwrap_err();

        assert_eq!(error.field, "date_of_birth");
        assert!(
            error.message.contains("future"),
            "message should say the date is in the future: {}",
            error.message
        );
    }

    #[test]
    fn birth_date_rejects_garbage() {
        let error = parse_birth_date("not-a-date", date(2020, 6, 15)).unwrap_err();

        assert_eq!(error.field, "date_of_birth");
    }
}
