use chrono::{Local, NaiveDate};

use crate::errors::{Result, ValidationError};

/// Date format used by payment and balance history entries.
pub const HISTORY_DATE_FORMAT: &str = "%Y-%m-%d";

/// The user's current calendar date.
///
/// Payments recorded without an explicit date are stamped with this value.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Parses a `YYYY-MM-DD` date entered by the user.
pub fn parse_history_date(field: &str, raw: &str) -> Result<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingField(field.to_string()).into());
    }
    Ok(NaiveDate::parse_from_str(trimmed, HISTORY_DATE_FORMAT)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;

    #[test]
    fn test_parse_history_date() {
        assert_eq!(
            parse_history_date("date", " 2024-03-01 ").unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
        );
    }

    #[test]
    fn test_parse_history_date_rejects_blank_and_garbage() {
        assert!(matches!(
            parse_history_date("date", "  "),
            Err(Error::Validation(ValidationError::MissingField(f))) if f == "date"
        ));
        assert!(matches!(
            parse_history_date("date", "03/01/2024"),
            Err(Error::Validation(ValidationError::DateParse(_)))
        ));
    }
}
