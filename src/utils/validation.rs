use crate::utils::error::{FormatError, Result};
use chrono::NaiveDate;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(FormatError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Strict `YYYY-MM-DD` check for values the user types directly, such as
/// the `--now` override. Display helpers stay lenient on their own input.
pub fn validate_iso_date(field_name: &str, value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|e| {
        FormatError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Expected a YYYY-MM-DD date: {}", e),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("display.present_label", "Hoy").is_ok());
        assert!(validate_non_empty_string("display.present_label", "   ").is_err());
    }

    #[test]
    fn test_validate_iso_date() {
        let date = validate_iso_date("now", "2024-02-29").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
        assert!(validate_iso_date("now", "2023-02-29").is_err());
        assert!(validate_iso_date("now", "yesterday").is_err());
    }
}
