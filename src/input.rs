//! Field validation for calculator inputs.
//!
//! Every calculator runs each of its raw inputs through this module before
//! any arithmetic executes. A field is valid only when it parses to a
//! finite number strictly greater than zero; the two failure messages
//! distinguish a missing/unparseable field from a non-positive one.

/// Outcome of validating a single labeled field.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationResult {
    /// The field parsed to a finite, positive number.
    Valid(f64),
    /// The field is missing, unparseable, or non-positive.
    Invalid(String),
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid(_))
    }

    /// Convert into a plain `Result`, keeping the failure message.
    pub fn into_result(self) -> Result<f64, String> {
        match self {
            ValidationResult::Valid(value) => Ok(value),
            ValidationResult::Invalid(message) => Err(message),
        }
    }
}

/// Validate an already-parsed value for a named field.
///
/// NaN and infinities report as "not a valid {field}", the same message a
/// failed parse produces; only finite values reach the sign check.
pub fn validate_value(value: f64, field: &str) -> ValidationResult {
    if !value.is_finite() {
        return ValidationResult::Invalid(format!("Please enter a valid {}", field));
    }
    if value <= 0.0 {
        return ValidationResult::Invalid(format!("{} must be greater than 0", field));
    }
    ValidationResult::Valid(value)
}

/// Parse and validate a raw string for a named field.
///
/// Leading and trailing whitespace is ignored; an empty field counts as
/// missing.
pub fn parse_field(raw: &str, field: &str) -> ValidationResult {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return ValidationResult::Invalid(format!("Please enter a valid {}", field));
    }
    match trimmed.parse::<f64>() {
        Ok(value) => validate_value(value, field),
        Err(_) => ValidationResult::Invalid(format!("Please enter a valid {}", field)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_field_is_invalid() {
        let result = parse_field("", "Weight");
        assert_eq!(
            result,
            ValidationResult::Invalid("Please enter a valid Weight".to_string())
        );
    }

    #[test]
    fn test_unparseable_field_is_invalid() {
        let result = parse_field("abc", "Volume");
        assert_eq!(
            result,
            ValidationResult::Invalid("Please enter a valid Volume".to_string())
        );
    }

    #[test]
    fn test_zero_is_invalid() {
        let result = parse_field("0", "Equivalent Weight");
        assert_eq!(
            result,
            ValidationResult::Invalid("Equivalent Weight must be greater than 0".to_string())
        );
    }

    #[test]
    fn test_negative_is_invalid() {
        let result = parse_field("-5", "Volume");
        assert_eq!(
            result,
            ValidationResult::Invalid("Volume must be greater than 0".to_string())
        );
    }

    #[test]
    fn test_positive_decimal_is_valid() {
        assert_eq!(parse_field("3.5", "Weight"), ValidationResult::Valid(3.5));
    }

    #[test]
    fn test_whitespace_is_trimmed() {
        assert_eq!(
            parse_field("  2.25 ", "Weight"),
            ValidationResult::Valid(2.25)
        );
    }

    #[test]
    fn test_nan_value_is_invalid() {
        let result = validate_value(f64::NAN, "Weight");
        assert_eq!(
            result,
            ValidationResult::Invalid("Please enter a valid Weight".to_string())
        );
    }

    #[test]
    fn test_infinity_is_invalid() {
        // "inf" parses as a float but is not a usable bench quantity
        let result = parse_field("inf", "Volume");
        assert_eq!(
            result,
            ValidationResult::Invalid("Please enter a valid Volume".to_string())
        );
    }

    #[test]
    fn test_into_result() {
        assert_eq!(parse_field("1.5", "Weight").into_result(), Ok(1.5));
        assert!(parse_field("x", "Weight").into_result().is_err());
    }
}
