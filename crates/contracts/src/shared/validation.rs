//! Validation rules for form fields

use once_cell::sync::Lazy;
use regex::Regex;

/// Work email pattern: something before the @, something after it, and a dot
/// in the domain part, with no whitespace anywhere.
static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// Check an email address against the portal pattern.
/// Leading/trailing whitespace is ignored.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value.trim())
}

/// Validation rules for a field
/// Copy trait for efficient passing
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FieldRules {
    pub required: bool,
    pub min_length: Option<usize>,
    pub custom_error: Option<&'static str>,
}

impl FieldRules {
    /// Create empty validation rules (no constraints)
    pub const fn none() -> Self {
        Self {
            required: false,
            min_length: None,
            custom_error: None,
        }
    }

    /// Create validation rules for a required field
    pub const fn required() -> Self {
        Self {
            required: true,
            min_length: None,
            custom_error: None,
        }
    }

    /// Create validation rules for a required field with a minimum length
    pub const fn min_length(min: usize) -> Self {
        Self {
            required: true,
            min_length: Some(min),
            custom_error: None,
        }
    }

    /// Attach a fixed error message reported for any rule violation
    pub const fn with_error(mut self, message: &'static str) -> Self {
        self.custom_error = Some(message);
        self
    }

    /// Validate a string value against the rules. The value is trimmed before
    /// the checks. Returns the human-readable error message on failure.
    pub fn validate_str(&self, value: &str, field_label: &str) -> Result<(), String> {
        let value = value.trim();

        if self.required && value.is_empty() {
            return Err(self.error_for(format!("{} is required", field_label)));
        }

        if let Some(min) = self.min_length {
            if value.chars().count() < min {
                return Err(self.error_for(format!(
                    "{} must be at least {} characters",
                    field_label, min
                )));
            }
        }

        Ok(())
    }

    fn error_for(&self, fallback: String) -> String {
        match self.custom_error {
            Some(message) => message.to_string(),
            None => fallback,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_pattern() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("first.last@corp.example.io"));
        assert!(is_valid_email("  a@b.co  "));

        assert!(!is_valid_email("bad-email"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a @b.com"));
        assert!(!is_valid_email("a@b .com"));
        assert!(!is_valid_email("@b.com"));
        assert!(!is_valid_email("a@.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_required_rule() {
        let rules = FieldRules::required();
        assert!(rules.validate_str("anything", "Role").is_ok());
        assert_eq!(
            rules.validate_str("   ", "Role"),
            Err("Role is required".to_string())
        );
    }

    #[test]
    fn test_min_length_trims_before_counting() {
        let rules = FieldRules::min_length(2);
        assert!(rules.validate_str("Jo", "Name").is_ok());
        assert!(rules.validate_str("  Jo  ", "Name").is_ok());
        assert!(rules.validate_str(" J ", "Name").is_err());
    }

    #[test]
    fn test_custom_error_overrides_generated_message() {
        let rules = FieldRules::min_length(2).with_error("Company name is required.");
        assert_eq!(
            rules.validate_str("A", "Company"),
            Err("Company name is required.".to_string())
        );
    }
}
