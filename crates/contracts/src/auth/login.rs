//! Sign-in form validation.

use serde::{Deserialize, Serialize};

use super::{Banner, GENERIC_FAILURE};
use crate::shared::validation::is_valid_email;

/// Minimum sign-in password length (looser than the registration rules;
/// existing accounts may predate them)
pub const MIN_PASSWORD_LEN: usize = 8;

const EMAIL_ERROR: &str = "Enter a valid work email address.";
const PASSWORD_ERROR: &str = "Password must be at least 8 characters.";
const SUCCESS_TEXT: &str = "Signed in successfully (demo).";
const RESET_LINK_TEXT: &str = "Password reset link sent (demo).";

/// Raw sign-in field values as read from the form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Per-field error text; an empty string means the field passed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginErrors {
    pub email: String,
    pub password: String,
}

impl LoginErrors {
    pub fn is_empty(&self) -> bool {
        self.email.is_empty() && self.password.is_empty()
    }
}

/// Result of one submit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginOutcome {
    pub errors: LoginErrors,
    pub banner: Banner,
}

/// Validate a sign-in attempt. Stateless: both checks always run against the
/// snapshot, so every failing field is reported in one pass.
pub fn validate(form: &LoginForm) -> LoginOutcome {
    let mut errors = LoginErrors::default();

    if !is_valid_email(&form.email) {
        errors.email = EMAIL_ERROR.to_string();
    }
    if form.password.trim().chars().count() < MIN_PASSWORD_LEN {
        errors.password = PASSWORD_ERROR.to_string();
    }

    let banner = if errors.is_empty() {
        Banner::success(SUCCESS_TEXT)
    } else {
        Banner::error(GENERIC_FAILURE)
    };

    LoginOutcome { errors, banner }
}

/// Banner for the forgot-password control. Always the same demo message,
/// regardless of form state.
pub fn reset_link_banner() -> Banner {
    Banner::success(RESET_LINK_TEXT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_credentials_pass() {
        let outcome = validate(&LoginForm {
            email: "a@b.com".to_string(),
            password: "12345678".to_string(),
        });
        assert!(outcome.errors.is_empty());
        assert_eq!(outcome.banner, Banner::success("Signed in successfully (demo)."));
    }

    #[test]
    fn test_both_fields_reported_in_one_pass() {
        let outcome = validate(&LoginForm {
            email: "bad-email".to_string(),
            password: "short".to_string(),
        });
        assert_eq!(outcome.errors.email, "Enter a valid work email address.");
        assert_eq!(
            outcome.errors.password,
            "Password must be at least 8 characters."
        );
        assert!(outcome.banner.is_error());
        assert_eq!(
            outcome.banner.text,
            "Please fix the highlighted fields and try again."
        );
    }

    #[test]
    fn test_password_length_checked_after_trimming() {
        let outcome = validate(&LoginForm {
            email: "a@b.com".to_string(),
            password: "  123456  ".to_string(),
        });
        assert!(!outcome.errors.password.is_empty());
        assert!(outcome.errors.email.is_empty());
    }

    #[test]
    fn test_reset_link_banner_is_fixed() {
        let banner = reset_link_banner();
        assert!(!banner.is_error());
        assert_eq!(banner.text, "Password reset link sent (demo).");
    }
}
