//! Create-account form validation.

use serde::{Deserialize, Serialize};

use super::{password, Banner, GENERIC_FAILURE};
use crate::shared::validation::{is_valid_email, FieldRules};

const NAME_RULES: FieldRules = FieldRules::min_length(2).with_error("Please enter your full name.");
const COMPANY_RULES: FieldRules =
    FieldRules::min_length(2).with_error("Company name is required.");
const ROLE_RULES: FieldRules = FieldRules::required().with_error("Select your role to continue.");

const EMAIL_ERROR: &str = "Enter a valid work email address.";
const CONFIRM_ERROR: &str = "Passwords do not match.";
const CONSENT_ERROR: &str = "You must agree to the terms to proceed.";
const SUCCESS_TEXT: &str = "Account created successfully (demo).";

/// Raw registration field values as read from the form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationForm {
    pub name: String,
    pub email: String,
    pub company: String,
    pub role: String,
    pub password: String,
    pub confirm: String,
    pub consent: bool,
}

/// Per-field error text; an empty string means the field passed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationErrors {
    pub name: String,
    pub email: String,
    pub company: String,
    pub role: String,
    pub password: String,
    pub confirm: String,
    pub consent: String,
}

impl RegistrationErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
            && self.email.is_empty()
            && self.company.is_empty()
            && self.role.is_empty()
            && self.password.is_empty()
            && self.confirm.is_empty()
            && self.consent.is_empty()
    }
}

/// Result of one submit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationOutcome {
    pub errors: RegistrationErrors,
    pub banner: Banner,
}

/// Validate a registration attempt. All seven checks run against the
/// snapshot; none short-circuits another.
pub fn validate(form: &RegistrationForm) -> RegistrationOutcome {
    let mut errors = RegistrationErrors::default();

    if let Err(message) = NAME_RULES.validate_str(&form.name, "Name") {
        errors.name = message;
    }
    if !is_valid_email(&form.email) {
        errors.email = EMAIL_ERROR.to_string();
    }
    if let Err(message) = COMPANY_RULES.validate_str(&form.company, "Company") {
        errors.company = message;
    }
    if let Err(message) = ROLE_RULES.validate_str(&form.role, "Role") {
        errors.role = message;
    }
    if !password::meets_all_rules(&form.password) {
        errors.password = password::REQUIREMENTS_MESSAGE.to_string();
    }
    if form.password != form.confirm {
        errors.confirm = CONFIRM_ERROR.to_string();
    }
    if !form.consent {
        errors.consent = CONSENT_ERROR.to_string();
    }

    let banner = if errors.is_empty() {
        Banner::success(SUCCESS_TEXT)
    } else {
        Banner::error(GENERIC_FAILURE)
    };

    RegistrationOutcome { errors, banner }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> RegistrationForm {
        RegistrationForm {
            name: "Jo".to_string(),
            email: "a@b.co".to_string(),
            company: "Ac".to_string(),
            role: "admin".to_string(),
            password: "Abcdef123!".to_string(),
            confirm: "Abcdef123!".to_string(),
            consent: true,
        }
    }

    #[test]
    fn test_minimal_valid_form_passes() {
        let outcome = validate(&valid_form());
        assert!(outcome.errors.is_empty());
        assert_eq!(
            outcome.banner,
            Banner::success("Account created successfully (demo).")
        );
    }

    #[test]
    fn test_mismatched_confirm_is_the_only_error() {
        let mut form = valid_form();
        form.confirm = "Abcdef124!".to_string();

        let outcome = validate(&form);
        assert_eq!(outcome.errors.confirm, "Passwords do not match.");
        assert!(outcome.errors.name.is_empty());
        assert!(outcome.errors.email.is_empty());
        assert!(outcome.errors.company.is_empty());
        assert!(outcome.errors.role.is_empty());
        assert!(outcome.errors.password.is_empty());
        assert!(outcome.errors.consent.is_empty());
        assert!(outcome.banner.is_error());
    }

    #[test]
    fn test_empty_form_reports_all_seven_fields() {
        let outcome = validate(&RegistrationForm::default());
        assert_eq!(outcome.errors.name, "Please enter your full name.");
        assert_eq!(outcome.errors.email, "Enter a valid work email address.");
        assert_eq!(outcome.errors.company, "Company name is required.");
        assert_eq!(outcome.errors.role, "Select your role to continue.");
        assert_eq!(
            outcome.errors.password,
            "Password must be 10+ chars with uppercase, lowercase, number, and symbol."
        );
        // empty password equals empty confirm, so no mismatch
        assert!(outcome.errors.confirm.is_empty());
        assert_eq!(
            outcome.errors.consent,
            "You must agree to the terms to proceed."
        );
        assert!(outcome.banner.is_error());
    }

    #[test]
    fn test_weak_password_still_runs_remaining_checks() {
        let mut form = valid_form();
        form.password = "short".to_string();
        form.confirm = "short".to_string();
        form.consent = false;

        let outcome = validate(&form);
        assert!(!outcome.errors.password.is_empty());
        assert!(outcome.errors.confirm.is_empty());
        assert!(!outcome.errors.consent.is_empty());
    }

    #[test]
    fn test_name_and_company_are_trimmed() {
        let mut form = valid_form();
        form.name = "  J  ".to_string();
        form.company = "   ".to_string();

        let outcome = validate(&form);
        assert_eq!(outcome.errors.name, "Please enter your full name.");
        assert_eq!(outcome.errors.company, "Company name is required.");
    }
}
