//! Password strength rules for the registration form.
//!
//! Five independent predicates over the raw password string. The score is the
//! number of satisfied predicates; every predicate is evaluated on every call
//! so the meter can show exactly which requirements are still missing.

use serde::{Deserialize, Serialize};

/// One strength requirement with its user-facing label
pub struct StrengthRule {
    pub label: &'static str,
    check: fn(&str) -> bool,
}

impl StrengthRule {
    pub fn is_satisfied_by(&self, password: &str) -> bool {
        (self.check)(password)
    }
}

/// Minimum password length counted in characters
pub const MIN_LENGTH: usize = 10;

/// The ordered rule set. Order only affects checklist display.
pub const RULES: [StrengthRule; 5] = [
    StrengthRule {
        label: "At least 10 characters",
        check: |p| p.chars().count() >= MIN_LENGTH,
    },
    StrengthRule {
        label: "One uppercase letter",
        check: |p| p.chars().any(|c| c.is_ascii_uppercase()),
    },
    StrengthRule {
        label: "One lowercase letter",
        check: |p| p.chars().any(|c| c.is_ascii_lowercase()),
    },
    StrengthRule {
        label: "One number",
        check: |p| p.chars().any(|c| c.is_ascii_digit()),
    },
    StrengthRule {
        label: "One symbol",
        check: |p| p.chars().any(|c| !c.is_ascii_alphanumeric()),
    },
];

/// Combined requirements message for the registration password error
pub const REQUIREMENTS_MESSAGE: &str =
    "Password must be 10+ chars with uppercase, lowercase, number, and symbol.";

/// Count of satisfied rules, 0..=5
pub fn strength_score(password: &str) -> u8 {
    RULES
        .iter()
        .filter(|rule| rule.is_satisfied_by(password))
        .count() as u8
}

/// True when every strength rule passes
pub fn meets_all_rules(password: &str) -> bool {
    strength_score(password) as usize == RULES.len()
}

/// Labels of the rules the password does not satisfy yet, in rule order
pub fn unsatisfied_labels(password: &str) -> Vec<&'static str> {
    RULES
        .iter()
        .filter(|rule| !rule.is_satisfied_by(password))
        .map(|rule| rule.label)
        .collect()
}

/// Meter fill width for a score, as a whole percentage
pub fn strength_percent(score: u8) -> u8 {
    ((score as f32 / RULES.len() as f32) * 100.0).round() as u8
}

/// Presentation tier for a strength score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StrengthLevel {
    Weak,
    AlmostThere,
    Strong,
}

impl StrengthLevel {
    pub fn from_score(score: u8) -> Self {
        match score {
            5.. => StrengthLevel::Strong,
            4 => StrengthLevel::AlmostThere,
            _ => StrengthLevel::Weak,
        }
    }

    /// Get a human-readable string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            StrengthLevel::Weak => "Weak password",
            StrengthLevel::AlmostThere => "Almost there",
            StrengthLevel::Strong => "Strong password",
        }
    }

    /// Get the color associated with this strength level (theme custom property)
    pub fn css_color(&self) -> &'static str {
        match self {
            StrengthLevel::Weak => "var(--danger)",
            StrengthLevel::AlmostThere => "var(--warning)",
            StrengthLevel::Strong => "var(--success)",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_counts_each_rule_independently() {
        assert_eq!(strength_score(""), 0);
        // length + lowercase
        assert_eq!(strength_score("abcdefghij"), 2);
        // digits + symbol only
        assert_eq!(strength_score("123!"), 2);
        // uppercase only
        assert_eq!(strength_score("ABC"), 1);
        // everything except length
        assert_eq!(strength_score("Ab1!"), 4);
        // all five
        assert_eq!(strength_score("Abcdef123!"), 5);
    }

    #[test]
    fn test_score_is_monotone_under_adding_rule_classes() {
        let steps = ["aaaa", "Aaaa", "Aaa1", "Aaa1!", "Aaaaaaaa1!"];
        let scores: Vec<u8> = steps.iter().map(|p| strength_score(p)).collect();
        assert!(scores.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(*scores.last().unwrap(), 5);
    }

    #[test]
    fn test_symbol_rule_matches_non_alphanumeric_only() {
        assert!(!RULES[4].is_satisfied_by("Abc123"));
        assert!(RULES[4].is_satisfied_by("Abc 123"));
        assert!(RULES[4].is_satisfied_by("Abc#123"));
    }

    #[test]
    fn test_level_tier_boundaries() {
        assert_eq!(StrengthLevel::from_score(0), StrengthLevel::Weak);
        assert_eq!(StrengthLevel::from_score(3), StrengthLevel::Weak);
        assert_eq!(StrengthLevel::from_score(4), StrengthLevel::AlmostThere);
        assert_eq!(StrengthLevel::from_score(5), StrengthLevel::Strong);

        assert_eq!(StrengthLevel::from_score(3).as_str(), "Weak password");
        assert_eq!(StrengthLevel::from_score(4).as_str(), "Almost there");
        assert_eq!(StrengthLevel::from_score(5).as_str(), "Strong password");
    }

    #[test]
    fn test_percent_mapping() {
        assert_eq!(strength_percent(0), 0);
        assert_eq!(strength_percent(1), 20);
        assert_eq!(strength_percent(2), 40);
        assert_eq!(strength_percent(3), 60);
        assert_eq!(strength_percent(4), 80);
        assert_eq!(strength_percent(5), 100);
    }

    #[test]
    fn test_unsatisfied_labels_in_rule_order() {
        assert_eq!(
            unsatisfied_labels("abc"),
            vec!["At least 10 characters", "One uppercase letter", "One number", "One symbol"]
        );
        assert!(unsatisfied_labels("Abcdef123!").is_empty());
    }
}
