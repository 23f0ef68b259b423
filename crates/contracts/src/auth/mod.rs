pub mod login;
pub mod password;
pub mod register;

use serde::{Deserialize, Serialize};

/// Summary text shown when any field check fails
pub const GENERIC_FAILURE: &str = "Please fix the highlighted fields and try again.";

/// Banner status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BannerKind {
    Success,
    Error,
}

/// Aggregate status region shown under a form after a submit attempt.
/// A new banner replaces the previous one wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Banner {
    pub text: String,
    pub kind: BannerKind,
}

impl Banner {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: BannerKind::Success,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: BannerKind::Error,
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == BannerKind::Error
    }
}
