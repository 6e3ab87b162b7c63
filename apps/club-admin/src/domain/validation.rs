//! Submission-time validation rules.
//!
//! Every entity owns one [`RuleSet`]: a required-field group with a single
//! combined message, followed by format checks evaluated in a fixed order.
//! The first failing check is the only one reported.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use super::form::FormState;

/// Accepted match results (best-of-five and best-of-three set scores).
pub const MATCH_RESULTS: [&str; 12] = [
    "3-0", "3-1", "3-2", "0-3", "1-3", "2-3", "2-0", "2-1", "1-2", "1-0", "0-2", "0-1",
];

/// Compiled patterns for the field formats. Each is a vetted literal.
pub struct FormatRegexRegistry;

impl FormatRegexRegistry {
    pub fn oib() -> &'static Regex {
        static OIB_REGEX: LazyLock<Regex> = LazyLock::new(|| {
            #[allow(clippy::unwrap_used)]
            Regex::new(r"^\d{11}$").unwrap()
        });
        &OIB_REGEX
    }

    pub fn digits() -> &'static Regex {
        static DIGITS_REGEX: LazyLock<Regex> = LazyLock::new(|| {
            #[allow(clippy::unwrap_used)]
            Regex::new(r"^\d+$").unwrap()
        });
        &DIGITS_REGEX
    }

    pub fn decimal() -> &'static Regex {
        static DECIMAL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
            #[allow(clippy::unwrap_used)]
            Regex::new(r"^\d+([.,])?\d*$").unwrap()
        });
        &DECIMAL_REGEX
    }

    pub fn email() -> &'static Regex {
        static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
            #[allow(clippy::unwrap_used)]
            Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap()
        });
        &EMAIL_REGEX
    }
}

/// Format contract applied to a single value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Exactly 11 digits.
    Oib,
    /// One or more digits.
    Digits,
    /// Digits with at most one `.` or `,` separator.
    Decimal,
    Email,
    /// One of [`MATCH_RESULTS`].
    MatchResult,
}

impl Format {
    pub fn matches(self, value: &str) -> bool {
        match self {
            Format::Oib => FormatRegexRegistry::oib().is_match(value),
            Format::Digits => FormatRegexRegistry::digits().is_match(value),
            Format::Decimal => FormatRegexRegistry::decimal().is_match(value),
            Format::Email => FormatRegexRegistry::email().is_match(value),
            Format::MatchResult => MATCH_RESULTS.contains(&value),
        }
    }
}

/// Format check bound to a form field.
#[derive(Debug, Clone, Copy)]
pub struct FormatRule {
    pub field: &'static str,
    pub format: Format,
    pub message: &'static str,
}

impl FormatRule {
    pub const fn new(field: &'static str, format: Format, message: &'static str) -> Self {
        Self {
            field,
            format,
            message,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{message}")]
    MissingRequired { message: &'static str },
    #[error("{message}")]
    InvalidFormat {
        field: &'static str,
        message: &'static str,
    },
}

impl ValidationError {
    pub fn message(&self) -> &'static str {
        match self {
            ValidationError::MissingRequired { message } => message,
            ValidationError::InvalidFormat { message, .. } => message,
        }
    }
}

/// Ordered checks for one entity form.
#[derive(Debug, Clone, Copy)]
pub struct RuleSet {
    pub required: &'static [&'static str],
    pub required_message: &'static str,
    pub formats: &'static [FormatRule],
}

impl RuleSet {
    pub fn is_required(&self, field: &str) -> bool {
        self.required.contains(&field)
    }

    /// Run the required check, then each format rule in order.
    ///
    /// Blank optional fields are not format-checked. Multi-value fields are
    /// checked entry by entry, skipping blank entries.
    pub fn check(&self, form: &FormState) -> Result<(), ValidationError> {
        if self.required.iter().any(|field| form.is_blank(field)) {
            return Err(ValidationError::MissingRequired {
                message: self.required_message,
            });
        }

        for rule in self.formats {
            let failed = form
                .values_of(rule.field)
                .into_iter()
                .filter(|v| !v.is_empty())
                .any(|v| !rule.format.matches(v));
            if failed {
                return Err(ValidationError::InvalidFormat {
                    field: rule.field,
                    message: rule.message,
                });
            }
        }

        Ok(())
    }
}
