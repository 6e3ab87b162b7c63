//! Error codes for the club admin.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings
//! that appear in problem+json responses.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Request Validation
    /// Path segment is not a valid record id
    InvalidId,
    /// Submitted form names a field the entity does not have
    InvalidFormField,
    /// Unknown form action
    InvalidAction,
    /// General bad request error
    BadRequest,

    // Detail page state
    /// Edit submitted without the change mode selected
    ChangeModeRequired,
    /// Delete confirmed without the delete mode selected
    DeleteModeRequired,

    // Resource Not Found
    /// No admin page at this path
    NotFound,

    // System Errors
    /// Template failed to render
    TemplateError,
    /// Internal server error
    Internal,
    /// Configuration error
    ConfigError,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidId => "INVALID_ID",
            Self::InvalidFormField => "INVALID_FORM_FIELD",
            Self::InvalidAction => "INVALID_ACTION",
            Self::BadRequest => "BAD_REQUEST",

            Self::ChangeModeRequired => "CHANGE_MODE_REQUIRED",
            Self::DeleteModeRequired => "DELETE_MODE_REQUIRED",

            Self::NotFound => "NOT_FOUND",

            Self::TemplateError => "TEMPLATE_ERROR",
            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
