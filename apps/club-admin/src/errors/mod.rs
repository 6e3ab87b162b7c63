//! Error handling for the club admin.

pub mod error_code;

pub use error_code::ErrorCode;
