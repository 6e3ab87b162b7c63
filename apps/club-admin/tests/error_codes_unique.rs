use std::collections::HashSet;

use club_admin::errors::ErrorCode;

#[test]
fn error_codes_are_unique() {
    let all = [
        // Keep in sync with ErrorCode enum variants
        ErrorCode::InvalidId,
        ErrorCode::InvalidFormField,
        ErrorCode::InvalidAction,
        ErrorCode::BadRequest,
        ErrorCode::ChangeModeRequired,
        ErrorCode::DeleteModeRequired,
        ErrorCode::NotFound,
        ErrorCode::TemplateError,
        ErrorCode::Internal,
        ErrorCode::ConfigError,
    ];

    let mut seen = HashSet::new();
    for code in all {
        let s = code.as_str();
        assert!(seen.insert(s), "Duplicate error code string: {s}");
    }
}
