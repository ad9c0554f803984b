use crate::error_code::{ErrorCode, QUOTA_EXCEEDED, SENDER_ID_MISMATCH, UNREGISTERED};

#[test]
fn test_known_codes_decode() {
    assert_eq!(ErrorCode::from_code(UNREGISTERED), ErrorCode::Unregistered);
    assert_eq!(ErrorCode::from_code(QUOTA_EXCEEDED), ErrorCode::QuotaExceeded);
    assert_eq!(
        ErrorCode::from_code(SENDER_ID_MISMATCH),
        ErrorCode::SenderIdMismatch
    );
}

#[test]
fn test_other_code_keeps_raw_text() {
    let code = ErrorCode::from_code("INTERNAL");

    assert_eq!(code, ErrorCode::Other("INTERNAL".to_string()));
    assert_eq!(code.as_str(), "INTERNAL");
    assert_eq!(code.to_string(), "INTERNAL");
}

#[test]
fn test_display_matches_provider_code() {
    assert_eq!(ErrorCode::Unregistered.to_string(), "UNREGISTERED");
    assert_eq!(ErrorCode::QuotaExceeded.to_string(), "QUOTA_EXCEEDED");
    assert_eq!(ErrorCode::SenderIdMismatch.to_string(), "SENDER_ID_MISMATCH");
}

#[test]
fn test_recommended_actions() {
    assert!(ErrorCode::QuotaExceeded.is_retryable());
    assert!(!ErrorCode::QuotaExceeded.invalidates_token());

    assert!(ErrorCode::Unregistered.invalidates_token());
    assert!(ErrorCode::SenderIdMismatch.invalidates_token());
    assert!(!ErrorCode::Unregistered.is_retryable());

    let other = ErrorCode::Other("INTERNAL".to_string());
    assert!(!other.is_retryable());
    assert!(!other.invalidates_token());
}

#[test]
fn test_serializes_as_raw_code() {
    let json = serde_json::to_string(&ErrorCode::Other("BAD_PAYLOAD".to_string())).unwrap();
    assert_eq!(json, "\"BAD_PAYLOAD\"");
}
