use std::fmt;

use serde::{Serialize, Serializer};

/// Provider code for a registration token that is no longer valid.
pub const UNREGISTERED: &str = "UNREGISTERED";
/// Provider code for a sender or device that is being throttled.
pub const QUOTA_EXCEEDED: &str = "QUOTA_EXCEEDED";
/// Provider code for a token that does not belong to this sender.
pub const SENDER_ID_MISMATCH: &str = "SENDER_ID_MISMATCH";

/// Decoded form of the provider's raw error string.
///
/// Matching is exact and case-sensitive. Anything unrecognised is kept
/// verbatim in `Other` so the raw code is never lost.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    Unregistered,
    QuotaExceeded,
    SenderIdMismatch,
    Other(String),
}

impl ErrorCode {
    pub fn from_code(code: &str) -> Self {
        match code {
            UNREGISTERED => ErrorCode::Unregistered,
            QUOTA_EXCEEDED => ErrorCode::QuotaExceeded,
            SENDER_ID_MISMATCH => ErrorCode::SenderIdMismatch,
            other => ErrorCode::Other(other.to_string()),
        }
    }

    /// The raw provider code this value was decoded from.
    pub fn as_str(&self) -> &str {
        match self {
            ErrorCode::Unregistered => UNREGISTERED,
            ErrorCode::QuotaExceeded => QUOTA_EXCEEDED,
            ErrorCode::SenderIdMismatch => SENDER_ID_MISMATCH,
            ErrorCode::Other(code) => code,
        }
    }

    /// Whether the send may succeed later after backing off.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ErrorCode::QuotaExceeded)
    }

    /// Whether the destination token should no longer be used.
    pub fn invalidates_token(&self) -> bool {
        matches!(self, ErrorCode::Unregistered | ErrorCode::SenderIdMismatch)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ErrorCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
