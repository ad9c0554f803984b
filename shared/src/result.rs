use serde::Serialize;

use crate::error_code::{ErrorCode, QUOTA_EXCEEDED, SENDER_ID_MISMATCH, UNREGISTERED};

/// The result of a single push send attempt to one destination token.
///
/// Built once by the sender when the provider has answered and never
/// changed afterwards. `C` is whatever correlation value the caller handed
/// to the send call; it comes back untouched.
///
/// An absent field and an empty string are treated the same by every
/// predicate. Accessors return the field exactly as it was stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SendResult<C> {
    context: C,
    canonical_registration_id: Option<String>,
    message_id: Option<String>,
    error: Option<String>,
}

impl<C> SendResult<C> {
    /// Creates a result with every field supplied. No validation is done.
    pub fn new(
        context: C,
        canonical_registration_id: Option<String>,
        message_id: Option<String>,
        error: Option<String>,
    ) -> Self {
        Self {
            context,
            canonical_registration_id,
            message_id,
            error,
        }
    }

    /// Creates a result that carries no canonical registration id.
    pub fn without_canonical(
        context: C,
        message_id: Option<String>,
        error: Option<String>,
    ) -> Self {
        Self::new(context, None, message_id, error)
    }

    /// The context passed into the send call.
    pub fn context(&self) -> &C {
        &self.context
    }

    pub fn into_context(self) -> C {
        self.context
    }

    /// The "canonical" registration id the provider returned for this destination.
    pub fn canonical_registration_id(&self) -> Option<&str> {
        self.canonical_registration_id.as_deref()
    }

    pub fn has_canonical_registration_id(&self) -> bool {
        is_present(self.canonical_registration_id())
    }

    /// The provider-assigned message id, if the send succeeded.
    pub fn message_id(&self) -> Option<&str> {
        self.message_id.as_deref()
    }

    /// The raw error string, if present.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// The decoded error, or `None` when the error is absent or empty.
    pub fn error_code(&self) -> Option<ErrorCode> {
        self.error
            .as_deref()
            .filter(|code| !code.is_empty())
            .map(ErrorCode::from_code)
    }

    /// Success requires a message id and no error. A result with neither is a failure.
    pub fn is_success(&self) -> bool {
        is_success(self.message_id(), self.error())
    }

    /// The destination registration id is no longer registered.
    pub fn is_unregistered(&self) -> bool {
        self.error_is(UNREGISTERED)
    }

    /// Messages to this device are being throttled.
    pub fn is_throttled(&self) -> bool {
        self.error_is(QUOTA_EXCEEDED)
    }

    /// The destination registration id is invalid for this sender.
    pub fn is_invalid_registration_id(&self) -> bool {
        self.error_is(SENDER_ID_MISMATCH)
    }

    fn error_is(&self, code: &str) -> bool {
        self.error.as_deref() == Some(code)
    }
}

pub(crate) fn is_present(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}

pub(crate) fn is_success(message_id: Option<&str>, error: Option<&str>) -> bool {
    is_present(message_id) && !is_present(error)
}
