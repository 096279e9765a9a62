// Rust guideline compliant 2026-10-14

//! Response envelopes for machine-readable command output.

use crate::error::{AppError, ErrorCode};
use serde::Serialize;

/// Standard success envelope for JSON output.
#[derive(Debug, Serialize)]
pub struct SuccessEnvelope<T> {
    /// Status indicator.
    pub status: &'static str,
    /// Result payload.
    pub result: T,
}

impl<T> SuccessEnvelope<T> {
    /// Wraps a payload.
    #[must_use]
    pub fn new(result: T) -> Self {
        Self { status: "ok", result }
    }
}

/// Standard error envelope for JSON output.
#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    /// Status indicator.
    pub status: &'static str,
    /// Stable reason code.
    pub code: ErrorCode,
    /// Human-readable error message.
    pub message: String,
    /// Optional structured details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorEnvelope {
    /// Creates a new error envelope from an application error.
    #[must_use]
    pub fn from_error(error: &AppError) -> Self {
        Self {
            status: "error",
            code: error.code(),
            message: error.to_string(),
            details: error.details(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stacks_core::Error as CoreError;

    #[test]
    fn test_error_envelope_shape() {
        let err = AppError::from(CoreError::LoanMismatch {
            book_id: "1".to_string(),
            user_id: "2".to_string(),
            holder: "3".to_string(),
        });
        let json = serde_json::to_value(ErrorEnvelope::from_error(&err)).unwrap();
        assert_eq!(json["status"], "error");
        assert_eq!(json["code"], "loan_mismatch");
        assert_eq!(json["details"]["holder"], "3");
    }

    #[test]
    fn test_details_omitted_when_absent() {
        let err = AppError::from(CoreError::BookNotFound("1".to_string()));
        let json = serde_json::to_value(ErrorEnvelope::from_error(&err)).unwrap();
        assert!(json.get("details").is_none());
    }
}
