// Rust guideline compliant 2026-10-14

//! Error handling for Stacks application services.

use serde::Serialize;
use stacks_core::Error as CoreError;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for application-level operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Stable reason codes for rejected operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The book does not exist.
    BookNotFound,
    /// The user does not exist.
    UserNotFound,
    /// The book is already issued.
    BookNotAvailable,
    /// The book is not issued.
    BookNotIssued,
    /// The book is issued to someone else.
    LoanMismatch,
    /// The book is on loan and cannot be deleted.
    BookOnLoan,
    /// The user holds books and cannot be deleted.
    UserHasLoans,
    /// Status or loans may only change through issue and return.
    ImmutableField,
    /// Input validation failed.
    ValidationError,
    /// Configuration is invalid.
    ConfigError,
    /// IO failure while reading or writing repository data.
    IoError,
    /// JSON serialization or parsing failed.
    JsonError,
    /// The repository has not been initialized.
    RepoNotInitialized,
    /// The request included invalid inputs.
    InvalidInput,
}

/// Application-level errors with stable mapping to error codes.
#[derive(Debug, Error)]
pub enum AppError {
    /// Repository is missing or not initialized.
    #[error("Stacks repository not initialized at {path}. Run 'stx init' first.")]
    RepoNotInitialized {
        /// Path where `.stacks` was expected.
        path: PathBuf,
    },

    /// Invalid input was provided by the caller.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Error from core library operations.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// IO error not represented by core errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Returns a stable error code for the error.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::RepoNotInitialized { .. } => ErrorCode::RepoNotInitialized,
            AppError::InvalidInput(_) => ErrorCode::InvalidInput,
            AppError::Io(_) => ErrorCode::IoError,
            AppError::Core(core) => match core {
                CoreError::Io(_) => ErrorCode::IoError,
                CoreError::Json(_) => ErrorCode::JsonError,
                CoreError::InvalidRecord(_) => ErrorCode::ValidationError,
                CoreError::InvalidConfig(_) => ErrorCode::ConfigError,
                CoreError::BookNotFound(_) => ErrorCode::BookNotFound,
                CoreError::UserNotFound(_) => ErrorCode::UserNotFound,
                CoreError::BookNotAvailable(_) => ErrorCode::BookNotAvailable,
                CoreError::BookNotIssued(_) => ErrorCode::BookNotIssued,
                CoreError::LoanMismatch { .. } => ErrorCode::LoanMismatch,
                CoreError::BookOnLoan(_) => ErrorCode::BookOnLoan,
                CoreError::UserHasLoans(_, _) => ErrorCode::UserHasLoans,
                CoreError::StatusLocked(_) | CoreError::LoansLocked(_) => {
                    ErrorCode::ImmutableField
                }
            },
        }
    }

    /// Returns structured details for errors that benefit from extra context.
    #[must_use]
    pub fn details(&self) -> Option<serde_json::Value> {
        match self {
            AppError::RepoNotInitialized { path } => Some(serde_json::json!({
                "path": path,
            })),
            AppError::Core(core) => match core {
                CoreError::LoanMismatch {
                    book_id,
                    user_id,
                    holder,
                } => Some(serde_json::json!({
                    "book_id": book_id,
                    "user_id": user_id,
                    "holder": holder,
                })),
                CoreError::UserHasLoans(user_id, loans) => Some(serde_json::json!({
                    "user_id": user_id,
                    "loans": loans,
                })),
                CoreError::StatusLocked(book_id) => Some(serde_json::json!({
                    "book_id": book_id,
                    "field": "status",
                })),
                CoreError::LoansLocked(user_id) => Some(serde_json::json!({
                    "user_id": user_id,
                    "field": "issued_books",
                })),
                _ => None,
            },
            _ => None,
        }
    }
}
