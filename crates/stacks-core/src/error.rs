// Rust guideline compliant 2026-10-12

//! Error types for the Stacks core library.

use thiserror::Error;

/// Result type alias for Stacks operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Stacks operations.
///
/// Storage-medium failures are masked by the key-value layer and never reach
/// domain callers; the variants below cover record validation and the
/// preconditions of the lending operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A book or user record failed validation.
    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    /// Invalid configuration value.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// Book not found.
    #[error("Book not found: {0}")]
    BookNotFound(String),

    /// User not found.
    #[error("User not found: {0}")]
    UserNotFound(String),

    /// The book cannot be issued because it is already out.
    #[error("Book {0} is not available")]
    BookNotAvailable(String),

    /// The book cannot be returned because it is not issued.
    #[error("Book {0} is not issued")]
    BookNotIssued(String),

    /// The book is issued, but not to the user named in the request.
    #[error("Book {book_id} is issued to {holder}, not {user_id}")]
    LoanMismatch {
        /// The book being returned.
        book_id: String,
        /// The user named in the request.
        user_id: String,
        /// The user currently holding the book.
        holder: String,
    },

    /// An issued book cannot be deleted.
    #[error("Book {0} is on loan and cannot be deleted")]
    BookOnLoan(String),

    /// A user with outstanding loans cannot be deleted.
    #[error("User {0} has {1} outstanding loan(s) and cannot be deleted")]
    UserHasLoans(String, usize),

    /// Status and holder of a book only change through issue and return.
    #[error("Status of book {0} can only change by issuing or returning it")]
    StatusLocked(String),

    /// A user's loans only change through issue and return.
    #[error("Issued books of user {0} can only change by issuing or returning")]
    LoansLocked(String),
}
