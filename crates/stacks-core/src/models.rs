// Rust guideline compliant 2026-10-12

//! Core data models for Stacks.
//!
//! Field names serialize in camelCase so that snapshots stay compatible with
//! the older per-collection `books`/`users`/`transactions` keys.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Circulation status of a book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum BookStatus {
    /// On the shelf and can be issued.
    #[default]
    Available,
    /// Issued to a user.
    Issued,
}

/// Kind of a circulation event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// A book left the library.
    Issue,
    /// A book came back.
    Return,
}

/// A book in the catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    /// Unique identifier.
    pub id: String,
    /// Book title.
    pub title: String,
    /// Author or authors, free text.
    pub author: String,
    /// Free-text category.
    #[serde(default)]
    pub genre: String,
    /// Current circulation status.
    #[serde(default)]
    pub status: BookStatus,
    /// ID of the user holding the book, if issued.
    #[serde(default)]
    pub issued_to: Option<String>,
}

/// Candidate fields for a new book, as produced by an input form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookDraft {
    /// Book title.
    pub title: String,
    /// Author or authors.
    pub author: String,
    /// Free-text category.
    pub genre: String,
}

/// A loan currently held by a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssuedBook {
    /// ID of the borrowed book.
    pub book_id: String,
    /// When the book was issued.
    pub issue_date: DateTime<Utc>,
    /// When the book is due back.
    pub due_date: DateTime<Utc>,
}

/// A library member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Optional phone number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Optional postal address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Books currently on loan, in issue order.
    #[serde(default)]
    pub issued_books: Vec<IssuedBook>,
}

/// Candidate fields for a new user, as produced by an input form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserDraft {
    /// Display name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Optional phone number.
    pub phone: Option<String>,
    /// Optional postal address.
    pub address: Option<String>,
}

/// An immutable record of an issue or return.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Unique, creation-ordered identifier.
    pub id: String,
    /// Book involved in the event.
    pub book_id: String,
    /// User involved in the event.
    pub user_id: String,
    /// Issue or return.
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    /// When the event happened.
    pub date: DateTime<Utc>,
    /// Due date, present only on issue events.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
}

/// The full persisted state: every collection in one snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Library {
    /// All books.
    #[serde(default)]
    pub books: Vec<Book>,
    /// All users.
    #[serde(default)]
    pub users: Vec<User>,
    /// Append-only circulation history.
    #[serde(default)]
    pub transactions: Vec<Transaction>,
}

impl Book {
    /// Builds an available book from a draft.
    ///
    /// # Arguments
    ///
    /// * `id` - Identifier to assign
    /// * `draft` - Form fields
    pub fn from_draft(id: String, draft: BookDraft) -> Self {
        Self {
            id,
            title: draft.title.trim().to_string(),
            author: draft.author.trim().to_string(),
            genre: draft.genre.trim().to_string(),
            status: BookStatus::Available,
            issued_to: None,
        }
    }

    /// Returns true if the book is on the shelf.
    pub fn is_available(&self) -> bool {
        self.status == BookStatus::Available
    }

    /// Validates the book data.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - ID, title or author is blank
    /// - Status and holder disagree
    pub fn validate(&self) -> crate::Result<()> {
        if self.id.trim().is_empty() {
            return Err(crate::Error::InvalidRecord(
                "Book ID cannot be empty".to_string(),
            ));
        }

        if self.title.trim().is_empty() {
            return Err(crate::Error::InvalidRecord(
                "Title cannot be empty".to_string(),
            ));
        }

        if self.author.trim().is_empty() {
            return Err(crate::Error::InvalidRecord(
                "Author cannot be empty".to_string(),
            ));
        }

        match (self.status, &self.issued_to) {
            (BookStatus::Issued, None) => Err(crate::Error::InvalidRecord(format!(
                "Book {} is issued but has no holder",
                self.id
            ))),
            (BookStatus::Available, Some(holder)) => Err(crate::Error::InvalidRecord(format!(
                "Book {} is available but held by {}",
                self.id, holder
            ))),
            _ => Ok(()),
        }
    }
}

impl User {
    /// Builds a user with no loans from a draft.
    ///
    /// # Arguments
    ///
    /// * `id` - Identifier to assign
    /// * `draft` - Form fields
    pub fn from_draft(id: String, draft: UserDraft) -> Self {
        Self {
            id,
            name: draft.name.trim().to_string(),
            email: draft.email.trim().to_string(),
            phone: normalize_optional(draft.phone),
            address: normalize_optional(draft.address),
            issued_books: Vec::new(),
        }
    }

    /// Returns true if the user currently holds the book.
    pub fn holds(&self, book_id: &str) -> bool {
        self.issued_books.iter().any(|loan| loan.book_id == book_id)
    }

    /// Validates the user data.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - ID or name is blank
    /// - Email is blank or has no `@`
    pub fn validate(&self) -> crate::Result<()> {
        if self.id.trim().is_empty() {
            return Err(crate::Error::InvalidRecord(
                "User ID cannot be empty".to_string(),
            ));
        }

        if self.name.trim().is_empty() {
            return Err(crate::Error::InvalidRecord(
                "Name cannot be empty".to_string(),
            ));
        }

        let email = self.email.trim();
        if email.is_empty() || !email.contains('@') {
            return Err(crate::Error::InvalidRecord(format!(
                "Invalid email address: '{}'",
                self.email
            )));
        }

        Ok(())
    }

    /// Normalizes blank optional contact fields to `None`.
    pub(crate) fn normalize(&mut self) {
        self.name = self.name.trim().to_string();
        self.email = self.email.trim().to_string();
        self.phone = normalize_optional(self.phone.take());
        self.address = normalize_optional(self.address.take());
    }
}

impl Library {
    /// Looks up a book by ID.
    pub fn book(&self, id: &str) -> Option<&Book> {
        self.books.iter().find(|book| book.id == id)
    }

    /// Looks up a user by ID.
    pub fn user(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|user| user.id == id)
    }

    /// Returns true if no collection holds any record.
    pub fn is_empty(&self) -> bool {
        self.books.is_empty() && self.users.is_empty() && self.transactions.is_empty()
    }
}

fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
