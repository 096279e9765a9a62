// Rust guideline compliant 2026-10-13

//! Cross-collection consistency checks.

use crate::{BookStatus, Library, TransactionKind};
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use std::fmt;

/// A single violation of the library invariants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IntegrityIssue {
    /// Two books share an ID.
    DuplicateBookId { id: String },
    /// Two users share an ID.
    DuplicateUserId { id: String },
    /// Two transactions share an ID.
    DuplicateTransactionId { id: String },
    /// An issued book names no holder.
    IssuedWithoutHolder { book_id: String },
    /// An available book still names a holder.
    AvailableWithHolder { book_id: String, user_id: String },
    /// A book is held by a user that does not exist.
    MissingHolder { book_id: String, user_id: String },
    /// A book's holder does not list it among their loans.
    HolderMissingLoan { book_id: String, user_id: String },
    /// A user lists a book that does not exist.
    LoanOfMissingBook { user_id: String, book_id: String },
    /// A user lists a book that is issued to nobody or to someone else.
    LoanNotHeld { user_id: String, book_id: String },
    /// A book appears in more than one user's loans.
    LoanListedTwice { book_id: String, user_ids: Vec<String> },
    /// An issue transaction lacks a due date, or a return carries one.
    DueDateMismatch { transaction_id: String },
}

impl fmt::Display for IntegrityIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateBookId { id } => write!(f, "duplicate book id {}", id),
            Self::DuplicateUserId { id } => write!(f, "duplicate user id {}", id),
            Self::DuplicateTransactionId { id } => write!(f, "duplicate transaction id {}", id),
            Self::IssuedWithoutHolder { book_id } => {
                write!(f, "book {} is issued but has no holder", book_id)
            }
            Self::AvailableWithHolder { book_id, user_id } => {
                write!(f, "book {} is available but names holder {}", book_id, user_id)
            }
            Self::MissingHolder { book_id, user_id } => {
                write!(f, "book {} is held by unknown user {}", book_id, user_id)
            }
            Self::HolderMissingLoan { book_id, user_id } => {
                write!(f, "user {} holds book {} but does not list it", user_id, book_id)
            }
            Self::LoanOfMissingBook { user_id, book_id } => {
                write!(f, "user {} lists unknown book {}", user_id, book_id)
            }
            Self::LoanNotHeld { user_id, book_id } => {
                write!(f, "user {} lists book {} which is not issued to them", user_id, book_id)
            }
            Self::LoanListedTwice { book_id, user_ids } => {
                write!(f, "book {} is listed by users {}", book_id, user_ids.join(", "))
            }
            Self::DueDateMismatch { transaction_id } => {
                write!(f, "transaction {} has an inconsistent due date", transaction_id)
            }
        }
    }
}

/// Audits a library snapshot.
///
/// # Returns
///
/// Every violation found, in a stable order. Empty when consistent.
pub fn check(library: &Library) -> Vec<IntegrityIssue> {
    let mut issues = Vec::new();

    issues.extend(
        duplicates(library.books.iter().map(|b| b.id.as_str()))
            .map(|id| IntegrityIssue::DuplicateBookId { id }),
    );
    issues.extend(
        duplicates(library.users.iter().map(|u| u.id.as_str()))
            .map(|id| IntegrityIssue::DuplicateUserId { id }),
    );
    issues.extend(
        duplicates(library.transactions.iter().map(|t| t.id.as_str()))
            .map(|id| IntegrityIssue::DuplicateTransactionId { id }),
    );

    for book in &library.books {
        match (book.status, &book.issued_to) {
            (BookStatus::Issued, None) => issues.push(IntegrityIssue::IssuedWithoutHolder {
                book_id: book.id.clone(),
            }),
            (BookStatus::Available, Some(user_id)) => {
                issues.push(IntegrityIssue::AvailableWithHolder {
                    book_id: book.id.clone(),
                    user_id: user_id.clone(),
                })
            }
            (BookStatus::Issued, Some(user_id)) => match library.user(user_id) {
                None => issues.push(IntegrityIssue::MissingHolder {
                    book_id: book.id.clone(),
                    user_id: user_id.clone(),
                }),
                Some(user) if !user.holds(&book.id) => {
                    issues.push(IntegrityIssue::HolderMissingLoan {
                        book_id: book.id.clone(),
                        user_id: user_id.clone(),
                    })
                }
                Some(_) => {}
            },
            (BookStatus::Available, None) => {}
        }
    }

    // book id -> users listing it, in user order
    let mut listed_by: HashMap<&str, Vec<&str>> = HashMap::new();
    let mut listing_order: Vec<&str> = Vec::new();

    for user in &library.users {
        for loan in &user.issued_books {
            let entry = listed_by.entry(loan.book_id.as_str()).or_default();
            if entry.is_empty() {
                listing_order.push(loan.book_id.as_str());
            }
            entry.push(user.id.as_str());

            match library.book(&loan.book_id) {
                None => issues.push(IntegrityIssue::LoanOfMissingBook {
                    user_id: user.id.clone(),
                    book_id: loan.book_id.clone(),
                }),
                Some(book) if book.issued_to.as_deref() != Some(user.id.as_str()) => {
                    issues.push(IntegrityIssue::LoanNotHeld {
                        user_id: user.id.clone(),
                        book_id: loan.book_id.clone(),
                    })
                }
                Some(_) => {}
            }
        }
    }

    for book_id in listing_order {
        let users = &listed_by[book_id];
        if users.len() > 1 {
            issues.push(IntegrityIssue::LoanListedTwice {
                book_id: book_id.to_string(),
                user_ids: users.iter().map(|u| u.to_string()).collect(),
            });
        }
    }

    for tx in &library.transactions {
        let consistent = match tx.kind {
            TransactionKind::Issue => tx.due_date.is_some(),
            TransactionKind::Return => tx.due_date.is_none(),
        };
        if !consistent {
            issues.push(IntegrityIssue::DueDateMismatch {
                transaction_id: tx.id.clone(),
            });
        }
    }

    issues
}

fn duplicates<'a>(ids: impl Iterator<Item = &'a str>) -> impl Iterator<Item = String> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    let mut dups = Vec::new();
    for id in ids {
        if !seen.insert(id) && reported.insert(id) {
            dups.push(id.to_string());
        }
    }
    dups.into_iter()
}
