// Rust guideline compliant 2026-10-14

//! Read views joining transactions and loans with catalogue records.
//!
//! Transactions and loans may reference books or users that have since been
//! deleted. Views never fail on such references; they substitute placeholder
//! names instead.

use chrono::{DateTime, Utc};
use serde::Serialize;
use stacks_core::{BookStatus, Library, Transaction};

/// Title shown for transactions whose book no longer exists.
pub const UNKNOWN_BOOK: &str = "Unknown Book";
/// Name shown for transactions whose user no longer exists.
pub const UNKNOWN_USER: &str = "Unknown User";
/// Author shown for loans whose book no longer exists.
pub const UNKNOWN_AUTHOR: &str = "Unknown Author";

/// Default number of entries in the activity feed.
pub const RECENT_ACTIVITY_LIMIT: usize = 5;

/// A transaction joined with display names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityEntry {
    /// The underlying event.
    #[serde(flatten)]
    pub transaction: Transaction,
    /// Title of the book, or [`UNKNOWN_BOOK`].
    pub book_title: String,
    /// Name of the user, or [`UNKNOWN_USER`].
    pub user_name: String,
}

/// A book currently held by a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserLoan {
    /// Book on loan.
    pub book_id: String,
    /// Title of the book, or [`UNKNOWN_BOOK`].
    pub title: String,
    /// Author of the book, or [`UNKNOWN_AUTHOR`].
    pub author: String,
    /// When the book was issued.
    pub issue_date: DateTime<Utc>,
    /// When the book is due.
    pub due_date: DateTime<Utc>,
    /// True if the due date has passed.
    pub overdue: bool,
}

/// Catalogue counters for the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    /// Number of books.
    pub total_books: usize,
    /// Books on the shelf.
    pub available_books: usize,
    /// Books out on loan.
    pub issued_books: usize,
    /// Number of users.
    pub total_users: usize,
    /// Outstanding loans past their due date.
    pub overdue_loans: usize,
}

fn entry_for(library: &Library, transaction: &Transaction) -> ActivityEntry {
    let book_title = library
        .book(&transaction.book_id)
        .map_or_else(|| UNKNOWN_BOOK.to_string(), |book| book.title.clone());
    let user_name = library
        .user(&transaction.user_id)
        .map_or_else(|| UNKNOWN_USER.to_string(), |user| user.name.clone());

    ActivityEntry {
        transaction: transaction.clone(),
        book_title,
        user_name,
    }
}

/// Returns every transaction, newest first, joined with display names.
///
/// Transactions sharing a timestamp keep their recorded order reversed, so
/// the later append is listed first.
pub fn transaction_history(library: &Library) -> Vec<ActivityEntry> {
    let mut entries: Vec<ActivityEntry> = library
        .transactions
        .iter()
        .rev()
        .map(|transaction| entry_for(library, transaction))
        .collect();
    entries.sort_by(|a, b| b.transaction.date.cmp(&a.transaction.date));
    entries
}

/// Returns the `limit` most recent transactions, newest first.
///
/// # Arguments
///
/// * `library` - Snapshot to read
/// * `limit` - Maximum number of entries
pub fn recent_activity(library: &Library, limit: usize) -> Vec<ActivityEntry> {
    let mut entries = transaction_history(library);
    entries.truncate(limit);
    entries
}

/// Returns transactions involving one user, newest first.
pub fn user_history(library: &Library, user_id: &str) -> Vec<ActivityEntry> {
    transaction_history(library)
        .into_iter()
        .filter(|entry| entry.transaction.user_id == user_id)
        .collect()
}

/// Returns transactions involving one book, newest first.
pub fn book_history(library: &Library, book_id: &str) -> Vec<ActivityEntry> {
    transaction_history(library)
        .into_iter()
        .filter(|entry| entry.transaction.book_id == book_id)
        .collect()
}

/// Lists the books a user currently holds.
///
/// Returns `None` if the user does not exist.
///
/// # Arguments
///
/// * `library` - Snapshot to read
/// * `user_id` - User to list
/// * `now` - Reference instant for the overdue flag
pub fn user_loans(library: &Library, user_id: &str, now: DateTime<Utc>) -> Option<Vec<UserLoan>> {
    let user = library.user(user_id)?;
    let loans = user
        .issued_books
        .iter()
        .map(|loan| {
            let book = library.book(&loan.book_id);
            UserLoan {
                book_id: loan.book_id.clone(),
                title: book.map_or_else(|| UNKNOWN_BOOK.to_string(), |b| b.title.clone()),
                author: book.map_or_else(|| UNKNOWN_AUTHOR.to_string(), |b| b.author.clone()),
                issue_date: loan.issue_date,
                due_date: loan.due_date,
                overdue: loan.due_date < now,
            }
        })
        .collect();
    Some(loans)
}

/// Computes dashboard counters.
pub fn dashboard_stats(library: &Library, now: DateTime<Utc>) -> DashboardStats {
    let issued_books = library
        .books
        .iter()
        .filter(|book| book.status == BookStatus::Issued)
        .count();
    let overdue_loans = library
        .users
        .iter()
        .flat_map(|user| user.issued_books.iter())
        .filter(|loan| loan.due_date < now)
        .count();

    DashboardStats {
        total_books: library.books.len(),
        available_books: library.books.len() - issued_books,
        issued_books,
        total_users: library.users.len(),
        overdue_loans,
    }
}
