// Rust guideline compliant 2026-10-14

//! Search and filter helpers for book and user listings.

use crate::error::{AppError, Result};
use rayon::prelude::*;
use stacks_core::{Book, BookStatus, User};

/// Listings at or above this size are filtered in parallel.
const PARALLEL_THRESHOLD: usize = 1_000;

/// Status filter for book listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    /// Every book.
    #[default]
    All,
    /// Only books on the shelf.
    Available,
    /// Only books out on loan.
    Issued,
}

impl StatusFilter {
    fn accepts(self, status: BookStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Available => status == BookStatus::Available,
            StatusFilter::Issued => status == BookStatus::Issued,
        }
    }
}

/// Options for listing books.
#[derive(Debug, Clone, Default)]
pub struct BookQuery {
    /// Case-insensitive substring matched against title, author and genre.
    pub search: String,
    /// Status filter.
    pub status: StatusFilter,
}

/// Parses a status filter string.
///
/// # Errors
///
/// Returns an error unless the value is `all`, `available` or `issued`.
pub fn parse_status_filter(value: &str) -> Result<StatusFilter> {
    match value.to_lowercase().as_str() {
        "all" => Ok(StatusFilter::All),
        "available" => Ok(StatusFilter::Available),
        "issued" => Ok(StatusFilter::Issued),
        _ => Err(AppError::InvalidInput(format!(
            "Invalid status filter: {}",
            value
        ))),
    }
}

fn contains_folded(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// Filters books by search term and status, keeping catalogue order.
pub fn filter_books(books: &[Book], query: &BookQuery) -> Vec<Book> {
    let needle = query.search.to_lowercase();
    let predicate = |book: &&Book| {
        let matches_search = contains_folded(&book.title, &needle)
            || contains_folded(&book.author, &needle)
            || contains_folded(&book.genre, &needle);
        matches_search && query.status.accepts(book.status)
    };

    if books.len() >= PARALLEL_THRESHOLD {
        books.par_iter().filter(predicate).cloned().collect()
    } else {
        books.iter().filter(predicate).cloned().collect()
    }
}

/// Filters users by a case-insensitive substring of name or email.
pub fn filter_users(users: &[User], search: &str) -> Vec<User> {
    let needle = search.to_lowercase();
    let predicate = |user: &&User| {
        contains_folded(&user.name, &needle) || contains_folded(&user.email, &needle)
    };

    if users.len() >= PARALLEL_THRESHOLD {
        users.par_iter().filter(predicate).cloned().collect()
    } else {
        users.iter().filter(predicate).cloned().collect()
    }
}
