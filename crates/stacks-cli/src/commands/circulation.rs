// Rust guideline compliant 2026-10-14

//! Implementation of the `stx issue` and `stx return` commands.

use crate::commands::CommandContext;
use anyhow::Result;
use stacks_app::activity::{UNKNOWN_BOOK, UNKNOWN_USER};
use stacks_app::time::format_date;
use stacks_core::{DirectoryMedium, LibraryStore, Transaction};

fn names(store: &LibraryStore<DirectoryMedium>, transaction: &Transaction) -> (String, String) {
    let title = store
        .book(&transaction.book_id)
        .map_or_else(|| UNKNOWN_BOOK.to_string(), |book| book.title.clone());
    let name = store
        .user(&transaction.user_id)
        .map_or_else(|| UNKNOWN_USER.to_string(), |user| user.name.clone());
    (title, name)
}

/// Issues a book to a user.
///
/// # Arguments
///
/// * `ctx` - Command context
/// * `book_id` - Book to lend
/// * `user_id` - Borrower
///
/// # Errors
///
/// Returns an error if:
/// - The book or user does not exist
/// - The book is already issued
pub fn issue(ctx: &CommandContext, book_id: &str, user_id: &str) -> Result<()> {
    let mut opened = ctx.open()?;
    let transaction = opened.store.issue_book(book_id, user_id)?;

    let (title, name) = names(&opened.store, &transaction);
    let due = transaction
        .due_date
        .map(format_date)
        .unwrap_or_default();
    let message = format!("Issued \"{}\" to {}, due {}", title, name, due);
    ctx.emit(
        &ctx.formatter
            .format_result(&message, &serde_json::to_value(&transaction)?),
    );
    Ok(())
}

/// Returns a book from a user.
///
/// # Errors
///
/// Returns an error if:
/// - The book does not exist or is not issued
/// - The book is issued to a different user
pub fn return_book(ctx: &CommandContext, book_id: &str, user_id: &str) -> Result<()> {
    let mut opened = ctx.open()?;
    let transaction = opened.store.return_book(book_id, user_id)?;

    let (title, name) = names(&opened.store, &transaction);
    let message = format!("Returned \"{}\" from {}", title, name);
    ctx.emit(
        &ctx.formatter
            .format_result(&message, &serde_json::to_value(&transaction)?),
    );
    Ok(())
}
