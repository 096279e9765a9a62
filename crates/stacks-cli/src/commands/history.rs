// Rust guideline compliant 2026-10-14

//! Implementation of the `stx history` command.

use crate::commands::CommandContext;
use anyhow::Result;
use stacks_app::activity::{book_history, user_history};
use stacks_app::transaction_history;

/// Lists transactions, newest first.
///
/// # Arguments
///
/// * `ctx` - Command context
/// * `user` - Only transactions involving this user
/// * `book` - Only transactions involving this book
/// * `limit` - Maximum number of entries
///
/// # Errors
///
/// Returns an error if the repository is not initialized.
pub fn execute(
    ctx: &CommandContext,
    user: Option<String>,
    book: Option<String>,
    limit: Option<usize>,
) -> Result<()> {
    let opened = ctx.open()?;
    let library = opened.store.snapshot();

    let mut entries = match (&user, &book) {
        (Some(user_id), _) => user_history(library, user_id),
        (None, Some(book_id)) => book_history(library, book_id),
        (None, None) => transaction_history(library),
    };
    if let (Some(_), Some(book_id)) = (&user, &book) {
        entries.retain(|entry| &entry.transaction.book_id == book_id);
    }
    if let Some(limit) = limit {
        entries.truncate(limit);
    }

    ctx.emit(&ctx.formatter.format_activity(&entries));
    Ok(())
}
