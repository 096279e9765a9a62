// Rust guideline compliant 2026-10-14

//! Implementation of the `stx book` subcommands.

use crate::commands::CommandContext;
use anyhow::Result;
use stacks_app::activity::book_history;
use stacks_app::{filter_books, parse_status_filter, BookQuery};
use stacks_core::{BookDraft, Error as CoreError};

/// Adds a book to the catalogue.
///
/// # Arguments
///
/// * `ctx` - Command context
/// * `draft` - Title, author and genre
///
/// # Errors
///
/// Returns an error if:
/// - The repository is not initialized
/// - Title or author is blank
pub fn add(ctx: &CommandContext, draft: BookDraft) -> Result<()> {
    let mut opened = ctx.open()?;
    let book = opened.store.add_book(draft)?;

    let message = format!("Added book {}: {}", book.id, book.title);
    ctx.emit(&ctx.formatter.format_result(&message, &serde_json::to_value(&book)?));
    Ok(())
}

/// Edits the descriptive fields of a book.
///
/// Fields left as `None` keep their stored values. Status and holder can only
/// change through `issue` and `return`.
///
/// # Errors
///
/// Returns an error if:
/// - The repository is not initialized
/// - The book does not exist
/// - The edited record fails validation
pub fn update(
    ctx: &CommandContext,
    id: &str,
    title: Option<String>,
    author: Option<String>,
    genre: Option<String>,
) -> Result<()> {
    let mut opened = ctx.open()?;
    let mut book = opened
        .store
        .book(id)
        .cloned()
        .ok_or_else(|| CoreError::BookNotFound(id.to_string()))?;

    if let Some(title) = title {
        book.title = title;
    }
    if let Some(author) = author {
        book.author = author;
    }
    if let Some(genre) = genre {
        book.genre = genre;
    }

    let book = opened.store.update_book(book)?;
    let message = format!("Updated book {}: {}", book.id, book.title);
    ctx.emit(&ctx.formatter.format_result(&message, &serde_json::to_value(&book)?));
    Ok(())
}

/// Removes a book from the catalogue.
///
/// # Errors
///
/// Returns an error if the book does not exist or is on loan.
pub fn delete(ctx: &CommandContext, id: &str) -> Result<()> {
    let mut opened = ctx.open()?;
    let book = opened.store.delete_book(id)?;

    let message = format!("Deleted book {}: {}", book.id, book.title);
    ctx.emit(&ctx.formatter.format_result(&message, &serde_json::to_value(&book)?));
    Ok(())
}

/// Lists books matching a search term and status filter.
///
/// # Arguments
///
/// * `ctx` - Command context
/// * `search` - Case-insensitive substring of title, author or genre
/// * `status` - `all`, `available` or `issued`
///
/// # Errors
///
/// Returns an error if the repository is not initialized or the status
/// filter is unknown.
pub fn list(ctx: &CommandContext, search: Option<String>, status: Option<String>) -> Result<()> {
    let query = BookQuery {
        search: search.unwrap_or_default(),
        status: match status {
            Some(value) => parse_status_filter(&value)?,
            None => Default::default(),
        },
    };

    let opened = ctx.open()?;
    let books = filter_books(opened.store.books(), &query);
    ctx.emit(&ctx.formatter.format_books(&books));
    Ok(())
}

/// Shows a book and its circulation history.
///
/// # Errors
///
/// Returns an error if the book does not exist.
pub fn show(ctx: &CommandContext, id: &str) -> Result<()> {
    let opened = ctx.open()?;
    let book = opened
        .store
        .book(id)
        .ok_or_else(|| CoreError::BookNotFound(id.to_string()))?;

    let history = book_history(opened.store.snapshot(), id);
    ctx.emit(&ctx.formatter.format_book(book, &history));
    Ok(())
}
