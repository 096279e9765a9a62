// Rust guideline compliant 2026-10-14

//! Implementation of the `stx user` subcommands.

use crate::commands::CommandContext;
use anyhow::Result;
use chrono::Utc;
use stacks_app::{filter_users, user_loans};
use stacks_core::{Error as CoreError, UserDraft};

/// Registers a new user.
///
/// # Errors
///
/// Returns an error if:
/// - The repository is not initialized
/// - The name is blank or the email is malformed
pub fn add(ctx: &CommandContext, draft: UserDraft) -> Result<()> {
    let mut opened = ctx.open()?;
    let user = opened.store.add_user(draft)?;

    let message = format!("Added user {}: {}", user.id, user.name);
    ctx.emit(&ctx.formatter.format_result(&message, &serde_json::to_value(&user)?));
    Ok(())
}

/// Edits a user's contact details.
///
/// Fields left as `None` keep their stored values; an empty phone or address
/// clears it. Loans can only change through `issue` and `return`.
///
/// # Errors
///
/// Returns an error if:
/// - The repository is not initialized
/// - The user does not exist
/// - The edited record fails validation
pub fn update(ctx: &CommandContext, id: &str, changes: UserChanges) -> Result<()> {
    let mut opened = ctx.open()?;
    let mut user = opened
        .store
        .user(id)
        .cloned()
        .ok_or_else(|| CoreError::UserNotFound(id.to_string()))?;

    if let Some(name) = changes.name {
        user.name = name;
    }
    if let Some(email) = changes.email {
        user.email = email;
    }
    if let Some(phone) = changes.phone {
        user.phone = Some(phone);
    }
    if let Some(address) = changes.address {
        user.address = Some(address);
    }

    let user = opened.store.update_user(user)?;
    let message = format!("Updated user {}: {}", user.id, user.name);
    ctx.emit(&ctx.formatter.format_result(&message, &serde_json::to_value(&user)?));
    Ok(())
}

/// Optional field edits for `stx user update`.
#[derive(Debug, Clone, Default)]
pub struct UserChanges {
    /// New name.
    pub name: Option<String>,
    /// New email.
    pub email: Option<String>,
    /// New phone; empty clears it.
    pub phone: Option<String>,
    /// New address; empty clears it.
    pub address: Option<String>,
}

/// Removes a user.
///
/// # Errors
///
/// Returns an error if the user does not exist or still holds books.
pub fn delete(ctx: &CommandContext, id: &str) -> Result<()> {
    let mut opened = ctx.open()?;
    let user = opened.store.delete_user(id)?;

    let message = format!("Deleted user {}: {}", user.id, user.name);
    ctx.emit(&ctx.formatter.format_result(&message, &serde_json::to_value(&user)?));
    Ok(())
}

/// Lists users whose name or email contains `search`.
///
/// # Errors
///
/// Returns an error if the repository is not initialized.
pub fn list(ctx: &CommandContext, search: Option<String>) -> Result<()> {
    let opened = ctx.open()?;
    let users = filter_users(opened.store.users(), search.as_deref().unwrap_or_default());
    ctx.emit(&ctx.formatter.format_users(&users));
    Ok(())
}

/// Shows a user and the books they currently hold.
///
/// # Errors
///
/// Returns an error if the user does not exist.
pub fn show(ctx: &CommandContext, id: &str) -> Result<()> {
    let opened = ctx.open()?;
    let library = opened.store.snapshot();
    let user = library
        .user(id)
        .ok_or_else(|| CoreError::UserNotFound(id.to_string()))?;
    let loans = user_loans(library, id, Utc::now()).unwrap_or_default();

    ctx.emit(&ctx.formatter.format_user(user, &loans));
    Ok(())
}
