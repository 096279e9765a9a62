// Rust guideline compliant 2026-10-14

//! Implementation of the `stx doctor` command.
//!
//! Audits the stored library for records that break the loan invariants.

use crate::commands::CommandContext;
use anyhow::Result;

/// Executes the doctor command.
///
/// # Returns
///
/// Ok if the library is consistent, Err if issues are found.
///
/// # Errors
///
/// Returns an error if:
/// - The repository is not initialized
/// - Any integrity issue is found
pub fn execute(ctx: &CommandContext) -> Result<()> {
    let opened = ctx.open()?;
    let issues = opened.store.check_integrity();

    tracing::debug!(
        path = %opened.repo.stacks_dir().display(),
        issues = issues.len(),
        "integrity check finished"
    );
    ctx.emit(&ctx.formatter.format_issues(&issues));

    if !issues.is_empty() {
        anyhow::bail!("{} integrity issue(s) found", issues.len());
    }
    Ok(())
}
