// Rust guideline compliant 2026-10-14

//! Implementation of the `stx dashboard` command.

use crate::commands::CommandContext;
use anyhow::Result;
use chrono::Utc;
use stacks_app::{dashboard_stats, recent_activity};

/// Shows catalogue counters and the most recent transactions.
///
/// The feed length comes from `recent_activity_limit` in the config.
///
/// # Errors
///
/// Returns an error if the repository is not initialized.
pub fn execute(ctx: &CommandContext) -> Result<()> {
    let opened = ctx.open()?;
    let library = opened.store.snapshot();

    let stats = dashboard_stats(library, Utc::now());
    let recent = recent_activity(library, opened.config.recent_activity_limit);
    ctx.emit(&ctx.formatter.format_dashboard(&stats, &recent));
    Ok(())
}
