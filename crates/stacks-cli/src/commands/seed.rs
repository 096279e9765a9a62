// Rust guideline compliant 2026-10-14

//! Implementation of the `stx seed` command.

use crate::commands::CommandContext;
use anyhow::Result;
use stacks_core::SeedData;

/// Loads the sample catalogue into every empty collection.
///
/// Collections that already hold records are left alone, so running this
/// twice changes nothing the second time.
///
/// # Errors
///
/// Returns an error if the repository is not initialized.
pub fn execute(ctx: &CommandContext) -> Result<()> {
    let mut opened = ctx.open()?;
    let report = opened.store.seed(&SeedData::sample());

    let message = if report.is_noop() {
        "Nothing to seed: collections already populated".to_string()
    } else {
        let mut loaded = Vec::new();
        if report.books {
            loaded.push("books");
        }
        if report.users {
            loaded.push("users");
        }
        if report.transactions {
            loaded.push("transactions");
        }
        format!("Loaded sample {}", loaded.join(", "))
    };

    ctx.emit(
        &ctx.formatter
            .format_result(&message, &serde_json::to_value(report)?),
    );
    Ok(())
}
