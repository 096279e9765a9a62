// Rust guideline compliant 2026-10-14

//! Implementation of the `stx init` command.
//!
//! Initializes a new Stacks repository by creating the `.stacks` directory
//! and a default configuration, optionally loading the sample catalogue.

use crate::commands::CommandContext;
use anyhow::Result;
use serde_json::json;
use stacks_app::RepoContext;
use stacks_core::SeedData;

/// Initializes a new Stacks repository.
///
/// Running this in an existing repository keeps its data and config.
///
/// # Arguments
///
/// * `ctx` - Command context
/// * `seed` - Load the sample catalogue into empty collections
///
/// # Errors
///
/// Returns an error if:
/// - The `.stacks` directory cannot be created
/// - The configuration file cannot be written or is invalid
pub fn execute(ctx: &CommandContext, seed: bool) -> Result<()> {
    let repo = RepoContext::init(ctx.root.as_deref())?;
    let config = repo.load_config()?;

    let report = if seed || config.seed_on_init {
        let mut store = repo.open_store(&config)?;
        Some(store.seed(&SeedData::sample()))
    } else {
        None
    };

    let mut message = format!(
        "Stacks repository initialized at {}",
        repo.stacks_dir().display()
    );
    if let Some(report) = &report {
        if report.is_noop() {
            message.push_str("\n  Sample data skipped: collections already populated");
        } else {
            message.push_str("\n  Loaded sample data");
        }
    }

    let record = json!({
        "path": repo.stacks_dir(),
        "seeded": report,
    });
    ctx.emit(&ctx.formatter.format_result(&message, &record));
    Ok(())
}
