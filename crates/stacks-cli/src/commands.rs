// Rust guideline compliant 2026-10-14

//! Command implementations for the Stacks CLI.

pub mod book;
pub mod circulation;
pub mod dashboard;
pub mod doctor;
pub mod history;
pub mod init;
pub mod seed;
pub mod user;

use crate::output::OutputFormatter;
use anyhow::Result;
use stacks_app::RepoContext;
use stacks_core::{Config, DirectoryMedium, LibraryStore};
use std::path::PathBuf;

/// Shared state for every command invocation.
pub struct CommandContext {
    /// Repository root; the working directory when `None`.
    pub root: Option<PathBuf>,
    /// Formatter for command output.
    pub formatter: Box<dyn OutputFormatter>,
}

/// An opened repository: paths, configuration and store.
pub struct OpenRepo {
    /// Repository paths.
    pub repo: RepoContext,
    /// Loaded configuration.
    pub config: Config,
    /// Library store backed by the repository directory.
    pub store: LibraryStore<DirectoryMedium>,
}

impl CommandContext {
    /// Creates a context.
    pub fn new(root: Option<PathBuf>, formatter: Box<dyn OutputFormatter>) -> Self {
        Self { root, formatter }
    }

    /// Discovers the repository, loads config and opens the store.
    ///
    /// # Errors
    ///
    /// Returns an error if the repository is not initialized or the
    /// configuration is invalid.
    pub fn open(&self) -> Result<OpenRepo> {
        let repo = RepoContext::discover(self.root.as_deref())?;
        let config = repo.load_config()?;
        let store = repo.open_store(&config)?;
        Ok(OpenRepo {
            repo,
            config,
            store,
        })
    }

    /// Writes command output to stdout.
    pub fn emit(&self, output: &str) {
        println!("{}", output.trim_end());
    }
}
