// Rust guideline compliant 2026-10-14

//! Repository discovery and path management utilities.

use crate::error::{AppError, Result};
use stacks_core::{Config, DirectoryMedium, LibraryStore};
use std::path::{Path, PathBuf};

/// Name of the repository directory.
pub const STACKS_DIR: &str = ".stacks";

/// Repository path metadata for a Stacks workspace.
#[derive(Debug, Clone)]
pub struct RepoContext {
    root: PathBuf,
    stacks_dir: PathBuf,
    config_path: PathBuf,
}

impl RepoContext {
    fn at(root: PathBuf) -> Self {
        let stacks_dir = root.join(STACKS_DIR);
        Self {
            config_path: stacks_dir.join("config.toml"),
            stacks_dir,
            root,
        }
    }

    fn resolve_root(repo_root: Option<&Path>) -> Result<PathBuf> {
        match repo_root {
            Some(root) => Ok(root.to_path_buf()),
            None => Ok(std::env::current_dir()?),
        }
    }

    /// Discovers a Stacks repository starting from an optional root.
    ///
    /// # Arguments
    ///
    /// * `repo_root` - Optional repository root to pin discovery
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The repository root cannot be resolved
    /// - The `.stacks` directory is missing
    pub fn discover(repo_root: Option<&Path>) -> Result<Self> {
        let context = Self::at(Self::resolve_root(repo_root)?);
        if !context.stacks_dir.is_dir() {
            return Err(AppError::RepoNotInitialized {
                path: context.stacks_dir,
            });
        }
        Ok(context)
    }

    /// Creates the `.stacks` directory and a default config if missing.
    ///
    /// Existing configuration is left untouched, so running this twice is
    /// harmless.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or config file cannot be written.
    pub fn init(repo_root: Option<&Path>) -> Result<Self> {
        let context = Self::at(Self::resolve_root(repo_root)?);
        std::fs::create_dir_all(&context.stacks_dir)?;
        if !context.config_path.exists() {
            Config::default().save(&context.stacks_dir)?;
            tracing::debug!(path = %context.config_path.display(), "wrote default config");
        }
        Ok(context)
    }

    /// Returns the repository root path.
    #[must_use]
    pub fn root(&self) -> &Path {
        self.root.as_path()
    }

    /// Returns the `.stacks` directory path.
    #[must_use]
    pub fn stacks_dir(&self) -> &Path {
        self.stacks_dir.as_path()
    }

    /// Returns the config TOML path.
    #[must_use]
    pub fn config_path(&self) -> &Path {
        self.config_path.as_path()
    }

    /// Opens the key-value medium backing the repository.
    ///
    /// # Errors
    ///
    /// Returns an error if the medium cannot be created.
    pub fn open_medium(&self) -> Result<DirectoryMedium> {
        Ok(DirectoryMedium::new(self.stacks_dir.clone())?)
    }

    /// Opens the library store with the configured loan period.
    ///
    /// Unreadable or corrupt data files yield an empty library; they are
    /// logged, never surfaced.
    ///
    /// # Errors
    ///
    /// Returns an error if the medium cannot be created.
    pub fn open_store(&self, config: &Config) -> Result<LibraryStore<DirectoryMedium>> {
        let store = LibraryStore::open(self.open_medium()?)
            .with_loan_period(config.loan_period_days);
        Ok(store)
    }

    /// Loads repository configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded.
    pub fn load_config(&self) -> Result<Config> {
        Ok(Config::load(self.stacks_dir())?)
    }
}
