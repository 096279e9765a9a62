// Rust guideline compliant 2026-10-13

//! Stacks Core Library
//!
//! This crate provides the foundational components for the Stacks library
//! management system:
//! - Data models (Book, User, Transaction, Library snapshot)
//! - Key-value persistence with masked failures
//! - The library store and its issue/return rules
//! - FSM logic (book status transitions, due dates)
//! - Integrity checks, seed data, ID generation
//! - Error types and result handling

pub mod clock;
pub mod config;
pub mod error;
pub mod fsm;
pub mod identity;
pub mod integrity;
pub mod kv;
pub mod models;
pub mod seed;
pub mod store;

pub use clock::FixedClock;
pub use config::{Config, OutputFormat};
pub use error::{Error, Result};
pub use integrity::IntegrityIssue;
pub use kv::{DirectoryMedium, KeyValueMedium, KvStore, MemoryMedium, UnavailableMedium};
pub use models::{
    Book, BookDraft, BookStatus, IssuedBook, Library, Transaction, TransactionKind, User,
    UserDraft,
};
pub use seed::{SeedData, SeedReport};
pub use store::LibraryStore;
