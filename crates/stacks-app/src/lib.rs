// Rust guideline compliant 2026-10-14

//! Shared application services for Stacks.
//!
//! This crate provides reusable, non-CLI-specific helpers for repository
//! discovery, list filtering, activity and dashboard views, date formatting,
//! and standardized response envelopes.

pub mod activity;
pub mod error;
pub mod list;
pub mod repo;
pub mod response;
pub mod time;

pub use activity::{
    dashboard_stats, recent_activity, transaction_history, user_loans, ActivityEntry,
    DashboardStats, UserLoan,
};
pub use error::{AppError, ErrorCode, Result};
pub use list::{filter_books, filter_users, parse_status_filter, BookQuery, StatusFilter};
pub use repo::RepoContext;
pub use response::{ErrorEnvelope, SuccessEnvelope};
