// Rust guideline compliant 2026-10-14

//! Output formatting module for the Stacks CLI.
//!
//! This module provides functionality for formatting catalogue data
//! in various output formats (JSON, table, plain text).

use crate::terminal::paint;
use chrono::{DateTime, Utc};
use serde_json::json;
use stacks_app::time::{format_date, format_datetime, humanize_due, humanize_since};
use stacks_app::{ActivityEntry, DashboardStats, SuccessEnvelope, UserLoan};
use stacks_core::{Book, BookStatus, IntegrityIssue, OutputFormat, User};
use tabled::{builder::Builder, settings::Style};
use termcolor::Color;

/// Output formatter trait.
///
/// Defines the interface for formatting catalogue data in different output
/// formats.
pub trait OutputFormatter {
    /// Formats a single book with its circulation history.
    fn format_book(&self, book: &Book, history: &[ActivityEntry]) -> String;

    /// Formats a list of books.
    fn format_books(&self, books: &[Book]) -> String;

    /// Formats a single user with the books they currently hold.
    fn format_user(&self, user: &User, loans: &[UserLoan]) -> String;

    /// Formats a list of users.
    fn format_users(&self, users: &[User]) -> String;

    /// Formats transactions joined with display names.
    fn format_activity(&self, entries: &[ActivityEntry]) -> String;

    /// Formats dashboard counters and the recent activity feed.
    fn format_dashboard(&self, stats: &DashboardStats, recent: &[ActivityEntry]) -> String;

    /// Formats integrity check findings.
    fn format_issues(&self, issues: &[IntegrityIssue]) -> String;

    /// Formats the result of a mutating command.
    ///
    /// # Arguments
    /// * `message` - Human-readable summary
    /// * `record` - Machine-readable payload
    fn format_result(&self, message: &str, record: &serde_json::Value) -> String;

    /// Formats an error message for display.
    fn format_error(&self, error: &str) -> String;
}

fn to_pretty_json(value: &serde_json::Value) -> String {
    serde_json::to_string_pretty(value)
        .unwrap_or_else(|_| json!({ "error": "Failed to serialize output" }).to_string())
}

/// JSON output formatter.
///
/// Formats records as valid JSON for machine consumption.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_book(&self, book: &Book, history: &[ActivityEntry]) -> String {
        to_pretty_json(&json!({ "book": book, "history": history }))
    }

    fn format_books(&self, books: &[Book]) -> String {
        to_pretty_json(&json!({ "books": books, "total": books.len() }))
    }

    fn format_user(&self, user: &User, loans: &[UserLoan]) -> String {
        to_pretty_json(&json!({ "user": user, "loans": loans }))
    }

    fn format_users(&self, users: &[User]) -> String {
        to_pretty_json(&json!({ "users": users, "total": users.len() }))
    }

    fn format_activity(&self, entries: &[ActivityEntry]) -> String {
        to_pretty_json(&json!({ "transactions": entries, "total": entries.len() }))
    }

    fn format_dashboard(&self, stats: &DashboardStats, recent: &[ActivityEntry]) -> String {
        to_pretty_json(&json!({ "stats": stats, "recentActivity": recent }))
    }

    fn format_issues(&self, issues: &[IntegrityIssue]) -> String {
        to_pretty_json(&json!({ "issues": issues, "total": issues.len() }))
    }

    fn format_result(&self, _message: &str, record: &serde_json::Value) -> String {
        match serde_json::to_value(SuccessEnvelope::new(record)) {
            Ok(value) => to_pretty_json(&value),
            Err(_) => json!({ "error": "Failed to serialize output" }).to_string(),
        }
    }

    fn format_error(&self, error: &str) -> String {
        json!({ "status": "error", "message": error }).to_string()
    }
}

/// Table output formatter.
///
/// Formats records as human-readable tables. Times are shown relative to
/// `now` unless absolute times were requested.
pub struct TableFormatter {
    use_color: bool,
    absolute_time: bool,
    now: DateTime<Utc>,
}

impl TableFormatter {
    /// Creates a new table formatter.
    ///
    /// # Arguments
    /// * `use_color` - Whether to use colored output
    /// * `absolute_time` - Whether to print timestamps as dates
    /// * `now` - Reference instant for relative times
    pub fn new(use_color: bool, absolute_time: bool, now: DateTime<Utc>) -> Self {
        Self {
            use_color,
            absolute_time,
            now,
        }
    }

    fn when(&self, instant: DateTime<Utc>) -> String {
        if self.absolute_time {
            format_datetime(instant)
        } else {
            humanize_since(instant, self.now)
        }
    }

    fn due(&self, due: DateTime<Utc>) -> String {
        if self.absolute_time {
            format_date(due)
        } else {
            format!("{} ({})", format_date(due), humanize_due(due, self.now))
        }
    }

    fn status(&self, status: BookStatus) -> String {
        let color = match status {
            BookStatus::Available => Color::Green,
            BookStatus::Issued => Color::Yellow,
        };
        paint(&format!("{:?}", status), color, false, self.use_color)
    }

    fn activity_table(&self, entries: &[ActivityEntry]) -> String {
        let mut builder = Builder::default();
        builder.push_record(vec!["When", "Type", "Book", "User", "Due"]);
        for entry in entries {
            builder.push_record(vec![
                self.when(entry.transaction.date),
                format!("{:?}", entry.transaction.kind),
                entry.book_title.clone(),
                entry.user_name.clone(),
                entry
                    .transaction
                    .due_date
                    .map(format_date)
                    .unwrap_or_default(),
            ]);
        }
        let mut table = builder.build();
        table.with(Style::modern());
        table.to_string()
    }
}

impl OutputFormatter for TableFormatter {
    fn format_book(&self, book: &Book, history: &[ActivityEntry]) -> String {
        let mut output = String::new();

        output.push_str(&format!("ID:        {}\n", book.id));
        output.push_str(&format!("Title:     {}\n", book.title));
        output.push_str(&format!("Author:    {}\n", book.author));
        if !book.genre.is_empty() {
            output.push_str(&format!("Genre:     {}\n", book.genre));
        }
        output.push_str(&format!("Status:    {}\n", self.status(book.status)));
        if let Some(holder) = &book.issued_to {
            output.push_str(&format!("Issued to: {}\n", holder));
        }

        if !history.is_empty() {
            output.push('\n');
            output.push_str(&self.activity_table(history));
            output.push('\n');
        }

        output
    }

    fn format_books(&self, books: &[Book]) -> String {
        if books.is_empty() {
            return "No books found.".to_string();
        }

        let mut builder = Builder::default();
        builder.push_record(vec!["ID", "Title", "Author", "Genre", "Status"]);
        for book in books {
            builder.push_record(vec![
                book.id.clone(),
                book.title.clone(),
                book.author.clone(),
                book.genre.clone(),
                format!("{:?}", book.status),
            ]);
        }

        let mut table = builder.build();
        table.with(Style::modern());
        table.to_string()
    }

    fn format_user(&self, user: &User, loans: &[UserLoan]) -> String {
        let mut output = String::new();

        output.push_str(&format!("ID:      {}\n", user.id));
        output.push_str(&format!("Name:    {}\n", user.name));
        output.push_str(&format!("Email:   {}\n", user.email));
        if let Some(phone) = &user.phone {
            output.push_str(&format!("Phone:   {}\n", phone));
        }
        if let Some(address) = &user.address {
            output.push_str(&format!("Address: {}\n", address));
        }

        if loans.is_empty() {
            output.push_str("Loans:   none\n");
            return output;
        }

        output.push_str(&format!("Loans:   {}\n", loans.len()));
        for loan in loans {
            let marker = if loan.overdue {
                paint(" OVERDUE", Color::Red, true, self.use_color)
            } else {
                String::new()
            };
            output.push_str(&format!(
                "  - {} by {} (due {}){}\n",
                loan.title,
                loan.author,
                self.due(loan.due_date),
                marker
            ));
        }

        output
    }

    fn format_users(&self, users: &[User]) -> String {
        if users.is_empty() {
            return "No users found.".to_string();
        }

        let mut builder = Builder::default();
        builder.push_record(vec!["ID", "Name", "Email", "Phone", "Loans"]);
        for user in users {
            builder.push_record(vec![
                user.id.clone(),
                user.name.clone(),
                user.email.clone(),
                user.phone.clone().unwrap_or_default(),
                user.issued_books.len().to_string(),
            ]);
        }

        let mut table = builder.build();
        table.with(Style::modern());
        table.to_string()
    }

    fn format_activity(&self, entries: &[ActivityEntry]) -> String {
        if entries.is_empty() {
            return "No transactions found.".to_string();
        }
        self.activity_table(entries)
    }

    fn format_dashboard(&self, stats: &DashboardStats, recent: &[ActivityEntry]) -> String {
        let mut output = String::new();

        output.push_str(&format!("Total books:     {}\n", stats.total_books));
        output.push_str(&format!("Available books: {}\n", stats.available_books));
        output.push_str(&format!("Issued books:    {}\n", stats.issued_books));
        output.push_str(&format!("Total users:     {}\n", stats.total_users));
        if stats.overdue_loans > 0 {
            let overdue = format!("Overdue loans:   {}", stats.overdue_loans);
            output.push_str(&paint(&overdue, Color::Red, true, self.use_color));
            output.push('\n');
        }

        output.push_str("\nRecent activity\n");
        if recent.is_empty() {
            output.push_str("No recent activity.\n");
        } else {
            output.push_str(&self.activity_table(recent));
            output.push('\n');
        }

        output
    }

    fn format_issues(&self, issues: &[IntegrityIssue]) -> String {
        if issues.is_empty() {
            return paint("No integrity issues found.", Color::Green, false, self.use_color);
        }

        let mut output = paint(
            &format!("{} integrity issue(s) found:", issues.len()),
            Color::Red,
            true,
            self.use_color,
        );
        output.push('\n');
        for issue in issues {
            output.push_str(&format!("  - {}\n", issue));
        }
        output
    }

    fn format_result(&self, message: &str, _record: &serde_json::Value) -> String {
        format!("{} {}", paint("✓", Color::Green, true, self.use_color), message)
    }

    fn format_error(&self, error: &str) -> String {
        format!("{} {}", paint("Error:", Color::Red, true, self.use_color), error)
    }
}

/// Plain text output formatter.
///
/// Formats records as tab-separated lines without colors or tables.
pub struct PlainFormatter;

impl PlainFormatter {
    fn activity_lines(entries: &[ActivityEntry]) -> String {
        let mut output = String::new();
        for entry in entries {
            output.push_str(&format!(
                "{}\t{:?}\t{}\t{}\n",
                entry.transaction.date.to_rfc3339(),
                entry.transaction.kind,
                entry.book_title,
                entry.user_name
            ));
        }
        output
    }
}

impl OutputFormatter for PlainFormatter {
    fn format_book(&self, book: &Book, history: &[ActivityEntry]) -> String {
        let mut output = format!(
            "{}\t{}\t{}\t{}\t{:?}\t{}\n",
            book.id,
            book.title,
            book.author,
            book.genre,
            book.status,
            book.issued_to.as_deref().unwrap_or("")
        );
        output.push_str(&Self::activity_lines(history));
        output
    }

    fn format_books(&self, books: &[Book]) -> String {
        if books.is_empty() {
            return "No books found.".to_string();
        }

        let mut output = String::new();
        for book in books {
            output.push_str(&format!(
                "{}\t{:?}\t{}\t{}\n",
                book.id, book.status, book.title, book.author
            ));
        }
        output
    }

    fn format_user(&self, user: &User, loans: &[UserLoan]) -> String {
        let mut output = format!("{}\t{}\t{}\n", user.id, user.name, user.email);
        for loan in loans {
            output.push_str(&format!(
                "{}\t{}\t{}\n",
                loan.book_id,
                loan.title,
                loan.due_date.to_rfc3339()
            ));
        }
        output
    }

    fn format_users(&self, users: &[User]) -> String {
        if users.is_empty() {
            return "No users found.".to_string();
        }

        let mut output = String::new();
        for user in users {
            output.push_str(&format!(
                "{}\t{}\t{}\t{}\n",
                user.id,
                user.name,
                user.email,
                user.issued_books.len()
            ));
        }
        output
    }

    fn format_activity(&self, entries: &[ActivityEntry]) -> String {
        if entries.is_empty() {
            return "No transactions found.".to_string();
        }
        Self::activity_lines(entries)
    }

    fn format_dashboard(&self, stats: &DashboardStats, recent: &[ActivityEntry]) -> String {
        let mut output = format!(
            "books\t{}\navailable\t{}\nissued\t{}\nusers\t{}\noverdue\t{}\n",
            stats.total_books,
            stats.available_books,
            stats.issued_books,
            stats.total_users,
            stats.overdue_loans
        );
        output.push_str(&Self::activity_lines(recent));
        output
    }

    fn format_issues(&self, issues: &[IntegrityIssue]) -> String {
        let mut output = String::new();
        for issue in issues {
            output.push_str(&format!("{}\n", issue));
        }
        output
    }

    fn format_result(&self, message: &str, _record: &serde_json::Value) -> String {
        message.to_string()
    }

    fn format_error(&self, error: &str) -> String {
        format!("Error: {}", error)
    }
}

/// Factory function to create an appropriate formatter.
///
/// # Arguments
/// * `format` - The desired output format
/// * `use_color` - Whether to use colored output (ignored for JSON and plain)
/// * `absolute_time` - Whether tables print absolute dates instead of
///   relative times
///
/// # Returns
/// A boxed OutputFormatter instance
pub fn create_formatter(
    format: OutputFormat,
    use_color: bool,
    absolute_time: bool,
) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Table => Box::new(TableFormatter::new(use_color, absolute_time, Utc::now())),
        OutputFormat::Plain => Box::new(PlainFormatter),
    }
}
