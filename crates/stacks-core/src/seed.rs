// Rust guideline compliant 2026-10-12

//! Sample data for a fresh library.

use crate::{Book, BookStatus, Library, Transaction, User};
use serde::Serialize;

/// A fixed dataset that can be loaded into empty collections.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedData {
    /// Books to load.
    pub books: Vec<Book>,
    /// Users to load.
    pub users: Vec<User>,
    /// Transactions to load.
    pub transactions: Vec<Transaction>,
}

/// Which collections a seed call populated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SeedReport {
    /// Books were loaded.
    pub books: bool,
    /// Users were loaded.
    pub users: bool,
    /// Transactions were loaded.
    pub transactions: bool,
}

impl SeedReport {
    /// Returns true if nothing was loaded.
    pub fn is_noop(&self) -> bool {
        !(self.books || self.users || self.transactions)
    }
}

const SAMPLE_BOOKS: &[(&str, &str)] = &[
    (
        "Introduction to Algorithms",
        "Thomas H. Cormen, Charles E. Leiserson, Ronald L. Rivest, Clifford Stein",
    ),
    (
        "Clean Code: A Handbook of Agile Software Craftsmanship",
        "Robert C. Martin",
    ),
    (
        "Design Patterns: Elements of Reusable Object-Oriented Software",
        "Erich Gamma, Richard Helm, Ralph Johnson, John Vlissides",
    ),
    ("The Pragmatic Programmer", "Andrew Hunt, David Thomas"),
    (
        "Artificial Intelligence: A Modern Approach",
        "Stuart Russell, Peter Norvig",
    ),
    (
        "Computer Networks",
        "Andrew S. Tanenbaum, David J. Wetherall",
    ),
    (
        "Operating System Concepts",
        "Abraham Silberschatz, Peter B. Galvin, Greg Gagne",
    ),
    (
        "Database System Concepts",
        "Abraham Silberschatz, Henry F. Korth, S. Sudarshan",
    ),
    (
        "Computer Organization and Design",
        "David A. Patterson, John L. Hennessy",
    ),
    ("Data Structures and Algorithms in Java", "Robert Lafore"),
];

const SAMPLE_USERS: &[(&str, &str, &str, &str)] = &[
    ("Rajesh Kumar", "rajesh.kumar@example.com", "9876543210", "123 MG Road, Bangalore"),
    ("Priya Sharma", "priya.sharma@example.com", "8765432109", "456 Park Street, Mumbai"),
    ("Amit Patel", "amit.patel@example.com", "7654321098", "789 Gandhi Road, Ahmedabad"),
    ("Sunita Verma", "sunita.verma@example.com", "6543210987", "234 Nehru Place, Delhi"),
    ("Vikram Singh", "vikram.singh@example.com", "5432109876", "567 Civil Lines, Jaipur"),
    ("Ananya Desai", "ananya.desai@example.com", "4321098765", "890 Lake Road, Pune"),
    ("Rahul Gupta", "rahul.gupta@example.com", "3210987654", "123 Sector 17, Chandigarh"),
];

impl SeedData {
    /// The bundled sample catalogue: ten computer-science books, seven
    /// members and no history.
    pub fn sample() -> Self {
        let books = SAMPLE_BOOKS
            .iter()
            .enumerate()
            .map(|(i, (title, author))| Book {
                id: (i + 1).to_string(),
                title: (*title).to_string(),
                author: (*author).to_string(),
                genre: "Computer Science".to_string(),
                status: BookStatus::Available,
                issued_to: None,
            })
            .collect();

        let users = SAMPLE_USERS
            .iter()
            .enumerate()
            .map(|(i, (name, email, phone, address))| User {
                id: (i + 1).to_string(),
                name: (*name).to_string(),
                email: (*email).to_string(),
                phone: Some((*phone).to_string()),
                address: Some((*address).to_string()),
                issued_books: Vec::new(),
            })
            .collect();

        Self {
            books,
            users,
            transactions: Vec::new(),
        }
    }
}

/// Loads each seed collection into `library` only if that collection is
/// empty.
///
/// Collections are checked independently: a library with books but no users
/// receives only the sample users.
pub fn seed_if_empty(library: &mut Library, seed: &SeedData) -> SeedReport {
    let mut report = SeedReport::default();

    if library.books.is_empty() && !seed.books.is_empty() {
        library.books = seed.books.clone();
        report.books = true;
    }

    if library.users.is_empty() && !seed.users.is_empty() {
        library.users = seed.users.clone();
        report.users = true;
    }

    if library.transactions.is_empty() && !seed.transactions.is_empty() {
        library.transactions = seed.transactions.clone();
        report.transactions = true;
    }

    report
}
