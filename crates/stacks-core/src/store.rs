// Rust guideline compliant 2026-10-13

//! The library domain store.
//!
//! [`LibraryStore`] owns the in-memory books, users and transactions and is
//! their only writer. Every mutation is computed on a copy of the current
//! state, checked, and then committed: the copy replaces the in-memory state
//! and is persisted as one snapshot under [`SNAPSHOT_KEY`]. A rejected
//! operation leaves both the memory and the medium untouched.

use crate::fsm::{due_date_for, LOAN_PERIOD_DAYS};
use crate::integrity::{self, IntegrityIssue};
use crate::kv::{KeyValueMedium, KvStore};
use crate::seed::{seed_if_empty, SeedData, SeedReport};
use crate::{
    identity, Book, BookDraft, BookStatus, Error, IssuedBook, Library, Result, Transaction,
    TransactionKind, User, UserDraft,
};
use chrono::{DateTime, Local, Utc};
use mockable::{Clock, DefaultClock};

/// Key of the composite snapshot.
pub const SNAPSHOT_KEY: &str = "library";

/// Keys of the legacy one-collection-per-key layout.
pub const LEGACY_KEYS: [&str; 3] = ["books", "users", "transactions"];

/// Persisted library state with enforced circulation rules.
pub struct LibraryStore<M, C = DefaultClock> {
    kv: KvStore<M>,
    clock: C,
    loan_period_days: u32,
    library: Library,
    legacy_layout: bool,
}

impl<M: KeyValueMedium> LibraryStore<M, DefaultClock> {
    /// Opens a store on `medium` using the system clock.
    pub fn open(medium: M) -> Self {
        Self::with_clock(medium, DefaultClock)
    }
}

impl<M: KeyValueMedium, C: Clock> LibraryStore<M, C> {
    /// Opens a store on `medium` with an explicit clock.
    ///
    /// Loading never fails: a missing, corrupt or unavailable medium yields
    /// an empty library.
    pub fn with_clock(medium: M, clock: C) -> Self {
        let kv = KvStore::new(medium);
        let (library, legacy_layout) = Self::load(&kv);
        Self {
            kv,
            clock,
            loan_period_days: LOAN_PERIOD_DAYS,
            library,
            legacy_layout,
        }
    }

    /// Overrides the loan period.
    #[must_use]
    pub fn with_loan_period(mut self, days: u32) -> Self {
        self.loan_period_days = days;
        self
    }

    fn load(kv: &KvStore<M>) -> (Library, bool) {
        if let Some(library) = kv.get::<Option<Library>>(SNAPSHOT_KEY, None) {
            tracing::debug!(
                books = library.books.len(),
                users = library.users.len(),
                transactions = library.transactions.len(),
                "loaded library snapshot"
            );
            return (library, false);
        }

        let [books_key, users_key, transactions_key] = LEGACY_KEYS;
        let library = Library {
            books: kv.get(books_key, Vec::new()),
            users: kv.get(users_key, Vec::new()),
            transactions: kv.get(transactions_key, Vec::new()),
        };
        let legacy = LEGACY_KEYS.iter().any(|key| kv.contains(key));
        if legacy {
            tracing::debug!("loaded library from legacy per-collection keys");
        }
        (library, legacy)
    }

    /// Discards in-memory state and re-reads the medium.
    pub fn reload(&mut self) {
        let (library, legacy_layout) = Self::load(&self.kv);
        self.library = library;
        self.legacy_layout = legacy_layout;
    }

    /// Replaces the in-memory state with `next` and persists it.
    fn commit(&mut self, next: Library) {
        match self.kv.try_set(SNAPSHOT_KEY, &next) {
            Ok(()) if self.legacy_layout => {
                for key in LEGACY_KEYS {
                    self.kv.remove(key);
                }
                self.legacy_layout = false;
            }
            Ok(()) => {}
            Err(e) => tracing::warn!(error = %e, "failed to persist library snapshot"),
        }
        self.library = next;
    }

    /// Returns the underlying medium.
    pub fn medium(&self) -> &M {
        self.kv.medium()
    }

    /// Returns the loan period in days.
    pub fn loan_period_days(&self) -> u32 {
        self.loan_period_days
    }

    /// Returns the full current state.
    pub fn snapshot(&self) -> &Library {
        &self.library
    }

    /// Returns all books.
    pub fn books(&self) -> &[Book] {
        &self.library.books
    }

    /// Returns all users.
    pub fn users(&self) -> &[User] {
        &self.library.users
    }

    /// Returns the transaction history in insertion order.
    pub fn transactions(&self) -> &[Transaction] {
        &self.library.transactions
    }

    /// Looks up a book by ID.
    pub fn book(&self, id: &str) -> Option<&Book> {
        self.library.book(id)
    }

    /// Looks up a user by ID.
    pub fn user(&self, id: &str) -> Option<&User> {
        self.library.user(id)
    }

    /// Audits the current state for invariant violations.
    pub fn check_integrity(&self) -> Vec<IntegrityIssue> {
        integrity::check(&self.library)
    }

    /// Computes the due date for a loan issued at `issued`, adding calendar
    /// days in the local time zone.
    pub fn due_date(&self, issued: DateTime<Utc>) -> DateTime<Utc> {
        due_date_for(&issued.with_timezone(&Local), self.loan_period_days).with_timezone(&Utc)
    }
}

impl<M: KeyValueMedium, C: Clock> LibraryStore<M, C> {
    /// Adds a new, available book.
    ///
    /// # Errors
    ///
    /// Returns an error if the draft fails validation.
    pub fn add_book(&mut self, draft: BookDraft) -> Result<Book> {
        let id = identity::next_id(
            self.clock.utc(),
            self.library.books.iter().map(|b| b.id.as_str()),
        );
        let book = Book::from_draft(id, draft);
        book.validate()?;

        let mut next = self.library.clone();
        next.books.push(book.clone());
        self.commit(next);

        tracing::info!(book_id = %book.id, title = %book.title, "added book");
        Ok(book)
    }

    /// Replaces the catalogue fields of an existing book.
    ///
    /// Status and holder only change through [`issue_book`](Self::issue_book)
    /// and [`return_book`](Self::return_book).
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No book has the given ID
    /// - The candidate changes status or holder
    /// - The candidate fails validation
    pub fn update_book(&mut self, mut book: Book) -> Result<Book> {
        let pos = self
            .library
            .books
            .iter()
            .position(|b| b.id == book.id)
            .ok_or_else(|| Error::BookNotFound(book.id.clone()))?;

        let existing = &self.library.books[pos];
        if existing.status != book.status || existing.issued_to != book.issued_to {
            return Err(Error::StatusLocked(book.id));
        }

        book.title = book.title.trim().to_string();
        book.author = book.author.trim().to_string();
        book.genre = book.genre.trim().to_string();
        book.validate()?;

        let mut next = self.library.clone();
        next.books[pos] = book.clone();
        self.commit(next);

        tracing::info!(book_id = %book.id, "updated book");
        Ok(book)
    }

    /// Removes a book that is not on loan.
    ///
    /// # Errors
    ///
    /// Returns an error if the book does not exist or is issued.
    pub fn delete_book(&mut self, id: &str) -> Result<Book> {
        let pos = self
            .library
            .books
            .iter()
            .position(|b| b.id == id)
            .ok_or_else(|| Error::BookNotFound(id.to_string()))?;

        if self.library.books[pos].status == BookStatus::Issued {
            return Err(Error::BookOnLoan(id.to_string()));
        }

        let mut next = self.library.clone();
        let removed = next.books.remove(pos);
        self.commit(next);

        tracing::info!(book_id = %id, "deleted book");
        Ok(removed)
    }

    /// Adds a new member with no loans.
    ///
    /// # Errors
    ///
    /// Returns an error if the draft fails validation.
    pub fn add_user(&mut self, draft: UserDraft) -> Result<User> {
        let id = identity::next_id(
            self.clock.utc(),
            self.library.users.iter().map(|u| u.id.as_str()),
        );
        let user = User::from_draft(id, draft);
        user.validate()?;

        let mut next = self.library.clone();
        next.users.push(user.clone());
        self.commit(next);

        tracing::info!(user_id = %user.id, name = %user.name, "added user");
        Ok(user)
    }

    /// Replaces the contact fields of an existing user.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No user has the given ID
    /// - The candidate's issued books differ from the stored ones
    /// - The candidate fails validation
    pub fn update_user(&mut self, mut user: User) -> Result<User> {
        let pos = self
            .library
            .users
            .iter()
            .position(|u| u.id == user.id)
            .ok_or_else(|| Error::UserNotFound(user.id.clone()))?;

        if self.library.users[pos].issued_books != user.issued_books {
            return Err(Error::LoansLocked(user.id));
        }

        user.normalize();
        user.validate()?;

        let mut next = self.library.clone();
        next.users[pos] = user.clone();
        self.commit(next);

        tracing::info!(user_id = %user.id, "updated user");
        Ok(user)
    }

    /// Removes a user with no outstanding loans.
    ///
    /// # Errors
    ///
    /// Returns an error if the user does not exist or holds books.
    pub fn delete_user(&mut self, id: &str) -> Result<User> {
        let pos = self
            .library
            .users
            .iter()
            .position(|u| u.id == id)
            .ok_or_else(|| Error::UserNotFound(id.to_string()))?;

        let loans = self.library.users[pos].issued_books.len();
        if loans > 0 {
            return Err(Error::UserHasLoans(id.to_string(), loans));
        }

        let mut next = self.library.clone();
        let removed = next.users.remove(pos);
        self.commit(next);

        tracing::info!(user_id = %id, "deleted user");
        Ok(removed)
    }
}

impl<M: KeyValueMedium, C: Clock> LibraryStore<M, C> {
    /// Issues an available book to a user.
    ///
    /// Marks the book issued, appends the loan to the user and records an
    /// issue transaction, all in one commit.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The book or the user does not exist
    /// - The book is not available
    pub fn issue_book(&mut self, book_id: &str, user_id: &str) -> Result<Transaction> {
        let book = self
            .library
            .book(book_id)
            .ok_or_else(|| Error::BookNotFound(book_id.to_string()))?;
        if self.library.user(user_id).is_none() {
            return Err(Error::UserNotFound(user_id.to_string()));
        }
        book.status
            .can_transition_to(BookStatus::Issued)
            .map_err(|_| Error::BookNotAvailable(book_id.to_string()))?;

        let now = self.clock.utc();
        let due = self.due_date(now);

        let mut next = self.library.clone();
        for book in next.books.iter_mut().filter(|b| b.id == book_id) {
            book.status = BookStatus::Issued;
            book.issued_to = Some(user_id.to_string());
        }
        for user in next.users.iter_mut().filter(|u| u.id == user_id) {
            user.issued_books.push(IssuedBook {
                book_id: book_id.to_string(),
                issue_date: now,
                due_date: due,
            });
        }

        let transaction = Transaction {
            id: identity::next_id(now, next.transactions.iter().map(|t| t.id.as_str())),
            book_id: book_id.to_string(),
            user_id: user_id.to_string(),
            kind: TransactionKind::Issue,
            date: now,
            due_date: Some(due),
        };
        next.transactions.push(transaction.clone());
        self.commit(next);

        tracing::info!(book_id, user_id, due = %due, "issued book");
        Ok(transaction)
    }

    /// Returns an issued book from the user holding it.
    ///
    /// Marks the book available, removes the loan from the user and records a
    /// return transaction, all in one commit. A return naming the recorded
    /// holder succeeds even if that user record is gone.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The book does not exist
    /// - The book is not issued
    /// - The book is issued to a different user
    pub fn return_book(&mut self, book_id: &str, user_id: &str) -> Result<Transaction> {
        let book = self
            .library
            .book(book_id)
            .ok_or_else(|| Error::BookNotFound(book_id.to_string()))?;
        book.status
            .can_transition_to(BookStatus::Available)
            .map_err(|_| Error::BookNotIssued(book_id.to_string()))?;

        if let Some(holder) = book.issued_to.as_deref() {
            if holder != user_id {
                return Err(Error::LoanMismatch {
                    book_id: book_id.to_string(),
                    user_id: user_id.to_string(),
                    holder: holder.to_string(),
                });
            }
        }
        if self.library.user(user_id).is_none() {
            tracing::warn!(book_id, user_id, "returning book held by unknown user");
        }

        let now = self.clock.utc();
        let mut next = self.library.clone();
        for book in next.books.iter_mut().filter(|b| b.id == book_id) {
            book.status = BookStatus::Available;
            book.issued_to = None;
        }
        for user in next.users.iter_mut().filter(|u| u.id == user_id) {
            user.issued_books.retain(|loan| loan.book_id != book_id);
        }

        let transaction = Transaction {
            id: identity::next_id(now, next.transactions.iter().map(|t| t.id.as_str())),
            book_id: book_id.to_string(),
            user_id: user_id.to_string(),
            kind: TransactionKind::Return,
            date: now,
            due_date: None,
        };
        next.transactions.push(transaction.clone());
        self.commit(next);

        tracing::info!(book_id, user_id, "returned book");
        Ok(transaction)
    }

    /// Loads `seed` into every collection that is currently empty.
    ///
    /// Calling this again once data exists changes nothing.
    pub fn seed(&mut self, seed: &SeedData) -> SeedReport {
        let mut next = self.library.clone();
        let report = seed_if_empty(&mut next, seed);
        if !report.is_noop() {
            self.commit(next);
            tracing::info!(?report, "seeded sample data");
        }
        report
    }
}
