// Rust guideline compliant 2026-10-14

//! Integration tests for CLI commands.

use stacks_app::{AppError, ErrorCode, RepoContext};
use stacks_cli::commands::{self, user::UserChanges, CommandContext};
use stacks_cli::create_formatter;
use stacks_core::{BookDraft, BookStatus, Config, Error as CoreError, OutputFormat, UserDraft};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn context(root: &Path) -> CommandContext {
    CommandContext::new(
        Some(root.to_path_buf()),
        create_formatter(OutputFormat::Plain, false, true),
    )
}

/// Creates a repository with the sample catalogue loaded.
fn seeded_repo() -> (TempDir, CommandContext) {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let ctx = context(temp_dir.path());
    commands::init::execute(&ctx, true).expect("init should succeed");
    (temp_dir, ctx)
}

fn reopen(root: &Path) -> stacks_core::LibraryStore<stacks_core::DirectoryMedium> {
    let repo = RepoContext::discover(Some(root)).expect("repo should exist");
    repo.open_store(&Config::default())
        .expect("store should open")
}

fn core_error(err: &anyhow::Error) -> &CoreError {
    err.downcast_ref::<CoreError>()
        .expect("error should come from the store")
}

#[test]
fn test_init_creates_correct_structure() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let ctx = context(temp_dir.path());

    commands::init::execute(&ctx, false).expect("init should succeed");

    let stacks_dir = temp_dir.path().join(".stacks");
    assert!(stacks_dir.is_dir(), ".stacks directory should exist");
    let config_content =
        fs::read_to_string(stacks_dir.join("config.toml")).expect("Failed to read config.toml");
    assert!(
        config_content.contains("loan_period_days = 14"),
        "config.toml should contain the default loan period"
    );
    assert!(reopen(temp_dir.path()).snapshot().is_empty());
}

#[test]
fn test_init_with_seed_writes_single_snapshot() {
    let (temp_dir, _ctx) = seeded_repo();
    let stacks_dir = temp_dir.path().join(".stacks");

    assert!(stacks_dir.join("library.json").exists());
    assert!(!stacks_dir.join("books.json").exists());

    let store = reopen(temp_dir.path());
    assert_eq!(store.books().len(), 10);
    assert_eq!(store.users().len(), 7);
    assert!(store.transactions().is_empty());
}

#[test]
fn test_commands_require_init() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let ctx = context(temp_dir.path());

    let err = commands::dashboard::execute(&ctx).unwrap_err();
    let app = err
        .downcast_ref::<AppError>()
        .expect("error should be an application error");
    assert_eq!(app.code(), ErrorCode::RepoNotInitialized);
}

#[test]
fn test_seed_twice_is_noop() {
    let (temp_dir, ctx) = seeded_repo();
    let before = reopen(temp_dir.path()).snapshot().clone();

    commands::seed::execute(&ctx).expect("seed should succeed");

    assert_eq!(reopen(temp_dir.path()).snapshot(), &before);
}

#[test]
fn test_issue_and_return_flow() {
    let (temp_dir, ctx) = seeded_repo();

    commands::circulation::issue(&ctx, "7", "2").expect("issue should succeed");
    let store = reopen(temp_dir.path());
    let book = store.book("7").expect("book 7 exists");
    assert_eq!(book.status, BookStatus::Issued);
    assert_eq!(book.issued_to.as_deref(), Some("2"));
    assert!(store.user("2").expect("user 2 exists").holds("7"));
    assert_eq!(store.transactions().len(), 1);

    commands::circulation::return_book(&ctx, "7", "2").expect("return should succeed");
    let store = reopen(temp_dir.path());
    let book = store.book("7").expect("book 7 exists");
    assert_eq!(book.status, BookStatus::Available);
    assert!(book.issued_to.is_none());
    assert!(store.user("2").expect("user 2 exists").issued_books.is_empty());
    assert_eq!(store.transactions().len(), 2);
    assert!(store.check_integrity().is_empty());
}

#[test]
fn test_issue_rejections_leave_state_unchanged() {
    let (temp_dir, ctx) = seeded_repo();
    commands::circulation::issue(&ctx, "1", "1").expect("issue should succeed");
    let before = reopen(temp_dir.path()).snapshot().clone();

    let err = commands::circulation::issue(&ctx, "1", "2").unwrap_err();
    assert!(matches!(core_error(&err), CoreError::BookNotAvailable(_)));

    let err = commands::circulation::issue(&ctx, "404", "2").unwrap_err();
    assert!(matches!(core_error(&err), CoreError::BookNotFound(_)));

    let err = commands::circulation::issue(&ctx, "2", "404").unwrap_err();
    assert!(matches!(core_error(&err), CoreError::UserNotFound(_)));

    let err = commands::circulation::return_book(&ctx, "1", "3").unwrap_err();
    assert!(matches!(core_error(&err), CoreError::LoanMismatch { .. }));

    assert_eq!(reopen(temp_dir.path()).snapshot(), &before);
}

#[test]
fn test_book_add_update_delete() {
    let (temp_dir, ctx) = seeded_repo();

    commands::book::add(
        &ctx,
        BookDraft {
            title: "  Structure and Interpretation of Computer Programs ".to_string(),
            author: "Harold Abelson, Gerald Jay Sussman".to_string(),
            genre: "Computer Science".to_string(),
        },
    )
    .expect("add should succeed");

    let store = reopen(temp_dir.path());
    let added = store.books().last().expect("book was appended").clone();
    assert_eq!(added.title, "Structure and Interpretation of Computer Programs");
    assert_eq!(added.status, BookStatus::Available);

    commands::book::update(&ctx, &added.id, None, None, Some("Classics".to_string()))
        .expect("update should succeed");
    let store = reopen(temp_dir.path());
    let updated = store.book(&added.id).expect("book still exists");
    assert_eq!(updated.genre, "Classics");
    assert_eq!(updated.title, added.title);

    commands::book::delete(&ctx, &added.id).expect("delete should succeed");
    let store = reopen(temp_dir.path());
    assert!(store.book(&added.id).is_none());
    assert_eq!(store.books().len(), 10);
}

#[test]
fn test_book_add_rejects_blank_title() {
    let (temp_dir, ctx) = seeded_repo();

    let err = commands::book::add(
        &ctx,
        BookDraft {
            title: "   ".to_string(),
            author: "Someone".to_string(),
            genre: String::new(),
        },
    )
    .unwrap_err();

    assert!(matches!(core_error(&err), CoreError::InvalidRecord(_)));
    assert_eq!(reopen(temp_dir.path()).books().len(), 10);
}

#[test]
fn test_delete_issued_book_rejected() {
    let (temp_dir, ctx) = seeded_repo();
    commands::circulation::issue(&ctx, "3", "4").expect("issue should succeed");

    let err = commands::book::delete(&ctx, "3").unwrap_err();
    assert!(matches!(core_error(&err), CoreError::BookOnLoan(_)));
    assert!(reopen(temp_dir.path()).book("3").is_some());
}

#[test]
fn test_user_delete_with_and_without_loans() {
    let (temp_dir, ctx) = seeded_repo();
    commands::circulation::issue(&ctx, "5", "6").expect("issue should succeed");

    let err = commands::user::delete(&ctx, "6").unwrap_err();
    assert!(matches!(core_error(&err), CoreError::UserHasLoans(_, 1)));

    commands::user::delete(&ctx, "7").expect("delete should succeed");
    let store = reopen(temp_dir.path());
    assert_eq!(store.users().len(), 6);
    assert!(store.user("7").is_none());
    assert!(store.user("6").is_some());
}

#[test]
fn test_user_add_and_update() {
    let (temp_dir, ctx) = seeded_repo();

    commands::user::add(
        &ctx,
        UserDraft {
            name: "Meera Iyer".to_string(),
            email: "meera.iyer@example.com".to_string(),
            phone: Some("2109876543".to_string()),
            address: None,
        },
    )
    .expect("add should succeed");

    let store = reopen(temp_dir.path());
    let added = store.users().last().expect("user was appended").clone();
    assert_eq!(added.name, "Meera Iyer");
    assert!(added.issued_books.is_empty());

    commands::user::update(
        &ctx,
        &added.id,
        UserChanges {
            phone: Some(String::new()),
            address: Some("12 Residency Road, Bangalore".to_string()),
            ..UserChanges::default()
        },
    )
    .expect("update should succeed");

    let store = reopen(temp_dir.path());
    let updated = store.user(&added.id).expect("user still exists");
    assert_eq!(updated.phone, None);
    assert_eq!(updated.address.as_deref(), Some("12 Residency Road, Bangalore"));
}

#[test]
fn test_user_add_rejects_bad_email() {
    let (_temp_dir, ctx) = seeded_repo();

    let err = commands::user::add(
        &ctx,
        UserDraft {
            name: "No Email".to_string(),
            email: "not-an-email".to_string(),
            phone: None,
            address: None,
        },
    )
    .unwrap_err();
    assert!(matches!(core_error(&err), CoreError::InvalidRecord(_)));
}

#[test]
fn test_read_commands_succeed() {
    let (_temp_dir, ctx) = seeded_repo();
    commands::circulation::issue(&ctx, "2", "1").expect("issue should succeed");

    commands::book::list(&ctx, Some("clean".to_string()), Some("issued".to_string()))
        .expect("book list should succeed");
    commands::book::show(&ctx, "2").expect("book show should succeed");
    commands::user::list(&ctx, Some("sharma".to_string())).expect("user list should succeed");
    commands::user::show(&ctx, "1").expect("user show should succeed");
    commands::history::execute(&ctx, Some("1".to_string()), None, Some(5))
        .expect("history should succeed");
    commands::dashboard::execute(&ctx).expect("dashboard should succeed");
    commands::doctor::execute(&ctx).expect("doctor should pass on a consistent library");
}

#[test]
fn test_book_list_rejects_unknown_status() {
    let (_temp_dir, ctx) = seeded_repo();

    let err = commands::book::list(&ctx, None, Some("lost".to_string())).unwrap_err();
    let app = err
        .downcast_ref::<AppError>()
        .expect("error should be an application error");
    assert_eq!(app.code(), ErrorCode::InvalidInput);
}

#[test]
fn test_show_unknown_records() {
    let (_temp_dir, ctx) = seeded_repo();

    let err = commands::book::show(&ctx, "404").unwrap_err();
    assert!(matches!(core_error(&err), CoreError::BookNotFound(_)));

    let err = commands::user::show(&ctx, "404").unwrap_err();
    assert!(matches!(core_error(&err), CoreError::UserNotFound(_)));
}

#[test]
fn test_doctor_reports_corrupted_snapshot() {
    let (temp_dir, ctx) = seeded_repo();
    let snapshot_path = temp_dir.path().join(".stacks").join("library.json");

    let mut library: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&snapshot_path).expect("snapshot exists"))
            .expect("snapshot is valid JSON");
    library["books"][0]["status"] = serde_json::json!("Issued");
    fs::write(&snapshot_path, library.to_string()).expect("Failed to write snapshot");

    let err = commands::doctor::execute(&ctx).unwrap_err();
    assert!(err.to_string().contains("1 integrity issue(s) found"));
}

#[test]
fn test_corrupt_snapshot_reads_as_empty() {
    let (temp_dir, ctx) = seeded_repo();
    fs::write(temp_dir.path().join(".stacks").join("library.json"), "{ not json")
        .expect("Failed to write snapshot");

    commands::dashboard::execute(&ctx).expect("dashboard should succeed");
    assert!(reopen(temp_dir.path()).snapshot().is_empty());
}

#[test]
fn test_loan_period_from_config() {
    let (temp_dir, ctx) = seeded_repo();
    let stacks_dir = temp_dir.path().join(".stacks");
    let config = Config {
        loan_period_days: 7,
        ..Config::default()
    };
    config.save(&stacks_dir).expect("Failed to save config");

    commands::circulation::issue(&ctx, "4", "3").expect("issue should succeed");

    let store = reopen(temp_dir.path());
    let loan = &store.user("3").expect("user 3 exists").issued_books[0];
    let days = (loan.due_date - loan.issue_date).num_days();
    // DST transitions in the local zone may shift the instant by an hour.
    assert!((6..=7).contains(&days), "expected a one week loan, got {} days", days);
}
