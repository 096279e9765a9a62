// Rust guideline compliant 2026-10-14

//! Stacks CLI Application
//!
//! Command-line interface for the Stacks library management system.

use clap::Parser;
use stacks_app::{AppError, ErrorEnvelope, RepoContext};
use stacks_cli::commands::{self, user::UserChanges, CommandContext};
use stacks_cli::{create_formatter, should_use_color};
use stacks_core::{BookDraft, Error as CoreError, OutputFormat, UserDraft};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::Level;

#[derive(Parser, Debug)]
#[command(
    name = "stx",
    version,
    about = "Stacks: a small library catalogue and circulation desk",
    long_about = "Stacks tracks books, members and issue/return transactions in a local .stacks directory.",
    after_help = "Examples:\n  stx init --seed\n  stx book list --search silberschatz --status available\n  stx issue 7 2\n  stx user show 2\n  stx return 7 2\n  stx dashboard\n"
)]
struct Cli {
    /// Enable JSON output
    #[arg(long, global = true)]
    json: bool,

    /// Output format
    #[arg(long, value_enum, global = true)]
    format: Option<FormatArg>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Display timestamps as absolute dates
    #[arg(long, global = true)]
    absolute_time: bool,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Repository root (defaults to the current directory)
    #[arg(long, global = true)]
    root: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum FormatArg {
    Json,
    Table,
    Plain,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Table => OutputFormat::Table,
            FormatArg::Plain => OutputFormat::Plain,
        }
    }
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Initialize a new Stacks repository
    Init {
        /// Load the sample catalogue
        #[arg(long)]
        seed: bool,
    },

    /// Load the sample catalogue into empty collections
    Seed,

    /// Manage books
    Book {
        #[command(subcommand)]
        action: BookAction,
    },

    /// Manage users
    User {
        #[command(subcommand)]
        action: UserAction,
    },

    /// Issue a book to a user
    Issue {
        /// Book ID
        book_id: String,

        /// User ID
        user_id: String,
    },

    /// Return a book from a user
    Return {
        /// Book ID
        book_id: String,

        /// User ID
        user_id: String,
    },

    /// Show transaction history, newest first
    History {
        /// Only transactions for this user
        #[arg(long)]
        user: Option<String>,

        /// Only transactions for this book
        #[arg(long)]
        book: Option<String>,

        /// Maximum number of entries
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Show catalogue counters and recent activity
    Dashboard,

    /// Run integrity checks
    Doctor,
}

#[derive(Debug, clap::Subcommand)]
enum BookAction {
    /// Add a book
    Add {
        /// Title
        #[arg(long)]
        title: String,

        /// Author or authors
        #[arg(long)]
        author: String,

        /// Genre
        #[arg(long, default_value = "")]
        genre: String,
    },

    /// Edit a book's title, author or genre
    Update {
        /// Book ID
        id: String,

        /// New title
        #[arg(long)]
        title: Option<String>,

        /// New author
        #[arg(long)]
        author: Option<String>,

        /// New genre
        #[arg(long)]
        genre: Option<String>,
    },

    /// Delete a book
    Delete {
        /// Book ID
        id: String,
    },

    /// List books
    List {
        /// Match title, author or genre (case-insensitive)
        #[arg(long)]
        search: Option<String>,

        /// Filter by status
        #[arg(long, value_parser = ["all", "available", "issued"])]
        status: Option<String>,
    },

    /// Show a book and its history
    Show {
        /// Book ID
        id: String,
    },
}

#[derive(Debug, clap::Subcommand)]
enum UserAction {
    /// Register a user
    Add {
        /// Full name
        #[arg(long)]
        name: String,

        /// Email address
        #[arg(long)]
        email: String,

        /// Phone number
        #[arg(long)]
        phone: Option<String>,

        /// Postal address
        #[arg(long)]
        address: Option<String>,
    },

    /// Edit a user's contact details
    Update {
        /// User ID
        id: String,

        /// New name
        #[arg(long)]
        name: Option<String>,

        /// New email
        #[arg(long)]
        email: Option<String>,

        /// New phone (empty to clear)
        #[arg(long)]
        phone: Option<String>,

        /// New address (empty to clear)
        #[arg(long)]
        address: Option<String>,
    },

    /// Delete a user
    Delete {
        /// User ID
        id: String,
    },

    /// List users
    List {
        /// Match name or email (case-insensitive)
        #[arg(long)]
        search: Option<String>,
    },

    /// Show a user and their loans
    Show {
        /// User ID
        id: String,
    },
}

fn parse_log_level(level: &str) -> anyhow::Result<Level> {
    match level.to_lowercase().as_str() {
        "error" => Ok(Level::ERROR),
        "warn" => Ok(Level::WARN),
        "info" => Ok(Level::INFO),
        "debug" => Ok(Level::DEBUG),
        "trace" => Ok(Level::TRACE),
        other => anyhow::bail!("Invalid log level in STACKS_LOG: {}", other),
    }
}

fn init_tracing(verbose: bool) -> anyhow::Result<()> {
    let level = if verbose {
        Level::DEBUG
    } else {
        match std::env::var("STACKS_LOG") {
            Ok(value) => parse_log_level(&value)?,
            Err(_) => Level::WARN,
        }
    };

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
    Ok(())
}

/// Picks the output format: `--format`, then `--json`, then the repository
/// config, then table.
fn resolve_format(cli: &Cli) -> OutputFormat {
    if let Some(format) = cli.format {
        return format.into();
    }
    if cli.json {
        return OutputFormat::Json;
    }
    RepoContext::discover(cli.root.as_deref())
        .and_then(|repo| repo.load_config())
        .map(|config| config.output_format)
        .unwrap_or_default()
}

fn run(cli: Cli, ctx: &CommandContext) -> anyhow::Result<()> {
    match cli.command {
        Some(Commands::Init { seed }) => commands::init::execute(ctx, seed),
        Some(Commands::Seed) => commands::seed::execute(ctx),
        Some(Commands::Book { action }) => match action {
            BookAction::Add {
                title,
                author,
                genre,
            } => commands::book::add(
                ctx,
                BookDraft {
                    title,
                    author,
                    genre,
                },
            ),
            BookAction::Update {
                id,
                title,
                author,
                genre,
            } => commands::book::update(ctx, &id, title, author, genre),
            BookAction::Delete { id } => commands::book::delete(ctx, &id),
            BookAction::List { search, status } => commands::book::list(ctx, search, status),
            BookAction::Show { id } => commands::book::show(ctx, &id),
        },
        Some(Commands::User { action }) => match action {
            UserAction::Add {
                name,
                email,
                phone,
                address,
            } => commands::user::add(
                ctx,
                UserDraft {
                    name,
                    email,
                    phone,
                    address,
                },
            ),
            UserAction::Update {
                id,
                name,
                email,
                phone,
                address,
            } => commands::user::update(
                ctx,
                &id,
                UserChanges {
                    name,
                    email,
                    phone,
                    address,
                },
            ),
            UserAction::Delete { id } => commands::user::delete(ctx, &id),
            UserAction::List { search } => commands::user::list(ctx, search),
            UserAction::Show { id } => commands::user::show(ctx, &id),
        },
        Some(Commands::Issue { book_id, user_id }) => {
            commands::circulation::issue(ctx, &book_id, &user_id)
        }
        Some(Commands::Return { book_id, user_id }) => {
            commands::circulation::return_book(ctx, &book_id, &user_id)
        }
        Some(Commands::History { user, book, limit }) => {
            commands::history::execute(ctx, user, book, limit)
        }
        Some(Commands::Dashboard) => commands::dashboard::execute(ctx),
        Some(Commands::Doctor) => commands::doctor::execute(ctx),
        None => {
            println!("Use --help for usage information");
            Ok(())
        }
    }
}

/// Recovers the application error behind an `anyhow` chain, if any.
fn app_error(err: anyhow::Error) -> Result<AppError, anyhow::Error> {
    match err.downcast::<AppError>() {
        Ok(app) => Ok(app),
        Err(err) => err.downcast::<CoreError>().map(AppError::from),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = init_tracing(cli.verbose) {
        eprintln!("Error: {}", err);
        return ExitCode::FAILURE;
    }

    let use_color = !cli.no_color && should_use_color();
    let format = resolve_format(&cli);
    let formatter = create_formatter(format, use_color, cli.absolute_time);
    let ctx = CommandContext::new(cli.root.clone(), formatter);

    match run(cli, &ctx) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if format == OutputFormat::Json {
                match app_error(err) {
                    Ok(app) => {
                        let envelope = ErrorEnvelope::from_error(&app);
                        match serde_json::to_string_pretty(&envelope) {
                            Ok(json) => eprintln!("{}", json),
                            Err(_) => eprintln!("{}", ctx.formatter.format_error(&app.to_string())),
                        }
                    }
                    Err(other) => eprintln!("{}", ctx.formatter.format_error(&format!("{:#}", other))),
                }
            } else {
                eprintln!("{}", ctx.formatter.format_error(&format!("{:#}", err)));
            }
            ExitCode::FAILURE
        }
    }
}
