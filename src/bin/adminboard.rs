//! adminboard - command-line driver for the dashboard view models.
//!
//! Usage:
//!   adminboard users                          # first page of the users table
//!   adminboard users -f an -s last-active:desc
//!   adminboard --page-size 3 users --page 2
//!   adminboard notifications --unread
//!   adminboard notifications --mark-read 1
//!   adminboard login --email admin@example.com --password secret
//!   adminboard --seed ./seed.json users       # custom seed data

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing::{Level, error};
use tracing_subscriber::EnvFilter;

use adminboard::auth::LoginForm;
use adminboard::config::DashboardConfig;
use adminboard::models::UserColumn;
use adminboard::notifications::NotificationTab;
use adminboard::session::{Action, Dashboard, Theme};
use adminboard::table::{DEFAULT_PAGE_SIZE, SortDirection};
use adminboard::view::text::{render_notifications, render_table};

/// Admin dashboard view models on the command line.
#[derive(Parser)]
#[command(name = "adminboard", about = "Admin dashboard view models", version)]
struct Args {
    /// JSON seed file with `notifications` and `users` arrays.
    /// Uses the built-in seed data when omitted.
    #[arg(long, value_name = "PATH", env = "ADMINBOARD_SEED")]
    seed: Option<PathBuf>,

    /// Rows per page of the users table.
    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE, env = "ADMINBOARD_PAGE_SIZE")]
    page_size: usize,

    /// Initial theme (light or dark).
    #[arg(long, default_value = "light", value_parser = parse_theme)]
    theme: Theme,

    /// Increase logging verbosity (-v for debug, -vv for trace). Default is info level.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode - only show errors.
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show the users table.
    Users {
        /// Case-insensitive name search.
        #[arg(short, long)]
        filter: Option<String>,

        /// Sort as COLUMN[:asc|desc]; columns: name, role, status, last-active.
        #[arg(short, long, value_parser = parse_sort)]
        sort: Option<(UserColumn, SortDirection)>,

        /// Page to show (1-based). Out-of-range values are clamped.
        #[arg(short, long, default_value_t = 1, allow_negative_numbers = true)]
        page: i64,
    },
    /// Show the notification popover.
    Notifications {
        /// Only unread notifications.
        #[arg(long)]
        unread: bool,

        /// Mark a notification as read before showing the list. Repeatable.
        #[arg(long = "mark-read", value_name = "ID")]
        mark_read: Vec<i64>,

        /// Mark every notification as read before showing the list.
        #[arg(long)]
        mark_all_read: bool,
    },
    /// Validate login form input.
    Login {
        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,
    },
}

/// Parses `COLUMN[:asc|desc]`. Direction defaults to ascending.
fn parse_sort(s: &str) -> Result<(UserColumn, SortDirection), String> {
    let (column, direction) = match s.split_once(':') {
        Some((c, d)) => (c, Some(d)),
        None => (s, None),
    };
    let column = UserColumn::parse(column).ok_or_else(|| {
        format!(
            "unknown column '{}' (expected name, role, status, last-active)",
            column
        )
    })?;
    let direction = match direction.map(|d| d.trim().to_lowercase()) {
        None => SortDirection::Ascending,
        Some(d) if d == "asc" => SortDirection::Ascending,
        Some(d) if d == "desc" => SortDirection::Descending,
        Some(d) => return Err(format!("invalid direction '{}' (expected asc or desc)", d)),
    };
    Ok((column, direction))
}

fn parse_theme(s: &str) -> Result<Theme, String> {
    Theme::parse(s).ok_or_else(|| format!("invalid theme '{}' (expected light or dark)", s))
}

/// Initializes the tracing subscriber with the appropriate log level.
/// Default level is INFO. Use -q for quiet mode (errors only).
fn init_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        Level::ERROR
    } else {
        match verbose {
            0 => Level::INFO,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    };

    let mut filter = EnvFilter::from_default_env();
    if let Ok(directive) = format!("adminboard={}", level).parse() {
        filter = filter.add_directive(directive);
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let args = Args::parse();

    init_logging(args.verbose, args.quiet);

    let mut config = DashboardConfig::default()
        .with_page_size(args.page_size)
        .with_theme(args.theme);
    if let Some(path) = &args.seed {
        config = config.with_seed_path(path);
    }

    let mut dashboard = match Dashboard::from_config(&config) {
        Ok(d) => d,
        Err(e) => {
            error!("failed to load seed data: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    match args.command {
        Command::Users { filter, sort, page } => {
            if let Some(f) = filter {
                dashboard.dispatch(Action::SetNameFilter(f));
            }
            if let Some((column, direction)) = sort {
                dashboard.dispatch(Action::SetSort(column, direction));
            }
            dashboard.dispatch(Action::GoToPage(page.saturating_sub(1)));
            print!("{}", render_table(&dashboard.users_view()));
        }
        Command::Notifications {
            unread,
            mark_read,
            mark_all_read,
        } => {
            for id in mark_read {
                dashboard.dispatch(Action::MarkAsRead(id));
            }
            if mark_all_read {
                dashboard.dispatch(Action::MarkAllAsRead);
            }
            if unread {
                dashboard.dispatch(Action::SelectNotificationTab(NotificationTab::Unread));
            }
            print!("{}", render_notifications(&dashboard.notifications_view()));
        }
        Command::Login { email, password } => match LoginForm::new(email, password).submit() {
            Ok(target) => println!("Signed in, redirecting to {}", target),
            Err(errors) => {
                for e in &errors {
                    eprintln!("{}: {}", e.field(), e);
                }
                process::exit(1);
            }
        },
    }
}
