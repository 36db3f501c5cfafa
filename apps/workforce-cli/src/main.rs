//! Workforce CLI - profile, leave, manual time, approvals and timesheets.

mod commands;
mod output;

use chrono::{NaiveDate, NaiveTime};
use clap::{Parser, Subcommand};
use commands::{AppContext, FilterArgs};
use tracing::debug;
use workforce_config::{init_logging, Config, Paths};
use workforce_endpoints::{ApprovalAction, NewManualTimeRequest, ProfileUpdate};

const SESSION_ENDED_NOTICE: &str =
    "Your session has ended. Run 'workforce login' to sign in again.";

/// Workforce CLI - self-service HR from the terminal.
#[derive(Parser)]
#[command(name = "workforce")]
#[command(about = "Workforce CLI for leave, time and approvals")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format (text or json)
    #[arg(short, long, default_value = "text", global = true)]
    format: output::OutputFormat,

    /// Log level (trace, debug, info, warn, error); defaults to the configured level
    #[arg(long, global = true)]
    log_level: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Login with email and password
    Login {
        /// Email address; prompted for when omitted
        #[arg(short, long)]
        email: Option<String>,
    },

    /// Logout and clear session
    Logout,

    /// Check authentication status
    Status,

    /// View or edit your profile
    Profile {
        #[command(subcommand)]
        command: ProfileCommands,
    },

    /// Leave types and requests
    Leave {
        #[command(subcommand)]
        command: LeaveCommands,
    },

    /// Manual time corrections
    Time {
        #[command(subcommand)]
        command: TimeCommands,
    },

    /// Requests waiting for your decision
    Approvals {
        #[command(subcommand)]
        command: ApprovalCommands,
    },

    /// Logged hours per day for a date range
    Timesheet {
        /// First day (YYYY-MM-DD)
        #[arg(long)]
        from: NaiveDate,
        /// Last day (YYYY-MM-DD)
        #[arg(long)]
        to: NaiveDate,
    },
}

#[derive(Subcommand)]
enum ProfileCommands {
    /// Show your profile
    Show,
    /// Update profile fields
    Update {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        department: Option<String>,
    },
}

#[derive(Subcommand)]
enum LeaveCommands {
    /// List leave types
    Types,
    /// List your leave requests
    List {
        #[command(flatten)]
        filter: FilterArgs,
    },
    /// Apply for leave
    Apply {
        /// Leave type ID (see `workforce leave types`)
        #[arg(short = 't', long = "type")]
        leave_type: String,
        /// First day (YYYY-MM-DD)
        #[arg(long)]
        from: NaiveDate,
        /// Last day (YYYY-MM-DD)
        #[arg(long)]
        to: NaiveDate,
        #[arg(short, long)]
        reason: String,
    },
    /// Cancel a leave request
    Cancel {
        /// Leave request ID
        id: String,
    },
}

#[derive(Subcommand)]
enum TimeCommands {
    /// List your manual time requests
    List {
        #[command(flatten)]
        filter: FilterArgs,
    },
    /// Submit a manual time request
    Submit {
        /// Day (YYYY-MM-DD)
        #[arg(long)]
        date: NaiveDate,
        /// Clock-in time (HH:MM)
        #[arg(long = "in", value_parser = commands::parse_clock)]
        clock_in: NaiveTime,
        /// Clock-out time (HH:MM)
        #[arg(long = "out", value_parser = commands::parse_clock)]
        clock_out: NaiveTime,
        #[arg(short, long)]
        reason: String,
    },
}

#[derive(Subcommand)]
enum ApprovalCommands {
    /// List pending approvals
    List {
        #[command(flatten)]
        filter: FilterArgs,
    },
    /// Approve a request
    Approve {
        id: String,
        #[arg(short, long)]
        comment: Option<String>,
    },
    /// Reject a request
    Reject {
        id: String,
        #[arg(short, long)]
        comment: Option<String>,
    },
}

async fn run(command: Commands, ctx: &AppContext, format: &output::OutputFormat) -> anyhow::Result<()> {
    match command {
        Commands::Login { email } => commands::login(ctx, email, format).await,
        Commands::Logout => commands::logout(ctx, format).await,
        Commands::Status => commands::status(ctx, format).await,
        Commands::Profile { command } => match command {
            ProfileCommands::Show => commands::profile_show(ctx, format).await,
            ProfileCommands::Update {
                name,
                phone,
                department,
            } => {
                let update = ProfileUpdate {
                    name,
                    phone,
                    department,
                };
                commands::profile_update(ctx, update, format).await
            }
        },
        Commands::Leave { command } => match command {
            LeaveCommands::Types => commands::leave_types(ctx, format).await,
            LeaveCommands::List { filter } => commands::leave_list(ctx, &filter, format).await,
            LeaveCommands::Apply {
                leave_type,
                from,
                to,
                reason,
            } => commands::leave_apply(ctx, leave_type, from, to, reason, format).await,
            LeaveCommands::Cancel { id } => commands::leave_cancel(ctx, id, format).await,
        },
        Commands::Time { command } => match command {
            TimeCommands::List { filter } => commands::time_list(ctx, &filter, format).await,
            TimeCommands::Submit {
                date,
                clock_in,
                clock_out,
                reason,
            } => {
                let request = NewManualTimeRequest {
                    date,
                    clock_in,
                    clock_out,
                    reason,
                };
                commands::time_submit(ctx, request, format).await
            }
        },
        Commands::Approvals { command } => match command {
            ApprovalCommands::List { filter } => commands::approvals_list(ctx, &filter, format).await,
            ApprovalCommands::Approve { id, comment } => {
                commands::approvals_decide(ctx, id, ApprovalAction::Approve, comment, format).await
            }
            ApprovalCommands::Reject { id, comment } => {
                commands::approvals_decide(ctx, id, ApprovalAction::Reject, comment, format).await
            }
        },
        Commands::Timesheet { from, to } => commands::timesheet_show(ctx, from, to, format).await,
    }
}

fn load() -> anyhow::Result<(Paths, Config)> {
    let paths = Paths::new()?;
    let config = Config::load(&paths)?;
    Ok((paths, config))
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let format = cli.format;

    let (paths, config) = match load() {
        Ok(loaded) => loaded,
        Err(e) => {
            output::print_error(&e.to_string(), &format);
            std::process::exit(1);
        }
    };

    let level = cli.log_level.clone().unwrap_or_else(|| config.log_level.clone());
    init_logging("workforce-cli", &level, &paths);
    debug!(api_base_url = %config.api_base_url, "Starting CLI");

    let ctx = match AppContext::init(paths, config) {
        Ok(ctx) => ctx,
        Err(e) => {
            output::print_error(&e.to_string(), &format);
            std::process::exit(1);
        }
    };

    let is_login = matches!(cli.command, Commands::Login { .. });
    if let Err(e) = run(cli.command, &ctx, &format).await {
        output::print_error(&e.to_string(), &format);
        if !is_login && commands::credential_rejected(&e) {
            eprintln!("{}", SESSION_ENDED_NOTICE);
        }
        std::process::exit(1);
    }
}
