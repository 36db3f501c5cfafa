//! CLI command implementations.

mod approvals;
mod auth;
mod leave;
mod profile;
mod time;
mod timesheet;

pub use approvals::{approvals_decide, approvals_list};
pub use auth::{login, logout, status};
pub use leave::{leave_apply, leave_cancel, leave_list, leave_types};
pub use profile::{profile_show, profile_update};
pub use time::{time_list, time_submit};
pub use timesheet::timesheet_show;

use anyhow::Result;
use chrono::NaiveTime;
use std::sync::Arc;
use tracing::{debug, warn};
use workforce_client::{ApiClient, ApiError};
use workforce_config::{Config, Paths};
use workforce_endpoints::{EndpointError, ListFilter, RequestStatus};
use workforce_session::{SessionError, SessionManager};
use workforce_storage::{FileStore, SessionVault};

/// Everything a command needs: configuration, the session owner and the
/// client wired to it.
pub struct AppContext {
    pub paths: Paths,
    pub config: Config,
    pub session: Arc<SessionManager>,
    pub client: ApiClient,
}

impl AppContext {
    /// Build the session and client, restoring any persisted session.
    pub fn init(paths: Paths, config: Config) -> Result<Self> {
        paths.ensure_dirs()?;

        let vault = SessionVault::new(
            Box::new(FileStore::plain(paths.store_file())),
            Box::new(FileStore::secure(paths.secure_store_file())),
        );
        let session = Arc::new(SessionManager::new(vault));
        match session.restore() {
            Ok(restored) => debug!(restored, "Session restore finished"),
            Err(e) => warn!(error = %e, "Could not restore session"),
        }

        let client = ApiClient::new(
            &config.api_base_url,
            config.request_timeout_ms,
            session.clone(),
        )?;
        session.attach(&client);

        Ok(Self {
            paths,
            config,
            session,
            client,
        })
    }

    /// Fail unless a session is active.
    pub fn require_login(&self) -> Result<()> {
        if !self.session.is_authenticated() {
            anyhow::bail!("Not logged in. Run 'workforce login' first.");
        }
        Ok(())
    }
}

/// True when the error came from the server rejecting the session credential.
pub fn credential_rejected(err: &anyhow::Error) -> bool {
    if let Some(e) = err.downcast_ref::<EndpointError>() {
        return e.is_unauthorized();
    }
    if let Some(e) = err.downcast_ref::<SessionError>() {
        return e.is_unauthorized();
    }
    if let Some(e) = err.downcast_ref::<ApiError>() {
        return e.is_unauthorized();
    }
    false
}

/// Filter flags shared by the list commands.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct FilterArgs {
    /// Only show records with this status (pending, approved, rejected, cancelled)
    #[arg(long)]
    pub status: Option<RequestStatus>,

    /// Case-insensitive text search
    #[arg(long)]
    pub search: Option<String>,

    /// Only show records ending on or after this date (YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<chrono::NaiveDate>,

    /// Only show records starting on or before this date (YYYY-MM-DD)
    #[arg(long)]
    pub to: Option<chrono::NaiveDate>,
}

impl From<&FilterArgs> for ListFilter {
    fn from(args: &FilterArgs) -> Self {
        ListFilter {
            status: args.status,
            search: args.search.clone(),
            from: args.from,
            to: args.to,
        }
    }
}

/// clap value parser for `HH:MM` times.
pub fn parse_clock(raw: &str) -> std::result::Result<NaiveTime, String> {
    workforce_endpoints::clock::parse(raw)
        .ok_or_else(|| format!("invalid time '{}', expected HH:MM", raw))
}
