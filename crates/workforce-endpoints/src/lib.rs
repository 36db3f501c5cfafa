//! Typed endpoints for the workforce backend.
//!
//! Each endpoint has exactly one schema in [`models`]; a response that does
//! not match fails with a decode error. List endpoints go through
//! [`ListEnvelope`], which accepts the three envelope shapes the backend is
//! known to use. Submissions are checked locally and rejected with
//! [`EndpointError::Validation`] before any request is sent.

pub mod clock;
mod envelope;
mod error;
mod filter;
pub mod models;
mod report;
mod route;

mod approvals;
mod leave;
mod manual_time;
mod profile;
mod timesheet;

pub use envelope::{DataBody, DataEnvelope, EnvelopeShape, ListBody, ListEnvelope};
pub use error::{EndpointError, EndpointResult};
pub use filter::{Filterable, ListFilter};
pub use models::{
    ApprovalAction, ApprovalDecision, ApprovalItem, ApprovalKind, LeaveRequest, LeaveType,
    ManualTimeRequest, NewLeaveRequest, NewManualTimeRequest, Profile, ProfileUpdate,
    RequestStatus, TimesheetRow,
};
pub use report::{DayTotal, TimesheetReport};

pub use approvals::{decide_approval, list_pending_approvals, APPROVALS_PATH};
pub use leave::{
    apply_for_leave, cancel_leave_request, list_leave_requests, list_leave_types,
    LEAVE_REQUESTS_PATH, LEAVE_TYPES_PATH,
};
pub use manual_time::{list_manual_time, submit_manual_time, MANUAL_TIME_PATH};
pub use profile::{get_profile, update_profile, PROFILE_PATH};
pub use timesheet::{fetch_timesheet, TIMESHEETS_PATH};
