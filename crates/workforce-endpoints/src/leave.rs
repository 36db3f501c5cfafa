//! `/leave-types` and `/leave-requests`

use crate::envelope::fetch_list;
use crate::error::{EndpointError, EndpointResult};
use crate::models::{LeaveRequest, LeaveType, NewLeaveRequest};
use crate::route::record_path;
use tracing::debug;
use workforce_client::{ApiClient, RecordId, RequestOptions};

pub const LEAVE_TYPES_PATH: &str = "/leave-types";
pub const LEAVE_REQUESTS_PATH: &str = "/leave-requests";

pub async fn list_leave_types(client: &ApiClient) -> EndpointResult<Vec<LeaveType>> {
    Ok(fetch_list(client, LEAVE_TYPES_PATH, RequestOptions::default()).await?)
}

pub async fn list_leave_requests(client: &ApiClient) -> EndpointResult<Vec<LeaveRequest>> {
    Ok(fetch_list(client, LEAVE_REQUESTS_PATH, RequestOptions::default()).await?)
}

/// Submit a leave application. Checked locally before anything is sent.
pub async fn apply_for_leave(
    client: &ApiClient,
    request: &NewLeaveRequest,
) -> EndpointResult<LeaveRequest> {
    let request = validate_leave(request)?;
    debug!(
        leave_type_id = %request.leave_type_id,
        start = %request.start_date,
        end = %request.end_date,
        "Submitting leave request"
    );
    let created: LeaveRequest = client
        .post(LEAVE_REQUESTS_PATH, Some(&request), RequestOptions::default())
        .await?;
    debug!(leave_id = %created.id, "Leave request created");
    Ok(created)
}

pub async fn cancel_leave_request(client: &ApiClient, id: &RecordId) -> EndpointResult<()> {
    let path = record_path(LEAVE_REQUESTS_PATH, id, "Leave request")?;
    let _: Option<serde_json::Value> = client.delete(&path, RequestOptions::default()).await?;
    debug!(leave_id = %id, "Leave request cancelled");
    Ok(())
}

pub(crate) fn validate_leave(request: &NewLeaveRequest) -> EndpointResult<NewLeaveRequest> {
    if request.leave_type_id.as_str().trim().is_empty() {
        return Err(EndpointError::validation("Leave type is required"));
    }
    let reason = request.reason.trim();
    if reason.is_empty() {
        return Err(EndpointError::validation("Reason is required"));
    }
    if request.start_date > request.end_date {
        return Err(EndpointError::validation(
            "Start date must be on or before end date",
        ));
    }
    Ok(NewLeaveRequest {
        reason: reason.to_string(),
        ..request.clone()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(start: &str, end: &str, reason: &str) -> NewLeaveRequest {
        NewLeaveRequest {
            leave_type_id: "annual".into(),
            start_date: start.parse().unwrap(),
            end_date: end.parse().unwrap(),
            reason: reason.to_string(),
        }
    }

    #[test]
    fn single_day_leave_is_valid() {
        let ok = validate_leave(&request("2026-05-01", "2026-05-01", " family ")).unwrap();
        assert_eq!(ok.reason, "family");
    }

    #[test]
    fn reversed_dates_are_rejected() {
        let err = validate_leave(&request("2026-05-02", "2026-05-01", "x")).unwrap_err();
        assert_eq!(err.to_string(), "Start date must be on or before end date");
    }

    #[test]
    fn blank_reason_is_rejected() {
        let err = validate_leave(&request("2026-05-01", "2026-05-01", "  ")).unwrap_err();
        assert_eq!(err.to_string(), "Reason is required");
    }

    #[test]
    fn blank_leave_type_is_rejected() {
        let mut req = request("2026-05-01", "2026-05-01", "x");
        req.leave_type_id = RecordId::new(" ");
        assert!(matches!(
            validate_leave(&req),
            Err(EndpointError::Validation(_))
        ));
    }
}
