//! `/manual-time-requests`

use crate::envelope::fetch_list;
use crate::error::{EndpointError, EndpointResult};
use crate::models::{ManualTimeRequest, NewManualTimeRequest};
use tracing::debug;
use workforce_client::{ApiClient, RequestOptions};

pub const MANUAL_TIME_PATH: &str = "/manual-time-requests";

pub async fn list_manual_time(client: &ApiClient) -> EndpointResult<Vec<ManualTimeRequest>> {
    Ok(fetch_list(client, MANUAL_TIME_PATH, RequestOptions::default()).await?)
}

pub async fn submit_manual_time(
    client: &ApiClient,
    request: &NewManualTimeRequest,
) -> EndpointResult<ManualTimeRequest> {
    let request = validate_manual_time(request)?;
    debug!(date = %request.date, "Submitting manual time request");
    let created: ManualTimeRequest = client
        .post(MANUAL_TIME_PATH, Some(&request), RequestOptions::default())
        .await?;
    debug!(request_id = %created.id, "Manual time request created");
    Ok(created)
}

pub(crate) fn validate_manual_time(
    request: &NewManualTimeRequest,
) -> EndpointResult<NewManualTimeRequest> {
    let reason = request.reason.trim();
    if reason.is_empty() {
        return Err(EndpointError::validation("Reason is required"));
    }
    if request.clock_out <= request.clock_in {
        return Err(EndpointError::validation(
            "Clock-out time must be after clock-in time",
        ));
    }
    Ok(NewManualTimeRequest {
        reason: reason.to_string(),
        ..request.clone()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock;

    fn request(clock_in: &str, clock_out: &str) -> NewManualTimeRequest {
        NewManualTimeRequest {
            date: "2026-03-02".parse().unwrap(),
            clock_in: clock::parse(clock_in).unwrap(),
            clock_out: clock::parse(clock_out).unwrap(),
            reason: "forgot badge".to_string(),
        }
    }

    #[test]
    fn ordered_times_are_valid() {
        assert!(validate_manual_time(&request("09:00", "17:30")).is_ok());
    }

    #[test]
    fn equal_or_reversed_times_are_rejected() {
        let err = validate_manual_time(&request("09:00", "09:00")).unwrap_err();
        assert_eq!(err.to_string(), "Clock-out time must be after clock-in time");
        assert!(validate_manual_time(&request("18:00", "09:00")).is_err());
    }

    #[test]
    fn blank_reason_is_rejected() {
        let mut req = request("09:00", "17:00");
        req.reason = "\t".into();
        assert!(matches!(
            validate_manual_time(&req),
            Err(EndpointError::Validation(_))
        ));
    }
}
