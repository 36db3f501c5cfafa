//! `/timesheets`

use crate::envelope::fetch_list;
use crate::error::{EndpointError, EndpointResult};
use crate::models::TimesheetRow;
use chrono::NaiveDate;
use workforce_client::{ApiClient, RequestOptions};

pub const TIMESHEETS_PATH: &str = "/timesheets";

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Logged rows between `from` and `to`, both inclusive.
pub async fn fetch_timesheet(
    client: &ApiClient,
    from: NaiveDate,
    to: NaiveDate,
) -> EndpointResult<Vec<TimesheetRow>> {
    if from > to {
        return Err(EndpointError::validation(
            "Start date must be on or before end date",
        ));
    }
    let options = RequestOptions::default()
        .query("from", from.format(DATE_FORMAT).to_string())
        .query("to", to.format(DATE_FORMAT).to_string());
    Ok(fetch_list(client, TIMESHEETS_PATH, options).await?)
}
