//! `/approvals`

use crate::envelope::fetch_list;
use crate::error::EndpointResult;
use crate::models::{ApprovalAction, ApprovalDecision, ApprovalItem, RequestStatus};
use crate::route::record_path;
use tracing::debug;
use workforce_client::{ApiClient, RecordId, RequestOptions};

pub const APPROVALS_PATH: &str = "/approvals";

/// Requests waiting for the signed-in manager.
pub async fn list_pending_approvals(client: &ApiClient) -> EndpointResult<Vec<ApprovalItem>> {
    let options = RequestOptions::default().query("status", RequestStatus::Pending.as_str());
    Ok(fetch_list(client, APPROVALS_PATH, options).await?)
}

/// Approve or reject one request. A blank comment is sent as no comment.
pub async fn decide_approval(
    client: &ApiClient,
    id: &RecordId,
    action: ApprovalAction,
    comment: Option<&str>,
) -> EndpointResult<ApprovalItem> {
    let path = record_path(APPROVALS_PATH, id, "Approval")?;
    let decision = ApprovalDecision {
        action,
        comment: comment
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::to_string),
    };
    let item: ApprovalItem = client
        .put(&path, Some(&decision), RequestOptions::default())
        .await?;
    debug!(approval_id = %id, action = ?action, status = %item.status, "Approval decided");
    Ok(item)
}
