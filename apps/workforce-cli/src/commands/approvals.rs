//! Approval commands.

use super::{AppContext, FilterArgs};
use crate::output::{self, OutputFormat};
use anyhow::Result;
use workforce_client::RecordId;
use workforce_endpoints::{decide_approval, list_pending_approvals, ApprovalAction, ListFilter};

pub async fn approvals_list(
    ctx: &AppContext,
    filter: &FilterArgs,
    format: &OutputFormat,
) -> Result<()> {
    ctx.require_login()?;
    let items = ListFilter::from(filter).apply(list_pending_approvals(&ctx.client).await?);

    match format {
        OutputFormat::Text => {
            if items.is_empty() {
                println!("Nothing waiting for approval");
                return Ok(());
            }
            println!(
                "{:<12} {:<12} {:<20} {:<12} {:<12} {}",
                "ID", "Kind", "Requester", "From", "To", "Reason"
            );
            println!("{}", "-".repeat(90));
            for item in &items {
                println!(
                    "{:<12} {:<12} {:<20} {:<12} {:<12} {}",
                    item.id,
                    item.kind,
                    item.requester,
                    item.start_date.to_string(),
                    item.end_date.to_string(),
                    output::or_dash(item.reason.as_deref())
                );
            }
        }
        OutputFormat::Json => output::print_json(&items)?,
    }
    Ok(())
}

pub async fn approvals_decide(
    ctx: &AppContext,
    id: String,
    action: ApprovalAction,
    comment: Option<String>,
    format: &OutputFormat,
) -> Result<()> {
    ctx.require_login()?;
    let item = decide_approval(&ctx.client, &RecordId::new(id), action, comment.as_deref()).await?;

    match format {
        OutputFormat::Text => println!(
            "{} request {} from {} is now {}",
            item.kind, item.id, item.requester, item.status
        ),
        OutputFormat::Json => output::print_json(&item)?,
    }
    Ok(())
}
