//! Leave commands.

use super::{AppContext, FilterArgs};
use crate::output::{self, OutputFormat};
use anyhow::Result;
use chrono::NaiveDate;
use workforce_client::RecordId;
use workforce_endpoints::{
    apply_for_leave, cancel_leave_request, list_leave_requests, list_leave_types, ListFilter,
    NewLeaveRequest,
};

pub async fn leave_types(ctx: &AppContext, format: &OutputFormat) -> Result<()> {
    ctx.require_login()?;
    let types = list_leave_types(&ctx.client).await?;

    match format {
        OutputFormat::Text => {
            if types.is_empty() {
                println!("No leave types found");
                return Ok(());
            }
            println!("{:<12} {:<30} {}", "ID", "Name", "Days");
            println!("{}", "-".repeat(50));
            for leave_type in &types {
                let days = leave_type
                    .days_allowed
                    .map(|d| d.to_string())
                    .unwrap_or_else(|| "-".to_string());
                println!("{:<12} {:<30} {}", leave_type.id, leave_type.name, days);
            }
        }
        OutputFormat::Json => output::print_json(&types)?,
    }
    Ok(())
}

pub async fn leave_list(ctx: &AppContext, filter: &FilterArgs, format: &OutputFormat) -> Result<()> {
    ctx.require_login()?;
    let requests = ListFilter::from(filter).apply(list_leave_requests(&ctx.client).await?);

    match format {
        OutputFormat::Text => {
            if requests.is_empty() {
                println!("No leave requests found");
                return Ok(());
            }
            println!(
                "{:<12} {:<14} {:<12} {:<12} {:<10} {}",
                "ID", "Type", "From", "To", "Status", "Reason"
            );
            println!("{}", "-".repeat(90));
            for leave in &requests {
                println!(
                    "{:<12} {:<14} {:<12} {:<12} {:<10} {}",
                    leave.id,
                    leave.leave_type,
                    leave.start_date.to_string(),
                    leave.end_date.to_string(),
                    leave.status,
                    output::or_dash(leave.reason.as_deref())
                );
            }
        }
        OutputFormat::Json => output::print_json(&requests)?,
    }
    Ok(())
}

pub async fn leave_apply(
    ctx: &AppContext,
    leave_type: String,
    from: NaiveDate,
    to: NaiveDate,
    reason: String,
    format: &OutputFormat,
) -> Result<()> {
    ctx.require_login()?;
    let request = NewLeaveRequest {
        leave_type_id: RecordId::new(leave_type),
        start_date: from,
        end_date: to,
        reason,
    };
    let created = apply_for_leave(&ctx.client, &request).await?;

    match format {
        OutputFormat::Text => println!(
            "Leave request {} submitted ({} day(s), {})",
            created.id,
            created.days(),
            created.status
        ),
        OutputFormat::Json => output::print_json(&created)?,
    }
    Ok(())
}

pub async fn leave_cancel(ctx: &AppContext, id: String, format: &OutputFormat) -> Result<()> {
    ctx.require_login()?;
    let id = RecordId::new(id);
    cancel_leave_request(&ctx.client, &id).await?;
    output::print_success(&format!("Leave request {} cancelled", id), format);
    Ok(())
}
