//! Manual time commands.

use super::{AppContext, FilterArgs};
use crate::output::{self, OutputFormat};
use anyhow::Result;
use workforce_endpoints::{list_manual_time, submit_manual_time, ListFilter, NewManualTimeRequest};

pub async fn time_list(ctx: &AppContext, filter: &FilterArgs, format: &OutputFormat) -> Result<()> {
    ctx.require_login()?;
    let requests = ListFilter::from(filter).apply(list_manual_time(&ctx.client).await?);

    match format {
        OutputFormat::Text => {
            if requests.is_empty() {
                println!("No manual time requests found");
                return Ok(());
            }
            println!(
                "{:<12} {:<12} {:<6} {:<6} {:<10} {}",
                "ID", "Date", "In", "Out", "Status", "Reason"
            );
            println!("{}", "-".repeat(80));
            for request in &requests {
                println!(
                    "{:<12} {:<12} {:<6} {:<6} {:<10} {}",
                    request.id,
                    request.date.to_string(),
                    request.clock_in.format("%H:%M").to_string(),
                    request.clock_out.format("%H:%M").to_string(),
                    request.status,
                    output::or_dash(request.reason.as_deref())
                );
            }
        }
        OutputFormat::Json => output::print_json(&requests)?,
    }
    Ok(())
}

pub async fn time_submit(
    ctx: &AppContext,
    request: NewManualTimeRequest,
    format: &OutputFormat,
) -> Result<()> {
    ctx.require_login()?;
    let created = submit_manual_time(&ctx.client, &request).await?;

    match format {
        OutputFormat::Text => println!(
            "Manual time request {} submitted for {} ({})",
            created.id, created.date, created.status
        ),
        OutputFormat::Json => output::print_json(&created)?,
    }
    Ok(())
}
