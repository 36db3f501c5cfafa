//! Timesheet command.

use super::AppContext;
use crate::output::{self, OutputFormat};
use anyhow::Result;
use chrono::NaiveDate;
use workforce_endpoints::{fetch_timesheet, TimesheetReport};

pub async fn timesheet_show(
    ctx: &AppContext,
    from: NaiveDate,
    to: NaiveDate,
    format: &OutputFormat,
) -> Result<()> {
    ctx.require_login()?;
    let rows = fetch_timesheet(&ctx.client, from, to).await?;
    let report = TimesheetReport::from_rows(&rows);

    match format {
        OutputFormat::Text => {
            output::print_heading(&format!("Timesheet {} to {}", from, to));
            if report.is_empty() {
                println!("No time logged");
                return Ok(());
            }
            for day in &report.days {
                println!(
                    "  {:<12} {:>6.2} h  ({} entr{})",
                    day.date.to_string(),
                    day.hours,
                    day.entries,
                    if day.entries == 1 { "y" } else { "ies" }
                );
            }
            output::print_divider();
            println!("  {:<12} {:>6.2} h", "Total", report.total_hours);
        }
        OutputFormat::Json => {
            let json = serde_json::json!({ "rows": rows, "report": report });
            output::print_json(&json)?;
        }
    }
    Ok(())
}
