//! Profile commands.

use super::AppContext;
use crate::output::{self, OutputFormat};
use anyhow::Result;
use workforce_endpoints::{get_profile, update_profile, Profile, ProfileUpdate};

fn print_profile(profile: &Profile) {
    output::print_heading(&profile.name);
    output::print_row("ID", profile.id.as_str());
    output::print_row("Email", &profile.email);
    output::print_row("Phone", output::or_dash(profile.phone.as_deref()));
    output::print_row("Department", output::or_dash(profile.department.as_deref()));
    output::print_row("Position", output::or_dash(profile.position.as_deref()));
    let joined = profile.joined_on.map(|d| d.to_string());
    output::print_row("Joined", output::or_dash(joined.as_deref()));
}

pub async fn profile_show(ctx: &AppContext, format: &OutputFormat) -> Result<()> {
    ctx.require_login()?;
    let profile = get_profile(&ctx.client).await?;
    match format {
        OutputFormat::Text => print_profile(&profile),
        OutputFormat::Json => output::print_json(&profile)?,
    }
    Ok(())
}

pub async fn profile_update(
    ctx: &AppContext,
    update: ProfileUpdate,
    format: &OutputFormat,
) -> Result<()> {
    ctx.require_login()?;
    let profile = update_profile(&ctx.client, &update).await?;
    match format {
        OutputFormat::Text => {
            println!("Profile updated");
            print_profile(&profile);
        }
        OutputFormat::Json => output::print_json(&profile)?,
    }
    Ok(())
}
