//! Authentication commands.

use super::AppContext;
use crate::output::{self, OutputFormat};
use anyhow::Result;
use std::io::{self, Write};

/// Log in with email and password, prompting for whatever was not given.
pub async fn login(ctx: &AppContext, email: Option<String>, format: &OutputFormat) -> Result<()> {
    if let Some(user) = ctx.session.current_user() {
        output::print_success(
            &format!("Already logged in as {}", user.display_name()),
            format,
        );
        return Ok(());
    }

    let email = match email {
        Some(email) => email,
        None => {
            print!("Email: ");
            io::stdout().flush()?;
            let mut email = String::new();
            io::stdin().read_line(&mut email)?;
            email
        }
    };
    if email.trim().is_empty() {
        anyhow::bail!("Email is required");
    }

    let password = rpassword::prompt_password("Password: ")?;
    if password.is_empty() {
        anyhow::bail!("Password is required");
    }

    if *format == OutputFormat::Text {
        println!("Logging in...");
    }
    let user = ctx.session.login(&ctx.client, &email, &password).await?;
    output::print_success(&format!("Logged in as {}", user.display_name()), format);
    Ok(())
}

/// Log out and clear the stored session.
pub async fn logout(ctx: &AppContext, format: &OutputFormat) -> Result<()> {
    let was_logged_in = ctx.session.is_authenticated();
    ctx.session.logout()?;
    if was_logged_in {
        output::print_success("Logged out successfully", format);
    } else {
        output::print_success("Not logged in", format);
    }
    Ok(())
}

/// Show authentication status and where requests go.
pub async fn status(ctx: &AppContext, format: &OutputFormat) -> Result<()> {
    let snapshot = ctx.session.snapshot();
    let user = snapshot.user.as_ref();

    match format {
        OutputFormat::Text => {
            println!(
                "Auth:     {}",
                if snapshot.is_authenticated() {
                    "logged in"
                } else {
                    "not logged in"
                }
            );
            if let Some(user) = user {
                println!("User:     {}", user.display_name());
                println!("User ID:  {}", user.id);
                if let Some(role) = &user.role {
                    println!("Role:     {}", role);
                }
            }
            println!("Server:   {}", ctx.client.base_url());
            println!("Config:   {}", ctx.paths.config_file().display());
        }
        OutputFormat::Json => {
            let json = serde_json::json!({
                "logged_in": snapshot.is_authenticated(),
                "state": snapshot.state,
                "user": user,
                "server": ctx.client.base_url(),
                "timeout_ms": ctx.config.request_timeout_ms,
            });
            output::print_json(&json)?;
        }
    }
    Ok(())
}
