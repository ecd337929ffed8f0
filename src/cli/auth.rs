//! Login, signup and logout commands

use colored::Colorize;
use dialoguer::{Input, Password, theme::ColorfulTheme};

use crate::cli::args::GlobalOptions;
use crate::cli::{CommandContext, dashboard, finish};
use crate::error::Result;
use crate::view::{AuthTab, Outcome, Route};

fn prompt_text(prompt: &str) -> Result<String> {
    Ok(Input::<String>::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?)
}

fn prompt_password(prompt: &str) -> Result<String> {
    Ok(Password::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .allow_empty_password(true)
        .interact()?)
}

/// Run the login command, then open the dashboard on success.
///
/// Missing credentials are prompted for. Empty answers are passed through
/// so the view reports them.
pub async fn login(
    opts: &GlobalOptions,
    username: Option<String>,
    password: Option<String>,
) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let auth = ctx.auth();

    if username.is_none() || password.is_none() {
        auth.activate();
    }
    let username = match username {
        Some(u) => u,
        None => prompt_text("Username")?,
    };
    let password = match password {
        Some(p) => p,
        None => prompt_password("Password")?,
    };

    let outcome = auth.submit_login(&username, &password).await;
    if outcome == Outcome::Completed && ctx.surface.navigation() == Some(Route::Dashboard) {
        return finish(&ctx, dashboard::activate(&ctx).await?);
    }
    finish(&ctx, outcome)
}

/// Run the signup command.
///
/// When the password comes from a flag it also serves as the confirmation;
/// prompted passwords are asked for twice.
pub async fn signup(
    opts: &GlobalOptions,
    username: Option<String>,
    email: Option<String>,
    password: Option<String>,
) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let mut auth = ctx.auth();
    auth.select_tab(AuthTab::Signup);

    let username = match username {
        Some(u) => u,
        None => prompt_text("Username")?,
    };
    let email = match email {
        Some(e) => e,
        None => prompt_text("Email")?,
    };
    let (password, confirm) = match password {
        Some(p) => (p.clone(), p),
        None => (
            prompt_password("Password")?,
            prompt_password("Confirm password")?,
        ),
    };

    let outcome = auth
        .submit_signup(&username, &email, &password, &confirm)
        .await;
    if outcome == Outcome::Completed && auth.tab() == AuthTab::Login {
        println!(
            "Run {} to start writing.",
            crate::cli::terminal::route_command(Route::Login).cyan()
        );
    }
    finish(&ctx, outcome)
}

/// Run the logout command
pub async fn logout(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let was_logged_in = ctx.session.is_authenticated();

    let outcome = ctx.dashboard().logout().await;
    if outcome == Outcome::Completed {
        if was_logged_in {
            println!("{} Logged out.", "✓".green());
        } else {
            println!("{} No active session.", "○".dimmed());
        }
        return Ok(());
    }
    finish(&ctx, outcome)
}
