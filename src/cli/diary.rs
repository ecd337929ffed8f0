//! Diary commands

use dialoguer::{Confirm, Input, theme::ColorfulTheme};

use crate::cli::args::GlobalOptions;
use crate::cli::{CommandContext, DiaryCommands, finish};
use crate::client::models::DiaryUpdate;
use crate::error::Result;
use crate::view::Outcome;

/// Dispatch a diary subcommand
pub async fn run(opts: &GlobalOptions, command: DiaryCommands) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    let outcome = match command {
        DiaryCommands::Write { title, content } => write(&ctx, title, content).await?,
        DiaryCommands::List => ctx.diaries().load().await,
        DiaryCommands::Show { id } => ctx.diaries().show(id).await,
        DiaryCommands::Edit { id, title, content } => {
            ctx.diaries()
                .update(id, &DiaryUpdate { title, content })
                .await
        }
        DiaryCommands::Delete { id, yes } => delete(&ctx, id, yes).await?,
    };

    finish(&ctx, outcome)
}

async fn write(
    ctx: &CommandContext,
    title: Option<String>,
    content: Option<String>,
) -> Result<Outcome> {
    let dashboard = ctx.dashboard();

    // Check the session before prompting for text that could not be saved
    if !dashboard.require_session() {
        return Ok(Outcome::Unauthenticated);
    }

    let title = match title {
        Some(t) => t,
        None => prompt("Title")?,
    };
    let content = match content {
        Some(c) => c,
        None => prompt("Content")?,
    };

    let outcome = dashboard.save_diary(&title, &content).await;
    if outcome == Outcome::Completed {
        ctx.surface.print_dashboard()?;
    }
    Ok(outcome)
}

async fn delete(ctx: &CommandContext, id: i64, yes: bool) -> Result<Outcome> {
    let diaries = ctx.diaries();

    // No confirmation for a delete that cannot be sent
    if !diaries.require_session() {
        return Ok(Outcome::Unauthenticated);
    }

    if !yes {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(format!("Delete diary #{}?", id))
            .default(false)
            .interact()?;
        if !confirmed {
            println!("Cancelled.");
            return Ok(Outcome::Completed);
        }
    }
    Ok(diaries.delete(id).await)
}

fn prompt(label: &str) -> Result<String> {
    Ok(Input::<String>::with_theme(&ColorfulTheme::default())
        .with_prompt(label)
        .allow_empty(true)
        .interact_text()?)
}
