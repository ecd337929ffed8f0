//! Dashboard, question and quote commands

use std::time::Duration;

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use crate::cli::args::GlobalOptions;
use crate::cli::{CommandContext, QuoteCommands, finish};
use crate::error::Result;
use crate::view::Outcome;

fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner:.green} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Activate the dashboard and print its widgets.
pub async fn activate(ctx: &CommandContext) -> Result<Outcome> {
    let pb = spinner("Loading your dashboard...");
    let outcome = ctx.dashboard().activate().await;
    pb.finish_and_clear();

    if outcome == Outcome::Completed {
        ctx.surface.print_dashboard()?;
    }
    Ok(outcome)
}

/// Run the dashboard command
pub async fn run(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let outcome = activate(&ctx).await?;
    finish(&ctx, outcome)
}

/// Run the question command: the question widget on its own
pub async fn question(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let dashboard = ctx.dashboard();
    if !dashboard.require_session() {
        return finish(&ctx, Outcome::Unauthenticated);
    }

    let outcome = dashboard.load_question().await;
    if outcome == Outcome::Failed {
        eprintln!("{} No question available right now.", "○".dimmed());
    }
    ctx.surface.print_dashboard()?;
    finish(&ctx, outcome)
}

/// Run the quote command, or one of its bookmark actions
pub async fn quote(opts: &GlobalOptions, action: Option<QuoteCommands>) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let dashboard = ctx.dashboard();

    match action {
        Some(QuoteCommands::Bookmark) => finish(&ctx, dashboard.bookmark_quote().await),
        Some(QuoteCommands::Bookmarks) => finish(&ctx, dashboard.load_bookmarks().await),
        Some(QuoteCommands::Unbookmark { id }) => {
            finish(&ctx, dashboard.remove_bookmark(id).await)
        }
        None => {
            if !dashboard.require_session() {
                return finish(&ctx, Outcome::Unauthenticated);
            }
            let outcome = dashboard.load_quote().await;
            if outcome == Outcome::Failed {
                eprintln!("{} No quote available right now.", "○".dimmed());
            }
            ctx.surface.print_dashboard()?;
            finish(&ctx, outcome)
        }
    }
}
