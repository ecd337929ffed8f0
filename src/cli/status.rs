//! Status command implementation

use chrono::Utc;
use colored::Colorize;

use crate::cli::CommandContext;
use crate::cli::args::GlobalOptions;
use crate::config::Config;
use crate::error::Result;

/// Run the status command to display session and configuration status
pub fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}\n", "mydiary Status".bold());

    let config_path = Config::resolve_path(opts.config_ref())?;
    if config_path.exists() {
        println!("Config file: {}", config_path.display().to_string().cyan());
    } else {
        println!(
            "{} No config file at {} (using defaults)",
            "○".dimmed(),
            config_path.display()
        );
        println!("  → Run '{}' to create one", "mydiary init".cyan());
    }

    let ctx = CommandContext::new(opts)?;
    println!("{} Server: {}", "○".dimmed(), ctx.config.api_host.cyan());
    println!(
        "{} Signup checks: {:?}",
        "○".dimmed(),
        ctx.config.signup_policy
    );

    let session_path = ctx.config.session_file(opts.session_ref())?;
    println!(
        "Session file: {}",
        session_path.display().to_string().cyan()
    );
    println!();

    if !ctx.session.is_authenticated() {
        println!("{} Not logged in", "✗".red());
        println!("  → Run '{}' to log in", "mydiary login".cyan());
        println!();
        return Ok(());
    }

    match ctx.session.user() {
        Some(user) => println!("{} Logged in as {}", "✓".green(), user.username.bold()),
        None => println!("{} Logged in", "✓".green()),
    }

    // Claims are informational; nothing is gated on expiry
    if let Some(claims) = ctx.session.token_claims() {
        if let Some(ref sub) = claims.sub {
            println!("{} Token subject: {}", "○".dimmed(), sub);
        }
        if let Some(expires) = claims.expires_at() {
            let remaining = expires.signed_duration_since(Utc::now());
            if remaining.num_seconds() <= 0 {
                println!(
                    "{} Token expired at {} (the server may reject requests)",
                    "⚠".yellow(),
                    expires.format("%Y-%m-%d %H:%M UTC")
                );
            } else {
                println!(
                    "{} Token expires in {}h {}m",
                    "○".dimmed(),
                    remaining.num_hours(),
                    remaining.num_minutes() % 60
                );
            }
        }
    }

    println!();
    Ok(())
}
