//! Init command implementation

use colored::Colorize;
use dialoguer::{Input, Select, theme::ColorfulTheme};

use crate::cli::args::GlobalOptions;
use crate::config::Config;
use crate::error::Result;
use crate::view::SignupPolicy;

/// Endpoint layouts a backend may use: (label, auth prefix, api prefix)
const LAYOUTS: &[(&str, &str, &str)] = &[
    ("/auth/* and /diary, /quote, /question", "/auth", ""),
    ("/api/v1/auth/* and /api/v1/diary, ...", "/api/v1/auth", "/api/v1"),
];

/// Run the init command
///
/// Existing values are offered as defaults, so re-running init edits the
/// current configuration instead of starting over.
pub fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}", "Welcome to mydiary!".bold().green());
    println!("Let's point the CLI at your diary server.\n");

    let mut config = Config::load_at(opts.config_ref()).unwrap_or_default();
    let theme = ColorfulTheme::default();

    let default_host = opts
        .api_host
        .clone()
        .unwrap_or_else(|| config.api_host.clone());
    let api_host: String = Input::with_theme(&theme)
        .with_prompt("Server URL")
        .default(default_host)
        .validate_with(|input: &String| -> std::result::Result<(), &str> {
            if input.starts_with("http://") || input.starts_with("https://") {
                Ok(())
            } else {
                Err("URL must start with http:// or https://")
            }
        })
        .interact_text()?;
    config.api_host = api_host.trim_end_matches('/').to_string();

    let labels: Vec<&str> = LAYOUTS.iter().map(|(label, _, _)| *label).collect();
    let current_layout = LAYOUTS
        .iter()
        .position(|(_, auth, _)| *auth == config.auth_prefix)
        .unwrap_or(0);
    if let Some(idx) = Select::with_theme(&theme)
        .with_prompt("Endpoint layout")
        .items(&labels)
        .default(current_layout)
        .interact_opt()?
    {
        let (_, auth, api) = LAYOUTS[idx];
        config.auth_prefix = auth.to_string();
        config.api_prefix = api.to_string();
    }

    let policies = [
        "standard (password of 3+ characters)",
        "strict (password of 8+ characters, checked email)",
    ];
    let current_policy = match config.signup_policy {
        SignupPolicy::Standard => 0,
        SignupPolicy::Strict => 1,
    };
    if let Some(idx) = Select::with_theme(&theme)
        .with_prompt("Signup checks")
        .items(&policies)
        .default(current_policy)
        .interact_opt()?
    {
        config.signup_policy = if idx == 1 {
            SignupPolicy::Strict
        } else {
            SignupPolicy::Standard
        };
    }

    config.save_at(opts.config_ref())?;

    let config_path = Config::resolve_path(opts.config_ref())?;
    println!(
        "\n{} Configuration saved to: {}",
        "✓".green(),
        config_path.display()
    );
    println!("  Server: {}", config.api_host.bold());

    println!("\n{}", "You're all set! Try running:".bold());
    println!("  {} - Create an account", "mydiary signup".cyan());
    println!("  {} - Log in and see your dashboard", "mydiary login".cyan());

    Ok(())
}
