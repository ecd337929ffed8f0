//! mydiary - command-line client for the My Diary service

use clap::Parser;

mod cli;
mod client;
mod config;
mod error;
mod models;
mod output;
mod session;
mod view;

use cli::args::GlobalOptions;
use cli::{Cli, Commands};
use error::{Error, Result};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);

    match run(cli).await {
        Ok(()) => {}
        // Already reported by the view
        Err(Error::Handled(_)) => std::process::exit(1),
        Err(err) => {
            eprintln!("Error: {}", err);
            std::process::exit(1);
        }
    }
}

fn init_logging(debug: bool) {
    let level = if debug { "mydiary=debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
    log::debug!("Debug logging enabled");
}

async fn run(cli: Cli) -> Result<()> {
    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Init => cli::init::run(&opts),
        Commands::Status => cli::status::run(&opts),
        Commands::Login { username, password } => {
            cli::auth::login(&opts, username, password).await
        }
        Commands::Signup {
            username,
            email,
            password,
        } => cli::auth::signup(&opts, username, email, password).await,
        Commands::Logout => cli::auth::logout(&opts).await,
        Commands::Dashboard => cli::dashboard::run(&opts).await,
        Commands::Diary(command) => cli::diary::run(&opts, command).await,
        Commands::Question => cli::dashboard::question(&opts).await,
        Commands::Quote { action } => cli::dashboard::quote(&opts, action).await,
        Commands::Completion { shell } => {
            cli::completions::run(shell);
            Ok(())
        }
    }
}
