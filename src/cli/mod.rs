//! CLI command definitions and handlers

use clap::{Parser, Subcommand};
pub use clap_complete::Shell;

pub mod args;
pub mod auth;
pub mod completions;
pub mod context;
pub mod dashboard;
pub mod diary;
pub mod init;
pub mod status;
pub mod terminal;

pub use args::OutputFormat;
pub use context::CommandContext;

use colored::Colorize;

use crate::error::{Error, Result};
use crate::view::{Outcome, Route};

/// mydiary - write and browse your diary from the terminal
#[derive(Parser, Debug)]
#[command(name = "mydiary")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (pretty, table, json)
    #[arg(
        long,
        global = true,
        env = "MYDIARY_FORMAT",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: Option<OutputFormat>,

    /// Override config file location
    #[arg(long, global = true, env = "MYDIARY_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Override session file location
    #[arg(long, global = true, env = "MYDIARY_SESSION", hide = true)]
    pub session: Option<String>,

    /// Backend base URL
    #[arg(long, global = true, env = "MYDIARY_API_HOST", hide_env = true)]
    pub api_host: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "MYDIARY_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create or update the configuration file
    Init,

    /// Show session and configuration status
    Status,

    /// Log in and open the dashboard
    Login {
        /// Username (prompted if omitted)
        #[arg(long, short = 'u')]
        username: Option<String>,

        /// Password (prompted if omitted)
        #[arg(long, env = "MYDIARY_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },

    /// Create an account
    Signup {
        /// Username (prompted if omitted)
        #[arg(long, short = 'u')]
        username: Option<String>,

        /// Email address (prompted if omitted)
        #[arg(long, short = 'e')]
        email: Option<String>,

        /// Password, used for the confirmation too (prompted if omitted)
        #[arg(long, env = "MYDIARY_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },

    /// Forget the stored session
    Logout,

    /// Show greeting, question, quote and recent diaries
    Dashboard,

    /// Write and manage diary entries
    #[command(subcommand)]
    Diary(DiaryCommands),

    /// Show a random writing question
    Question,

    /// Show a random quote, or manage quote bookmarks
    Quote {
        #[command(subcommand)]
        action: Option<QuoteCommands>,
    },

    /// Generate shell completions (static)
    #[command(after_help = "\
Examples:
  bash:   mydiary completion bash > /etc/bash_completion.d/mydiary
  zsh:    mydiary completion zsh > \"${fpath[1]}/_mydiary\"
  fish:   mydiary completion fish > ~/.config/fish/completions/mydiary.fish")]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Diary subcommands
#[derive(Subcommand, Debug)]
pub enum DiaryCommands {
    /// Write a new entry
    Write {
        /// Entry title (prompted if omitted)
        #[arg(long, short = 't')]
        title: Option<String>,

        /// Entry body (prompted if omitted)
        #[arg(long, short = 'c')]
        content: Option<String>,
    },

    /// List all of your entries
    List,

    /// Show one entry
    Show {
        /// Entry ID
        id: i64,
    },

    /// Change the title or body of an entry
    Edit {
        /// Entry ID
        id: i64,

        /// New title
        #[arg(long, short = 't')]
        title: Option<String>,

        /// New body
        #[arg(long, short = 'c')]
        content: Option<String>,
    },

    /// Delete an entry
    Delete {
        /// Entry ID
        id: i64,

        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

/// Quote subcommands
#[derive(Subcommand, Debug)]
pub enum QuoteCommands {
    /// Bookmark the current quote
    Bookmark,

    /// List your bookmarked quotes
    Bookmarks,

    /// Remove the bookmark on a quote
    Unbookmark {
        /// Quote ID, as shown by `quote bookmarks`
        id: i64,
    },
}

/// Map a controller outcome to the process result.
///
/// The surface has already told the user what happened, so failures only
/// add a hint when the view redirected to login.
pub fn finish(ctx: &CommandContext, outcome: Outcome) -> Result<()> {
    if outcome == Outcome::Completed {
        return Ok(());
    }

    if outcome == Outcome::Unauthenticated && ctx.surface.navigation() == Some(Route::Login) {
        eprintln!(
            "{} Not logged in. Run {} first.",
            "✗".red(),
            terminal::route_command(Route::Login).cyan()
        );
    }
    Err(Error::Handled(outcome))
}
