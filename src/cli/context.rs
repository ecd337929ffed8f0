//! Command execution context
//!
//! Loads configuration, opens the session file and builds the API client
//! once, then hands out view controllers wired to the terminal surface.

use std::sync::Arc;

use crate::cli::OutputFormat;
use crate::cli::args::GlobalOptions;
use crate::cli::terminal::TerminalSurface;
use crate::client::DiaryClient;
use crate::config::Config;
use crate::error::Result;
use crate::session::{FileSessionStore, SessionManager};
use crate::view::{AuthController, DashboardController, DiaryListController};

/// Shared state for one command invocation.
pub struct CommandContext {
    /// Loaded configuration with CLI overrides applied
    pub config: Config,
    /// Session manager backed by the session file
    pub session: Arc<SessionManager>,
    /// API client reading its token from `session`
    pub client: Arc<DiaryClient>,
    /// Terminal surface all controllers write to
    pub surface: Arc<TerminalSurface>,
    /// Resolved output format
    pub format: OutputFormat,
}

impl CommandContext {
    /// Build the context.
    ///
    /// A missing config file is not an error; defaults apply until
    /// `mydiary init` writes one.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let mut config = Config::load_at(opts.config_ref())?;
        if let Some(host) = opts.api_host_ref() {
            config.api_host = host.trim_end_matches('/').to_string();
        }
        config.validate()?;

        let format = opts
            .format
            .or_else(|| {
                config
                    .preferences
                    .format
                    .as_deref()
                    .and_then(OutputFormat::from_config)
            })
            .unwrap_or_default();

        let session_path = config.session_file(opts.session_ref())?;
        log::debug!("Using session file {}", session_path.display());
        let session = Arc::new(SessionManager::new(FileSessionStore::new(session_path)));

        let client = Arc::new(DiaryClient::new(&config, session.clone())?);
        log::debug!("API base URL {}", client.base_url());

        Ok(Self {
            config,
            session,
            client,
            surface: Arc::new(TerminalSurface::new(format)),
            format,
        })
    }

    pub fn auth(&self) -> AuthController {
        AuthController::new(
            self.client.clone(),
            self.session.clone(),
            self.surface.clone(),
            self.config.signup_policy,
        )
    }

    pub fn dashboard(&self) -> DashboardController {
        DashboardController::new(
            self.client.clone(),
            self.session.clone(),
            self.surface.clone(),
            self.config.preferences.recent_limit,
        )
    }

    pub fn diaries(&self) -> DiaryListController {
        DiaryListController::new(
            self.client.clone(),
            self.session.clone(),
            self.surface.clone(),
        )
    }
}
