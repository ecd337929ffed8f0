//! Global CLI options shared across all commands

use crate::cli::{Cli, OutputFormat};

/// Global CLI options passed to all command handlers.
///
/// Precedence is CLI flag > environment variable > config file > default.
/// This struct holds the flag/env layer; the config layer is applied in
/// `CommandContext`.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Output format; `None` defers to the config file
    pub format: Option<OutputFormat>,

    /// Custom config file path (defaults to ~/.mydiary/config.yaml)
    pub config: Option<String>,

    /// Custom session file path (defaults to ~/.mydiary/session.json)
    pub session: Option<String>,

    /// Backend base URL override
    pub api_host: Option<String>,
}

impl GlobalOptions {
    /// Called once in main.rs after parsing.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            format: cli.format,
            config: cli.config.clone(),
            session: cli.session.clone(),
            api_host: cli.api_host.clone(),
        }
    }

    pub fn config_ref(&self) -> Option<&str> {
        self.config.as_deref()
    }

    pub fn session_ref(&self) -> Option<&str> {
        self.session.as_deref()
    }

    pub fn api_host_ref(&self) -> Option<&str> {
        self.api_host.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_options_accessors() {
        let opts = GlobalOptions {
            format: Some(OutputFormat::Json),
            config: Some("/custom/config.yaml".to_string()),
            session: Some("/custom/session.json".to_string()),
            api_host: Some("http://localhost:9000".to_string()),
        };

        assert_eq!(opts.config_ref(), Some("/custom/config.yaml"));
        assert_eq!(opts.session_ref(), Some("/custom/session.json"));
        assert_eq!(opts.api_host_ref(), Some("http://localhost:9000"));
    }

    #[test]
    fn test_global_options_default_is_empty() {
        let opts = GlobalOptions::default();

        assert_eq!(opts.format, None);
        assert_eq!(opts.config_ref(), None);
        assert_eq!(opts.session_ref(), None);
        assert_eq!(opts.api_host_ref(), None);
    }
}
