//! Configuration management for mydiary

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{ConfigError, Result};
use crate::view::{DEFAULT_RECENT_LIMIT, SignupPolicy};

/// Directory under the home directory holding config and session files
const APP_DIR: &str = ".mydiary";

/// Config file name
const CONFIG_FILE: &str = "config.yaml";

/// Session file name
const SESSION_FILE: &str = "session.json";

/// Default backend base URL
pub const DEFAULT_API_HOST: &str = "http://localhost:8000";

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Backend base URL
    #[serde(default = "default_api_host")]
    pub api_host: String,

    /// Path prefix for the authentication endpoints
    #[serde(default = "default_auth_prefix")]
    pub auth_prefix: String,

    /// Path prefix for diary, question and quote endpoints
    #[serde(default)]
    pub api_prefix: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    /// Which signup validation rules apply
    #[serde(default)]
    pub signup_policy: SignupPolicy,

    /// Custom session file location
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_path: Option<String>,

    /// User preferences
    #[serde(default)]
    pub preferences: Preferences,
}

/// User preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Preferences {
    /// Default output format
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    /// Number of entries in the dashboard's recent-diary preview
    #[serde(default = "default_recent_limit")]
    pub recent_limit: usize,
}

fn default_api_host() -> String {
    DEFAULT_API_HOST.to_string()
}

fn default_auth_prefix() -> String {
    "/auth".to_string()
}

fn default_request_timeout() -> u64 {
    30
}

fn default_recent_limit() -> usize {
    DEFAULT_RECENT_LIMIT
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            format: None,
            recent_limit: default_recent_limit(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_host: default_api_host(),
            auth_prefix: default_auth_prefix(),
            api_prefix: String::new(),
            request_timeout_secs: default_request_timeout(),
            signup_policy: SignupPolicy::default(),
            session_path: None,
            preferences: Preferences::default(),
        }
    }
}

impl Config {
    /// Directory holding config and session files
    fn app_dir() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(APP_DIR))
    }

    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        Ok(Self::app_dir()?.join(CONFIG_FILE))
    }

    /// Resolve the config path from an optional override
    pub fn resolve_path(path: Option<&str>) -> Result<PathBuf> {
        match path {
            Some(p) => Ok(PathBuf::from(p)),
            None => Self::default_path(),
        }
    }

    /// Load configuration, falling back to defaults when no file exists
    pub fn load_at(path: Option<&str>) -> Result<Self> {
        let path = Self::resolve_path(path)?;
        match Self::load_from(path) {
            Err(crate::error::Error::Config(ConfigError::NotFound)) => Ok(Self::default()),
            other => other,
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: PathBuf) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound.into());
        }

        let contents = std::fs::read_to_string(&path)?;
        let config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;
        config.validate()?;

        Ok(config)
    }

    /// Save configuration to the resolved path
    pub fn save_at(&self, path: Option<&str>) -> Result<()> {
        self.save_to(Self::resolve_path(path)?)
    }

    /// Save configuration to a specific path
    pub fn save_to(&self, path: PathBuf) -> Result<()> {
        self.validate()?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents =
            serde_yaml::to_string(self).map_err(|e| ConfigError::SaveError(e.to_string()))?;

        std::fs::write(&path, contents)?;

        // Set file permissions to 600 on Unix systems
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = std::fs::metadata(&path)?.permissions();
            perms.set_mode(0o600);
            std::fs::set_permissions(&path, perms)?;
        }

        Ok(())
    }

    /// Session file location: override, then config, then the default.
    pub fn session_file(&self, override_path: Option<&str>) -> Result<PathBuf> {
        if let Some(p) = override_path.or(self.session_path.as_deref()) {
            return Ok(PathBuf::from(p));
        }
        Ok(Self::app_dir()?.join(SESSION_FILE))
    }

    /// Check that the configured values are usable
    pub fn validate(&self) -> Result<()> {
        if !(self.api_host.starts_with("http://") || self.api_host.starts_with("https://")) {
            return Err(ConfigError::Invalid(format!(
                "api_host must start with http:// or https:// (got '{}')",
                self.api_host
            ))
            .into());
        }
        if self.request_timeout_secs == 0 {
            return Err(
                ConfigError::Invalid("request_timeout_secs must be positive".to_string()).into(),
            );
        }
        if self.preferences.recent_limit == 0 {
            return Err(ConfigError::Invalid(
                "preferences.recent_limit must be positive".to_string(),
            )
            .into());
        }
        Ok(())
    }
}
