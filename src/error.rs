//! Error types for the mydiary CLI

use thiserror::Error;

/// Result type alias for mydiary operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the application
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Interactive prompt error: {0}")]
    Dialoguer(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Operation failed: {0}")]
    Other(String),

    /// A view already reported the problem to the user
    #[error("Command did not complete ({0:?})")]
    Handled(crate::view::Outcome),
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        Error::Dialoguer(err.to_string())
    }
}

/// Maximum length for response bodies carried in error messages
const MAX_ERROR_BODY_LENGTH: usize = 300;

/// API-related errors
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// The server answered with a non-2xx status. Covers rejected
    /// credentials as well as any failed authenticated call.
    #[error("Request rejected ({status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid API response: {0}")]
    Parse(String),
}

impl ApiError {
    /// Build a `Rejected` error from a status code and raw response body.
    pub fn rejected(status: u16, body: &str) -> Self {
        let message = if body.len() <= MAX_ERROR_BODY_LENGTH {
            body.to_string()
        } else {
            let mut end = MAX_ERROR_BODY_LENGTH;
            while !body.is_char_boundary(end) {
                end -= 1;
            }
            format!("{}... (truncated, {} total bytes)", &body[..end], body.len())
        };
        ApiError::Rejected { status, message }
    }

    /// Status code of a rejected request, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Network("Request timed out".to_string())
        } else if err.is_connect() {
            ApiError::Network("Failed to connect to API".to_string())
        } else if err.is_decode() {
            ApiError::Parse(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Client-side field checks. The display text is shown to the user as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Enter your username and password.")]
    MissingCredentials,

    #[error("Username must be at least {0} characters.")]
    UsernameTooShort(usize),

    #[error("Username must be at most {0} characters.")]
    UsernameTooLong(usize),

    #[error("Enter your email address.")]
    MissingEmail,

    #[error("Email address is not valid.")]
    InvalidEmail,

    #[error("Password must be at least {0} characters.")]
    PasswordTooShort(usize),

    #[error("Password must be at most {0} characters.")]
    PasswordTooLong(usize),

    #[error("Passwords do not match.")]
    PasswordMismatch,

    #[error("Enter a title and content.")]
    MissingDiaryFields,

    #[error("Nothing to update. Provide a new title or content.")]
    EmptyUpdate,
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found. Run `mydiary init` to set up.")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}

/// Session persistence errors
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Failed to read session: {0}")]
    Read(String),

    #[error("Failed to write session: {0}")]
    Write(String),

    #[error("Session file is corrupt: {0}")]
    Corrupt(String),
}
