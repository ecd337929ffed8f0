//! Client-side form checks

use serde::{Deserialize, Serialize};

use crate::client::models::{DiaryUpdate, NewDiaryEntry};
use crate::error::ValidationError;

/// Minimum username length
pub const MIN_USERNAME_LEN: usize = 3;

/// Maximum username and password length accepted by the backend
pub const MAX_FIELD_LEN: usize = 32;

/// Signup validation rules.
///
/// `Standard` follows the backend's own schema. `Strict` is the tighter
/// rule set with an email format check and a longer password.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SignupPolicy {
    #[default]
    Standard,
    Strict,
}

impl SignupPolicy {
    pub fn min_password_len(self) -> usize {
        match self {
            SignupPolicy::Standard => 3,
            SignupPolicy::Strict => 8,
        }
    }

    pub fn checks_email_format(self) -> bool {
        matches!(self, SignupPolicy::Strict)
    }
}

/// Login form input
#[derive(Debug, Clone)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

impl LoginForm {
    pub fn new(username: &str, password: &str) -> Self {
        Self {
            username: username.trim().to_string(),
            password: password.to_string(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.username.is_empty() || self.password.trim().is_empty() {
            return Err(ValidationError::MissingCredentials);
        }
        Ok(())
    }
}

/// Signup form input
#[derive(Debug, Clone)]
pub struct SignupForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub password_confirm: String,
}

impl SignupForm {
    pub fn new(username: &str, email: &str, password: &str, password_confirm: &str) -> Self {
        Self {
            username: username.trim().to_string(),
            email: email.trim().to_string(),
            password: password.to_string(),
            password_confirm: password_confirm.to_string(),
        }
    }

    /// Check fields in order and report the first violation.
    pub fn validate(&self, policy: SignupPolicy) -> Result<(), ValidationError> {
        let username_len = self.username.chars().count();
        if username_len < MIN_USERNAME_LEN {
            return Err(ValidationError::UsernameTooShort(MIN_USERNAME_LEN));
        }
        if username_len > MAX_FIELD_LEN {
            return Err(ValidationError::UsernameTooLong(MAX_FIELD_LEN));
        }

        if self.email.is_empty() {
            return Err(ValidationError::MissingEmail);
        }
        if policy.checks_email_format() && !(self.email.contains('@') && self.email.contains('.'))
        {
            return Err(ValidationError::InvalidEmail);
        }

        let min = policy.min_password_len();
        let password_len = self.password.chars().count();
        if password_len < min {
            return Err(ValidationError::PasswordTooShort(min));
        }
        if password_len > MAX_FIELD_LEN {
            return Err(ValidationError::PasswordTooLong(MAX_FIELD_LEN));
        }

        if self.password != self.password_confirm {
            return Err(ValidationError::PasswordMismatch);
        }

        Ok(())
    }
}

/// Trim both fields and require them to be non-empty.
pub fn validate_diary(title: &str, content: &str) -> Result<NewDiaryEntry, ValidationError> {
    let title = title.trim();
    let content = content.trim();
    if title.is_empty() || content.is_empty() {
        return Err(ValidationError::MissingDiaryFields);
    }
    Ok(NewDiaryEntry {
        title: title.to_string(),
        content: content.to_string(),
    })
}

/// Trim the fields of a partial edit. A field that is set must not be blank,
/// and at least one field must be set.
pub fn validate_update(update: &DiaryUpdate) -> Result<DiaryUpdate, ValidationError> {
    if update.is_empty() {
        return Err(ValidationError::EmptyUpdate);
    }

    let trimmed = |field: &Option<String>| -> Result<Option<String>, ValidationError> {
        match field.as_deref().map(str::trim) {
            Some("") => Err(ValidationError::MissingDiaryFields),
            Some(value) => Ok(Some(value.to_string())),
            None => Ok(None),
        }
    };

    Ok(DiaryUpdate {
        title: trimmed(&update.title)?,
        content: trimmed(&update.content)?,
    })
}
