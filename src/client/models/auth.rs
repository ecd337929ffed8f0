//! Authentication models

use serde::{Deserialize, Serialize};

/// Body of `POST /login`
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Successful login response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Bearer token for subsequent requests
    pub access_token: String,

    /// Logged-in user, when the backend includes it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<UserInfo>,
}

/// Body of `POST /register`
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Current user as returned by `GET /me` and embedded in login responses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    /// User ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Username (login name)
    pub username: String,

    /// Email address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl UserInfo {
    /// Build a user with only a username.
    pub fn named(username: impl Into<String>) -> Self {
        Self {
            id: None,
            username: username.into(),
            email: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_response_without_user() {
        let resp: LoginResponse = serde_json::from_str(r#"{"access_token":"tok123"}"#).unwrap();
        assert_eq!(resp.access_token, "tok123");
        assert!(resp.user.is_none());
    }

    #[test]
    fn test_login_response_with_user() {
        let resp: LoginResponse = serde_json::from_str(
            r#"{"access_token":"tok","user":{"id":7,"username":"alice","email":"a@example.com"}}"#,
        )
        .unwrap();
        let user = resp.user.unwrap();
        assert_eq!(user.id, Some(7));
        assert_eq!(user.username, "alice");
    }

    #[test]
    fn test_user_info_ignores_unknown_fields() {
        let user: UserInfo =
            serde_json::from_str(r#"{"username":"bob","created_at":"2025-01-01"}"#).unwrap();
        assert_eq!(user, UserInfo::named("bob"));
    }
}
