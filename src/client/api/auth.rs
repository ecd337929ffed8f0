//! Authentication API trait

use async_trait::async_trait;

use crate::client::models::{LoginResponse, UserInfo};
use crate::error::Result;

/// Account and token operations
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Exchange credentials for an access token
    async fn login(&self, username: &str, password: &str) -> Result<LoginResponse>;

    /// Create a new account. Only the status of the response matters.
    async fn register(&self, username: &str, email: &str, password: &str) -> Result<()>;

    /// Fetch the user the current token belongs to
    async fn me(&self) -> Result<UserInfo>;

    /// Revoke the current token on the server
    async fn logout(&self) -> Result<()>;
}
