//! My Diary API client implementation

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::{Client as HttpClient, Method, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::api::{AuthApi, ContentApi, DiaryEntryApi};
use super::models::{
    DiaryEntry, DiaryUpdate, LoginRequest, LoginResponse, NewDiaryEntry, Question, Quote,
    QuoteBookmark, RegisterRequest, UserInfo,
};
use crate::config::Config;
use crate::error::{ApiError, Result};
use crate::session::SessionManager;

/// Authenticated HTTP client for the diary backend.
///
/// The bearer token is read from the [`SessionManager`] on every request, so
/// a login or logout takes effect for the next call without rebuilding the
/// client.
pub struct DiaryClient {
    http: HttpClient,
    base_url: String,
    auth_prefix: String,
    api_prefix: String,
    session: Arc<SessionManager>,
}

impl DiaryClient {
    /// Create a client from the loaded configuration
    pub fn new(config: &Config, session: Arc<SessionManager>) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.api_host.trim_end_matches('/').to_string(),
            auth_prefix: normalize_prefix(&config.auth_prefix),
            api_prefix: normalize_prefix(&config.api_prefix),
            session,
        })
    }

    /// Base URL requests are sent to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn auth_path(&self, path: &str) -> String {
        format!("{}{}", self.auth_prefix, path)
    }

    fn api_path(&self, path: &str) -> String {
        format!("{}{}", self.api_prefix, path)
    }

    /// Make an authenticated request and parse the JSON response.
    ///
    /// Attaches `Authorization: Bearer <token>` when a session exists. A body,
    /// when given, is sent as JSON.
    pub async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<T> {
        let response = self.send(method, path, body, true).await?;
        parse_json(response).await
    }

    /// Make an authenticated request where only the status matters
    async fn request_empty(&self, method: Method, path: &str, body: Option<Value>) -> Result<()> {
        self.send(method, path, body, true).await?;
        Ok(())
    }

    /// Send a request and turn any non-2xx status into `ApiError::Rejected`
    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
        authenticated: bool,
    ) -> Result<Response> {
        let url = format!("{}{}", self.base_url, path);
        debug!("{} {}", method, url);

        let mut request = self.http.request(method, &url);

        if authenticated {
            if let Some(token) = self.session.token() {
                request = request.header("Authorization", format!("Bearer {}", token));
            }
        }

        if let Some(body) = body {
            // .json() sets Content-Type: application/json
            request = request.json(&body);
        }

        let response = request.send().await.map_err(ApiError::from)?;

        let status = response.status();
        debug!("{} -> {}", url, status);

        if status.is_success() {
            Ok(response)
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::rejected(status.as_u16(), &body).into())
        }
    }
}

/// Ensure a prefix starts with `/` and has no trailing slash; empty stays empty
fn normalize_prefix(prefix: &str) -> String {
    let trimmed = prefix.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{}", trimmed)
    }
}

/// Read the body and deserialize it, reporting failures as `ApiError::Parse`
async fn parse_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    let text = response
        .text()
        .await
        .map_err(|e| ApiError::Network(format!("Failed to read response: {}", e)))?;

    serde_json::from_str(&text)
        .map_err(|e| ApiError::Parse(format!("Failed to parse response: {}", e)).into())
}

#[async_trait]
impl AuthApi for DiaryClient {
    async fn login(&self, username: &str, password: &str) -> Result<LoginResponse> {
        let body = serde_json::to_value(LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        })?;

        let response = self
            .send(Method::POST, &self.auth_path("/login"), Some(body), false)
            .await?;
        parse_json(response).await
    }

    async fn register(&self, username: &str, email: &str, password: &str) -> Result<()> {
        let body = serde_json::to_value(RegisterRequest {
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        })?;

        self.send(Method::POST, &self.auth_path("/register"), Some(body), false)
            .await?;
        Ok(())
    }

    async fn me(&self) -> Result<UserInfo> {
        self.request(Method::GET, &self.auth_path("/me"), None)
            .await
    }

    async fn logout(&self) -> Result<()> {
        self.request_empty(Method::POST, &self.auth_path("/logout"), None)
            .await
    }
}

#[async_trait]
impl DiaryEntryApi for DiaryClient {
    async fn list_diaries(&self, limit: Option<usize>) -> Result<Vec<DiaryEntry>> {
        let path = match limit {
            Some(limit) => format!("{}?limit={}", self.api_path("/diary"), limit),
            None => self.api_path("/diary"),
        };
        self.request(Method::GET, &path, None).await
    }

    async fn create_diary(&self, entry: &NewDiaryEntry) -> Result<()> {
        let body = serde_json::to_value(entry)?;
        self.request_empty(Method::POST, &self.api_path("/diary"), Some(body))
            .await
    }

    async fn get_diary(&self, id: i64) -> Result<DiaryEntry> {
        let path = self.api_path(&format!("/diary/{}", id));
        self.request(Method::GET, &path, None).await
    }

    async fn update_diary(&self, id: i64, update: &DiaryUpdate) -> Result<DiaryEntry> {
        let path = self.api_path(&format!("/diary/{}", id));
        let body = serde_json::to_value(update)?;
        self.request(Method::PUT, &path, Some(body)).await
    }

    async fn delete_diary(&self, id: i64) -> Result<()> {
        let path = self.api_path(&format!("/diary/{}", id));
        self.request_empty(Method::DELETE, &path, None).await
    }
}

#[async_trait]
impl ContentApi for DiaryClient {
    async fn random_question(&self) -> Result<Question> {
        self.request(Method::GET, &self.api_path("/question/random"), None)
            .await
    }

    async fn random_quote(&self) -> Result<Quote> {
        self.request(Method::GET, &self.api_path("/quote/random"), None)
            .await
    }

    async fn bookmark_quote(&self) -> Result<()> {
        self.request_empty(Method::POST, &self.api_path("/quote/bookmark"), None)
            .await
    }

    async fn bookmarks(&self) -> Result<Vec<QuoteBookmark>> {
        self.request(Method::GET, &self.api_path("/quotes/bookmarks"), None)
            .await
    }

    async fn remove_bookmark(&self, quote_id: i64) -> Result<()> {
        let path = self.api_path(&format!("/quotes/{}/bookmark", quote_id));
        self.request_empty(Method::DELETE, &path, None).await
    }
}
