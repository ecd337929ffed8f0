//! Mock diary API client for testing
//!
//! Provides an in-memory implementation of the API traits so view
//! controllers can be tested without a backend.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

use super::api::{AuthApi, ContentApi, DiaryEntryApi};
use super::models::{
    DiaryEntry, DiaryUpdate, LoginResponse, NewDiaryEntry, Question, Quote, QuoteBookmark,
    UserInfo,
};
use crate::error::{ApiError, Result};

/// Mock API client for testing.
///
/// Configure responses via builder methods, then hand it to a controller.
///
/// # Example
/// ```ignore
/// let mock = MockDiaryClient::new()
///     .with_diaries(vec![DiaryEntry::new("T", "C")])
///     .await;
///
/// let entries = mock.list_diaries(None).await?;
/// assert_eq!(entries.len(), 1);
/// ```
#[derive(Default)]
pub struct MockDiaryClient {
    /// Login response; `None` answers with a default token
    login: Arc<Mutex<Option<LoginResponse>>>,
    /// User returned from `me`
    user: Arc<Mutex<Option<UserInfo>>>,
    /// Stored entries, newest first
    diaries: Arc<Mutex<Vec<DiaryEntry>>>,
    /// Question returned from `random_question`
    question: Arc<Mutex<Option<Question>>>,
    /// Quote returned from `random_quote`
    quote: Arc<Mutex<Option<Quote>>>,
    /// Bookmarked quotes
    bookmarks: Arc<Mutex<Vec<QuoteBookmark>>>,
    /// Usernames that already exist
    existing_users: Arc<Mutex<Vec<String>>>,
    /// Error to return on the next call of any method - consumed on use
    error: Arc<Mutex<Option<ApiError>>>,
    /// Errors returned by one method on every call
    method_errors: Arc<Mutex<HashMap<&'static str, ApiError>>>,
    /// Track number of calls for verification
    call_count: Arc<Mutex<CallCounts>>,
    /// Captured requests for test assertions
    captured_requests: Arc<Mutex<Vec<CapturedRequest>>>,
}

/// Tracks API call counts for test verification
#[derive(Default, Debug, Clone)]
pub struct CallCounts {
    pub login: usize,
    pub register: usize,
    pub me: usize,
    pub logout: usize,
    pub list_diaries: usize,
    pub create_diary: usize,
    pub get_diary: usize,
    pub update_diary: usize,
    pub delete_diary: usize,
    pub random_question: usize,
    pub random_quote: usize,
    pub bookmark_quote: usize,
    pub bookmarks: usize,
    pub remove_bookmark: usize,
}

impl CallCounts {
    /// Get total number of API calls made.
    pub fn total(&self) -> usize {
        self.login
            + self.register
            + self.me
            + self.logout
            + self.list_diaries
            + self.create_diary
            + self.get_diary
            + self.update_diary
            + self.delete_diary
            + self.random_question
            + self.random_quote
            + self.bookmark_quote
            + self.bookmarks
            + self.remove_bookmark
    }
}

/// A captured API request for test assertions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedRequest {
    /// The API method called (e.g., "login", "list_diaries")
    pub method: String,
    /// Salient argument, such as a username or a limit
    pub detail: Option<String>,
}

impl MockDiaryClient {
    /// Create a new mock client with default (empty) responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the response to `login`.
    pub async fn with_login(self, response: LoginResponse) -> Self {
        *self.login.lock().await = Some(response);
        self
    }

    /// Configure the user returned by `me`.
    pub async fn with_user(self, user: UserInfo) -> Self {
        *self.user.lock().await = Some(user);
        self
    }

    /// Configure stored diary entries, newest first.
    pub async fn with_diaries(self, diaries: Vec<DiaryEntry>) -> Self {
        *self.diaries.lock().await = diaries;
        self
    }

    /// Configure the question returned by `random_question`.
    pub async fn with_question(self, question: Question) -> Self {
        *self.question.lock().await = Some(question);
        self
    }

    /// Configure the quote returned by `random_quote`.
    pub async fn with_quote(self, quote: Quote) -> Self {
        *self.quote.lock().await = Some(quote);
        self
    }

    /// Configure the caller's bookmarked quotes.
    pub async fn with_bookmarks(self, bookmarks: Vec<QuoteBookmark>) -> Self {
        *self.bookmarks.lock().await = bookmarks;
        self
    }

    /// Mark a username as already registered.
    pub async fn with_existing_user(self, username: &str) -> Self {
        self.existing_users.lock().await.push(username.to_string());
        self
    }

    /// Configure an error to return on the next API call.
    /// The error is consumed after one use.
    pub async fn with_error(self, error: ApiError) -> Self {
        *self.error.lock().await = Some(error);
        self
    }

    /// Make every call of `method` fail with `error`.
    pub async fn with_method_error(self, method: &'static str, error: ApiError) -> Self {
        self.method_errors.lock().await.insert(method, error);
        self
    }

    /// Current bookmarks.
    pub async fn stored_bookmarks(&self) -> Vec<QuoteBookmark> {
        self.bookmarks.lock().await.clone()
    }

    /// Get the call counts for verification in tests.
    pub async fn call_counts(&self) -> CallCounts {
        self.call_count.lock().await.clone()
    }

    /// Get all captured requests for test assertions.
    pub async fn captured_requests(&self) -> Vec<CapturedRequest> {
        self.captured_requests.lock().await.clone()
    }

    /// Current stored entries, newest first.
    pub async fn diaries(&self) -> Vec<DiaryEntry> {
        self.diaries.lock().await.clone()
    }

    /// Record the call, then fail if an error is configured for it.
    async fn begin(&self, method: &'static str, detail: Option<String>) -> Result<()> {
        self.captured_requests.lock().await.push(CapturedRequest {
            method: method.to_string(),
            detail,
        });

        {
            let mut counts = self.call_count.lock().await;
            match method {
                "login" => counts.login += 1,
                "register" => counts.register += 1,
                "me" => counts.me += 1,
                "logout" => counts.logout += 1,
                "list_diaries" => counts.list_diaries += 1,
                "create_diary" => counts.create_diary += 1,
                "get_diary" => counts.get_diary += 1,
                "update_diary" => counts.update_diary += 1,
                "delete_diary" => counts.delete_diary += 1,
                "random_question" => counts.random_question += 1,
                "random_quote" => counts.random_quote += 1,
                "bookmark_quote" => counts.bookmark_quote += 1,
                "bookmarks" => counts.bookmarks += 1,
                "remove_bookmark" => counts.remove_bookmark += 1,
                _ => {}
            }
        }

        if let Some(e) = self.error.lock().await.take() {
            return Err(e.into());
        }

        if let Some(e) = self.method_errors.lock().await.get(method) {
            return Err(e.clone().into());
        }

        Ok(())
    }
}

fn not_found(what: &str) -> ApiError {
    ApiError::rejected(404, &format!(r#"{{"detail":"{} not found"}}"#, what))
}

// ============================================================================
// AuthApi Implementation
// ============================================================================

#[async_trait]
impl AuthApi for MockDiaryClient {
    async fn login(&self, username: &str, _password: &str) -> Result<LoginResponse> {
        self.begin("login", Some(username.to_string())).await?;

        let login = self.login.lock().await;
        Ok(login.clone().unwrap_or_else(|| LoginResponse {
            access_token: "mock-token".to_string(),
            user: None,
        }))
    }

    async fn register(&self, username: &str, _email: &str, _password: &str) -> Result<()> {
        self.begin("register", Some(username.to_string())).await?;

        let mut users = self.existing_users.lock().await;
        if users.iter().any(|u| u == username) {
            return Err(
                ApiError::rejected(400, r#"{"detail":"Username already exists"}"#).into(),
            );
        }
        users.push(username.to_string());
        Ok(())
    }

    async fn me(&self) -> Result<UserInfo> {
        self.begin("me", None).await?;

        let user = self.user.lock().await;
        user.clone().ok_or_else(|| not_found("User").into())
    }

    async fn logout(&self) -> Result<()> {
        self.begin("logout", None).await
    }
}

// ============================================================================
// DiaryEntryApi Implementation
// ============================================================================

#[async_trait]
impl DiaryEntryApi for MockDiaryClient {
    async fn list_diaries(&self, limit: Option<usize>) -> Result<Vec<DiaryEntry>> {
        self.begin("list_diaries", limit.map(|l| l.to_string()))
            .await?;

        // The limit is deliberately ignored, like a server that does not support it
        Ok(self.diaries.lock().await.clone())
    }

    async fn create_diary(&self, entry: &NewDiaryEntry) -> Result<()> {
        self.begin("create_diary", Some(entry.title.clone())).await?;

        let mut diaries = self.diaries.lock().await;
        let next_id = diaries.iter().filter_map(|d| d.id).max().unwrap_or(0) + 1;
        diaries.insert(
            0,
            DiaryEntry {
                id: Some(next_id),
                ..DiaryEntry::new(entry.title.clone(), entry.content.clone())
            },
        );
        Ok(())
    }

    async fn get_diary(&self, id: i64) -> Result<DiaryEntry> {
        self.begin("get_diary", Some(id.to_string())).await?;

        let diaries = self.diaries.lock().await;
        diaries
            .iter()
            .find(|d| d.id == Some(id))
            .cloned()
            .ok_or_else(|| not_found("Diary").into())
    }

    async fn update_diary(&self, id: i64, update: &DiaryUpdate) -> Result<DiaryEntry> {
        self.begin("update_diary", Some(id.to_string())).await?;

        let mut diaries = self.diaries.lock().await;
        let entry = diaries
            .iter_mut()
            .find(|d| d.id == Some(id))
            .ok_or_else(|| not_found("Diary"))?;

        if let Some(ref title) = update.title {
            entry.title = title.clone();
        }
        if let Some(ref content) = update.content {
            entry.content = content.clone();
        }
        Ok(entry.clone())
    }

    async fn delete_diary(&self, id: i64) -> Result<()> {
        self.begin("delete_diary", Some(id.to_string())).await?;

        let mut diaries = self.diaries.lock().await;
        let before = diaries.len();
        diaries.retain(|d| d.id != Some(id));
        if diaries.len() == before {
            return Err(not_found("Diary").into());
        }
        Ok(())
    }
}

// ============================================================================
// ContentApi Implementation
// ============================================================================

#[async_trait]
impl ContentApi for MockDiaryClient {
    async fn random_question(&self) -> Result<Question> {
        self.begin("random_question", None).await?;

        let question = self.question.lock().await;
        question
            .clone()
            .ok_or_else(|| not_found("Question").into())
    }

    async fn random_quote(&self) -> Result<Quote> {
        self.begin("random_quote", None).await?;

        let quote = self.quote.lock().await;
        quote.clone().ok_or_else(|| not_found("Quote").into())
    }

    async fn bookmark_quote(&self) -> Result<()> {
        self.begin("bookmark_quote", None).await?;
        Ok(())
    }

    async fn bookmarks(&self) -> Result<Vec<QuoteBookmark>> {
        self.begin("bookmarks", None).await?;
        Ok(self.bookmarks.lock().await.clone())
    }

    async fn remove_bookmark(&self, quote_id: i64) -> Result<()> {
        self.begin("remove_bookmark", Some(quote_id.to_string()))
            .await?;

        let mut bookmarks = self.bookmarks.lock().await;
        let before = bookmarks.len();
        bookmarks.retain(|b| b.quote.id != Some(quote_id));
        if bookmarks.len() == before {
            return Err(not_found("Bookmark").into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_client_default_login() {
        let mock = MockDiaryClient::new();
        let resp = mock.login("alice", "pw").await.unwrap();
        assert_eq!(resp.access_token, "mock-token");
    }

    #[tokio::test]
    async fn test_mock_client_with_error() {
        let mock = MockDiaryClient::new()
            .with_error(ApiError::rejected(401, "nope"))
            .await;

        let result = mock.login("alice", "pw").await;
        assert!(result.is_err());

        // Error is consumed, next call succeeds
        let result = mock.login("alice", "pw").await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_mock_client_method_error_is_persistent() {
        let mock = MockDiaryClient::new()
            .with_method_error("random_quote", ApiError::Network("down".to_string()))
            .await;

        assert!(mock.random_quote().await.is_err());
        assert!(mock.random_quote().await.is_err());
        assert!(mock.bookmark_quote().await.is_ok());
    }

    #[tokio::test]
    async fn test_mock_client_call_counts() {
        let mock = MockDiaryClient::new();

        mock.list_diaries(Some(3)).await.unwrap();
        mock.list_diaries(None).await.unwrap();
        mock.bookmark_quote().await.unwrap();

        let counts = mock.call_counts().await;
        assert_eq!(counts.list_diaries, 2);
        assert_eq!(counts.bookmark_quote, 1);
        assert_eq!(counts.total(), 3);
    }

    #[tokio::test]
    async fn test_mock_client_create_prepends_with_id() {
        let mock = MockDiaryClient::new()
            .with_diaries(vec![DiaryEntry {
                id: Some(4),
                ..DiaryEntry::new("Old", "old")
            }])
            .await;

        mock.create_diary(&NewDiaryEntry {
            title: "New".to_string(),
            content: "new".to_string(),
        })
        .await
        .unwrap();

        let diaries = mock.diaries().await;
        assert_eq!(diaries[0].title, "New");
        assert_eq!(diaries[0].id, Some(5));
    }

    #[tokio::test]
    async fn test_mock_client_register_duplicate() {
        let mock = MockDiaryClient::new().with_existing_user("alice").await;

        assert!(mock.register("alice", "a@x.io", "pw1").await.is_err());
        assert!(mock.register("bob", "b@x.io", "pw1").await.is_ok());
        assert!(mock.register("bob", "b@x.io", "pw1").await.is_err());
    }

    #[tokio::test]
    async fn test_mock_client_captured_requests() {
        let mock = MockDiaryClient::new();

        mock.list_diaries(Some(3)).await.unwrap();

        let captured = mock.captured_requests().await;
        assert_eq!(captured.len(), 1);
        assert_eq!(captured[0].method, "list_diaries");
        assert_eq!(captured[0].detail.as_deref(), Some("3"));
    }

    #[tokio::test]
    async fn test_mock_client_remove_bookmark_by_quote_id() {
        let mock = MockDiaryClient::new()
            .with_bookmarks(vec![QuoteBookmark {
                id: 1,
                quote: Quote {
                    id: Some(7),
                    content: "Stay curious.".to_string(),
                    author: None,
                },
            }])
            .await;

        assert!(mock.remove_bookmark(1).await.is_err());
        assert!(mock.remove_bookmark(7).await.is_ok());
        assert!(mock.stored_bookmarks().await.is_empty());
        assert_eq!(mock.call_counts().await.remove_bookmark, 2);
    }

    #[tokio::test]
    async fn test_mock_client_delete_missing() {
        let mock = MockDiaryClient::new();
        let err = mock.delete_diary(1).await.unwrap_err();
        assert!(err.to_string().contains("not found"));
    }
}
