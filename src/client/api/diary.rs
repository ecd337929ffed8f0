//! Diary entry API trait

use async_trait::async_trait;

use crate::client::models::{DiaryEntry, DiaryUpdate, NewDiaryEntry};
use crate::error::Result;

/// Operations on the caller's own diary entries
#[async_trait]
pub trait DiaryEntryApi: Send + Sync {
    /// List entries, most recent first as ordered by the server.
    ///
    /// `limit` is sent as a query parameter; callers should not assume the
    /// server honours it.
    async fn list_diaries(&self, limit: Option<usize>) -> Result<Vec<DiaryEntry>>;

    /// Create an entry
    async fn create_diary(&self, entry: &NewDiaryEntry) -> Result<()>;

    /// Fetch one entry by ID
    async fn get_diary(&self, id: i64) -> Result<DiaryEntry>;

    /// Partially update an entry
    async fn update_diary(&self, id: i64, update: &DiaryUpdate) -> Result<DiaryEntry>;

    /// Delete an entry
    async fn delete_diary(&self, id: i64) -> Result<()>;
}
