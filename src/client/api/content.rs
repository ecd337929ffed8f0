//! Question and quote API trait

use async_trait::async_trait;

use crate::client::models::{Question, Quote, QuoteBookmark};
use crate::error::Result;

/// Read-only auxiliary content plus the quote bookmark action
#[async_trait]
pub trait ContentApi: Send + Sync {
    /// One random writing prompt
    async fn random_question(&self) -> Result<Question>;

    /// One random quote
    async fn random_quote(&self) -> Result<Quote>;

    /// Bookmark the current quote for the caller
    async fn bookmark_quote(&self) -> Result<()>;

    /// The caller's bookmarked quotes
    async fn bookmarks(&self) -> Result<Vec<QuoteBookmark>>;

    /// Remove the bookmark on one quote
    async fn remove_bookmark(&self, quote_id: i64) -> Result<()>;
}
