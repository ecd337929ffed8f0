//! Quote bookmark display models

use serde::Serialize;
use tabled::Tabled;

use super::common::{EMPTY_CELL, truncate_string};
use crate::client::models::QuoteBookmark;

const QUOTE_CHARS: usize = 60;

/// Bookmark row. The quote ID is what `quote unbookmark` takes.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct BookmarkDisplay {
    #[tabled(rename = "QUOTE ID")]
    pub quote_id: String,

    #[tabled(rename = "QUOTE")]
    pub quote: String,

    #[tabled(rename = "AUTHOR")]
    pub author: String,
}

impl From<&QuoteBookmark> for BookmarkDisplay {
    fn from(bookmark: &QuoteBookmark) -> Self {
        Self {
            quote_id: bookmark
                .quote
                .id
                .map(|id| id.to_string())
                .unwrap_or_else(|| EMPTY_CELL.to_string()),
            quote: truncate_string(&bookmark.quote.content, QUOTE_CHARS),
            author: bookmark
                .quote
                .author
                .clone()
                .unwrap_or_else(|| EMPTY_CELL.to_string()),
        }
    }
}
