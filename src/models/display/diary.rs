//! Diary entry display models

use serde::Serialize;
use tabled::Tabled;

use super::common::{EMPTY_CELL, truncate_string};
use crate::client::models::DiaryEntry;

/// Width of the content preview column
const PREVIEW_CHARS: usize = 40;

/// Diary entry row for the full list.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct DiaryDisplay {
    #[tabled(rename = "ID")]
    pub id: String,

    /// Creation time as `YYYY-MM-DD HH:MM`
    #[tabled(rename = "WRITTEN")]
    pub written: String,

    #[tabled(rename = "TITLE")]
    pub title: String,

    /// First line of the body, truncated
    #[tabled(rename = "PREVIEW")]
    pub preview: String,
}

impl From<&DiaryEntry> for DiaryDisplay {
    fn from(entry: &DiaryEntry) -> Self {
        Self {
            id: entry
                .id
                .map(|id| id.to_string())
                .unwrap_or_else(|| EMPTY_CELL.to_string()),
            written: entry
                .created_display()
                .unwrap_or_else(|| EMPTY_CELL.to_string()),
            title: entry.title.clone(),
            preview: truncate_string(&entry.content, PREVIEW_CHARS),
        }
    }
}

/// Row of the dashboard's recent-diary preview: position and title only.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct RecentDiaryDisplay {
    #[tabled(rename = "#")]
    pub position: usize,

    #[tabled(rename = "TITLE")]
    pub title: String,
}

impl RecentDiaryDisplay {
    /// Number entries from 1 in the order given.
    pub fn numbered(entries: &[DiaryEntry]) -> Vec<Self> {
        entries
            .iter()
            .enumerate()
            .map(|(i, entry)| Self {
                position: i + 1,
                title: entry.title.clone(),
            })
            .collect()
    }
}
