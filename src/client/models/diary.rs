//! Diary entry models

use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A diary entry as returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiaryEntry {
    /// Entry ID (server-assigned)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Entry title
    pub title: String,

    /// Entry body
    pub content: String,

    /// Creation time, as the server reports it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl DiaryEntry {
    /// Build an entry that has not been stored yet.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: None,
            title: title.into(),
            content: content.into(),
            created_at: None,
        }
    }

    /// Creation time as `YYYY-MM-DD HH:MM`, accepting both zoned and naive
    /// timestamps.
    pub fn created_display(&self) -> Option<String> {
        let raw = self.created_at.as_deref()?;
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt.format("%Y-%m-%d %H:%M").to_string());
        }
        NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
            .ok()
            .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
    }
}

/// Body of `POST /diary`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewDiaryEntry {
    pub title: String,
    pub content: String,
}

/// Body of `PUT /diary/{id}`; only set fields change
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DiaryUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl DiaryUpdate {
    /// True when neither field would change.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none()
    }
}
