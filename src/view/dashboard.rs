//! Dashboard view
//!
//! The dashboard combines four best-effort widgets (greeting, question,
//! quote, recent diaries) with two critical-path actions (saving a diary and
//! bookmarking the quote). Widget failures are logged and leave the widget
//! untouched; action failures are reported on the surface. The bookmark list
//! hangs off the quote widget.

use std::sync::Arc;

use log::debug;

use super::messages::{
    BOOKMARK_FAILED, BOOKMARK_REMOVE_FAILED, BOOKMARK_REMOVED, BOOKMARKS_LOAD_FAILED,
    DIARY_SAVE_FAILED, DIARY_SAVED, QUOTE_BOOKMARKED,
};
use super::validation::validate_diary;
use super::{Outcome, Route, Surface};
use crate::client::DiaryApi;
use crate::session::SessionManager;

/// Number of entries in the recent-diary preview
pub const DEFAULT_RECENT_LIMIT: usize = 3;

pub struct DashboardController {
    api: Arc<dyn DiaryApi>,
    session: Arc<SessionManager>,
    surface: Arc<dyn Surface>,
    recent_limit: usize,
}

impl DashboardController {
    pub fn new(
        api: Arc<dyn DiaryApi>,
        session: Arc<SessionManager>,
        surface: Arc<dyn Surface>,
        recent_limit: usize,
    ) -> Self {
        Self {
            api,
            session,
            surface,
            recent_limit,
        }
    }

    /// Redirect to login when there is no session.
    pub fn require_session(&self) -> bool {
        self.session
            .require_session_or_redirect(self.surface.as_ref(), Route::Login)
            .is_some()
    }

    /// Guard the view, then fill every widget concurrently.
    pub async fn activate(&self) -> Outcome {
        if !self.require_session() {
            return Outcome::Unauthenticated;
        }

        futures::join!(
            self.load_user(),
            self.load_question(),
            self.load_quote(),
            self.load_my_diaries(self.recent_limit),
        );
        Outcome::Completed
    }

    pub async fn load_user(&self) -> Outcome {
        match self.api.me().await {
            Ok(user) => {
                self.surface
                    .set_greeting(&format!("Hello, {}", user.username));
                Outcome::Completed
            }
            Err(e) => {
                debug!("Skipping greeting: {}", e);
                Outcome::Failed
            }
        }
    }

    pub async fn load_question(&self) -> Outcome {
        match self.api.random_question().await {
            Ok(question) => {
                self.surface.set_question(&question.content);
                Outcome::Completed
            }
            Err(e) => {
                debug!("Skipping question: {}", e);
                Outcome::Failed
            }
        }
    }

    pub async fn load_quote(&self) -> Outcome {
        match self.api.random_quote().await {
            Ok(quote) => {
                self.surface.set_quote(&format!("\"{}\"", quote.content));
                Outcome::Completed
            }
            Err(e) => {
                debug!("Skipping quote: {}", e);
                Outcome::Failed
            }
        }
    }

    /// Render at most `limit` of the newest entries, even if the server
    /// ignores the limit.
    pub async fn load_my_diaries(&self, limit: usize) -> Outcome {
        match self.api.list_diaries(Some(limit)).await {
            Ok(entries) => {
                let recent: Vec<_> = entries.into_iter().take(limit).collect();
                self.surface.render_recent_diaries(&recent);
                Outcome::Completed
            }
            Err(e) => {
                debug!("Skipping recent diaries: {}", e);
                Outcome::Failed
            }
        }
    }

    /// Create an entry, then clear the inputs and refresh the preview.
    pub async fn save_diary(&self, title: &str, content: &str) -> Outcome {
        if !self.require_session() {
            return Outcome::Unauthenticated;
        }

        let entry = match validate_diary(title, content) {
            Ok(entry) => entry,
            Err(e) => {
                self.surface.alert(&e.to_string());
                return Outcome::Invalid;
            }
        };

        if let Err(e) = self.api.create_diary(&entry).await {
            debug!("Save failed: {}", e);
            self.surface.show_error(DIARY_SAVE_FAILED);
            return Outcome::Failed;
        }

        self.surface.clear_diary_inputs();
        self.surface.alert(DIARY_SAVED);
        self.load_my_diaries(self.recent_limit).await;
        Outcome::Completed
    }

    /// Success is only reported for a 2xx answer.
    pub async fn bookmark_quote(&self) -> Outcome {
        if !self.require_session() {
            return Outcome::Unauthenticated;
        }

        match self.api.bookmark_quote().await {
            Ok(()) => {
                self.surface.alert(QUOTE_BOOKMARKED);
                Outcome::Completed
            }
            Err(e) => {
                debug!("Bookmark failed: {}", e);
                self.surface.show_error(BOOKMARK_FAILED);
                Outcome::Failed
            }
        }
    }

    /// List the caller's bookmarked quotes.
    pub async fn load_bookmarks(&self) -> Outcome {
        if !self.require_session() {
            return Outcome::Unauthenticated;
        }

        match self.api.bookmarks().await {
            Ok(bookmarks) => {
                self.surface.render_bookmarks(&bookmarks);
                Outcome::Completed
            }
            Err(e) => {
                debug!("Listing bookmarks failed: {}", e);
                self.surface.show_error(BOOKMARKS_LOAD_FAILED);
                Outcome::Failed
            }
        }
    }

    pub async fn remove_bookmark(&self, quote_id: i64) -> Outcome {
        if !self.require_session() {
            return Outcome::Unauthenticated;
        }

        match self.api.remove_bookmark(quote_id).await {
            Ok(()) => {
                self.surface.alert(BOOKMARK_REMOVED);
                Outcome::Completed
            }
            Err(e) => {
                debug!("Removing bookmark on quote {} failed: {}", quote_id, e);
                self.surface.show_error(BOOKMARK_REMOVE_FAILED);
                Outcome::Failed
            }
        }
    }

    pub async fn logout(&self) -> Outcome {
        super::logout(self.api.as_ref(), &self.session, self.surface.as_ref()).await
    }
}
