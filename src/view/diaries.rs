//! Diary list view

use std::sync::Arc;

use log::debug;

use super::messages::{
    DIARIES_LOAD_FAILED, DIARY_DELETE_FAILED, DIARY_DELETED, DIARY_NOT_FOUND, DIARY_UPDATE_FAILED,
    DIARY_UPDATED, NO_DIARIES,
};
use super::validation::validate_update;
use super::{Outcome, Route, Surface};
use crate::client::DiaryApi;
use crate::client::models::DiaryUpdate;
use crate::session::SessionManager;

/// Controller for the full list of the user's entries
pub struct DiaryListController {
    api: Arc<dyn DiaryApi>,
    session: Arc<SessionManager>,
    surface: Arc<dyn Surface>,
}

impl DiaryListController {
    pub fn new(
        api: Arc<dyn DiaryApi>,
        session: Arc<SessionManager>,
        surface: Arc<dyn Surface>,
    ) -> Self {
        Self {
            api,
            session,
            surface,
        }
    }

    /// Redirect to login when there is no session.
    pub fn require_session(&self) -> bool {
        self.session
            .require_session_or_redirect(self.surface.as_ref(), Route::Login)
            .is_some()
    }

    /// Render every entry, or the empty state with a link to compose one.
    pub async fn load(&self) -> Outcome {
        if !self.require_session() {
            return Outcome::Unauthenticated;
        }

        let entries = match self.api.list_diaries(None).await {
            Ok(entries) => entries,
            Err(e) => {
                debug!("Listing diaries failed: {}", e);
                self.surface.show_error(DIARIES_LOAD_FAILED);
                return Outcome::Failed;
            }
        };

        if entries.is_empty() {
            self.surface.render_empty_diaries(NO_DIARIES, Route::Compose);
            return Outcome::Completed;
        }

        self.surface.render_diaries(&entries);
        Outcome::Completed
    }

    pub async fn show(&self, id: i64) -> Outcome {
        if !self.require_session() {
            return Outcome::Unauthenticated;
        }

        match self.api.get_diary(id).await {
            Ok(entry) => {
                self.surface.render_diary(&entry);
                Outcome::Completed
            }
            Err(e) => {
                debug!("Fetching diary {} failed: {}", id, e);
                self.surface.show_error(DIARY_NOT_FOUND);
                Outcome::Failed
            }
        }
    }

    pub async fn update(&self, id: i64, update: &DiaryUpdate) -> Outcome {
        if !self.require_session() {
            return Outcome::Unauthenticated;
        }

        let update = match validate_update(update) {
            Ok(update) => update,
            Err(e) => {
                self.surface.show_error(&e.to_string());
                return Outcome::Invalid;
            }
        };

        match self.api.update_diary(id, &update).await {
            Ok(entry) => {
                self.surface.render_diary(&entry);
                self.surface.alert(DIARY_UPDATED);
                Outcome::Completed
            }
            Err(e) => {
                debug!("Updating diary {} failed: {}", id, e);
                self.surface.show_error(DIARY_UPDATE_FAILED);
                Outcome::Failed
            }
        }
    }

    pub async fn delete(&self, id: i64) -> Outcome {
        if !self.require_session() {
            return Outcome::Unauthenticated;
        }

        match self.api.delete_diary(id).await {
            Ok(()) => {
                self.surface.alert(DIARY_DELETED);
                Outcome::Completed
            }
            Err(e) => {
                debug!("Deleting diary {} failed: {}", id, e);
                self.surface.show_error(DIARY_DELETE_FAILED);
                Outcome::Failed
            }
        }
    }

    pub async fn logout(&self) -> Outcome {
        super::logout(self.api.as_ref(), &self.session, self.surface.as_ref()).await
    }
}
