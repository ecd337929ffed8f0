//! View controllers
//!
//! Each controller owns the logic of one view and talks to three
//! collaborators: the [`SessionManager`](crate::session::SessionManager), a
//! [`DiaryApi`](crate::client::DiaryApi) implementation, and a [`Surface`]
//! that displays results. Controllers never fail: every path ends in a
//! message on the surface, a navigation, or a silent no-op, and the returned
//! [`Outcome`] says which.

mod auth;
mod dashboard;
mod diaries;
#[cfg(test)]
pub mod testing;
mod validation;

use log::{debug, warn};

use crate::client::DiaryApi;
use crate::client::models::{DiaryEntry, QuoteBookmark};
use crate::session::SessionManager;

pub use auth::{AuthController, AuthTab};
pub use dashboard::{DEFAULT_RECENT_LIMIT, DashboardController};
pub use diaries::DiaryListController;
pub use validation::SignupPolicy;

/// User-facing messages with fixed wording
pub mod messages {
    pub const INVALID_CREDENTIALS: &str = "Invalid username or password.";
    pub const USER_EXISTS: &str = "User already exists.";
    pub const SIGNUP_COMPLETE: &str = "Sign-up complete! Please log in.";
    pub const DIARY_SAVED: &str = "Diary saved.";
    pub const DIARY_SAVE_FAILED: &str = "Could not save diary.";
    pub const DIARIES_LOAD_FAILED: &str = "Could not load diaries.";
    pub const DIARY_NOT_FOUND: &str = "Could not load that diary.";
    pub const DIARY_UPDATED: &str = "Diary updated.";
    pub const DIARY_UPDATE_FAILED: &str = "Could not update diary.";
    pub const DIARY_DELETED: &str = "Diary deleted.";
    pub const DIARY_DELETE_FAILED: &str = "Could not delete diary.";
    pub const NO_DIARIES: &str = "You haven't written any diaries yet.";
    pub const WRITE_FIRST_DIARY: &str = "Write your first diary";
    pub const QUOTE_BOOKMARKED: &str = "Quote bookmarked!";
    pub const BOOKMARK_FAILED: &str = "Could not bookmark quote.";
    pub const BOOKMARKS_LOAD_FAILED: &str = "Could not load bookmarks.";
    pub const BOOKMARK_REMOVED: &str = "Bookmark removed.";
    pub const BOOKMARK_REMOVE_FAILED: &str = "Could not remove bookmark.";
    pub const LOGOUT_FAILED: &str = "Could not clear the stored session.";
}

/// Navigation targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Unauthenticated entry point
    Login,
    /// Protected dashboard
    Dashboard,
    /// Diary creation flow
    Compose,
}

/// How a controller handler ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The action finished and its result is on the surface
    Completed,
    /// Client-side validation failed; no request was made
    Invalid,
    /// A request failed and a message is on the surface
    Failed,
    /// No session; the surface was navigated away
    Unauthenticated,
}

/// Presentation surface a controller writes to.
///
/// Methods take `&self` so best-effort loaders can run concurrently against
/// one surface.
pub trait Surface: Send + Sync {
    /// Replace the error text
    fn show_error(&self, message: &str);

    /// Remove any error text
    fn clear_error(&self);

    /// Show a one-off notice
    fn alert(&self, message: &str);

    /// Leave the current view
    fn navigate(&self, route: Route);

    /// Display the login or signup form
    fn show_tab(&self, tab: AuthTab);

    fn set_greeting(&self, text: &str);

    fn set_question(&self, text: &str);

    fn set_quote(&self, text: &str);

    /// Empty the diary title/content inputs
    fn clear_diary_inputs(&self);

    /// Dashboard preview: titles only, nothing extra when empty
    fn render_recent_diaries(&self, entries: &[DiaryEntry]);

    /// Full list: one titled block per entry
    fn render_diaries(&self, entries: &[DiaryEntry]);

    /// A single entry
    fn render_diary(&self, entry: &DiaryEntry);

    /// Empty-state message with a link to `link`
    fn render_empty_diaries(&self, message: &str, link: Route);

    /// Bookmarked quotes, possibly none
    fn render_bookmarks(&self, bookmarks: &[QuoteBookmark]);
}

/// Revoke the token on the server, then clear the local session and return
/// to the login view.
///
/// The server call is best-effort; the local session is cleared either way.
pub(crate) async fn logout(
    api: &dyn DiaryApi,
    session: &SessionManager,
    surface: &dyn Surface,
) -> Outcome {
    if session.token().is_some() {
        if let Err(e) = api.logout().await {
            debug!("Server logout failed: {}", e);
        }
    }

    if let Err(e) = session.clear_session() {
        warn!("Failed to clear session: {}", e);
        surface.show_error(messages::LOGOUT_FAILED);
        return Outcome::Failed;
    }
    surface.navigate(Route::Login);
    Outcome::Completed
}
