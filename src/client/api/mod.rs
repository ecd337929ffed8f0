//! API trait definitions split by responsibility
//!
//! - [`AuthApi`] - Login, registration, current-user lookup and logout
//! - [`DiaryEntryApi`] - Diary entry CRUD
//! - [`ContentApi`] - Random questions/quotes and quote bookmarks
//!
//! The [`DiaryApi`](super::DiaryApi) super-trait combines all three.

mod auth;
mod content;
mod diary;

pub use auth::AuthApi;
pub use content::ContentApi;
pub use diary::DiaryEntryApi;
