//! Diary API data models
//!
//! Request bodies and response shapes exchanged with the backend.

mod auth;
mod content;
mod diary;

pub use auth::{LoginRequest, LoginResponse, RegisterRequest, UserInfo};
pub use content::{Question, Quote, QuoteBookmark};
pub use diary::{DiaryEntry, DiaryUpdate, NewDiaryEntry};
