//! Display model implementations for table and JSON output
//!
//! Display models turn API response types into rows with CLI-friendly
//! column names.

mod common;
mod diary;
mod quote;

pub use diary::{DiaryDisplay, RecentDiaryDisplay};
pub use quote::BookmarkDisplay;
