//! My Diary API client

pub mod api;
pub mod diary;
#[cfg(test)]
pub mod mock;
pub mod models;

pub use api::{AuthApi, ContentApi, DiaryEntryApi};
pub use diary::DiaryClient;
#[cfg(test)]
pub use mock::MockDiaryClient;

/// Full backend surface used by the view controllers
pub trait DiaryApi: AuthApi + DiaryEntryApi + ContentApi {}

impl<T: AuthApi + DiaryEntryApi + ContentApi> DiaryApi for T {}
