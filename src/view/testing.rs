//! Surface that records what a controller displayed

use std::sync::Mutex;

use super::{AuthTab, Route, Surface};
use crate::client::models::{DiaryEntry, QuoteBookmark};

#[derive(Default)]
struct Recorded {
    error: Option<String>,
    alerts: Vec<String>,
    navigations: Vec<Route>,
    tabs: Vec<AuthTab>,
    greeting: Option<String>,
    question: Option<String>,
    quote: Option<String>,
    inputs_cleared: bool,
    recent_diaries: Option<Vec<DiaryEntry>>,
    diaries: Option<Vec<DiaryEntry>>,
    diary: Option<DiaryEntry>,
    empty_state: Option<(String, Route)>,
    bookmarks: Option<Vec<QuoteBookmark>>,
}

#[derive(Default)]
pub struct RecordingSurface {
    state: Mutex<Recorded>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    fn with<T>(&self, f: impl FnOnce(&mut Recorded) -> T) -> T {
        let mut state = self.state.lock().unwrap();
        f(&mut state)
    }

    pub fn error(&self) -> Option<String> {
        self.with(|s| s.error.clone())
    }

    pub fn alerts(&self) -> Vec<String> {
        self.with(|s| s.alerts.clone())
    }

    pub fn navigations(&self) -> Vec<Route> {
        self.with(|s| s.navigations.clone())
    }

    pub fn last_tab(&self) -> Option<AuthTab> {
        self.with(|s| s.tabs.last().copied())
    }

    pub fn greeting(&self) -> Option<String> {
        self.with(|s| s.greeting.clone())
    }

    pub fn question(&self) -> Option<String> {
        self.with(|s| s.question.clone())
    }

    pub fn quote(&self) -> Option<String> {
        self.with(|s| s.quote.clone())
    }

    pub fn inputs_cleared(&self) -> bool {
        self.with(|s| s.inputs_cleared)
    }

    pub fn recent_diaries(&self) -> Option<Vec<DiaryEntry>> {
        self.with(|s| s.recent_diaries.clone())
    }

    pub fn diaries(&self) -> Option<Vec<DiaryEntry>> {
        self.with(|s| s.diaries.clone())
    }

    pub fn diary(&self) -> Option<DiaryEntry> {
        self.with(|s| s.diary.clone())
    }

    pub fn empty_state(&self) -> Option<(String, Route)> {
        self.with(|s| s.empty_state.clone())
    }

    pub fn bookmarks(&self) -> Option<Vec<QuoteBookmark>> {
        self.with(|s| s.bookmarks.clone())
    }
}

impl Surface for RecordingSurface {
    fn show_error(&self, message: &str) {
        self.with(|s| s.error = Some(message.to_string()));
    }

    fn clear_error(&self) {
        self.with(|s| s.error = None);
    }

    fn alert(&self, message: &str) {
        self.with(|s| s.alerts.push(message.to_string()));
    }

    fn navigate(&self, route: Route) {
        self.with(|s| s.navigations.push(route));
    }

    fn show_tab(&self, tab: AuthTab) {
        self.with(|s| s.tabs.push(tab));
    }

    fn set_greeting(&self, text: &str) {
        self.with(|s| s.greeting = Some(text.to_string()));
    }

    fn set_question(&self, text: &str) {
        self.with(|s| s.question = Some(text.to_string()));
    }

    fn set_quote(&self, text: &str) {
        self.with(|s| s.quote = Some(text.to_string()));
    }

    fn clear_diary_inputs(&self) {
        self.with(|s| s.inputs_cleared = true);
    }

    fn render_recent_diaries(&self, entries: &[DiaryEntry]) {
        self.with(|s| s.recent_diaries = Some(entries.to_vec()));
    }

    fn render_diaries(&self, entries: &[DiaryEntry]) {
        self.with(|s| s.diaries = Some(entries.to_vec()));
    }

    fn render_diary(&self, entry: &DiaryEntry) {
        self.with(|s| s.diary = Some(entry.clone()));
    }

    fn render_empty_diaries(&self, message: &str, link: Route) {
        self.with(|s| s.empty_state = Some((message.to_string(), link)));
    }

    fn render_bookmarks(&self, bookmarks: &[QuoteBookmark]) {
        self.with(|s| s.bookmarks = Some(bookmarks.to_vec()));
    }
}
