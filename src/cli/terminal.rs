//! Terminal implementation of the view surface
//!
//! Lists and single entries are printed as soon as a controller renders
//! them. Dashboard widgets arrive from concurrent loaders in any order, so
//! they are collected and printed together by [`TerminalSurface::print_dashboard`].

use std::sync::{Mutex, MutexGuard, PoisonError};

use colored::Colorize;
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::client::models::{DiaryEntry, QuoteBookmark};
use crate::error::Result;
use crate::models::RecentDiaryDisplay;
use crate::output::{Formattable, json, pretty, table};
use crate::view::{AuthTab, Route, Surface};

/// Command that opens a route
pub fn route_command(route: Route) -> &'static str {
    match route {
        Route::Login => "mydiary login",
        Route::Dashboard => "mydiary dashboard",
        Route::Compose => "mydiary diary write",
    }
}

/// Dashboard widgets collected during activation
#[derive(Debug, Default, Clone, Serialize)]
pub struct DashboardSnapshot {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub greeting: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub quote: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub recent_diaries: Option<Vec<DiaryEntry>>,
}

impl DashboardSnapshot {
    fn is_empty(&self) -> bool {
        self.greeting.is_none()
            && self.question.is_none()
            && self.quote.is_none()
            && self.recent_diaries.is_none()
    }
}

impl Formattable for DashboardSnapshot {
    fn format(&self, format: OutputFormat) -> Result<String> {
        if format == OutputFormat::Json {
            return Ok(json::format_json(self)?);
        }

        let mut lines = Vec::new();
        if let Some(ref greeting) = self.greeting {
            lines.push(greeting.bold().to_string());
            lines.push(String::new());
        }
        if let Some(ref question) = self.question {
            lines.push(format!("{} {}", "Today's question:".cyan(), question));
        }
        if let Some(ref quote) = self.quote {
            lines.push(format!("{} {}", "Quote:".cyan(), quote.italic()));
        }

        // An empty preview renders nothing extra
        if let Some(ref recent) = self.recent_diaries {
            if !recent.is_empty() {
                lines.push(String::new());
                lines.push("Recent diaries".bold().to_string());
                match format {
                    OutputFormat::Table => {
                        lines.push(table::format_table(&RecentDiaryDisplay::numbered(recent)))
                    }
                    _ => lines.push(pretty::title_list(recent)),
                }
            }
        }

        Ok(lines.join("\n"))
    }
}

#[derive(Default)]
struct TerminalState {
    navigation: Option<Route>,
    dashboard: DashboardSnapshot,
}

/// Surface that writes to stdout/stderr
pub struct TerminalSurface {
    format: OutputFormat,
    state: Mutex<TerminalState>,
}

impl TerminalSurface {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            state: Mutex::new(TerminalState::default()),
        }
    }

    fn state(&self) -> MutexGuard<'_, TerminalState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Last route a controller navigated to, if any
    pub fn navigation(&self) -> Option<Route> {
        self.state().navigation
    }

    /// Print the collected dashboard widgets in a fixed order
    pub fn print_dashboard(&self) -> Result<()> {
        let snapshot = std::mem::take(&mut self.state().dashboard);
        if snapshot.is_empty() && self.format != OutputFormat::Json {
            return Ok(());
        }
        snapshot.print(self.format)
    }

    /// Status lines go to stderr in JSON mode so stdout stays parseable
    fn notice(&self, line: String) {
        if self.format == OutputFormat::Json {
            eprintln!("{}", line);
        } else {
            println!("{}", line);
        }
    }

    fn print_formatted<T: Formattable + ?Sized>(&self, data: &T) {
        if let Err(e) = data.print(self.format) {
            log::warn!("Failed to format output: {}", e);
        }
    }
}

impl Surface for TerminalSurface {
    fn show_error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message.red());
    }

    // Printed lines cannot be withdrawn
    fn clear_error(&self) {}

    fn alert(&self, message: &str) {
        self.notice(format!("{} {}", "•".cyan(), message.bold()));
    }

    fn navigate(&self, route: Route) {
        log::debug!("Navigating to {:?}", route);
        self.state().navigation = Some(route);
    }

    fn show_tab(&self, tab: AuthTab) {
        let heading = match tab {
            AuthTab::Login => "Log in",
            AuthTab::Signup => "Sign up",
        };
        eprintln!("{}", heading.bold());
    }

    fn set_greeting(&self, text: &str) {
        self.state().dashboard.greeting = Some(text.to_string());
    }

    fn set_question(&self, text: &str) {
        self.state().dashboard.question = Some(text.to_string());
    }

    fn set_quote(&self, text: &str) {
        self.state().dashboard.quote = Some(text.to_string());
    }

    // Inputs came from arguments or one-shot prompts
    fn clear_diary_inputs(&self) {}

    fn render_recent_diaries(&self, entries: &[DiaryEntry]) {
        self.state().dashboard.recent_diaries = Some(entries.to_vec());
    }

    fn render_diaries(&self, entries: &[DiaryEntry]) {
        self.print_formatted(entries);
    }

    fn render_diary(&self, entry: &DiaryEntry) {
        self.print_formatted(entry);
    }

    fn render_empty_diaries(&self, message: &str, link: Route) {
        if self.format == OutputFormat::Json {
            self.print_formatted::<[DiaryEntry]>(&[]);
            return;
        }
        println!("{}", message);
        println!(
            "  → {}: {}",
            crate::view::messages::WRITE_FIRST_DIARY,
            route_command(link).cyan()
        );
    }

    fn render_bookmarks(&self, bookmarks: &[QuoteBookmark]) {
        if bookmarks.is_empty() && self.format != OutputFormat::Json {
            println!("No bookmarked quotes yet.");
            println!("  → Bookmark today's quote: {}", "mydiary quote bookmark".cyan());
            return;
        }
        self.print_formatted(bookmarks);
    }
}
