//! Output formatting for CLI results

use crate::cli::OutputFormat;
use crate::client::models::{DiaryEntry, QuoteBookmark};
use crate::error::Result;
use crate::models::{BookmarkDisplay, DiaryDisplay};

pub mod json;
pub mod pretty;
pub mod table;

/// Trait for types that can be formatted for output
pub trait Formattable {
    /// Format the data according to the specified format
    fn format(&self, format: OutputFormat) -> Result<String>;

    /// Format and print to stdout
    fn print(&self, format: OutputFormat) -> Result<()> {
        println!("{}", self.format(format)?);
        Ok(())
    }
}

impl Formattable for [DiaryEntry] {
    fn format(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Pretty => Ok(pretty::diary_blocks(self)),
            OutputFormat::Table => {
                let rows: Vec<DiaryDisplay> = self.iter().map(DiaryDisplay::from).collect();
                Ok(table::format_table(&rows))
            }
            OutputFormat::Json => Ok(json::format_json(self)?),
        }
    }
}

impl Formattable for DiaryEntry {
    /// A single entry always shows its full body, so table output falls
    /// back to the pretty block.
    fn format(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Pretty | OutputFormat::Table => Ok(pretty::diary_block(self)),
            OutputFormat::Json => Ok(json::format_json(self)?),
        }
    }
}

impl Formattable for [QuoteBookmark] {
    fn format(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Pretty => Ok(pretty::bookmark_list(self)),
            OutputFormat::Table => {
                let rows: Vec<BookmarkDisplay> = self.iter().map(BookmarkDisplay::from).collect();
                Ok(table::format_table(&rows))
            }
            OutputFormat::Json => Ok(json::format_json(self)?),
        }
    }
}
