//! Human-oriented text blocks

use colored::Colorize;

use crate::client::models::{DiaryEntry, QuoteBookmark};

/// One titled block: heading, optional date, then the body.
pub fn diary_block(entry: &DiaryEntry) -> String {
    let mut heading = entry.title.bold().to_string();
    if let Some(id) = entry.id {
        heading = format!("{} {}", heading, format!("#{}", id).dimmed());
    }

    let mut out = heading;
    if let Some(written) = entry.created_display() {
        out.push('\n');
        out.push_str(&written.dimmed().to_string());
    }
    out.push('\n');
    out.push_str(&entry.content);
    out
}

/// Blocks separated by a blank line, in the order given.
pub fn diary_blocks(entries: &[DiaryEntry]) -> String {
    entries
        .iter()
        .map(diary_block)
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Numbered list of titles.
pub fn title_list(entries: &[DiaryEntry]) -> String {
    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| format!("  {}. {}", i + 1, entry.title))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Quoted lines with author and the quote ID used to unbookmark.
pub fn bookmark_list(bookmarks: &[QuoteBookmark]) -> String {
    bookmarks
        .iter()
        .map(|b| {
            let mut line = format!("  \"{}\"", b.quote.content);
            if let Some(ref author) = b.quote.author {
                line.push_str(&format!(" - {}", author));
            }
            if let Some(id) = b.quote.id {
                line.push_str(&format!(" {}", format!("#{}", id).dimmed()));
            }
            line
        })
        .collect::<Vec<_>>()
        .join("\n")
}
