//! Common display utilities and helpers

/// Placeholder for absent values
pub const EMPTY_CELL: &str = "--";

/// Truncate to `max_chars` characters with an ellipsis, keeping the first
/// line only.
pub fn truncate_string(s: &str, max_chars: usize) -> String {
    let first_line = s.lines().next().unwrap_or("");
    let multiline = first_line.len() < s.trim_end().len();

    if first_line.chars().count() <= max_chars {
        if multiline {
            return format!("{}...", first_line);
        }
        return first_line.to_string();
    }

    let kept: String = first_line
        .chars()
        .take(max_chars.saturating_sub(3))
        .collect();
    format!("{}...", kept)
}
