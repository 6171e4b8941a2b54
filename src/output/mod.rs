// Output formatting: terminal verdicts and log-safe comment previews.

pub mod terminal;

/// Longest comment excerpt written to a log line.
pub const LOG_PREVIEW_CHARS: usize = 120;

/// Truncate a string to at most `max_chars` characters, appending "..." if truncated.
///
/// Unlike byte slicing (`&text[..120]`), this respects UTF-8 character boundaries
/// and will never panic on multi-byte characters like emoji or accented letters.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        None => text.to_string(),
        Some((cut, _)) => format!("{}...", &text[..cut]),
    }
}

/// Comment excerpt suitable for a single log field.
pub fn log_preview(comment: &str) -> String {
    truncate_chars(comment, LOG_PREVIEW_CHARS)
}
