pub const DEFAULT_PREVIEW_CHARS: usize = 300;

/// First `max_chars` characters of `text`, with `...` appended when cut.
///
/// Counts characters, not bytes, so multi-byte text is never split.
pub fn preview(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}
