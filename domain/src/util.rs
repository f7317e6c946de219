//! Shared utility functions.

/// Single-line preview of `s` for log messages.
///
/// Newlines are collapsed to spaces and the text is cut after `max_chars`
/// characters, with `...` appended when something was cut.
pub fn preview(s: &str, max_chars: usize) -> String {
    let flat: String = s
        .chars()
        .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
        .collect();
    if flat.chars().count() <= max_chars {
        return flat;
    }
    let mut cut: String = flat.chars().take(max_chars).collect();
    cut.push_str("...");
    cut
}
