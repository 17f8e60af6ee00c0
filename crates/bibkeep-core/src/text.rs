//! Text helpers shared by extraction and rendering
//!
//! Window sizes and truncation limits are counted in characters, not bytes,
//! so multi-byte content can never be split inside a codepoint.

/// First `max` characters of `s` as a subslice
pub fn char_prefix(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// Whether `s` is longer than `max` characters
pub fn exceeds_chars(s: &str, max: usize) -> bool {
    s.chars().nth(max).is_some()
}
