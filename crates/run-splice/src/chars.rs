//! Char-indexed views over UTF-8 strings.
//!
//! Offsets throughout the crate count `char`s. These helpers translate them
//! into byte positions right before a `String` is sliced or edited.

pub(crate) fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Byte position of the `ix`-th char, or `s.len()` when `ix` is past the end.
pub(crate) fn byte_index(s: &str, ix: usize) -> usize {
    s.char_indices().nth(ix).map(|(b, _)| b).unwrap_or(s.len())
}

/// Chars `[start, end)`, clamped to the string like a slice would be in a
/// forgiving language. `start >= end` gives an empty slice.
pub(crate) fn char_slice(s: &str, start: usize, end: usize) -> &str {
    let start = byte_index(s, start);
    let end = byte_index(s, end);
    if start >= end {
        return "";
    }
    &s[start..end]
}

/// Everything before char `keep_to` followed by everything from char
/// `resume_at` on.
pub(crate) fn cut(s: &str, keep_to: usize, resume_at: usize) -> String {
    let head = &s[..byte_index(s, keep_to)];
    let tail = &s[byte_index(s, resume_at)..];
    let mut out = String::with_capacity(head.len() + tail.len());
    out.push_str(head);
    out.push_str(tail);
    out
}

pub(crate) fn insert_at(s: &mut String, ix: usize, text: &str) {
    let at = byte_index(s, ix);
    s.insert_str(at, text);
}
