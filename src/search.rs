//! Literal text search over a [`TextBuffer`].
//!
//! Offsets are character offsets. Backward search returns the last match that starts
//! at or before the given offset, so repeated "find previous" walks toward the start.

use crate::editable::TextBuffer;

fn chars_equal(a: char, b: char, match_case: bool) -> bool {
    if match_case {
        a == b
    } else {
        a == b || a.to_lowercase().eq(b.to_lowercase())
    }
}

fn matches_at(haystack: &[char], needle: &[char], start: usize, match_case: bool) -> bool {
    haystack[start..start + needle.len()]
        .iter()
        .zip(needle)
        .all(|(&h, &n)| chars_equal(h, n, match_case))
}

/// Find the first occurrence of `needle` starting at or after `from`
pub fn find_forward<B: TextBuffer + ?Sized>(
    buffer: &B,
    needle: &str,
    from: usize,
    match_case: bool,
) -> Option<usize> {
    let needle: Vec<char> = needle.chars().collect();
    if needle.is_empty() {
        return None;
    }
    let haystack: Vec<char> = buffer.chars().collect();
    let last_start = haystack.len().checked_sub(needle.len())?;
    (from..=last_start).find(|&start| matches_at(&haystack, &needle, start, match_case))
}

/// Find the last occurrence of `needle` starting at or before `from`
pub fn find_backward<B: TextBuffer + ?Sized>(
    buffer: &B,
    needle: &str,
    from: usize,
    match_case: bool,
) -> Option<usize> {
    let needle: Vec<char> = needle.chars().collect();
    if needle.is_empty() {
        return None;
    }
    let haystack: Vec<char> = buffer.chars().collect();
    let last_start = haystack.len().checked_sub(needle.len())?;
    (0..=from.min(last_start))
        .rev()
        .find(|&start| matches_at(&haystack, &needle, start, match_case))
}
