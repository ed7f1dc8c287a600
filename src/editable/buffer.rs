//! Text storage traits and implementations.
//!
//! Provides `TextBuffer` (read-only) and `TextBufferMut` (read-write) traits
//! that abstract over different storage backends (String for small inputs, Rope for documents).
//! Every offset is a character offset, never a byte offset.

use ropey::Rope;
use std::ops::Range;

/// Read-only view into a text storage.
pub trait TextBuffer {
    /// Total length in characters
    fn len_chars(&self) -> usize;

    /// Check if buffer is empty
    fn is_empty(&self) -> bool {
        self.len_chars() == 0
    }

    /// Get character at offset, None if out of bounds
    fn char_at(&self, offset: usize) -> Option<char>;

    /// Get slice of text as String (end-exclusive character range)
    fn slice(&self, range: Range<usize>) -> String;

    /// Get full content as String (may be expensive for large buffers)
    fn content(&self) -> String;

    /// Iterate over every character in order
    fn chars(&self) -> Box<dyn Iterator<Item = char> + '_>;
}

/// Mutable buffer operations. Extends TextBuffer.
///
/// Callers must pass offsets that are valid for the current length;
/// implementations panic on out-of-range positions.
pub trait TextBufferMut: TextBuffer {
    /// Insert text at character offset
    fn insert(&mut self, offset: usize, text: &str);

    /// Remove text in character range
    fn remove(&mut self, range: Range<usize>);

    /// Replace text in range with new text (remove, then insert)
    fn replace(&mut self, range: Range<usize>, text: &str) {
        self.remove(range.clone());
        self.insert(range.start, text);
    }

    /// Clear all content
    fn clear(&mut self) {
        let len = self.len_chars();
        if len > 0 {
            self.remove(0..len);
        }
    }

    /// Set content, replacing everything
    fn set_content(&mut self, text: &str) {
        self.clear();
        self.insert(0, text);
    }
}

fn check_range(range: &Range<usize>, len: usize) {
    assert!(
        range.start <= range.end && range.end <= len,
        "range {:?} out of bounds for buffer of {} chars",
        range,
        len
    );
}

// =============================================================================
// StringBuffer - for small inputs and tests
// =============================================================================

/// TextBuffer implementation wrapping String.
#[derive(Debug, Clone, Default)]
pub struct StringBuffer {
    text: String,
}

impl StringBuffer {
    pub fn new() -> Self {
        Self {
            text: String::new(),
        }
    }

    /// Create a StringBuffer from a string slice
    pub fn from_text(s: &str) -> Self {
        Self {
            text: s.to_string(),
        }
    }

    /// Access the underlying string
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Convert char offset to byte offset
    fn char_to_byte(&self, char_offset: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_offset)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }
}

impl TextBuffer for StringBuffer {
    fn len_chars(&self) -> usize {
        self.text.chars().count()
    }

    fn char_at(&self, offset: usize) -> Option<char> {
        self.text.chars().nth(offset)
    }

    fn slice(&self, range: Range<usize>) -> String {
        check_range(&range, self.len_chars());
        self.text
            .chars()
            .skip(range.start)
            .take(range.end - range.start)
            .collect()
    }

    fn content(&self) -> String {
        self.text.clone()
    }

    fn chars(&self) -> Box<dyn Iterator<Item = char> + '_> {
        Box::new(self.text.chars())
    }
}

impl TextBufferMut for StringBuffer {
    fn insert(&mut self, offset: usize, text: &str) {
        assert!(
            offset <= self.len_chars(),
            "insert offset {} out of bounds for buffer of {} chars",
            offset,
            self.len_chars()
        );
        let byte_offset = self.char_to_byte(offset);
        self.text.insert_str(byte_offset, text);
    }

    fn remove(&mut self, range: Range<usize>) {
        check_range(&range, self.len_chars());
        let start_byte = self.char_to_byte(range.start);
        let end_byte = self.char_to_byte(range.end);
        self.text.replace_range(start_byte..end_byte, "");
    }
}

// =============================================================================
// RopeBuffer - for document editing
// =============================================================================

/// TextBuffer implementation wrapping ropey::Rope.
/// Used for document editing with efficient operations on large files.
#[derive(Debug, Clone)]
pub struct RopeBuffer {
    rope: Rope,
}

impl RopeBuffer {
    pub fn new() -> Self {
        Self { rope: Rope::new() }
    }

    /// Create a RopeBuffer from a string slice
    pub fn from_text(s: &str) -> Self {
        Self {
            rope: Rope::from_str(s),
        }
    }

    /// Access the underlying Rope for rope-specific operations
    pub fn rope(&self) -> &Rope {
        &self.rope
    }
}

impl Default for RopeBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextBuffer for RopeBuffer {
    fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    fn char_at(&self, offset: usize) -> Option<char> {
        self.rope.get_char(offset)
    }

    fn slice(&self, range: Range<usize>) -> String {
        check_range(&range, self.len_chars());
        if range.is_empty() {
            return String::new();
        }
        self.rope.slice(range).to_string()
    }

    fn content(&self) -> String {
        self.rope.to_string()
    }

    fn chars(&self) -> Box<dyn Iterator<Item = char> + '_> {
        Box::new(self.rope.chars())
    }
}

impl TextBufferMut for RopeBuffer {
    fn insert(&mut self, offset: usize, text: &str) {
        assert!(
            offset <= self.len_chars(),
            "insert offset {} out of bounds for buffer of {} chars",
            offset,
            self.len_chars()
        );
        self.rope.insert(offset, text);
    }

    fn remove(&mut self, range: Range<usize>) {
        check_range(&range, self.len_chars());
        if !range.is_empty() {
            self.rope.remove(range);
        }
    }
}
