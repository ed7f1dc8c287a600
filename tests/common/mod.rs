//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use quill::model::Document;
use quill::syntax::Highlighter;

/// Create a document with given text, highlighting on, unbounded history
pub fn test_doc(text: &str) -> Document {
    Document::with_text(text)
}

/// Type `text` one character at a time starting at `cursor`, returning the final cursor
pub fn type_str(doc: &mut Document, cursor: usize, text: &str) -> usize {
    text.chars().fold(cursor, |cursor, ch| doc.type_char(cursor, ch))
}

/// Press backspace `times` times starting at `cursor`
pub fn backspace_n(doc: &mut Document, cursor: usize, times: usize) -> usize {
    (0..times).fold(cursor, |cursor, _| doc.backspace(cursor))
}

/// Press forward-delete `times` times at `cursor`
pub fn delete_n(doc: &mut Document, cursor: usize, times: usize) -> usize {
    (0..times).fold(cursor, |cursor, _| doc.delete_forward(cursor))
}

/// Undo until the history is exhausted, returning the number of steps taken
pub fn undo_all(doc: &mut Document) -> usize {
    let mut steps = 0;
    while doc.undo() {
        steps += 1;
    }
    steps
}

/// Style letters for `text` (A = plain, B = comment, C = string, D = keyword, E = preprocessor)
pub fn style_letters(text: &str) -> String {
    Highlighter::new().recompute(text).to_letters()
}
