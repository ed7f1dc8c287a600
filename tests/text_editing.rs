//! Text editing tests - insert, delete, undo/redo through the document

mod common;

use common::{backspace_n, delete_n, test_doc, type_str, undo_all};
use quill::editable::{EditCommand, StringBuffer, TextBufferMut};
use quill::EditHistory;

// ========================================================================
// Coalescing
// ========================================================================

#[test]
fn test_typing_run_is_one_undo_step() {
    let mut doc = test_doc("");
    type_str(&mut doc, 0, "abc");

    assert_eq!(doc.history().undo_count(), 1);
    assert!(doc.undo());
    assert_eq!(doc.text(), "");
    assert!(!doc.has_undo());
}

#[test]
fn test_typing_in_two_places_is_two_steps() {
    let mut doc = test_doc("int x;");
    type_str(&mut doc, 6, " y");
    type_str(&mut doc, 0, "static ");

    assert_eq!(doc.text(), "static int x; y");
    doc.undo();
    assert_eq!(doc.text(), "int x; y");
    doc.undo();
    assert_eq!(doc.text(), "int x;");
}

#[test]
fn test_backspace_run_captures_text_in_order() {
    let mut doc = test_doc("hello world");
    backspace_n(&mut doc, 11, 5);

    assert_eq!(doc.text(), "hello ");
    assert_eq!(
        doc.history().undo_commands(),
        &[EditCommand::delete(6, "world")]
    );

    doc.undo();
    assert_eq!(doc.text(), "hello world");
}

#[test]
fn test_forward_delete_run_is_one_step() {
    let mut doc = test_doc("return 0;");
    delete_n(&mut doc, 0, 7);

    assert_eq!(doc.text(), "0;");
    assert_eq!(
        doc.history().undo_commands(),
        &[EditCommand::delete(0, "return ")]
    );
    doc.undo();
    assert_eq!(doc.text(), "return 0;");
}

#[test]
fn test_type_then_backspace_are_separate_steps() {
    let mut doc = test_doc("");
    let cursor = type_str(&mut doc, 0, "whilx");
    let cursor = backspace_n(&mut doc, cursor, 1);
    type_str(&mut doc, cursor, "e");

    assert_eq!(doc.text(), "while");
    assert_eq!(doc.history().undo_count(), 3);

    doc.undo();
    assert_eq!(doc.text(), "whil");
    doc.undo();
    assert_eq!(doc.text(), "whilx");
    doc.undo();
    assert_eq!(doc.text(), "");
}

#[test]
fn test_close_undo_group_splits_typing() {
    let mut doc = test_doc("");
    let cursor = type_str(&mut doc, 0, "if");
    doc.close_undo_group();
    type_str(&mut doc, cursor, " (x)");

    doc.undo();
    assert_eq!(doc.text(), "if");
}

// ========================================================================
// Replace
// ========================================================================

#[test]
fn test_replace_is_delete_plus_insert() {
    let mut doc = test_doc("int x;");
    doc.replace(0..3, "long");

    assert_eq!(doc.text(), "long x;");
    assert_eq!(
        doc.history().undo_commands(),
        &[EditCommand::delete(0, "int"), EditCommand::insert(0, "long")]
    );

    doc.undo();
    assert_eq!(doc.text(), " x;");
    doc.undo();
    assert_eq!(doc.text(), "int x;");
}

// ========================================================================
// Redo
// ========================================================================

#[test]
fn test_redo_reapplies_in_order() {
    let mut doc = test_doc("a");
    let cursor = type_str(&mut doc, 1, "bc");
    backspace_n(&mut doc, cursor, 3);
    assert_eq!(doc.text(), "");

    undo_all(&mut doc);
    assert_eq!(doc.text(), "a");

    assert!(doc.redo());
    assert_eq!(doc.text(), "abc");
    assert!(doc.redo());
    assert_eq!(doc.text(), "");
    assert!(!doc.redo());
}

#[test]
fn test_fresh_edit_after_undo_discards_redo() {
    let mut doc = test_doc("");
    type_str(&mut doc, 0, "abc");
    doc.undo();
    assert!(doc.has_redo());

    type_str(&mut doc, 0, "x");
    assert!(!doc.has_redo());
    assert!(!doc.redo());
    assert_eq!(doc.text(), "x");
}

#[test]
fn test_typing_after_undo_does_not_extend_old_command() {
    let mut doc = test_doc("");
    let cursor = type_str(&mut doc, 0, "ab");
    doc.close_undo_group();
    type_str(&mut doc, cursor, "cd");
    doc.undo();
    assert_eq!(doc.text(), "ab");

    // Continues the "ab" run positionally, but must be its own step
    type_str(&mut doc, 2, "e");
    doc.undo();
    assert_eq!(doc.text(), "ab");
}

#[test]
fn test_undo_redo_on_empty_history_is_noop() {
    let mut doc = test_doc("unchanged");
    assert!(!doc.undo());
    assert!(!doc.redo());
    assert_eq!(doc.text(), "unchanged");
    assert!(!doc.is_modified());
}

// ========================================================================
// Modified flag and styles
// ========================================================================

#[test]
fn test_undo_marks_document_modified() {
    let mut doc = test_doc("x");
    doc.insert(1, "y");
    doc.mark_saved();
    doc.undo();
    assert!(doc.is_modified());
}

#[test]
fn test_styles_track_every_edit() {
    let mut doc = test_doc("");
    let cursor = type_str(&mut doc, 0, "// note");
    assert_eq!(doc.styles().to_letters(), "BBBBBBB");

    backspace_n(&mut doc, 2, 1);
    assert_eq!(doc.text(), "/ note");
    assert_eq!(doc.styles().to_letters(), "AAAAAA");

    doc.undo();
    assert_eq!(doc.styles().to_letters(), "BBBBBBB");
    assert_eq!(doc.styles().len(), cursor);
}

// ========================================================================
// History used directly against a storage
// ========================================================================

#[test]
fn test_history_drives_storage_directly() {
    let mut buf = StringBuffer::from_text("abc");
    let mut history = EditHistory::new();

    history.record_delete(&buf, 0, 1);
    buf.remove(0..1);
    buf.insert(2, "d");
    history.record_insert(&buf, 2, 1);

    assert_eq!(buf.as_str(), "bcd");
    history.undo(&mut buf);
    history.undo(&mut buf);
    assert_eq!(buf.as_str(), "abc");
    history.redo(&mut buf);
    assert_eq!(buf.as_str(), "bc");
}

// ========================================================================
// Search through the document
// ========================================================================

#[test]
fn test_find_next_and_prev_through_document() {
    let mut doc = test_doc("if (a) return; IF (b) return;");
    assert_eq!(doc.find_next("return", 0, true), Some(7));
    assert_eq!(doc.find_next("return", 8, true), Some(22));
    assert_eq!(doc.find_next("return", 23, true), None);

    assert_eq!(doc.find_prev("return", 21, true), Some(7));
    assert_eq!(doc.find_prev("if", 28, true), Some(0));
    assert_eq!(doc.find_prev("if", 28, false), Some(15));
    assert_eq!(doc.find_next("", 0, true), None);

    // Offsets follow edits, including undo
    doc.insert(0, "é ");
    assert_eq!(doc.find_next("return", 0, true), Some(9));
    doc.undo();
    assert_eq!(doc.find_next("return", 0, true), Some(7));
}
