//! Document model - a text buffer with its edit history and published styles
//!
//! The document is the edit controller: every mutation goes through an
//! [`ObservedBuffer`] whose notifications feed the history (unless replaying) and
//! trigger a full highlighter pass.

use std::ops::Range;
use std::path::PathBuf;

use crate::config::EngineConfig;
use crate::editable::{
    Change, EditHistory, ModifyListener, ObservedBuffer, Recording, RopeBuffer, TextBuffer,
    TextBufferMut,
};
use crate::search;
use crate::syntax::{Highlighter, StyleBuffer, StyleTag};
use crate::theme::{load_theme, StyleTable, Theme};

/// Published highlighting for one document
#[derive(Debug, Clone)]
struct Highlighting {
    highlighter: Highlighter,
    styles: StyleBuffer,
    enabled: bool,
}

impl Highlighting {
    fn new(enabled: bool) -> Self {
        Self {
            highlighter: Highlighter::new(),
            styles: StyleBuffer::default(),
            enabled,
        }
    }

    fn refresh(&mut self, buffer: &dyn TextBuffer) {
        self.styles = if self.enabled {
            self.highlighter.recompute_chars(buffer.chars())
        } else {
            self.highlighter.clear(buffer.len_chars())
        };
    }
}

/// Notification sink wired to one document's history and styles
struct DocumentEvents<'a> {
    history: &'a mut EditHistory,
    highlighting: &'a mut Highlighting,
    is_modified: &'a mut bool,
}

impl ModifyListener for DocumentEvents<'_> {
    fn pre_delete(
        &mut self,
        buffer: &dyn TextBuffer,
        position: usize,
        count: usize,
        recording: Recording,
    ) {
        if recording.is_enabled() {
            self.history.record_delete(buffer, position, count);
        }
    }

    fn modified(&mut self, buffer: &dyn TextBuffer, change: Change, recording: Recording) {
        if change.inserted == 0 && change.deleted == 0 {
            return;
        }
        debug_assert!(change.inserted == 0 || change.deleted == 0);

        self.highlighting.refresh(buffer);

        if recording.is_enabled() && change.inserted != 0 {
            self.history
                .record_insert(buffer, change.position, change.inserted);
        }

        if !*self.is_modified {
            tracing::debug!(target: "document", "document marked modified");
            *self.is_modified = true;
        }
    }
}

/// Document state - the text buffer, its history, and its styles
#[derive(Debug, Clone)]
pub struct Document {
    /// The text buffer
    buffer: RopeBuffer,
    /// Path to the file on disk (None for new/unsaved files)
    pub file_path: Option<PathBuf>,
    /// Whether the buffer has unsaved changes
    is_modified: bool,
    history: EditHistory,
    highlighting: Highlighting,
    theme: Theme,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Create a new empty document
    pub fn new() -> Self {
        Self::with_text("")
    }

    /// Create a document with initial text. Loading the text is not an undoable edit.
    pub fn with_text(text: &str) -> Self {
        let mut doc = Self {
            buffer: RopeBuffer::from_text(text),
            file_path: None,
            is_modified: false,
            history: EditHistory::new(),
            highlighting: Highlighting::new(true),
            theme: Theme::default(),
        };
        doc.highlighting.refresh(&doc.buffer);
        doc
    }

    /// Create a document honouring the engine configuration
    pub fn from_config(text: &str, config: &EngineConfig) -> Self {
        let theme = load_theme(&config.theme).unwrap_or_else(|e| {
            tracing::warn!("Failed to load theme '{}': {}", config.theme, e);
            Theme::default()
        });
        let history = match config.history_limit {
            Some(limit) => EditHistory::with_max_size(limit),
            None => EditHistory::new(),
        };

        let mut doc = Self {
            buffer: RopeBuffer::from_text(text),
            file_path: None,
            is_modified: false,
            history,
            highlighting: Highlighting::new(config.syntax_highlighting),
            theme,
        };
        doc.theme
            .styles
            .set_font(&config.font_face, config.font_size);
        doc.highlighting.refresh(&doc.buffer);
        doc
    }

    /// Load a document from a file path
    pub fn from_file(path: PathBuf, config: &EngineConfig) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(&path)?;
        let mut doc = Self::from_config(&content, config);
        tracing::info!(target: "document", "Opened {}", path.display());
        doc.file_path = Some(path);
        Ok(doc)
    }

    /// Get the display name for this document
    pub fn display_name(&self) -> String {
        self.file_path
            .as_ref()
            .and_then(|path| path.file_name())
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| "Untitled".to_string())
    }

    /// Run `f` against the buffer with notifications wired to this document
    fn with_observed<R>(
        &mut self,
        recording: Recording,
        f: impl FnOnce(&mut dyn TextBufferMut) -> R,
    ) -> R {
        let mut events = DocumentEvents {
            history: &mut self.history,
            highlighting: &mut self.highlighting,
            is_modified: &mut self.is_modified,
        };
        let mut observed = ObservedBuffer::new(&mut self.buffer, &mut events, recording);
        f(&mut observed)
    }

    // === Editing ===

    /// Insert text at a character offset
    pub fn insert(&mut self, offset: usize, text: &str) {
        self.with_observed(Recording::Record, |buf| buf.insert(offset, text));
    }

    /// Delete a character range
    pub fn delete(&mut self, range: Range<usize>) {
        self.with_observed(Recording::Record, |buf| buf.remove(range));
    }

    /// Replace a range: recorded as a delete followed by an insert
    pub fn replace(&mut self, range: Range<usize>, text: &str) {
        self.with_observed(Recording::Record, |buf| buf.replace(range, text));
    }

    /// Type one character at `cursor`, returning the new cursor offset
    pub fn type_char(&mut self, cursor: usize, ch: char) -> usize {
        let mut tmp = [0u8; 4];
        self.insert(cursor, ch.encode_utf8(&mut tmp));
        cursor + 1
    }

    /// Delete the character before `cursor`, returning the new cursor offset
    pub fn backspace(&mut self, cursor: usize) -> usize {
        if cursor == 0 {
            return 0;
        }
        self.delete(cursor - 1..cursor);
        cursor - 1
    }

    /// Delete the character after `cursor`; the cursor does not move
    pub fn delete_forward(&mut self, cursor: usize) -> usize {
        if cursor < self.len_chars() {
            self.delete(cursor..cursor + 1);
        }
        cursor
    }

    /// Replace the whole content as a fresh load: history is cleared and the
    /// document is considered unmodified.
    pub fn set_text(&mut self, text: &str) {
        self.buffer.set_content(text);
        self.history.clear();
        self.is_modified = false;
        self.highlighting.refresh(&self.buffer);
    }

    // === History ===

    /// Undo the most recent command. Returns false when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(cmd) = self.history.pop_undo() else {
            return false;
        };
        tracing::debug!(target: "document", kind = ?cmd.kind, position = cmd.position, "undo");
        self.with_observed(Recording::Suppress, |buf| cmd.revert(buf));
        true
    }

    /// Redo the most recently undone command. Returns false when there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        let Some(cmd) = self.history.pop_redo() else {
            return false;
        };
        tracing::debug!(target: "document", kind = ?cmd.kind, position = cmd.position, "redo");
        self.with_observed(Recording::Suppress, |buf| cmd.apply(buf));
        true
    }

    pub fn has_undo(&self) -> bool {
        self.history.has_undo()
    }

    pub fn has_redo(&self) -> bool {
        self.history.has_redo()
    }

    /// End the current typing run so the next edit becomes its own undo step
    pub fn close_undo_group(&mut self) {
        self.history.close_group();
    }

    pub fn history(&self) -> &EditHistory {
        &self.history
    }

    // === Content ===

    pub fn text(&self) -> String {
        self.buffer.content()
    }

    pub fn len_chars(&self) -> usize {
        self.buffer.len_chars()
    }

    pub fn buffer(&self) -> &RopeBuffer {
        &self.buffer
    }

    pub fn is_modified(&self) -> bool {
        self.is_modified
    }

    /// Record that the current content has been written out
    pub fn mark_saved(&mut self) {
        self.is_modified = false;
    }

    // === Highlighting ===

    /// Styles for the current content, one per character
    pub fn styles(&self) -> &StyleBuffer {
        &self.highlighting.styles
    }

    pub fn style_at(&self, offset: usize) -> Option<StyleTag> {
        self.highlighting.styles.get(offset)
    }

    pub fn highlighting_enabled(&self) -> bool {
        self.highlighting.enabled
    }

    /// Toggle highlighting; disabling publishes an all-plain style buffer
    pub fn set_highlighting(&mut self, enabled: bool) {
        if self.highlighting.enabled == enabled {
            return;
        }
        self.highlighting.enabled = enabled;
        self.highlighting.refresh(&self.buffer);
        tracing::debug!(target: "document", enabled, "syntax highlighting toggled");
    }

    pub fn style_table(&self) -> &StyleTable {
        &self.theme.styles
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// Change the font of every style entry without rescanning
    pub fn set_font(&mut self, font: &str, size: u16) {
        self.theme.styles.set_font(font, size);
    }

    // === Search ===

    /// Next occurrence of `needle` at or after `from`
    pub fn find_next(&self, needle: &str, from: usize, match_case: bool) -> Option<usize> {
        search::find_forward(&self.buffer, needle, from, match_case)
    }

    /// Previous occurrence of `needle` starting at or before `from`
    pub fn find_prev(&self, needle: &str, from: usize, match_case: bool) -> Option<usize> {
        search::find_backward(&self.buffer, needle, from, match_case)
    }
}
