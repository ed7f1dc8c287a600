//! Edit history (undo/redo) with adjacent-edit coalescing.
//!
//! Commands are recorded from buffer notifications: an insert is captured after it
//! lands in the buffer, a delete is captured before it is removed. Consecutive typing,
//! backspacing, and forward-deleting collapse into a single command while it is open.

use super::buffer::{TextBuffer, TextBufferMut};

/// Direction of an edit command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditKind {
    Insert,
    Delete,
}

/// A single recorded edit that can be undone/redone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditCommand {
    pub kind: EditKind,
    /// Character offset where the edit occurred
    pub position: usize,
    /// Exact text inserted or removed
    pub text: String,
}

impl EditCommand {
    /// Create an insert command
    pub fn insert(position: usize, text: impl Into<String>) -> Self {
        Self {
            kind: EditKind::Insert,
            position,
            text: text.into(),
        }
    }

    /// Create a delete command
    pub fn delete(position: usize, text: impl Into<String>) -> Self {
        Self {
            kind: EditKind::Delete,
            position,
            text: text.into(),
        }
    }

    /// Length of the captured text in characters
    pub fn len_chars(&self) -> usize {
        self.text.chars().count()
    }

    /// Offset just past the affected range
    pub fn end(&self) -> usize {
        self.position + self.len_chars()
    }

    /// Re-apply the original effect of this command
    pub fn apply<B: TextBufferMut + ?Sized>(&self, buffer: &mut B) {
        match self.kind {
            EditKind::Insert => buffer.insert(self.position, &self.text),
            EditKind::Delete => buffer.remove(self.position..self.end()),
        }
    }

    /// Apply the inverse of this command
    pub fn revert<B: TextBufferMut + ?Sized>(&self, buffer: &mut B) {
        match self.kind {
            EditKind::Insert => buffer.remove(self.position..self.end()),
            EditKind::Delete => buffer.insert(self.position, &self.text),
        }
    }
}

/// Edit history with undo/redo stacks.
///
/// The top of the undo stack stays open for coalescing until the next undo, redo,
/// [`EditHistory::close_group`], or a non-contiguous edit.
#[derive(Debug, Clone)]
pub struct EditHistory {
    undo_stack: Vec<EditCommand>,
    redo_stack: Vec<EditCommand>,
    open: bool,
    max_size: usize,
}

impl Default for EditHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl EditHistory {
    /// Create a new unbounded edit history
    pub fn new() -> Self {
        Self::with_max_size(usize::MAX)
    }

    /// Create a new edit history that keeps at most `max_size` undo steps
    pub fn with_max_size(max_size: usize) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            open: false,
            max_size: max_size.max(1),
        }
    }

    /// Record text that was just inserted at `position`.
    ///
    /// Must be called after the insertion has been applied to `buffer`.
    pub fn record_insert<B: TextBuffer + ?Sized>(
        &mut self,
        buffer: &B,
        position: usize,
        length: usize,
    ) {
        if length == 0 {
            return;
        }
        assert!(
            position + length <= buffer.len_chars(),
            "recorded insert {}..{} exceeds buffer of {} chars",
            position,
            position + length,
            buffer.len_chars()
        );
        let text = buffer.slice(position..position + length);

        if let Some(cmd) = self.open_command(EditKind::Insert) {
            if position == cmd.end() {
                cmd.text.push_str(&text);
                tracing::trace!(target: "history", position, text = %text, "extended insert");
                return;
            }
        }

        tracing::trace!(target: "history", position, text = %text, "new insert");
        self.push(EditCommand::insert(position, text));
    }

    /// Record text about to be deleted from `position`.
    ///
    /// Must be called before the deletion is applied to `buffer`.
    pub fn record_delete<B: TextBuffer + ?Sized>(
        &mut self,
        buffer: &B,
        position: usize,
        length: usize,
    ) {
        if length == 0 {
            return;
        }
        assert!(
            position + length <= buffer.len_chars(),
            "recorded delete {}..{} exceeds buffer of {} chars",
            position,
            position + length,
            buffer.len_chars()
        );
        let text = buffer.slice(position..position + length);

        if let Some(cmd) = self.open_command(EditKind::Delete) {
            // Backspace: the removed range ends where the open range begins
            if position + length == cmd.position {
                cmd.text.insert_str(0, &text);
                cmd.position = position;
                tracing::trace!(target: "history", position, text = %text, "extended delete leftward");
                return;
            }
            // Forward delete: same start, text grows to the right
            if position == cmd.position {
                cmd.text.push_str(&text);
                tracing::trace!(target: "history", position, text = %text, "extended delete rightward");
                return;
            }
        }

        tracing::trace!(target: "history", position, text = %text, "new delete");
        self.push(EditCommand::delete(position, text));
    }

    fn open_command(&mut self, kind: EditKind) -> Option<&mut EditCommand> {
        if !self.open {
            return None;
        }
        self.undo_stack.last_mut().filter(|cmd| cmd.kind == kind)
    }

    /// Push a new open command (clears redo stack)
    pub fn push(&mut self, cmd: EditCommand) {
        if !self.redo_stack.is_empty() {
            tracing::debug!(
                target: "history",
                discarded = self.redo_stack.len(),
                "fresh edit discards redo path"
            );
            self.redo_stack.clear();
        }
        self.undo_stack.push(cmd);
        self.open = true;

        // Trim if exceeded max size
        if self.undo_stack.len() > self.max_size {
            let excess = self.undo_stack.len() - self.max_size;
            self.undo_stack.drain(..excess);
        }
    }

    /// Stop coalescing into the current command; the next edit opens a new one
    pub fn close_group(&mut self) {
        self.open = false;
    }

    /// Pop a command from the undo stack (moves to redo stack).
    ///
    /// The caller is responsible for reverting it against the buffer.
    pub fn pop_undo(&mut self) -> Option<EditCommand> {
        let cmd = self.undo_stack.pop()?;
        self.open = false;
        self.redo_stack.push(cmd.clone());
        Some(cmd)
    }

    /// Pop a command from the redo stack (moves to undo stack).
    ///
    /// The caller is responsible for re-applying it against the buffer.
    pub fn pop_redo(&mut self) -> Option<EditCommand> {
        let cmd = self.redo_stack.pop()?;
        self.open = false;
        self.undo_stack.push(cmd.clone());
        Some(cmd)
    }

    /// Reverse the most recent command against `buffer`. Returns false if there was nothing to undo.
    pub fn undo<B: TextBufferMut + ?Sized>(&mut self, buffer: &mut B) -> bool {
        let Some(cmd) = self.pop_undo() else {
            return false;
        };
        tracing::debug!(target: "history", kind = ?cmd.kind, position = cmd.position, "undo");
        cmd.revert(buffer);
        true
    }

    /// Re-apply the most recently undone command. Returns false if there was nothing to redo.
    pub fn redo<B: TextBufferMut + ?Sized>(&mut self, buffer: &mut B) -> bool {
        let Some(cmd) = self.pop_redo() else {
            return false;
        };
        tracing::debug!(target: "history", kind = ?cmd.kind, position = cmd.position, "redo");
        cmd.apply(buffer);
        true
    }

    /// Check if undo is available
    pub fn has_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Check if redo is available
    pub fn has_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Clear all history
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
        self.open = false;
    }

    /// Get the number of commands in the undo stack
    pub fn undo_count(&self) -> usize {
        self.undo_stack.len()
    }

    /// Get the number of commands in the redo stack
    pub fn redo_count(&self) -> usize {
        self.redo_stack.len()
    }

    /// Commands that can be undone, oldest first
    pub fn undo_commands(&self) -> &[EditCommand] {
        &self.undo_stack
    }
}
