//! Mutation notifications fired around buffer edits.
//!
//! [`ObservedBuffer`] wraps a storage and a [`ModifyListener`] for the duration of one
//! editing call. Each notification carries the [`Recording`] mode it was issued under,
//! so replaying history through the same path never records itself.

use std::ops::Range;

use super::buffer::{TextBuffer, TextBufferMut};

/// Whether notifications should be captured by the edit history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recording {
    /// Ordinary edit: record it
    Record,
    /// History replay (undo/redo): do not record
    Suppress,
}

impl Recording {
    pub fn is_enabled(self) -> bool {
        self == Recording::Record
    }
}

/// A completed mutation. Exactly one of `inserted` / `deleted` is non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Change {
    pub position: usize,
    pub inserted: usize,
    pub deleted: usize,
}

/// Receives the notifications a buffer fires around each mutation.
pub trait ModifyListener {
    /// Fired before `count` characters at `position` are removed; `buffer` still holds them.
    fn pre_delete(
        &mut self,
        buffer: &dyn TextBuffer,
        position: usize,
        count: usize,
        recording: Recording,
    );

    /// Fired after an insertion or deletion has been applied.
    fn modified(&mut self, buffer: &dyn TextBuffer, change: Change, recording: Recording);
}

/// Storage adapter that notifies a listener around every mutation.
pub struct ObservedBuffer<'a, B: TextBufferMut, L: ModifyListener> {
    buffer: &'a mut B,
    listener: &'a mut L,
    recording: Recording,
}

impl<'a, B: TextBufferMut, L: ModifyListener> ObservedBuffer<'a, B, L> {
    pub fn new(buffer: &'a mut B, listener: &'a mut L, recording: Recording) -> Self {
        Self {
            buffer,
            listener,
            recording,
        }
    }
}

impl<B: TextBufferMut, L: ModifyListener> TextBuffer for ObservedBuffer<'_, B, L> {
    fn len_chars(&self) -> usize {
        self.buffer.len_chars()
    }

    fn char_at(&self, offset: usize) -> Option<char> {
        self.buffer.char_at(offset)
    }

    fn slice(&self, range: Range<usize>) -> String {
        self.buffer.slice(range)
    }

    fn content(&self) -> String {
        self.buffer.content()
    }

    fn chars(&self) -> Box<dyn Iterator<Item = char> + '_> {
        self.buffer.chars()
    }
}

impl<B: TextBufferMut, L: ModifyListener> TextBufferMut for ObservedBuffer<'_, B, L> {
    fn insert(&mut self, offset: usize, text: &str) {
        let inserted = text.chars().count();
        if inserted == 0 {
            return;
        }
        self.buffer.insert(offset, text);
        self.listener.modified(
            &*self.buffer,
            Change {
                position: offset,
                inserted,
                deleted: 0,
            },
            self.recording,
        );
    }

    fn remove(&mut self, range: Range<usize>) {
        if range.is_empty() {
            return;
        }
        let count = range.end - range.start;
        self.listener
            .pre_delete(&*self.buffer, range.start, count, self.recording);
        self.buffer.remove(range.clone());
        self.listener.modified(
            &*self.buffer,
            Change {
                position: range.start,
                inserted: 0,
                deleted: count,
            },
            self.recording,
        );
    }
}
