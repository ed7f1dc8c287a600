//! Text storage and edit history.
//!
//! # Architecture
//!
//! The core components are:
//!
//! - [`TextBuffer`] / [`TextBufferMut`]: Traits abstracting over storage implementations
//! - [`StringBuffer`]: Storage backed by `String`
//! - [`RopeBuffer`]: Storage backed by `ropey::Rope`
//! - [`ObservedBuffer`]: Adapter that fires pre-delete / modified notifications
//! - [`EditHistory`]: Coalescing undo/redo stacks of [`EditCommand`]s
//!
//! # Example
//!
//! ```
//! use quill::editable::{EditHistory, StringBuffer, TextBufferMut};
//!
//! let mut buf = StringBuffer::new();
//! let mut history = EditHistory::new();
//!
//! for (pos, ch) in "abc".chars().enumerate() {
//!     buf.insert(pos, &ch.to_string());
//!     history.record_insert(&buf, pos, 1);
//! }
//!
//! // Typing coalesces into one step
//! history.undo(&mut buf);
//! assert_eq!(buf.as_str(), "");
//! ```

mod buffer;
mod history;
mod observed;

// Re-export main types
pub use buffer::{RopeBuffer, StringBuffer, TextBuffer, TextBufferMut};
pub use history::{EditCommand, EditHistory, EditKind};
pub use observed::{Change, ModifyListener, ObservedBuffer, Recording};
