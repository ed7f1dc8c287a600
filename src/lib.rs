//! quill - editing support engine
//!
//! This crate provides the core of a small code editor: a coalescing undo/redo
//! history that records edits from buffer notifications, and a single-pass
//! highlighter for a C-like grammar. Window layout, menus and file dialogs are
//! left to the embedding application.

pub mod config;
pub mod config_paths;
pub mod editable;
pub mod model;
pub mod search;
pub mod syntax;
pub mod theme;
pub mod tracing;

// Re-export commonly used types
pub use config::EngineConfig;
pub use editable::{EditCommand, EditHistory, Recording};
pub use model::Document;
pub use syntax::{Highlighter, StyleBuffer, StyleTag};
pub use theme::Theme;
