//! Syntax highlighting module
//!
//! Classifies every character of a buffer into one of five [`StyleTag`]s using a
//! single forward scan:
//!
//! ```text
//! Buffer edit → DocumentEvents::modified → Highlighter::recompute_chars(whole text)
//!             → StyleBuffer (replaces previous one) → renderer looks up StyleTable
//! ```
//!
//! The grammar is fixed: C-style block and line comments, single and double quoted
//! strings with backslash escapes, line-leading `#` directives, and a closed keyword set.

mod scanner;
mod styles;

pub use scanner::{Highlighter, ScanState, KEYWORDS};
pub use styles::{StyleBuffer, StyleRun, StyleTag};
