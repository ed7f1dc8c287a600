//! Single-pass lexical highlighter for a fixed C-like grammar.
//!
//! The scanner walks the text once with a small state machine. Tags that may still
//! change (a `/` that could open a comment, the letters of a word that could be a
//! keyword) are held in a pending window and only committed once their token is known.

use super::styles::{StyleBuffer, StyleTag};

/// Reserved words tagged as [`StyleTag::Keyword`]. Matching is exact and case-sensitive.
pub const KEYWORDS: &[&str] = &[
    "asm", "break", "case", "const", "continue", "default", "do", "else", "extern", "false",
    "for", "goto", "if", "return", "static", "struct", "switch", "true", "typedef", "union",
    "volatile", "while",
];

/// Lexical mode of the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    Normal,
    BlockComment,
    LineComment,
    DoubleQuoteString,
    SingleQuoteString,
    PreprocessorDirective,
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Full-rescan highlighter. Holds no state between passes.
#[derive(Debug, Clone, Copy, Default)]
pub struct Highlighter;

impl Highlighter {
    pub fn new() -> Self {
        Self
    }

    /// Tag every character of `text`
    pub fn recompute(&self, text: &str) -> StyleBuffer {
        self.recompute_chars(text.chars())
    }

    /// Tag every character yielded by `chars` (e.g. a rope's char iterator)
    pub fn recompute_chars<I: IntoIterator<Item = char>>(&self, chars: I) -> StyleBuffer {
        let chars = chars.into_iter();
        let mut scanner = Scanner::with_capacity(chars.size_hint().0);
        for c in chars {
            scanner.step(c);
        }
        let styles = scanner.finish();
        tracing::trace!(target: "syntax", len = styles.len(), "highlight pass");
        styles
    }

    /// Style buffer for a document with highlighting switched off
    pub fn clear(&self, len: usize) -> StyleBuffer {
        StyleBuffer::plain(len)
    }
}

/// Per-pass scanner state.
struct Scanner {
    state: ScanState,
    prev: Option<char>,
    /// Whether the previous character was itself an escaping backslash
    prev_escaped: bool,
    clean_line: bool,
    /// Letters of the word currently being accumulated in `Normal`
    word: String,
    /// Tentative tags for positions past `committed`
    pending: Vec<StyleTag>,
    committed: Vec<StyleTag>,
}

impl Scanner {
    fn with_capacity(len: usize) -> Self {
        Self {
            state: ScanState::Normal,
            prev: None,
            prev_escaped: false,
            clean_line: true,
            word: String::new(),
            pending: Vec::new(),
            committed: Vec::with_capacity(len),
        }
    }

    fn step(&mut self, c: char) {
        // An odd run of backslashes escapes the next character
        let escaped = !self.prev_escaped && self.prev == Some('\\');

        match self.state {
            ScanState::Normal => self.step_normal(c),
            ScanState::BlockComment => {
                self.emit(StyleTag::Comment);
                if self.prev == Some('*') && c == '/' {
                    self.state = ScanState::Normal;
                }
            }
            ScanState::LineComment => {
                self.emit(StyleTag::Comment);
                self.end_line_state(c);
            }
            ScanState::PreprocessorDirective => {
                self.emit(StyleTag::Preprocessor);
                self.end_line_state(c);
            }
            ScanState::DoubleQuoteString => {
                self.emit(StyleTag::String);
                if c == '"' && !escaped {
                    self.state = ScanState::Normal;
                }
            }
            ScanState::SingleQuoteString => {
                self.emit(StyleTag::String);
                if c == '\'' && !escaped {
                    self.state = ScanState::Normal;
                }
            }
        }

        self.prev_escaped = escaped;
        self.prev = Some(c);
    }

    fn end_line_state(&mut self, c: char) {
        if c == '\n' {
            self.state = ScanState::Normal;
            self.clean_line = true;
        }
    }

    fn step_normal(&mut self, c: char) {
        if self.prev == Some('/') && (c == '*' || c == '/') {
            // The held `/` belongs to the comment opener
            self.confirm_pending(StyleTag::Comment);
            self.emit(StyleTag::Comment);
            self.state = if c == '*' {
                ScanState::BlockComment
            } else {
                ScanState::LineComment
            };
            return;
        }

        if is_word_char(c) {
            if self.word.is_empty() {
                self.commit_pending();
            }
            self.word.push(c);
            self.pending.push(StyleTag::Plain);
            self.clean_line = false;
            return;
        }

        self.finish_word();

        match c {
            '"' => {
                self.emit(StyleTag::String);
                self.state = ScanState::DoubleQuoteString;
            }
            '\'' => {
                self.emit(StyleTag::String);
                self.state = ScanState::SingleQuoteString;
            }
            '#' if self.clean_line => {
                self.emit(StyleTag::Preprocessor);
                self.state = ScanState::PreprocessorDirective;
            }
            // Held until the next character decides whether it opens a comment
            '/' => self.pending.push(StyleTag::Plain),
            _ => self.emit(StyleTag::Plain),
        }

        if c == '\n' {
            self.clean_line = true;
        } else if !c.is_whitespace() {
            self.clean_line = false;
        }
    }

    /// Classify the accumulated word and commit it
    fn finish_word(&mut self) {
        if !self.word.is_empty() {
            if KEYWORDS.contains(&self.word.as_str()) {
                self.confirm_pending(StyleTag::Keyword);
            }
            self.word.clear();
        }
        self.commit_pending();
    }

    /// Retag everything pending and commit it
    fn confirm_pending(&mut self, tag: StyleTag) {
        self.pending.iter_mut().for_each(|t| *t = tag);
        self.commit_pending();
    }

    fn commit_pending(&mut self) {
        self.committed.append(&mut self.pending);
    }

    /// Commit a tag for the current character
    fn emit(&mut self, tag: StyleTag) {
        self.commit_pending();
        self.committed.push(tag);
    }

    /// End of input is not a word boundary: a trailing word stays plain
    fn finish(mut self) -> StyleBuffer {
        self.word.clear();
        self.commit_pending();
        StyleBuffer::from(self.committed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letters(text: &str) -> String {
        Highlighter::new().recompute(text).to_letters()
    }

    #[test]
    fn test_keyword_requires_whole_word() {
        assert_eq!(letters("intifx"), "AAAAAA");
        assert_eq!(letters("if (x)"), "DDAAAA");
    }

    #[test]
    fn test_keyword_is_case_sensitive() {
        assert_eq!(letters("If IF"), "AAAAA");
    }

    #[test]
    fn test_word_at_end_of_input_is_not_classified() {
        assert_eq!(letters("x else"), "AAAAAA");
        assert_eq!(letters("x else;"), "AADDDDA");
    }

    #[test]
    fn test_keyword_followed_by_string() {
        assert_eq!(letters("return\"a\""), "DDDDDDCCC");
    }

    #[test]
    fn test_keyword_with_underscore_is_not_keyword() {
        assert_eq!(letters("if_ _if"), "AAAAAAA");
    }

    #[test]
    fn test_block_comment_retags_opening_slash() {
        assert_eq!(letters("a/*b*/c"), "ABBBBBA");
    }

    #[test]
    fn test_line_comment_ends_at_newline() {
        assert_eq!(letters("x//y\nz"), "ABBBBA");
    }

    #[test]
    fn test_lone_slash_is_plain() {
        assert_eq!(letters("a/b"), "AAA");
        assert_eq!(letters("a/"), "AA");
    }

    #[test]
    fn test_keyword_before_slash() {
        assert_eq!(letters("do/x"), "DDAA");
        assert_eq!(letters("do//x"), "DDBBB");
    }

    #[test]
    fn test_string_states() {
        assert_eq!(letters("'a' \"b\""), "CCCACCC");
    }

    #[test]
    fn test_escaped_quote_stays_in_string() {
        // "a\"b
        assert_eq!(letters("\"a\\\"b"), "CCCCC");
        // "a\"b" x -> string closes after b
        assert_eq!(letters("\"a\\\"b\" x"), "CCCCCCAA");
    }

    #[test]
    fn test_escaped_backslash_does_not_escape_quote() {
        // "a\\"b -> the quote closes the string, b is plain
        assert_eq!(letters("\"a\\\\\"b"), "CCCCCA");
    }

    #[test]
    fn test_escaped_single_quote() {
        assert_eq!(letters("'\\''x"), "CCCCA");
    }

    #[test]
    fn test_preprocessor_after_leading_whitespace() {
        assert_eq!(letters("  #define X"), "AAEEEEEEEEE");
    }

    #[test]
    fn test_hash_after_code_is_plain() {
        assert_eq!(letters("a #define X"), "AAAAAAAAAAA");
    }

    #[test]
    fn test_preprocessor_ends_at_newline() {
        assert_eq!(letters("#if\nif;"), "EEEEDDA");
    }

    #[test]
    fn test_clean_line_resets_after_line_comment() {
        assert_eq!(letters("x //c\n#a"), "AABBBBEE");
    }

    #[test]
    fn test_string_clears_clean_line() {
        assert_eq!(letters("\"s\" #x"), "CCCAAA");
    }

    #[test]
    fn test_keyword_inside_comment_or_string_is_not_tagged() {
        assert_eq!(letters("/* if */"), "BBBBBBBB");
        assert_eq!(letters("\"while\""), "CCCCCCC");
    }

    #[test]
    fn test_unterminated_block_comment_runs_to_end() {
        assert_eq!(letters("/* if\nwhile"), "BBBBBBBBBBB");
    }

    #[test]
    fn test_length_matches_input() {
        let h = Highlighter::new();
        assert_eq!(h.recompute("").len(), 0);
        assert_eq!(h.recompute("/").len(), 1);
        assert_eq!(h.recompute("é if ü").len(), 6);
    }

    #[test]
    fn test_clear_is_all_plain() {
        let styles = Highlighter::new().clear(3);
        assert_eq!(styles.to_letters(), "AAA");
    }
}
