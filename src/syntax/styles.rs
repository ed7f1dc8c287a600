//! Style tags and the per-character style buffer produced by a highlighter pass.

use std::ops::Range;

/// Syntax classification for one character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StyleTag {
    #[default]
    Plain,
    Comment,
    String,
    Keyword,
    Preprocessor,
}

impl StyleTag {
    /// Every tag, in style-table order
    pub const ALL: [StyleTag; 5] = [
        StyleTag::Plain,
        StyleTag::Comment,
        StyleTag::String,
        StyleTag::Keyword,
        StyleTag::Preprocessor,
    ];

    /// Index into a style table
    pub fn index(self) -> usize {
        self as usize
    }

    /// Style letter used by letter-indexed style tables ('A' = plain ... 'E' = preprocessor)
    pub fn as_char(self) -> char {
        (b'A' + self as u8) as char
    }

    pub fn from_char(c: char) -> Option<Self> {
        Self::ALL.into_iter().find(|tag| tag.as_char() == c)
    }

    /// Stable lowercase name, used as the theme key
    pub fn name(self) -> &'static str {
        match self {
            StyleTag::Plain => "plain",
            StyleTag::Comment => "comment",
            StyleTag::String => "string",
            StyleTag::Keyword => "keyword",
            StyleTag::Preprocessor => "preprocessor",
        }
    }
}

/// A maximal run of characters sharing one tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleRun {
    pub range: Range<usize>,
    pub tag: StyleTag,
}

/// One style tag per character of the scanned text.
///
/// Always rebuilt wholesale; never patched in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleBuffer {
    tags: Vec<StyleTag>,
}

impl StyleBuffer {
    /// All-plain buffer of `len` characters
    pub fn plain(len: usize) -> Self {
        Self {
            tags: vec![StyleTag::Plain; len],
        }
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn get(&self, offset: usize) -> Option<StyleTag> {
        self.tags.get(offset).copied()
    }

    pub fn as_slice(&self) -> &[StyleTag] {
        &self.tags
    }

    pub fn iter(&self) -> impl Iterator<Item = StyleTag> + '_ {
        self.tags.iter().copied()
    }

    /// Group consecutive equal tags into runs
    pub fn runs(&self) -> Vec<StyleRun> {
        let mut runs: Vec<StyleRun> = Vec::new();
        for (i, &tag) in self.tags.iter().enumerate() {
            match runs.last_mut() {
                Some(run) if run.tag == tag => run.range.end = i + 1,
                _ => runs.push(StyleRun {
                    range: i..i + 1,
                    tag,
                }),
            }
        }
        runs
    }

    /// Render as style letters, one per character
    pub fn to_letters(&self) -> String {
        self.tags.iter().map(|tag| tag.as_char()).collect()
    }
}

impl From<Vec<StyleTag>> for StyleBuffer {
    fn from(tags: Vec<StyleTag>) -> Self {
        Self { tags }
    }
}
