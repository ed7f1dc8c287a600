//! Style table for rendering highlighted text
//!
//! Maps each [`StyleTag`] to a presentation attribute (colour, weight, font).
//! Tables are described in YAML; built-in tables are embedded at compile time and
//! user tables live in the config directory.
//!
//! Theme loading priority:
//! 1. User config: `~/.config/quill/themes/{id}.yaml`
//! 2. Embedded: Built-in themes compiled into binary

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::syntax::StyleTag;

// Embed theme YAML files at compile time
pub const DEFAULT_DARK_YAML: &str = include_str!("../themes/dark.yaml");
pub const DEFAULT_LIGHT_YAML: &str = include_str!("../themes/light.yaml");

/// A built-in theme entry
pub struct BuiltinTheme {
    /// Stable identifier for config (e.g. "default-dark")
    pub id: &'static str,
    /// Embedded YAML content
    pub yaml: &'static str,
}

/// Registry of all built-in themes
pub const BUILTIN_THEMES: &[BuiltinTheme] = &[
    BuiltinTheme {
        id: "default-dark",
        yaml: DEFAULT_DARK_YAML,
    },
    BuiltinTheme {
        id: "default-light",
        yaml: DEFAULT_LIGHT_YAML,
    },
];

pub const DEFAULT_FONT: &str = "monospace";
pub const DEFAULT_FONT_SIZE: u16 = 14;

/// Get the user's theme directory
///
/// Returns `~/.config/quill/themes/` on Unix
pub fn get_user_themes_dir() -> Option<PathBuf> {
    crate::config_paths::themes_dir()
}

/// Load a theme from a YAML file
pub fn from_file(path: &Path) -> Result<Theme, String> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read theme file {}: {}", path.display(), e))?;
    Theme::from_yaml(&content)
}

/// Load theme by id with priority: user → builtin
pub fn load_theme(id: &str) -> Result<Theme, String> {
    if let Some(user_dir) = get_user_themes_dir() {
        let user_path = user_dir.join(format!("{}.yaml", id));
        if user_path.exists() {
            tracing::info!("Loading user theme from {}", user_path.display());
            return from_file(&user_path);
        }
    }

    tracing::info!("Loading builtin theme: {}", id);
    Theme::from_builtin(id)
}

/// Ids of every available theme; user themes shadow builtins with the same id
pub fn list_available_themes() -> Vec<String> {
    let mut seen = HashSet::new();
    let mut ids = Vec::new();

    if let Some(entries) = get_user_themes_dir().and_then(|dir| std::fs::read_dir(dir).ok()) {
        for path in entries.filter_map(|e| e.ok()).map(|e| e.path()) {
            if !path
                .extension()
                .is_some_and(|ext| ext == "yaml" || ext == "yml")
            {
                continue;
            }
            if let Some(id) = path.file_stem().and_then(|s| s.to_str()) {
                if seen.insert(id.to_string()) {
                    ids.push(id.to_string());
                }
            }
        }
    }

    for builtin in BUILTIN_THEMES {
        if seen.insert(builtin.id.to_string()) {
            ids.push(builtin.id.to_string());
        }
    }

    ids
}

/// RGBA color (0-255 per channel)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Create a new color from RGB values (alpha defaults to 255)
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Parse hex color string (e.g., "#FF0000" or "#FF0000FF")
    pub fn from_hex(s: &str) -> Result<Self, String> {
        let s = s.trim_start_matches('#');
        let channel = |range: std::ops::Range<usize>| {
            s.get(range)
                .ok_or_else(|| format!("Invalid color format: {}", s))
                .and_then(|hex| u8::from_str_radix(hex, 16).map_err(|e| e.to_string()))
        };
        match s.len() {
            6 => Ok(Color::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
            8 => Ok(Color {
                r: channel(0..2)?,
                g: channel(2..4)?,
                b: channel(4..6)?,
                a: channel(6..8)?,
            }),
            _ => Err(format!("Invalid color format: {}", s)),
        }
    }

    /// 24-bit ANSI foreground escape sequence
    pub fn ansi_fg(&self) -> String {
        format!("\x1b[38;2;{};{};{}m", self.r, self.g, self.b)
    }
}

/// Raw theme data as parsed from YAML
#[derive(Debug, Clone, Deserialize)]
pub struct ThemeData {
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub styles: StylesData,
}

/// Per-tag entries (raw strings from YAML)
#[derive(Debug, Clone, Deserialize)]
pub struct StylesData {
    pub plain: StyleData,
    pub comment: StyleData,
    pub string: StyleData,
    pub keyword: StyleData,
    pub preprocessor: StyleData,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StyleData {
    pub color: String,
    #[serde(default)]
    pub bold: bool,
}

/// Presentation attributes for one tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextStyle {
    pub color: Color,
    pub bold: bool,
    pub font: String,
    pub size: u16,
}

/// Tag → presentation table, indexed by [`StyleTag::index`].
///
/// Renderers may change fonts at any time; the scanned style buffer stays valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleTable {
    entries: [TextStyle; 5],
}

impl StyleTable {
    pub fn get(&self, tag: StyleTag) -> &TextStyle {
        &self.entries[tag.index()]
    }

    /// Apply a font face and size to every entry
    pub fn set_font(&mut self, font: &str, size: u16) {
        for entry in &mut self.entries {
            entry.font = font.to_string();
            entry.size = size;
        }
        tracing::debug!("Style table font set to {} {}", font, size);
    }

    fn from_data(data: &StylesData) -> Result<Self, String> {
        let resolve = |style: &StyleData| -> Result<TextStyle, String> {
            Ok(TextStyle {
                color: Color::from_hex(&style.color)?,
                bold: style.bold,
                font: DEFAULT_FONT.to_string(),
                size: DEFAULT_FONT_SIZE,
            })
        };
        Ok(Self {
            entries: [
                resolve(&data.plain)?,
                resolve(&data.comment)?,
                resolve(&data.string)?,
                resolve(&data.keyword)?,
                resolve(&data.preprocessor)?,
            ],
        })
    }
}

/// Resolved theme with parsed colors
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub name: String,
    pub styles: StyleTable,
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_yaml(DEFAULT_LIGHT_YAML).expect("embedded default theme must parse")
    }
}

impl Theme {
    /// Parse a theme from YAML
    pub fn from_yaml(yaml: &str) -> Result<Self, String> {
        let data: ThemeData =
            serde_yaml::from_str(yaml).map_err(|e| format!("YAML parse error: {}", e))?;
        Self::from_data(data)
    }

    /// Load a built-in theme by id
    pub fn from_builtin(id: &str) -> Result<Self, String> {
        let entry = BUILTIN_THEMES
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| format!("Unknown theme id: {}", id))?;
        Theme::from_yaml(entry.yaml)
    }

    /// Convert raw theme data to resolved theme
    pub fn from_data(data: ThemeData) -> Result<Self, String> {
        if data.version != 1 {
            return Err(format!("Unsupported theme version: {}", data.version));
        }
        Ok(Theme {
            name: data.name,
            styles: StyleTable::from_data(&data.styles)?,
        })
    }
}
