use super::models::primitive::Color;
use phf::{Map, phf_map};
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

static FLAT_COLORS: Map<char, &'static str> = phf_map! {
    'A' => "red",
    'T' => "blue",
    'C' => "green",
    'G' => "yellow",
};

static FULL_COLORS: Map<char, &'static str> = phf_map! {
    'A' => "#FF0000",
    'T' => "#0000FF",
    'C' => "#00FF00",
    'G' => "#FFFF00",
};

/// Which built-in palette to start from.
///
/// `Flat` uses named colors suited to 2D plotting libraries, `Full` uses hex
/// tokens suited to 3D scene graphs and web viewers.
///
/// Names are case-insensitive wherever they are parsed, including config files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum PaletteStyle {
    Flat,
    #[default]
    Full,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown palette style '{0}'. Expected 'flat' or 'full'.")]
pub struct UnknownPaletteStyle(pub String);

impl FromStr for PaletteStyle {
    type Err = UnknownPaletteStyle;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "flat" => Ok(Self::Flat),
            "full" => Ok(Self::Full),
            _ => Err(UnknownPaletteStyle(s.to_string())),
        }
    }
}

impl TryFrom<String> for PaletteStyle {
    type Error = UnknownPaletteStyle;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl fmt::Display for PaletteStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flat => write!(f, "flat"),
            Self::Full => write!(f, "full"),
        }
    }
}

/// Anything that can map a base symbol to a color.
///
/// The assembler only depends on this trait, so callers may pass a
/// [`ColorPalette`] or a plain `HashMap<char, Color>`.
pub trait ColorLookup {
    fn color_for(&self, symbol: char) -> Option<&Color>;
}

impl ColorLookup for HashMap<char, Color> {
    fn color_for(&self, symbol: char) -> Option<&Color> {
        self.get(&symbol)
    }
}

impl ColorLookup for BTreeMap<char, Color> {
    fn color_for(&self, symbol: char) -> Option<&Color> {
        self.get(&symbol)
    }
}

/// A symbol to color mapping. Its keys are the alphabet a render accepts.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ColorPalette {
    colors: BTreeMap<char, Color>,
}

impl ColorPalette {
    pub fn builtin(style: PaletteStyle) -> Self {
        let table = match style {
            PaletteStyle::Flat => &FLAT_COLORS,
            PaletteStyle::Full => &FULL_COLORS,
        };
        Self {
            colors: table
                .entries()
                .map(|(symbol, token)| (*symbol, Color::new(token)))
                .collect(),
        }
    }

    /// Loads a palette from a TOML table of single-character keys, e.g.
    /// `A = "#FF0000"`.
    pub fn load(path: &Path) -> Result<Self, PaletteLoadError> {
        let content = std::fs::read_to_string(path).map_err(|e| PaletteLoadError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        let table: HashMap<String, String> =
            toml::from_str(&content).map_err(|e| PaletteLoadError::Toml {
                path: path.to_string_lossy().to_string(),
                source: e,
            })?;
        Self::from_entries(table)
    }

    pub fn from_entries<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Result<Self, PaletteLoadError>
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut palette = Self::default();
        for (key, token) in entries {
            palette.insert(parse_symbol(key.as_ref())?, Color::new(token.as_ref()));
        }
        Ok(palette)
    }

    /// Adds or replaces the color of `symbol`, returning the previous one.
    pub fn insert(&mut self, symbol: char, color: Color) -> Option<Color> {
        self.colors.insert(symbol, color)
    }

    pub fn contains(&self, symbol: char) -> bool {
        self.colors.contains_key(&symbol)
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Palette entries in symbol order, for backends that draw a legend.
    pub fn legend(&self) -> Vec<(char, &Color)> {
        self.colors.iter().map(|(s, c)| (*s, c)).collect()
    }
}

impl ColorLookup for ColorPalette {
    fn color_for(&self, symbol: char) -> Option<&Color> {
        self.colors.get(&symbol)
    }
}

/// Parses a palette key, which must be exactly one character.
pub fn parse_symbol(key: &str) -> Result<char, PaletteLoadError> {
    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (Some(symbol), None) => Ok(symbol),
        _ => Err(PaletteLoadError::InvalidSymbol(key.to_string())),
    }
}

#[derive(Debug, Error)]
pub enum PaletteLoadError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
    #[error("Palette key '{0}' must be a single base symbol")]
    InvalidSymbol(String),
}
