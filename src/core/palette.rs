//! Color schemes and deterministic color assignment.
//!
//! Palette tables are plain configuration data held by a [`PaletteRegistry`]
//! so hosts and tests can inject their own themes.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::types::DataPoint;
use crate::error::{ChartError, ChartResult};

/// Named palette selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    #[default]
    Primary,
    Success,
    Warning,
    Error,
    Neutral,
    Brand,
}

impl ColorScheme {
    pub const ALL: [ColorScheme; 6] = [
        ColorScheme::Primary,
        ColorScheme::Success,
        ColorScheme::Warning,
        ColorScheme::Error,
        ColorScheme::Neutral,
        ColorScheme::Brand,
    ];
}

/// Opaque color token handed to the rendering surface (usually a CSS color).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorToken(String);

impl ColorToken {
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parses `#rgb` or `#rrggbb` tokens into normalized RGBA channels.
    pub fn to_rgba(&self) -> ChartResult<[f64; 4]> {
        let hex = self.0.strip_prefix('#').ok_or_else(|| {
            ChartError::InvalidData(format!("color token `{}` is not a hex color", self.0))
        })?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ChartError::InvalidData(format!(
                "color token `{}` has invalid hex digits",
                self.0
            )));
        }

        let channel = |digits: &str| -> ChartResult<f64> {
            u8::from_str_radix(digits, 16)
                .map(|value| f64::from(value) / 255.0)
                .map_err(|_| {
                    ChartError::InvalidData(format!("color token `{}` has invalid hex digits", self.0))
                })
        };

        match hex.len() {
            6 => Ok([
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
                1.0,
            ]),
            3 => {
                let expand = |i: usize| hex[i..=i].repeat(2);
                Ok([
                    channel(&expand(0))?,
                    channel(&expand(1))?,
                    channel(&expand(2))?,
                    1.0,
                ])
            }
            _ => Err(ChartError::InvalidData(format!(
                "color token `{}` must have 3 or 6 hex digits",
                self.0
            ))),
        }
    }
}

impl fmt::Display for ColorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ColorToken {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ColorToken {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Ordered, non-empty list of color tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<ColorToken>", into = "Vec<ColorToken>")]
pub struct Palette {
    tokens: Vec<ColorToken>,
}

impl Palette {
    pub fn new<I, T>(tokens: I) -> ChartResult<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<ColorToken>,
    {
        let tokens: Vec<ColorToken> = tokens.into_iter().map(Into::into).collect();
        if tokens.is_empty() {
            return Err(ChartError::InvalidData(
                "palette must contain at least one color".to_owned(),
            ));
        }
        Ok(Self { tokens })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[must_use]
    pub fn tokens(&self) -> &[ColorToken] {
        &self.tokens
    }

    /// Token at `index`, cycling past the end.
    #[must_use]
    pub fn cycled(&self, index: usize) -> &ColorToken {
        &self.tokens[index % self.tokens.len()]
    }
}

impl TryFrom<Vec<ColorToken>> for Palette {
    type Error = ChartError;

    fn try_from(tokens: Vec<ColorToken>) -> ChartResult<Self> {
        Self::new(tokens)
    }
}

impl From<Palette> for Vec<ColorToken> {
    fn from(palette: Palette) -> Self {
        palette.tokens
    }
}

/// Scheme-to-palette table injected into the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaletteRegistry {
    palettes: IndexMap<ColorScheme, Palette>,
    fallback: Palette,
}

impl PaletteRegistry {
    /// Creates a registry whose lookups fall back to `fallback` for unknown schemes.
    #[must_use]
    pub fn new(fallback: Palette) -> Self {
        Self {
            palettes: IndexMap::new(),
            fallback,
        }
    }

    #[must_use]
    pub fn with_palette(mut self, scheme: ColorScheme, palette: Palette) -> Self {
        self.palettes.insert(scheme, palette);
        self
    }

    pub fn insert(&mut self, scheme: ColorScheme, palette: Palette) -> Option<Palette> {
        self.palettes.insert(scheme, palette)
    }

    #[must_use]
    pub fn palette(&self, scheme: ColorScheme) -> &Palette {
        self.palettes.get(&scheme).unwrap_or(&self.fallback)
    }

    #[must_use]
    pub fn schemes(&self) -> impl Iterator<Item = ColorScheme> + '_ {
        self.palettes.keys().copied()
    }

    #[must_use]
    pub fn assigner(&self, scheme: ColorScheme) -> ColorAssigner<'_> {
        ColorAssigner::new(self.palette(scheme))
    }
}

impl Default for PaletteRegistry {
    fn default() -> Self {
        let table: [(ColorScheme, [&str; 3]); 6] = [
            (ColorScheme::Primary, ["#3b82f6", "#60a5fa", "#93c5fd"]),
            (ColorScheme::Success, ["#10b981", "#34d399", "#6ee7b7"]),
            (ColorScheme::Warning, ["#f59e0b", "#fbbf24", "#fcd34d"]),
            (ColorScheme::Error, ["#ef4444", "#f87171", "#fca5a5"]),
            (ColorScheme::Neutral, ["#6b7280", "#9ca3af", "#d1d5db"]),
            (ColorScheme::Brand, ["#8b5cf6", "#ec4899", "#06b6d4"]),
        ];

        let palettes: IndexMap<ColorScheme, Palette> = table
            .into_iter()
            .map(|(scheme, tokens)| {
                let tokens = tokens.into_iter().map(ColorToken::from).collect();
                (scheme, Palette { tokens })
            })
            .collect();
        let fallback = palettes[&ColorScheme::Neutral].clone();

        Self { palettes, fallback }
    }
}

/// Maps a data-point index to its color within one palette.
#[derive(Debug, Clone, Copy)]
pub struct ColorAssigner<'a> {
    palette: &'a Palette,
}

impl<'a> ColorAssigner<'a> {
    #[must_use]
    pub fn new(palette: &'a Palette) -> Self {
        Self { palette }
    }

    /// Explicit `point.color` wins; otherwise the palette is cycled by `index`.
    #[must_use]
    pub fn assign_color(&self, index: usize, point: &DataPoint) -> ColorToken {
        point
            .color
            .clone()
            .unwrap_or_else(|| self.palette_color(index).clone())
    }

    #[must_use]
    pub fn palette_color(&self, index: usize) -> &'a ColorToken {
        self.palette.cycled(index)
    }
}
