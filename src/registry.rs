//! Named color lookup for voice and network commands.

use crate::colors::Rgb8;
use crate::error::{ConfigError, LampError};

/// A named color, as spoken or sent by a command source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorCode {
    /// Lookup name, matched exactly.
    pub name: &'static str,

    /// Color to display.
    pub color: Rgb8,
}

impl ColorCode {
    /// Creates a named color.
    #[inline]
    pub const fn new(name: &'static str, red: u8, green: u8, blue: u8) -> Self {
        Self {
            name,
            color: Rgb8::new(red, green, blue),
        }
    }
}

/// Number of entries in [`DEFAULT_COLORS`].
pub const NUM_COLORS: usize = 15;

/// The stock color table.
pub const DEFAULT_COLORS: [ColorCode; NUM_COLORS] = [
    ColorCode::new("red", 255, 0, 0),
    ColorCode::new("orange", 255, 165, 0),
    ColorCode::new("yellow", 255, 255, 0),
    ColorCode::new("green", 0, 255, 0),
    ColorCode::new("blue", 0, 0, 255),
    ColorCode::new("purple", 102, 51, 153),
    ColorCode::new("white", 255, 255, 255),
    ColorCode::new("brown", 165, 42, 42),
    ColorCode::new("pink", 255, 105, 180),
    ColorCode::new("teal", 0, 128, 128),
    ColorCode::new("cyan", 0, 255, 255),
    ColorCode::new("magenta", 255, 0, 255),
    ColorCode::new("crimson", 153, 0, 0),
    ColorCode::new("lime", 50, 205, 50),
    ColorCode::new("midnight", 0, 51, 102),
];

/// An immutable, ordered table of named colors.
///
/// Lookups are exact and case-sensitive. The order is also the order the
/// rainbow cycle walks through.
#[derive(Debug, Clone, Copy)]
pub struct ColorRegistry {
    colors: &'static [ColorCode],
}

impl ColorRegistry {
    /// Validates and wraps a color table.
    ///
    /// # Errors
    /// * `EmptyRegistry` - The table has no entries
    /// * `DuplicateColorName` - A name appears more than once
    pub fn new(colors: &'static [ColorCode]) -> Result<Self, ConfigError> {
        if colors.is_empty() {
            return Err(ConfigError::EmptyRegistry);
        }

        for (index, code) in colors.iter().enumerate() {
            if colors[..index].iter().any(|earlier| earlier.name == code.name) {
                return Err(ConfigError::DuplicateColorName { index });
            }
        }

        Ok(Self { colors })
    }

    /// Returns the registry built from [`DEFAULT_COLORS`].
    pub fn stock() -> Self {
        Self {
            colors: &DEFAULT_COLORS,
        }
    }

    /// Resolves a color name to its RGB value.
    pub fn resolve(&self, name: &str) -> Result<Rgb8, LampError> {
        self.colors
            .iter()
            .find(|code| code.name == name)
            .map(|code| code.color)
            .ok_or(LampError::UnknownColorName)
    }

    /// Returns the entry at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&ColorCode> {
        self.colors.get(index)
    }

    /// Number of registered colors.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always false for a validated registry.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// All entries in table order.
    pub fn colors(&self) -> &'static [ColorCode] {
        self.colors
    }
}
