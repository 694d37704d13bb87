//! Color handling for composite documents.
//!
//! This module provides the [`Color`] type which wraps the `DynamicColor` type
//! from the color crate. Configured theme colors are parsed through it so a
//! typo in a configuration file is reported instead of silently producing an
//! invalid `fill` attribute.

use std::str::FromStr;

use color::DynamicColor;

/// Wrapper around the `DynamicColor` type from the color crate.
///
/// The original spelling is kept alongside the parsed value so colors are
/// written back into the document exactly as the user configured them.
#[derive(Clone, PartialEq, Debug)]
pub struct Color {
    color: DynamicColor,
    source: String,
}

impl Color {
    /// Create a new `Color` from a string
    /// This will parse CSS color strings such as "#ff0000", "rgb(255, 0, 0)", "red", etc.
    ///
    /// # Examples
    ///
    /// ```
    /// use c4stack_core::color::Color;
    ///
    /// let red = Color::new("#ff0000").unwrap();
    /// let blue = Color::new("blue").unwrap();
    /// assert_eq!(blue.to_string(), "blue");
    /// ```
    pub fn new(color_str: &str) -> Result<Self, String> {
        let trimmed = color_str.trim();
        match DynamicColor::from_str(trimmed) {
            Ok(color) => Ok(Self {
                color,
                source: trimmed.to_string(),
            }),
            Err(err) => Err(format!("invalid color `{color_str}`: {err}")),
        }
    }

    /// Returns the alpha (transparency) component of this color.
    ///
    /// # Returns
    ///
    /// The alpha value as a `f32` between 0.0 and 1.0, where:
    /// - 0.0 = fully transparent
    /// - 1.0 = fully opaque
    pub fn alpha(&self) -> f32 {
        self.color.components[3]
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.source)
    }
}

impl From<&Color> for svg::node::Value {
    fn from(color: &Color) -> Self {
        Self::from(color.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_new() {
        let red = Color::new("#ff0000");
        assert!(red.is_ok());

        let invalid = Color::new("not-a-color");
        assert!(invalid.is_err());
    }

    #[test]
    fn test_color_keeps_source_spelling() {
        let color = Color::new("  #2c3e50 ").unwrap();
        assert_eq!(color.to_string(), "#2c3e50");
    }

    #[test]
    fn test_color_alpha() {
        let opaque = Color::new("red").unwrap();
        assert!((opaque.alpha() - 1.0).abs() < 0.001);

        let transparent = Color::new("#ff000000").unwrap();
        assert!(transparent.alpha().abs() < 0.001);
    }

    #[test]
    fn test_color_error_mentions_input() {
        let err = Color::new("bluish").unwrap_err();
        assert!(err.contains("bluish"));
    }
}
