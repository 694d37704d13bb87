//! Configuration types for composite document generation.
//!
//! This module provides configuration structures that control how the
//! composite document is titled, sized, styled, and navigated. All types
//! implement [`serde::Deserialize`] for loading from external sources, and
//! every field has a default so a partial file is always accepted.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining all sections.
//! - [`NavigationConfig`] - Selects the [`NavigationMode`].
//! - [`CanvasConfig`] - Fixed size of the composite canvas.
//! - [`StyleConfig`] - Colors of the document chrome.
//!
//! # Example
//!
//! ```
//! # use c4stack::config::AppConfig;
//! let config = AppConfig::default();
//! assert!(config.validate().is_ok());
//! assert_eq!(config.title(), "Stacked C4 Architecture");
//! ```

use serde::Deserialize;

use c4stack_core::{color::Color, navigation::NavigationMode};

/// Title used when none is configured.
pub const DEFAULT_TITLE: &str = "Stacked C4 Architecture";

/// The smallest canvas edge that still fits the header and one layer.
pub const MIN_CANVAS_SIZE: u32 = 200;

/// Top-level application configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Document title, shown in `<title>` and in the header bar.
    title: String,

    /// Navigation configuration section.
    navigation: NavigationConfig,

    /// Canvas configuration section.
    canvas: CanvasConfig,

    /// Style configuration section.
    style: StyleConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            navigation: NavigationConfig::default(),
            canvas: CanvasConfig::default(),
            style: StyleConfig::default(),
        }
    }
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    ///
    /// # Arguments
    ///
    /// * `title` - Document title.
    /// * `navigation` - Navigation settings.
    /// * `canvas` - Canvas size.
    /// * `style` - Chrome colors.
    pub fn new(
        title: impl Into<String>,
        navigation: NavigationConfig,
        canvas: CanvasConfig,
        style: StyleConfig,
    ) -> Self {
        Self {
            title: title.into(),
            navigation,
            canvas,
            style,
        }
    }

    /// Returns the document title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the navigation configuration.
    pub fn navigation(&self) -> &NavigationConfig {
        &self.navigation
    }

    /// Returns the canvas configuration.
    pub fn canvas(&self) -> &CanvasConfig {
        &self.canvas
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Replaces the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Replaces the navigation mode.
    pub fn with_navigation_mode(mut self, mode: NavigationMode) -> Self {
        self.navigation.mode = mode;
        self
    }

    /// Checks every value that deserialization alone cannot.
    ///
    /// # Errors
    ///
    /// Returns a message naming the first offending setting if a color does
    /// not parse or the canvas is smaller than [`MIN_CANVAS_SIZE`].
    pub fn validate(&self) -> Result<(), String> {
        self.canvas.validate()?;
        self.style.theme()?;
        Ok(())
    }
}

/// How the viewer moves between levels.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    mode: NavigationMode,
}

impl NavigationConfig {
    /// Creates a new [`NavigationConfig`].
    pub fn new(mode: NavigationMode) -> Self {
        Self { mode }
    }

    /// Returns the configured [`NavigationMode`].
    pub fn mode(&self) -> NavigationMode {
        self.mode
    }
}

/// Fixed size of the composite canvas, in pixels.
///
/// In script mode the canvas is resized to the viewport at load time; the
/// configured size is what renderers without scripting show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    width: u32,
    height: u32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
        }
    }
}

impl CanvasConfig {
    /// Creates a new [`CanvasConfig`].
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Returns the canvas width.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the canvas height.
    pub fn height(&self) -> u32 {
        self.height
    }

    fn validate(&self) -> Result<(), String> {
        if self.width < MIN_CANVAS_SIZE || self.height < MIN_CANVAS_SIZE {
            return Err(format!(
                "Invalid canvas size in config: {}x{} is smaller than {MIN_CANVAS_SIZE}x{MIN_CANVAS_SIZE}",
                self.width, self.height
            ));
        }
        Ok(())
    }
}

/// Colors of the document chrome, as CSS color strings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    background_color: String,
    header_color: String,
    button_color: String,
    button_stroke_color: String,
    active_button_color: String,
    highlight_color: String,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            background_color: "#f8f9fa".to_string(),
            header_color: "#2c3e50".to_string(),
            button_color: "#3498db".to_string(),
            button_stroke_color: "#2980b9".to_string(),
            active_button_color: "#1abc9c".to_string(),
            highlight_color: "#ffeb3b".to_string(),
        }
    }
}

impl StyleConfig {
    /// Parses every configured color into a [`Theme`].
    ///
    /// # Errors
    ///
    /// Returns an error naming the setting whose value is not a valid
    /// [`Color`].
    pub fn theme(&self) -> Result<Theme, String> {
        let parse = |name: &str, value: &str| {
            Color::new(value).map_err(|err| format!("Invalid {name} in config: {err}"))
        };

        Ok(Theme {
            background: parse("background_color", &self.background_color)?,
            header: parse("header_color", &self.header_color)?,
            button: parse("button_color", &self.button_color)?,
            button_stroke: parse("button_stroke_color", &self.button_stroke_color)?,
            active_button: parse("active_button_color", &self.active_button_color)?,
            highlight: parse("highlight_color", &self.highlight_color)?,
        })
    }
}

/// The validated colors of the document chrome.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub background: Color,
    pub header: Color,
    pub button: Color,
    pub button_stroke: Color,
    pub active_button: Color,
    pub highlight: Color,
}
