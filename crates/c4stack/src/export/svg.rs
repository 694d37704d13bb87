//! Interactive SVG composite.
//!
//! [`SvgComposer`] lays every level's diagram into one root `<svg>` as a
//! togglable layer, adds a header with one navigation button per existing
//! level, and, in script mode, embeds the behavior script together with a
//! generated table of diagram sizes.
//!
//! Geometry is fixed relative to the configured canvas:
//!
//! ```text
//! y=0    ┌──────────────────────────────────────────┐
//!        │ header: title, breadcrumb                │
//! y=91   │ [Context] [Container] ...     [toggles]  │
//! y=140  ├─ layer frame (5, 140, W-10, H-160) ──────┤
//! y=145  │  diagram viewport (10, 145, W-20, H-170) │
//!        └──────────────────────────────────────────┘
//! ```
//!
//! The embedded script applies the same margins when it resizes the canvas.

mod chrome;
mod layer;
mod script;

use log::{debug, info};
use quick_xml::escape::escape;

use c4stack_core::{level::Level, navigation::NavigationMode, record::DiagramSet};

use super::Exporter;
use crate::{
    config::{AppConfig, Theme},
    error::StackError,
};

/// Header bar height.
pub(crate) const HEADER_HEIGHT: f64 = 80.0;

/// Vertical position of the navigation buttons.
pub(crate) const BUTTON_Y: f64 = 91.0;
pub(crate) const BUTTON_WIDTH: f64 = 104.0;
pub(crate) const BUTTON_HEIGHT: f64 = 33.0;
/// Left edge of the first navigation button.
pub(crate) const BUTTON_X: f64 = 26.0;
/// Distance between the left edges of adjacent buttons.
pub(crate) const BUTTON_STEP: f64 = 117.0;

/// Layer frame origin and how much smaller than the canvas it is.
pub(crate) const FRAME_X: f64 = 5.0;
pub(crate) const FRAME_Y: f64 = 140.0;
pub(crate) const FRAME_INSET_WIDTH: f64 = 10.0;
pub(crate) const FRAME_INSET_HEIGHT: f64 = 160.0;

/// Diagram viewport origin and how much smaller than the canvas it is.
pub(crate) const VIEWPORT_X: f64 = 10.0;
pub(crate) const VIEWPORT_Y: f64 = 145.0;
pub(crate) const VIEWPORT_INSET_WIDTH: f64 = 20.0;
pub(crate) const VIEWPORT_INSET_HEIGHT: f64 = 170.0;

/// Composes a [`DiagramSet`] into one interactive SVG document.
#[derive(Debug, Clone)]
pub struct SvgComposer<'a> {
    config: &'a AppConfig,
    theme: Theme,
}

impl<'a> SvgComposer<'a> {
    /// Creates a composer for `config`.
    ///
    /// # Errors
    ///
    /// Returns [`StackError::Config`] if the configuration does not pass
    /// [`AppConfig::validate`], e.g. a color does not parse or the canvas is
    /// too small.
    pub fn new(config: &'a AppConfig) -> Result<Self, StackError> {
        config.validate().map_err(StackError::Config)?;
        let theme = config.style().theme().map_err(StackError::Config)?;
        Ok(Self { config, theme })
    }

    fn mode(&self) -> NavigationMode {
        self.config.navigation().mode()
    }

    fn width(&self) -> f64 {
        f64::from(self.config.canvas().width())
    }

    fn height(&self) -> f64 {
        f64::from(self.config.canvas().height())
    }

    /// Builds the composite document.
    ///
    /// Every level gets a layer, in level order. Levels missing from
    /// `diagrams` get a placeholder panel and no navigation button.
    pub fn compose(&self, diagrams: &DiagramSet) -> String {
        let initial = diagrams.levels().next().unwrap_or(Level::Context);
        let title = escape(self.config.title());
        debug!(levels = diagrams.len(), mode:? = self.mode(); "Composing document");

        let mut doc = String::new();
        doc.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        doc.push('\n');
        doc.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink" width="{}" height="{}" style="background: {}; display: block;">"#,
            self.width(),
            self.height(),
            self.theme.background,
        ));
        doc.push('\n');
        doc.push_str(&format!("  <title>{title}</title>\n"));
        doc.push_str(&self.render_style(initial));

        doc.push_str("\n  <!-- Navigation Header -->\n");
        doc.push_str(&self.render_header(&title, initial));

        doc.push_str("\n  <!-- Navigation Buttons -->\n");
        for (index, level) in diagrams.levels().enumerate() {
            doc.push_str(&self.render_button(index, level, level == initial));
            doc.push('\n');
        }

        if self.mode().uses_script() {
            doc.push_str("\n  <!-- View Toggles -->\n");
            doc.push_str(&self.render_toggles());
        }

        doc.push_str("\n  <!-- Diagram Layers -->\n");
        for level in Level::ALL {
            let visible = level == initial;
            let layer = match diagrams.get(level) {
                Some(record) => self.render_layer(record, visible),
                None => self.render_missing_layer(level, visible),
            };
            doc.push_str(&layer);
        }

        if self.mode().uses_script() {
            doc.push_str("\n  <!-- Navigation Script (JavaScript) -->\n");
            doc.push_str(&script::render_script(diagrams));
        }

        doc.push_str("</svg>\n");

        info!(bytes = doc.len(), levels = diagrams.len(); "Document composed");
        doc
    }

    /// Renders the `<style>` block.
    ///
    /// Colors come from the validated [`Theme`], so they never contain markup.
    fn render_style(&self, initial: Level) -> String {
        let theme = &self.theme;
        let mut css = format!(
            r#"
    .nav-button, .toggle-button {{ cursor: pointer; }}
    .nav-button rect, .toggle-button rect {{ fill: {button}; stroke: {stroke}; stroke-width: 1; }}
    .nav-button:hover rect, .toggle-button:hover rect {{ fill: {stroke}; }}
    .nav-button.active rect {{ fill: {active}; stroke: {active}; }}
    .nav-button text, .toggle-button text {{ fill: white; font-family: Arial, sans-serif; font-size: 14px; user-select: none; }}
    .header-title {{ fill: white; font-family: Arial, sans-serif; font-size: 21px; font-weight: bold; }}
    .breadcrumb {{ fill: #ecf0f1; font-family: Arial, sans-serif; font-size: 16px; }}
    .instructions {{ fill: #7f8c8d; font-family: Arial, sans-serif; font-size: 13px; }}
    g[onclick] {{ cursor: pointer; }}
    .link-hit {{ fill: transparent; stroke: none; pointer-events: all; }}
    .link-highlight {{ fill: {highlight}; stroke: {highlight}; pointer-events: none; }}
"#,
            button = theme.button,
            stroke = theme.button_stroke,
            active = theme.active_button,
            highlight = theme.highlight,
        );

        if !self.mode().uses_script() {
            let initial = initial.as_str();
            css.push_str(&format!(
                r#"    .layer {{ display: none; }}
    .layer:target {{ display: inline; }}
    #layer-{initial} {{ display: inline; }}
    .layer:target ~ #layer-{initial}:not(:target) {{ display: none; }}
    svg:has(.layer:target) #layer-{initial}:not(:target) {{ display: none; }}
"#
            ));
        }

        format!("  <style type=\"text/css\"><![CDATA[{css}  ]]></style>\n")
    }
}

impl Exporter for SvgComposer<'_> {
    fn export(&self, diagrams: &DiagramSet) -> String {
        self.compose(diagrams)
    }
}
