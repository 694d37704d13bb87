//! SVG rendering for diagram layers.

use log::debug;
use svg::node::element as svg_element;

use c4stack_core::{level::Level, record::DiagramRecord};
use c4stack_parser::namespace::{collect_prefixes, prefix_declarations};

use super::{
    FRAME_INSET_HEIGHT, FRAME_INSET_WIDTH, FRAME_X, FRAME_Y, SvgComposer, VIEWPORT_INSET_HEIGHT,
    VIEWPORT_INSET_WIDTH, VIEWPORT_X, VIEWPORT_Y,
};

const PANEL_X: f64 = 50.0;
const PANEL_Y: f64 = 150.0;
const PANEL_INSET_WIDTH: f64 = 100.0;
const PANEL_INSET_HEIGHT: f64 = 180.0;

impl SvgComposer<'_> {
    /// Renders the layer for an existing diagram.
    ///
    /// The diagram's own markup is embedded verbatim inside a nested `<svg>`
    /// that carries its original view box, so it scales as a unit. The nested
    /// element also declares every prefix the markup uses, since the
    /// declarations on the diagram's original root were discarded.
    pub(super) fn render_layer(&self, record: &DiagramRecord, visible: bool) -> String {
        let level = record.level();
        let frame = svg_element::Rectangle::new()
            .set("id", format!("container-{level}"))
            .set("x", FRAME_X)
            .set("y", FRAME_Y)
            .set("width", self.width() - FRAME_INSET_WIDTH)
            .set("height", self.height() - FRAME_INSET_HEIGHT)
            .set("rx", 5)
            .set("fill", "white")
            .set("stroke", "#ddd")
            .set("stroke-width", 1);

        format!(
            "  <!-- {level} layer -->\n  {open}\n    {frame}\n    <svg id=\"diagram-{level}\" x=\"{x}\" y=\"{y}\" width=\"{width}\" height=\"{height}\" viewBox=\"{view_box}\" preserveAspectRatio=\"xMidYMid meet\"{namespaces}>\n{content}\n    </svg>\n  </g>\n",
            open = self.layer_open_tag(level, visible),
            x = VIEWPORT_X,
            y = VIEWPORT_Y,
            width = self.width() - VIEWPORT_INSET_WIDTH,
            height = self.height() - VIEWPORT_INSET_HEIGHT,
            view_box = record.view_box().replace('"', "&quot;"),
            namespaces = nested_declarations(record.content()),
            content = record.content(),
        )
    }

    /// Renders the placeholder layer for a level without a diagram.
    pub(super) fn render_missing_layer(&self, level: Level, visible: bool) -> String {
        let panel_width = self.width() - PANEL_INSET_WIDTH;
        let panel_height = self.height() - PANEL_INSET_HEIGHT;
        let panel = svg_element::Rectangle::new()
            .set("x", PANEL_X)
            .set("y", PANEL_Y)
            .set("width", panel_width)
            .set("height", panel_height)
            .set("fill", "#ecf0f1")
            .set("stroke", "#bdc3c7");
        let message = svg_element::Text::new(format!("{} diagram not found", level.title()))
            .set("x", PANEL_X + panel_width / 2.0)
            .set("y", PANEL_Y + panel_height / 2.0)
            .set("text-anchor", "middle")
            .set("font-family", "Arial, sans-serif")
            .set("font-size", 16)
            .set("fill", "#7f8c8d");

        format!(
            "  <!-- {level} layer (not found) -->\n  {open}\n    {panel}\n    {message}\n  </g>\n",
            open = self.layer_open_tag(level, visible),
        )
    }

    /// In script mode visibility is an inline style the script toggles. In
    /// CSS-only mode the stylesheet decides, so no inline style is written.
    fn layer_open_tag(&self, level: Level, visible: bool) -> String {
        if self.mode().uses_script() && !visible {
            format!(r#"<g id="layer-{level}" class="layer" style="display:none">"#)
        } else {
            format!(r#"<g id="layer-{level}" class="layer">"#)
        }
    }
}

/// Declarations for the prefixes `content` uses, except `xlink`, which the
/// document root already declares.
fn nested_declarations(content: &str) -> String {
    match collect_prefixes(content) {
        Ok(prefixes) => prefix_declarations(prefixes.iter().filter(|prefix| prefix.as_str() != "xlink")),
        Err(reason) => {
            debug!(reason; "Prefixes of diagram content not collected");
            String::new()
        }
    }
}
