//! Header, navigation buttons, and view toggles.

use svg::node::element as svg_element;

use c4stack_core::level::Level;

use super::{
    BUTTON_HEIGHT, BUTTON_STEP, BUTTON_WIDTH, BUTTON_X, BUTTON_Y, HEADER_HEIGHT, SvgComposer,
};

const TOGGLE_WIDTH: f64 = 130.0;
/// Gap between the right edge of the canvas and the fit toggle.
const TOGGLE_MARGIN: f64 = 26.0;
const TOGGLE_GAP: f64 = 10.0;
const BUTTON_RADIUS: f64 = 4.0;
/// Baseline of button labels relative to the button's top edge.
const LABEL_BASELINE: f64 = 22.0;

impl SvgComposer<'_> {
    /// Renders the header bar with the title and the breadcrumb.
    ///
    /// `title` must already be escaped.
    pub(super) fn render_header(&self, title: &str, initial: Level) -> String {
        let bar = svg_element::Rectangle::new()
            .set("id", "header-bar")
            .set("x", 0)
            .set("y", 0)
            .set("width", self.width())
            .set("height", HEADER_HEIGHT)
            .set("fill", &self.theme.header);

        format!(
            "  {bar}\n  <text x=\"26\" y=\"33\" class=\"header-title\">{title}</text>\n  <text x=\"26\" y=\"59\" class=\"breadcrumb\" id=\"breadcrumb\">{} Level</text>\n",
            initial.title()
        )
    }

    /// Renders the navigation button for the `index`-th existing level.
    ///
    /// In script mode the button calls `showLevel`; in CSS-only mode it links
    /// to the layer's fragment so the `:target` rules take over.
    pub(super) fn render_button(&self, index: usize, level: Level, active: bool) -> String {
        let x = BUTTON_X + index as f64 * BUTTON_STEP;
        let rect = svg_element::Rectangle::new()
            .set("x", x)
            .set("y", BUTTON_Y)
            .set("width", BUTTON_WIDTH)
            .set("height", BUTTON_HEIGHT)
            .set("rx", BUTTON_RADIUS);
        let label = svg_element::Text::new(level.title())
            .set("x", x + BUTTON_WIDTH / 2.0)
            .set("y", BUTTON_Y + LABEL_BASELINE)
            .set("text-anchor", "middle");

        let class = if active {
            "nav-button active"
        } else {
            "nav-button"
        };
        let button = svg_element::Group::new()
            .set("id", format!("nav-{level}"))
            .set("class", class)
            .add(rect)
            .add(label);

        if self.mode().uses_script() {
            let button = button.set("onclick", format!("showLevel('{level}')"));
            format!("  {button}")
        } else {
            let link = svg_element::Anchor::new()
                .set("href", format!("#layer-{level}"))
                .add(button);
            format!("  {link}")
        }
    }

    /// Renders the scaling-mode toggle, the notes toggle, and the usage hint.
    ///
    /// The toggles are positioned with a `transform` so the script can
    /// right-align them when the viewport changes.
    pub(super) fn render_toggles(&self) -> String {
        let fit_x = self.width() - TOGGLE_MARGIN - TOGGLE_WIDTH;
        let notes_x = fit_x - TOGGLE_GAP - TOGGLE_WIDTH;

        let fit = toggle("fit-toggle", "fit-text", "Native Size", "toggleFitMode()", fit_x);
        let notes = toggle("notes-toggle", "notes-text", "Hide Notes", "toggleNotes()", notes_x);
        let hint = svg_element::Text::new("Click buttons or diagram elements to navigate")
            .set("id", "instructions")
            .set("class", "instructions")
            .set("x", notes_x - TOGGLE_GAP)
            .set("y", BUTTON_Y + LABEL_BASELINE)
            .set("text-anchor", "end");

        format!("  {fit}\n  {notes}\n  {hint}\n")
    }
}

fn toggle(id: &str, text_id: &str, label: &str, onclick: &str, x: f64) -> svg_element::Group {
    let rect = svg_element::Rectangle::new()
        .set("x", 0)
        .set("y", 0)
        .set("width", TOGGLE_WIDTH)
        .set("height", BUTTON_HEIGHT)
        .set("rx", BUTTON_RADIUS);
    let text = svg_element::Text::new(label)
        .set("id", text_id)
        .set("x", TOGGLE_WIDTH / 2.0)
        .set("y", LABEL_BASELINE)
        .set("text-anchor", "middle");

    svg_element::Group::new()
        .set("id", id)
        .set("class", "toggle-button")
        .set("transform", format!("translate({x}, {BUTTON_Y})"))
        .set("onclick", onclick)
        .add(rect)
        .add(text)
}
