//! The embedded behavior script.
//!
//! The engine itself is static and lives in `navigation.js`. It is preceded by
//! two generated declarations the engine reads on start-up:
//!
//! ```text
//! const diagramData = {
//!   'context': { width: 400, height: 300, ratio: 1.33 }
//! };
//!
//! const availableLevels = ['context'];
//! ```

use c4stack_core::record::DiagramSet;

const ENGINE: &str = include_str!("../navigation.js");

/// Renders the complete `<script>` element.
pub(super) fn render_script(diagrams: &DiagramSet) -> String {
    format!(
        "  <script type=\"text/ecmascript\"><![CDATA[\n{}\n{}\n{ENGINE}  ]]></script>\n",
        diagram_data(diagrams),
        available_levels(diagrams),
    )
}

/// Renders the size table, one entry per existing level in level order.
fn diagram_data(diagrams: &DiagramSet) -> String {
    let entries: Vec<String> = diagrams
        .iter()
        .map(|record| {
            format!(
                "  '{}': {{ width: {:.0}, height: {:.0}, ratio: {:.2} }}",
                record.level(),
                record.width(),
                record.height(),
                record.aspect_ratio(),
            )
        })
        .collect();
    format!("const diagramData = {{\n{}\n}};\n", entries.join(",\n"))
}

fn available_levels(diagrams: &DiagramSet) -> String {
    let levels: Vec<String> = diagrams.levels().map(|level| format!("'{level}'")).collect();
    format!("const availableLevels = [{}];\n", levels.join(", "))
}

#[cfg(test)]
mod tests {
    use c4stack_core::{level::Level, record::DiagramRecord};

    use super::*;

    fn set() -> DiagramSet {
        [
            DiagramRecord::new(Level::Container, "0 0 500 400", 500.0, 400.0, "<g/>"),
            DiagramRecord::new(Level::Context, "0 0 400 300", 400.0, 300.0, "<g/>"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_diagram_data_table() {
        assert_eq!(
            diagram_data(&set()),
            "const diagramData = {\n  'context': { width: 400, height: 300, ratio: 1.33 },\n  'container': { width: 500, height: 400, ratio: 1.25 }\n};\n"
        );
    }

    #[test]
    fn test_available_levels() {
        assert_eq!(
            available_levels(&set()),
            "const availableLevels = ['context', 'container'];\n"
        );
    }

    #[test]
    fn test_engine_is_embeddable() {
        assert!(!ENGINE.contains("]]>"));
        for function in [
            "function showLevel(",
            "function toggleFitMode(",
            "function toggleNotes(",
            "function navigateDown(",
            "function navigateUp(",
            "function resizeContainers(",
        ] {
            assert!(ENGINE.contains(function), "missing {function}");
        }
    }

    #[test]
    fn test_level_switch_waits_for_reflow() {
        let show_level = ENGINE
            .split("function showLevel(")
            .nth(1)
            .and_then(|rest| rest.split("\nfunction ").next())
            .unwrap();
        assert!(ENGINE.contains("const REFLOW_DELAY_MS = 50;"));
        assert!(show_level.contains("}, REFLOW_DELAY_MS);"));
        let deferred = show_level.split("window.setTimeout(").nth(1).unwrap();
        assert!(deferred.contains("resizeContainers();"));
        assert!(deferred.contains("setupLinkHighlights("));

        let toggle_fit = ENGINE
            .split("function toggleFitMode(")
            .nth(1)
            .and_then(|rest| rest.split("\nfunction ").next())
            .unwrap();
        assert!(toggle_fit.contains("resizeContainers();"));
        assert!(!toggle_fit.contains("setTimeout"));
    }

    #[test]
    fn test_script_wraps_everything_in_cdata() {
        let script = render_script(&set());
        assert!(script.starts_with("  <script type=\"text/ecmascript\"><![CDATA[\n"));
        assert!(script.ends_with("]]></script>\n"));
        assert_eq!(script.matches("]]>").count(), 1);
    }
}
