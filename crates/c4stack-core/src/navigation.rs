//! Navigation modes of the composite document.

use std::fmt;

use serde::Deserialize;

/// How level transitions are wired into the composite document.
///
/// The mode affects both the fragment cleaner (what drill-down anchors are
/// rewritten into) and the composite builder (whether a behavior script is
/// embedded at all).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NavigationMode {
    /// Anchors become `onclick` triggers driven by the embedded script, which
    /// also handles scaling, notes, and hover highlighting.
    #[default]
    Script,

    /// No script is embedded. Anchors are unwrapped and layers are switched
    /// with the CSS `:target` pseudo-class.
    CssOnly,
}

impl NavigationMode {
    /// Returns `true` if the composite document carries the behavior script.
    pub fn uses_script(self) -> bool {
        matches!(self, NavigationMode::Script)
    }
}

impl fmt::Display for NavigationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavigationMode::Script => f.write_str("script"),
            NavigationMode::CssOnly => f.write_str("css-only"),
        }
    }
}
