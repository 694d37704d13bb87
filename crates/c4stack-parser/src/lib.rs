//! Ingestion of C4 diagram documents.
//!
//! This crate turns one untrusted SVG document into a
//! [`DiagramRecord`](c4stack_core::record::DiagramRecord) ready for
//! composition. Ingestion runs in four stages:
//!
//! 1. [`check_well_formed`] rejects documents that are not balanced XML.
//! 2. [`extract`] reads the root element's size and view box and locates the
//!    fragment between its tags.
//! 3. [`clean_fragment`] removes scripts and rewrites hyperlinks.
//! 4. [`pretty_print`] re-indents the fragment, on a best-effort basis.
//!
//! [`parse`] runs all four.

pub mod error;
pub mod namespace;

mod clean;
mod metadata;
mod pretty;
mod span;
mod wellformed;

use log::{info, trace};

use c4stack_core::{level::Level, navigation::NavigationMode, record::DiagramRecord};

pub use clean::clean_fragment;
pub use error::ParseError;
pub use metadata::{RawDiagram, extract, parse_length};
pub use pretty::pretty_print;
pub use span::Span;
pub use wellformed::check_well_formed;

/// Ingests one diagram document as the diagram for `level`.
///
/// # Arguments
///
/// * `source` - The full text of the SVG document.
/// * `level` - The level the document was classified as.
/// * `mode` - How hyperlinks inside the diagram are rewritten.
///
/// # Errors
///
/// Returns a [`ParseError`] if the document is not well formed, has no
/// `<svg>` root, or the root has no content. Size and view box problems are
/// never errors; they fall back to defaults.
///
/// # Examples
///
/// ```
/// use c4stack_core::{level::Level, navigation::NavigationMode};
///
/// let source = r#"<svg width="640px" height="480"><rect/></svg>"#;
/// let record = c4stack_parser::parse(source, Level::Context, NavigationMode::Script).unwrap();
///
/// assert_eq!(record.width(), 640.0);
/// assert_eq!(record.content(), "<rect/>");
/// ```
pub fn parse(source: &str, level: Level, mode: NavigationMode) -> Result<DiagramRecord, ParseError> {
    check_well_formed(source)?;

    let raw = extract(source)?;
    trace!(level:?, fragment_span:? = raw.fragment_span(); "Extracted fragment");

    let cleaned = clean_fragment(raw.fragment(), level, mode);
    let content = pretty_print(&cleaned);

    let record = DiagramRecord::new(level, raw.view_box(), raw.width(), raw.height(), content);
    info!(level:?, width = record.width(), height = record.height(); "Diagram ingested");
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    fn first_code(err: &ParseError) -> Option<ErrorCode> {
        err.diagnostics().first().and_then(|diag| diag.code())
    }

    #[test]
    fn test_parse_runs_every_stage() {
        let source = r##"<?xml version="1.0"?>
<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink" width="400px" height="300px" viewBox="0 0 400 300">
  <script>alert(1)</script>
  <g class="link"><a xlink:href="#container"><rect/><text>System</text></a></g>
</svg>"##;

        let record = parse(source, Level::Context, NavigationMode::Script).unwrap();

        assert_eq!(record.level(), Level::Context);
        assert_eq!(record.view_box(), "0 0 400 300");
        assert_eq!(record.width(), 400.0);
        assert_eq!(record.height(), 300.0);
        assert!(!record.content().contains("<script"));
        assert!(!record.content().contains("<a"));
        assert_eq!(record.content().matches("navigateDown()").count(), 1);
        assert!(record.content().contains("\n  <rect/>"));
    }

    #[test]
    fn test_malformed_document_is_rejected_before_extraction() {
        let err = parse("<svg><g></svg>", Level::Code, NavigationMode::Script).unwrap_err();
        assert_eq!(first_code(&err), Some(ErrorCode::E002));
    }

    #[test]
    fn test_structural_errors_surface() {
        let err = parse("<svg>   </svg>", Level::Code, NavigationMode::Script).unwrap_err();
        assert_eq!(first_code(&err), Some(ErrorCode::E103));

        let err = parse("<html><p/></html>", Level::Code, NavigationMode::Script).unwrap_err();
        assert_eq!(first_code(&err), Some(ErrorCode::E100));
    }
}
