//! Diagram metadata extraction.
//!
//! [`extract`] reads the coordinate system and intrinsic size off a diagram's
//! root `<svg>` tag and locates the fragment between the root's opening and
//! closing tags.
//!
//! The root element and its matching end tag are located on the token stream,
//! so a `</svg>` sequence inside a comment, CDATA section, or embedded
//! metadata cannot cut the fragment short. Attributes are read off the one
//! root tag with anchored regular expressions; anything that needs nested
//! attributes should walk the token stream instead of growing these patterns.

use std::sync::LazyLock;

use log::{debug, trace};
use quick_xml::{
    Reader,
    events::{BytesStart, Event},
};
use regex::Regex;
use winnow::{
    Parser as _,
    ascii::{float, multispace0},
    combinator::{delimited, opt, terminated},
    error::ModalResult,
};

use c4stack_core::record::{DEFAULT_HEIGHT, DEFAULT_VIEW_BOX, DEFAULT_WIDTH};

use crate::{
    error::{Diagnostic, ErrorCode},
    span::Span,
};

static VIEW_BOX: LazyLock<Regex> = LazyLock::new(|| attribute_pattern("viewBox"));
static WIDTH: LazyLock<Regex> = LazyLock::new(|| attribute_pattern("width"));
static HEIGHT: LazyLock<Regex> = LazyLock::new(|| attribute_pattern("height"));
static ROOT_OPEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<(?:[A-Za-z_][\w.-]*:)?svg[\s/>]").expect("valid root pattern"));

/// Builds a pattern matching `name="value"` or `name='value'`, where `name`
/// is preceded by whitespace so that e.g. `stroke-width` never matches
/// `width`.
fn attribute_pattern(name: &str) -> Regex {
    Regex::new(&format!(
        r#"\s{name}\s*=\s*(?:"([^"]*)"|'([^']*)')"#
    ))
    .expect("valid attribute pattern")
}

/// Metadata and raw content extracted from one diagram document.
#[derive(Debug, Clone, PartialEq)]
pub struct RawDiagram<'a> {
    view_box: String,
    width: f64,
    height: f64,
    fragment: &'a str,
    fragment_span: Span,
}

impl<'a> RawDiagram<'a> {
    /// Returns the root's `viewBox`, or [`DEFAULT_VIEW_BOX`].
    pub fn view_box(&self) -> &str {
        &self.view_box
    }

    /// Returns the root's width, or [`DEFAULT_WIDTH`].
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Returns the root's height, or [`DEFAULT_HEIGHT`].
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Returns the raw text between the root's opening and closing tags.
    pub fn fragment(&self) -> &'a str {
        self.fragment
    }

    /// Returns where [`fragment`](Self::fragment) lies in the source.
    pub fn fragment_span(&self) -> Span {
        self.fragment_span
    }
}

/// Extracts metadata and the root fragment from a diagram document.
///
/// Missing or unusable `viewBox`, `width`, and `height` attributes fall back
/// to the documented defaults without error.
///
/// # Errors
///
/// Returns a [`Diagnostic`] if the document has no `<svg>` root
/// ([`ErrorCode::E100`]), the root tag is unterminated ([`ErrorCode::E101`]),
/// the root is never closed ([`ErrorCode::E102`]), the root has no content
/// ([`ErrorCode::E103`]), or another element follows the root
/// ([`ErrorCode::E104`]).
///
/// # Examples
///
/// ```
/// use c4stack_parser::extract;
///
/// let raw = extract(r#"<svg width="640px" height="480"><rect/></svg>"#).unwrap();
/// assert_eq!(raw.width(), 640.0);
/// assert_eq!(raw.view_box(), "0 0 400 300");
/// assert_eq!(raw.fragment(), "<rect/>");
/// ```
pub fn extract(source: &str) -> Result<RawDiagram<'_>, Diagnostic> {
    let root = locate_root(source)?;
    let open_tag = &source[root.open_tag.start()..root.open_tag.end()];

    let view_box = attribute(&VIEW_BOX, open_tag)
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .unwrap_or(DEFAULT_VIEW_BOX)
        .to_string();
    let width = attribute(&WIDTH, open_tag)
        .and_then(parse_length)
        .unwrap_or(DEFAULT_WIDTH);
    let height = attribute(&HEIGHT, open_tag)
        .and_then(parse_length)
        .unwrap_or(DEFAULT_HEIGHT);
    trace!(view_box, width, height; "Read root attributes");

    let fragment_span = Span::new(root.open_tag.end()..root.close_tag.start());
    let fragment = &source[fragment_span.start()..fragment_span.end()];
    if fragment.trim().is_empty() {
        return Err(Diagnostic::error("diagram has no content")
            .with_code(ErrorCode::E103)
            .with_label(root.open_tag, "root element is empty"));
    }

    Ok(RawDiagram {
        view_box,
        width,
        height,
        fragment,
        fragment_span,
    })
}

/// Parses an SVG length such as `"640"`, `"640px"`, or `" 12.5 "`.
///
/// Returns `None` for anything that is not a positive, finite number with an
/// optional `px` suffix, so callers can fall back to a default.
///
/// # Examples
///
/// ```
/// use c4stack_parser::parse_length;
///
/// assert_eq!(parse_length("640px"), Some(640.0));
/// assert_eq!(parse_length("0"), None);
/// assert_eq!(parse_length("100%"), None);
/// ```
pub fn parse_length(value: &str) -> Option<f64> {
    length
        .parse(value)
        .ok()
        .filter(|length| length.is_finite() && *length > 0.0)
}

fn length(input: &mut &str) -> ModalResult<f64> {
    delimited(multispace0, terminated(float, opt("px")), multispace0).parse_next(input)
}

fn attribute<'t>(pattern: &Regex, tag: &'t str) -> Option<&'t str> {
    pattern
        .captures(tag)
        .and_then(|captures| captures.get(1).or_else(|| captures.get(2)))
        .map(|value| value.as_str())
}

/// Source locations of the root element's tags.
struct Root {
    open_tag: Span,
    close_tag: Span,
}

fn is_svg(tag: &BytesStart<'_>) -> bool {
    tag.local_name().as_ref() == b"svg"
}

/// Finds the root element's opening and matching closing tag on the token
/// stream.
fn locate_root(source: &str) -> Result<Root, Diagnostic> {
    let mut reader = Reader::from_str(source);
    let config = reader.config_mut();
    config.check_end_names = false;
    config.allow_unmatched_ends = true;

    let mut depth = 0usize;
    let mut open_tag: Option<Span> = None;
    let mut close_tag: Option<Span> = None;

    loop {
        let start = reader.buffer_position() as usize;
        let event = match reader.read_event() {
            Ok(event) => event,
            Err(err) => return Err(unreadable(source, open_tag, start, &err.to_string())),
        };
        let span = Span::new(start..reader.buffer_position() as usize);

        match event {
            Event::Start(tag) => {
                if depth == 0 {
                    if close_tag.is_some() {
                        return Err(trailing_element(span, close_tag));
                    }
                    if !is_svg(&tag) {
                        return Err(not_svg(span, &tag));
                    }
                    open_tag = Some(span);
                }
                depth += 1;
            }
            Event::Empty(tag) if depth == 0 => {
                if close_tag.is_some() {
                    return Err(trailing_element(span, close_tag));
                }
                if !is_svg(&tag) {
                    return Err(not_svg(span, &tag));
                }
                return Err(Diagnostic::error("diagram has no content")
                    .with_code(ErrorCode::E103)
                    .with_label(span, "root element is self-closing"));
            }
            Event::End(_) => {
                depth = depth.saturating_sub(1);
                if depth == 0 && open_tag.is_some() && close_tag.is_none() {
                    close_tag = Some(span);
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    match (open_tag, close_tag) {
        (Some(open_tag), Some(close_tag)) => Ok(Root {
            open_tag,
            close_tag,
        }),
        (Some(open_tag), None) => Err(missing_close(open_tag)),
        (None, _) => Err(Diagnostic::error("no `<svg>` root element found")
            .with_code(ErrorCode::E100)
            .with_label(Span::new(0..source.len().min(1)), "document starts here")
            .with_help("each input must be a single SVG document")),
    }
}

/// Explains a tokenizer failure in terms of the root element where possible.
fn unreadable(source: &str, open_tag: Option<Span>, position: usize, reason: &str) -> Diagnostic {
    debug!(position, reason; "Tokenizer stopped while locating the root element");

    if let Some(open_tag) = open_tag {
        return missing_close(open_tag);
    }

    match ROOT_OPEN.find(&source[position.min(source.len())..]) {
        Some(found) if !source[position + found.start()..].contains('>') => {
            let span = Span::new(position + found.start()..source.len());
            Diagnostic::error("root `<svg` tag is never terminated")
                .with_code(ErrorCode::E101)
                .with_label(span, "unterminated tag")
                .with_help("close the tag with `>`")
        }
        _ => Diagnostic::error(format!("malformed XML: {reason}"))
            .with_code(ErrorCode::E001)
            .with_label(Span::at(position).clamp(source.len()), "error occurred here"),
    }
}

fn missing_close(open_tag: Span) -> Diagnostic {
    Diagnostic::error("no closing `</svg>` tag")
        .with_code(ErrorCode::E102)
        .with_label(open_tag, "root element opened here")
        .with_help("add `</svg>` at the end of the document")
}

fn not_svg(span: Span, tag: &BytesStart<'_>) -> Diagnostic {
    Diagnostic::error(format!(
        "root element is `<{}>`, not `<svg>`",
        String::from_utf8_lossy(tag.name().as_ref())
    ))
    .with_code(ErrorCode::E100)
    .with_label(span, "root element")
    .with_help("each input must be a single SVG document")
}

fn trailing_element(span: Span, close_tag: Option<Span>) -> Diagnostic {
    let diag = Diagnostic::error("element found after the root `<svg>` element")
        .with_code(ErrorCode::E104)
        .with_label(span, "unexpected element")
        .with_help("an input must contain exactly one top-level `<svg>` element");
    match close_tag {
        Some(close_tag) => diag.with_secondary_label(close_tag, "root element ends here"),
        None => diag,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_full_metadata() {
        let source = r#"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" width="400" height="300" viewBox="0 0 400 300">
  <rect x="10" y="10"/>
</svg>"#;
        let raw = extract(source).unwrap();

        assert_eq!(raw.view_box(), "0 0 400 300");
        assert_eq!(raw.width(), 400.0);
        assert_eq!(raw.height(), 300.0);
        assert_eq!(raw.fragment().trim(), r#"<rect x="10" y="10"/>"#);
    }

    #[test]
    fn test_pixel_suffix_is_stripped() {
        let raw = extract(r#"<svg width="640px" height="480px"><g/></svg>"#).unwrap();
        assert_eq!(raw.width(), 640.0);
        assert_eq!(raw.height(), 480.0);
    }

    #[test]
    fn test_defaults_when_missing() {
        let raw = extract("<svg><g/></svg>").unwrap();
        assert_eq!(raw.width(), DEFAULT_WIDTH);
        assert_eq!(raw.height(), DEFAULT_HEIGHT);
        assert_eq!(raw.view_box(), DEFAULT_VIEW_BOX);
    }

    #[test]
    fn test_zero_height_falls_back() {
        let raw = extract(r#"<svg width="500" height="0"><g/></svg>"#).unwrap();
        assert_eq!(raw.width(), 500.0);
        assert_eq!(raw.height(), DEFAULT_HEIGHT);
    }

    #[test]
    fn test_unparseable_sizes_fall_back_independently() {
        let raw = extract(r#"<svg width="wide" height="250"><g/></svg>"#).unwrap();
        assert_eq!(raw.width(), DEFAULT_WIDTH);
        assert_eq!(raw.height(), 250.0);
    }

    #[test]
    fn test_prefixed_attributes_do_not_match() {
        let raw = extract(r#"<svg stroke-width="3" data-height='9' width='120'><g/></svg>"#)
            .unwrap();
        assert_eq!(raw.width(), 120.0);
        assert_eq!(raw.height(), DEFAULT_HEIGHT);
    }

    #[test]
    fn test_closing_tag_inside_cdata_does_not_truncate() {
        let source = "<svg><metadata><![CDATA[</svg>]]></metadata><rect/></svg>";
        let raw = extract(source).unwrap();
        assert_eq!(
            raw.fragment(),
            "<metadata><![CDATA[</svg>]]></metadata><rect/>"
        );
        let span = raw.fragment_span();
        assert_eq!(&source[span.start()..span.end()], raw.fragment());
    }

    #[test]
    fn test_no_svg_element() {
        let err = extract("<html><body/></html>").unwrap_err();
        assert_eq!(err.code(), Some(ErrorCode::E100));

        let err = extract("just text").unwrap_err();
        assert_eq!(err.code(), Some(ErrorCode::E100));
    }

    #[test]
    fn test_unterminated_root_tag() {
        let err = extract(r#"<svg width="10""#).unwrap_err();
        assert_eq!(err.code(), Some(ErrorCode::E101));
    }

    #[test]
    fn test_missing_closing_tag() {
        let err = extract("<svg><rect/>").unwrap_err();
        assert_eq!(err.code(), Some(ErrorCode::E102));
    }

    #[test]
    fn test_empty_fragment() {
        assert_eq!(
            extract("<svg>  \n </svg>").unwrap_err().code(),
            Some(ErrorCode::E103)
        );
        assert_eq!(
            extract(r#"<svg width="1"/>"#).unwrap_err().code(),
            Some(ErrorCode::E103)
        );
    }

    #[test]
    fn test_trailing_root_element() {
        let err = extract("<svg><rect/></svg><svg><rect/></svg>").unwrap_err();
        assert_eq!(err.code(), Some(ErrorCode::E104));
        assert_eq!(err.labels().len(), 2);
    }

    #[test]
    fn test_parse_length() {
        assert_eq!(parse_length("640px"), Some(640.0));
        assert_eq!(parse_length("12.5"), Some(12.5));
        assert_eq!(parse_length(" 80 "), Some(80.0));
        assert_eq!(parse_length("0"), None);
        assert_eq!(parse_length("-5"), None);
        assert_eq!(parse_length("100%"), None);
        assert_eq!(parse_length("inf"), None);
        assert_eq!(parse_length(""), None);
    }
}
