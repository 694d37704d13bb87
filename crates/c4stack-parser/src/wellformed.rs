//! XML well-formedness checking.
//!
//! [`check_well_formed`] is the ingestion gate: a document must read as a
//! balanced token stream with legal attributes and character data before any
//! extraction is attempted. The check fails fast on the first violation.

use log::trace;
use quick_xml::{
    Reader,
    events::{BytesStart, Event},
};

use crate::{
    error::{Diagnostic, ErrorCode},
    span::Span,
};

/// An element that has been opened but not yet closed.
struct OpenElement {
    name: String,
    span: Span,
}

/// Verifies that `source` is a well-formed XML token stream.
///
/// Tags must balance, end tags must match the innermost open element,
/// attributes must be well formed and unique, and text and attribute values
/// must only contain known entity and character references. No schema or
/// namespace validation is performed.
///
/// # Errors
///
/// Returns a [`Diagnostic`] describing the first violation, labeled with the
/// byte range where it occurred.
///
/// # Examples
///
/// ```
/// use c4stack_parser::check_well_formed;
///
/// assert!(check_well_formed("<root><item>test</item></root>").is_ok());
/// assert!(check_well_formed("<root><item>test</root>").is_err());
/// ```
pub fn check_well_formed(source: &str) -> Result<(), Diagnostic> {
    let mut reader = Reader::from_str(source);
    let config = reader.config_mut();
    // End tags are matched below so mismatches can point at both tags.
    config.check_end_names = false;
    config.allow_unmatched_ends = true;
    config.check_comments = true;

    let mut open: Vec<OpenElement> = Vec::new();
    let mut tokens = 0usize;

    loop {
        let start = reader.buffer_position() as usize;
        let event = reader.read_event().map_err(|err| {
            let position = reader.error_position() as usize;
            Diagnostic::error(format!("malformed XML: {err}"))
                .with_code(ErrorCode::E001)
                .with_label(Span::at(position).clamp(source.len()), "error occurred here")
        })?;
        let span = Span::new(start..reader.buffer_position() as usize);
        tokens += 1;

        match event {
            Event::Start(tag) => {
                check_attributes(&tag, span)?;
                open.push(OpenElement {
                    name: tag_name(&tag),
                    span,
                });
            }
            Event::Empty(tag) => check_attributes(&tag, span)?,
            Event::End(tag) => {
                let name = String::from_utf8_lossy(tag.name().as_ref()).into_owned();
                match open.pop() {
                    Some(element) if element.name == name => {}
                    Some(element) => {
                        return Err(Diagnostic::error(format!(
                            "end tag `</{name}>` does not match `<{}>`",
                            element.name
                        ))
                        .with_code(ErrorCode::E002)
                        .with_label(span, "unexpected end tag")
                        .with_secondary_label(
                            element.span,
                            format!("`<{}>` opened here", element.name),
                        )
                        .with_help(format!(
                            "close `<{}>` before closing its parent",
                            element.name
                        )));
                    }
                    None => {
                        return Err(Diagnostic::error(format!(
                            "end tag `</{name}>` has no matching start tag"
                        ))
                        .with_code(ErrorCode::E002)
                        .with_label(span, "nothing to close"));
                    }
                }
            }
            Event::Text(text) => {
                text.unescape().map_err(|err| {
                    Diagnostic::error(format!("invalid character data: {err}"))
                        .with_code(ErrorCode::E005)
                        .with_label(span, "in this text")
                })?;
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if let Some(element) = open.pop() {
        return Err(Diagnostic::error(format!(
            "element `<{}>` is never closed",
            element.name
        ))
        .with_code(ErrorCode::E003)
        .with_label(element.span, "opened here")
        .with_help(format!("add `</{}>` before the end of the document", element.name)));
    }

    trace!(tokens; "Document is well formed");
    Ok(())
}

fn tag_name(tag: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(tag.name().as_ref()).into_owned()
}

/// Checks every attribute of a start or empty tag.
fn check_attributes(tag: &BytesStart<'_>, span: Span) -> Result<(), Diagnostic> {
    for attribute in tag.attributes() {
        let attribute = attribute.map_err(|err| {
            Diagnostic::error(format!(
                "malformed attribute in `<{}>`: {err}",
                tag_name(tag)
            ))
            .with_code(ErrorCode::E004)
            .with_label(span, "in this tag")
            .with_help("attributes need the form name=\"value\" and must not repeat")
        })?;

        attribute.unescape_value().map_err(|err| {
            Diagnostic::error(format!(
                "invalid value for attribute `{}`: {err}",
                String::from_utf8_lossy(attribute.key.as_ref())
            ))
            .with_code(ErrorCode::E005)
            .with_label(span, "in this tag")
        })?;
    }
    Ok(())
}
