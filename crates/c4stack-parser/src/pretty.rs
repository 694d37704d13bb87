//! Fragment pretty-printing.
//!
//! Cleaned fragments are re-indented before they are embedded so the
//! composite document can be read and diffed by hand. Formatting is strictly
//! best effort: a fragment that cannot be re-read is embedded as it is.

use log::debug;
use quick_xml::{NsReader, Writer, events::Event, name::ResolveResult};

use crate::namespace::{collect_prefixes, declarations};

const WRAPPER: &str = "c4stack-fragment";

/// Re-indents a fragment with two spaces per nesting level.
///
/// The fragment is wrapped in a synthetic root that declares every namespace
/// prefix it uses, re-read with namespace resolution, and written back with
/// whitespace-only text dropped. Text with content is kept verbatim.
///
/// Returns the input unchanged if any step fails. Applying the function to
/// its own output yields the same output.
///
/// # Examples
///
/// ```
/// use c4stack_parser::pretty_print;
///
/// assert_eq!(pretty_print("<g><rect/></g>"), "<g>\n  <rect/>\n</g>");
/// assert_eq!(pretty_print("<g>"), "<g>");
/// ```
pub fn pretty_print(fragment: &str) -> String {
    match reindent(fragment) {
        Ok(formatted) => formatted,
        Err(reason) => {
            debug!(reason; "Fragment left unformatted");
            fragment.to_string()
        }
    }
}

fn reindent(fragment: &str) -> Result<String, String> {
    let prefixes = collect_prefixes(fragment)?;
    let wrapped = format!(
        "<{WRAPPER}{}>{fragment}</{WRAPPER}>",
        declarations(&prefixes)
    );

    let mut reader = NsReader::from_str(&wrapped);
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    let mut depth = 0usize;

    loop {
        let event = reader.read_event().map_err(|err| err.to_string())?;
        match &event {
            Event::Start(tag) | Event::Empty(tag) => {
                if let (ResolveResult::Unknown(prefix), _) = reader.resolve_element(tag.name()) {
                    return Err(format!(
                        "unbound prefix `{}`",
                        String::from_utf8_lossy(&prefix)
                    ));
                }
                for attribute in tag.attributes() {
                    let attribute = attribute.map_err(|err| err.to_string())?;
                    if let (ResolveResult::Unknown(prefix), _) =
                        reader.resolve_attribute(attribute.key)
                    {
                        return Err(format!(
                            "unbound prefix `{}`",
                            String::from_utf8_lossy(&prefix)
                        ));
                    }
                }
            }
            Event::Eof => break,
            _ => {}
        }

        let skip = match &event {
            Event::Start(_) => {
                depth += 1;
                depth == 1
            }
            Event::End(_) => {
                depth = depth.saturating_sub(1);
                depth == 0
            }
            Event::Text(text) => text.iter().all(u8::is_ascii_whitespace),
            _ => false,
        };
        if !skip {
            writer
                .write_event(event)
                .map_err(|err| err.to_string())?;
        }
    }

    let formatted = String::from_utf8(writer.into_inner()).map_err(|err| err.to_string())?;
    Ok(formatted.trim().to_string())
}
