//! Namespace prefixes of detached fragments.
//!
//! A fragment cut out of a diagram's root element may still use prefixes
//! (typically `xlink:`) that only the root declared. The helpers here find
//! those prefixes and produce declarations for them so the fragment can be
//! parsed on its own.

use indexmap::IndexSet;
use quick_xml::{
    Reader,
    events::{BytesStart, Event},
    name::QName,
};

/// The SVG namespace, declared as the default namespace of every wrapper.
pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Prefixes that are bound by XML itself and never need a declaration.
const RESERVED: [&str; 2] = ["xml", "xmlns"];

/// Well-known prefixes and the URIs diagram generators bind them to.
const KNOWN: [(&str, &str); 8] = [
    ("xlink", "http://www.w3.org/1999/xlink"),
    ("svg", SVG_NAMESPACE),
    ("xhtml", "http://www.w3.org/1999/xhtml"),
    ("rdf", "http://www.w3.org/1999/02/22-rdf-syntax-ns#"),
    ("dc", "http://purl.org/dc/elements/1.1/"),
    ("cc", "http://creativecommons.org/ns#"),
    ("sodipodi", "http://sodipodi.sourceforge.net/DTD/sodipodi-0.dtd"),
    ("inkscape", "http://www.inkscape.org/namespaces/inkscape"),
];

/// Collects every namespace prefix used by an element or attribute name, in
/// first-seen order.
///
/// `xml` and `xmlns` are never collected.
///
/// # Errors
///
/// Returns the tokenizer's message if the fragment cannot be read.
///
/// # Examples
///
/// ```
/// use c4stack_parser::namespace::collect_prefixes;
///
/// let prefixes = collect_prefixes(r##"<use xlink:href="#a" xml:space="preserve"/><svg:g/>"##).unwrap();
/// assert_eq!(prefixes.into_iter().collect::<Vec<_>>(), ["xlink", "svg"]);
/// ```
pub fn collect_prefixes(fragment: &str) -> Result<IndexSet<String>, String> {
    let mut reader = Reader::from_str(fragment);
    reader.config_mut().check_end_names = false;

    let mut prefixes = IndexSet::new();
    loop {
        match reader.read_event().map_err(|err| err.to_string())? {
            Event::Start(tag) | Event::Empty(tag) => collect_from_tag(&tag, &mut prefixes)?,
            Event::Eof => break,
            _ => {}
        }
    }
    Ok(prefixes)
}

fn collect_from_tag(tag: &BytesStart<'_>, prefixes: &mut IndexSet<String>) -> Result<(), String> {
    insert_prefix(tag.name(), prefixes);
    for attribute in tag.attributes() {
        let attribute = attribute.map_err(|err| err.to_string())?;
        insert_prefix(attribute.key, prefixes);
    }
    Ok(())
}

fn insert_prefix(name: QName<'_>, prefixes: &mut IndexSet<String>) {
    let Some(prefix) = name.prefix() else {
        return;
    };
    let prefix = String::from_utf8_lossy(prefix.as_ref());
    let prefix: &str = &prefix;
    if !RESERVED.contains(&prefix) && !prefixes.contains(prefix) {
        prefixes.insert(prefix.to_string());
    }
}

/// Returns the namespace URI to bind `prefix` to.
///
/// Unknown prefixes get a stable placeholder URN so that the same fragment
/// always produces the same declarations.
pub fn namespace_uri(prefix: &str) -> String {
    KNOWN
        .iter()
        .find(|(known, _)| *known == prefix)
        .map(|(_, uri)| (*uri).to_string())
        .unwrap_or_else(|| format!("urn:c4stack:ns:{prefix}"))
}

/// Renders `xmlns` attributes declaring the SVG default namespace and every
/// prefix in `prefixes`, each preceded by a space.
pub fn declarations<'a>(prefixes: impl IntoIterator<Item = &'a String>) -> String {
    format!(r#" xmlns="{SVG_NAMESPACE}"{}"#, prefix_declarations(prefixes))
}

/// Renders an `xmlns:<prefix>` attribute for every prefix in `prefixes`,
/// each preceded by a space. The default namespace is left alone.
///
/// # Examples
///
/// ```
/// use c4stack_parser::namespace::prefix_declarations;
///
/// let prefixes = ["inkscape".to_string()];
/// assert_eq!(
///     prefix_declarations(&prefixes),
///     r#" xmlns:inkscape="http://www.inkscape.org/namespaces/inkscape""#
/// );
/// ```
pub fn prefix_declarations<'a>(prefixes: impl IntoIterator<Item = &'a String>) -> String {
    prefixes
        .into_iter()
        .map(|prefix| format!(r#" xmlns:{prefix}="{}""#, namespace_uri(prefix)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collects_in_first_seen_order() {
        let prefixes = collect_prefixes(
            r##"<sodipodi:namedview/><g inkscape:label="x"><use xlink:href="#a"/><use xlink:href="#b"/></g>"##,
        )
        .unwrap();

        let prefixes: Vec<_> = prefixes.into_iter().collect();
        assert_eq!(prefixes, ["sodipodi", "inkscape", "xlink"]);
    }

    #[test]
    fn test_reserved_prefixes_are_skipped() {
        let prefixes =
            collect_prefixes(r#"<text xml:space="preserve" xmlns:foo="urn:foo">a</text>"#).unwrap();
        assert!(prefixes.is_empty());
    }

    #[test]
    fn test_unreadable_fragment() {
        assert!(collect_prefixes("<g><!-- never closed").is_err());
    }

    #[test]
    fn test_namespace_uri() {
        assert_eq!(namespace_uri("xlink"), "http://www.w3.org/1999/xlink");
        assert_eq!(namespace_uri("plantuml"), "urn:c4stack:ns:plantuml");
    }

    #[test]
    fn test_declarations() {
        let prefixes: IndexSet<String> = ["xlink".to_string()].into_iter().collect();
        assert_eq!(
            declarations(&prefixes),
            r#" xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink""#
        );
    }
}
