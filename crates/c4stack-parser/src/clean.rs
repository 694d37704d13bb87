//! Fragment cleaning.
//!
//! Diagram generators embed scripts and hyperlinks that make no sense once a
//! diagram is nested inside the composite document. [`clean_fragment`] strips
//! scripts and turns hyperlinks into level-transition triggers (or, in
//! CSS-only mode, removes them) while keeping the fragment well formed.

use std::sync::LazyLock;

use log::{debug, trace};
use quick_xml::{Reader, events::Event};
use regex::{Captures, Regex};

use c4stack_core::{level::Level, navigation::NavigationMode};

/// Matches a script element, paired or self-closing.
static SCRIPT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<script\b[^>]*?(?:/>|>.*?</script\s*>)").expect("valid script pattern")
});

/// Matches a group whose first child is a hyperlink, capturing the group's
/// start tag and the hyperlink's content.
static GROUPED_ANCHOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?s)(<g\b[^>]*>)\s*<a\s+[^>]*href\s*=\s*(?:"[^"]*"|'[^']*')[^>]*>(.*?)</a\s*>"#,
    )
    .expect("valid anchor pattern")
});

/// Matches any anchor start, empty, or end tag.
static ANCHOR_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<a(?:\s[^>]*)?/?>|</a\s*>").expect("valid anchor tag pattern"));

static ONCLICK_ATTR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\s+onclick\s*=\s*(?:"[^"]*"|'[^']*')"#).expect("valid onclick pattern")
});

static STYLE_ATTR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\s+style\s*=\s*(?:"([^"]*)"|'([^']*)')"#).expect("valid style pattern")
});

const NAVIGATE_DOWN: &str = "navigateDown()";
const POINTER: &str = "cursor:pointer;";

/// Cleans a diagram fragment for embedding into the composite document.
///
/// Every `<script>` element is removed first. Hyperlinks are then rewritten
/// according to `mode`:
///
/// - [`NavigationMode::Script`]: a `<g>` whose first child is an `<a href>`
///   loses the anchor and gains `onclick="navigateDown()"` plus a pointer
///   cursor. Any remaining anchor tags are stripped, keeping their content.
/// - [`NavigationMode::CssOnly`]: anchor tags are unwrapped, keeping their
///   content. No click handlers are added.
///
/// `level` is the level the fragment belongs to. Drill-down targets are
/// logged against the level that follows it.
///
/// # Examples
///
/// ```
/// use c4stack_core::{level::Level, navigation::NavigationMode};
/// use c4stack_parser::clean_fragment;
///
/// let cleaned = clean_fragment(
///     r##"<g id="a"><a href="#x"><text>A</text></a></g>"##,
///     Level::Context,
///     NavigationMode::Script,
/// );
/// assert_eq!(
///     cleaned,
///     r#"<g id="a" onclick="navigateDown()" style="cursor:pointer;"><text>A</text></g>"#
/// );
/// ```
pub fn clean_fragment(fragment: &str, level: Level, mode: NavigationMode) -> String {
    let without_scripts = SCRIPT.replace_all(fragment, "");
    if without_scripts.len() != fragment.len() {
        debug!(level:?; "Removed embedded scripts");
    }

    let cleaned = match mode {
        NavigationMode::Script => {
            let navigable = attach_navigation(&without_scripts);
            let triggers = navigable.matches(NAVIGATE_DOWN).count();
            debug!(level:?, target:? = level.next(), triggers; "Attached drill-down navigation");
            navigable
        }
        NavigationMode::CssOnly => unwrap_anchors(&without_scripts).unwrap_or_else(|| {
            debug!(level:?; "Fragment did not tokenize, stripping anchors by pattern");
            strip_anchor_tags(&without_scripts)
        }),
    };

    trace!(level:?, mode:?, before = fragment.len(), after = cleaned.len(); "Cleaned fragment");
    cleaned
}

fn attach_navigation(fragment: &str) -> String {
    let rewritten = GROUPED_ANCHOR.replace_all(fragment, |caps: &Captures<'_>| {
        let group = &caps[1];
        if group.ends_with("/>") {
            // An empty group cannot wrap the anchor that follows it.
            return caps[0].to_string();
        }
        format!("{}{}", navigable_group(group), &caps[2])
    });
    strip_anchor_tags(&rewritten)
}

/// Rewrites a `<g ...>` start tag so that clicking it navigates down.
///
/// An existing `onclick` is replaced and an existing `style` is kept after
/// the pointer cursor, so no attribute is ever duplicated.
fn navigable_group(tag: &str) -> String {
    let existing_style = STYLE_ATTR
        .captures(tag)
        .and_then(|caps| caps.get(1).or_else(|| caps.get(2)))
        .map(|value| value.as_str().trim().replace('"', "&quot;"))
        .unwrap_or_default();

    let tag = ONCLICK_ATTR.replace_all(tag, "");
    let tag = STYLE_ATTR.replace_all(&tag, "");
    let head = tag.trim_end_matches('>').trim_end();

    format!(r#"{head} onclick="{NAVIGATE_DOWN}" style="{POINTER}{existing_style}">"#)
}

fn strip_anchor_tags(fragment: &str) -> String {
    ANCHOR_TAG.replace_all(fragment, "").into_owned()
}

/// Drops anchor tags from the token stream and copies every other token
/// verbatim. Returns `None` if the fragment does not tokenize.
fn unwrap_anchors(fragment: &str) -> Option<String> {
    let mut reader = Reader::from_str(fragment);
    let config = reader.config_mut();
    config.check_end_names = false;
    config.allow_unmatched_ends = true;

    let mut output = String::with_capacity(fragment.len());
    loop {
        let start = reader.buffer_position() as usize;
        let event = reader.read_event().ok()?;
        let end = reader.buffer_position() as usize;

        let is_anchor = match &event {
            Event::Start(tag) | Event::Empty(tag) => tag.local_name().as_ref() == b"a",
            Event::End(tag) => tag.local_name().as_ref() == b"a",
            Event::Eof => break,
            _ => false,
        };
        if !is_anchor {
            output.push_str(fragment.get(start..end)?);
        }
    }
    Some(output)
}
