//! C4 abstraction levels.
//!
//! A [`Level`] is one of the four fixed tiers of a C4 model. The ordering is
//! significant: navigation, layer emission, and button placement always
//! proceed from [`Level::Context`] down to [`Level::Code`].

use std::fmt;

use log::trace;

/// One of the four C4 abstraction levels, ordered from most abstract to most
/// detailed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    Context,
    Container,
    Component,
    Code,
}

impl Level {
    /// All levels in navigation order.
    pub const ALL: [Level; 4] = [
        Level::Context,
        Level::Container,
        Level::Component,
        Level::Code,
    ];

    /// Returns the lower-case keyword for this level.
    ///
    /// The keyword is used in element ids (`layer-context`), in the embedded
    /// script data, and for filename classification.
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Context => "context",
            Level::Container => "container",
            Level::Component => "component",
            Level::Code => "code",
        }
    }

    /// Returns the capitalized display name, e.g. `"Context"`.
    pub fn title(self) -> &'static str {
        match self {
            Level::Context => "Context",
            Level::Container => "Container",
            Level::Component => "Component",
            Level::Code => "Code",
        }
    }

    /// Returns the next, more detailed level, or `None` for [`Level::Code`].
    pub fn next(self) -> Option<Level> {
        match self {
            Level::Context => Some(Level::Container),
            Level::Container => Some(Level::Component),
            Level::Component => Some(Level::Code),
            Level::Code => None,
        }
    }

    /// Classifies a file name into a level.
    ///
    /// The name is lower-cased and tested for the level keywords in priority
    /// order (context, container, component, code). The first keyword found
    /// wins; `None` means the file belongs to no level.
    ///
    /// # Examples
    ///
    /// ```
    /// use c4stack_core::level::Level;
    ///
    /// assert_eq!(Level::classify("01-context.svg"), Some(Level::Context));
    /// assert_eq!(Level::classify("CODE_LEVEL.svg"), Some(Level::Code));
    /// assert_eq!(Level::classify("legend.svg"), None);
    /// ```
    pub fn classify(file_name: &str) -> Option<Level> {
        let lower = file_name.to_lowercase();
        let level = Self::ALL
            .into_iter()
            .find(|level| lower.contains(level.as_str()));
        trace!(file_name, level:?; "Classified file name");
        level
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
