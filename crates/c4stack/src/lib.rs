//! C4Stack - Stack per-level C4 architecture diagrams into one interactive SVG.
//!
//! Given a directory of independently rendered diagrams, one per C4 level
//! (context, container, component, code), this crate ingests each into a
//! [`DiagramRecord`](record::DiagramRecord) and composes them into a single
//! document that switches between levels, rescales to the viewport, and
//! highlights interactive elements.

pub mod config;
pub mod export;

mod error;
mod ingest;

pub use c4stack_core::{color, level, navigation, record};

pub use error::StackError;

use std::path::Path;

use log::{debug, info};

use config::AppConfig;
use export::{Exporter, svg::SvgComposer};
use level::Level;
use record::{DiagramRecord, DiagramSet};

/// Builder for ingesting and composing stacked diagrams.
///
/// # Examples
///
/// ```rust,no_run
/// use std::path::Path;
///
/// use c4stack::{StackBuilder, config::AppConfig};
///
/// let builder = StackBuilder::new(AppConfig::default());
///
/// // Load every classifiable diagram in a directory
/// let diagrams = builder.load_directory(Path::new("docs/diagrams"))
///     .expect("Failed to load diagrams");
///
/// // Compose them into one document
/// let svg = builder.render_svg(&diagrams)
///     .expect("Failed to render");
/// ```
#[derive(Default)]
pub struct StackBuilder {
    config: AppConfig,
}

impl StackBuilder {
    /// Create a new stack builder with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Title, navigation, canvas, and style settings
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration this builder was created with.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Parse one diagram document as the diagram for `level`.
    ///
    /// # Errors
    ///
    /// Returns `StackError::Parse` if the document is not well formed or has
    /// no usable `<svg>` root.
    ///
    /// # Examples
    ///
    /// ```
    /// use c4stack::{StackBuilder, level::Level};
    ///
    /// let builder = StackBuilder::default();
    /// let record = builder
    ///     .parse(r#"<svg width="640px"><rect/></svg>"#, Level::Context)
    ///     .expect("Failed to parse diagram");
    /// assert_eq!(record.width(), 640.0);
    /// ```
    pub fn parse(&self, source: &str, level: Level) -> Result<DiagramRecord, StackError> {
        debug!(level:?; "Parsing diagram");

        c4stack_parser::parse(source, level, self.config.navigation().mode())
            .map_err(|err| StackError::new_parse_error(err, source, None))
    }

    /// Load every classifiable `*.svg` file in `dir`.
    ///
    /// # Errors
    ///
    /// Returns `StackError::Io` if the directory or a file cannot be read,
    /// `StackError::Parse` for the first file that is not well formed or
    /// fails to parse, and
    /// `StackError::NoDiagrams` if no file matched a level.
    pub fn load_directory(&self, dir: &Path) -> Result<DiagramSet, StackError> {
        ingest::load_directory(dir, self.config.navigation().mode())
    }

    /// Compose a set of diagrams into one SVG document.
    ///
    /// # Errors
    ///
    /// Returns `StackError::EmptySet` for an empty set and
    /// `StackError::Config` if the configuration is invalid.
    pub fn render_svg(&self, diagrams: &DiagramSet) -> Result<String, StackError> {
        if diagrams.is_empty() {
            return Err(StackError::EmptySet);
        }

        info!(levels = diagrams.len(), title = self.config.title(); "Rendering stacked SVG");
        let composer = SvgComposer::new(&self.config)?;
        Ok(composer.export(diagrams))
    }
}
