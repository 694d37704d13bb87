//! Export functionality for stacked diagrams.
//!
//! This module provides the [`Exporter`] trait that defines the interface for
//! folding a [`DiagramSet`] into one output document. It is the final stage in
//! the C4Stack processing pipeline.
//!
//! # Pipeline Position
//!
//! ```text
//! Diagram Directory
//!     ↓ classify, check, extract, clean, format
//! DiagramSet
//!     ↓ export (this module)
//! Composite Document
//! ```
//!
//! # Available Backends
//!
//! - [`svg`] — interactive SVG output via [`svg::SvgComposer`]

/// SVG export backend.
pub mod svg;

use c4stack_core::record::DiagramSet;

/// Abstraction for composite document backends.
pub trait Exporter {
    /// Folds every record of `diagrams` into one document.
    ///
    /// Exporting is deterministic: the same set always produces the same
    /// bytes.
    fn export(&self, diagrams: &DiagramSet) -> String;
}
