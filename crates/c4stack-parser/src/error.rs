//! Error and diagnostic system for diagram ingestion.
//!
//! This module provides an error handling system with:
//! - Error codes for documentation and searchability
//! - Multiple labeled spans for rich error context
//! - Help text pointing at the likely fix
//!
//! # Overview
//!
//! The error system is built around the [`Diagnostic`] type, which represents
//! a single error with optional error code, source locations, and help text.
//! Diagnostics are wrapped in [`ParseError`] when returned from [`crate::parse`].
//!
//! # Example
//!
//! ```
//! # use c4stack_parser::error::{Diagnostic, ErrorCode};
//! # use c4stack_parser::Span;
//!
//! let diag = Diagnostic::error("end tag `</g>` does not match `<text>`")
//!     .with_code(ErrorCode::E002)
//!     .with_label(Span::new(40..44), "unexpected end tag")
//!     .with_secondary_label(Span::new(10..16), "`<text>` opened here")
//!     .with_help("close `<text>` before closing its parent");
//! ```

mod diagnostic;
mod error_code;
mod label;
mod parse_error;

pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
pub use label::Label;
pub use parse_error::ParseError;
