//! Error types for C4Stack operations.
//!
//! This module provides the main error type [`StackError`] which wraps
//! the error conditions that can occur while ingesting and composing
//! diagrams.

use std::{io, path::PathBuf};

use thiserror::Error;

use c4stack_parser::error::ParseError;

/// The main error type for C4Stack operations.
///
/// # Diagnostic Variants
///
/// The `Parse` variant carries the structured diagnostics of the rejected
/// document together with its source text and, when it came from disk, its
/// path. This is enough to render the diagnostic against the original source.
#[derive(Debug, Error)]
pub enum StackError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Parse {
        err: ParseError,
        src: String,
        path: Option<PathBuf>,
    },

    #[error("no C4 diagrams found in `{}`", .0.display())]
    NoDiagrams(PathBuf),

    #[error("no diagrams to compose: the diagram set is empty")]
    EmptySet,

    #[error("Configuration error: {0}")]
    Config(String),
}

impl StackError {
    /// Create a new `Parse` error with the associated source code.
    pub fn new_parse_error(err: ParseError, src: impl Into<String>, path: Option<PathBuf>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
            path,
        }
    }
}
