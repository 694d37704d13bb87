//! Error codes for the ingestion diagnostic system.
//!
//! Error codes are organized by phase:
//! - `E0xx` - Well-formedness errors
//! - `E1xx` - Diagram structure errors

use std::fmt;

/// Error codes for categorizing diagnostic errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // Well-formedness Errors (E0xx)
    // =========================================================================
    /// Malformed markup.
    ///
    /// The tokenizer could not read a tag, comment, CDATA section, or
    /// declaration.
    E001,

    /// Mismatched end tag.
    ///
    /// An end tag does not close the innermost open element, or there is no
    /// open element to close.
    E002,

    /// Unclosed element.
    ///
    /// The input ended while an element was still open.
    E003,

    /// Malformed attribute.
    ///
    /// An attribute has no value, is duplicated, or is not properly quoted.
    E004,

    /// Invalid character or entity reference.
    ///
    /// Text or an attribute value contains an unknown entity or an invalid
    /// character reference.
    E005,

    // =========================================================================
    // Diagram Structure Errors (E1xx)
    // =========================================================================
    /// Missing root element.
    ///
    /// The document has no `<svg>` root element.
    E100,

    /// Unterminated root tag.
    ///
    /// The opening `<svg` tag is never closed with `>`.
    E101,

    /// Missing closing root tag.
    ///
    /// No `</svg>` closes the root element.
    E102,

    /// Empty diagram.
    ///
    /// The root element has no content between its opening and closing tags.
    E103,

    /// Content after the root element.
    ///
    /// Another element follows the root element, so the document is not a
    /// single diagram.
    E104,
}

impl ErrorCode {
    /// Returns the numeric code as a string (e.g., "E001").
    pub fn as_str(&self) -> &'static str {
        match self {
            // Well-formedness errors
            ErrorCode::E001 => "E001",
            ErrorCode::E002 => "E002",
            ErrorCode::E003 => "E003",
            ErrorCode::E004 => "E004",
            ErrorCode::E005 => "E005",
            // Diagram structure errors
            ErrorCode::E100 => "E100",
            ErrorCode::E101 => "E101",
            ErrorCode::E102 => "E102",
            ErrorCode::E103 => "E103",
            ErrorCode::E104 => "E104",
        }
    }

    /// Returns a short description of what this error code means.
    pub fn description(&self) -> &'static str {
        match self {
            // Well-formedness errors
            ErrorCode::E001 => "malformed markup",
            ErrorCode::E002 => "mismatched end tag",
            ErrorCode::E003 => "unclosed element",
            ErrorCode::E004 => "malformed attribute",
            ErrorCode::E005 => "invalid character or entity reference",
            // Diagram structure errors
            ErrorCode::E100 => "missing root element",
            ErrorCode::E101 => "unterminated root tag",
            ErrorCode::E102 => "missing closing root tag",
            ErrorCode::E103 => "empty diagram",
            ErrorCode::E104 => "content after root element",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
