//! C4Stack Core Types and Definitions
//!
//! This crate provides the foundational types shared by the C4Stack
//! crates. It includes:
//!
//! - **Levels**: The fixed, ordered C4 abstraction levels ([`level::Level`])
//! - **Records**: Extracted per-level diagrams ([`record::DiagramRecord`]) and
//!   the collection they are gathered into ([`record::DiagramSet`])
//! - **Navigation**: How level transitions are wired into the composite
//!   document ([`navigation::NavigationMode`])
//! - **Colors**: Color handling with CSS color support ([`color::Color`])

pub mod color;
pub mod level;
pub mod navigation;
pub mod record;
