//! Core types shared across deepeq facilities
//!
//! This crate provides foundational types used by the comparator and its
//! logging facility:
//!
//! - **Schema constants**: Canonical field keys, operation and event names
//! - **Sensitive data**: `Sensitive<T>` marker, compared structurally but
//!   redacted in failure messages

pub mod schema;
pub mod sensitive;

pub use sensitive::{Sensitive, REDACTED};
