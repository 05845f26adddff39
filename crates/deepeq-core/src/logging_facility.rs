//! Structured logging facility for the comparator
//!
//! This module provides:
//! - Single initialization point via `init(profile)`
//! - Structured logging macros (`log_op_start!`, `log_op_end!`, `log_op_error!`)
//! - Test capture mode for deterministic assertions on emitted events
//!
//! # Usage
//!
//! ```rust
//! use deepeq_core::logging_facility::{init, Profile};
//!
//! // Initialize once at test-suite startup
//! init(Profile::Development);
//! ```
//!
//! # Events
//!
//! Every comparison emits one `start` event and exactly one of `end` or
//! `end_error`, all with `op = "compare"`. Traversal adds `trace` events per
//! composite and a `debug` event whenever a cycle closes on an already
//! paired value.

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
