//! deepeq Core - structural equality for tests
//!
//! This crate compares two arbitrary values by content rather than by
//! identity and reports the first point where they diverge:
//! - Introspection model ([`Inspect`]) with std implementations and the
//!   [`inspect_struct!`] macro for user types
//! - Depth-first comparator with cycle detection over shared handles
//! - Failure taxonomy ([`FailureReason`]) and diagnostic paths such as
//!   `WithList.List[2].PublicChildProperty`
//! - Structured logging through the `logging_facility` module
//!
//! # Example
//!
//! ```
//! use deepeq_core::{compare, FailureReason};
//!
//! let err = compare(&Some(1_i32), &None::<i32>).unwrap_err();
//! assert_eq!(err.reason(), FailureReason::SingleValueIsNull);
//! assert_eq!(
//!     err.message(),
//!     "Only one value is null\nValue of obj1: 1\nValue of obj2: null"
//! );
//! ```

pub mod compare;
pub mod errors;
pub mod inspect;
pub mod logging_facility;
pub mod path;

mod macros;
mod message;
mod visited;

pub use deepeq_core_types::schema;
pub use deepeq_core_types::{Sensitive, REDACTED};

#[doc(hidden)]
pub use tracing;

// Re-export commonly used types
pub use compare::{assert_deep_eq, compare, CompareOptions, Comparer, MemberOrder};
pub use errors::{Comparison, FailureReason, Inequality, Result, ValueSnapshot};
pub use inspect::{Inspect, Member, TypeInfo};
