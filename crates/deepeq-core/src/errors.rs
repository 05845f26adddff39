use serde::Serialize;
use thiserror::Error;

use crate::inspect::Inspect;
use crate::message;
use crate::path::Path;

/// Outcome of comparing two values (or any sub-step of a comparison)
pub type Comparison = std::result::Result<(), Inequality>;

/// Result type alias using Inequality
pub type Result<T> = std::result::Result<T, Inequality>;

// ========== Failure Taxonomy ==========

/// Closed set of reasons a structural comparison can fail
///
/// Every failure produced by the comparator carries exactly one of these.
/// Each reason maps to a stable code for programmatic handling and to the
/// canonical description that prefixes the rendered message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FailureReason {
    /// Exactly one of the two values is absent
    SingleValueIsNull,
    /// The two values have different runtime types
    TypeMismatch,
    /// Two scalars of the same type hold different values
    ValueInequality,
    /// Two sequences yield a different number of elements
    CountMismatch,
    /// An already-visited value is paired with a different partner than before
    CircularReferenceInequality,
}

impl FailureReason {
    /// Get the stable error code for this reason
    pub fn code(&self) -> &'static str {
        match self {
            FailureReason::SingleValueIsNull => "ERR_SINGLE_VALUE_IS_NULL",
            FailureReason::TypeMismatch => "ERR_TYPE_MISMATCH",
            FailureReason::ValueInequality => "ERR_VALUE_INEQUALITY",
            FailureReason::CountMismatch => "ERR_COUNT_MISMATCH",
            FailureReason::CircularReferenceInequality => "ERR_CIRCULAR_REFERENCE_INEQUALITY",
        }
    }

    /// Get the canonical description used as the message prefix
    pub fn description(&self) -> &'static str {
        match self {
            FailureReason::SingleValueIsNull => "Only one value is null",
            FailureReason::TypeMismatch => "Type Mismatch",
            FailureReason::ValueInequality => "Values are not equal",
            FailureReason::CountMismatch => "Counts are not equal",
            FailureReason::CircularReferenceInequality => {
                "Circular Reference to a checked object found to differ from compared reference."
            }
        }
    }
}

impl std::fmt::Display for FailureReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.description())
    }
}

// ========== Inequality ==========

/// Snapshot of one side of a divergence
///
/// Values reached through borrow guards cannot outlive the traversal, so the
/// failure keeps the type name and rendered text captured at the point of
/// divergence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValueSnapshot {
    type_name: String,
    rendered: String,
}

impl ValueSnapshot {
    pub(crate) fn capture(value: &dyn Inspect) -> Self {
        Self {
            type_name: value.type_info().simple_name(),
            rendered: value.render(),
        }
    }

    /// Simple type name of the value
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Rendered value as it appears in the failure message
    pub fn rendered(&self) -> &str {
        &self.rendered
    }
}

/// The first divergence found between two values
///
/// Carries the failure reason, both sides at the point of divergence
/// (`None` for an absent value), the path from the comparison root when
/// one exists, and the fully formatted message.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[error("{message}")]
pub struct Inequality {
    reason: FailureReason,
    first: Option<ValueSnapshot>,
    second: Option<ValueSnapshot>,
    path: Option<String>,
    message: String,
}

impl Inequality {
    pub(crate) fn single_value_is_null(
        first: Option<&dyn Inspect>,
        second: Option<&dyn Inspect>,
        path: Option<&Path<'_>>,
    ) -> Self {
        let first = first.map(ValueSnapshot::capture);
        let second = second.map(ValueSnapshot::capture);
        let path = path.map(ToString::to_string);
        let message = message::null_inequality(
            first.as_ref().map(ValueSnapshot::rendered),
            second.as_ref().map(ValueSnapshot::rendered),
            path.as_deref(),
        );
        Self {
            reason: FailureReason::SingleValueIsNull,
            first,
            second,
            path,
            message,
        }
    }

    pub(crate) fn type_mismatch(
        first: &dyn Inspect,
        second: &dyn Inspect,
        path: Option<&Path<'_>>,
    ) -> Self {
        let first = ValueSnapshot::capture(first);
        let second = ValueSnapshot::capture(second);
        let path = path.map(ToString::to_string);
        let message =
            message::type_inequality(first.type_name(), second.type_name(), path.as_deref());
        Self {
            reason: FailureReason::TypeMismatch,
            first: Some(first),
            second: Some(second),
            path,
            message,
        }
    }

    pub(crate) fn value_inequality(
        first: &dyn Inspect,
        second: &dyn Inspect,
        path: Option<&Path<'_>>,
    ) -> Self {
        let first = ValueSnapshot::capture(first);
        let second = ValueSnapshot::capture(second);
        let path = path.map(ToString::to_string);
        let message =
            message::value_inequality(first.rendered(), second.rendered(), path.as_deref());
        Self {
            reason: FailureReason::ValueInequality,
            first: Some(first),
            second: Some(second),
            path,
            message,
        }
    }

    pub(crate) fn count_mismatch(first: &dyn Inspect, second: &dyn Inspect, path: &Path<'_>) -> Self {
        let path = path.to_string();
        let message = message::count_mismatch(&path);
        Self {
            reason: FailureReason::CountMismatch,
            first: Some(ValueSnapshot::capture(first)),
            second: Some(ValueSnapshot::capture(second)),
            path: Some(path),
            message,
        }
    }

    pub(crate) fn circular_reference(
        first: &dyn Inspect,
        second: &dyn Inspect,
        path: &Path<'_>,
    ) -> Self {
        let first = ValueSnapshot::capture(first);
        let second = ValueSnapshot::capture(second);
        let path = path.to_string();
        let message = message::circular_reference_inequality(first.rendered(), second.rendered(), &path);
        Self {
            reason: FailureReason::CircularReferenceInequality,
            first: Some(first),
            second: Some(second),
            path: Some(path),
            message,
        }
    }

    /// Get the failure reason
    pub fn reason(&self) -> FailureReason {
        self.reason
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.reason.code()
    }

    /// First value at the point of divergence, `None` if it was absent
    pub fn first(&self) -> Option<&ValueSnapshot> {
        self.first.as_ref()
    }

    /// Second value at the point of divergence, `None` if it was absent
    pub fn second(&self) -> Option<&ValueSnapshot> {
        self.second.as_ref()
    }

    /// Rendered path from the comparison root, if the divergence has one
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// Get the fully formatted message
    pub fn message(&self) -> &str {
        &self.message
    }
}
