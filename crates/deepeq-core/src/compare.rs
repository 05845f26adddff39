//! Structural comparator.
//!
//! The entry point is [`compare`] (or [`Comparer::compare`] when options are
//! needed). A comparison walks both values depth-first and stops at the first
//! divergence. Every step runs the same checks in a fixed order:
//!
//! 1. both absent: equal
//! 2. one absent: [`FailureReason::SingleValueIsNull`]
//! 3. runtime types differ: [`FailureReason::TypeMismatch`]
//! 4. scalars: value equality or [`FailureReason::ValueInequality`]
//! 5. composites: cycle check, then elements in lock-step, then members
//!
//! [`FailureReason::SingleValueIsNull`]: crate::errors::FailureReason::SingleValueIsNull
//! [`FailureReason::TypeMismatch`]: crate::errors::FailureReason::TypeMismatch
//! [`FailureReason::ValueInequality`]: crate::errors::FailureReason::ValueInequality

use std::time::Instant;

use serde::Serialize;

use crate::errors::{Comparison, Inequality};
use crate::inspect::{Element, Identity, Inspect, Member, MemberKind};
use crate::path::Path;
use crate::schema::OP_COMPARE;
use crate::visited::{Pairing, Visited};
use crate::{log_op_end, log_op_error, log_op_start};

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Order in which the members of a composite are compared
///
/// Accessors always come before fields; the order applies within each group.
/// It only changes which divergence is reported first, never whether two
/// values are equal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum MemberOrder {
    /// Order of the member table
    #[default]
    Declaration,
    /// Sorted by member name
    Alphabetical,
}

/// Options consumed by [`Comparer`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompareOptions {
    pub member_order: MemberOrder,
    /// Free-form label attached to the comparison's log events
    pub label: Option<String>,
}

// ---------------------------------------------------------------------------
// Entry points
// ---------------------------------------------------------------------------

/// Configurable structural comparator
///
/// # Example
///
/// ```
/// use deepeq_core::{Comparer, MemberOrder};
///
/// let comparer = Comparer::new()
///     .with_member_order(MemberOrder::Alphabetical)
///     .with_label("orders");
///
/// assert!(comparer.compare(&vec![1, 2], &vec![1, 2]).is_ok());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Comparer {
    options: CompareOptions,
}

impl Comparer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: CompareOptions) -> Self {
        Self { options }
    }

    pub fn with_member_order(mut self, order: MemberOrder) -> Self {
        self.options.member_order = order;
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.options.label = Some(label.into());
        self
    }

    pub fn options(&self) -> &CompareOptions {
        &self.options
    }

    /// Compare two values structurally
    ///
    /// # Errors
    ///
    /// Returns the first [`Inequality`] found between `first` and `second`.
    pub fn compare(&self, first: &dyn Inspect, second: &dyn Inspect) -> Comparison {
        let start = Instant::now();
        let label = self.options.label.as_deref().unwrap_or_default();
        log_op_start!(
            OP_COMPARE,
            label = label,
            member_order = ?self.options.member_order
        );

        let mut walker = Walker::new(self.options.member_order);
        let result = walker.walk(first, second, None);
        let duration_ms = start.elapsed().as_millis() as u64;

        match &result {
            Ok(()) => log_op_end!(
                OP_COMPARE,
                duration_ms = duration_ms,
                label = label,
                visited = walker.visited.len()
            ),
            Err(err) => log_op_error!(
                OP_COMPARE,
                err,
                duration_ms = duration_ms,
                label = label,
                visited = walker.visited.len()
            ),
        }

        result
    }
}

/// Compare two values structurally with default options
///
/// # Errors
///
/// Returns the first [`Inequality`] found between `first` and `second`.
///
/// # Example
///
/// ```
/// use deepeq_core::{compare, FailureReason};
///
/// assert!(compare(&vec![1, 2, 3], &vec![1, 2, 3]).is_ok());
///
/// let err = compare(&vec![1, 2, 3, 4], &vec![1, 2, 3]).unwrap_err();
/// assert_eq!(err.reason(), FailureReason::CountMismatch);
/// assert_eq!(err.path(), Some("Vec<i32>"));
/// ```
pub fn compare(first: &dyn Inspect, second: &dyn Inspect) -> Comparison {
    Comparer::new().compare(first, second)
}

/// Panic with the inequality message unless the two values are equal
///
/// # Panics
///
/// Panics when [`compare`] reports an inequality.
#[track_caller]
pub fn assert_deep_eq(first: &dyn Inspect, second: &dyn Inspect) {
    if let Err(err) = compare(first, second) {
        panic!("{err}");
    }
}

// ---------------------------------------------------------------------------
// Traversal
// ---------------------------------------------------------------------------

/// State of one top-level comparison
struct Walker {
    order: MemberOrder,
    visited: Visited,
}

impl Walker {
    fn new(order: MemberOrder) -> Self {
        Self {
            order,
            visited: Visited::new(),
        }
    }

    /// Compare two values as reached, before their wrappers are opened
    fn walk(
        &mut self,
        first: &dyn Inspect,
        second: &dyn Inspect,
        path: Option<&Path<'_>>,
    ) -> Comparison {
        let identities = (first.identity(), second.identity());
        first.open(&mut |first| {
            second.open(&mut |second| self.step(first, second, identities, path))
        })
    }

    fn step(
        &mut self,
        first: Option<&dyn Inspect>,
        second: Option<&dyn Inspect>,
        identities: (Option<Identity>, Option<Identity>),
        path: Option<&Path<'_>>,
    ) -> Comparison {
        let (first, second) = match (first, second) {
            (None, None) => return Ok(()),
            (Some(first), Some(second)) => (first, second),
            (first, second) => return Err(Inequality::single_value_is_null(first, second, path)),
        };

        if first.type_info() != second.type_info() {
            return Err(Inequality::type_mismatch(first, second, path));
        }

        if let Some(value) = first.scalar() {
            return match second.scalar() {
                Some(other) if value.same_value(&other) => Ok(()),
                _ => Err(Inequality::value_inequality(first, second, path)),
            };
        }

        let root_name;
        let root;
        let path = match path {
            Some(path) => path,
            None => {
                root_name = first.type_info().simple_name();
                root = Path::root(&root_name);
                &root
            }
        };

        if let (Some(first_id), second_id) = identities {
            match self.visited.pair(first.type_info().id(), first_id, second_id) {
                Pairing::Fresh => {}
                Pairing::Consistent => {
                    tracing::debug!(path = %path, "cycle closed on an already paired value");
                    return Ok(());
                }
                Pairing::Conflict => {
                    return Err(Inequality::circular_reference(first, second, path));
                }
            }
        }

        tracing::trace!(path = %path, "descending into composite");

        if let Some(result) = first.with_elements(&mut |left| {
            second
                .with_elements(&mut |right| self.walk_sequence(first, second, left, right, path))
                .unwrap_or(Ok(()))
        }) {
            result?;
        }

        for member in comparable_members(first.members(), self.order) {
            let child = path.member(member.name());
            first.with_member(member, &mut |left| {
                second.with_member(member, &mut |right| self.walk(left, right, Some(&child)))
            })?;
        }

        Ok(())
    }

    fn walk_sequence<'l, 'r>(
        &mut self,
        first: &dyn Inspect,
        second: &dyn Inspect,
        left: &mut (dyn Iterator<Item = Element<'l>> + '_),
        right: &mut (dyn Iterator<Item = Element<'r>> + '_),
        path: &Path<'_>,
    ) -> Comparison {
        let mut index = 0;
        loop {
            match (left.next(), right.next()) {
                (None, None) => return Ok(()),
                (Some(a), Some(b)) => {
                    let child = path.index(index);
                    self.walk(&*a, &*b, Some(&child))?;
                }
                _ => {
                    tracing::trace!(path = %path, index, "sequence exhausted on one side");
                    return Err(Inequality::count_mismatch(first, second, path));
                }
            }
            index += 1;
        }
    }
}

/// Members compared for a type: public accessors, then public fields that
/// do not back a declared accessor
fn comparable_members(members: &'static [Member], order: MemberOrder) -> Vec<&'static Member> {
    let declares_accessor = |name: &str| {
        members
            .iter()
            .any(|member| member.kind() == MemberKind::Accessor && member.name() == name)
    };

    let mut accessors: Vec<&'static Member> = members
        .iter()
        .filter(|member| member.is_public() && member.kind() == MemberKind::Accessor)
        .collect();
    let mut fields: Vec<&'static Member> = members
        .iter()
        .filter(|member| member.is_public() && member.kind() == MemberKind::Field)
        .filter(|member| {
            !member
                .backs()
                .is_some_and(|accessor| declares_accessor(accessor))
        })
        .collect();

    if order == MemberOrder::Alphabetical {
        accessors.sort_by_key(|member| member.name());
        fields.sort_by_key(|member| member.name());
    }

    accessors.extend(fields);
    accessors
}
