//! Diagnostic path from the comparison root to the value under test.
//!
//! A [`Path`] is a parent-linked chain living on the recursion stack.
//! Descending creates a child that borrows its parent, so sibling branches
//! never observe each other's segments and nothing is copied per step.

use std::fmt;

/// One step of a path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'p> {
    /// Simple type name of the root value
    Root(&'p str),
    /// Named member, rendered as `.name`
    Member(&'p str),
    /// Sequence position, rendered as `[index]`
    Index(usize),
}

/// Breadcrumb such as `Root.Items[2].Name`
#[derive(Debug, Clone, Copy)]
pub struct Path<'p> {
    parent: Option<&'p Path<'p>>,
    segment: Segment<'p>,
}

impl<'p> Path<'p> {
    /// Start a path at a root type name
    pub fn root(type_name: &'p str) -> Self {
        Self {
            parent: None,
            segment: Segment::Root(type_name),
        }
    }

    /// Extend with a member name
    pub fn member<'c>(&'c self, name: &'c str) -> Path<'c> {
        Path {
            parent: Some(self),
            segment: Segment::Member(name),
        }
    }

    /// Extend with a sequence index
    pub fn index(&self, index: usize) -> Path<'_> {
        Path {
            parent: Some(self),
            segment: Segment::Index(index),
        }
    }
}

impl fmt::Display for Path<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(parent) = self.parent {
            parent.fmt(f)?;
        }
        match self.segment {
            Segment::Root(name) => f.write_str(name),
            Segment::Member(name) => write!(f, ".{name}"),
            Segment::Index(index) => write!(f, "[{index}]"),
        }
    }
}
