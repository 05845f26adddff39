//! Introspection model used by the comparator.
//!
//! A value takes part in structural comparison by implementing [`Inspect`].
//! The trait describes the value's runtime type and exposes one or more of
//! three capabilities:
//!
//! - **scalar**: compared by value (numbers, `bool`, `char`, `String`)
//! - **named members**: accessors and fields, each with a visibility
//! - **elements**: an ordered sequence compared in lock-step
//!
//! Wrappers such as `Option`, `Box`, `Rc`, `RefCell` and
//! [`Sensitive`](crate::Sensitive) are transparent: they
//! [`open`](Inspect::open) onto the value they hold and report its type, so
//! `Box::new(1)`, `Sensitive::new(1)` and `1` all compare equal. Shared handles
//! (`Rc`, `Arc`, their `Weak` counterparts, plain references) also report an
//! [`Identity`] so the comparator can detect cycles.
//!
//! Member and element access is callback based. A value read through a
//! `RefCell` borrow only lives as long as the guard, so it is handed to the
//! visitor instead of being returned.

use std::any::TypeId;
use std::fmt;
use std::ops::Deref;

use crate::errors::Comparison;

mod impls;
mod redact;

/// Visitor receiving an opened value, `None` when the value is absent
pub type ValueVisitor<'v> = dyn FnMut(Option<&dyn Inspect>) -> Comparison + 'v;

/// Visitor receiving the value of one member
pub type MemberVisitor<'v> = dyn FnMut(&dyn Inspect) -> Comparison + 'v;

/// Visitor receiving the element iterator of a sequence
pub type ElementVisitor<'v> =
    dyn for<'e> FnMut(&mut dyn Iterator<Item = Element<'e>>) -> Comparison + 'v;

/// A value that can be compared structurally
pub trait Inspect: AsInspect {
    /// Runtime type of the value
    fn type_info(&self) -> TypeInfo;

    /// Present the value behind any transparent wrapper
    ///
    /// Plain values present themselves. `Option::None` (and other empty
    /// wrappers) present `None`.
    fn open(&self, visit: &mut ValueVisitor<'_>) -> Comparison {
        visit(Some(self.as_inspect()))
    }

    /// Reference identity, for values reached through a shared handle
    fn identity(&self) -> Option<Identity> {
        None
    }

    /// Scalar view, for values compared by value
    fn scalar(&self) -> Option<Scalar<'_>> {
        None
    }

    /// Member table in declaration order
    fn members(&self) -> &'static [Member] {
        &[]
    }

    /// Read one member of [`members`](Inspect::members) and hand it to `visit`
    fn with_member(&self, _member: &Member, _visit: &mut MemberVisitor<'_>) -> Comparison {
        Ok(())
    }

    /// Hand the element iterator to `visit`; `None` when not a sequence
    fn with_elements(&self, _visit: &mut ElementVisitor<'_>) -> Option<Comparison> {
        None
    }

    /// Text used for this value in failure messages
    fn render(&self) -> String {
        match self.scalar() {
            Some(scalar) => scalar.to_string(),
            None => self.type_info().simple_name(),
        }
    }
}

/// Upcast helper so default methods can pass `self` as `&dyn Inspect`
pub trait AsInspect {
    fn as_inspect(&self) -> &dyn Inspect;
}

impl<T: Inspect> AsInspect for T {
    fn as_inspect(&self) -> &dyn Inspect {
        self
    }
}

// ---------------------------------------------------------------------------
// Type information
// ---------------------------------------------------------------------------

/// Runtime type of an inspected value
///
/// Equality is exact type identity.
#[derive(Debug, Clone, Copy)]
pub struct TypeInfo {
    id: TypeId,
    full_name: &'static str,
}

impl TypeInfo {
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            full_name: std::any::type_name::<T>(),
        }
    }

    /// Type reported by an absent value
    pub fn absent() -> Self {
        Self {
            id: TypeId::of::<Absent>(),
            full_name: "null",
        }
    }

    pub fn id(&self) -> TypeId {
        self.id
    }

    /// Fully qualified name, e.g. `alloc::vec::Vec<my_crate::Node>`
    pub fn full_name(&self) -> &'static str {
        self.full_name
    }

    /// Name without module paths, e.g. `Vec<Node>`
    pub fn simple_name(&self) -> String {
        simple_type_name(self.full_name)
    }
}

struct Absent;

impl PartialEq for TypeInfo {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeInfo {}

/// Strip the module path from every path segment of a type name
pub fn simple_type_name(full_name: &str) -> String {
    let mut out = String::with_capacity(full_name.len());
    let mut token_start = 0;
    let mut chars = full_name.chars().peekable();

    while let Some(c) = chars.next() {
        if c == ':' && chars.peek() == Some(&':') {
            chars.next();
            out.truncate(token_start);
            continue;
        }
        out.push(c);
        if !(c.is_alphanumeric() || c == '_') {
            token_start = out.len();
        }
    }

    out
}

// ---------------------------------------------------------------------------
// Identity
// ---------------------------------------------------------------------------

/// Address of a shared allocation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Identity(usize);

impl Identity {
    pub fn of<T: ?Sized>(ptr: *const T) -> Self {
        Self(ptr.cast::<()>() as usize)
    }

    pub fn from_addr(addr: usize) -> Self {
        Self(addr)
    }

    pub fn addr(&self) -> usize {
        self.0
    }
}

// ---------------------------------------------------------------------------
// Scalars
// ---------------------------------------------------------------------------

/// Value view of a scalar
///
/// Integers are widened so one variant covers every width; the runtime
/// type check happens before values are compared.
#[derive(Debug, Clone, Copy)]
pub enum Scalar<'a> {
    Bool(bool),
    Char(char),
    Signed(i128),
    Unsigned(u128),
    F32(f32),
    F64(f64),
    Text(&'a str),
}

impl Scalar<'_> {
    /// Value equality; NaN equals NaN, `0.0` equals `-0.0`
    pub fn same_value(&self, other: &Scalar<'_>) -> bool {
        match (self, other) {
            (Scalar::Bool(a), Scalar::Bool(b)) => a == b,
            (Scalar::Char(a), Scalar::Char(b)) => a == b,
            (Scalar::Signed(a), Scalar::Signed(b)) => a == b,
            (Scalar::Unsigned(a), Scalar::Unsigned(b)) => a == b,
            (Scalar::F32(a), Scalar::F32(b)) => a == b || (a.is_nan() && b.is_nan()),
            (Scalar::F64(a), Scalar::F64(b)) => a == b || (a.is_nan() && b.is_nan()),
            (Scalar::Text(a), Scalar::Text(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for Scalar<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Bool(v) => v.fmt(f),
            Scalar::Char(v) => v.fmt(f),
            Scalar::Signed(v) => v.fmt(f),
            Scalar::Unsigned(v) => v.fmt(f),
            Scalar::F32(v) => v.fmt(f),
            Scalar::F64(v) => v.fmt(f),
            Scalar::Text(v) => f.write_str(v),
        }
    }
}

// ---------------------------------------------------------------------------
// Members
// ---------------------------------------------------------------------------

/// How a member is read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberKind {
    /// Getter method; compared before fields
    Accessor,
    /// Stored field
    Field,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Public,
    /// Never read by the comparator
    Private,
}

/// Entry of a member table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Member {
    name: &'static str,
    kind: MemberKind,
    visibility: Visibility,
    backs: Option<&'static str>,
}

impl Member {
    pub const fn new(name: &'static str, kind: MemberKind, visibility: Visibility) -> Self {
        Self {
            name,
            kind,
            visibility,
            backs: None,
        }
    }

    /// Public accessor
    pub const fn accessor(name: &'static str) -> Self {
        Self::new(name, MemberKind::Accessor, Visibility::Public)
    }

    /// Public field
    pub const fn field(name: &'static str) -> Self {
        Self::new(name, MemberKind::Field, Visibility::Public)
    }

    pub const fn private(self) -> Self {
        Self {
            visibility: Visibility::Private,
            ..self
        }
    }

    /// Mark this field as the backing store of the named accessor
    pub const fn backing(self, accessor: &'static str) -> Self {
        Self {
            backs: Some(accessor),
            ..self
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn kind(&self) -> MemberKind {
        self.kind
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn is_public(&self) -> bool {
        self.visibility == Visibility::Public
    }

    /// Accessor this field backs, if any
    pub fn backs(&self) -> Option<&'static str> {
        self.backs
    }
}

// ---------------------------------------------------------------------------
// Elements
// ---------------------------------------------------------------------------

/// Element yielded by a sequence
///
/// Most sequences lend their elements; some build a view per element
/// (map entries, redacted values) and hand over ownership of it.
pub enum Element<'a> {
    Borrowed(&'a dyn Inspect),
    Owned(Box<dyn Inspect + 'a>),
}

impl<'a> Deref for Element<'a> {
    type Target = dyn Inspect + 'a;

    fn deref(&self) -> &Self::Target {
        match self {
            Element::Borrowed(value) => *value,
            Element::Owned(value) => &**value,
        }
    }
}

impl fmt::Debug for Element<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Element").field(&self.render()).finish()
    }
}
