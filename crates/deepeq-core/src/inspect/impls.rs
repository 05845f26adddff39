//! `Inspect` for standard library types.
//!
//! Hash-ordered collections are left out: their iteration order differs
//! between instances, so a lock-step walk would report spurious mismatches.
//! Lock-based wrappers (`Mutex`, `RwLock`) are left out too: a cyclic graph
//! would re-lock a value the walk is already holding.

use std::cell::{Cell, OnceCell, RefCell};
use std::collections::{BTreeMap, BTreeSet, VecDeque};
use std::rc::{self, Rc};
use std::sync::{self, Arc, OnceLock};

use super::{
    Element, ElementVisitor, Identity, Inspect, Member, MemberVisitor, Scalar, TypeInfo,
    ValueVisitor,
};
use crate::errors::Comparison;

const NULL: &str = "null";

// ---------------------------------------------------------------------------
// Scalars
// ---------------------------------------------------------------------------

macro_rules! inspect_integers {
    ($variant:ident, $wide:ty; $($ty:ty),* $(,)?) => {
        $(
            impl Inspect for $ty {
                fn type_info(&self) -> TypeInfo {
                    TypeInfo::of::<Self>()
                }

                fn scalar(&self) -> Option<Scalar<'_>> {
                    Some(Scalar::$variant(*self as $wide))
                }
            }
        )*
    };
}

inspect_integers!(Signed, i128; i8, i16, i32, i64, i128, isize);
inspect_integers!(Unsigned, u128; u8, u16, u32, u64, u128, usize);

macro_rules! inspect_primitives {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl Inspect for $ty {
                fn type_info(&self) -> TypeInfo {
                    TypeInfo::of::<Self>()
                }

                fn scalar(&self) -> Option<Scalar<'_>> {
                    Some(Scalar::$variant(*self))
                }
            }
        )*
    };
}

inspect_primitives!(bool => Bool, char => Char, f32 => F32, f64 => F64);

impl Inspect for String {
    fn type_info(&self) -> TypeInfo {
        TypeInfo::of::<Self>()
    }

    fn scalar(&self) -> Option<Scalar<'_>> {
        Some(Scalar::Text(self.as_str()))
    }
}

/// Composite without members; any two units are equal
impl Inspect for () {
    fn type_info(&self) -> TypeInfo {
        TypeInfo::of::<Self>()
    }
}

// ---------------------------------------------------------------------------
// Sequences
// ---------------------------------------------------------------------------

macro_rules! inspect_sequence {
    ($($seq:ident),* $(,)?) => {
        $(
            impl<T: Inspect + 'static> Inspect for $seq<T> {
                fn type_info(&self) -> TypeInfo {
                    TypeInfo::of::<Self>()
                }

                fn with_elements(&self, visit: &mut ElementVisitor<'_>) -> Option<Comparison> {
                    Some(visit(&mut self.iter().map(|item| Element::Borrowed(item))))
                }
            }
        )*
    };
}

inspect_sequence!(Vec, VecDeque, BTreeSet);

impl<T: Inspect + 'static, const N: usize> Inspect for [T; N] {
    fn type_info(&self) -> TypeInfo {
        TypeInfo::of::<Self>()
    }

    fn with_elements(&self, visit: &mut ElementVisitor<'_>) -> Option<Comparison> {
        Some(visit(&mut self.iter().map(|item| Element::Borrowed(item))))
    }
}

/// Entry of a map, compared through its `Key` and `Value` accessors
struct MapEntry<'a, K, V> {
    key: &'a K,
    value: &'a V,
}

static MAP_ENTRY_MEMBERS: [Member; 2] = [Member::accessor("Key"), Member::accessor("Value")];

impl<K: Inspect + 'static, V: Inspect + 'static> Inspect for MapEntry<'_, K, V> {
    fn type_info(&self) -> TypeInfo {
        TypeInfo::of::<MapEntry<'static, K, V>>()
    }

    fn members(&self) -> &'static [Member] {
        &MAP_ENTRY_MEMBERS
    }

    fn with_member(&self, member: &Member, visit: &mut MemberVisitor<'_>) -> Comparison {
        match member.name() {
            "Key" => visit(self.key),
            "Value" => visit(self.value),
            _ => Ok(()),
        }
    }
}

impl<K: Inspect + 'static, V: Inspect + 'static> Inspect for BTreeMap<K, V> {
    fn type_info(&self) -> TypeInfo {
        TypeInfo::of::<Self>()
    }

    fn with_elements(&self, visit: &mut ElementVisitor<'_>) -> Option<Comparison> {
        Some(visit(&mut self.iter().map(|(key, value)| {
            Element::Owned(Box::new(MapEntry { key, value }))
        })))
    }
}

// ---------------------------------------------------------------------------
// Transparent wrappers
// ---------------------------------------------------------------------------

macro_rules! delegate_inspect {
    (|$this:ident| $inner:expr) => {
        fn type_info(&self) -> TypeInfo {
            let $this = self;
            $inner.type_info()
        }

        fn open(&self, visit: &mut ValueVisitor<'_>) -> Comparison {
            let $this = self;
            $inner.open(visit)
        }

        fn render(&self) -> String {
            let $this = self;
            $inner.render()
        }
    };
}

/// A reference to an owned value identifies the value by its address
impl<T: Inspect + ?Sized> Inspect for &T {
    delegate_inspect!(|this| (**this));

    fn identity(&self) -> Option<Identity> {
        (**self)
            .identity()
            .or_else(|| Some(Identity::of(*self as *const T)))
    }
}

impl<T: Inspect + ?Sized> Inspect for Box<T> {
    delegate_inspect!(|this| (**this));

    fn identity(&self) -> Option<Identity> {
        (**self).identity()
    }
}

impl<T: Inspect + ?Sized> Inspect for Rc<T> {
    delegate_inspect!(|this| (**this));

    fn identity(&self) -> Option<Identity> {
        Some(Identity::of(Rc::as_ptr(self)))
    }
}

impl<T: Inspect + ?Sized> Inspect for Arc<T> {
    delegate_inspect!(|this| (**this));

    fn identity(&self) -> Option<Identity> {
        Some(Identity::of(Arc::as_ptr(self)))
    }
}

impl<T: Inspect> Inspect for RefCell<T> {
    fn type_info(&self) -> TypeInfo {
        self.borrow().type_info()
    }

    fn open(&self, visit: &mut ValueVisitor<'_>) -> Comparison {
        self.borrow().open(visit)
    }

    fn identity(&self) -> Option<Identity> {
        self.borrow().identity()
    }

    fn render(&self) -> String {
        self.borrow().render()
    }
}

impl<T: Inspect + Copy> Inspect for Cell<T> {
    fn type_info(&self) -> TypeInfo {
        self.get().type_info()
    }

    fn open(&self, visit: &mut ValueVisitor<'_>) -> Comparison {
        let value = self.get();
        value.open(visit)
    }

    fn identity(&self) -> Option<Identity> {
        self.get().identity()
    }

    fn render(&self) -> String {
        self.get().render()
    }
}

/// Shared implementation for the optional wrappers
fn open_optional<T: Inspect + ?Sized>(value: Option<&T>, visit: &mut ValueVisitor<'_>) -> Comparison {
    match value {
        Some(value) => value.open(visit),
        None => visit(None),
    }
}

fn type_info_optional<T: Inspect + ?Sized>(value: Option<&T>) -> TypeInfo {
    value.map_or_else(TypeInfo::absent, |value| value.type_info())
}

fn render_optional<T: Inspect + ?Sized>(value: Option<&T>) -> String {
    value.map_or_else(|| NULL.to_string(), |value| value.render())
}

impl<T: Inspect> Inspect for Option<T> {
    fn type_info(&self) -> TypeInfo {
        type_info_optional(self.as_ref())
    }

    fn open(&self, visit: &mut ValueVisitor<'_>) -> Comparison {
        open_optional(self.as_ref(), visit)
    }

    fn identity(&self) -> Option<Identity> {
        self.as_ref().and_then(|value| value.identity())
    }

    fn render(&self) -> String {
        render_optional(self.as_ref())
    }
}

impl<T: Inspect> Inspect for OnceCell<T> {
    fn type_info(&self) -> TypeInfo {
        type_info_optional(self.get())
    }

    fn open(&self, visit: &mut ValueVisitor<'_>) -> Comparison {
        open_optional(self.get(), visit)
    }

    fn identity(&self) -> Option<Identity> {
        self.get().and_then(|value| value.identity())
    }

    fn render(&self) -> String {
        render_optional(self.get())
    }
}

impl<T: Inspect> Inspect for OnceLock<T> {
    fn type_info(&self) -> TypeInfo {
        type_info_optional(self.get())
    }

    fn open(&self, visit: &mut ValueVisitor<'_>) -> Comparison {
        open_optional(self.get(), visit)
    }

    fn identity(&self) -> Option<Identity> {
        self.get().and_then(|value| value.identity())
    }

    fn render(&self) -> String {
        render_optional(self.get())
    }
}

/// A dropped referent reads as absent
impl<T: Inspect> Inspect for rc::Weak<T> {
    fn type_info(&self) -> TypeInfo {
        type_info_optional(self.upgrade().as_deref())
    }

    fn open(&self, visit: &mut ValueVisitor<'_>) -> Comparison {
        open_optional(self.upgrade().as_deref(), visit)
    }

    fn identity(&self) -> Option<Identity> {
        self.upgrade().map(|strong| Identity::of(Rc::as_ptr(&strong)))
    }

    fn render(&self) -> String {
        render_optional(self.upgrade().as_deref())
    }
}

impl<T: Inspect> Inspect for sync::Weak<T> {
    fn type_info(&self) -> TypeInfo {
        type_info_optional(self.upgrade().as_deref())
    }

    fn open(&self, visit: &mut ValueVisitor<'_>) -> Comparison {
        open_optional(self.upgrade().as_deref(), visit)
    }

    fn identity(&self) -> Option<Identity> {
        self.upgrade().map(|strong| Identity::of(Arc::as_ptr(&strong)))
    }

    fn render(&self) -> String {
        render_optional(self.upgrade().as_deref())
    }
}
