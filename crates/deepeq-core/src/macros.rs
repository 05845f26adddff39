//! Declarative helpers for user types and test assertions.

/// Implement [`Inspect`](crate::Inspect) for a struct from a member table
///
/// Each entry names the member as it appears in failure paths, its
/// visibility (`public` or `private`), its kind and the Rust item it reads:
///
/// - `accessor "Name" => method` reads `self.method()`
/// - `field "name" => field` reads `self.field`
///
/// A field can be marked as the backing store of an accessor with
/// `backs "Accessor"`; it is then skipped in favour of the accessor. Private
/// members are listed for completeness but never read.
///
/// The macro targets non-generic types; implement the trait by hand for
/// generic ones.
///
/// Accessors may return owned values or references; either way the
/// returned type must implement `Inspect` (`&String` rather than `&str`).
///
/// # Example
///
/// ```
/// use deepeq_core::{compare, inspect_struct};
///
/// struct Account {
///     owner: String,
///     balance: i64,
///     cache_hits: u32,
/// }
///
/// impl Account {
///     fn owner(&self) -> &String {
///         &self.owner
///     }
/// }
///
/// inspect_struct!(Account {
///     public accessor "Owner" => owner,
///     public field "balance" => balance,
///     private field "cache_hits" => cache_hits,
/// });
///
/// let a = Account { owner: "ana".into(), balance: 10, cache_hits: 1 };
/// let b = Account { owner: "ana".into(), balance: 10, cache_hits: 7 };
/// assert!(compare(&a, &b).is_ok());
/// ```
#[macro_export]
macro_rules! inspect_struct {
    (@member public accessor $name:literal) => {
        $crate::inspect::Member::accessor($name)
    };
    (@member private accessor $name:literal) => {
        $crate::inspect::Member::accessor($name).private()
    };
    (@member public field $name:literal) => {
        $crate::inspect::Member::field($name)
    };
    (@member private field $name:literal) => {
        $crate::inspect::Member::field($name).private()
    };
    (@read $this:ident accessor $target:ident) => {
        $this.$target()
    };
    (@read $this:ident field $target:ident) => {
        $this.$target
    };
    ($ty:ty {
        $($vis:ident $kind:ident $name:literal => $target:ident $(backs $backs:literal)?),* $(,)?
    }) => {
        impl $crate::Inspect for $ty {
            fn type_info(&self) -> $crate::inspect::TypeInfo {
                $crate::inspect::TypeInfo::of::<Self>()
            }

            fn members(&self) -> &'static [$crate::inspect::Member] {
                const MEMBERS: &[$crate::inspect::Member] = &[
                    $($crate::inspect_struct!(@member $vis $kind $name) $(.backing($backs))?),*
                ];
                MEMBERS
            }

            #[allow(unused_variables)]
            fn with_member(
                &self,
                member: &$crate::inspect::Member,
                visit: &mut $crate::inspect::MemberVisitor<'_>,
            ) -> $crate::errors::Comparison {
                match member.name() {
                    $($name => visit(&$crate::inspect_struct!(@read self $kind $target)),)*
                    _ => Ok(()),
                }
            }
        }
    };
}

/// Assert that two values are structurally equal
///
/// Panics with the [`Inequality`](crate::Inequality) message on the first
/// divergence. An optional format string is printed above it.
///
/// # Example
///
/// ```
/// use deepeq_core::assert_deep_eq;
///
/// assert_deep_eq!(vec![1, 2, 3], vec![1, 2, 3]);
/// assert_deep_eq!(Some(5_u8), Some(5_u8), "round {}", 1);
/// ```
#[macro_export]
macro_rules! assert_deep_eq {
    ($first:expr, $second:expr $(,)?) => {
        match $crate::compare(&$first, &$second) {
            Ok(()) => {}
            Err(err) => panic!("{}", err),
        }
    };
    ($first:expr, $second:expr, $($arg:tt)+) => {
        match $crate::compare(&$first, &$second) {
            Ok(()) => {}
            Err(err) => panic!("{}\n{}", format_args!($($arg)+), err),
        }
    };
}
