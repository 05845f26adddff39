//! Per-comparison identity map used for cycle detection.

use std::any::TypeId;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::inspect::Identity;

/// Result of pairing a first-side identity with a second-side identity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Pairing {
    /// First time this first-side value is seen; the pair is now recorded
    Fresh,
    /// Seen before with the same partner
    Consistent,
    /// Seen before with a different partner
    Conflict,
}

/// Identity-keyed map from first-side values to their second-side partners
///
/// Keys are addresses, never values. The runtime type is part of the key:
/// a struct and its first field can live at the same address.
#[derive(Debug, Default)]
pub(crate) struct Visited {
    pairs: HashMap<(TypeId, Identity), Option<Identity>>,
}

impl Visited {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Record `first -> second`, or check it against an earlier record
    ///
    /// A partner without identity never matches: owned values cannot be
    /// the same instance twice.
    pub(crate) fn pair(
        &mut self,
        ty: TypeId,
        first: Identity,
        second: Option<Identity>,
    ) -> Pairing {
        match self.pairs.entry((ty, first)) {
            Entry::Occupied(recorded) => {
                if second.is_some() && *recorded.get() == second {
                    Pairing::Consistent
                } else {
                    Pairing::Conflict
                }
            }
            Entry::Vacant(slot) => {
                slot.insert(second);
                Pairing::Fresh
            }
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.pairs.len()
    }
}
