//! `Inspect` for [`Sensitive`] values.
//!
//! A sensitive value is compared exactly like the value it wraps, but every
//! value reached through it renders as [`REDACTED`]. The redaction follows
//! members and elements, so a secret nested anywhere below the wrapper never
//! reaches a failure message.

use deepeq_core_types::{Sensitive, REDACTED};

use super::{
    Element, ElementVisitor, Identity, Inspect, Member, MemberVisitor, Scalar, TypeInfo,
    ValueVisitor,
};
use crate::errors::Comparison;

impl<T: Inspect> Inspect for Sensitive<T> {
    fn type_info(&self) -> TypeInfo {
        self.expose().type_info()
    }

    fn open(&self, visit: &mut ValueVisitor<'_>) -> Comparison {
        open_redacted(self.expose(), visit)
    }

    fn identity(&self) -> Option<Identity> {
        self.expose().identity()
    }

    fn render(&self) -> String {
        REDACTED.to_string()
    }
}

fn open_redacted(value: &dyn Inspect, visit: &mut ValueVisitor<'_>) -> Comparison {
    value.open(&mut |opened| match opened {
        Some(opened) => visit(Some(&Redacted(Element::Borrowed(opened)))),
        None => visit(None),
    })
}

/// View of a value below a `Sensitive` wrapper
struct Redacted<'a>(Element<'a>);

impl Inspect for Redacted<'_> {
    fn type_info(&self) -> TypeInfo {
        self.0.type_info()
    }

    fn open(&self, visit: &mut ValueVisitor<'_>) -> Comparison {
        open_redacted(&*self.0, visit)
    }

    fn identity(&self) -> Option<Identity> {
        self.0.identity()
    }

    fn scalar(&self) -> Option<Scalar<'_>> {
        self.0.scalar()
    }

    fn members(&self) -> &'static [Member] {
        self.0.members()
    }

    fn with_member(&self, member: &Member, visit: &mut MemberVisitor<'_>) -> Comparison {
        self.0
            .with_member(member, &mut |value| visit(&Redacted(Element::Borrowed(value))))
    }

    fn with_elements(&self, visit: &mut ElementVisitor<'_>) -> Option<Comparison> {
        self.0.with_elements(&mut |elements| {
            visit(&mut elements.map(|element| Element::Owned(Box::new(Redacted(element)))))
        })
    }

    fn render(&self) -> String {
        REDACTED.to_string()
    }
}
