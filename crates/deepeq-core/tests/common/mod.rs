//! Shared models for comparator integration tests.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use deepeq_core::errors::Comparison;
use deepeq_core::inspect::{Element, ElementVisitor, Member, MemberVisitor, TypeInfo};
use deepeq_core::{inspect_struct, Inspect};

// ========== Accessor-based models ==========

#[derive(Default)]
pub struct Parent {
    public_parent_property: i32,
}

impl Parent {
    pub fn public_parent_property(&self) -> i32 {
        self.public_parent_property
    }
}

inspect_struct!(Parent {
    public accessor "PublicParentProperty" => public_parent_property,
});

#[derive(Default)]
pub struct FirstChild {
    pub public_parent_property: i32,
    pub public_child_property: Option<String>,
    private_child_property: bool,
}

impl FirstChild {
    pub fn with_child_property(value: &str) -> Self {
        Self {
            public_child_property: Some(value.to_string()),
            ..Self::default()
        }
    }

    pub fn with_private(value: bool) -> Self {
        Self {
            private_child_property: value,
            ..Self::default()
        }
    }

    pub fn parent_property(mut self, value: i32) -> Self {
        self.public_parent_property = value;
        self
    }

    pub fn public_parent_property(&self) -> i32 {
        self.public_parent_property
    }

    pub fn public_child_property(&self) -> &Option<String> {
        &self.public_child_property
    }

    fn private_child_property(&self) -> bool {
        self.private_child_property
    }
}

inspect_struct!(FirstChild {
    public accessor "PublicChildProperty" => public_child_property,
    public accessor "PublicParentProperty" => public_parent_property,
    private accessor "PrivateChildProperty" => private_child_property,
});

#[derive(Default)]
pub struct SecondChild {
    public_parent_property: i32,
}

impl SecondChild {
    pub fn public_parent_property(&self) -> i32 {
        self.public_parent_property
    }
}

inspect_struct!(SecondChild {
    public accessor "PublicParentProperty" => public_parent_property,
});

pub struct WithList {
    list: Vec<FirstChild>,
}

impl WithList {
    pub fn of(values: &[&str]) -> Self {
        Self {
            list: values
                .iter()
                .map(|value| FirstChild::with_child_property(value))
                .collect(),
        }
    }

    pub fn list(&self) -> &Vec<FirstChild> {
        &self.list
    }
}

inspect_struct!(WithList {
    public accessor "List" => list,
});

// ========== Field-based models ==========

#[derive(Default)]
pub struct FieldsWithoutAccessorMethods {
    pub public_field: Option<String>,
    private_field: Option<String>,
    pub has_accessor_methods: String,
}

impl FieldsWithoutAccessorMethods {
    pub fn new(public_field: &str, has_accessor_methods: &str) -> Self {
        Self {
            public_field: Some(public_field.to_string()),
            has_accessor_methods: has_accessor_methods.to_string(),
            ..Self::default()
        }
    }

    pub fn with_private(value: &str) -> Self {
        Self {
            private_field: Some(value.to_string()),
            ..Self::default()
        }
    }

    /// Normalised view of the backing field
    pub fn has_accessor_methods(&self) -> String {
        self.has_accessor_methods.trim().to_string()
    }
}

inspect_struct!(FieldsWithoutAccessorMethods {
    public accessor "HasAccessorMethods" => has_accessor_methods,
    public field "publicField" => public_field,
    private field "privateField" => private_field,
    public field "hasAccessorMethods" => has_accessor_methods backs "HasAccessorMethods",
});

pub struct Fruit {
    pub banana: String,
    pub apple: String,
}

inspect_struct!(Fruit {
    public field "banana" => banana,
    public field "apple" => apple,
});

// ========== Linked models ==========

pub type Link = Option<Rc<RefCell<LightLinkedList>>>;

#[derive(Default)]
pub struct LightLinkedList {
    pub next: Link,
    pub name: Option<String>,
}

inspect_struct!(LightLinkedList {
    public field "Next" => next,
    public field "Name" => name,
});

/// Allocate a shared list node
pub fn node(name: Option<&str>, next: Link) -> Rc<RefCell<LightLinkedList>> {
    Rc::new(RefCell::new(LightLinkedList {
        next,
        name: name.map(str::to_string),
    }))
}

/// Point `from.next` at `to`
pub fn link(from: &Rc<RefCell<LightLinkedList>>, to: &Rc<RefCell<LightLinkedList>>) {
    from.borrow_mut().next = Some(Rc::clone(to));
}

/// Linked list that is also a sequence of its node names
///
/// Elements are the names along the chain; `ExtraValue` is only reachable
/// as a member.
pub struct EnumerableLightLinkedList {
    pub extra_value: Option<String>,
    pub name: Option<String>,
    pub next: Link,
}

static ENUMERABLE_MEMBERS: [Member; 3] = [
    Member::field("ExtraValue"),
    Member::field("Next"),
    Member::field("Name"),
];

impl EnumerableLightLinkedList {
    fn names(&self) -> Vec<Option<String>> {
        let mut names = vec![self.name.clone()];
        let mut cursor = self.next.clone();
        while let Some(node) = cursor {
            let node = node.borrow();
            names.push(node.name.clone());
            cursor = node.next.clone();
        }
        names
    }
}

impl Inspect for EnumerableLightLinkedList {
    fn type_info(&self) -> TypeInfo {
        TypeInfo::of::<Self>()
    }

    fn members(&self) -> &'static [Member] {
        &ENUMERABLE_MEMBERS
    }

    fn with_member(&self, member: &Member, visit: &mut MemberVisitor<'_>) -> Comparison {
        match member.name() {
            "ExtraValue" => visit(&self.extra_value),
            "Next" => visit(&self.next),
            "Name" => visit(&self.name),
            _ => Ok(()),
        }
    }

    fn with_elements(&self, visit: &mut ElementVisitor<'_>) -> Option<Comparison> {
        let names = self.names();
        Some(visit(
            &mut names
                .into_iter()
                .map(|name| Element::Owned(Box::new(name))),
        ))
    }
}
