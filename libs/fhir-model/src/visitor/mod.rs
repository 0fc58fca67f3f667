//! Generic traversal over the object model
//!
//! Every node implements [`Visitable`]. Traversal is a pre-order/post-order
//! walk driven by a caller-supplied [`Visitor`]:
//!
//! 1. `pre_visit(node)`; `false` skips the node and its whole subtree.
//! 2. `visit_start(name, slot, node)`.
//! 3. `visit(name, slot, node)`; `false` skips the children only.
//! 4. Children in field declaration order. Single elements are visited with
//!    [`Slot::Single`], choice elements with [`Slot::Choice`], repeating
//!    elements item by item with [`Slot::Item`] between `visit_list_start` /
//!    `visit_list_end`. Empty lists produce no calls at all. Plain values
//!    (element ids, primitive values, `Extension.url`) go to `visit_value`.
//! 5. `visit_end(name, slot, node)`.
//! 6. `post_visit(node)`.
//!
//! Visitor errors propagate through every level unchanged.

mod collecting;
mod path;

pub use collecting::CollectingVisitor;
pub use path::PathVisitor;

use crate::node::Node;
use crate::types::ChoiceType;

/// Position of a node relative to its parent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// Root node or a single-valued element
    Single,
    /// Single-valued polymorphic element (`value[x]`)
    Choice,
    /// Item of a repeating element
    Item(usize),
}

impl Slot {
    pub fn index(self) -> Option<usize> {
        match self {
            Slot::Item(index) => Some(index),
            _ => None,
        }
    }

    pub fn is_choice(self) -> bool {
        matches!(self, Slot::Choice)
    }
}

/// Plain value handed to [`Visitor::visit_value`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Value<'a> {
    Boolean(bool),
    Integer(i64),
    String(&'a str),
}

impl Value<'_> {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }
}

/// Traversal callbacks
///
/// All callbacks have no-op defaults that descend everywhere, so an
/// implementation only overrides what it needs.
pub trait Visitor {
    type Error;

    fn pre_visit(&mut self, _node: &dyn Node) -> Result<bool, Self::Error> {
        Ok(true)
    }

    fn visit_start(&mut self, _name: &str, _slot: Slot, _node: &dyn Node) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Returns whether the children of `node` should be visited
    fn visit(&mut self, _name: &str, _slot: Slot, _node: &dyn Node) -> Result<bool, Self::Error> {
        Ok(true)
    }

    fn visit_end(&mut self, _name: &str, _slot: Slot, _node: &dyn Node) -> Result<(), Self::Error> {
        Ok(())
    }

    fn post_visit(&mut self, _node: &dyn Node) -> Result<(), Self::Error> {
        Ok(())
    }

    fn visit_list_start(
        &mut self,
        _name: &str,
        _len: usize,
        _item_type: &'static str,
    ) -> Result<(), Self::Error> {
        Ok(())
    }

    fn visit_list_end(
        &mut self,
        _name: &str,
        _len: usize,
        _item_type: &'static str,
    ) -> Result<(), Self::Error> {
        Ok(())
    }

    fn visit_value(&mut self, _name: &str, _value: Value<'_>) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// A node that can drive a [`Visitor`] over itself and its descendants
pub trait Visitable: Node {
    fn accept_slot<V: Visitor + ?Sized>(
        &self,
        name: &str,
        slot: Slot,
        visitor: &mut V,
    ) -> Result<(), V::Error>;

    /// Entry point for a traversal rooted at this node
    fn accept<V: Visitor + ?Sized>(&self, name: &str, visitor: &mut V) -> Result<(), V::Error> {
        self.accept_slot(name, Slot::Single, visitor)
    }
}

/// Runs the node protocol around `children`.
pub fn walk<N, V, F>(
    node: &N,
    name: &str,
    slot: Slot,
    visitor: &mut V,
    children: F,
) -> Result<(), V::Error>
where
    N: Node,
    V: Visitor + ?Sized,
    F: FnOnce(&mut V) -> Result<(), V::Error>,
{
    if !visitor.pre_visit(node)? {
        return Ok(());
    }
    visitor.visit_start(name, slot, node)?;
    if visitor.visit(name, slot, node)? {
        children(visitor)?;
    }
    visitor.visit_end(name, slot, node)?;
    visitor.post_visit(node)
}

pub fn accept_element<T, V>(element: Option<&T>, name: &str, visitor: &mut V) -> Result<(), V::Error>
where
    T: Visitable,
    V: Visitor + ?Sized,
{
    match element {
        Some(element) => element.accept_slot(name, Slot::Single, visitor),
        None => Ok(()),
    }
}

pub fn accept_choice<C, V>(choice: Option<&C>, name: &str, visitor: &mut V) -> Result<(), V::Error>
where
    C: ChoiceType,
    V: Visitor + ?Sized,
{
    match choice {
        Some(choice) => choice.accept_choice(name, visitor),
        None => Ok(()),
    }
}

pub fn accept_list<T, V>(
    items: &[T],
    name: &str,
    item_type: &'static str,
    visitor: &mut V,
) -> Result<(), V::Error>
where
    T: Visitable,
    V: Visitor + ?Sized,
{
    if items.is_empty() {
        return Ok(());
    }
    visitor.visit_list_start(name, items.len(), item_type)?;
    for (index, item) in items.iter().enumerate() {
        item.accept_slot(name, Slot::Item(index), visitor)?;
    }
    visitor.visit_list_end(name, items.len(), item_type)
}

pub fn accept_value<V>(value: Option<Value<'_>>, name: &str, visitor: &mut V) -> Result<(), V::Error>
where
    V: Visitor + ?Sized,
{
    match value {
        Some(value) => visitor.visit_value(name, value),
        None => Ok(()),
    }
}

/// Whether the traversal of `node` reaches at least one child node.
///
/// This is the single definition of "children" used by the value-or-children
/// rule: absent elements and empty lists do not count, plain values such as
/// element ids do not count.
pub fn has_child_nodes<T: Visitable>(node: &T) -> bool {
    matches!(node.accept("", &mut ChildProbe::default()), Err(ChildFound))
}

struct ChildFound;

#[derive(Default)]
struct ChildProbe {
    entered: bool,
}

impl Visitor for ChildProbe {
    type Error = ChildFound;

    fn visit_start(&mut self, _name: &str, _slot: Slot, _node: &dyn Node) -> Result<(), ChildFound> {
        if self.entered {
            return Err(ChildFound);
        }
        self.entered = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::ElementBuilder;
    use crate::types::{CodeableConcept, Coding, FhirString, Uri};

    #[test]
    fn test_slot_helpers() {
        assert_eq!(Slot::Item(3).index(), Some(3));
        assert_eq!(Slot::Single.index(), None);
        assert!(Slot::Choice.is_choice());
        assert!(!Slot::Item(0).is_choice());
    }

    #[test]
    fn test_has_child_nodes_ignores_plain_values() {
        let coding = Coding::builder()
            .id("c1")
            .system(Uri::of("http://loinc.org").unwrap())
            .build()
            .unwrap();
        assert!(has_child_nodes(&coding));

        let text_only = CodeableConcept::builder()
            .text(FhirString::of("headache").unwrap())
            .build()
            .unwrap();
        assert!(has_child_nodes(&text_only));

        let primitive = FhirString::of("value only").unwrap();
        assert!(!has_child_nodes(&primitive));
    }
}
