use std::convert::Infallible;
use std::marker::PhantomData;

use super::{Slot, Visitor};
use crate::node::Node;

/// Collects a copy of every node of type `T` reachable from the root.
#[derive(Debug)]
pub struct CollectingVisitor<T> {
    result: Vec<T>,
    kind: PhantomData<fn() -> T>,
}

impl<T: Node + Clone> CollectingVisitor<T> {
    pub fn new() -> Self {
        Self {
            result: Vec::new(),
            kind: PhantomData,
        }
    }

    pub fn result(&self) -> &[T] {
        &self.result
    }

    pub fn into_result(self) -> Vec<T> {
        self.result
    }
}

impl<T: Node + Clone> Default for CollectingVisitor<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Node + Clone> Visitor for CollectingVisitor<T> {
    type Error = Infallible;

    fn visit(&mut self, _name: &str, _slot: Slot, node: &dyn Node) -> Result<bool, Infallible> {
        if let Some(node) = node.downcast_ref::<T>() {
            self.result.push(node.clone());
        }
        Ok(true)
    }
}
