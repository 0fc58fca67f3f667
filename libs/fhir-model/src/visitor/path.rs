use std::convert::Infallible;

use heck::ToUpperCamelCase;

use super::{Slot, Visitor};
use crate::node::Node;

/// Records the FHIRPath-style location of every node it visits.
///
/// The root segment is the element name passed to `accept`, or the node's type
/// name when that is empty. Choice elements carry their concrete type as a
/// suffix (`Consent.sourceReference`), repeating elements their index
/// (`Consent.category[1]`).
#[derive(Debug, Default)]
pub struct PathVisitor {
    stack: Vec<String>,
    paths: Vec<(String, &'static str)>,
}

impl PathVisitor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Visited paths with the type name of the node found there, in traversal order
    pub fn paths(&self) -> &[(String, &'static str)] {
        &self.paths
    }

    pub fn into_paths(self) -> Vec<(String, &'static str)> {
        self.paths
    }

    fn segment(name: &str, slot: Slot, node: &dyn Node) -> String {
        let name = if name.is_empty() { node.type_name() } else { name };
        match slot {
            Slot::Single => name.to_string(),
            Slot::Choice => format!("{}{}", name, node.type_name().to_upper_camel_case()),
            Slot::Item(index) => format!("{}[{}]", name, index),
        }
    }
}

impl Visitor for PathVisitor {
    type Error = Infallible;

    fn visit_start(&mut self, name: &str, slot: Slot, node: &dyn Node) -> Result<(), Infallible> {
        let segment = Self::segment(name, slot, node);
        let path = match self.stack.last() {
            Some(parent) => format!("{}.{}", parent, segment),
            None => segment,
        };
        self.paths.push((path.clone(), node.type_name()));
        self.stack.push(path);
        Ok(())
    }

    fn visit_end(&mut self, _name: &str, _slot: Slot, _node: &dyn Node) -> Result<(), Infallible> {
        self.stack.pop();
        Ok(())
    }
}
