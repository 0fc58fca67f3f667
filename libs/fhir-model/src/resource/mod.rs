//! FHIR resources

use std::any::Any;

use crate::node::{HasId, Node, NodeKind};
use crate::visitor::{Slot, Visitable, Visitor};

pub mod consent;
pub mod device;

pub use consent::Consent;
pub use device::Device;

/// Any resource, as held by `DomainResource.contained`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AnyResource {
    Consent(Box<Consent>),
    Device(Box<Device>),
}

impl AnyResource {
    pub fn resource_type(&self) -> &'static str {
        self.as_resource().type_name()
    }

    pub fn as_resource(&self) -> &dyn Node {
        match self {
            AnyResource::Consent(resource) => &**resource,
            AnyResource::Device(resource) => &**resource,
        }
    }

    pub fn id(&self) -> Option<&str> {
        match self {
            AnyResource::Consent(resource) => resource.id(),
            AnyResource::Device(resource) => resource.id(),
        }
    }

    pub fn as_consent(&self) -> Option<&Consent> {
        match self {
            AnyResource::Consent(resource) => Some(&**resource),
            _ => None,
        }
    }

    pub fn as_device(&self) -> Option<&Device> {
        match self {
            AnyResource::Device(resource) => Some(&**resource),
            _ => None,
        }
    }
}

impl Node for AnyResource {
    fn type_name(&self) -> &'static str {
        self.as_resource().type_name()
    }

    fn kind(&self) -> NodeKind {
        NodeKind::Resource
    }

    fn has_children(&self) -> bool {
        self.as_resource().has_children()
    }

    // the inner resource is the node visitors see
    fn as_any(&self) -> &dyn Any {
        self.as_resource().as_any()
    }
}

impl Visitable for AnyResource {
    fn accept_slot<V: Visitor + ?Sized>(
        &self,
        name: &str,
        slot: Slot,
        visitor: &mut V,
    ) -> Result<(), V::Error> {
        match self {
            AnyResource::Consent(resource) => resource.accept_slot(name, slot, visitor),
            AnyResource::Device(resource) => resource.accept_slot(name, slot, visitor),
        }
    }
}

impl From<Consent> for AnyResource {
    fn from(resource: Consent) -> Self {
        AnyResource::Consent(Box::new(resource))
    }
}

impl From<Device> for AnyResource {
    fn from(resource: Device) -> Self {
        AnyResource::Device(Box::new(resource))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{IsDomainResource, ResourceBuilder};
    use crate::types::FhirString;
    use crate::visitor::CollectingVisitor;

    fn device(id: &str) -> Device {
        Device::builder()
            .id(id)
            .manufacturer(FhirString::of("Acme").unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn test_any_resource_delegates() {
        let contained = AnyResource::from(device("d1"));
        assert_eq!(contained.resource_type(), "Device");
        assert_eq!(contained.id(), Some("d1"));
        assert!(contained.as_device().is_some());
        assert!(contained.as_consent().is_none());
        let node: &dyn Node = &contained;
        assert!(node.is::<Device>());
    }

    #[test]
    fn test_contained_resources_are_traversed() {
        let outer = Device::builder()
            .id("outer")
            .add_contained(device("inner"))
            .build()
            .unwrap();
        assert_eq!(outer.contained().len(), 1);

        let mut visitor = CollectingVisitor::<Device>::new();
        outer.accept("Device", &mut visitor).unwrap();
        let ids: Vec<_> = visitor.result().iter().filter_map(|d| d.id()).collect();
        assert_eq!(ids, vec!["outer", "inner"]);
    }
}
