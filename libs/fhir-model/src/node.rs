//! Node contract shared by every type in the model
//!
//! The FHIR base hierarchy (`Element` → `BackboneElement`, `Resource` →
//! `DomainResource`) is expressed as field bundles plus small traits. Each
//! concrete type embeds one bundle in a field named `base` and gets the trait
//! impls from [`element_node!`], [`backbone_node!`] or [`resource_node!`].

use std::any::Any;
use std::fmt::Debug;

use crate::config::ModelConfig;
use crate::resource::AnyResource;
use crate::types::{Code, Extension, Meta, Narrative, Uri};
use crate::validation;
use crate::visitor::{accept_element, accept_list, accept_value, Value, Visitor};

/// Node category used for dispatch without downcasting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Primitive,
    Element,
    BackboneElement,
    Resource,
}

/// A built, immutable node of the object model
pub trait Node: Any + Debug + Send + Sync {
    /// FHIR type name (`string`, `CodeableConcept`, `Consent.Provision`, ...)
    fn type_name(&self) -> &'static str;

    fn kind(&self) -> NodeKind;

    /// Whether the node carries a primitive value
    fn has_value(&self) -> bool {
        false
    }

    /// Whether the node has at least one populated child
    fn has_children(&self) -> bool;

    fn as_any(&self) -> &dyn Any;
}

impl<'a> dyn Node + 'a {
    pub fn is<T: Node>(&self) -> bool {
        self.as_any().is::<T>()
    }

    pub fn downcast_ref<T: Node>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }
}

pub trait HasId {
    fn id(&self) -> Option<&str>;
}

pub trait HasExtensions: HasId {
    fn extension(&self) -> &[Extension];
}

/// Extensions that may change the meaning of the containing node.
///
/// Consumers must not ignore them; the traversal always visits them.
pub trait HasModifierExtensions: HasExtensions {
    fn modifier_extension(&self) -> &[Extension];
}

pub trait IsBackboneElement: HasModifierExtensions {}

pub trait IsResource: HasModifierExtensions {
    fn meta(&self) -> Option<&Meta>;

    fn implicit_rules(&self) -> Option<&Uri>;

    fn language(&self) -> Option<&Code>;
}

pub trait IsDomainResource: IsResource {
    fn text(&self) -> Option<&Narrative>;

    fn contained(&self) -> &[AnyResource];
}

// ============================================================================
// Field bundles
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ElementBase {
    pub(crate) id: Option<String>,
    pub(crate) extension: Vec<Extension>,
}

impl ElementBase {
    pub(crate) fn validate(&self, config: &ModelConfig) -> crate::Result<()> {
        match &self.id {
            Some(id) => validation::check_string(id, config),
            None => Ok(()),
        }
    }

    pub(crate) fn accept_children<V: Visitor + ?Sized>(&self, visitor: &mut V) -> Result<(), V::Error> {
        accept_value(self.id.as_deref().map(Value::String), "id", visitor)?;
        accept_list(&self.extension, "extension", "Extension", visitor)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct BackboneBase {
    pub(crate) id: Option<String>,
    pub(crate) extension: Vec<Extension>,
    pub(crate) modifier_extension: Vec<Extension>,
}

impl BackboneBase {
    pub(crate) fn validate(&self, config: &ModelConfig) -> crate::Result<()> {
        match &self.id {
            Some(id) => validation::check_string(id, config),
            None => Ok(()),
        }
    }

    pub(crate) fn accept_children<V: Visitor + ?Sized>(&self, visitor: &mut V) -> Result<(), V::Error> {
        accept_value(self.id.as_deref().map(Value::String), "id", visitor)?;
        accept_list(&self.extension, "extension", "Extension", visitor)?;
        accept_list(&self.modifier_extension, "modifierExtension", "Extension", visitor)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ResourceBase {
    pub(crate) id: Option<String>,
    pub(crate) meta: Option<Meta>,
    pub(crate) implicit_rules: Option<Uri>,
    pub(crate) language: Option<Code>,
    pub(crate) text: Option<Narrative>,
    pub(crate) contained: Vec<AnyResource>,
    pub(crate) extension: Vec<Extension>,
    pub(crate) modifier_extension: Vec<Extension>,
}

impl ResourceBase {
    pub(crate) fn validate(&self, _config: &ModelConfig) -> crate::Result<()> {
        match &self.id {
            Some(id) => validation::check_id(id),
            None => Ok(()),
        }
    }

    pub(crate) fn accept_children<V: Visitor + ?Sized>(&self, visitor: &mut V) -> Result<(), V::Error> {
        accept_value(self.id.as_deref().map(Value::String), "id", visitor)?;
        accept_element(self.meta.as_ref(), "meta", visitor)?;
        accept_element(self.implicit_rules.as_ref(), "implicitRules", visitor)?;
        accept_element(self.language.as_ref(), "language", visitor)?;
        accept_element(self.text.as_ref(), "text", visitor)?;
        accept_list(&self.contained, "contained", "Resource", visitor)?;
        accept_list(&self.extension, "extension", "Extension", visitor)?;
        accept_list(&self.modifier_extension, "modifierExtension", "Extension", visitor)
    }
}

// ============================================================================
// Builder traits
// ============================================================================

/// Setters shared by every element builder
pub trait ElementBuilder: Sized {
    fn element_base_mut(&mut self) -> &mut ElementBase;

    fn id(mut self, id: impl Into<String>) -> Self {
        self.element_base_mut().id = Some(id.into());
        self
    }

    fn add_extension(mut self, extension: Extension) -> Self {
        self.element_base_mut().extension.push(extension);
        self
    }

    fn extend_extension(mut self, extensions: impl IntoIterator<Item = Extension>) -> Self {
        self.element_base_mut().extension.extend(extensions);
        self
    }

    /// Replaces all extensions
    fn extension(mut self, extensions: impl IntoIterator<Item = Extension>) -> Self {
        self.element_base_mut().extension = extensions.into_iter().collect();
        self
    }
}

/// Setters shared by every backbone element builder
pub trait BackboneElementBuilder: Sized {
    fn backbone_base_mut(&mut self) -> &mut BackboneBase;

    fn id(mut self, id: impl Into<String>) -> Self {
        self.backbone_base_mut().id = Some(id.into());
        self
    }

    fn add_extension(mut self, extension: Extension) -> Self {
        self.backbone_base_mut().extension.push(extension);
        self
    }

    fn extend_extension(mut self, extensions: impl IntoIterator<Item = Extension>) -> Self {
        self.backbone_base_mut().extension.extend(extensions);
        self
    }

    fn extension(mut self, extensions: impl IntoIterator<Item = Extension>) -> Self {
        self.backbone_base_mut().extension = extensions.into_iter().collect();
        self
    }

    fn add_modifier_extension(mut self, extension: Extension) -> Self {
        self.backbone_base_mut().modifier_extension.push(extension);
        self
    }

    fn extend_modifier_extension(mut self, extensions: impl IntoIterator<Item = Extension>) -> Self {
        self.backbone_base_mut().modifier_extension.extend(extensions);
        self
    }

    fn modifier_extension(mut self, extensions: impl IntoIterator<Item = Extension>) -> Self {
        self.backbone_base_mut().modifier_extension = extensions.into_iter().collect();
        self
    }
}

/// Setters shared by every resource builder
pub trait ResourceBuilder: Sized {
    fn resource_base_mut(&mut self) -> &mut ResourceBase;

    fn id(mut self, id: impl Into<String>) -> Self {
        self.resource_base_mut().id = Some(id.into());
        self
    }

    fn meta(mut self, meta: Meta) -> Self {
        self.resource_base_mut().meta = Some(meta);
        self
    }

    fn implicit_rules(mut self, implicit_rules: Uri) -> Self {
        self.resource_base_mut().implicit_rules = Some(implicit_rules);
        self
    }

    fn language(mut self, language: Code) -> Self {
        self.resource_base_mut().language = Some(language);
        self
    }

    fn text(mut self, text: Narrative) -> Self {
        self.resource_base_mut().text = Some(text);
        self
    }

    fn add_contained(mut self, resource: impl Into<AnyResource>) -> Self {
        self.resource_base_mut().contained.push(resource.into());
        self
    }

    fn extend_contained(mut self, resources: impl IntoIterator<Item = impl Into<AnyResource>>) -> Self {
        self.resource_base_mut().contained.extend(resources.into_iter().map(Into::<AnyResource>::into));
        self
    }

    fn contained(mut self, resources: impl IntoIterator<Item = AnyResource>) -> Self {
        self.resource_base_mut().contained = resources.into_iter().collect();
        self
    }

    fn add_extension(mut self, extension: Extension) -> Self {
        self.resource_base_mut().extension.push(extension);
        self
    }

    fn extend_extension(mut self, extensions: impl IntoIterator<Item = Extension>) -> Self {
        self.resource_base_mut().extension.extend(extensions);
        self
    }

    fn extension(mut self, extensions: impl IntoIterator<Item = Extension>) -> Self {
        self.resource_base_mut().extension = extensions.into_iter().collect();
        self
    }

    fn add_modifier_extension(mut self, extension: Extension) -> Self {
        self.resource_base_mut().modifier_extension.push(extension);
        self
    }

    fn extend_modifier_extension(mut self, extensions: impl IntoIterator<Item = Extension>) -> Self {
        self.resource_base_mut().modifier_extension.extend(extensions);
        self
    }

    fn modifier_extension(mut self, extensions: impl IntoIterator<Item = Extension>) -> Self {
        self.resource_base_mut().modifier_extension = extensions.into_iter().collect();
        self
    }
}

// ============================================================================
// Trait impls per family
// ============================================================================

/// Implements the element contract for a complex data type
macro_rules! element_node {
    ($ty:ty, $builder:ty, $name:literal) => {
        impl $crate::node::Node for $ty {
            fn type_name(&self) -> &'static str {
                $name
            }

            fn kind(&self) -> $crate::node::NodeKind {
                $crate::node::NodeKind::Element
            }

            fn has_children(&self) -> bool {
                $crate::visitor::has_child_nodes(self)
            }

            fn as_any(&self) -> &dyn std::any::Any {
                self
            }
        }

        impl $crate::node::HasId for $ty {
            fn id(&self) -> Option<&str> {
                self.base.id.as_deref()
            }
        }

        impl $crate::node::HasExtensions for $ty {
            fn extension(&self) -> &[$crate::types::Extension] {
                &self.base.extension
            }
        }

        impl $crate::node::ElementBuilder for $builder {
            fn element_base_mut(&mut self) -> &mut $crate::node::ElementBase {
                &mut self.base
            }
        }
    };
}

/// Implements the backbone element contract for a nested resource component
macro_rules! backbone_node {
    ($ty:ty, $builder:ty, $name:literal) => {
        impl $crate::node::Node for $ty {
            fn type_name(&self) -> &'static str {
                $name
            }

            fn kind(&self) -> $crate::node::NodeKind {
                $crate::node::NodeKind::BackboneElement
            }

            fn has_children(&self) -> bool {
                $crate::visitor::has_child_nodes(self)
            }

            fn as_any(&self) -> &dyn std::any::Any {
                self
            }
        }

        impl $crate::node::HasId for $ty {
            fn id(&self) -> Option<&str> {
                self.base.id.as_deref()
            }
        }

        impl $crate::node::HasExtensions for $ty {
            fn extension(&self) -> &[$crate::types::Extension] {
                &self.base.extension
            }
        }

        impl $crate::node::HasModifierExtensions for $ty {
            fn modifier_extension(&self) -> &[$crate::types::Extension] {
                &self.base.modifier_extension
            }
        }

        impl $crate::node::IsBackboneElement for $ty {}

        impl $crate::node::BackboneElementBuilder for $builder {
            fn backbone_base_mut(&mut self) -> &mut $crate::node::BackboneBase {
                &mut self.base
            }
        }
    };
}

/// Implements the resource contract for a domain resource
macro_rules! resource_node {
    ($ty:ty, $builder:ty, $name:literal) => {
        impl $crate::node::Node for $ty {
            fn type_name(&self) -> &'static str {
                $name
            }

            fn kind(&self) -> $crate::node::NodeKind {
                $crate::node::NodeKind::Resource
            }

            // a resource id is content in its own right
            fn has_children(&self) -> bool {
                self.base.id.is_some() || $crate::visitor::has_child_nodes(self)
            }

            fn as_any(&self) -> &dyn std::any::Any {
                self
            }
        }

        impl $crate::node::HasId for $ty {
            fn id(&self) -> Option<&str> {
                self.base.id.as_deref()
            }
        }

        impl $crate::node::HasExtensions for $ty {
            fn extension(&self) -> &[$crate::types::Extension] {
                &self.base.extension
            }
        }

        impl $crate::node::HasModifierExtensions for $ty {
            fn modifier_extension(&self) -> &[$crate::types::Extension] {
                &self.base.modifier_extension
            }
        }

        impl $crate::node::IsResource for $ty {
            fn meta(&self) -> Option<&$crate::types::Meta> {
                self.base.meta.as_ref()
            }

            fn implicit_rules(&self) -> Option<&$crate::types::Uri> {
                self.base.implicit_rules.as_ref()
            }

            fn language(&self) -> Option<&$crate::types::Code> {
                self.base.language.as_ref()
            }
        }

        impl $crate::node::IsDomainResource for $ty {
            fn text(&self) -> Option<&$crate::types::Narrative> {
                self.base.text.as_ref()
            }

            fn contained(&self) -> &[$crate::resource::AnyResource] {
                &self.base.contained
            }
        }

        impl $crate::node::ResourceBuilder for $builder {
            fn resource_base_mut(&mut self) -> &mut $crate::node::ResourceBase {
                &mut self.base
            }
        }
    };
}

pub(crate) use backbone_node;
pub(crate) use element_node;
pub(crate) use resource_node;
