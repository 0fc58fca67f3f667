//! Choice elements
//!
//! Builders accept any [`DataType`] for a choice element; `build()` narrows
//! it to the closed union declared for that element (see [`choice_type!`]).

use std::fmt::Debug;
use std::hash::Hash;

use super::*;
use crate::node::Node;
use crate::visitor::{Slot, Visitable, Visitor};

/// A closed set of types allowed for one choice element
pub trait ChoiceType: Clone + Debug + PartialEq + Eq + Hash + Send + Sync + Sized {
    /// FHIR type names of the members, in declaration order
    const ALLOWED: &'static [&'static str];

    /// Narrows an open value, handing it back when its type is not a member
    fn from_data_type(value: DataType) -> Result<Self, DataType>;

    fn into_data_type(self) -> DataType;

    fn type_name(&self) -> &'static str;

    fn as_node(&self) -> &dyn Node;

    /// Visits the held value with [`Slot::Choice`]
    fn accept_choice<V: Visitor + ?Sized>(&self, name: &str, visitor: &mut V) -> Result<(), V::Error>;
}

macro_rules! data_type {
    ($($variant:ident($ty:ty) = $type_name:literal),+ $(,)?) => {
        /// Any FHIR data type that may appear in an open choice element
        /// such as `Extension.value[x]`
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum DataType {
            $($variant($ty)),+
        }

        impl DataType {
            pub const TYPE_NAMES: &'static [&'static str] = &[$($type_name),+];

            pub fn type_name(&self) -> &'static str {
                match self {
                    $(DataType::$variant(_) => $type_name),+
                }
            }

            pub fn as_node(&self) -> &dyn Node {
                match self {
                    $(DataType::$variant(value) => value),+
                }
            }

            pub fn accept_slot<V: Visitor + ?Sized>(
                &self,
                name: &str,
                slot: Slot,
                visitor: &mut V,
            ) -> Result<(), V::Error> {
                match self {
                    $(DataType::$variant(value) => value.accept_slot(name, slot, visitor)),+
                }
            }
        }

        $(
            impl From<$ty> for DataType {
                fn from(value: $ty) -> Self {
                    DataType::$variant(value)
                }
            }
        )+
    };
}

data_type! {
    Base64Binary(Base64Binary) = "base64Binary",
    Boolean(Boolean) = "boolean",
    Canonical(Canonical) = "canonical",
    Code(Code) = "code",
    DateTime(DateTime) = "dateTime",
    Decimal(Decimal) = "decimal",
    Id(Id) = "id",
    Instant(Instant) = "instant",
    Integer(Integer) = "integer",
    Markdown(Markdown) = "markdown",
    PositiveInt(PositiveInt) = "positiveInt",
    String(FhirString) = "string",
    UnsignedInt(UnsignedInt) = "unsignedInt",
    Uri(Uri) = "uri",
    Url(Url) = "url",
    Annotation(Annotation) = "Annotation",
    Attachment(Attachment) = "Attachment",
    CodeableConcept(CodeableConcept) = "CodeableConcept",
    Coding(Coding) = "Coding",
    ContactPoint(ContactPoint) = "ContactPoint",
    Identifier(Identifier) = "Identifier",
    Period(Period) = "Period",
    Quantity(Quantity) = "Quantity",
    Reference(Reference) = "Reference",
}

impl ChoiceType for DataType {
    const ALLOWED: &'static [&'static str] = DataType::TYPE_NAMES;

    fn from_data_type(value: DataType) -> Result<Self, DataType> {
        Ok(value)
    }

    fn into_data_type(self) -> DataType {
        self
    }

    fn type_name(&self) -> &'static str {
        DataType::type_name(self)
    }

    fn as_node(&self) -> &dyn Node {
        DataType::as_node(self)
    }

    fn accept_choice<V: Visitor + ?Sized>(&self, name: &str, visitor: &mut V) -> Result<(), V::Error> {
        self.accept_slot(name, Slot::Choice, visitor)
    }
}

/// Declares the closed union of a choice element.
///
/// Variant names must match the [`DataType`] variant carrying the same type.
macro_rules! choice_type {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident($ty:ty) = $type_name:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant($ty)),+
        }

        impl $crate::types::ChoiceType for $name {
            const ALLOWED: &'static [&'static str] = &[$($type_name),+];

            fn from_data_type(
                value: $crate::types::DataType,
            ) -> std::result::Result<Self, $crate::types::DataType> {
                match value {
                    $($crate::types::DataType::$variant(value) => Ok($name::$variant(value)),)+
                    other => Err(other),
                }
            }

            fn into_data_type(self) -> $crate::types::DataType {
                match self {
                    $($name::$variant(value) => $crate::types::DataType::$variant(value)),+
                }
            }

            fn type_name(&self) -> &'static str {
                match self {
                    $($name::$variant(_) => $type_name),+
                }
            }

            fn as_node(&self) -> &dyn $crate::node::Node {
                match self {
                    $($name::$variant(value) => value),+
                }
            }

            fn accept_choice<V: $crate::visitor::Visitor + ?Sized>(
                &self,
                name: &str,
                visitor: &mut V,
            ) -> std::result::Result<(), V::Error> {
                use $crate::visitor::Visitable;
                match self {
                    $($name::$variant(value) => {
                        value.accept_slot(name, $crate::visitor::Slot::Choice, visitor)
                    }),+
                }
            }
        }

        $(
            impl From<$ty> for $name {
                fn from(value: $ty) -> Self {
                    $name::$variant(value)
                }
            }
        )+

        impl From<$name> for $crate::types::DataType {
            fn from(value: $name) -> Self {
                $crate::types::ChoiceType::into_data_type(value)
            }
        }
    };
}

pub(crate) use choice_type;
