//! FHIR primitive types
//!
//! A primitive is an element that can carry an `id`, extensions and a value.
//! [`Primitive`] holds the shared structure; the kind marker decides the Rust
//! value type, the FHIR type name and the lexical rules.

use std::any::Any;
use std::fmt::Debug;
use std::hash::Hash;
use std::marker::PhantomData;

use super::Extension;
use crate::config::ModelConfig;
use crate::node::{ElementBase, ElementBuilder, HasExtensions, HasId, Node, NodeKind};
use crate::validation;
use crate::visitor::{walk, Slot, Value, Visitable, Visitor};

/// Describes one FHIR primitive type
pub trait PrimitiveKind: Clone + Debug + PartialEq + Eq + Hash + Send + Sync + 'static {
    type Value: Clone + Debug + PartialEq + Eq + Hash + Send + Sync + 'static;

    const TYPE_NAME: &'static str;

    fn check(value: &Self::Value, config: &ModelConfig) -> crate::Result<()>;

    fn to_value(value: &Self::Value) -> Value<'_>;
}

/// A code drawn from a required value set
pub trait CodeEnum: Copy + Debug + PartialEq + Eq + Hash + Send + Sync + 'static {
    const VALUE_SET: &'static str;

    fn code(self) -> &'static str;

    fn from_code(code: &str) -> Option<Self>;
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Primitive<K: PrimitiveKind> {
    base: ElementBase,
    value: Option<K::Value>,
    kind: PhantomData<K>,
}

impl<K: PrimitiveKind> Primitive<K> {
    /// Build a primitive holding `value`
    pub fn of(value: impl Into<K::Value>) -> crate::Result<Self> {
        Self::builder().value(value).build()
    }

    pub fn builder() -> PrimitiveBuilder<K> {
        PrimitiveBuilder::default()
    }

    pub fn value(&self) -> Option<&K::Value> {
        self.value.as_ref()
    }

    pub fn to_builder(&self) -> PrimitiveBuilder<K> {
        PrimitiveBuilder {
            base: self.base.clone(),
            value: self.value.clone(),
        }
    }
}

impl<K: PrimitiveKind> Node for Primitive<K> {
    fn type_name(&self) -> &'static str {
        K::TYPE_NAME
    }

    fn kind(&self) -> NodeKind {
        NodeKind::Primitive
    }

    fn has_value(&self) -> bool {
        self.value.is_some()
    }

    fn has_children(&self) -> bool {
        !self.base.extension.is_empty()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl<K: PrimitiveKind> HasId for Primitive<K> {
    fn id(&self) -> Option<&str> {
        self.base.id.as_deref()
    }
}

impl<K: PrimitiveKind> HasExtensions for Primitive<K> {
    fn extension(&self) -> &[Extension] {
        &self.base.extension
    }
}

impl<K: PrimitiveKind> Visitable for Primitive<K> {
    fn accept_slot<V: Visitor + ?Sized>(
        &self,
        name: &str,
        slot: Slot,
        visitor: &mut V,
    ) -> Result<(), V::Error> {
        walk(self, name, slot, visitor, |visitor| {
            self.base.accept_children(visitor)?;
            match &self.value {
                Some(value) => visitor.visit_value("value", K::to_value(value)),
                None => Ok(()),
            }
        })
    }
}

#[derive(Debug, Clone)]
pub struct PrimitiveBuilder<K: PrimitiveKind> {
    base: ElementBase,
    value: Option<K::Value>,
}

impl<K: PrimitiveKind> Default for PrimitiveBuilder<K> {
    fn default() -> Self {
        Self {
            base: ElementBase::default(),
            value: None,
        }
    }
}

impl<K: PrimitiveKind> PrimitiveBuilder<K> {
    pub fn value(mut self, value: impl Into<K::Value>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn build(self) -> crate::Result<Primitive<K>> {
        self.build_with(&ModelConfig::global())
    }

    pub fn build_with(self, config: &ModelConfig) -> crate::Result<Primitive<K>> {
        self.base.validate(config)?;
        if let Some(value) = &self.value {
            K::check(value, config)?;
        }
        let primitive = Primitive {
            base: self.base,
            value: self.value,
            kind: PhantomData,
        };
        validation::require_value_or_children(&primitive)?;
        Ok(primitive)
    }
}

impl<K: PrimitiveKind> ElementBuilder for PrimitiveBuilder<K> {
    fn element_base_mut(&mut self) -> &mut ElementBase {
        &mut self.base
    }
}

// ============================================================================
// Kinds
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BooleanKind;

impl PrimitiveKind for BooleanKind {
    type Value = bool;
    const TYPE_NAME: &'static str = "boolean";

    fn check(_value: &bool, _config: &ModelConfig) -> crate::Result<()> {
        Ok(())
    }

    fn to_value(value: &bool) -> Value<'_> {
        Value::Boolean(*value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IntegerKind;

impl PrimitiveKind for IntegerKind {
    type Value = i32;
    const TYPE_NAME: &'static str = "integer";

    fn check(_value: &i32, _config: &ModelConfig) -> crate::Result<()> {
        Ok(())
    }

    fn to_value(value: &i32) -> Value<'_> {
        Value::Integer(i64::from(*value))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UnsignedIntKind;

impl PrimitiveKind for UnsignedIntKind {
    type Value = u32;
    const TYPE_NAME: &'static str = "unsignedInt";

    fn check(value: &u32, _config: &ModelConfig) -> crate::Result<()> {
        // unsignedInt shares the signed 32-bit range of integer
        if i32::try_from(*value).is_err() {
            return Err(crate::Error::invalid_value(
                "unsignedInt",
                format!("{} is greater than maximum allowed value: {}", value, i32::MAX),
            ));
        }
        Ok(())
    }

    fn to_value(value: &u32) -> Value<'_> {
        Value::Integer(i64::from(*value))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PositiveIntKind;

impl PrimitiveKind for PositiveIntKind {
    type Value = u32;
    const TYPE_NAME: &'static str = "positiveInt";

    fn check(value: &u32, _config: &ModelConfig) -> crate::Result<()> {
        if *value == 0 {
            return Err(crate::Error::invalid_value(
                "positiveInt",
                "0 is less than minimum allowed value: 1",
            ));
        }
        if i32::try_from(*value).is_err() {
            return Err(crate::Error::invalid_value(
                "positiveInt",
                format!("{} is greater than maximum allowed value: {}", value, i32::MAX),
            ));
        }
        Ok(())
    }

    fn to_value(value: &u32) -> Value<'_> {
        Value::Integer(i64::from(*value))
    }
}

/// Declares a string-valued primitive kind with its lexical check
macro_rules! string_kind {
    ($(#[$meta:meta])* $kind:ident, $name:literal, |$value:ident, $config:ident| $check:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $kind;

        impl PrimitiveKind for $kind {
            type Value = String;
            const TYPE_NAME: &'static str = $name;

            #[allow(unused_variables)]
            fn check($value: &String, $config: &ModelConfig) -> crate::Result<()> {
                $check
            }

            fn to_value(value: &String) -> Value<'_> {
                Value::String(value.as_str())
            }
        }
    };
}

string_kind!(StringKind, "string", |value, config| validation::check_string(value, config));
string_kind!(
    /// Kept in its lexical form; trailing zeros carry precision
    DecimalKind,
    "decimal",
    |value, config| validation::check_decimal(value)
);
string_kind!(MarkdownKind, "markdown", |value, config| validation::check_string(value, config));
string_kind!(CodeKind, "code", |value, config| validation::check_code(value, config));
string_kind!(IdKind, "id", |value, config| validation::check_id(value));
string_kind!(UriKind, "uri", |value, config| validation::check_uri(value, config));
string_kind!(UrlKind, "url", |value, config| validation::check_uri(value, config));
string_kind!(CanonicalKind, "canonical", |value, config| validation::check_uri(value, config));
string_kind!(DateTimeKind, "dateTime", |value, config| validation::check_date_time(value));
string_kind!(InstantKind, "instant", |value, config| validation::check_instant(value));
string_kind!(Base64BinaryKind, "base64Binary", |value, config| validation::check_base64(value));
string_kind!(XhtmlKind, "xhtml", |value, config| validation::check_xhtml(value));

/// Kind of a `code` bound to the required value set `E`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Bound<E>(PhantomData<E>);

impl<E: CodeEnum> PrimitiveKind for Bound<E> {
    type Value = E;
    const TYPE_NAME: &'static str = "code";

    fn check(_value: &E, _config: &ModelConfig) -> crate::Result<()> {
        Ok(())
    }

    fn to_value(value: &E) -> Value<'_> {
        Value::String(value.code())
    }
}

pub type Boolean = Primitive<BooleanKind>;
pub type Integer = Primitive<IntegerKind>;
pub type UnsignedInt = Primitive<UnsignedIntKind>;
pub type PositiveInt = Primitive<PositiveIntKind>;
pub type Decimal = Primitive<DecimalKind>;
pub type FhirString = Primitive<StringKind>;
pub type Markdown = Primitive<MarkdownKind>;
pub type Code = Primitive<CodeKind>;
pub type Id = Primitive<IdKind>;
pub type Uri = Primitive<UriKind>;
pub type Url = Primitive<UrlKind>;
pub type Canonical = Primitive<CanonicalKind>;
pub type DateTime = Primitive<DateTimeKind>;
pub type Instant = Primitive<InstantKind>;
pub type Base64Binary = Primitive<Base64BinaryKind>;
pub type Xhtml = Primitive<XhtmlKind>;
pub type BoundCode<E> = Primitive<Bound<E>>;

impl<E: CodeEnum> From<E> for Primitive<Bound<E>> {
    fn from(value: E) -> Self {
        Primitive {
            base: ElementBase::default(),
            value: Some(value),
            kind: PhantomData,
        }
    }
}

/// Declares a required-binding code enum
macro_rules! code_enum {
    (
        $(#[$meta:meta])*
        $name:ident($value_set:literal) {
            $($(#[$variant_meta:meta])* $variant:ident => $code:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        pub enum $name {
            $($(#[$variant_meta])* #[serde(rename = $code)] $variant),+
        }

        impl $crate::types::CodeEnum for $name {
            const VALUE_SET: &'static str = $value_set;

            fn code(self) -> &'static str {
                match self {
                    $($name::$variant => $code),+
                }
            }

            fn from_code(code: &str) -> Option<Self> {
                match code {
                    $($code => Some($name::$variant),)+
                    _ => None,
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str($crate::types::CodeEnum::code(*self))
            }
        }
    };
}

pub(crate) use code_enum;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::NarrativeStatus;
    use crate::visitor::PathVisitor;

    #[test]
    fn test_of_validates_value() {
        assert!(FhirString::of("hello").is_ok());
        assert!(FhirString::of("   ").is_err());
        assert!(Code::of("final").is_ok());
        assert!(Code::of("not  ok").is_err());
        assert!(Id::of("abc-123").is_ok());
        assert!(Id::of("abc_123").is_err());
        assert!(DateTime::of("2021-04-01").is_ok());
        assert!(DateTime::of("April 1st").is_err());
        assert!(UnsignedInt::of(42u32).is_ok());
        assert!(UnsignedInt::of(u32::MAX).is_err());
        assert!(PositiveInt::of(1u32).is_ok());
        assert!(PositiveInt::of(0u32).is_err());
        assert!(Decimal::of("-0.50").is_ok());
        assert!(Decimal::of("1.5e3").is_ok());
        assert!(Decimal::of("01.5").is_err());
        assert!(Decimal::of("1.").is_err());
    }

    #[test]
    fn test_empty_primitive_is_rejected() {
        let err = Boolean::builder().build().unwrap_err();
        assert!(matches!(err, crate::Error::EmptyElement("boolean")));

        let err = Boolean::builder().id("b1").build().unwrap_err();
        assert!(matches!(err, crate::Error::EmptyElement("boolean")));
    }

    #[test]
    fn test_extension_only_primitive_is_accepted() {
        let absent = crate::types::Extension::builder()
            .url("http://hl7.org/fhir/StructureDefinition/data-absent-reason")
            .value(Code::of("unknown").unwrap())
            .build()
            .unwrap();
        let primitive = DateTime::builder().add_extension(absent).build().unwrap();
        assert!(primitive.value().is_none());
        assert!(primitive.has_children());
        assert!(!primitive.has_value());
    }

    #[test]
    fn test_bound_code_from_enum() {
        let status = BoundCode::from(NarrativeStatus::Generated);
        assert_eq!(status.value(), Some(&NarrativeStatus::Generated));
        assert_eq!(status.type_name(), "code");
        assert_eq!(NarrativeStatus::from_code("extensions"), Some(NarrativeStatus::Extensions));
        assert_eq!(NarrativeStatus::Additional.to_string(), "additional");
    }

    #[test]
    fn test_to_builder_round_trip() {
        let original = Uri::builder()
            .id("u1")
            .value("http://example.org")
            .build()
            .unwrap();
        let copy = original.to_builder().build().unwrap();
        assert_eq!(original, copy);
        assert_eq!(copy.id(), Some("u1"));
    }

    #[test]
    fn test_value_visited_after_extensions() {
        let ext = crate::types::Extension::builder()
            .url("http://example.org/ext")
            .value(Boolean::of(true).unwrap())
            .build()
            .unwrap();
        let primitive = FhirString::builder()
            .add_extension(ext)
            .value("text")
            .build()
            .unwrap();

        let mut visitor = PathVisitor::new();
        primitive.accept("name", &mut visitor).unwrap();
        let paths: Vec<_> = visitor.paths().iter().map(|(p, _)| p.as_str()).collect();
        assert_eq!(
            paths,
            vec!["name", "name.extension[0]", "name.extension[0].valueBoolean"]
        );
    }
}
