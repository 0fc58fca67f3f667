//! FHIR data types: primitives, the complex types used by the shipped
//! resources and the open [`DataType`] union

mod annotation;
mod attachment;
mod coding;
mod contact_point;
mod data_type;
mod extension;
mod identifier;
mod meta;
mod period;
mod primitive;
mod quantity;

pub use annotation::{Annotation, AnnotationAuthor, AnnotationBuilder};
pub use attachment::{Attachment, AttachmentBuilder};
pub use coding::{CodeableConcept, CodeableConceptBuilder, Coding, CodingBuilder};
pub use contact_point::{ContactPoint, ContactPointBuilder, ContactPointSystem, ContactPointUse};
pub use data_type::{ChoiceType, DataType};
pub use extension::{Extension, ExtensionBuilder};
pub use identifier::{Identifier, IdentifierBuilder, IdentifierUse, Reference, ReferenceBuilder};
pub use meta::{Meta, MetaBuilder, Narrative, NarrativeBuilder, NarrativeStatus};
pub use period::{Period, PeriodBuilder};
pub use primitive::{
    Base64Binary, Base64BinaryKind, Boolean, BooleanKind, Bound, BoundCode, Canonical,
    CanonicalKind, Code, CodeEnum, CodeKind, DateTime, DateTimeKind, Decimal, DecimalKind,
    FhirString, Id, IdKind, Instant, InstantKind, Integer, IntegerKind, Markdown, MarkdownKind,
    PositiveInt, PositiveIntKind, Primitive, PrimitiveBuilder, PrimitiveKind, StringKind,
    UnsignedInt, UnsignedIntKind, Uri, UriKind, Url, UrlKind, Xhtml, XhtmlKind,
};
pub use quantity::{Quantity, QuantityBuilder, QuantityComparator};

pub(crate) use data_type::choice_type;
pub(crate) use primitive::code_enum;
