//! FHIR object model
//!
//! Immutable, validated Rust values for FHIR data types and resources.
//!
//! # Module Organization
//!
//! - `node`: the contract every node implements (`Node`, `HasId`, `IsResource`, ...)
//! - `types`: primitives, complex data types and the open `DataType` union
//! - `resource`: resources (`Consent`, `Device`) and `AnyResource`
//! - `visitor`: the generic pre-order/post-order traversal protocol
//! - `validation`: build-time rules shared by every builder
//! - `config`: optional checks toggled through `ModelConfig`
//!
//! # Design Philosophy
//!
//! - **Built, then frozen**: nodes only come out of `Builder::build()`, which
//!   enforces required elements, choice types and value-or-children
//! - **Closed choices**: `source[x]` style elements are enums of their allowed types
//! - **One traversal**: encoders, validators and indexers implement `Visitor`
//!   instead of matching on every concrete type
//!
//! # Example
//!
//! ```rust
//! use ferrum_model::prelude::*;
//! use ferrum_model::resource::consent::ConsentState;
//!
//! let concept = |code: &str| -> ferrum_model::Result<CodeableConcept> {
//!     CodeableConcept::builder()
//!         .add_coding(Coding::builder().code(Code::of(code)?).build()?)
//!         .build()
//! };
//!
//! let consent = Consent::builder()
//!     .status(ConsentState::Active)
//!     .scope(concept("patient-privacy")?)
//!     .add_category(concept("59284-0")?)
//!     .build()?;
//! assert_eq!(consent.category().len(), 1);
//!
//! let missing = Consent::builder()
//!     .status(ConsentState::Active)
//!     .scope(concept("patient-privacy")?)
//!     .build()
//!     .unwrap_err();
//! assert_eq!(missing.element(), Some("category"));
//! # Ok::<(), ferrum_model::Error>(())
//! ```
//!
//! Built nodes expose repeating elements as slices, so they cannot be
//! modified after `build()`:
//!
//! ```compile_fail
//! use ferrum_model::prelude::*;
//! use ferrum_model::resource::consent::ConsentState;
//!
//! let category = CodeableConcept::builder()
//!     .text(FhirString::of("privacy").unwrap())
//!     .build()
//!     .unwrap();
//! let consent = Consent::builder()
//!     .status(ConsentState::Active)
//!     .scope(category.clone())
//!     .add_category(category.clone())
//!     .build()
//!     .unwrap();
//! consent.category().push(category);
//! ```

pub mod config;
pub mod error;
pub mod node;
pub mod resource;
pub mod resource_types;
pub mod types;
pub mod validation;
pub mod visitor;

pub use config::ModelConfig;
pub use error::{Error, Result};
pub use node::{Node, NodeKind};
pub use visitor::{Slot, Value, Visitable, Visitor};

/// Traits and types needed to build and walk the model
pub mod prelude {
    pub use crate::config::ModelConfig;
    pub use crate::error::Error;
    pub use crate::node::{
        BackboneElementBuilder, ElementBuilder, HasExtensions, HasId, HasModifierExtensions,
        IsBackboneElement, IsDomainResource, IsResource, Node, NodeKind, ResourceBuilder,
    };
    pub use crate::resource::{AnyResource, Consent, Device};
    pub use crate::types::{
        Annotation, Attachment, Boolean, BoundCode, ChoiceType, Code, CodeEnum, CodeableConcept,
        Coding, ContactPoint, DataType, DateTime, Extension, FhirString, Identifier, Markdown, Meta,
        Narrative, Period, Quantity, Reference, Uri,
    };
    pub use crate::visitor::{Slot, Value, Visitable, Visitor};
}
