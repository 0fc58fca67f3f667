use crate::config::ModelConfig;
use crate::node::{element_node, ElementBase};
use crate::types::{code_enum, BoundCode, CodeableConcept, FhirString, Period, Uri};
use crate::validation;
use crate::visitor::{accept_element, walk, Slot, Visitable, Visitor};

code_enum! {
    /// Purpose of an identifier
    IdentifierUse("http://hl7.org/fhir/ValueSet/identifier-use") {
        Usual => "usual",
        Official => "official",
        Temp => "temp",
        Secondary => "secondary",
        Old => "old",
    }
}

/// An identifier intended for computation
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier {
    base: ElementBase,
    use_: Option<BoundCode<IdentifierUse>>,
    type_: Option<CodeableConcept>,
    system: Option<Uri>,
    value: Option<FhirString>,
    period: Option<Period>,
    assigner: Option<Reference>,
}

impl Identifier {
    pub const ASSIGNER: &'static [&'static str] = &["Organization"];

    pub fn builder() -> IdentifierBuilder {
        IdentifierBuilder::default()
    }

    pub fn use_(&self) -> Option<&BoundCode<IdentifierUse>> {
        self.use_.as_ref()
    }

    pub fn type_(&self) -> Option<&CodeableConcept> {
        self.type_.as_ref()
    }

    pub fn system(&self) -> Option<&Uri> {
        self.system.as_ref()
    }

    pub fn value(&self) -> Option<&FhirString> {
        self.value.as_ref()
    }

    pub fn period(&self) -> Option<&Period> {
        self.period.as_ref()
    }

    pub fn assigner(&self) -> Option<&Reference> {
        self.assigner.as_ref()
    }

    pub fn to_builder(&self) -> IdentifierBuilder {
        IdentifierBuilder {
            base: self.base.clone(),
            use_: self.use_.clone(),
            type_: self.type_.clone(),
            system: self.system.clone(),
            value: self.value.clone(),
            period: self.period.clone(),
            assigner: self.assigner.clone(),
        }
    }
}

impl Visitable for Identifier {
    fn accept_slot<V: Visitor + ?Sized>(
        &self,
        name: &str,
        slot: Slot,
        visitor: &mut V,
    ) -> Result<(), V::Error> {
        walk(self, name, slot, visitor, |visitor| {
            self.base.accept_children(visitor)?;
            accept_element(self.use_.as_ref(), "use", visitor)?;
            accept_element(self.type_.as_ref(), "type", visitor)?;
            accept_element(self.system.as_ref(), "system", visitor)?;
            accept_element(self.value.as_ref(), "value", visitor)?;
            accept_element(self.period.as_ref(), "period", visitor)?;
            accept_element(self.assigner.as_ref(), "assigner", visitor)
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct IdentifierBuilder {
    base: ElementBase,
    use_: Option<BoundCode<IdentifierUse>>,
    type_: Option<CodeableConcept>,
    system: Option<Uri>,
    value: Option<FhirString>,
    period: Option<Period>,
    assigner: Option<Reference>,
}

impl IdentifierBuilder {
    pub fn use_(mut self, use_: impl Into<BoundCode<IdentifierUse>>) -> Self {
        self.use_ = Some(use_.into());
        self
    }

    pub fn type_(mut self, type_: CodeableConcept) -> Self {
        self.type_ = Some(type_);
        self
    }

    pub fn system(mut self, system: Uri) -> Self {
        self.system = Some(system);
        self
    }

    pub fn value(mut self, value: FhirString) -> Self {
        self.value = Some(value);
        self
    }

    pub fn period(mut self, period: Period) -> Self {
        self.period = Some(period);
        self
    }

    pub fn assigner(mut self, assigner: Reference) -> Self {
        self.assigner = Some(assigner);
        self
    }

    pub fn build(self) -> crate::Result<Identifier> {
        self.build_with(&ModelConfig::global())
    }

    pub fn build_with(self, config: &ModelConfig) -> crate::Result<Identifier> {
        self.base.validate(config)?;
        validation::check_reference_type(self.assigner.as_ref(), "assigner", Identifier::ASSIGNER, config)?;
        let identifier = Identifier {
            base: self.base,
            use_: self.use_,
            type_: self.type_,
            system: self.system,
            value: self.value,
            period: self.period,
            assigner: self.assigner,
        };
        validation::require_value_or_children(&identifier)?;
        Ok(identifier)
    }
}

element_node!(Identifier, IdentifierBuilder, "Identifier");

/// A reference from one resource to another
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Reference {
    base: ElementBase,
    reference: Option<FhirString>,
    type_: Option<Uri>,
    identifier: Option<Box<Identifier>>,
    display: Option<FhirString>,
}

impl Reference {
    pub fn builder() -> ReferenceBuilder {
        ReferenceBuilder::default()
    }

    /// Literal reference: relative, internal (`#id`) or absolute URL
    pub fn reference(&self) -> Option<&FhirString> {
        self.reference.as_ref()
    }

    /// Type the reference refers to, e.g. `Patient`
    pub fn type_(&self) -> Option<&Uri> {
        self.type_.as_ref()
    }

    /// Logical reference, when the literal reference is not known
    pub fn identifier(&self) -> Option<&Identifier> {
        self.identifier.as_deref()
    }

    pub fn display(&self) -> Option<&FhirString> {
        self.display.as_ref()
    }

    pub fn to_builder(&self) -> ReferenceBuilder {
        ReferenceBuilder {
            base: self.base.clone(),
            reference: self.reference.clone(),
            type_: self.type_.clone(),
            identifier: self.identifier.clone(),
            display: self.display.clone(),
        }
    }
}

impl Visitable for Reference {
    fn accept_slot<V: Visitor + ?Sized>(
        &self,
        name: &str,
        slot: Slot,
        visitor: &mut V,
    ) -> Result<(), V::Error> {
        walk(self, name, slot, visitor, |visitor| {
            self.base.accept_children(visitor)?;
            accept_element(self.reference.as_ref(), "reference", visitor)?;
            accept_element(self.type_.as_ref(), "type", visitor)?;
            accept_element(self.identifier.as_deref(), "identifier", visitor)?;
            accept_element(self.display.as_ref(), "display", visitor)
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct ReferenceBuilder {
    base: ElementBase,
    reference: Option<FhirString>,
    type_: Option<Uri>,
    identifier: Option<Box<Identifier>>,
    display: Option<FhirString>,
}

impl ReferenceBuilder {
    pub fn reference(mut self, reference: FhirString) -> Self {
        self.reference = Some(reference);
        self
    }

    pub fn type_(mut self, type_: Uri) -> Self {
        self.type_ = Some(type_);
        self
    }

    pub fn identifier(mut self, identifier: Identifier) -> Self {
        self.identifier = Some(Box::new(identifier));
        self
    }

    pub fn display(mut self, display: FhirString) -> Self {
        self.display = Some(display);
        self
    }

    pub fn build(self) -> crate::Result<Reference> {
        self.build_with(&ModelConfig::global())
    }

    pub fn build_with(self, config: &ModelConfig) -> crate::Result<Reference> {
        self.base.validate(config)?;
        let reference = Reference {
            base: self.base,
            reference: self.reference,
            type_: self.type_,
            identifier: self.identifier,
            display: self.display,
        };
        validation::require_value_or_children(&reference)?;
        Ok(reference)
    }
}

element_node!(Reference, ReferenceBuilder, "Reference");

#[cfg(test)]
mod tests {
    use super::*;

    fn organization(literal: &str) -> Reference {
        Reference::builder()
            .reference(FhirString::of(literal).unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn test_logical_reference() {
        let identifier = Identifier::builder()
            .system(Uri::of("http://hl7.org/fhir/sid/us-npi").unwrap())
            .value(FhirString::of("1234567893").unwrap())
            .build()
            .unwrap();
        let reference = Reference::builder()
            .identifier(identifier.clone())
            .display(FhirString::of("Dr. Adams").unwrap())
            .build()
            .unwrap();
        assert_eq!(reference.identifier(), Some(&identifier));
        assert!(reference.reference().is_none());
        assert_eq!(reference.to_builder().build().unwrap(), reference);
    }

    #[test]
    fn test_assigner_must_be_organization() {
        let ok = Identifier::builder()
            .value(FhirString::of("A-1").unwrap())
            .assigner(organization("Organization/acme"))
            .build();
        assert!(ok.is_ok());

        let err = Identifier::builder()
            .value(FhirString::of("A-1").unwrap())
            .assigner(organization("Patient/1"))
            .build_with(&ModelConfig::default())
            .unwrap_err();
        assert_eq!(err.element(), Some("assigner"));

        let relaxed = ModelConfig {
            check_reference_types: false,
            ..ModelConfig::default()
        };
        assert!(Identifier::builder()
            .assigner(organization("Patient/1"))
            .build_with(&relaxed)
            .is_ok());
    }

    #[test]
    fn test_identifier_use_is_bound() {
        use crate::types::CodeEnum;
        use crate::visitor::CollectingVisitor;

        let identifier = Identifier::builder()
            .use_(IdentifierUse::Official)
            .value(FhirString::of("MRN-7").unwrap())
            .build()
            .unwrap();
        assert_eq!(identifier.use_().and_then(|u| u.value()), Some(&IdentifierUse::Official));
        assert_eq!(IdentifierUse::from_code("temp"), Some(IdentifierUse::Temp));
        assert_eq!(IdentifierUse::from_code("primary"), None);

        let mut codes = CollectingVisitor::<BoundCode<IdentifierUse>>::new();
        identifier.accept("Identifier", &mut codes).unwrap();
        assert_eq!(codes.result().len(), 1);
    }

    #[test]
    fn test_empty_reference_rejected() {
        let err = Reference::builder().build().unwrap_err();
        assert!(matches!(err, crate::Error::EmptyElement("Reference")));
    }
}
