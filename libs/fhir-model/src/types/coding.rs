use crate::config::ModelConfig;
use crate::node::{element_node, ElementBase};
use crate::types::{Boolean, Code, FhirString, Uri};
use crate::validation;
use crate::visitor::{accept_element, accept_list, walk, Slot, Visitable, Visitor};

/// A reference to a code defined by a terminology system
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Coding {
    base: ElementBase,
    system: Option<Uri>,
    version: Option<FhirString>,
    code: Option<Code>,
    display: Option<FhirString>,
    user_selected: Option<Boolean>,
}

impl Coding {
    pub fn builder() -> CodingBuilder {
        CodingBuilder::default()
    }

    pub fn system(&self) -> Option<&Uri> {
        self.system.as_ref()
    }

    pub fn version(&self) -> Option<&FhirString> {
        self.version.as_ref()
    }

    pub fn code(&self) -> Option<&Code> {
        self.code.as_ref()
    }

    pub fn display(&self) -> Option<&FhirString> {
        self.display.as_ref()
    }

    pub fn user_selected(&self) -> Option<&Boolean> {
        self.user_selected.as_ref()
    }

    pub fn to_builder(&self) -> CodingBuilder {
        CodingBuilder {
            base: self.base.clone(),
            system: self.system.clone(),
            version: self.version.clone(),
            code: self.code.clone(),
            display: self.display.clone(),
            user_selected: self.user_selected.clone(),
        }
    }
}

impl Visitable for Coding {
    fn accept_slot<V: Visitor + ?Sized>(
        &self,
        name: &str,
        slot: Slot,
        visitor: &mut V,
    ) -> Result<(), V::Error> {
        walk(self, name, slot, visitor, |visitor| {
            self.base.accept_children(visitor)?;
            accept_element(self.system.as_ref(), "system", visitor)?;
            accept_element(self.version.as_ref(), "version", visitor)?;
            accept_element(self.code.as_ref(), "code", visitor)?;
            accept_element(self.display.as_ref(), "display", visitor)?;
            accept_element(self.user_selected.as_ref(), "userSelected", visitor)
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct CodingBuilder {
    base: ElementBase,
    system: Option<Uri>,
    version: Option<FhirString>,
    code: Option<Code>,
    display: Option<FhirString>,
    user_selected: Option<Boolean>,
}

impl CodingBuilder {
    pub fn system(mut self, system: Uri) -> Self {
        self.system = Some(system);
        self
    }

    pub fn version(mut self, version: FhirString) -> Self {
        self.version = Some(version);
        self
    }

    pub fn code(mut self, code: Code) -> Self {
        self.code = Some(code);
        self
    }

    pub fn display(mut self, display: FhirString) -> Self {
        self.display = Some(display);
        self
    }

    pub fn user_selected(mut self, user_selected: Boolean) -> Self {
        self.user_selected = Some(user_selected);
        self
    }

    pub fn build(self) -> crate::Result<Coding> {
        self.build_with(&ModelConfig::global())
    }

    pub fn build_with(self, config: &ModelConfig) -> crate::Result<Coding> {
        self.base.validate(config)?;
        let coding = Coding {
            base: self.base,
            system: self.system,
            version: self.version,
            code: self.code,
            display: self.display,
            user_selected: self.user_selected,
        };
        validation::require_value_or_children(&coding)?;
        Ok(coding)
    }
}

element_node!(Coding, CodingBuilder, "Coding");

/// A concept given by one or more codings and/or text
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CodeableConcept {
    base: ElementBase,
    coding: Vec<Coding>,
    text: Option<FhirString>,
}

impl CodeableConcept {
    pub fn builder() -> CodeableConceptBuilder {
        CodeableConceptBuilder::default()
    }

    pub fn coding(&self) -> &[Coding] {
        &self.coding
    }

    pub fn text(&self) -> Option<&FhirString> {
        self.text.as_ref()
    }

    pub fn to_builder(&self) -> CodeableConceptBuilder {
        CodeableConceptBuilder {
            base: self.base.clone(),
            coding: self.coding.clone(),
            text: self.text.clone(),
        }
    }
}

impl Visitable for CodeableConcept {
    fn accept_slot<V: Visitor + ?Sized>(
        &self,
        name: &str,
        slot: Slot,
        visitor: &mut V,
    ) -> Result<(), V::Error> {
        walk(self, name, slot, visitor, |visitor| {
            self.base.accept_children(visitor)?;
            accept_list(&self.coding, "coding", "Coding", visitor)?;
            accept_element(self.text.as_ref(), "text", visitor)
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct CodeableConceptBuilder {
    base: ElementBase,
    coding: Vec<Coding>,
    text: Option<FhirString>,
}

impl CodeableConceptBuilder {
    pub fn add_coding(mut self, coding: Coding) -> Self {
        self.coding.push(coding);
        self
    }

    pub fn extend_coding(mut self, coding: impl IntoIterator<Item = Coding>) -> Self {
        self.coding.extend(coding);
        self
    }

    /// Replaces all codings
    pub fn coding(mut self, coding: impl IntoIterator<Item = Coding>) -> Self {
        self.coding = coding.into_iter().collect();
        self
    }

    pub fn text(mut self, text: FhirString) -> Self {
        self.text = Some(text);
        self
    }

    pub fn build(self) -> crate::Result<CodeableConcept> {
        self.build_with(&ModelConfig::global())
    }

    pub fn build_with(self, config: &ModelConfig) -> crate::Result<CodeableConcept> {
        self.base.validate(config)?;
        let concept = CodeableConcept {
            base: self.base,
            coding: self.coding,
            text: self.text,
        };
        validation::require_value_or_children(&concept)?;
        Ok(concept)
    }
}

element_node!(CodeableConcept, CodeableConceptBuilder, "CodeableConcept");
