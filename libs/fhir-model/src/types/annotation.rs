use crate::config::ModelConfig;
use crate::node::{element_node, ElementBase};
use crate::types::{choice_type, DataType, DateTime, FhirString, Markdown, Reference};
use crate::validation;
use crate::visitor::{accept_choice, accept_element, walk, Slot, Visitable, Visitor};

choice_type! {
    /// `Annotation.author[x]`
    AnnotationAuthor {
        Reference(Reference) = "Reference",
        String(FhirString) = "string",
    }
}

/// A text note with attribution
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Annotation {
    base: ElementBase,
    author: Option<AnnotationAuthor>,
    time: Option<DateTime>,
    text: Markdown,
}

impl Annotation {
    pub const AUTHOR: &'static [&'static str] = &["Practitioner", "Patient", "RelatedPerson", "Organization"];

    pub fn builder() -> AnnotationBuilder {
        AnnotationBuilder::default()
    }

    pub fn author(&self) -> Option<&AnnotationAuthor> {
        self.author.as_ref()
    }

    pub fn time(&self) -> Option<&DateTime> {
        self.time.as_ref()
    }

    pub fn text(&self) -> &Markdown {
        &self.text
    }

    pub fn to_builder(&self) -> AnnotationBuilder {
        AnnotationBuilder {
            base: self.base.clone(),
            author: self.author.clone().map(DataType::from),
            time: self.time.clone(),
            text: Some(self.text.clone()),
        }
    }
}

impl Visitable for Annotation {
    fn accept_slot<V: Visitor + ?Sized>(
        &self,
        name: &str,
        slot: Slot,
        visitor: &mut V,
    ) -> Result<(), V::Error> {
        walk(self, name, slot, visitor, |visitor| {
            self.base.accept_children(visitor)?;
            accept_choice(self.author.as_ref(), "author", visitor)?;
            accept_element(self.time.as_ref(), "time", visitor)?;
            self.text.accept_slot("text", Slot::Single, visitor)
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct AnnotationBuilder {
    base: ElementBase,
    author: Option<DataType>,
    time: Option<DateTime>,
    text: Option<Markdown>,
}

impl AnnotationBuilder {
    /// `Reference` or `string`; anything else fails at build
    pub fn author(mut self, author: impl Into<DataType>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn time(mut self, time: DateTime) -> Self {
        self.time = Some(time);
        self
    }

    pub fn text(mut self, text: Markdown) -> Self {
        self.text = Some(text);
        self
    }

    pub fn build(self) -> crate::Result<Annotation> {
        self.build_with(&ModelConfig::global())
    }

    pub fn build_with(self, config: &ModelConfig) -> crate::Result<Annotation> {
        self.base.validate(config)?;
        let text = validation::require_non_null(self.text, "text")?;
        let author = validation::choice_element::<AnnotationAuthor>(self.author, "author")?;
        if let Some(AnnotationAuthor::Reference(reference)) = &author {
            validation::check_reference_type(Some(reference), "author", Annotation::AUTHOR, config)?;
        }
        let annotation = Annotation {
            base: self.base,
            author,
            time: self.time,
            text,
        };
        validation::require_value_or_children(&annotation)?;
        Ok(annotation)
    }
}

element_node!(Annotation, AnnotationBuilder, "Annotation");
