use crate::config::ModelConfig;
use crate::node::{element_node, ElementBase};
use crate::types::{code_enum, BoundCode, Canonical, Coding, Id, Instant, Uri, Xhtml};
use crate::validation;
use crate::visitor::{accept_element, accept_list, walk, Slot, Visitable, Visitor};

/// Metadata about a resource
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Meta {
    base: ElementBase,
    version_id: Option<Id>,
    last_updated: Option<Instant>,
    source: Option<Uri>,
    profile: Vec<Canonical>,
    security: Vec<Coding>,
    tag: Vec<Coding>,
}

impl Meta {
    pub fn builder() -> MetaBuilder {
        MetaBuilder::default()
    }

    pub fn version_id(&self) -> Option<&Id> {
        self.version_id.as_ref()
    }

    pub fn last_updated(&self) -> Option<&Instant> {
        self.last_updated.as_ref()
    }

    pub fn source(&self) -> Option<&Uri> {
        self.source.as_ref()
    }

    pub fn profile(&self) -> &[Canonical] {
        &self.profile
    }

    pub fn security(&self) -> &[Coding] {
        &self.security
    }

    pub fn tag(&self) -> &[Coding] {
        &self.tag
    }

    pub fn to_builder(&self) -> MetaBuilder {
        MetaBuilder {
            base: self.base.clone(),
            version_id: self.version_id.clone(),
            last_updated: self.last_updated.clone(),
            source: self.source.clone(),
            profile: self.profile.clone(),
            security: self.security.clone(),
            tag: self.tag.clone(),
        }
    }
}

impl Visitable for Meta {
    fn accept_slot<V: Visitor + ?Sized>(
        &self,
        name: &str,
        slot: Slot,
        visitor: &mut V,
    ) -> Result<(), V::Error> {
        walk(self, name, slot, visitor, |visitor| {
            self.base.accept_children(visitor)?;
            accept_element(self.version_id.as_ref(), "versionId", visitor)?;
            accept_element(self.last_updated.as_ref(), "lastUpdated", visitor)?;
            accept_element(self.source.as_ref(), "source", visitor)?;
            accept_list(&self.profile, "profile", "canonical", visitor)?;
            accept_list(&self.security, "security", "Coding", visitor)?;
            accept_list(&self.tag, "tag", "Coding", visitor)
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct MetaBuilder {
    base: ElementBase,
    version_id: Option<Id>,
    last_updated: Option<Instant>,
    source: Option<Uri>,
    profile: Vec<Canonical>,
    security: Vec<Coding>,
    tag: Vec<Coding>,
}

impl MetaBuilder {
    pub fn version_id(mut self, version_id: Id) -> Self {
        self.version_id = Some(version_id);
        self
    }

    pub fn last_updated(mut self, last_updated: Instant) -> Self {
        self.last_updated = Some(last_updated);
        self
    }

    pub fn source(mut self, source: Uri) -> Self {
        self.source = Some(source);
        self
    }

    pub fn add_profile(mut self, profile: Canonical) -> Self {
        self.profile.push(profile);
        self
    }

    pub fn extend_profile(mut self, profile: impl IntoIterator<Item = Canonical>) -> Self {
        self.profile.extend(profile);
        self
    }

    pub fn profile(mut self, profile: impl IntoIterator<Item = Canonical>) -> Self {
        self.profile = profile.into_iter().collect();
        self
    }

    pub fn add_security(mut self, security: Coding) -> Self {
        self.security.push(security);
        self
    }

    pub fn extend_security(mut self, security: impl IntoIterator<Item = Coding>) -> Self {
        self.security.extend(security);
        self
    }

    pub fn security(mut self, security: impl IntoIterator<Item = Coding>) -> Self {
        self.security = security.into_iter().collect();
        self
    }

    pub fn add_tag(mut self, tag: Coding) -> Self {
        self.tag.push(tag);
        self
    }

    pub fn extend_tag(mut self, tag: impl IntoIterator<Item = Coding>) -> Self {
        self.tag.extend(tag);
        self
    }

    pub fn tag(mut self, tag: impl IntoIterator<Item = Coding>) -> Self {
        self.tag = tag.into_iter().collect();
        self
    }

    pub fn build(self) -> crate::Result<Meta> {
        self.build_with(&ModelConfig::global())
    }

    pub fn build_with(self, config: &ModelConfig) -> crate::Result<Meta> {
        self.base.validate(config)?;
        let meta = Meta {
            base: self.base,
            version_id: self.version_id,
            last_updated: self.last_updated,
            source: self.source,
            profile: self.profile,
            security: self.security,
            tag: self.tag,
        };
        validation::require_value_or_children(&meta)?;
        Ok(meta)
    }
}

element_node!(Meta, MetaBuilder, "Meta");

code_enum! {
    /// How the narrative was produced
    NarrativeStatus("http://hl7.org/fhir/ValueSet/narrative-status") {
        Generated => "generated",
        Extensions => "extensions",
        Additional => "additional",
        Empty => "empty",
    }
}

/// Human-readable summary of a resource
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Narrative {
    base: ElementBase,
    status: BoundCode<NarrativeStatus>,
    div: Xhtml,
}

impl Narrative {
    pub fn builder() -> NarrativeBuilder {
        NarrativeBuilder::default()
    }

    pub fn status(&self) -> &BoundCode<NarrativeStatus> {
        &self.status
    }

    pub fn div(&self) -> &Xhtml {
        &self.div
    }

    pub fn to_builder(&self) -> NarrativeBuilder {
        NarrativeBuilder {
            base: self.base.clone(),
            status: Some(self.status.clone()),
            div: Some(self.div.clone()),
        }
    }
}

impl Visitable for Narrative {
    fn accept_slot<V: Visitor + ?Sized>(
        &self,
        name: &str,
        slot: Slot,
        visitor: &mut V,
    ) -> Result<(), V::Error> {
        walk(self, name, slot, visitor, |visitor| {
            self.base.accept_children(visitor)?;
            self.status.accept_slot("status", Slot::Single, visitor)?;
            self.div.accept_slot("div", Slot::Single, visitor)
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct NarrativeBuilder {
    base: ElementBase,
    status: Option<BoundCode<NarrativeStatus>>,
    div: Option<Xhtml>,
}

impl NarrativeBuilder {
    pub fn status(mut self, status: impl Into<BoundCode<NarrativeStatus>>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn div(mut self, div: Xhtml) -> Self {
        self.div = Some(div);
        self
    }

    pub fn build(self) -> crate::Result<Narrative> {
        self.build_with(&ModelConfig::global())
    }

    pub fn build_with(self, config: &ModelConfig) -> crate::Result<Narrative> {
        self.base.validate(config)?;
        let narrative = Narrative {
            base: self.base,
            status: validation::require_non_null(self.status, "status")?,
            div: validation::require_non_null(self.div, "div")?,
        };
        validation::require_value_or_children(&narrative)?;
        Ok(narrative)
    }
}

element_node!(Narrative, NarrativeBuilder, "Narrative");

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Code, CodeEnum};

    #[test]
    fn test_meta_lists() {
        let meta = Meta::builder()
            .version_id(Id::of("3").unwrap())
            .last_updated(Instant::of("2021-03-04T10:00:00Z").unwrap())
            .add_profile(Canonical::of("http://example.org/StructureDefinition/consent").unwrap())
            .add_tag(
                Coding::builder()
                    .code(Code::of("reviewed").unwrap())
                    .build()
                    .unwrap(),
            )
            .build()
            .unwrap();
        assert_eq!(meta.profile().len(), 1);
        assert_eq!(meta.tag().len(), 1);
        assert!(meta.security().is_empty());
        assert_eq!(meta.to_builder().build().unwrap(), meta);
    }

    #[test]
    fn test_narrative_requires_status_and_div() {
        let div = Xhtml::of("<div xmlns=\"http://www.w3.org/1999/xhtml\">Consent</div>").unwrap();
        let err = Narrative::builder().div(div.clone()).build().unwrap_err();
        assert_eq!(err.element(), Some("status"));

        let err = Narrative::builder()
            .status(NarrativeStatus::Generated)
            .build()
            .unwrap_err();
        assert_eq!(err.element(), Some("div"));

        let narrative = Narrative::builder()
            .status(NarrativeStatus::Generated)
            .div(div)
            .build()
            .unwrap();
        assert_eq!(narrative.status().value(), Some(&NarrativeStatus::Generated));
    }

    #[test]
    fn test_narrative_status_codes() {
        assert_eq!(NarrativeStatus::Empty.code(), "empty");
        assert_eq!(NarrativeStatus::from_code("bogus"), None);
        assert_eq!(
            serde_json::to_value(NarrativeStatus::Extensions).unwrap(),
            serde_json::json!("extensions")
        );
        assert_eq!(NarrativeStatus::VALUE_SET, "http://hl7.org/fhir/ValueSet/narrative-status");
    }
}
