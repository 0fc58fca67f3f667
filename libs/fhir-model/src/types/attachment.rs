use crate::config::ModelConfig;
use crate::node::{element_node, ElementBase};
use crate::types::{Base64Binary, Code, DateTime, FhirString, UnsignedInt, Url};
use crate::validation;
use crate::visitor::{accept_element, walk, Slot, Visitable, Visitor};

/// Content in a format defined elsewhere, inline or by URL
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Attachment {
    base: ElementBase,
    content_type: Option<Code>,
    language: Option<Code>,
    data: Option<Base64Binary>,
    url: Option<Url>,
    size: Option<UnsignedInt>,
    hash: Option<Base64Binary>,
    title: Option<FhirString>,
    creation: Option<DateTime>,
}

impl Attachment {
    pub fn builder() -> AttachmentBuilder {
        AttachmentBuilder::default()
    }

    /// Mime type of the content
    pub fn content_type(&self) -> Option<&Code> {
        self.content_type.as_ref()
    }

    pub fn language(&self) -> Option<&Code> {
        self.language.as_ref()
    }

    pub fn data(&self) -> Option<&Base64Binary> {
        self.data.as_ref()
    }

    pub fn url(&self) -> Option<&Url> {
        self.url.as_ref()
    }

    /// Number of bytes of content before base64 encoding
    pub fn size(&self) -> Option<&UnsignedInt> {
        self.size.as_ref()
    }

    /// SHA-1 of the data, base64 encoded
    pub fn hash(&self) -> Option<&Base64Binary> {
        self.hash.as_ref()
    }

    pub fn title(&self) -> Option<&FhirString> {
        self.title.as_ref()
    }

    pub fn creation(&self) -> Option<&DateTime> {
        self.creation.as_ref()
    }

    pub fn to_builder(&self) -> AttachmentBuilder {
        AttachmentBuilder {
            base: self.base.clone(),
            content_type: self.content_type.clone(),
            language: self.language.clone(),
            data: self.data.clone(),
            url: self.url.clone(),
            size: self.size.clone(),
            hash: self.hash.clone(),
            title: self.title.clone(),
            creation: self.creation.clone(),
        }
    }
}

impl Visitable for Attachment {
    fn accept_slot<V: Visitor + ?Sized>(
        &self,
        name: &str,
        slot: Slot,
        visitor: &mut V,
    ) -> Result<(), V::Error> {
        walk(self, name, slot, visitor, |visitor| {
            self.base.accept_children(visitor)?;
            accept_element(self.content_type.as_ref(), "contentType", visitor)?;
            accept_element(self.language.as_ref(), "language", visitor)?;
            accept_element(self.data.as_ref(), "data", visitor)?;
            accept_element(self.url.as_ref(), "url", visitor)?;
            accept_element(self.size.as_ref(), "size", visitor)?;
            accept_element(self.hash.as_ref(), "hash", visitor)?;
            accept_element(self.title.as_ref(), "title", visitor)?;
            accept_element(self.creation.as_ref(), "creation", visitor)
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct AttachmentBuilder {
    base: ElementBase,
    content_type: Option<Code>,
    language: Option<Code>,
    data: Option<Base64Binary>,
    url: Option<Url>,
    size: Option<UnsignedInt>,
    hash: Option<Base64Binary>,
    title: Option<FhirString>,
    creation: Option<DateTime>,
}

impl AttachmentBuilder {
    pub fn content_type(mut self, content_type: Code) -> Self {
        self.content_type = Some(content_type);
        self
    }

    pub fn language(mut self, language: Code) -> Self {
        self.language = Some(language);
        self
    }

    pub fn data(mut self, data: Base64Binary) -> Self {
        self.data = Some(data);
        self
    }

    pub fn url(mut self, url: Url) -> Self {
        self.url = Some(url);
        self
    }

    pub fn size(mut self, size: UnsignedInt) -> Self {
        self.size = Some(size);
        self
    }

    pub fn hash(mut self, hash: Base64Binary) -> Self {
        self.hash = Some(hash);
        self
    }

    pub fn title(mut self, title: FhirString) -> Self {
        self.title = Some(title);
        self
    }

    pub fn creation(mut self, creation: DateTime) -> Self {
        self.creation = Some(creation);
        self
    }

    pub fn build(self) -> crate::Result<Attachment> {
        self.build_with(&ModelConfig::global())
    }

    pub fn build_with(self, config: &ModelConfig) -> crate::Result<Attachment> {
        self.base.validate(config)?;
        let attachment = Attachment {
            base: self.base,
            content_type: self.content_type,
            language: self.language,
            data: self.data,
            url: self.url,
            size: self.size,
            hash: self.hash,
            title: self.title,
            creation: self.creation,
        };
        validation::require_value_or_children(&attachment)?;
        Ok(attachment)
    }
}

element_node!(Attachment, AttachmentBuilder, "Attachment");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inline_attachment() {
        let attachment = Attachment::builder()
            .content_type(Code::of("text/plain").unwrap())
            .data(Base64Binary::of("aGVsbG8=").unwrap())
            .size(UnsignedInt::of(5u32).unwrap())
            .title(FhirString::of("greeting.txt").unwrap())
            .build()
            .unwrap();
        assert_eq!(attachment.size().and_then(|s| s.value()), Some(&5));
        assert_eq!(attachment.to_builder().build().unwrap(), attachment);
    }

    #[test]
    fn test_invalid_data_rejected_at_primitive() {
        assert!(Base64Binary::of("not base64!").is_err());
    }
}
