use crate::config::ModelConfig;
use crate::node::{element_node, ElementBase};
use crate::types::DataType;
use crate::validation;
use crate::visitor::{accept_choice, accept_value, walk, Slot, Value, Visitable, Visitor};

/// Additional content defined by an implementation or profile
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Extension {
    base: ElementBase,
    url: String,
    value: Option<DataType>,
}

impl Extension {
    pub fn builder() -> ExtensionBuilder {
        ExtensionBuilder::default()
    }

    /// Identifies the meaning of the extension
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn value(&self) -> Option<&DataType> {
        self.value.as_ref()
    }

    pub fn to_builder(&self) -> ExtensionBuilder {
        ExtensionBuilder {
            base: self.base.clone(),
            url: Some(self.url.clone()),
            value: self.value.clone(),
        }
    }
}

impl Visitable for Extension {
    fn accept_slot<V: Visitor + ?Sized>(
        &self,
        name: &str,
        slot: Slot,
        visitor: &mut V,
    ) -> Result<(), V::Error> {
        walk(self, name, slot, visitor, |visitor| {
            self.base.accept_children(visitor)?;
            accept_value(Some(Value::String(&self.url)), "url", visitor)?;
            accept_choice(self.value.as_ref(), "value", visitor)
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct ExtensionBuilder {
    base: ElementBase,
    url: Option<String>,
    value: Option<DataType>,
}

impl ExtensionBuilder {
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn value(mut self, value: impl Into<DataType>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn build(self) -> crate::Result<Extension> {
        self.build_with(&ModelConfig::global())
    }

    pub fn build_with(self, config: &ModelConfig) -> crate::Result<Extension> {
        self.base.validate(config)?;
        let url = validation::require_non_null(self.url, "url")?;
        validation::check_uri(&url, config)?;
        let extension = Extension {
            base: self.base,
            url,
            value: validation::choice_element(self.value, "value")?,
        };
        validation::require_value_or_children(&extension)?;
        Ok(extension)
    }
}

element_node!(Extension, ExtensionBuilder, "Extension");
