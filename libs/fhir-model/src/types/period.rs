use crate::config::ModelConfig;
use crate::node::{element_node, ElementBase};
use crate::types::DateTime;
use crate::validation;
use crate::visitor::{accept_element, walk, Slot, Visitable, Visitor};

/// Time range defined by start and end date/time
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Period {
    base: ElementBase,
    start: Option<DateTime>,
    end: Option<DateTime>,
}

impl Period {
    pub fn builder() -> PeriodBuilder {
        PeriodBuilder::default()
    }

    pub fn start(&self) -> Option<&DateTime> {
        self.start.as_ref()
    }

    /// Absent when the period is ongoing
    pub fn end(&self) -> Option<&DateTime> {
        self.end.as_ref()
    }

    pub fn to_builder(&self) -> PeriodBuilder {
        PeriodBuilder {
            base: self.base.clone(),
            start: self.start.clone(),
            end: self.end.clone(),
        }
    }
}

impl Visitable for Period {
    fn accept_slot<V: Visitor + ?Sized>(
        &self,
        name: &str,
        slot: Slot,
        visitor: &mut V,
    ) -> Result<(), V::Error> {
        walk(self, name, slot, visitor, |visitor| {
            self.base.accept_children(visitor)?;
            accept_element(self.start.as_ref(), "start", visitor)?;
            accept_element(self.end.as_ref(), "end", visitor)
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct PeriodBuilder {
    base: ElementBase,
    start: Option<DateTime>,
    end: Option<DateTime>,
}

impl PeriodBuilder {
    pub fn start(mut self, start: DateTime) -> Self {
        self.start = Some(start);
        self
    }

    pub fn end(mut self, end: DateTime) -> Self {
        self.end = Some(end);
        self
    }

    pub fn build(self) -> crate::Result<Period> {
        self.build_with(&ModelConfig::global())
    }

    pub fn build_with(self, config: &ModelConfig) -> crate::Result<Period> {
        self.base.validate(config)?;
        let period = Period {
            base: self.base,
            start: self.start,
            end: self.end,
        };
        validation::require_value_or_children(&period)?;
        Ok(period)
    }
}

element_node!(Period, PeriodBuilder, "Period");

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Boolean, Extension};
    use crate::node::ElementBuilder;

    #[test]
    fn test_open_ended_period() {
        let period = Period::builder()
            .start(DateTime::of("2021-01-01").unwrap())
            .build()
            .unwrap();
        assert!(period.end().is_none());
        assert_eq!(period.to_builder().build().unwrap(), period);
    }

    #[test]
    fn test_extension_counts_as_child() {
        let ext = Extension::builder()
            .url("http://example.org/estimated")
            .value(Boolean::of(true).unwrap())
            .build()
            .unwrap();
        assert!(Period::builder().add_extension(ext).build().is_ok());
        assert!(Period::builder().build().is_err());
    }
}
