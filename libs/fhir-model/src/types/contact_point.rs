use crate::config::ModelConfig;
use crate::node::{element_node, ElementBase};
use crate::types::{code_enum, BoundCode, FhirString, Period, PositiveInt};
use crate::validation;
use crate::visitor::{accept_element, walk, Slot, Visitable, Visitor};

code_enum! {
    ContactPointSystem("http://hl7.org/fhir/ValueSet/contact-point-system") {
        Phone => "phone",
        Fax => "fax",
        Email => "email",
        Pager => "pager",
        Url => "url",
        Sms => "sms",
        Other => "other",
    }
}

code_enum! {
    ContactPointUse("http://hl7.org/fhir/ValueSet/contact-point-use") {
        Home => "home",
        Work => "work",
        Temp => "temp",
        Old => "old",
        Mobile => "mobile",
    }
}

/// Details of a technology-mediated contact point (phone, email, etc.)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContactPoint {
    base: ElementBase,
    system: Option<BoundCode<ContactPointSystem>>,
    value: Option<FhirString>,
    use_: Option<BoundCode<ContactPointUse>>,
    rank: Option<PositiveInt>,
    period: Option<Period>,
}

impl ContactPoint {
    pub fn builder() -> ContactPointBuilder {
        ContactPointBuilder::default()
    }

    pub fn system(&self) -> Option<&BoundCode<ContactPointSystem>> {
        self.system.as_ref()
    }

    pub fn value(&self) -> Option<&FhirString> {
        self.value.as_ref()
    }

    pub fn use_(&self) -> Option<&BoundCode<ContactPointUse>> {
        self.use_.as_ref()
    }

    /// Preference order; 1 is the most preferred
    pub fn rank(&self) -> Option<&PositiveInt> {
        self.rank.as_ref()
    }

    pub fn period(&self) -> Option<&Period> {
        self.period.as_ref()
    }

    pub fn to_builder(&self) -> ContactPointBuilder {
        ContactPointBuilder {
            base: self.base.clone(),
            system: self.system.clone(),
            value: self.value.clone(),
            use_: self.use_.clone(),
            rank: self.rank.clone(),
            period: self.period.clone(),
        }
    }
}

impl Visitable for ContactPoint {
    fn accept_slot<V: Visitor + ?Sized>(
        &self,
        name: &str,
        slot: Slot,
        visitor: &mut V,
    ) -> Result<(), V::Error> {
        walk(self, name, slot, visitor, |visitor| {
            self.base.accept_children(visitor)?;
            accept_element(self.system.as_ref(), "system", visitor)?;
            accept_element(self.value.as_ref(), "value", visitor)?;
            accept_element(self.use_.as_ref(), "use", visitor)?;
            accept_element(self.rank.as_ref(), "rank", visitor)?;
            accept_element(self.period.as_ref(), "period", visitor)
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct ContactPointBuilder {
    base: ElementBase,
    system: Option<BoundCode<ContactPointSystem>>,
    value: Option<FhirString>,
    use_: Option<BoundCode<ContactPointUse>>,
    rank: Option<PositiveInt>,
    period: Option<Period>,
}

impl ContactPointBuilder {
    pub fn system(mut self, system: impl Into<BoundCode<ContactPointSystem>>) -> Self {
        self.system = Some(system.into());
        self
    }

    pub fn value(mut self, value: FhirString) -> Self {
        self.value = Some(value);
        self
    }

    pub fn use_(mut self, use_: impl Into<BoundCode<ContactPointUse>>) -> Self {
        self.use_ = Some(use_.into());
        self
    }

    pub fn rank(mut self, rank: PositiveInt) -> Self {
        self.rank = Some(rank);
        self
    }

    pub fn period(mut self, period: Period) -> Self {
        self.period = Some(period);
        self
    }

    pub fn build(self) -> crate::Result<ContactPoint> {
        self.build_with(&ModelConfig::global())
    }

    pub fn build_with(self, config: &ModelConfig) -> crate::Result<ContactPoint> {
        self.base.validate(config)?;
        let contact_point = ContactPoint {
            base: self.base,
            system: self.system,
            value: self.value,
            use_: self.use_,
            rank: self.rank,
            period: self.period,
        };
        validation::require_value_or_children(&contact_point)?;
        Ok(contact_point)
    }
}

element_node!(ContactPoint, ContactPointBuilder, "ContactPoint");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_point_round_trip() {
        let contact = ContactPoint::builder()
            .system(ContactPointSystem::Phone)
            .value(FhirString::of("+1 555 0100").unwrap())
            .use_(ContactPointUse::Work)
            .rank(PositiveInt::of(1u32).unwrap())
            .build()
            .unwrap();
        assert_eq!(contact.system().and_then(|s| s.value()), Some(&ContactPointSystem::Phone));
        assert_eq!(contact.to_builder().build().unwrap(), contact);
        assert!(ContactPoint::builder().build().is_err());
    }
}
