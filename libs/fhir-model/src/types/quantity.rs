use crate::config::ModelConfig;
use crate::node::{element_node, ElementBase};
use crate::types::{code_enum, BoundCode, Code, Decimal, FhirString, Uri};
use crate::validation;
use crate::visitor::{accept_element, walk, Slot, Visitable, Visitor};

code_enum! {
    /// How an actual value relates to the stated one
    QuantityComparator("http://hl7.org/fhir/ValueSet/quantity-comparator") {
        LessThan => "<",
        LessOrEquals => "<=",
        GreaterOrEquals => ">=",
        GreaterThan => ">",
    }
}

/// A measured amount, or an amount that can potentially be measured
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Quantity {
    base: ElementBase,
    value: Option<Decimal>,
    comparator: Option<BoundCode<QuantityComparator>>,
    unit: Option<FhirString>,
    system: Option<Uri>,
    code: Option<Code>,
}

impl Quantity {
    pub fn builder() -> QuantityBuilder {
        QuantityBuilder::default()
    }

    pub fn value(&self) -> Option<&Decimal> {
        self.value.as_ref()
    }

    pub fn comparator(&self) -> Option<&BoundCode<QuantityComparator>> {
        self.comparator.as_ref()
    }

    /// Human-readable unit
    pub fn unit(&self) -> Option<&FhirString> {
        self.unit.as_ref()
    }

    pub fn system(&self) -> Option<&Uri> {
        self.system.as_ref()
    }

    /// Coded form of the unit, drawn from `system`
    pub fn code(&self) -> Option<&Code> {
        self.code.as_ref()
    }

    pub fn to_builder(&self) -> QuantityBuilder {
        QuantityBuilder {
            base: self.base.clone(),
            value: self.value.clone(),
            comparator: self.comparator.clone(),
            unit: self.unit.clone(),
            system: self.system.clone(),
            code: self.code.clone(),
        }
    }
}

impl Visitable for Quantity {
    fn accept_slot<V: Visitor + ?Sized>(
        &self,
        name: &str,
        slot: Slot,
        visitor: &mut V,
    ) -> Result<(), V::Error> {
        walk(self, name, slot, visitor, |visitor| {
            self.base.accept_children(visitor)?;
            accept_element(self.value.as_ref(), "value", visitor)?;
            accept_element(self.comparator.as_ref(), "comparator", visitor)?;
            accept_element(self.unit.as_ref(), "unit", visitor)?;
            accept_element(self.system.as_ref(), "system", visitor)?;
            accept_element(self.code.as_ref(), "code", visitor)
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct QuantityBuilder {
    base: ElementBase,
    value: Option<Decimal>,
    comparator: Option<BoundCode<QuantityComparator>>,
    unit: Option<FhirString>,
    system: Option<Uri>,
    code: Option<Code>,
}

impl QuantityBuilder {
    pub fn value(mut self, value: Decimal) -> Self {
        self.value = Some(value);
        self
    }

    pub fn comparator(mut self, comparator: impl Into<BoundCode<QuantityComparator>>) -> Self {
        self.comparator = Some(comparator.into());
        self
    }

    pub fn unit(mut self, unit: FhirString) -> Self {
        self.unit = Some(unit);
        self
    }

    pub fn system(mut self, system: Uri) -> Self {
        self.system = Some(system);
        self
    }

    pub fn code(mut self, code: Code) -> Self {
        self.code = Some(code);
        self
    }

    pub fn build(self) -> crate::Result<Quantity> {
        self.build_with(&ModelConfig::global())
    }

    pub fn build_with(self, config: &ModelConfig) -> crate::Result<Quantity> {
        self.base.validate(config)?;
        let quantity = Quantity {
            base: self.base,
            value: self.value,
            comparator: self.comparator,
            unit: self.unit,
            system: self.system,
            code: self.code,
        };
        validation::require_value_or_children(&quantity)?;
        Ok(quantity)
    }
}

element_node!(Quantity, QuantityBuilder, "Quantity");
