//! Device: a manufactured item used in the provision of healthcare

use crate::config::ModelConfig;
use crate::node::{backbone_node, resource_node, BackboneBase, ResourceBase};
use crate::types::{
    code_enum, Annotation, Base64Binary, BoundCode, CodeableConcept, ContactPoint, DateTime,
    FhirString, Identifier, Quantity, Reference, Uri,
};
use crate::validation;
use crate::visitor::{accept_element, accept_list, walk, Slot, Visitable, Visitor};

code_enum! {
    /// Availability status of the device
    DeviceStatus("http://hl7.org/fhir/ValueSet/device-status") {
        Active => "active",
        Inactive => "inactive",
        EnteredInError => "entered-in-error",
        Unknown => "unknown",
    }
}

code_enum! {
    /// How a UDI was captured
    UdiEntryType("http://hl7.org/fhir/ValueSet/udi-entry-type") {
        Barcode => "barcode",
        Rfid => "rfid",
        Manual => "manual",
        Card => "card",
        SelfReported => "self-reported",
        Unknown => "unknown",
    }
}

code_enum! {
    DeviceNameType("http://hl7.org/fhir/ValueSet/device-nametype") {
        UdiLabelName => "udi-label-name",
        UserFriendlyName => "user-friendly-name",
        PatientReportedName => "patient-reported-name",
        ManufacturerName => "manufacturer-name",
        ModelName => "model-name",
        Other => "other",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Device {
    base: ResourceBase,
    identifier: Vec<Identifier>,
    definition: Option<Reference>,
    udi_carrier: Vec<UdiCarrier>,
    status: Option<BoundCode<DeviceStatus>>,
    status_reason: Vec<CodeableConcept>,
    distinct_identifier: Option<FhirString>,
    manufacturer: Option<FhirString>,
    manufacture_date: Option<DateTime>,
    expiration_date: Option<DateTime>,
    lot_number: Option<FhirString>,
    serial_number: Option<FhirString>,
    device_name: Vec<DeviceName>,
    model_number: Option<FhirString>,
    part_number: Option<FhirString>,
    type_: Option<CodeableConcept>,
    specialization: Vec<Specialization>,
    version: Vec<DeviceVersion>,
    property: Vec<Property>,
    patient: Option<Reference>,
    owner: Option<Reference>,
    contact: Vec<ContactPoint>,
    location: Option<Reference>,
    url: Option<Uri>,
    note: Vec<Annotation>,
    safety: Vec<CodeableConcept>,
    parent: Option<Reference>,
}

impl Device {
    pub const DEFINITION: &'static [&'static str] = &["DeviceDefinition"];
    pub const PATIENT: &'static [&'static str] = &["Patient"];
    pub const OWNER: &'static [&'static str] = &["Organization"];
    pub const LOCATION: &'static [&'static str] = &["Location"];
    pub const PARENT: &'static [&'static str] = &["Device"];

    pub fn builder() -> DeviceBuilder {
        DeviceBuilder::default()
    }

    pub fn identifier(&self) -> &[Identifier] {
        &self.identifier
    }

    pub fn definition(&self) -> Option<&Reference> {
        self.definition.as_ref()
    }

    /// One entry per jurisdiction the device is labelled for
    pub fn udi_carrier(&self) -> &[UdiCarrier] {
        &self.udi_carrier
    }

    pub fn status(&self) -> Option<&BoundCode<DeviceStatus>> {
        self.status.as_ref()
    }

    pub fn status_reason(&self) -> &[CodeableConcept] {
        &self.status_reason
    }

    pub fn distinct_identifier(&self) -> Option<&FhirString> {
        self.distinct_identifier.as_ref()
    }

    pub fn manufacturer(&self) -> Option<&FhirString> {
        self.manufacturer.as_ref()
    }

    pub fn manufacture_date(&self) -> Option<&DateTime> {
        self.manufacture_date.as_ref()
    }

    pub fn expiration_date(&self) -> Option<&DateTime> {
        self.expiration_date.as_ref()
    }

    pub fn lot_number(&self) -> Option<&FhirString> {
        self.lot_number.as_ref()
    }

    pub fn serial_number(&self) -> Option<&FhirString> {
        self.serial_number.as_ref()
    }

    pub fn device_name(&self) -> &[DeviceName] {
        &self.device_name
    }

    pub fn model_number(&self) -> Option<&FhirString> {
        self.model_number.as_ref()
    }

    pub fn part_number(&self) -> Option<&FhirString> {
        self.part_number.as_ref()
    }

    pub fn type_(&self) -> Option<&CodeableConcept> {
        self.type_.as_ref()
    }

    pub fn specialization(&self) -> &[Specialization] {
        &self.specialization
    }

    pub fn version(&self) -> &[DeviceVersion] {
        &self.version
    }

    pub fn property(&self) -> &[Property] {
        &self.property
    }

    pub fn patient(&self) -> Option<&Reference> {
        self.patient.as_ref()
    }

    pub fn owner(&self) -> Option<&Reference> {
        self.owner.as_ref()
    }

    /// Network addresses on which the device may be contacted directly
    pub fn contact(&self) -> &[ContactPoint] {
        &self.contact
    }

    pub fn location(&self) -> Option<&Reference> {
        self.location.as_ref()
    }

    pub fn url(&self) -> Option<&Uri> {
        self.url.as_ref()
    }

    pub fn note(&self) -> &[Annotation] {
        &self.note
    }

    pub fn safety(&self) -> &[CodeableConcept] {
        &self.safety
    }

    pub fn parent(&self) -> Option<&Reference> {
        self.parent.as_ref()
    }

    pub fn to_builder(&self) -> DeviceBuilder {
        DeviceBuilder {
            base: self.base.clone(),
            identifier: self.identifier.clone(),
            definition: self.definition.clone(),
            udi_carrier: self.udi_carrier.clone(),
            status: self.status.clone(),
            status_reason: self.status_reason.clone(),
            distinct_identifier: self.distinct_identifier.clone(),
            manufacturer: self.manufacturer.clone(),
            manufacture_date: self.manufacture_date.clone(),
            expiration_date: self.expiration_date.clone(),
            lot_number: self.lot_number.clone(),
            serial_number: self.serial_number.clone(),
            device_name: self.device_name.clone(),
            model_number: self.model_number.clone(),
            part_number: self.part_number.clone(),
            type_: self.type_.clone(),
            specialization: self.specialization.clone(),
            version: self.version.clone(),
            property: self.property.clone(),
            patient: self.patient.clone(),
            owner: self.owner.clone(),
            contact: self.contact.clone(),
            location: self.location.clone(),
            url: self.url.clone(),
            note: self.note.clone(),
            safety: self.safety.clone(),
            parent: self.parent.clone(),
        }
    }
}

impl Visitable for Device {
    fn accept_slot<V: Visitor + ?Sized>(
        &self,
        name: &str,
        slot: Slot,
        visitor: &mut V,
    ) -> Result<(), V::Error> {
        walk(self, name, slot, visitor, |visitor| {
            self.base.accept_children(visitor)?;
            accept_list(&self.identifier, "identifier", "Identifier", visitor)?;
            accept_element(self.definition.as_ref(), "definition", visitor)?;
            accept_list(&self.udi_carrier, "udiCarrier", "Device.UdiCarrier", visitor)?;
            accept_element(self.status.as_ref(), "status", visitor)?;
            accept_list(&self.status_reason, "statusReason", "CodeableConcept", visitor)?;
            accept_element(self.distinct_identifier.as_ref(), "distinctIdentifier", visitor)?;
            accept_element(self.manufacturer.as_ref(), "manufacturer", visitor)?;
            accept_element(self.manufacture_date.as_ref(), "manufactureDate", visitor)?;
            accept_element(self.expiration_date.as_ref(), "expirationDate", visitor)?;
            accept_element(self.lot_number.as_ref(), "lotNumber", visitor)?;
            accept_element(self.serial_number.as_ref(), "serialNumber", visitor)?;
            accept_list(&self.device_name, "deviceName", "Device.DeviceName", visitor)?;
            accept_element(self.model_number.as_ref(), "modelNumber", visitor)?;
            accept_element(self.part_number.as_ref(), "partNumber", visitor)?;
            accept_element(self.type_.as_ref(), "type", visitor)?;
            accept_list(&self.specialization, "specialization", "Device.Specialization", visitor)?;
            accept_list(&self.version, "version", "Device.Version", visitor)?;
            accept_list(&self.property, "property", "Device.Property", visitor)?;
            accept_element(self.patient.as_ref(), "patient", visitor)?;
            accept_element(self.owner.as_ref(), "owner", visitor)?;
            accept_list(&self.contact, "contact", "ContactPoint", visitor)?;
            accept_element(self.location.as_ref(), "location", visitor)?;
            accept_element(self.url.as_ref(), "url", visitor)?;
            accept_list(&self.note, "note", "Annotation", visitor)?;
            accept_list(&self.safety, "safety", "CodeableConcept", visitor)?;
            accept_element(self.parent.as_ref(), "parent", visitor)
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct DeviceBuilder {
    base: ResourceBase,
    identifier: Vec<Identifier>,
    definition: Option<Reference>,
    udi_carrier: Vec<UdiCarrier>,
    status: Option<BoundCode<DeviceStatus>>,
    status_reason: Vec<CodeableConcept>,
    distinct_identifier: Option<FhirString>,
    manufacturer: Option<FhirString>,
    manufacture_date: Option<DateTime>,
    expiration_date: Option<DateTime>,
    lot_number: Option<FhirString>,
    serial_number: Option<FhirString>,
    device_name: Vec<DeviceName>,
    model_number: Option<FhirString>,
    part_number: Option<FhirString>,
    type_: Option<CodeableConcept>,
    specialization: Vec<Specialization>,
    version: Vec<DeviceVersion>,
    property: Vec<Property>,
    patient: Option<Reference>,
    owner: Option<Reference>,
    contact: Vec<ContactPoint>,
    location: Option<Reference>,
    url: Option<Uri>,
    note: Vec<Annotation>,
    safety: Vec<CodeableConcept>,
    parent: Option<Reference>,
}

impl DeviceBuilder {
    pub fn add_identifier(mut self, identifier: Identifier) -> Self {
        self.identifier.push(identifier);
        self
    }

    pub fn extend_identifier(mut self, identifier: impl IntoIterator<Item = Identifier>) -> Self {
        self.identifier.extend(identifier);
        self
    }

    pub fn identifier(mut self, identifier: impl IntoIterator<Item = Identifier>) -> Self {
        self.identifier = identifier.into_iter().collect();
        self
    }

    pub fn definition(mut self, definition: Reference) -> Self {
        self.definition = Some(definition);
        self
    }

    pub fn add_udi_carrier(mut self, udi_carrier: UdiCarrier) -> Self {
        self.udi_carrier.push(udi_carrier);
        self
    }

    pub fn extend_udi_carrier(mut self, udi_carrier: impl IntoIterator<Item = UdiCarrier>) -> Self {
        self.udi_carrier.extend(udi_carrier);
        self
    }

    pub fn udi_carrier(mut self, udi_carrier: impl IntoIterator<Item = UdiCarrier>) -> Self {
        self.udi_carrier = udi_carrier.into_iter().collect();
        self
    }

    pub fn status(mut self, status: impl Into<BoundCode<DeviceStatus>>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn add_status_reason(mut self, status_reason: CodeableConcept) -> Self {
        self.status_reason.push(status_reason);
        self
    }

    pub fn extend_status_reason(mut self, status_reason: impl IntoIterator<Item = CodeableConcept>) -> Self {
        self.status_reason.extend(status_reason);
        self
    }

    pub fn status_reason(mut self, status_reason: impl IntoIterator<Item = CodeableConcept>) -> Self {
        self.status_reason = status_reason.into_iter().collect();
        self
    }

    pub fn distinct_identifier(mut self, distinct_identifier: FhirString) -> Self {
        self.distinct_identifier = Some(distinct_identifier);
        self
    }

    pub fn manufacturer(mut self, manufacturer: FhirString) -> Self {
        self.manufacturer = Some(manufacturer);
        self
    }

    pub fn manufacture_date(mut self, manufacture_date: DateTime) -> Self {
        self.manufacture_date = Some(manufacture_date);
        self
    }

    pub fn expiration_date(mut self, expiration_date: DateTime) -> Self {
        self.expiration_date = Some(expiration_date);
        self
    }

    pub fn lot_number(mut self, lot_number: FhirString) -> Self {
        self.lot_number = Some(lot_number);
        self
    }

    pub fn serial_number(mut self, serial_number: FhirString) -> Self {
        self.serial_number = Some(serial_number);
        self
    }

    pub fn add_device_name(mut self, device_name: DeviceName) -> Self {
        self.device_name.push(device_name);
        self
    }

    pub fn extend_device_name(mut self, device_name: impl IntoIterator<Item = DeviceName>) -> Self {
        self.device_name.extend(device_name);
        self
    }

    pub fn device_name(mut self, device_name: impl IntoIterator<Item = DeviceName>) -> Self {
        self.device_name = device_name.into_iter().collect();
        self
    }

    pub fn model_number(mut self, model_number: FhirString) -> Self {
        self.model_number = Some(model_number);
        self
    }

    pub fn part_number(mut self, part_number: FhirString) -> Self {
        self.part_number = Some(part_number);
        self
    }

    pub fn type_(mut self, type_: CodeableConcept) -> Self {
        self.type_ = Some(type_);
        self
    }

    pub fn add_specialization(mut self, specialization: Specialization) -> Self {
        self.specialization.push(specialization);
        self
    }

    pub fn extend_specialization(mut self, specialization: impl IntoIterator<Item = Specialization>) -> Self {
        self.specialization.extend(specialization);
        self
    }

    pub fn specialization(mut self, specialization: impl IntoIterator<Item = Specialization>) -> Self {
        self.specialization = specialization.into_iter().collect();
        self
    }

    pub fn add_version(mut self, version: DeviceVersion) -> Self {
        self.version.push(version);
        self
    }

    pub fn extend_version(mut self, version: impl IntoIterator<Item = DeviceVersion>) -> Self {
        self.version.extend(version);
        self
    }

    pub fn version(mut self, version: impl IntoIterator<Item = DeviceVersion>) -> Self {
        self.version = version.into_iter().collect();
        self
    }

    pub fn add_property(mut self, property: Property) -> Self {
        self.property.push(property);
        self
    }

    pub fn extend_property(mut self, property: impl IntoIterator<Item = Property>) -> Self {
        self.property.extend(property);
        self
    }

    pub fn property(mut self, property: impl IntoIterator<Item = Property>) -> Self {
        self.property = property.into_iter().collect();
        self
    }

    pub fn patient(mut self, patient: Reference) -> Self {
        self.patient = Some(patient);
        self
    }

    pub fn owner(mut self, owner: Reference) -> Self {
        self.owner = Some(owner);
        self
    }

    pub fn add_contact(mut self, contact: ContactPoint) -> Self {
        self.contact.push(contact);
        self
    }

    pub fn extend_contact(mut self, contact: impl IntoIterator<Item = ContactPoint>) -> Self {
        self.contact.extend(contact);
        self
    }

    pub fn contact(mut self, contact: impl IntoIterator<Item = ContactPoint>) -> Self {
        self.contact = contact.into_iter().collect();
        self
    }

    pub fn location(mut self, location: Reference) -> Self {
        self.location = Some(location);
        self
    }

    pub fn url(mut self, url: Uri) -> Self {
        self.url = Some(url);
        self
    }

    pub fn add_note(mut self, note: Annotation) -> Self {
        self.note.push(note);
        self
    }

    pub fn extend_note(mut self, note: impl IntoIterator<Item = Annotation>) -> Self {
        self.note.extend(note);
        self
    }

    pub fn note(mut self, note: impl IntoIterator<Item = Annotation>) -> Self {
        self.note = note.into_iter().collect();
        self
    }

    pub fn add_safety(mut self, safety: CodeableConcept) -> Self {
        self.safety.push(safety);
        self
    }

    pub fn extend_safety(mut self, safety: impl IntoIterator<Item = CodeableConcept>) -> Self {
        self.safety.extend(safety);
        self
    }

    pub fn safety(mut self, safety: impl IntoIterator<Item = CodeableConcept>) -> Self {
        self.safety = safety.into_iter().collect();
        self
    }

    pub fn parent(mut self, parent: Reference) -> Self {
        self.parent = Some(parent);
        self
    }

    pub fn build(self) -> crate::Result<Device> {
        self.build_with(&ModelConfig::global())
    }

    pub fn build_with(self, config: &ModelConfig) -> crate::Result<Device> {
        self.base.validate(config)?;
        validation::check_reference_type(self.definition.as_ref(), "definition", Device::DEFINITION, config)?;
        validation::check_reference_type(self.patient.as_ref(), "patient", Device::PATIENT, config)?;
        validation::check_reference_type(self.owner.as_ref(), "owner", Device::OWNER, config)?;
        validation::check_reference_type(self.location.as_ref(), "location", Device::LOCATION, config)?;
        validation::check_reference_type(self.parent.as_ref(), "parent", Device::PARENT, config)?;
        let device = Device {
            base: self.base,
            identifier: self.identifier,
            definition: self.definition,
            udi_carrier: self.udi_carrier,
            status: self.status,
            status_reason: self.status_reason,
            distinct_identifier: self.distinct_identifier,
            manufacturer: self.manufacturer,
            manufacture_date: self.manufacture_date,
            expiration_date: self.expiration_date,
            lot_number: self.lot_number,
            serial_number: self.serial_number,
            device_name: self.device_name,
            model_number: self.model_number,
            part_number: self.part_number,
            type_: self.type_,
            specialization: self.specialization,
            version: self.version,
            property: self.property,
            patient: self.patient,
            owner: self.owner,
            contact: self.contact,
            location: self.location,
            url: self.url,
            note: self.note,
            safety: self.safety,
            parent: self.parent,
        };
        validation::require_value_or_children(&device)?;
        Ok(device)
    }
}

resource_node!(Device, DeviceBuilder, "Device");

/// Unique device identifier (UDI) as found on the label or package
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UdiCarrier {
    base: BackboneBase,
    device_identifier: Option<FhirString>,
    issuer: Option<Uri>,
    jurisdiction: Option<Uri>,
    carrier_aidc: Option<Base64Binary>,
    carrier_hrf: Option<FhirString>,
    entry_type: Option<BoundCode<UdiEntryType>>,
}

impl UdiCarrier {
    pub fn builder() -> UdiCarrierBuilder {
        UdiCarrierBuilder::default()
    }

    /// The DI portion of the UDI
    pub fn device_identifier(&self) -> Option<&FhirString> {
        self.device_identifier.as_ref()
    }

    pub fn issuer(&self) -> Option<&Uri> {
        self.issuer.as_ref()
    }

    pub fn jurisdiction(&self) -> Option<&Uri> {
        self.jurisdiction.as_ref()
    }

    /// Machine-readable (AIDC) form of the barcode string
    pub fn carrier_aidc(&self) -> Option<&Base64Binary> {
        self.carrier_aidc.as_ref()
    }

    /// Human-readable form of the barcode string
    pub fn carrier_hrf(&self) -> Option<&FhirString> {
        self.carrier_hrf.as_ref()
    }

    pub fn entry_type(&self) -> Option<&BoundCode<UdiEntryType>> {
        self.entry_type.as_ref()
    }

    pub fn to_builder(&self) -> UdiCarrierBuilder {
        UdiCarrierBuilder {
            base: self.base.clone(),
            device_identifier: self.device_identifier.clone(),
            issuer: self.issuer.clone(),
            jurisdiction: self.jurisdiction.clone(),
            carrier_aidc: self.carrier_aidc.clone(),
            carrier_hrf: self.carrier_hrf.clone(),
            entry_type: self.entry_type.clone(),
        }
    }
}

impl Visitable for UdiCarrier {
    fn accept_slot<V: Visitor + ?Sized>(
        &self,
        name: &str,
        slot: Slot,
        visitor: &mut V,
    ) -> Result<(), V::Error> {
        walk(self, name, slot, visitor, |visitor| {
            self.base.accept_children(visitor)?;
            accept_element(self.device_identifier.as_ref(), "deviceIdentifier", visitor)?;
            accept_element(self.issuer.as_ref(), "issuer", visitor)?;
            accept_element(self.jurisdiction.as_ref(), "jurisdiction", visitor)?;
            accept_element(self.carrier_aidc.as_ref(), "carrierAIDC", visitor)?;
            accept_element(self.carrier_hrf.as_ref(), "carrierHRF", visitor)?;
            accept_element(self.entry_type.as_ref(), "entryType", visitor)
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct UdiCarrierBuilder {
    base: BackboneBase,
    device_identifier: Option<FhirString>,
    issuer: Option<Uri>,
    jurisdiction: Option<Uri>,
    carrier_aidc: Option<Base64Binary>,
    carrier_hrf: Option<FhirString>,
    entry_type: Option<BoundCode<UdiEntryType>>,
}

impl UdiCarrierBuilder {
    pub fn device_identifier(mut self, device_identifier: FhirString) -> Self {
        self.device_identifier = Some(device_identifier);
        self
    }

    pub fn issuer(mut self, issuer: Uri) -> Self {
        self.issuer = Some(issuer);
        self
    }

    pub fn jurisdiction(mut self, jurisdiction: Uri) -> Self {
        self.jurisdiction = Some(jurisdiction);
        self
    }

    pub fn carrier_aidc(mut self, carrier_aidc: Base64Binary) -> Self {
        self.carrier_aidc = Some(carrier_aidc);
        self
    }

    pub fn carrier_hrf(mut self, carrier_hrf: FhirString) -> Self {
        self.carrier_hrf = Some(carrier_hrf);
        self
    }

    pub fn entry_type(mut self, entry_type: impl Into<BoundCode<UdiEntryType>>) -> Self {
        self.entry_type = Some(entry_type.into());
        self
    }

    pub fn build(self) -> crate::Result<UdiCarrier> {
        self.build_with(&ModelConfig::global())
    }

    pub fn build_with(self, config: &ModelConfig) -> crate::Result<UdiCarrier> {
        self.base.validate(config)?;
        let udi_carrier = UdiCarrier {
            base: self.base,
            device_identifier: self.device_identifier,
            issuer: self.issuer,
            jurisdiction: self.jurisdiction,
            carrier_aidc: self.carrier_aidc,
            carrier_hrf: self.carrier_hrf,
            entry_type: self.entry_type,
        };
        validation::require_value_or_children(&udi_carrier)?;
        Ok(udi_carrier)
    }
}

backbone_node!(UdiCarrier, UdiCarrierBuilder, "Device.UdiCarrier");

/// A name given to the device to identify it
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DeviceName {
    base: BackboneBase,
    name: FhirString,
    type_: BoundCode<DeviceNameType>,
}

impl DeviceName {
    pub fn builder() -> DeviceNameBuilder {
        DeviceNameBuilder::default()
    }

    pub fn name(&self) -> &FhirString {
        &self.name
    }

    pub fn type_(&self) -> &BoundCode<DeviceNameType> {
        &self.type_
    }

    pub fn to_builder(&self) -> DeviceNameBuilder {
        DeviceNameBuilder {
            base: self.base.clone(),
            name: Some(self.name.clone()),
            type_: Some(self.type_.clone()),
        }
    }
}

impl Visitable for DeviceName {
    fn accept_slot<V: Visitor + ?Sized>(
        &self,
        name: &str,
        slot: Slot,
        visitor: &mut V,
    ) -> Result<(), V::Error> {
        walk(self, name, slot, visitor, |visitor| {
            self.base.accept_children(visitor)?;
            self.name.accept_slot("name", Slot::Single, visitor)?;
            self.type_.accept_slot("type", Slot::Single, visitor)
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct DeviceNameBuilder {
    base: BackboneBase,
    name: Option<FhirString>,
    type_: Option<BoundCode<DeviceNameType>>,
}

impl DeviceNameBuilder {
    pub fn name(mut self, name: FhirString) -> Self {
        self.name = Some(name);
        self
    }

    pub fn type_(mut self, type_: impl Into<BoundCode<DeviceNameType>>) -> Self {
        self.type_ = Some(type_.into());
        self
    }

    pub fn build(self) -> crate::Result<DeviceName> {
        self.build_with(&ModelConfig::global())
    }

    pub fn build_with(self, config: &ModelConfig) -> crate::Result<DeviceName> {
        self.base.validate(config)?;
        let device_name = DeviceName {
            base: self.base,
            name: validation::require_non_null(self.name, "name")?,
            type_: validation::require_non_null(self.type_, "type")?,
        };
        validation::require_value_or_children(&device_name)?;
        Ok(device_name)
    }
}

backbone_node!(DeviceName, DeviceNameBuilder, "Device.DeviceName");

/// A standard the device supports for communication
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Specialization {
    base: BackboneBase,
    system_type: CodeableConcept,
    version: Option<FhirString>,
}

impl Specialization {
    pub fn builder() -> SpecializationBuilder {
        SpecializationBuilder::default()
    }

    pub fn system_type(&self) -> &CodeableConcept {
        &self.system_type
    }

    pub fn version(&self) -> Option<&FhirString> {
        self.version.as_ref()
    }

    pub fn to_builder(&self) -> SpecializationBuilder {
        SpecializationBuilder {
            base: self.base.clone(),
            system_type: Some(self.system_type.clone()),
            version: self.version.clone(),
        }
    }
}

impl Visitable for Specialization {
    fn accept_slot<V: Visitor + ?Sized>(
        &self,
        name: &str,
        slot: Slot,
        visitor: &mut V,
    ) -> Result<(), V::Error> {
        walk(self, name, slot, visitor, |visitor| {
            self.base.accept_children(visitor)?;
            self.system_type.accept_slot("systemType", Slot::Single, visitor)?;
            accept_element(self.version.as_ref(), "version", visitor)
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct SpecializationBuilder {
    base: BackboneBase,
    system_type: Option<CodeableConcept>,
    version: Option<FhirString>,
}

impl SpecializationBuilder {
    pub fn system_type(mut self, system_type: CodeableConcept) -> Self {
        self.system_type = Some(system_type);
        self
    }

    pub fn version(mut self, version: FhirString) -> Self {
        self.version = Some(version);
        self
    }

    pub fn build(self) -> crate::Result<Specialization> {
        self.build_with(&ModelConfig::global())
    }

    pub fn build_with(self, config: &ModelConfig) -> crate::Result<Specialization> {
        self.base.validate(config)?;
        let specialization = Specialization {
            base: self.base,
            system_type: validation::require_non_null(self.system_type, "systemType")?,
            version: self.version,
        };
        validation::require_value_or_children(&specialization)?;
        Ok(specialization)
    }
}

backbone_node!(Specialization, SpecializationBuilder, "Device.Specialization");

/// Version of a device or one of its components
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DeviceVersion {
    base: BackboneBase,
    type_: Option<CodeableConcept>,
    component: Option<Identifier>,
    value: FhirString,
}

impl DeviceVersion {
    pub fn builder() -> DeviceVersionBuilder {
        DeviceVersionBuilder::default()
    }

    pub fn type_(&self) -> Option<&CodeableConcept> {
        self.type_.as_ref()
    }

    pub fn component(&self) -> Option<&Identifier> {
        self.component.as_ref()
    }

    pub fn value(&self) -> &FhirString {
        &self.value
    }

    pub fn to_builder(&self) -> DeviceVersionBuilder {
        DeviceVersionBuilder {
            base: self.base.clone(),
            type_: self.type_.clone(),
            component: self.component.clone(),
            value: Some(self.value.clone()),
        }
    }
}

impl Visitable for DeviceVersion {
    fn accept_slot<V: Visitor + ?Sized>(
        &self,
        name: &str,
        slot: Slot,
        visitor: &mut V,
    ) -> Result<(), V::Error> {
        walk(self, name, slot, visitor, |visitor| {
            self.base.accept_children(visitor)?;
            accept_element(self.type_.as_ref(), "type", visitor)?;
            accept_element(self.component.as_ref(), "component", visitor)?;
            self.value.accept_slot("value", Slot::Single, visitor)
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct DeviceVersionBuilder {
    base: BackboneBase,
    type_: Option<CodeableConcept>,
    component: Option<Identifier>,
    value: Option<FhirString>,
}

impl DeviceVersionBuilder {
    pub fn type_(mut self, type_: CodeableConcept) -> Self {
        self.type_ = Some(type_);
        self
    }

    pub fn component(mut self, component: Identifier) -> Self {
        self.component = Some(component);
        self
    }

    pub fn value(mut self, value: FhirString) -> Self {
        self.value = Some(value);
        self
    }

    pub fn build(self) -> crate::Result<DeviceVersion> {
        self.build_with(&ModelConfig::global())
    }

    pub fn build_with(self, config: &ModelConfig) -> crate::Result<DeviceVersion> {
        self.base.validate(config)?;
        let version = DeviceVersion {
            base: self.base,
            type_: self.type_,
            component: self.component,
            value: validation::require_non_null(self.value, "value")?,
        };
        validation::require_value_or_children(&version)?;
        Ok(version)
    }
}

backbone_node!(DeviceVersion, DeviceVersionBuilder, "Device.Version");

/// A configuration setting or measured characteristic of the device
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Property {
    base: BackboneBase,
    type_: CodeableConcept,
    value_quantity: Vec<Quantity>,
    value_code: Vec<CodeableConcept>,
}

impl Property {
    pub fn builder() -> PropertyBuilder {
        PropertyBuilder::default()
    }

    pub fn type_(&self) -> &CodeableConcept {
        &self.type_
    }

    pub fn value_quantity(&self) -> &[Quantity] {
        &self.value_quantity
    }

    pub fn value_code(&self) -> &[CodeableConcept] {
        &self.value_code
    }

    pub fn to_builder(&self) -> PropertyBuilder {
        PropertyBuilder {
            base: self.base.clone(),
            type_: Some(self.type_.clone()),
            value_quantity: self.value_quantity.clone(),
            value_code: self.value_code.clone(),
        }
    }
}

impl Visitable for Property {
    fn accept_slot<V: Visitor + ?Sized>(
        &self,
        name: &str,
        slot: Slot,
        visitor: &mut V,
    ) -> Result<(), V::Error> {
        walk(self, name, slot, visitor, |visitor| {
            self.base.accept_children(visitor)?;
            self.type_.accept_slot("type", Slot::Single, visitor)?;
            accept_list(&self.value_quantity, "valueQuantity", "Quantity", visitor)?;
            accept_list(&self.value_code, "valueCode", "CodeableConcept", visitor)
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct PropertyBuilder {
    base: BackboneBase,
    type_: Option<CodeableConcept>,
    value_quantity: Vec<Quantity>,
    value_code: Vec<CodeableConcept>,
}

impl PropertyBuilder {
    pub fn type_(mut self, type_: CodeableConcept) -> Self {
        self.type_ = Some(type_);
        self
    }

    pub fn add_value_quantity(mut self, value_quantity: Quantity) -> Self {
        self.value_quantity.push(value_quantity);
        self
    }

    pub fn extend_value_quantity(mut self, value_quantity: impl IntoIterator<Item = Quantity>) -> Self {
        self.value_quantity.extend(value_quantity);
        self
    }

    pub fn value_quantity(mut self, value_quantity: impl IntoIterator<Item = Quantity>) -> Self {
        self.value_quantity = value_quantity.into_iter().collect();
        self
    }

    pub fn add_value_code(mut self, value_code: CodeableConcept) -> Self {
        self.value_code.push(value_code);
        self
    }

    pub fn extend_value_code(mut self, value_code: impl IntoIterator<Item = CodeableConcept>) -> Self {
        self.value_code.extend(value_code);
        self
    }

    pub fn value_code(mut self, value_code: impl IntoIterator<Item = CodeableConcept>) -> Self {
        self.value_code = value_code.into_iter().collect();
        self
    }

    pub fn build(self) -> crate::Result<Property> {
        self.build_with(&ModelConfig::global())
    }

    pub fn build_with(self, config: &ModelConfig) -> crate::Result<Property> {
        self.base.validate(config)?;
        let property = Property {
            base: self.base,
            type_: validation::require_non_null(self.type_, "type")?,
            value_quantity: self.value_quantity,
            value_code: self.value_code,
        };
        validation::require_value_or_children(&property)?;
        Ok(property)
    }
}

backbone_node!(Property, PropertyBuilder, "Device.Property");
