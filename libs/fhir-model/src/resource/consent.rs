//! Consent: a healthcare consumer's choices permitting or denying recipients
//! or roles to perform actions for specific purposes and periods of time

use crate::config::ModelConfig;
use crate::node::{backbone_node, resource_node, BackboneBase, ResourceBase};
use crate::types::{
    choice_type, code_enum, Attachment, Boolean, BoundCode, CodeableConcept, Coding, DataType,
    DateTime, Identifier, Period, Reference, Uri,
};
use crate::validation;
use crate::visitor::{accept_choice, accept_element, accept_list, walk, Slot, Visitable, Visitor};

code_enum! {
    /// Lifecycle state of a consent
    ConsentState("http://hl7.org/fhir/ValueSet/consent-state-codes") {
        Draft => "draft",
        Proposed => "proposed",
        Active => "active",
        Rejected => "rejected",
        Inactive => "inactive",
        EnteredInError => "entered-in-error",
    }
}

code_enum! {
    ConsentProvisionType("http://hl7.org/fhir/ValueSet/consent-provision-type") {
        Deny => "deny",
        Permit => "permit",
    }
}

code_enum! {
    /// How a resource reference is interpreted when testing consent restrictions
    ConsentDataMeaning("http://hl7.org/fhir/ValueSet/consent-data-meaning") {
        Instance => "instance",
        Related => "related",
        Dependents => "dependents",
        AuthoredBy => "authoredby",
    }
}

choice_type! {
    /// `Consent.source[x]`
    ConsentSource {
        Attachment(Attachment) = "Attachment",
        Reference(Reference) = "Reference",
    }
}

// ============================================================================
// Consent
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Consent {
    base: ResourceBase,
    identifier: Vec<Identifier>,
    status: BoundCode<ConsentState>,
    scope: CodeableConcept,
    category: Vec<CodeableConcept>,
    patient: Option<Reference>,
    date_time: Option<DateTime>,
    performer: Vec<Reference>,
    organization: Vec<Reference>,
    source: Option<ConsentSource>,
    policy: Vec<Policy>,
    policy_rule: Option<CodeableConcept>,
    verification: Vec<Verification>,
    provision: Option<Provision>,
}

impl Consent {
    pub const PATIENT: &'static [&'static str] = &["Patient"];
    pub const PERFORMER: &'static [&'static str] = &[
        "Organization",
        "Patient",
        "Practitioner",
        "RelatedPerson",
        "PractitionerRole",
    ];
    pub const ORGANIZATION: &'static [&'static str] = &["Organization"];
    pub const SOURCE: &'static [&'static str] =
        &["Consent", "DocumentReference", "Contract", "QuestionnaireResponse"];

    pub fn builder() -> ConsentBuilder {
        ConsentBuilder::default()
    }

    pub fn identifier(&self) -> &[Identifier] {
        &self.identifier
    }

    pub fn status(&self) -> &BoundCode<ConsentState> {
        &self.status
    }

    /// Which of the four areas this resource covers (extensible)
    pub fn scope(&self) -> &CodeableConcept {
        &self.scope
    }

    pub fn category(&self) -> &[CodeableConcept] {
        &self.category
    }

    pub fn patient(&self) -> Option<&Reference> {
        self.patient.as_ref()
    }

    /// When this consent was agreed to
    pub fn date_time(&self) -> Option<&DateTime> {
        self.date_time.as_ref()
    }

    pub fn performer(&self) -> &[Reference] {
        &self.performer
    }

    pub fn organization(&self) -> &[Reference] {
        &self.organization
    }

    pub fn source(&self) -> Option<&ConsentSource> {
        self.source.as_ref()
    }

    pub fn policy(&self) -> &[Policy] {
        &self.policy
    }

    pub fn policy_rule(&self) -> Option<&CodeableConcept> {
        self.policy_rule.as_ref()
    }

    pub fn verification(&self) -> &[Verification] {
        &self.verification
    }

    pub fn provision(&self) -> Option<&Provision> {
        self.provision.as_ref()
    }

    pub fn to_builder(&self) -> ConsentBuilder {
        ConsentBuilder {
            base: self.base.clone(),
            identifier: self.identifier.clone(),
            status: Some(self.status.clone()),
            scope: Some(self.scope.clone()),
            category: self.category.clone(),
            patient: self.patient.clone(),
            date_time: self.date_time.clone(),
            performer: self.performer.clone(),
            organization: self.organization.clone(),
            source: self.source.clone().map(DataType::from),
            policy: self.policy.clone(),
            policy_rule: self.policy_rule.clone(),
            verification: self.verification.clone(),
            provision: self.provision.clone(),
        }
    }
}

impl Visitable for Consent {
    fn accept_slot<V: Visitor + ?Sized>(
        &self,
        name: &str,
        slot: Slot,
        visitor: &mut V,
    ) -> Result<(), V::Error> {
        walk(self, name, slot, visitor, |visitor| {
            self.base.accept_children(visitor)?;
            accept_list(&self.identifier, "identifier", "Identifier", visitor)?;
            self.status.accept_slot("status", Slot::Single, visitor)?;
            self.scope.accept_slot("scope", Slot::Single, visitor)?;
            accept_list(&self.category, "category", "CodeableConcept", visitor)?;
            accept_element(self.patient.as_ref(), "patient", visitor)?;
            accept_element(self.date_time.as_ref(), "dateTime", visitor)?;
            accept_list(&self.performer, "performer", "Reference", visitor)?;
            accept_list(&self.organization, "organization", "Reference", visitor)?;
            accept_choice(self.source.as_ref(), "source", visitor)?;
            accept_list(&self.policy, "policy", "Consent.Policy", visitor)?;
            accept_element(self.policy_rule.as_ref(), "policyRule", visitor)?;
            accept_list(&self.verification, "verification", "Consent.Verification", visitor)?;
            accept_element(self.provision.as_ref(), "provision", visitor)
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct ConsentBuilder {
    base: ResourceBase,
    identifier: Vec<Identifier>,
    status: Option<BoundCode<ConsentState>>,
    scope: Option<CodeableConcept>,
    category: Vec<CodeableConcept>,
    patient: Option<Reference>,
    date_time: Option<DateTime>,
    performer: Vec<Reference>,
    organization: Vec<Reference>,
    source: Option<DataType>,
    policy: Vec<Policy>,
    policy_rule: Option<CodeableConcept>,
    verification: Vec<Verification>,
    provision: Option<Provision>,
}

impl ConsentBuilder {
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

    pub fn status(mut self, status: impl Into<BoundCode<ConsentState>>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn scope(mut self, scope: CodeableConcept) -> Self {
        self.scope = Some(scope);
        self
    }

    pub fn add_category(mut self, category: CodeableConcept) -> Self {
        self.category.push(category);
        self
    }

    pub fn extend_category(mut self, category: impl IntoIterator<Item = CodeableConcept>) -> Self {
        self.category.extend(category);
        self
    }

    pub fn category(mut self, category: impl IntoIterator<Item = CodeableConcept>) -> Self {
        self.category = category.into_iter().collect();
        self
    }

    pub fn patient(mut self, patient: Reference) -> Self {
        self.patient = Some(patient);
        self
    }

    pub fn date_time(mut self, date_time: DateTime) -> Self {
        self.date_time = Some(date_time);
        self
    }

    pub fn add_performer(mut self, performer: Reference) -> Self {
        self.performer.push(performer);
        self
    }

    pub fn extend_performer(mut self, performer: impl IntoIterator<Item = Reference>) -> Self {
        self.performer.extend(performer);
        self
    }

    pub fn performer(mut self, performer: impl IntoIterator<Item = Reference>) -> Self {
        self.performer = performer.into_iter().collect();
        self
    }

    pub fn add_organization(mut self, organization: Reference) -> Self {
        self.organization.push(organization);
        self
    }

    pub fn extend_organization(mut self, organization: impl IntoIterator<Item = Reference>) -> Self {
        self.organization.extend(organization);
        self
    }

    pub fn organization(mut self, organization: impl IntoIterator<Item = Reference>) -> Self {
        self.organization = organization.into_iter().collect();
        self
    }

    /// `Attachment` or `Reference`; anything else fails at build
    pub fn source(mut self, source: impl Into<DataType>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn add_policy(mut self, policy: Policy) -> Self {
        self.policy.push(policy);
        self
    }

    pub fn extend_policy(mut self, policy: impl IntoIterator<Item = Policy>) -> Self {
        self.policy.extend(policy);
        self
    }

    pub fn policy(mut self, policy: impl IntoIterator<Item = Policy>) -> Self {
        self.policy = policy.into_iter().collect();
        self
    }

    pub fn policy_rule(mut self, policy_rule: CodeableConcept) -> Self {
        self.policy_rule = Some(policy_rule);
        self
    }

    pub fn add_verification(mut self, verification: Verification) -> Self {
        self.verification.push(verification);
        self
    }

    pub fn extend_verification(mut self, verification: impl IntoIterator<Item = Verification>) -> Self {
        self.verification.extend(verification);
        self
    }

    pub fn verification(mut self, verification: impl IntoIterator<Item = Verification>) -> Self {
        self.verification = verification.into_iter().collect();
        self
    }

    pub fn provision(mut self, provision: Provision) -> Self {
        self.provision = Some(provision);
        self
    }

    pub fn build(self) -> crate::Result<Consent> {
        self.build_with(&ModelConfig::global())
    }

    pub fn build_with(self, config: &ModelConfig) -> crate::Result<Consent> {
        self.base.validate(config)?;
        let status = validation::require_non_null(self.status, "status")?;
        let scope = validation::require_non_null(self.scope, "scope")?;
        let category = validation::require_non_empty(self.category, "category")?;
        let source = validation::choice_element::<ConsentSource>(self.source, "source")?;
        validation::check_reference_type(self.patient.as_ref(), "patient", Consent::PATIENT, config)?;
        validation::check_reference_types(&self.performer, "performer", Consent::PERFORMER, config)?;
        validation::check_reference_types(&self.organization, "organization", Consent::ORGANIZATION, config)?;
        if let Some(ConsentSource::Reference(reference)) = &source {
            validation::check_reference_type(Some(reference), "source", Consent::SOURCE, config)?;
        }
        let consent = Consent {
            base: self.base,
            identifier: self.identifier,
            status,
            scope,
            category,
            patient: self.patient,
            date_time: self.date_time,
            performer: self.performer,
            organization: self.organization,
            source,
            policy: self.policy,
            policy_rule: self.policy_rule,
            verification: self.verification,
            provision: self.provision,
        };
        validation::require_value_or_children(&consent)?;
        Ok(consent)
    }
}

resource_node!(Consent, ConsentBuilder, "Consent");

// ============================================================================
// Consent.policy
// ============================================================================

/// Policy that this consent conforms to
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Policy {
    base: BackboneBase,
    authority: Option<Uri>,
    uri: Option<Uri>,
}

impl Policy {
    pub fn builder() -> PolicyBuilder {
        PolicyBuilder::default()
    }

    /// Enforcement source for the policy
    pub fn authority(&self) -> Option<&Uri> {
        self.authority.as_ref()
    }

    pub fn uri(&self) -> Option<&Uri> {
        self.uri.as_ref()
    }

    pub fn to_builder(&self) -> PolicyBuilder {
        PolicyBuilder {
            base: self.base.clone(),
            authority: self.authority.clone(),
            uri: self.uri.clone(),
        }
    }
}

impl Visitable for Policy {
    fn accept_slot<V: Visitor + ?Sized>(
        &self,
        name: &str,
        slot: Slot,
        visitor: &mut V,
    ) -> Result<(), V::Error> {
        walk(self, name, slot, visitor, |visitor| {
            self.base.accept_children(visitor)?;
            accept_element(self.authority.as_ref(), "authority", visitor)?;
            accept_element(self.uri.as_ref(), "uri", visitor)
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct PolicyBuilder {
    base: BackboneBase,
    authority: Option<Uri>,
    uri: Option<Uri>,
}

impl PolicyBuilder {
    pub fn authority(mut self, authority: Uri) -> Self {
        self.authority = Some(authority);
        self
    }

    pub fn uri(mut self, uri: Uri) -> Self {
        self.uri = Some(uri);
        self
    }

    pub fn build(self) -> crate::Result<Policy> {
        self.build_with(&ModelConfig::global())
    }

    pub fn build_with(self, config: &ModelConfig) -> crate::Result<Policy> {
        self.base.validate(config)?;
        let policy = Policy {
            base: self.base,
            authority: self.authority,
            uri: self.uri,
        };
        validation::require_value_or_children(&policy)?;
        Ok(policy)
    }
}

backbone_node!(Policy, PolicyBuilder, "Consent.Policy");

// ============================================================================
// Consent.verification
// ============================================================================

/// Whether a treatment instruction was verified with the patient or a proxy
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Verification {
    base: BackboneBase,
    verified: Boolean,
    verified_with: Option<Reference>,
    verification_date: Option<DateTime>,
}

impl Verification {
    pub const VERIFIED_WITH: &'static [&'static str] = &["Patient", "RelatedPerson"];

    pub fn builder() -> VerificationBuilder {
        VerificationBuilder::default()
    }

    pub fn verified(&self) -> &Boolean {
        &self.verified
    }

    pub fn verified_with(&self) -> Option<&Reference> {
        self.verified_with.as_ref()
    }

    pub fn verification_date(&self) -> Option<&DateTime> {
        self.verification_date.as_ref()
    }

    pub fn to_builder(&self) -> VerificationBuilder {
        VerificationBuilder {
            base: self.base.clone(),
            verified: Some(self.verified.clone()),
            verified_with: self.verified_with.clone(),
            verification_date: self.verification_date.clone(),
        }
    }
}

impl Visitable for Verification {
    fn accept_slot<V: Visitor + ?Sized>(
        &self,
        name: &str,
        slot: Slot,
        visitor: &mut V,
    ) -> Result<(), V::Error> {
        walk(self, name, slot, visitor, |visitor| {
            self.base.accept_children(visitor)?;
            self.verified.accept_slot("verified", Slot::Single, visitor)?;
            accept_element(self.verified_with.as_ref(), "verifiedWith", visitor)?;
            accept_element(self.verification_date.as_ref(), "verificationDate", visitor)
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct VerificationBuilder {
    base: BackboneBase,
    verified: Option<Boolean>,
    verified_with: Option<Reference>,
    verification_date: Option<DateTime>,
}

impl VerificationBuilder {
    pub fn verified(mut self, verified: Boolean) -> Self {
        self.verified = Some(verified);
        self
    }

    pub fn verified_with(mut self, verified_with: Reference) -> Self {
        self.verified_with = Some(verified_with);
        self
    }

    pub fn verification_date(mut self, verification_date: DateTime) -> Self {
        self.verification_date = Some(verification_date);
        self
    }

    pub fn build(self) -> crate::Result<Verification> {
        self.build_with(&ModelConfig::global())
    }

    pub fn build_with(self, config: &ModelConfig) -> crate::Result<Verification> {
        self.base.validate(config)?;
        let verified = validation::require_non_null(self.verified, "verified")?;
        validation::check_reference_type(
            self.verified_with.as_ref(),
            "verifiedWith",
            Verification::VERIFIED_WITH,
            config,
        )?;
        let verification = Verification {
            base: self.base,
            verified,
            verified_with: self.verified_with,
            verification_date: self.verification_date,
        };
        validation::require_value_or_children(&verification)?;
        Ok(verification)
    }
}

backbone_node!(Verification, VerificationBuilder, "Consent.Verification");

// ============================================================================
// Consent.provision
// ============================================================================

/// Constraints to the base policy, nested for exceptions
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Provision {
    base: BackboneBase,
    type_: Option<BoundCode<ConsentProvisionType>>,
    period: Option<Period>,
    actor: Vec<ProvisionActor>,
    action: Vec<CodeableConcept>,
    security_label: Vec<Coding>,
    purpose: Vec<Coding>,
    class: Vec<Coding>,
    code: Vec<CodeableConcept>,
    data_period: Option<Period>,
    data: Vec<ProvisionData>,
    provision: Vec<Provision>,
}

impl Provision {
    pub fn builder() -> ProvisionBuilder {
        ProvisionBuilder::default()
    }

    pub fn type_(&self) -> Option<&BoundCode<ConsentProvisionType>> {
        self.type_.as_ref()
    }

    pub fn period(&self) -> Option<&Period> {
        self.period.as_ref()
    }

    pub fn actor(&self) -> &[ProvisionActor] {
        &self.actor
    }

    pub fn action(&self) -> &[CodeableConcept] {
        &self.action
    }

    pub fn security_label(&self) -> &[Coding] {
        &self.security_label
    }

    pub fn purpose(&self) -> &[Coding] {
        &self.purpose
    }

    /// Kinds of resources or content the provision applies to
    pub fn class(&self) -> &[Coding] {
        &self.class
    }

    pub fn code(&self) -> &[CodeableConcept] {
        &self.code
    }

    /// Timeframe the data must fall in to be covered
    pub fn data_period(&self) -> Option<&Period> {
        self.data_period.as_ref()
    }

    pub fn data(&self) -> &[ProvisionData] {
        &self.data
    }

    /// Nested exception provisions
    pub fn provision(&self) -> &[Provision] {
        &self.provision
    }

    pub fn to_builder(&self) -> ProvisionBuilder {
        ProvisionBuilder {
            base: self.base.clone(),
            type_: self.type_.clone(),
            period: self.period.clone(),
            actor: self.actor.clone(),
            action: self.action.clone(),
            security_label: self.security_label.clone(),
            purpose: self.purpose.clone(),
            class: self.class.clone(),
            code: self.code.clone(),
            data_period: self.data_period.clone(),
            data: self.data.clone(),
            provision: self.provision.clone(),
        }
    }
}

impl Visitable for Provision {
    fn accept_slot<V: Visitor + ?Sized>(
        &self,
        name: &str,
        slot: Slot,
        visitor: &mut V,
    ) -> Result<(), V::Error> {
        walk(self, name, slot, visitor, |visitor| {
            self.base.accept_children(visitor)?;
            accept_element(self.type_.as_ref(), "type", visitor)?;
            accept_element(self.period.as_ref(), "period", visitor)?;
            accept_list(&self.actor, "actor", "Consent.Provision.Actor", visitor)?;
            accept_list(&self.action, "action", "CodeableConcept", visitor)?;
            accept_list(&self.security_label, "securityLabel", "Coding", visitor)?;
            accept_list(&self.purpose, "purpose", "Coding", visitor)?;
            accept_list(&self.class, "class", "Coding", visitor)?;
            accept_list(&self.code, "code", "CodeableConcept", visitor)?;
            accept_element(self.data_period.as_ref(), "dataPeriod", visitor)?;
            accept_list(&self.data, "data", "Consent.Provision.Data", visitor)?;
            accept_list(&self.provision, "provision", "Consent.Provision", visitor)
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct ProvisionBuilder {
    base: BackboneBase,
    type_: Option<BoundCode<ConsentProvisionType>>,
    period: Option<Period>,
    actor: Vec<ProvisionActor>,
    action: Vec<CodeableConcept>,
    security_label: Vec<Coding>,
    purpose: Vec<Coding>,
    class: Vec<Coding>,
    code: Vec<CodeableConcept>,
    data_period: Option<Period>,
    data: Vec<ProvisionData>,
    provision: Vec<Provision>,
}

impl ProvisionBuilder {
    pub fn type_(mut self, type_: impl Into<BoundCode<ConsentProvisionType>>) -> Self {
        self.type_ = Some(type_.into());
        self
    }

    pub fn period(mut self, period: Period) -> Self {
        self.period = Some(period);
        self
    }

    pub fn add_actor(mut self, actor: ProvisionActor) -> Self {
        self.actor.push(actor);
        self
    }

    pub fn extend_actor(mut self, actor: impl IntoIterator<Item = ProvisionActor>) -> Self {
        self.actor.extend(actor);
        self
    }

    pub fn actor(mut self, actor: impl IntoIterator<Item = ProvisionActor>) -> Self {
        self.actor = actor.into_iter().collect();
        self
    }

    pub fn add_action(mut self, action: CodeableConcept) -> Self {
        self.action.push(action);
        self
    }

    pub fn extend_action(mut self, action: impl IntoIterator<Item = CodeableConcept>) -> Self {
        self.action.extend(action);
        self
    }

    pub fn action(mut self, action: impl IntoIterator<Item = CodeableConcept>) -> Self {
        self.action = action.into_iter().collect();
        self
    }

    pub fn add_security_label(mut self, security_label: Coding) -> Self {
        self.security_label.push(security_label);
        self
    }

    pub fn extend_security_label(mut self, security_label: impl IntoIterator<Item = Coding>) -> Self {
        self.security_label.extend(security_label);
        self
    }

    pub fn security_label(mut self, security_label: impl IntoIterator<Item = Coding>) -> Self {
        self.security_label = security_label.into_iter().collect();
        self
    }

    pub fn add_purpose(mut self, purpose: Coding) -> Self {
        self.purpose.push(purpose);
        self
    }

    pub fn extend_purpose(mut self, purpose: impl IntoIterator<Item = Coding>) -> Self {
        self.purpose.extend(purpose);
        self
    }

    pub fn purpose(mut self, purpose: impl IntoIterator<Item = Coding>) -> Self {
        self.purpose = purpose.into_iter().collect();
        self
    }

    pub fn add_class(mut self, class: Coding) -> Self {
        self.class.push(class);
        self
    }

    pub fn extend_class(mut self, class: impl IntoIterator<Item = Coding>) -> Self {
        self.class.extend(class);
        self
    }

    pub fn class(mut self, class: impl IntoIterator<Item = Coding>) -> Self {
        self.class = class.into_iter().collect();
        self
    }

    pub fn add_code(mut self, code: CodeableConcept) -> Self {
        self.code.push(code);
        self
    }

    pub fn extend_code(mut self, code: impl IntoIterator<Item = CodeableConcept>) -> Self {
        self.code.extend(code);
        self
    }

    pub fn code(mut self, code: impl IntoIterator<Item = CodeableConcept>) -> Self {
        self.code = code.into_iter().collect();
        self
    }

    pub fn data_period(mut self, data_period: Period) -> Self {
        self.data_period = Some(data_period);
        self
    }

    pub fn add_data(mut self, data: ProvisionData) -> Self {
        self.data.push(data);
        self
    }

    pub fn extend_data(mut self, data: impl IntoIterator<Item = ProvisionData>) -> Self {
        self.data.extend(data);
        self
    }

    pub fn data(mut self, data: impl IntoIterator<Item = ProvisionData>) -> Self {
        self.data = data.into_iter().collect();
        self
    }

    pub fn add_provision(mut self, provision: Provision) -> Self {
        self.provision.push(provision);
        self
    }

    pub fn extend_provision(mut self, provision: impl IntoIterator<Item = Provision>) -> Self {
        self.provision.extend(provision);
        self
    }

    pub fn provision(mut self, provision: impl IntoIterator<Item = Provision>) -> Self {
        self.provision = provision.into_iter().collect();
        self
    }

    pub fn build(self) -> crate::Result<Provision> {
        self.build_with(&ModelConfig::global())
    }

    pub fn build_with(self, config: &ModelConfig) -> crate::Result<Provision> {
        self.base.validate(config)?;
        let provision = Provision {
            base: self.base,
            type_: self.type_,
            period: self.period,
            actor: self.actor,
            action: self.action,
            security_label: self.security_label,
            purpose: self.purpose,
            class: self.class,
            code: self.code,
            data_period: self.data_period,
            data: self.data,
            provision: self.provision,
        };
        validation::require_value_or_children(&provision)?;
        Ok(provision)
    }
}

backbone_node!(Provision, ProvisionBuilder, "Consent.Provision");

// ============================================================================
// Consent.provision.actor
// ============================================================================

/// Who or what is controlled by the provision
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProvisionActor {
    base: BackboneBase,
    role: CodeableConcept,
    reference: Reference,
}

impl ProvisionActor {
    pub const REFERENCE: &'static [&'static str] = &[
        "Device",
        "Group",
        "CareTeam",
        "Organization",
        "Patient",
        "Practitioner",
        "RelatedPerson",
        "PractitionerRole",
    ];

    pub fn builder() -> ProvisionActorBuilder {
        ProvisionActorBuilder::default()
    }

    pub fn role(&self) -> &CodeableConcept {
        &self.role
    }

    pub fn reference(&self) -> &Reference {
        &self.reference
    }

    pub fn to_builder(&self) -> ProvisionActorBuilder {
        ProvisionActorBuilder {
            base: self.base.clone(),
            role: Some(self.role.clone()),
            reference: Some(self.reference.clone()),
        }
    }
}

impl Visitable for ProvisionActor {
    fn accept_slot<V: Visitor + ?Sized>(
        &self,
        name: &str,
        slot: Slot,
        visitor: &mut V,
    ) -> Result<(), V::Error> {
        walk(self, name, slot, visitor, |visitor| {
            self.base.accept_children(visitor)?;
            self.role.accept_slot("role", Slot::Single, visitor)?;
            self.reference.accept_slot("reference", Slot::Single, visitor)
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct ProvisionActorBuilder {
    base: BackboneBase,
    role: Option<CodeableConcept>,
    reference: Option<Reference>,
}

impl ProvisionActorBuilder {
    pub fn role(mut self, role: CodeableConcept) -> Self {
        self.role = Some(role);
        self
    }

    pub fn reference(mut self, reference: Reference) -> Self {
        self.reference = Some(reference);
        self
    }

    pub fn build(self) -> crate::Result<ProvisionActor> {
        self.build_with(&ModelConfig::global())
    }

    pub fn build_with(self, config: &ModelConfig) -> crate::Result<ProvisionActor> {
        self.base.validate(config)?;
        let role = validation::require_non_null(self.role, "role")?;
        let reference = validation::require_non_null(self.reference, "reference")?;
        validation::check_reference_type(Some(&reference), "reference", ProvisionActor::REFERENCE, config)?;
        let actor = ProvisionActor {
            base: self.base,
            role,
            reference,
        };
        validation::require_value_or_children(&actor)?;
        Ok(actor)
    }
}

backbone_node!(ProvisionActor, ProvisionActorBuilder, "Consent.Provision.Actor");

// ============================================================================
// Consent.provision.data
// ============================================================================

/// A resource the provision controls access to
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProvisionData {
    base: BackboneBase,
    meaning: BoundCode<ConsentDataMeaning>,
    reference: Reference,
}

impl ProvisionData {
    pub fn builder() -> ProvisionDataBuilder {
        ProvisionDataBuilder::default()
    }

    pub fn meaning(&self) -> &BoundCode<ConsentDataMeaning> {
        &self.meaning
    }

    /// Any resource type may be referenced
    pub fn reference(&self) -> &Reference {
        &self.reference
    }

    pub fn to_builder(&self) -> ProvisionDataBuilder {
        ProvisionDataBuilder {
            base: self.base.clone(),
            meaning: Some(self.meaning.clone()),
            reference: Some(self.reference.clone()),
        }
    }
}

impl Visitable for ProvisionData {
    fn accept_slot<V: Visitor + ?Sized>(
        &self,
        name: &str,
        slot: Slot,
        visitor: &mut V,
    ) -> Result<(), V::Error> {
        walk(self, name, slot, visitor, |visitor| {
            self.base.accept_children(visitor)?;
            self.meaning.accept_slot("meaning", Slot::Single, visitor)?;
            self.reference.accept_slot("reference", Slot::Single, visitor)
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct ProvisionDataBuilder {
    base: BackboneBase,
    meaning: Option<BoundCode<ConsentDataMeaning>>,
    reference: Option<Reference>,
}

impl ProvisionDataBuilder {
    pub fn meaning(mut self, meaning: impl Into<BoundCode<ConsentDataMeaning>>) -> Self {
        self.meaning = Some(meaning.into());
        self
    }

    pub fn reference(mut self, reference: Reference) -> Self {
        self.reference = Some(reference);
        self
    }

    pub fn build(self) -> crate::Result<ProvisionData> {
        self.build_with(&ModelConfig::global())
    }

    pub fn build_with(self, config: &ModelConfig) -> crate::Result<ProvisionData> {
        self.base.validate(config)?;
        let data = ProvisionData {
            base: self.base,
            meaning: validation::require_non_null(self.meaning, "meaning")?,
            reference: validation::require_non_null(self.reference, "reference")?,
        };
        validation::require_value_or_children(&data)?;
        Ok(data)
    }
}

backbone_node!(ProvisionData, ProvisionDataBuilder, "Consent.Provision.Data");
