//! Build-time validation across the shipped node types

use ferrum_model::prelude::*;
use ferrum_model::resource::consent::{
    ConsentDataMeaning, ConsentSource, ConsentState, ProvisionActor, ProvisionData, Verification,
};
use ferrum_model::resource::device::{DeviceName, DeviceNameType, DeviceStatus, DeviceVersion};
use ferrum_model::types::{AnnotationAuthor, Base64Binary, Id, Instant, UnsignedInt, Url};
use serde_json::json;

fn concept(code: &str) -> CodeableConcept {
    CodeableConcept::builder()
        .add_coding(
            Coding::builder()
                .system(Uri::of("http://loinc.org").unwrap())
                .code(Code::of(code).unwrap())
                .build()
                .unwrap(),
        )
        .build()
        .unwrap()
}

fn reference(literal: &str) -> Reference {
    Reference::builder()
        .reference(FhirString::of(literal).unwrap())
        .build()
        .unwrap()
}

fn minimal_consent() -> ferrum_model::resource::consent::ConsentBuilder {
    Consent::builder()
        .status(ConsentState::Active)
        .scope(concept("patient-privacy"))
        .add_category(concept("59284-0"))
}

#[test]
fn test_minimal_consent_scenario() {
    let consent = minimal_consent().build().unwrap();
    assert_eq!(consent.status().value(), Some(&ConsentState::Active));
    assert_eq!(consent.scope(), &concept("patient-privacy"));
    assert_eq!(consent.category(), &[concept("59284-0")]);

    let err = Consent::builder()
        .status(ConsentState::Active)
        .scope(concept("patient-privacy"))
        .build()
        .unwrap_err();
    assert!(matches!(err, Error::MissingElement("category")));
    assert_eq!(err.to_string(), "Missing required element: 'category'");
}

#[test]
fn test_round_trip_through_to_builder() {
    let consent = minimal_consent()
        .id("consent-1")
        .meta(
            Meta::builder()
                .version_id(Id::of("2").unwrap())
                .last_updated(Instant::of("2022-05-01T12:00:00Z").unwrap())
                .build()
                .unwrap(),
        )
        .language(Code::of("en-US").unwrap())
        .add_identifier(
            Identifier::builder()
                .system(Uri::of("urn:ietf:rfc:3986").unwrap())
                .value(FhirString::of("urn:oid:2.16.840.1.113883.3.72.5.9.1").unwrap())
                .build()
                .unwrap(),
        )
        .patient(reference("Patient/f001"))
        .date_time(DateTime::of("2018-12-28").unwrap())
        .add_performer(reference("Patient/f001"))
        .add_organization(reference("Organization/f001"))
        .source(
            Attachment::builder()
                .title(FhirString::of("The terms of the consent in lawyer speak.").unwrap())
                .build()
                .unwrap(),
        )
        .policy_rule(concept("OPTIN"))
        .add_verification(
            Verification::builder()
                .verified(Boolean::of(false).unwrap())
                .build()
                .unwrap(),
        )
        .add_contained(
            Device::builder()
                .id("signature-pad")
                .status(DeviceStatus::Active)
                .build()
                .unwrap(),
        )
        .build()
        .unwrap();

    let rebuilt = consent.to_builder().build().unwrap();
    assert_eq!(rebuilt, consent);

    let changed = consent
        .to_builder()
        .status(ConsentState::Inactive)
        .build()
        .unwrap();
    assert_ne!(changed, consent);
    assert_eq!(changed.category(), consent.category());
}

#[test]
fn test_equal_nodes_hash_equal() {
    use std::collections::HashSet;

    let mut set = HashSet::new();
    set.insert(minimal_consent().build().unwrap());
    set.insert(minimal_consent().build().unwrap());
    set.insert(minimal_consent().status(ConsentState::Draft).build().unwrap());
    assert_eq!(set.len(), 2);
}

#[test]
fn test_required_fields_per_type() {
    let cases: Vec<(&str, Error)> = vec![
        (
            "role",
            ProvisionActor::builder()
                .reference(reference("Patient/p1"))
                .build()
                .unwrap_err(),
        ),
        (
            "reference",
            ProvisionActor::builder()
                .role(concept("PRCP"))
                .build()
                .unwrap_err(),
        ),
        (
            "meaning",
            ProvisionData::builder()
                .reference(reference("Observation/o1"))
                .build()
                .unwrap_err(),
        ),
        ("verified", Verification::builder().build().unwrap_err()),
        (
            "name",
            DeviceName::builder()
                .type_(DeviceNameType::ModelName)
                .build()
                .unwrap_err(),
        ),
        ("value", DeviceVersion::builder().build().unwrap_err()),
        (
            "text",
            Annotation::builder()
                .author(FhirString::of("nurse").unwrap())
                .build()
                .unwrap_err(),
        ),
        (
            "url",
            Extension::builder()
                .value(Boolean::of(true).unwrap())
                .build()
                .unwrap_err(),
        ),
    ];

    for (element, err) in cases {
        assert_eq!(err.element(), Some(element), "{}", err);
    }

    assert!(ProvisionData::builder()
        .meaning(ConsentDataMeaning::Instance)
        .reference(reference("Observation/o1"))
        .build()
        .is_ok());
}

#[test]
fn test_choice_exclusivity() {
    let attachment = Attachment::builder()
        .url(Url::of("http://example.org/consent.pdf").unwrap())
        .build()
        .unwrap();
    let consent = minimal_consent().source(attachment.clone()).build().unwrap();
    assert_eq!(consent.source(), Some(&ConsentSource::Attachment(attachment)));
    assert_eq!(consent.source().map(|s| s.type_name()), Some("Attachment"));

    let consent = minimal_consent().source(reference("Contract/c1")).build().unwrap();
    assert_eq!(
        consent.source(),
        Some(&ConsentSource::Reference(reference("Contract/c1")))
    );

    let err = minimal_consent()
        .source(Boolean::of(true).unwrap())
        .build()
        .unwrap_err();
    match err {
        Error::InvalidChoiceType { element, found, allowed } => {
            assert_eq!(element, "source");
            assert_eq!(found, "boolean");
            assert_eq!(allowed, &["Attachment", "Reference"]);
        }
        other => panic!("unexpected error: {}", other),
    }

    // the last assignment wins; only one type is ever held
    let consent = minimal_consent()
        .source(reference("Contract/c1"))
        .source(
            Attachment::builder()
                .title(FhirString::of("scan").unwrap())
                .build()
                .unwrap(),
        )
        .build()
        .unwrap();
    assert!(matches!(consent.source(), Some(ConsentSource::Attachment(_))));

    let annotation = Annotation::builder()
        .author(reference("Patient/p1"))
        .text(Markdown::of("note").unwrap())
        .build()
        .unwrap();
    assert!(matches!(annotation.author(), Some(AnnotationAuthor::Reference(_))));
}

#[test]
fn test_value_or_children() {
    assert!(matches!(
        Coding::builder().build().unwrap_err(),
        Error::EmptyElement("Coding")
    ));
    assert!(matches!(
        Period::builder().id("p").build().unwrap_err(),
        Error::EmptyElement("Period")
    ));
    assert!(matches!(
        Attachment::builder().build().unwrap_err(),
        Error::EmptyElement("Attachment")
    ));
    assert!(Device::builder().build().is_err());

    // exactly one populated field of any kind is enough
    assert!(Coding::builder().code(Code::of("x").unwrap()).build().is_ok());
    assert!(Attachment::builder()
        .size(UnsignedInt::of(0u32).unwrap())
        .build()
        .is_ok());
    assert!(Attachment::builder()
        .data(Base64Binary::of("AAAA").unwrap())
        .build()
        .is_ok());
    assert!(Device::builder()
        .add_device_name(
            DeviceName::builder()
                .name(FhirString::of("pump").unwrap())
                .type_(DeviceNameType::Other)
                .build()
                .unwrap(),
        )
        .build()
        .is_ok());
    assert!(Device::builder().id("d1").build().is_ok());
}

#[test]
fn test_list_setters_append_or_replace() {
    let consent = minimal_consent()
        .add_category(concept("57016-8"))
        .build()
        .unwrap();
    assert_eq!(consent.category().len(), 2);

    let replaced = consent
        .to_builder()
        .category(vec![concept("64292-6")])
        .build()
        .unwrap();
    assert_eq!(replaced.category(), &[concept("64292-6")]);
    assert_eq!(consent.category().len(), 2);
}

#[test]
fn test_extend_appends_batches() {
    let consent = minimal_consent()
        .extend_category(vec![concept("57016-8"), concept("64292-6")])
        .extend_performer([reference("Patient/f001"), reference("Organization/f001")])
        .extend_contained(vec![
            Device::builder().id("pad-1").build().unwrap(),
            Device::builder().id("pad-2").build().unwrap(),
        ])
        .build()
        .unwrap();
    assert_eq!(
        consent.category(),
        &[concept("59284-0"), concept("57016-8"), concept("64292-6")]
    );
    assert_eq!(consent.performer().len(), 2);
    assert_eq!(consent.contained().len(), 2);
    assert_eq!(consent.contained()[1].id(), Some("pad-2"));

    // an empty batch leaves earlier items in place
    let unchanged = consent
        .to_builder()
        .extend_category(Vec::new())
        .build()
        .unwrap();
    assert_eq!(unchanged, consent);
}

#[test]
fn test_reference_checks_follow_config() {
    let strict = ModelConfig::default();
    let relaxed = ModelConfig::from_value(&json!({ "checkReferenceTypes": false })).unwrap();

    let build = |config: &ModelConfig| {
        minimal_consent()
            .patient(reference("Practitioner/dr1"))
            .build_with(config)
    };
    let err = build(&strict).unwrap_err();
    assert!(matches!(err, Error::InvalidReference { element: "patient", .. }));
    assert!(build(&relaxed).is_ok());

    let typed = Reference::builder()
        .reference(FhirString::of("Patient/p1").unwrap())
        .type_(Uri::of("Group").unwrap())
        .build()
        .unwrap();
    assert!(minimal_consent().patient(typed).build_with(&strict).is_err());
}

#[test]
fn test_control_characters_follow_config() {
    let strict = ModelConfig::default();
    let relaxed = ModelConfig {
        check_control_chars: false,
        ..ModelConfig::default()
    };
    let raw = "tab\tis fine, bell\u{0007} is not";

    assert!(FhirString::builder().value(raw).build_with(&strict).is_err());
    assert!(FhirString::builder().value(raw).build_with(&relaxed).is_ok());
}

#[test]
fn test_nodes_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Consent>();
    assert_send_sync::<Device>();
    assert_send_sync::<AnyResource>();
    assert_send_sync::<DataType>();
}
