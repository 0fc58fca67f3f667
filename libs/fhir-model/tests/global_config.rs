//! Process-wide configuration; kept in its own test binary because it
//! mutates global state

use ferrum_model::prelude::*;
use ferrum_model::resource::consent::ConsentState;

fn consent_for(patient: &str) -> ferrum_model::Result<Consent> {
    let concept = CodeableConcept::builder()
        .text(FhirString::of("privacy")?)
        .build()?;
    Consent::builder()
        .status(ConsentState::Active)
        .scope(concept.clone())
        .add_category(concept)
        .patient(
            Reference::builder()
                .reference(FhirString::of(patient)?)
                .build()?,
        )
        .build()
}

#[test]
fn test_global_config_drives_build() {
    assert_eq!(ModelConfig::global(), ModelConfig::default());
    assert!(consent_for("Device/d1").is_err());

    let relaxed = ModelConfig::from_json_str(r#"{"checkReferenceTypes": false}"#).unwrap();
    ModelConfig::set_global(relaxed);
    assert_eq!(ModelConfig::global(), relaxed);
    assert!(consent_for("Device/d1").is_ok());

    // build_with ignores the global setting
    let strict = ModelConfig::default();
    let err = Consent::builder()
        .status(ConsentState::Active)
        .scope(consent_for("Patient/p1").unwrap().scope().clone())
        .add_category(consent_for("Patient/p1").unwrap().scope().clone())
        .patient(
            Reference::builder()
                .reference(FhirString::of("Device/d1").unwrap())
                .build()
                .unwrap(),
        )
        .build_with(&strict)
        .unwrap_err();
    assert_eq!(err.element(), Some("patient"));

    ModelConfig::set_global(ModelConfig::default());
    assert!(consent_for("Device/d1").is_err());
}
