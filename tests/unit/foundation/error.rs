use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        SpecimenError::UnknownSignature("x".to_string())
            .to_string()
            .contains("unknown signature 'x'")
    );
    assert!(
        SpecimenError::invalid_seed("x")
            .to_string()
            .contains("invalid seed:")
    );
    assert!(
        SpecimenError::scene_config("x")
            .to_string()
            .contains("invalid scene config:")
    );
    assert!(
        SpecimenError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        SpecimenError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn lookup_failures_report_stage_and_value() {
    let err = SpecimenError::UnknownForm("Spiral".to_string());
    assert_eq!(err.stage(), Stage::Palette);
    assert_eq!(err.bad_value(), Some("Spiral"));

    let err = SpecimenError::UnknownScene("void".to_string());
    assert_eq!(err.stage(), Stage::Scene);
    assert_eq!(err.bad_value(), Some("void"));

    let err = SpecimenError::UnknownHook("swipe".to_string());
    assert_eq!(err.stage(), Stage::Classification);

    let err = SpecimenError::invalid_seed("NaN");
    assert_eq!(err.stage(), Stage::Seed);
    assert_eq!(err.bad_value(), None);
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = SpecimenError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
    assert_eq!(err.stage(), Stage::Catalog);
}
