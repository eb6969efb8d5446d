use super::*;
use crate::foundation::error::Stage;

const CATALOG: &str = r#"{
    "cues": [
        {"id": "a", "signature": "sensory_cinema", "form": "Ember", "chrono": "night",
         "kbe": "e", "hook": "hold", "specimenSeed": 7, "scene": "ember_rise"},
        {"id": "b", "signature": "poetic_precision", "form": "Lattice", "chrono": "work",
         "kbe": "k", "hook": "type", "specimenSeed": 8, "isSeal": true, "scene": "frost_lattice"},
        {"id": "c", "signature": "poetic_precision", "form": "Lattice", "chrono": "work",
         "kbe": "k", "hook": "type", "specimenSeed": 9, "scene": "nebula"}
    ]
}"#;

#[test]
fn loads_and_validates() {
    let catalog = Catalog::from_json_str(CATALOG).unwrap();
    assert_eq!(catalog.cues.len(), 3);
    catalog.validate().unwrap();
    assert!(catalog.cues[1].is_seal);
}

#[test]
fn reader_and_str_agree() {
    let a = Catalog::from_json_str(CATALOG).unwrap();
    let b = Catalog::from_reader(CATALOG.as_bytes()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn malformed_json_is_a_serde_error() {
    let err = Catalog::from_json_str("{\"cues\": [").unwrap_err();
    assert!(matches!(err, SpecimenError::Serde(_)));
    assert_eq!(err.stage(), Stage::Catalog);
}

#[test]
fn missing_file_is_a_validation_error() {
    let err = Catalog::from_path("does/not/exist.json").unwrap_err();
    assert!(err.to_string().starts_with("validation error: open catalog JSON"));
}

#[test]
fn validate_rejects_empty_and_duplicate_ids() {
    let empty = Catalog { cues: vec![] };
    assert!(empty.validate().is_err());

    let mut catalog = Catalog::from_json_str(CATALOG).unwrap();
    catalog.cues[2].id = "a".to_string();
    let err = catalog.validate().unwrap_err();
    assert!(err.to_string().contains("duplicate cue id 'a'"));

    catalog.cues[2].id = "  ".to_string();
    assert!(catalog.validate().is_err());
}

#[test]
fn bad_cue_fails_only_its_entry() {
    let catalog = Catalog::from_json_str(CATALOG).unwrap();
    let report = resolve_catalog(&catalog);

    let ids: Vec<_> = report.entries.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, ["a", "b", "c"]);
    assert!(!report.is_clean());

    let failures: Vec<_> = report.failures().collect();
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].0, "c");
    assert_eq!(failures[0].1.bad_value(), Some("nebula"));
    assert_eq!(report.specimens().count(), 2);
}

#[test]
fn parallel_report_matches_sequential_resolution() {
    let catalog = Catalog::from_json_str(CATALOG).unwrap();
    let report = resolve_catalog(&catalog);
    for (entry, cue) in report.entries.iter().zip(&catalog.cues) {
        match (&entry.outcome, resolve_cue(cue)) {
            (Ok(a), Ok(b)) => assert_eq!(*a, b),
            (Err(a), Err(b)) => assert_eq!(a.to_string(), b.to_string()),
            _ => panic!("outcome mismatch for '{}'", entry.id),
        }
    }
}

#[test]
fn shared_and_non_positive_seeds_warn() {
    let mut catalog = Catalog::from_json_str(CATALOG).unwrap();
    assert!(resolve_catalog(&catalog).warnings.is_empty());

    catalog.cues[1].specimen_seed = 7.0;
    catalog.cues[2].specimen_seed = 0.0;
    let report = resolve_catalog(&catalog);
    assert_eq!(report.warnings.len(), 2);
    assert!(report.warnings[0].contains("reuses seed 7 from cue 'a'"));
    assert!(report.warnings[1].contains("non-positive seed 0"));
}

#[test]
fn signed_zero_seeds_count_as_the_same_seed() {
    let mut catalog = Catalog::from_json_str(CATALOG).unwrap();
    catalog.cues[0].specimen_seed = 0.0;
    catalog.cues[1].specimen_seed = -0.0;
    catalog.cues[2].specimen_seed = 2.5;
    let report = resolve_catalog(&catalog);
    assert_eq!(
        report.warnings,
        [
            "cue 'a' has non-positive seed 0",
            "cue 'b' has non-positive seed 0",
            "cue 'b' reuses seed 0 from cue 'a'",
        ]
    );
}
