use super::*;

#[test]
fn there_are_twelve_scenes() {
    assert_eq!(SceneBackground::ALL.len(), 12);
    assert_eq!(
        "deep_field".parse::<SceneBackground>().unwrap(),
        SceneBackground::DeepField
    );
}

#[test]
fn unknown_scene_is_rejected() {
    let err = "void".parse::<SceneBackground>().unwrap_err();
    assert!(matches!(err, SpecimenError::UnknownScene(ref v) if v == "void"));
}

#[test]
fn every_builtin_config_validates() {
    for scene in SceneBackground::ALL {
        let cfg = scene_config(*scene);
        assert_eq!(cfg.scene, *scene);
        cfg.validate().unwrap();
    }
}

#[test]
fn element_ceiling_bounds_draws_per_call() {
    for scene in SceneBackground::ALL {
        let cfg = scene_config(*scene);
        assert!(cfg.max_count <= 64, "{scene}");
        assert!(cfg.min_count >= 1, "{scene}");
    }
}

#[test]
fn grid_pulse_has_fixed_count() {
    let cfg = scene_config(SceneBackground::GridPulse);
    assert!(!cfg.has_variable_count());
    assert!(scene_config(SceneBackground::DeepField).has_variable_count());
}

#[test]
fn validate_rejects_broken_configs() {
    let base = scene_config(SceneBackground::DeepField);

    let cfg = SceneConfig {
        min_count: 9,
        max_count: 3,
        ..base
    };
    assert!(matches!(
        cfg.validate(),
        Err(SpecimenError::InvalidSceneConfig(_))
    ));

    let cfg = SceneConfig {
        size_range: (2.0, 1.0),
        ..base
    };
    assert!(cfg.validate().is_err());

    let cfg = SceneConfig {
        bounds: Rect::new(10.0, 10.0, 10.0, 50.0),
        ..base
    };
    assert!(cfg.validate().is_err());

    let cfg = SceneConfig {
        distribution: Distribution::Clustered {
            anchors: &[],
            spread: 0.1,
        },
        ..base
    };
    assert!(cfg.validate().is_err());
}

#[test]
fn frost_lattice_is_static() {
    assert!(!scene_config(SceneBackground::FrostLattice).behavior.is_animated());
    assert!(scene_config(SceneBackground::EmberRise).behavior.is_animated());
}

#[test]
fn config_serializes_with_rule_tag() {
    let v = serde_json::to_value(scene_config(SceneBackground::Constellation)).unwrap();
    assert_eq!(v["scene"], "constellation");
    assert_eq!(v["distribution"]["rule"], "clustered");
    assert_eq!(v["behavior"]["links"], true);
}
