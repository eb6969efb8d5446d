use super::*;
use crate::scene::resolve::DRAWS_PER_ELEMENT;
use crate::specimen::input::CueTags;
use crate::tone::modifiers::{Chrono, Form};
use crate::tone::signature::Signature;

fn input(seed: i64) -> CompositorInput {
    CompositorInput::new(
        LookKey::new(Signature::WitnessRitual, Form::Hearth, Chrono::Social),
        CueTags::new(Kbe::Embodying, Hook::Drag),
        seed,
    )
}

#[test]
fn same_input_same_specimen() {
    let a = resolve_specimen(&input(9), SceneBackground::MossBloom).unwrap();
    let b = resolve_specimen(&input(9), SceneBackground::MossBloom).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.fingerprint(), b.fingerprint());
}

#[test]
fn seed_moves_elements_but_not_palette_or_motion() {
    let a = resolve_specimen(&input(1), SceneBackground::RainVeil).unwrap();
    let b = resolve_specimen(&input(2), SceneBackground::RainVeil).unwrap();
    assert_eq!(a.palette, b.palette);
    assert_eq!(a.motion, b.motion);
    assert_ne!(a.elements, b.elements);
}

#[test]
fn tags_do_not_touch_rendering() {
    let a = resolve_specimen(&input(5), SceneBackground::Aurora).unwrap();
    let mut other = input(5);
    other.tags = CueTags::new(Kbe::Believing, Hook::Observe);
    let b = resolve_specimen(&other, SceneBackground::Aurora).unwrap();
    assert_eq!(a.palette, b.palette);
    assert_eq!(a.elements, b.elements);
    assert_eq!(a.motion, b.motion);
    assert_eq!(b.kbe, Kbe::Believing);
    assert_eq!(b.hook, Hook::Observe);
}

#[test]
fn rng_handle_continues_after_scene_draws() {
    let s = resolve_specimen(&input(33), SceneBackground::LanternDrift).unwrap();
    let n = s.elements.len() as u64;
    let mut rng = s.rng();
    assert_eq!(rng.draws(), 1 + DRAWS_PER_ELEMENT * n);

    let mut fresh = SpecimenRng::new(33);
    fresh.skip(1 + DRAWS_PER_ELEMENT * n);
    assert_eq!(rng.next_u64(), fresh.next_u64());

    // Drawing from the handle leaves the specimen alone.
    assert_eq!(s.rng().draws(), 1 + DRAWS_PER_ELEMENT * n);
}

#[test]
fn seal_matches_composed_palette_and_motion() {
    let s = resolve_specimen(&input(3).sealed(true), SceneBackground::TideLine).unwrap();
    assert!(s.is_seal);
    assert_eq!(
        s.palette,
        compose_palette(Signature::WitnessRitual, Form::Hearth, Chrono::Social, true)
    );
    assert_eq!(s.motion, resolve_motion(Form::Hearth, Chrono::Social, true));
    assert_eq!(s.scene(), SceneBackground::TideLine);
}

#[test]
fn resolve_cue_reports_bad_keys() {
    let cue = CueDefinition {
        id: "x".to_string(),
        signature: "witness_ritual".to_string(),
        form: "Hearth".to_string(),
        chrono: "dusk".to_string(),
        kbe: "e".to_string(),
        hook: "drag".to_string(),
        specimen_seed: 4.0,
        is_seal: false,
        scene: "aurora".to_string(),
    };
    let err = resolve_cue(&cue).unwrap_err();
    assert_eq!(err.to_string(), "unknown chrono 'dusk'");
}

#[test]
fn specimen_json_shape() {
    let s = resolve_specimen(&input(12), SceneBackground::Constellation).unwrap();
    let v = serde_json::to_value(&s).unwrap();
    assert_eq!(v["signature"], "witness_ritual");
    assert_eq!(v["form"], "Hearth");
    assert_eq!(v["chrono"], "social");
    assert_eq!(v["kbe"], "e");
    assert_eq!(v["hook"], "drag");
    assert_eq!(v["specimenSeed"], 12);
    assert_eq!(v["isSeal"], false);
    assert_eq!(v["sceneConfig"]["scene"], "constellation");
    assert!(v["palette"]["accentGlow"].is_object());
    assert_eq!(
        v["elements"].as_array().unwrap().len(),
        s.elements.len()
    );
    assert!(v.get("rng").is_none());
}
