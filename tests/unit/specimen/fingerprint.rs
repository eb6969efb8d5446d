use super::*;
use crate::scene::config::SceneBackground;
use crate::specimen::assemble::resolve_specimen;
use crate::specimen::input::{CompositorInput, CueTags, Hook, Kbe, LookKey};
use crate::tone::modifiers::{Chrono, Form};
use crate::tone::signature::Signature;

fn specimen(seed: i64, kbe: Kbe, is_seal: bool) -> Specimen {
    let input = CompositorInput::new(
        LookKey::new(Signature::PatternGlitch, Form::Storm, Chrono::Work),
        CueTags::new(kbe, Hook::Tap),
        seed,
    )
    .sealed(is_seal);
    resolve_specimen(&input, SceneBackground::SignalNoise).unwrap()
}

#[test]
fn fingerprint_is_stable_for_equal_specimens() {
    let a = specimen(10, Kbe::Knowing, false).fingerprint();
    let b = specimen(10, Kbe::Knowing, false).fingerprint();
    assert_eq!(a, b);
}

#[test]
fn fingerprint_tracks_every_input_axis() {
    let base = specimen(10, Kbe::Knowing, false).fingerprint();
    assert_ne!(base, specimen(11, Kbe::Knowing, false).fingerprint());
    assert_ne!(base, specimen(10, Kbe::Believing, false).fingerprint());
    assert_ne!(base, specimen(10, Kbe::Knowing, true).fingerprint());
}

#[test]
fn display_is_32_hex_digits() {
    let fp = SpecimenFingerprint {
        hi: 0xab,
        lo: 0x1,
    };
    assert_eq!(
        fp.to_string(),
        "00000000000000ab0000000000000001"
    );
    let s = specimen(1, Kbe::Embodying, false).fingerprint().to_string();
    assert_eq!(s.len(), 32);
    assert!(s.chars().all(|c| c.is_ascii_hexdigit()));
}
