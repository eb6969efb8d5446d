use std::fmt;

use xxhash_rust::xxh3::Xxh3;

use crate::foundation::core::Hsla;
use crate::scene::config::{Distribution, SceneConfig};
use crate::specimen::assemble::Specimen;

const XXH3_SEED: u64 = 0x5bd1_e995_c0de_a11e;

/// Stable 128-bit identity of a resolved specimen.
///
/// Two specimens share a fingerprint exactly when every serialized field matches bit for
/// bit. Used to pin golden specimens and to spot accidental drift between builds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub struct SpecimenFingerprint {
    pub hi: u64,
    pub lo: u64,
}

impl fmt::Display for SpecimenFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}{:016x}", self.hi, self.lo)
    }
}

pub(crate) fn fingerprint_specimen(s: &Specimen) -> SpecimenFingerprint {
    let mut h = StableHasher::new();
    h.write_str(s.look.signature.as_str());
    h.write_str(s.look.form.as_str());
    h.write_str(s.look.chrono.as_str());
    h.write_str(s.kbe.as_str());
    h.write_str(s.hook.as_str());
    h.write_u64(s.specimen_seed as u64);
    h.write_bool(s.is_seal);

    for (name, color) in s.palette.roles() {
        h.write_str(name);
        write_hsla(&mut h, color);
    }

    write_scene_config(&mut h, &s.scene_config);
    h.write_u32(s.elements.len() as u32);
    for e in &s.elements {
        h.write_f64(e.position.x);
        h.write_f64(e.position.y);
        h.write_f64(e.size);
        match e.phase {
            Some(p) => {
                h.write_u8(1);
                h.write_f64(p);
            }
            None => h.write_u8(0),
        }
    }

    h.write_f64(s.motion.tempo);
    h.write_f64(s.motion.drift_amplitude);
    h.write_u32(s.motion.pulse_period_ms);
    h.write_u32(s.motion.stagger_ms);
    h.finish()
}

fn write_hsla(h: &mut StableHasher, c: Hsla) {
    h.write_f64(c.h);
    h.write_f64(c.s);
    h.write_f64(c.l);
    h.write_f64(c.a);
}

fn write_scene_config(h: &mut StableHasher, cfg: &SceneConfig) {
    h.write_str(cfg.scene.as_str());
    h.write_u32(cfg.min_count);
    h.write_u32(cfg.max_count);
    for v in [cfg.bounds.x0, cfg.bounds.y0, cfg.bounds.x1, cfg.bounds.y1] {
        h.write_f64(v);
    }
    h.write_f64(cfg.size_range.0);
    h.write_f64(cfg.size_range.1);
    match cfg.distribution {
        Distribution::Uniform => h.write_u8(0),
        Distribution::Radial => h.write_u8(1),
        Distribution::Clustered { anchors, spread } => {
            h.write_u8(2);
            h.write_u32(anchors.len() as u32);
            for a in anchors {
                h.write_f64(a.x);
                h.write_f64(a.y);
            }
            h.write_f64(spread);
        }
    }
    let b = cfg.behavior;
    for flag in [b.drifts, b.pulses, b.twinkles, b.rises, b.links] {
        h.write_bool(flag);
    }
}

struct StableHasher {
    inner: Xxh3,
}

impl StableHasher {
    fn new() -> Self {
        Self {
            inner: Xxh3::with_seed(XXH3_SEED),
        }
    }

    fn write_bytes(&mut self, b: &[u8]) {
        self.inner.update(b);
    }

    fn write_u8(&mut self, v: u8) {
        self.write_bytes(&[v]);
    }

    fn write_bool(&mut self, v: bool) {
        self.write_u8(u8::from(v));
    }

    fn write_u32(&mut self, v: u32) {
        self.write_bytes(&v.to_le_bytes());
    }

    fn write_u64(&mut self, v: u64) {
        self.write_bytes(&v.to_le_bytes());
    }

    fn write_f64(&mut self, v: f64) {
        self.write_u64(v.to_bits());
    }

    fn write_str(&mut self, s: &str) {
        self.write_u32(s.len() as u32);
        self.write_bytes(s.as_bytes());
    }

    fn finish(self) -> SpecimenFingerprint {
        let v = self.inner.digest128();
        SpecimenFingerprint {
            hi: (v >> 64) as u64,
            lo: v as u64,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/specimen/fingerprint.rs"]
mod tests;
