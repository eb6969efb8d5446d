use crate::foundation::core::Hsla;
use crate::tone::modifiers::{Chrono, Form, ToneBase, apply_chrono, apply_form};
use crate::tone::signature::{Signature, resolve_signature_base};

pub const GLOW_LIGHTNESS_LIFT: f64 = 0.18;
pub const GLOW_ALPHA: f64 = 0.55;
pub const FAINT_ALPHA: f64 = 0.18;
pub const ACCENT_SATURATION_SCALE: f64 = 0.9;
pub const ACCENT_LIGHTNESS_LIFT: f64 = 0.04;
pub const ACCENT_ALPHA: f64 = 0.82;
pub const ACCENT_GLOW_LIGHTNESS_LIFT: f64 = 0.20;
pub const ACCENT_GLOW_ALPHA: f64 = 0.45;
pub const SHADOW_SATURATION_SCALE: f64 = 0.55;
pub const SHADOW_LIGHTNESS_SCALE: f64 = 0.22;
pub const SHADOW_ALPHA: f64 = 0.9;
pub const SHADOW_FAINT_ALPHA: f64 = 0.35;
/// Fraction of the remaining alpha headroom a seal closes on accent and glow roles.
pub const SEAL_ALPHA_LIFT: f64 = 0.6;
pub const SEAL_SATURATION_LIFT: f64 = 0.08;

/// Fully resolved, seed-independent color roles of a specimen.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Palette {
    pub primary: Hsla,
    pub primary_glow: Hsla,
    pub primary_faint: Hsla,
    pub accent: Hsla,
    pub accent_glow: Hsla,
    pub shadow: Hsla,
    pub shadow_faint: Hsla,
    pub text: Hsla,
    pub text_faint: Hsla,
}

impl Palette {
    /// Every role with its serialized name, in declaration order.
    pub fn roles(&self) -> [(&'static str, Hsla); 9] {
        [
            ("primary", self.primary),
            ("primaryGlow", self.primary_glow),
            ("primaryFaint", self.primary_faint),
            ("accent", self.accent),
            ("accentGlow", self.accent_glow),
            ("shadow", self.shadow),
            ("shadowFaint", self.shadow_faint),
            ("text", self.text),
            ("textFaint", self.text_faint),
        ]
    }
}

/// Runs the modifier chain in its fixed order: signature, then form, then chrono.
pub fn resolve_tone(signature: Signature, form: Form, chrono: Chrono) -> ToneBase {
    let tone = ToneBase::from(resolve_signature_base(signature));
    let tone = apply_form(tone, form);
    apply_chrono(tone, chrono)
}

/// Composes the final palette. Never touches the PRNG: instances sharing
/// `(signature, form, chrono, is_seal)` share colors exactly.
pub fn compose_palette(signature: Signature, form: Form, chrono: Chrono, is_seal: bool) -> Palette {
    let tone = resolve_tone(signature, form, chrono);
    let s = tone.saturation;
    let l = tone.lightness;
    let ceiling = tone.alpha_ceiling;

    let lift = |a: f64| {
        if is_seal {
            a + SEAL_ALPHA_LIFT * (1.0 - a)
        } else {
            a
        }
    };
    let accent_s = if is_seal {
        s * ACCENT_SATURATION_SCALE + SEAL_SATURATION_LIFT
    } else {
        s * ACCENT_SATURATION_SCALE
    };

    let ph = tone.primary_hue;
    let ah = tone.accent_hue;
    let sh = tone.shadow_hue;
    let shadow_s = s * SHADOW_SATURATION_SCALE;
    let shadow_l = l * SHADOW_LIGHTNESS_SCALE;

    Palette {
        primary: Hsla::new(ph, s, l, ceiling),
        primary_glow: Hsla::new(ph, s, l + GLOW_LIGHTNESS_LIFT, lift(ceiling * GLOW_ALPHA)),
        primary_faint: Hsla::new(ph, s, l, ceiling * FAINT_ALPHA),
        accent: Hsla::new(ah, accent_s, l + ACCENT_LIGHTNESS_LIFT, lift(ceiling * ACCENT_ALPHA)),
        accent_glow: Hsla::new(
            ah,
            accent_s,
            l + ACCENT_GLOW_LIGHTNESS_LIFT,
            lift(ceiling * ACCENT_GLOW_ALPHA),
        ),
        shadow: Hsla::new(sh, shadow_s, shadow_l, ceiling * SHADOW_ALPHA),
        shadow_faint: Hsla::new(sh, shadow_s, shadow_l, ceiling * SHADOW_FAINT_ALPHA),
        // Text roles are hue-independent so copy stays legible on every signature.
        text: Hsla::new(0.0, 0.0, 0.97, 0.94),
        text_faint: Hsla::new(0.0, 0.0, 0.72, 0.62),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/tone/palette.rs"]
mod tests;
