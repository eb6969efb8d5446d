use crate::foundation::keyed::keyed_enum;
use crate::foundation::math::{clamp_unit, wrap_hue};
use crate::tone::signature::{BASE_ALPHA_CEILING, SignatureBase};

keyed_enum! {
    /// Geometric family of a cue, independent of its
    /// [`Signature`](super::signature::Signature).
    pub enum Form: UnknownForm {
        Circuit => "Circuit",
        Arc => "Arc",
        Drift => "Drift",
        Glacier => "Glacier",
        Storm => "Storm",
        Pulse => "Pulse",
        Cosmos => "Cosmos",
        Lattice => "Lattice",
        Ember => "Ember",
        Compass => "Compass",
        Hearth => "Hearth",
        Canopy => "Canopy",
        Practice => "Practice",
        Ocean => "Ocean",
        Probe => "Probe",
    }
}

keyed_enum! {
    /// Time-of-day / context family.
    pub enum Chrono: UnknownChrono {
        Morning => "morning",
        Work => "work",
        Social => "social",
        Night => "night",
    }
}

/// Intermediate tone state threaded through the modifier chain.
///
/// Hues are kept wrapped to `[0, 360)` and the other channels clamped to `[0, 1]` after every
/// step; the clamping is why the chain order is fixed.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ToneBase {
    pub primary_hue: f64,
    pub accent_hue: f64,
    pub shadow_hue: f64,
    pub saturation: f64,
    pub lightness: f64,
    pub alpha_ceiling: f64,
}

impl From<SignatureBase> for ToneBase {
    fn from(base: SignatureBase) -> Self {
        Self {
            primary_hue: wrap_hue(base.primary_hue),
            accent_hue: wrap_hue(base.accent_hue),
            shadow_hue: wrap_hue(base.shadow_hue),
            saturation: clamp_unit(base.base_saturation),
            lightness: clamp_unit(base.base_lightness),
            alpha_ceiling: BASE_ALPHA_CEILING,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FormShift {
    pub saturation_scale: f64,
    pub hue_offset_deg: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChronoShift {
    pub lightness_delta: f64,
    pub alpha_ceiling_delta: f64,
}

pub fn form_shift(form: Form) -> FormShift {
    let (saturation_scale, hue_offset_deg) = match form {
        Form::Circuit => (1.10, 6.0),
        Form::Arc => (0.95, -4.0),
        Form::Drift => (0.85, 3.0),
        Form::Glacier => (0.70, -10.0),
        Form::Storm => (0.90, -8.0),
        Form::Pulse => (1.15, 2.0),
        Form::Cosmos => (1.00, 10.0),
        Form::Lattice => (1.05, -2.0),
        Form::Ember => (1.20, 8.0),
        Form::Compass => (0.92, 0.0),
        Form::Hearth => (1.08, 12.0),
        Form::Canopy => (0.88, -6.0),
        Form::Practice => (0.80, 1.0),
        Form::Ocean => (0.95, -12.0),
        Form::Probe => (1.12, 4.0),
    };
    FormShift {
        saturation_scale,
        hue_offset_deg,
    }
}

pub fn chrono_shift(chrono: Chrono) -> ChronoShift {
    let (lightness_delta, alpha_ceiling_delta) = match chrono {
        Chrono::Morning => (0.06, 0.08),
        Chrono::Work => (0.0, 0.0),
        Chrono::Social => (0.02, 0.04),
        Chrono::Night => (-0.14, -0.14),
    };
    ChronoShift {
        lightness_delta,
        alpha_ceiling_delta,
    }
}

/// Scales saturation and rotates every hue by the form's offset.
pub fn apply_form(tone: ToneBase, form: Form) -> ToneBase {
    let shift = form_shift(form);
    ToneBase {
        primary_hue: wrap_hue(tone.primary_hue + shift.hue_offset_deg),
        accent_hue: wrap_hue(tone.accent_hue + shift.hue_offset_deg),
        shadow_hue: wrap_hue(tone.shadow_hue + shift.hue_offset_deg),
        saturation: clamp_unit(tone.saturation * shift.saturation_scale),
        ..tone
    }
}

/// Shifts lightness and the alpha ceiling. `night` lowers both, `morning` raises both.
pub fn apply_chrono(tone: ToneBase, chrono: Chrono) -> ToneBase {
    let shift = chrono_shift(chrono);
    ToneBase {
        lightness: clamp_unit(tone.lightness + shift.lightness_delta),
        alpha_ceiling: clamp_unit(tone.alpha_ceiling + shift.alpha_ceiling_delta),
        ..tone
    }
}

#[cfg(test)]
#[path = "../../tests/unit/tone/modifiers.rs"]
mod tests;
