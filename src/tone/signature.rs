use crate::foundation::keyed::keyed_enum;

keyed_enum! {
    /// Top-level color identity ("magic signature") of a cue.
    pub enum Signature: UnknownSignature {
        ScienceXSoul => "science_x_soul",
        KoanParadox => "koan_paradox",
        SacredOrdinary => "sacred_ordinary",
        PatternGlitch => "pattern_glitch",
        RelationalGhost => "relational_ghost",
        WitnessRitual => "witness_ritual",
        SensoryCinema => "sensory_cinema",
        PoeticPrecision => "poetic_precision",
    }
}

/// Minimum circular distance, in degrees, between the primary, accent and shadow hues of
/// any two distinct signatures.
pub const MIN_HUE_SEPARATION_DEG: f64 = 24.0;

/// Alpha ceiling every signature starts from before the chrono modifier.
pub const BASE_ALPHA_CEILING: f64 = 0.92;

/// Base color identity of a signature, before any modifier runs.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct SignatureBase {
    pub primary_hue: f64,
    pub accent_hue: f64,
    pub shadow_hue: f64,
    pub base_saturation: f64,
    pub base_lightness: f64,
}

impl SignatureBase {
    const fn new(primary: f64, accent: f64, shadow: f64, saturation: f64, lightness: f64) -> Self {
        Self {
            primary_hue: primary,
            accent_hue: accent,
            shadow_hue: shadow,
            base_saturation: saturation,
            base_lightness: lightness,
        }
    }
}

/// Looks up the base hue family of `signature`.
///
/// Exhaustive over [`Signature`]: a new signature without an entry here does not compile.
/// Unknown keys never reach this function; they fail at parse time with
/// [`SpecimenError::UnknownSignature`](crate::SpecimenError::UnknownSignature).
pub fn resolve_signature_base(signature: Signature) -> SignatureBase {
    match signature {
        Signature::ScienceXSoul => SignatureBase::new(205.0, 42.0, 230.0, 0.72, 0.56),
        Signature::KoanParadox => SignatureBase::new(268.0, 158.0, 285.0, 0.55, 0.60),
        Signature::SacredOrdinary => SignatureBase::new(36.0, 190.0, 28.0, 0.68, 0.58),
        Signature::PatternGlitch => SignatureBase::new(318.0, 92.0, 330.0, 0.82, 0.55),
        Signature::RelationalGhost => SignatureBase::new(172.0, 330.0, 195.0, 0.42, 0.62),
        Signature::WitnessRitual => SignatureBase::new(82.0, 260.0, 70.0, 0.50, 0.52),
        Signature::SensoryCinema => SignatureBase::new(354.0, 128.0, 0.0, 0.78, 0.54),
        Signature::PoeticPrecision => SignatureBase::new(238.0, 12.0, 258.0, 0.60, 0.60),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/tone/signature.rs"]
mod tests;
