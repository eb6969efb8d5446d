use crate::tone::modifiers::{Chrono, Form};

/// Pulse period at tempo `1.0`.
pub const BASE_PULSE_PERIOD_MS: f64 = 2400.0;
pub const SEAL_PULSE_STRETCH: f64 = 1.3;
pub const SEAL_DRIFT_WIDEN: f64 = 1.25;

/// Motion parameters for the rendering layer. Pure in `(form, chrono, is_seal)`; the seed
/// plays no part, and easing curves are left to the caller.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct MotionProfile {
    /// Speed multiplier relative to a neutral cue.
    pub tempo: f64,
    /// Peak drift offset in scene units (percent of the surface).
    pub drift_amplitude: f64,
    pub pulse_period_ms: u32,
    /// Delay between consecutive elements starting their cycle.
    pub stagger_ms: u32,
}

fn form_motion(form: Form) -> (f64, f64, u32) {
    match form {
        Form::Circuit => (1.30, 0.5, 40),
        Form::Arc => (1.00, 2.0, 90),
        Form::Drift => (0.70, 6.0, 160),
        Form::Glacier => (0.45, 1.5, 220),
        Form::Storm => (1.50, 8.0, 30),
        Form::Pulse => (1.20, 1.0, 60),
        Form::Cosmos => (0.60, 3.0, 180),
        Form::Lattice => (0.90, 0.8, 70),
        Form::Ember => (1.10, 4.0, 80),
        Form::Compass => (0.85, 1.2, 110),
        Form::Hearth => (0.75, 2.5, 140),
        Form::Canopy => (0.80, 3.5, 130),
        Form::Practice => (0.65, 1.0, 200),
        Form::Ocean => (0.55, 5.0, 170),
        Form::Probe => (1.25, 1.8, 50),
    }
}

fn chrono_tempo(chrono: Chrono) -> f64 {
    match chrono {
        Chrono::Morning => 1.10,
        Chrono::Work => 1.00,
        Chrono::Social => 1.05,
        Chrono::Night => 0.75,
    }
}

pub fn resolve_motion(form: Form, chrono: Chrono, is_seal: bool) -> MotionProfile {
    let (form_tempo, drift, stagger_ms) = form_motion(form);
    let tempo = form_tempo * chrono_tempo(chrono);

    let (drift_amplitude, stretch) = if is_seal {
        (drift * SEAL_DRIFT_WIDEN, SEAL_PULSE_STRETCH)
    } else {
        (drift, 1.0)
    };

    MotionProfile {
        tempo,
        drift_amplitude,
        pulse_period_ms: (BASE_PULSE_PERIOD_MS / tempo * stretch).round() as u32,
        stagger_ms: (f64::from(stagger_ms) / tempo).round() as u32,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/motion/profile.rs"]
mod tests;
