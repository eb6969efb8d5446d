use crate::foundation::core::{Point, Rect};
use crate::foundation::error::{SpecimenError, SpecimenResult};
use crate::foundation::keyed::keyed_enum;

keyed_enum! {
    /// One of the twelve fixed background archetypes.
    pub enum SceneBackground: UnknownScene {
        DeepField => "deep_field",
        Aurora => "aurora",
        GridPulse => "grid_pulse",
        EmberRise => "ember_rise",
        Constellation => "constellation",
        RainVeil => "rain_veil",
        MossBloom => "moss_bloom",
        TideLine => "tide_line",
        DustMotes => "dust_motes",
        LanternDrift => "lantern_drift",
        FrostLattice => "frost_lattice",
        SignalNoise => "signal_noise",
    }
}

/// Scene coordinates are percentages of the render surface.
pub const FULL_FRAME: Rect = Rect::new(0.0, 0.0, 100.0, 100.0);

/// How an element's `x`/`y` draws map into the scene bounds.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum Distribution {
    /// Independent uniform draws across the bounds.
    Uniform,
    /// Elements gather toward the bounds center with a square-radial falloff.
    Radial,
    /// Elements are dealt round-robin to fixed anchors (unit coordinates within the bounds)
    /// and scattered up to `spread` (also in unit coordinates) around them.
    Clustered {
        anchors: &'static [Point],
        spread: f64,
    },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct SceneBehavior {
    pub drifts: bool,
    pub pulses: bool,
    pub twinkles: bool,
    pub rises: bool,
    pub links: bool,
}

impl SceneBehavior {
    /// Whether elements carry a phase offset.
    pub fn is_animated(self) -> bool {
        self.drifts || self.pulses || self.twinkles || self.rises
    }
}

/// Declarative layout rules for a [`SceneBackground`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct SceneConfig {
    pub scene: SceneBackground,
    pub min_count: u32,
    pub max_count: u32,
    pub bounds: Rect,
    pub size_range: (f64, f64),
    pub distribution: Distribution,
    pub behavior: SceneBehavior,
}

impl SceneConfig {
    pub fn has_variable_count(&self) -> bool {
        self.min_count < self.max_count
    }

    pub fn validate(&self) -> SpecimenResult<()> {
        if self.min_count > self.max_count {
            return Err(SpecimenError::scene_config(format!(
                "{}: min_count {} > max_count {}",
                self.scene, self.min_count, self.max_count
            )));
        }
        let (lo, hi) = self.size_range;
        if !(lo.is_finite() && hi.is_finite()) || lo > hi || lo < 0.0 {
            return Err(SpecimenError::scene_config(format!(
                "{}: size range ({lo}, {hi}) must be finite, non-negative and ordered",
                self.scene
            )));
        }
        let b = self.bounds;
        if !(b.x0 < b.x1 && b.y0 < b.y1) {
            return Err(SpecimenError::scene_config(format!(
                "{}: bounds must have positive area",
                self.scene
            )));
        }
        if let Distribution::Clustered { anchors, spread } = self.distribution {
            if anchors.is_empty() {
                return Err(SpecimenError::scene_config(format!(
                    "{}: clustered distribution needs at least one anchor",
                    self.scene
                )));
            }
            if !(0.0..=1.0).contains(&spread) {
                return Err(SpecimenError::scene_config(format!(
                    "{}: cluster spread must be in [0, 1]",
                    self.scene
                )));
            }
        }
        Ok(())
    }
}

const CONSTELLATION_ANCHORS: &[Point] = &[
    Point::new(0.25, 0.30),
    Point::new(0.70, 0.25),
    Point::new(0.50, 0.70),
];

const MOSS_ANCHORS: &[Point] = &[Point::new(0.20, 0.80), Point::new(0.80, 0.85)];

const fn behavior(
    drifts: bool,
    pulses: bool,
    twinkles: bool,
    rises: bool,
    links: bool,
) -> SceneBehavior {
    SceneBehavior {
        drifts,
        pulses,
        twinkles,
        rises,
        links,
    }
}

/// Looks up the fixed layout rules for `scene`.
pub fn scene_config(scene: SceneBackground) -> SceneConfig {
    use Distribution::{Clustered, Radial, Uniform};
    use SceneBackground as S;

    let (min_count, max_count, bounds, size_range, distribution, behavior) = match scene {
        S::DeepField => (
            28,
            44,
            FULL_FRAME,
            (0.4, 1.8),
            Uniform,
            behavior(false, false, true, false, false),
        ),
        S::Aurora => (
            5,
            8,
            Rect::new(0.0, 0.0, 100.0, 45.0),
            (18.0, 42.0),
            Uniform,
            behavior(true, false, false, false, false),
        ),
        S::GridPulse => (
            36,
            36,
            FULL_FRAME,
            (1.0, 2.0),
            Uniform,
            behavior(false, true, false, false, false),
        ),
        S::EmberRise => (
            14,
            26,
            Rect::new(0.0, 55.0, 100.0, 100.0),
            (0.8, 2.6),
            Uniform,
            behavior(false, true, false, true, false),
        ),
        S::Constellation => (
            9,
            15,
            FULL_FRAME,
            (1.0, 2.4),
            Clustered {
                anchors: CONSTELLATION_ANCHORS,
                spread: 0.18,
            },
            behavior(false, false, true, false, true),
        ),
        S::RainVeil => (
            30,
            48,
            FULL_FRAME,
            (0.3, 0.9),
            Uniform,
            behavior(true, false, false, false, false),
        ),
        S::MossBloom => (
            10,
            18,
            FULL_FRAME,
            (3.0, 9.0),
            Clustered {
                anchors: MOSS_ANCHORS,
                spread: 0.20,
            },
            behavior(false, true, false, false, false),
        ),
        S::TideLine => (
            6,
            10,
            Rect::new(0.0, 60.0, 100.0, 100.0),
            (20.0, 60.0),
            Uniform,
            behavior(true, false, false, false, false),
        ),
        S::DustMotes => (
            20,
            34,
            FULL_FRAME,
            (0.3, 1.2),
            Radial,
            behavior(true, false, true, false, false),
        ),
        S::LanternDrift => (
            4,
            7,
            Rect::new(5.0, 10.0, 95.0, 90.0),
            (4.0, 10.0),
            Uniform,
            behavior(true, true, false, false, false),
        ),
        // Static lattice: no behaviors, so elements carry no phase.
        S::FrostLattice => (
            16,
            24,
            FULL_FRAME,
            (1.0, 3.0),
            Radial,
            SceneBehavior::default(),
        ),
        S::SignalNoise => (
            12,
            20,
            FULL_FRAME,
            (0.5, 4.0),
            Uniform,
            behavior(false, true, false, false, false),
        ),
    };

    SceneConfig {
        scene,
        min_count,
        max_count,
        bounds,
        size_range,
        distribution,
        behavior,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/config.rs"]
mod tests;
