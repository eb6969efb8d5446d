use crate::foundation::core::Point;
use crate::foundation::error::SpecimenResult;
use crate::foundation::math::clamp_unit;
use crate::random::prng::SpecimenRng;
use crate::scene::config::{Distribution, SceneBackground, SceneConfig, scene_config};

/// PRNG draws consumed per element: `x`, `y`, `size`, `phase`, in that order.
pub const DRAWS_PER_ELEMENT: u64 = 4;

/// A positioned scene element, ready to draw without further randomness.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct SceneElement {
    pub position: Point,
    pub size: f64,
    /// Fraction of a behavior cycle in `[0, 1)`; `None` for scenes without animated behaviors.
    pub phase: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ResolvedScene {
    pub config: SceneConfig,
    pub elements: Vec<SceneElement>,
}

/// Resolves a scene key as authored upstream, failing with
/// [`SpecimenError::UnknownScene`](crate::SpecimenError::UnknownScene) on a miss.
pub fn resolve_scene_by_key(
    key: &str,
    rng: &mut SpecimenRng,
    is_seal: bool,
) -> SpecimenResult<ResolvedScene> {
    let scene: SceneBackground = key.parse()?;
    resolve_scene(scene, rng, is_seal)
}

/// Draws the element list for `scene` from `rng`.
///
/// Draw order is part of the output contract: one draw for the element count, then per
/// element `x`, `y`, `size`, `phase`. Phase is drawn even when the scene reports it as
/// `None`, so a scene's behavior flags never shift the stream. Reordering any of this
/// changes every previously frozen specimen.
pub fn resolve_scene(
    scene: SceneBackground,
    rng: &mut SpecimenRng,
    is_seal: bool,
) -> SpecimenResult<ResolvedScene> {
    let config = scene_config(scene);
    config.validate()?;

    let count = draw_count(rng, config.min_count, config.max_count, is_seal);
    let animated = config.behavior.is_animated();
    let (size_lo, size_hi) = config.size_range;

    let mut elements = Vec::with_capacity(count as usize);
    for index in 0..count as usize {
        let ux = rng.next_f64();
        let uy = rng.next_f64();
        let size = rng.next_in_range(size_lo, size_hi);
        let phase = rng.next_f64();
        elements.push(SceneElement {
            position: place(&config, index, ux, uy),
            size,
            phase: animated.then_some(phase),
        });
    }

    tracing::debug!(scene = %scene, count, is_seal, "scene resolved");
    Ok(ResolvedScene { config, elements })
}

/// Draws an element count in `[min, max]`.
///
/// Seals bias the same draw upward with `1 - (1 - u)^2`, which never lowers it, so a seal's
/// element list always extends the standard list for the same seed. An inverted range
/// collapses to `min`.
pub(crate) fn draw_count(rng: &mut SpecimenRng, min: u32, max: u32, is_seal: bool) -> u32 {
    let u = rng.next_f64();
    let u = if is_seal {
        let biased = 1.0 - (1.0 - u) * (1.0 - u);
        biased.max(u)
    } else {
        u
    };
    let span = f64::from(max.saturating_sub(min)) + 1.0;
    min.saturating_add((u * span) as u32).min(max.max(min))
}

fn place(config: &SceneConfig, index: usize, ux: f64, uy: f64) -> Point {
    let b = config.bounds;
    let w = b.x1 - b.x0;
    let h = b.y1 - b.y0;

    match config.distribution {
        Distribution::Uniform => Point::new(b.x0 + ux * w, b.y0 + uy * h),
        Distribution::Radial => {
            let dx = 2.0 * ux - 1.0;
            let dy = 2.0 * uy - 1.0;
            let falloff = dx.abs().max(dy.abs());
            let cx = b.x0 + w * 0.5;
            let cy = b.y0 + h * 0.5;
            Point::new(cx + dx * falloff * w * 0.5, cy + dy * falloff * h * 0.5)
        }
        Distribution::Clustered { anchors, spread } => {
            let anchor = anchors[index % anchors.len()];
            let nx = clamp_unit(anchor.x + (2.0 * ux - 1.0) * spread);
            let ny = clamp_unit(anchor.y + (2.0 * uy - 1.0) * spread);
            Point::new(b.x0 + nx * w, b.y0 + ny * h)
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/resolve.rs"]
mod tests;
