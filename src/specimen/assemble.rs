use crate::foundation::error::SpecimenResult;
use crate::motion::profile::{MotionProfile, resolve_motion};
use crate::random::prng::SpecimenRng;
use crate::scene::config::{SceneBackground, SceneConfig};
use crate::scene::resolve::{SceneElement, resolve_scene};
use crate::specimen::fingerprint::{SpecimenFingerprint, fingerprint_specimen};
use crate::specimen::input::{CompositorInput, CueDefinition, Hook, Kbe, LookKey};
use crate::tone::palette::{Palette, compose_palette};

/// Everything a renderer needs to draw one cue instance.
///
/// Palette and motion depend only on the look and the seal flag. Elements depend on the seed
/// and the scene. Classification tags are carried through untouched.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Specimen {
    #[serde(flatten)]
    pub look: LookKey,
    pub kbe: Kbe,
    pub hook: Hook,
    pub specimen_seed: i64,
    pub is_seal: bool,
    pub palette: Palette,
    pub scene_config: SceneConfig,
    pub elements: Vec<SceneElement>,
    pub motion: MotionProfile,
    #[serde(skip)]
    rng: SpecimenRng,
}

impl Specimen {
    pub fn scene(&self) -> SceneBackground {
        self.scene_config.scene
    }

    /// A copy of the specimen's PRNG, positioned after the scene's last draw.
    ///
    /// Callers that need extra randomness (particle jitter, audio variation) draw from this
    /// handle so they never perturb the committed elements.
    pub fn rng(&self) -> SpecimenRng {
        self.rng
    }

    pub fn fingerprint(&self) -> SpecimenFingerprint {
        fingerprint_specimen(self)
    }
}

/// Resolves one cue instance into a [`Specimen`].
///
/// The only fallible step for typed input is the scene table check; unknown keys are rejected
/// earlier, when strings are parsed into the closed enums.
#[tracing::instrument(skip_all, fields(seed = input.specimen_seed, scene = %scene))]
pub fn resolve_specimen(
    input: &CompositorInput,
    scene: SceneBackground,
) -> SpecimenResult<Specimen> {
    let look = input.look;
    let mut rng = SpecimenRng::new(input.specimen_seed);

    let palette = compose_palette(look.signature, look.form, look.chrono, input.is_seal);
    let resolved = resolve_scene(scene, &mut rng, input.is_seal)?;
    let motion = resolve_motion(look.form, look.chrono, input.is_seal);

    tracing::debug!(
        elements = resolved.elements.len(),
        draws = rng.draws(),
        "specimen resolved"
    );

    Ok(Specimen {
        look,
        kbe: input.tags.kbe,
        hook: input.tags.hook,
        specimen_seed: input.specimen_seed,
        is_seal: input.is_seal,
        palette,
        scene_config: resolved.config,
        elements: resolved.elements,
        motion,
        rng,
    })
}

/// Parses an authored cue and resolves it.
pub fn resolve_cue(cue: &CueDefinition) -> SpecimenResult<Specimen> {
    let (input, scene) = cue.to_input()?;
    resolve_specimen(&input, scene)
}

#[cfg(test)]
#[path = "../../tests/unit/specimen/assemble.rs"]
mod tests;
