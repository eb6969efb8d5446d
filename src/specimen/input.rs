use crate::foundation::error::SpecimenResult;
use crate::foundation::keyed::keyed_enum;
use crate::random::prng::seed_from_f64;
use crate::scene::config::SceneBackground;
use crate::tone::modifiers::{Chrono, Form};
use crate::tone::signature::Signature;

keyed_enum! {
    /// Psychological layer of a cue. Classification only: never reaches color math.
    pub enum Kbe: UnknownKbe {
        Believing => "b",
        Embodying => "e",
        Knowing => "k",
    }
}

keyed_enum! {
    /// Interaction verb of a cue. Classification only.
    pub enum Hook: UnknownHook {
        Tap => "tap",
        Drag => "drag",
        Hold => "hold",
        Type => "type",
        Observe => "observe",
    }
}

/// The rendering axes of a cue: everything the palette and motion are derived from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct LookKey {
    pub signature: Signature,
    pub form: Form,
    pub chrono: Chrono,
}

impl LookKey {
    pub fn new(signature: Signature, form: Form, chrono: Chrono) -> Self {
        Self {
            signature,
            form,
            chrono,
        }
    }
}

/// Classification tags, threaded through to the output untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct CueTags {
    pub kbe: Kbe,
    pub hook: Hook,
}

impl CueTags {
    pub fn new(kbe: Kbe, hook: Hook) -> Self {
        Self { kbe, hook }
    }
}

/// Typed compositor input for one cue instance.
///
/// Rendering axes (`look`) and classification tags (`tags`) live in separate structs so
/// palette code can take a [`LookKey`] and never see the tags.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompositorInput {
    #[serde(flatten)]
    pub look: LookKey,
    #[serde(flatten)]
    pub tags: CueTags,
    pub specimen_seed: i64,
    pub is_seal: bool,
}

impl CompositorInput {
    pub fn new(look: LookKey, tags: CueTags, specimen_seed: i64) -> Self {
        Self {
            look,
            tags,
            specimen_seed,
            is_seal: false,
        }
    }

    pub fn sealed(mut self, is_seal: bool) -> Self {
        self.is_seal = is_seal;
        self
    }
}

/// A cue exactly as authored in a catalog: every key is a string until parsed.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CueDefinition {
    pub id: String,
    pub signature: String,
    pub form: String,
    pub chrono: String,
    pub kbe: String,
    pub hook: String,
    pub specimen_seed: f64,
    #[serde(default)]
    pub is_seal: bool,
    pub scene: String,
}

impl CueDefinition {
    /// Parses every key, in pipeline order: seed, signature, form, chrono, scene, then the
    /// classification tags. The first bad key wins.
    pub fn to_input(&self) -> SpecimenResult<(CompositorInput, SceneBackground)> {
        let seed = seed_from_f64(self.specimen_seed)?;
        let look = LookKey::new(
            self.signature.parse()?,
            self.form.parse()?,
            self.chrono.parse()?,
        );
        let scene: SceneBackground = self.scene.parse()?;
        let tags = CueTags::new(self.kbe.parse()?, self.hook.parse()?);
        Ok((
            CompositorInput::new(look, tags, seed).sealed(self.is_seal),
            scene,
        ))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/specimen/input.rs"]
mod tests;
