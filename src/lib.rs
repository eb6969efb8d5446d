//! Deterministic specimen compositor.
//!
//! Turns a cue's typed axes (signature, form, chrono) and its seed into a [`Specimen`]: a
//! color palette, a positioned set of background scene elements and a motion profile. The
//! same input always yields bit-identical output on every platform.
//!
//! - Parse authored keys into the closed enums ([`Signature`], [`Form`], [`Chrono`], ...)
//! - Build a [`CompositorInput`] and call [`resolve_specimen`]
//! - Or load a whole [`Catalog`] and call [`resolve_catalog`]
#![forbid(unsafe_code)]

mod foundation;

pub mod motion;
pub mod random;
pub mod scene;
pub mod specimen;
pub mod tone;

pub use crate::foundation::core::{Hsla, Point, Rect, Rgba8Premul};
pub use crate::foundation::error::{SpecimenError, SpecimenResult, Stage};
pub use crate::foundation::math::hue_distance;

pub use crate::motion::profile::{MotionProfile, resolve_motion};
pub use crate::random::prng::{MAX_EXACT_FLOAT_SEED, SpecimenRng};
pub use crate::scene::config::{
    Distribution, SceneBackground, SceneBehavior, SceneConfig, scene_config,
};
pub use crate::scene::resolve::{ResolvedScene, SceneElement, resolve_scene, resolve_scene_by_key};
pub use crate::specimen::assemble::{Specimen, resolve_cue, resolve_specimen};
pub use crate::specimen::catalog::{Catalog, CatalogEntry, CatalogReport, resolve_catalog};
pub use crate::specimen::fingerprint::SpecimenFingerprint;
pub use crate::specimen::input::{CompositorInput, CueDefinition, CueTags, Hook, Kbe, LookKey};
pub use crate::tone::modifiers::{Chrono, Form, ToneBase, apply_chrono, apply_form};
pub use crate::tone::palette::{Palette, compose_palette, resolve_tone};
pub use crate::tone::signature::{
    MIN_HUE_SEPARATION_DEG, Signature, SignatureBase, resolve_signature_base,
};
