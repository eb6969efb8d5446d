/// Convenience result type used across the compositor.
pub type SpecimenResult<T> = Result<T, SpecimenError>;

/// Pipeline stage a [`SpecimenError`] was raised in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// PRNG construction from the specimen seed.
    Seed,
    /// Signature, form and chrono lookups feeding the palette.
    Palette,
    /// Scene table lookup and element placement.
    Scene,
    /// Parsing of the classification tags (`kbe`, `hook`).
    Classification,
    /// Catalog loading and validation.
    Catalog,
}

/// Top-level error taxonomy used by compositor APIs.
#[derive(thiserror::Error, Debug)]
pub enum SpecimenError {
    /// A signature key outside the closed signature set.
    #[error("unknown signature '{0}'")]
    UnknownSignature(String),

    /// A form key outside the closed form set.
    #[error("unknown form '{0}'")]
    UnknownForm(String),

    /// A chrono key outside the closed chrono set.
    #[error("unknown chrono '{0}'")]
    UnknownChrono(String),

    /// A KBE tag outside `b`, `e`, `k`.
    #[error("unknown kbe '{0}'")]
    UnknownKbe(String),

    /// A hook verb outside the closed hook set.
    #[error("unknown hook '{0}'")]
    UnknownHook(String),

    /// A scene background outside the twelve archetypes.
    #[error("unknown scene '{0}'")]
    UnknownScene(String),

    /// A seed that is not a finite integer in range.
    #[error("invalid seed: {0}")]
    InvalidSeed(String),

    /// A scene table entry that violates its own invariants.
    #[error("invalid scene config: {0}")]
    InvalidSceneConfig(String),

    /// Invalid catalog data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SpecimenError {
    /// Build a [`SpecimenError::InvalidSeed`] value.
    pub fn invalid_seed(msg: impl Into<String>) -> Self {
        Self::InvalidSeed(msg.into())
    }

    /// Build a [`SpecimenError::InvalidSceneConfig`] value.
    pub fn scene_config(msg: impl Into<String>) -> Self {
        Self::InvalidSceneConfig(msg.into())
    }

    /// Build a [`SpecimenError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`SpecimenError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// The pipeline stage that raised this error.
    pub fn stage(&self) -> Stage {
        match self {
            Self::InvalidSeed(_) => Stage::Seed,
            Self::UnknownSignature(_) | Self::UnknownForm(_) | Self::UnknownChrono(_) => {
                Stage::Palette
            }
            Self::UnknownScene(_) | Self::InvalidSceneConfig(_) => Stage::Scene,
            Self::UnknownKbe(_) | Self::UnknownHook(_) => Stage::Classification,
            Self::Validation(_) | Self::Serde(_) | Self::Other(_) => Stage::Catalog,
        }
    }

    /// The offending key for lookup failures, if any.
    pub fn bad_value(&self) -> Option<&str> {
        match self {
            Self::UnknownSignature(v)
            | Self::UnknownForm(v)
            | Self::UnknownChrono(v)
            | Self::UnknownKbe(v)
            | Self::UnknownHook(v)
            | Self::UnknownScene(v) => Some(v),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
