use crate::foundation::error::{SpecimenError, SpecimenResult};

const GOLDEN_GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;
const SEED_SALT: u64 = 0x5EED_C0DE_D15E_A5E5;

/// Float seeds must stay strictly below this magnitude. At `2^53` neighbouring integers
/// start to round onto the same float.
pub const MAX_EXACT_FLOAT_SEED: f64 = 9_007_199_254_740_992.0; // 2^53

/// Deterministic SplitMix64 stream owned by a single specimen resolution.
///
/// The generator is counter based: its state advances by a fixed odd constant per draw
/// and each output is the finalizer applied to that counter. Outputs are computed with
/// integer arithmetic only and scaled to `[0, 1)` at the boundary, so the same seed yields
/// the same sequence on every platform.
///
/// Seeds are mixed through the finalizer once before first use; `0` and negative seeds
/// produce ordinary, non-degenerate streams.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct SpecimenRng {
    seed: i64,
    state: u64,
    draws: u64,
}

impl SpecimenRng {
    pub fn new(seed: i64) -> Self {
        Self {
            seed,
            state: mix64((seed as u64) ^ SEED_SALT),
            draws: 0,
        }
    }

    /// Build a stream from a float seed (as authored in JSON cue definitions).
    ///
    /// Rejects non-finite and fractional values, and values too large to be an exact integer.
    pub fn from_f64(seed: f64) -> SpecimenResult<Self> {
        seed_from_f64(seed).map(Self::new)
    }

    pub fn seed(&self) -> i64 {
        self.seed
    }

    /// Number of 64-bit draws taken so far.
    pub fn draws(&self) -> u64 {
        self.draws
    }

    pub fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(GOLDEN_GAMMA);
        self.draws = self.draws.wrapping_add(1);
        mix64(self.state)
    }

    /// Next float in `[0, 1)` with 53 bits of precision.
    pub fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) * (1.0 / ((1u64 << 53) as f64))
    }

    /// Next float in `[lo, hi)`; a degenerate range `lo == hi` always yields `lo`.
    pub fn next_in_range(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.next_f64()
    }

    /// Next index in `0..n`. Consumes one draw even when `n <= 1`.
    pub fn next_index(&mut self, n: usize) -> usize {
        let u = self.next_f64();
        if n == 0 {
            return 0;
        }
        ((u * n as f64) as usize).min(n - 1)
    }

    /// Advance the stream by `n` draws without producing outputs.
    pub fn skip(&mut self, n: u64) {
        self.state = self.state.wrapping_add(GOLDEN_GAMMA.wrapping_mul(n));
        self.draws = self.draws.wrapping_add(n);
    }
}

pub(crate) fn seed_from_f64(seed: f64) -> SpecimenResult<i64> {
    if !seed.is_finite() {
        return Err(SpecimenError::invalid_seed(format!(
            "seed must be finite, got {seed}"
        )));
    }
    if seed.fract() != 0.0 {
        return Err(SpecimenError::invalid_seed(format!(
            "seed must be an integer, got {seed}"
        )));
    }
    if seed.abs() >= MAX_EXACT_FLOAT_SEED {
        return Err(SpecimenError::invalid_seed(format!(
            "seed magnitude must be < 2^53, got {seed}"
        )));
    }
    Ok(seed as i64)
}

fn mix64(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

#[cfg(test)]
#[path = "../../tests/unit/random/prng.rs"]
mod tests;
