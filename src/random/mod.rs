//! Seeded, reproducible randomness.
//!
//! There is no ambient random source anywhere in the crate: every draw goes through a
//! [`prng::SpecimenRng`] built from a caller-supplied seed.

pub mod prng;
