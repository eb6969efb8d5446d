//! Cue inputs, specimen assembly and catalog batches.

pub mod assemble;
pub mod catalog;
pub mod fingerprint;
pub mod input;
