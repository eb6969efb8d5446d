//! Palette derivation: signature table, form/chrono modifiers, role composition.

pub mod modifiers;
pub mod palette;
pub mod signature;
