//! Background scenes: the fixed archetype table and seeded element placement.

pub mod config;
pub mod resolve;
