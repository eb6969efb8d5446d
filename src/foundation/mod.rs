pub mod core;
pub mod error;
pub(crate) mod keyed;
pub(crate) mod math;
