//! Motion parameters derived from the form family and time of day.

pub mod profile;
