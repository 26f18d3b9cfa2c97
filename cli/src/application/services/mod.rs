//! Application services.

pub mod gate;
