//! Command implementations

pub mod gate;
