//! Domain layer — pure types, parsing, and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::process`, or `std::net`.
//! All functions are synchronous and take data in, returning data out.

pub mod error;
pub mod handoff;
pub mod policy;
pub mod target;

pub use error::GateError;
pub use handoff::Handoff;
pub use policy::{GiveUp, RetryPolicy, Step, parse_duration};
pub use target::{DEFAULT_PORT, DEFAULT_SERVICE_NAME, Target, parse_host};
