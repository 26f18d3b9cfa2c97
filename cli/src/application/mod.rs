//! Application layer — the readiness loop, written against port traits.
//!
//! Imports only from `crate::domain`; infrastructure and presentation are
//! supplied by the caller.

pub mod ports;
pub mod services;
