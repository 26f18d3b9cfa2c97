//! Infrastructure layer — concrete implementations of application port traits.
//!
//! This module contains all I/O-performing code: TCP probing, process
//! replacement, and tracing setup.
//!
//! Imports from `crate::domain` and `crate::application::ports` are allowed.
//! Imports from `crate::commands` or `crate::output` are forbidden.

pub mod handoff;
pub mod logging;
pub mod network;
