//! `TerminalReporter` — Presentation-layer implementation of `ProgressReporter`.
//!
//! Wraps `&OutputContext` and implements the `application::ports::ProgressReporter`
//! trait so the readiness loop can emit notices without depending on any
//! presentation type directly.

use crate::application::ports::ProgressReporter;
use crate::domain::Target;
use crate::output::OutputContext;

/// Terminal progress reporter that wraps an `OutputContext`.
///
/// - `waiting()` prints `"Waiting for {label}..."` (suppressed when `ctx.quiet`)
/// - `ready()` prints `"{Label} is ready!"` (suppressed when `ctx.quiet`)
pub struct TerminalReporter<'a> {
    ctx: &'a OutputContext,
    label: &'a str,
}

impl<'a> TerminalReporter<'a> {
    /// Create a reporter naming the service `label` in its notices.
    #[must_use]
    pub fn new(ctx: &'a OutputContext, label: &'a str) -> Self {
        Self { ctx, label }
    }
}

impl ProgressReporter for TerminalReporter<'_> {
    fn waiting(&self, _target: &Target, _attempt: u32) {
        self.ctx.pending(&waiting_message(self.label));
    }

    fn ready(&self, _target: &Target, _attempts: u32) {
        self.ctx.success(&ready_message(self.label));
    }
}

/// `Waiting for database...`
#[must_use]
pub fn waiting_message(label: &str) -> String {
    format!("Waiting for {label}...")
}

/// `Database is ready!`
#[must_use]
pub fn ready_message(label: &str) -> String {
    format!("{} is ready!", capitalize(label))
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
