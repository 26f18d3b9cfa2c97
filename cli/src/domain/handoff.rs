//! The command the gate hands off to once the service is ready.

/// Program and arguments, passed through verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Handoff {
    program: String,
    args: Vec<String>,
}

impl Handoff {
    #[must_use]
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Split an argv into program and arguments. Returns `None` when empty.
    #[must_use]
    pub fn from_argv(argv: Vec<String>) -> Option<Self> {
        let mut argv = argv.into_iter();
        let program = argv.next()?;
        Some(Self::new(program, argv.collect()))
    }

    #[must_use]
    pub fn program(&self) -> &str {
        &self.program
    }

    #[must_use]
    pub fn args(&self) -> &[String] {
        &self.args
    }
}
