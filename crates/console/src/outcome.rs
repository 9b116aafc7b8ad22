//! Per-command result of validating and dispatching a console command.

/// What a command handler did with its arguments.
///
/// Commands disagree on how malformed input is reported: some answer "handled"
/// (`true`) after printing a hint, others answer `false`. Each handler picks the
/// variant that matches its own contract; `succeeded` gives the boolean the
/// shell sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum CommandOutcome {
    /// The executor was called; carries the verdict reported for the command.
    Dispatched(bool),
    /// Nothing reached the executor, but the command reports itself handled.
    Acknowledged,
    /// Rejected before the executor; a diagnostic was printed.
    Rejected,
    /// Rejected before the executor without printing a diagnostic of its own.
    RejectedSilently,
}

impl CommandOutcome {
    #[inline]
    #[must_use]
    pub const fn succeeded(self) -> bool {
        match self {
            CommandOutcome::Dispatched(ok) => ok,
            CommandOutcome::Acknowledged => true,
            CommandOutcome::Rejected | CommandOutcome::RejectedSilently => false,
        }
    }
}

impl From<CommandOutcome> for bool {
    fn from(outcome: CommandOutcome) -> Self {
        outcome.succeeded()
    }
}
