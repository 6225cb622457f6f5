//! Command execution result type.

use crate::core::error::ShellError;
use crate::models::{OutputLine, VirtualPath};

/// Follow-up a command asks of the session or surface.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Empty the displayed log
    ClearScreen,
    /// The next input line is the new content of the file at this path
    AwaitContent(VirtualPath),
}

/// Result of executing a command.
///
/// Commands produce output and optionally request an effect.
#[derive(Clone, Debug)]
pub struct CommandResult {
    /// Output lines to display
    pub output: Vec<OutputLine>,
    /// Optional follow-up (e.g., `clear`, `edit`)
    pub effect: Option<Effect>,
}

impl CommandResult {
    /// Create a result with just output, no effect.
    pub fn output(lines: Vec<OutputLine>) -> Self {
        Self {
            output: lines,
            effect: None,
        }
    }

    /// Create a result with a single success line.
    pub fn success(message: impl Into<String>) -> Self {
        Self::output(vec![OutputLine::success(message)])
    }

    /// Create a result reporting `err` as one error line.
    pub fn error(err: &ShellError) -> Self {
        Self::output(vec![OutputLine::error(err.to_message())])
    }

    /// Attach an effect to this result.
    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effect = Some(effect);
        self
    }

    /// Create an empty result (no output, no effect).
    pub fn empty() -> Self {
        Self {
            output: vec![],
            effect: None,
        }
    }
}
