//! Command parsing and execution.
//!
//! This module provides:
//! - `CommandKind`, the closed set of shell commands and its name table
//! - `Command`, a command with its required operands validated
//! - `CommandResult` for command execution results
//! - `execute_input` for running one parsed line against the tree store
//!
//! # Architecture
//!
//! A [`ParsedCommand`] is looked up in the name table, its operands are
//! checked, and the resulting `Command` is executed via `execute_command`.
//! Failures at any step become a single error line; nothing here panics.

mod details;
mod execute;
mod result;

pub use execute::{complete_edit, execute_command};
pub use result::{CommandResult, Effect};

use std::fmt;

use crate::core::VirtualFs;
use crate::core::error::ShellError;
use crate::core::parser::ParsedCommand;

// =============================================================================
// Command Kind
// =============================================================================

/// Every command the shell understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CommandKind {
    Help,
    Detail,
    Mkdir,
    Touch,
    Ls,
    Cd,
    Pwd,
    Rm,
    Open,
    Edit,
    Mv,
    Cp,
    Rename,
    Rmdir,
    Cat,
    Clear,
}

impl CommandKind {
    /// All commands in enumeration order. Autocomplete picks the first
    /// match in this order.
    pub const ALL: [CommandKind; 16] = [
        Self::Help,
        Self::Detail,
        Self::Mkdir,
        Self::Touch,
        Self::Ls,
        Self::Cd,
        Self::Pwd,
        Self::Rm,
        Self::Open,
        Self::Edit,
        Self::Mv,
        Self::Cp,
        Self::Rename,
        Self::Rmdir,
        Self::Cat,
        Self::Clear,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Help => "help",
            Self::Detail => "detail",
            Self::Mkdir => "mkdir",
            Self::Touch => "touch",
            Self::Ls => "ls",
            Self::Cd => "cd",
            Self::Pwd => "pwd",
            Self::Rm => "rm",
            Self::Open => "open",
            Self::Edit => "edit",
            Self::Mv => "mv",
            Self::Cp => "cp",
            Self::Rename => "rename",
            Self::Rmdir => "rmdir",
            Self::Cat => "cat",
            Self::Clear => "clear",
        }
    }

    /// Look up a command by its exact (case-sensitive) name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    /// Get all command names for autocomplete, in enumeration order.
    pub fn names() -> impl Iterator<Item = &'static str> {
        Self::ALL.into_iter().map(Self::name)
    }

    /// Number of operands that must be present.
    pub fn arity(self) -> usize {
        match self {
            Self::Help | Self::Ls | Self::Pwd | Self::Clear => 0,
            Self::Mv | Self::Cp | Self::Rename => 2,
            _ => 1,
        }
    }

    /// Operand description used in missing-argument errors.
    fn requirement(self) -> &'static str {
        match self {
            Self::Detail => "a command name",
            Self::Mkdir | Self::Rmdir => "a folder name",
            Self::Touch | Self::Open | Self::Edit | Self::Cat => "a file name",
            Self::Cd => "a directory name",
            Self::Rm => "a name",
            Self::Mv | Self::Cp => "a source and a destination",
            Self::Rename => "an old and new name",
            Self::Help | Self::Ls | Self::Pwd | Self::Clear => "no arguments",
        }
    }

    /// One-line usage synopsis.
    pub fn usage(self) -> &'static str {
        details::usage(self)
    }

    /// Long-form description shown by `detail`.
    pub fn detail(self) -> &'static str {
        details::description(self)
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

// =============================================================================
// Command
// =============================================================================

/// A command with its required operands present.
///
/// Operands beyond the required count are ignored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Help,
    Detail(String),
    Mkdir(String),
    Touch(String),
    Ls,
    Cd(String),
    Pwd,
    Rm(String),
    Open(String),
    Edit(String),
    Mv { source: String, destination: String },
    Cp { source: String, destination: String },
    Rename { old_name: String, new_name: String },
    Rmdir(String),
    Cat(String),
    Clear,
}

impl Command {
    /// Build a command from a parsed line, validating operand count.
    pub fn parse(parsed: &ParsedCommand) -> Result<Self, ShellError> {
        let kind = CommandKind::from_name(&parsed.name)
            .ok_or_else(|| ShellError::UnknownCommand(parsed.name.clone()))?;

        if parsed.args.len() < kind.arity() {
            return Err(ShellError::MissingArgument {
                command: kind.name(),
                requirement: kind.requirement(),
            });
        }

        let first = || parsed.args[0].clone();
        let second = || parsed.args[1].clone();

        let cmd = match kind {
            CommandKind::Help => Self::Help,
            CommandKind::Detail => Self::Detail(first()),
            CommandKind::Mkdir => Self::Mkdir(first()),
            CommandKind::Touch => Self::Touch(first()),
            CommandKind::Ls => Self::Ls,
            CommandKind::Cd => Self::Cd(first()),
            CommandKind::Pwd => Self::Pwd,
            CommandKind::Rm => Self::Rm(first()),
            CommandKind::Open => Self::Open(first()),
            CommandKind::Edit => Self::Edit(first()),
            CommandKind::Mv => Self::Mv {
                source: first(),
                destination: second(),
            },
            CommandKind::Cp => Self::Cp {
                source: first(),
                destination: second(),
            },
            CommandKind::Rename => Self::Rename {
                old_name: first(),
                new_name: second(),
            },
            CommandKind::Rmdir => Self::Rmdir(first()),
            CommandKind::Cat => Self::Cat(first()),
            CommandKind::Clear => Self::Clear,
        };
        Ok(cmd)
    }
}

// =============================================================================
// Line Execution
// =============================================================================

/// Validate and execute one parsed line.
///
/// `new_file_content` is the initial content given to files made by `touch`.
pub fn execute_input(
    parsed: &ParsedCommand,
    fs: &mut VirtualFs,
    new_file_content: &str,
) -> CommandResult {
    match Command::parse(parsed) {
        Ok(cmd) => execute_command(cmd, fs, new_file_content),
        Err(err) => CommandResult::error(&err),
    }
}

// =============================================================================
// Tests
// =============================================================================
