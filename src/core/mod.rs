//! Core logic of the shell.
//!
//! This module provides:
//! - [`VirtualFs`], the in-memory tree store and current-directory cursor
//! - [`parse_input`] and [`Command`] parsing, [`execute_input`] execution
//! - [`autocomplete`] for command-name completion

mod autocomplete;
mod commands;
pub mod error;
mod filesystem;
mod parser;

pub use autocomplete::{autocomplete, candidates};
pub use commands::{
    Command, CommandKind, CommandResult, Effect, complete_edit, execute_command, execute_input,
};
pub use filesystem::{CopyMode, DirEntry, FsOptions, ResolveMode, VirtualFs};
pub use parser::{ParsedCommand, parse_input};
