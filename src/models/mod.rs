//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`FsEntry`], [`DirHandle`], [`VirtualPath`] - In-memory tree representation
//! - [`OutputLine`] - Terminal output types

mod filesystem;
mod terminal;

pub use filesystem::{Children, DirHandle, EntryKind, FsEntry, VirtualPath};
pub use terminal::{OutputLine, OutputLineData, TextStyle};
