//! An interactive shell over a purely in-memory file tree.
//!
//! - [`core`] holds the tree store, command parsing and execution
//! - [`app::Session`] wraps them into a line-at-a-time shell
//! - [`config`] carries constants and the optional TOML configuration

pub mod app;
pub mod config;
pub mod core;
pub mod models;
pub mod utils;
