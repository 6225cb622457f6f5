//! Terminal-related data types for output rendering.

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::EntryKind;

/// Text styling for directory listings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextStyle {
    /// Directory entries
    Directory,
    /// Regular file entries
    File,
    /// Hidden files (dot-prefixed)
    Hidden,
}

/// Represents a single line of output in the terminal with a unique ID
#[derive(Clone, Debug)]
pub struct OutputLine {
    /// Unique ID so surfaces can key rendered rows
    pub id: usize,
    /// The actual output data
    pub data: OutputLineData,
}

/// The actual content of an output line
#[derive(Clone, Debug, PartialEq)]
pub enum OutputLineData {
    /// Echo of a submitted line with its prompt
    Command { prompt: String, input: String },
    /// Plain text output
    Text(String),
    /// Error message
    Error(String),
    /// Success message
    Success(String),
    /// Info message
    Info(String),
    /// Empty line
    Empty,
    /// Directory listing entry (ls)
    ListEntry { name: String, style: TextStyle },
}

// Global counter for generating unique IDs
static OUTPUT_LINE_COUNTER: AtomicUsize = AtomicUsize::new(0);

impl OutputLine {
    /// Create a new OutputLine with a unique ID
    fn new(data: OutputLineData) -> Self {
        Self {
            id: OUTPUT_LINE_COUNTER.fetch_add(1, Ordering::Relaxed),
            data,
        }
    }
}

impl PartialEq for OutputLine {
    fn eq(&self, other: &Self) -> bool {
        // Only compare data, not ID
        self.data == other.data
    }
}

impl OutputLine {
    pub fn text(s: impl Into<String>) -> Self {
        Self::new(OutputLineData::Text(s.into()))
    }

    pub fn error(s: impl Into<String>) -> Self {
        Self::new(OutputLineData::Error(s.into()))
    }

    pub fn success(s: impl Into<String>) -> Self {
        Self::new(OutputLineData::Success(s.into()))
    }

    pub fn info(s: impl Into<String>) -> Self {
        Self::new(OutputLineData::Info(s.into()))
    }

    pub fn command(prompt: impl Into<String>, input: impl Into<String>) -> Self {
        Self::new(OutputLineData::Command {
            prompt: prompt.into(),
            input: input.into(),
        })
    }

    /// Create a listing entry styled by its kind
    pub fn list_entry(name: impl Into<String>, kind: EntryKind) -> Self {
        let name = name.into();
        let style = match kind {
            EntryKind::Directory => TextStyle::Directory,
            EntryKind::File if name.starts_with('.') => TextStyle::Hidden,
            EntryKind::File => TextStyle::File,
        };
        Self::new(OutputLineData::ListEntry { name, style })
    }

    /// Create an empty line
    pub fn empty() -> Self {
        Self::new(OutputLineData::Empty)
    }
}

/// Plain-text rendering, one logical line (content may itself span lines).
impl fmt::Display for OutputLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.data {
            OutputLineData::Command { prompt, input } => write!(f, "{} {}", prompt, input),
            OutputLineData::Text(s)
            | OutputLineData::Error(s)
            | OutputLineData::Success(s)
            | OutputLineData::Info(s) => write!(f, "{}", s),
            OutputLineData::Empty => Ok(()),
            OutputLineData::ListEntry { name, .. } => write!(f, "{}", name),
        }
    }
}
