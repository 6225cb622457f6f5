//! Command line splitting.
//!
//! Input is split on whitespace only: there is no quoting, escaping, or
//! expansion, so a name can never contain a space.

/// A single command line split into name and arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand {
    pub name: String,
    pub args: Vec<String>,
}

/// Split a line into a command name and its arguments.
///
/// Returns `None` for a blank line, which the shell treats as a no-op.
pub fn parse_input(input: &str) -> Option<ParsedCommand> {
    let mut words = input.split_whitespace().map(str::to_string);
    let name = words.next()?;

    Some(ParsedCommand {
        name,
        args: words.collect(),
    })
}
