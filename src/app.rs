//! Session state and the text-in/text-out shell surface.
//!
//! A [`Session`] owns the tree store for its whole lifetime, together with
//! the scroll-back log, command history, and any pending `edit`. Front-ends
//! feed it one line at a time through [`Session::submit`] and render the
//! returned [`Response`].

use tracing::debug;

use crate::config::{APP_NAME, Config, EDIT_PROMPT, WELCOME_TEXT};
use crate::core::{Effect, VirtualFs, complete_edit, execute_input, parse_input};
use crate::models::{OutputLine, VirtualPath};
use crate::utils::RingBuffer;

// ============================================================================
// Response
// ============================================================================

/// Output produced by one submitted line.
#[derive(Clone, Debug, Default)]
pub struct Response {
    /// Lines to append to the displayed log, in order
    pub lines: Vec<OutputLine>,
    /// The surface should empty its displayed log before appending `lines`
    pub clear_screen: bool,
}

// ============================================================================
// Session
// ============================================================================

/// One interactive shell session.
///
/// `edit` is the only two-step command: after it succeeds the session holds
/// the target path, and the next submitted line becomes the file's content
/// instead of being parsed as a command. The tree is untouched until then.
#[derive(Debug)]
pub struct Session {
    fs: VirtualFs,
    config: Config,
    /// Scroll-back log (bounded by `max_output_lines`).
    history: RingBuffer<OutputLine>,
    /// Submitted command lines for up/down navigation.
    command_history: Vec<String>,
    /// Current position in command history (for navigation).
    history_index: Option<usize>,
    /// File awaiting its new content from the next line.
    pending_edit: Option<VirtualPath>,
}

impl Session {
    /// Creates a session with an empty tree.
    ///
    /// The welcome text is logged first unless disabled in the config.
    pub fn new(config: Config) -> Self {
        let fs = VirtualFs::new(config.filesystem.options());
        let mut history = RingBuffer::new(config.terminal.max_output_lines.max(1));

        if config.terminal.welcome {
            history.extend(WELCOME_TEXT.lines().map(OutputLine::text));
            history.push(OutputLine::empty());
        }

        debug!(options = ?fs.options(), "session started");
        Self {
            fs,
            config,
            history,
            command_history: Vec::new(),
            history_index: None,
            pending_edit: None,
        }
    }

    /// Read-only access to the tree store.
    pub fn fs(&self) -> &VirtualFs {
        &self.fs
    }

    /// Scroll-back log, oldest first.
    pub fn output(&self) -> impl Iterator<Item = &OutputLine> {
        self.history.iter()
    }

    /// File a pending `edit` will write, if any.
    pub fn pending_edit(&self) -> Option<&VirtualPath> {
        self.pending_edit.as_ref()
    }

    /// Gets the current prompt string for display.
    ///
    /// Format: `{app_name}:{path} {prompt}`, or the edit prompt while an
    /// `edit` is waiting for content.
    pub fn prompt(&self) -> String {
        if self.pending_edit.is_some() {
            return EDIT_PROMPT.to_string();
        }
        format!(
            "{}:{} {}",
            APP_NAME,
            self.fs.current_path_string(),
            self.config.terminal.prompt
        )
    }

    /// Process one line of input.
    ///
    /// A blank line outside a pending edit is a no-op and produces nothing.
    pub fn submit(&mut self, input: &str) -> Response {
        let input = input.trim_end_matches(['\r', '\n']);

        if let Some(path) = self.pending_edit.take() {
            let mut lines = vec![OutputLine::command(EDIT_PROMPT, input)];
            lines.extend(complete_edit(&path, input, &mut self.fs).output);
            return self.respond(lines);
        }

        let Some(parsed) = parse_input(input) else {
            return Response::default();
        };

        let input = input.trim();
        let prompt = self.prompt();
        self.add_to_command_history(input);

        let result = execute_input(
            &parsed,
            &mut self.fs,
            &self.config.filesystem.default_file_content,
        );

        match result.effect {
            Some(Effect::ClearScreen) => {
                self.history.clear();
                return Response {
                    lines: result.output,
                    clear_screen: true,
                };
            }
            Some(Effect::AwaitContent(path)) => self.pending_edit = Some(path),
            None => {}
        }

        let mut lines = vec![OutputLine::command(prompt, input)];
        lines.extend(result.output);
        self.respond(lines)
    }

    fn respond(&mut self, lines: Vec<OutputLine>) -> Response {
        self.history.extend(lines.iter().cloned());
        Response {
            lines,
            clear_screen: false,
        }
    }

    /// Record a submitted command, collapsing consecutive duplicates.
    ///
    /// Surrounding whitespace is not part of the recorded command.
    pub fn add_to_command_history(&mut self, cmd: &str) {
        let cmd = cmd.trim();
        if !cmd.is_empty() && self.command_history.last().map(String::as_str) != Some(cmd) {
            self.command_history.push(cmd.to_string());
            // Limit command history size
            if self.command_history.len() > self.config.terminal.max_command_history {
                self.command_history.remove(0);
            }
        }
        self.history_index = None;
    }

    /// Step through command history: negative is older, positive is newer.
    ///
    /// Returns `None` once stepping past the newest entry.
    pub fn navigate_history(&mut self, direction: i32) -> Option<String> {
        if self.command_history.is_empty() {
            return None;
        }

        let last = self.command_history.len() - 1;
        let new_index = match self.history_index {
            None if direction < 0 => Some(last),
            Some(i) if direction < 0 && i > 0 => Some(i - 1),
            Some(i) if direction > 0 && i < last => Some(i + 1),
            Some(_) if direction > 0 => None,
            current => current,
        };

        self.history_index = new_index;
        new_index.map(|i| self.command_history[i].clone())
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
